mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

/// Installs the stderr `tracing` subscriber. `-v` wins over `LOG_LEVEL`.
fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) =
        if cli.verbose {
            (tracing::Level::DEBUG, None)
        } else {
            match parse_log_level(env_val.as_deref()) {
                Ok(level) => (level, None),
                Err(warning) => (DEFAULT_LOG_LEVEL, Some(warning)),
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// Reads a `LOG_LEVEL` value. Unset means the default level.
pub(crate) fn parse_log_level(value: Option<&str>) -> Result<tracing::Level, String> {
    let Some(value) = value.map(str::trim) else {
        return Ok(DEFAULT_LOG_LEVEL);
    };
    match value.to_ascii_lowercase().as_str() {
        "trace" => Ok(tracing::Level::TRACE),
        "debug" | "verbose" => Ok(tracing::Level::DEBUG),
        "info" => Ok(tracing::Level::INFO),
        _ => Err(format!(
            "Invalid `LOG_LEVEL` environment variable value: `{value}`"
        )),
    }
}
