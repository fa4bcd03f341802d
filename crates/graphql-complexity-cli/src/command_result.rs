use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// A failed run whose only output is `fmt_args` on stderr.
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    /// Per-file report lines on stdout, failures on stderr. The run fails if
    /// anything was written to stderr.
    pub fn report(stdout_lines: Vec<String>, stderr_lines: Vec<String>) -> Self {
        let exit_code =
            if stderr_lines.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        Self {
            exit_code,
            stderr: (!stderr_lines.is_empty()).then(|| stderr_lines.join("\n")),
            stdout: (!stdout_lines.is_empty()).then(|| stdout_lines.join("\n")),
        }
    }
}
