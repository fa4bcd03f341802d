pub(crate) mod score;

use crate::Cli;
use crate::CommandResult;
use score::ScoreCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-complexity")]
pub(crate) enum CommandEnum {
    /// Score the operations in one or more GraphQL files.
    Score(Box<ScoreCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Score(cmd) => cmd.run(cli).await
        }
    }
}
