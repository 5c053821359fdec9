use crate::commands::{
    run_history, run_score, run_tests, HistoryCommand, ScoreArgs, TestsCommand,
};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use characterify::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Characterify",
    about = "Take, score, and review personality questionnaires from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Browse the built-in questionnaires
    Tests {
        #[command(subcommand)]
        command: TestsCommand,
    },
    /// Score a JSON answer file and print the report
    Score(ScoreArgs),
    /// Inspect, export, or import saved results
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
    /// Score every questionnaire with a synthetic answer pattern
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Tests { command } => run_tests(command),
        Command::Score(args) => run_score(args),
        Command::History { command } => run_history(command),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_history_export() {
        let cli = Cli::try_parse_from([
            "characterify-api",
            "history",
            "export",
            "--format",
            "csv",
            "--out",
            "results.csv",
        ])
        .expect("arguments parse");
        assert!(matches!(
            cli.command,
            Some(Command::History {
                command: HistoryCommand::Export(_)
            })
        ));
    }

    #[test]
    fn serve_is_the_default() {
        let cli = Cli::try_parse_from(["characterify-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
