use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lead_qualifier::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Lead Qualifier",
    about = "Score project intake forms and serve the lead qualification API",
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
    /// Score a single intake form from a JSON file or command-line flags
    Score(ScoreArgs),
    /// Run sample leads through intake and print their qualification
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
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["lead-qualifier"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_accepts_flag_form() {
        let cli = Cli::try_parse_from([
            "lead-qualifier",
            "score",
            "--budget",
            "100k+",
            "--timeline",
            "6+months",
            "--project-type",
            "ai-integration",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.budget.as_deref(), Some("100k+"));
                assert!(args.json);
                assert!(args.file.is_none());
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["lead-qualifier", "serve", "--port", "8088"])
            .expect("parses");

        match cli.command {
            Some(Command::Serve(args)) => assert_eq!(args.port, Some(8088)),
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
