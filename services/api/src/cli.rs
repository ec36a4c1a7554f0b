use crate::commands::{run_batch, run_classify, run_questions, BatchArgs, ClassifyArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dry_eye::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Dry Eye Questionnaire",
    about = "Serve and run the dry eye self-assessment questionnaire from the command line",
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
    /// Print the questionnaire sections and questions
    Questions,
    /// Classify one questionnaire and print the report
    Classify(ClassifyArgs),
    /// Classify every answer sheet in a CSV export
    Batch(BatchArgs),
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
        Command::Questions => run_questions(),
        Command::Classify(args) => run_classify(args),
        Command::Batch(args) => run_batch(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::OutputFormat;

    #[test]
    fn no_subcommand_falls_back_to_serve() {
        let cli = Cli::try_parse_from(["dry-eye-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn classify_accepts_repeated_answers() {
        let cli = Cli::try_parse_from([
            "dry-eye-api",
            "classify",
            "--answer",
            "1=4",
            "--answer",
            "q20=si",
            "--format",
            "html",
            "--allow-incomplete",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Classify(args)) => {
                assert_eq!(
                    args.answer,
                    vec![
                        ("1".to_string(), "4".to_string()),
                        ("q20".to_string(), "si".to_string()),
                    ]
                );
                assert_eq!(args.format, OutputFormat::Html);
                assert!(args.allow_incomplete);
            }
            other => panic!("expected classify command, got {other:?}"),
        }
    }

    #[test]
    fn classify_rejects_malformed_answer_pairs() {
        let err = Cli::try_parse_from(["dry-eye-api", "classify", "--answer", "4"])
            .expect_err("pair without value rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn classify_answers_file_conflicts_with_inline_answers() {
        let err = Cli::try_parse_from([
            "dry-eye-api",
            "classify",
            "--answers",
            "answers.json",
            "--answer",
            "1=2",
        ])
        .expect_err("conflicting sources rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
