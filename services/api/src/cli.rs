use crate::console::{run_questions, run_score, run_take};
use crate::server;
use analyst_fit::assessment::Section;
use analyst_fit::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Analyst Fit",
    about = "Take, score and serve the Market Research Analyst self-assessment",
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
    /// Take the assessment interactively in the terminal
    Take(TakeArgs),
    /// Score a completed answer sheet (CSV or JSON)
    Score(ScoreArgs),
    /// List the question bank
    Questions(QuestionsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Accept answer values outside a question's options
    #[arg(long)]
    pub(crate) lenient: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TakeArgs {
    /// Accept answer values outside a question's options
    #[arg(long)]
    pub(crate) lenient: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer sheet; `.json` files are read as JSON, anything else as `question_id,value` CSV
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Accept answer values outside a question's options
    #[arg(long)]
    pub(crate) lenient: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Only list one section (psychometric, technical or wiscar)
    #[arg(long, value_parser = crate::infra::parse_section)]
    pub(crate) section: Option<Section>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Take(args) => run_take(args),
        Command::Score(args) => run_score(args),
        Command::Questions(args) => run_questions(args),
    }
}
