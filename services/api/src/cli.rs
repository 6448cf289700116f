use crate::report::{run_assess, run_compare, AssessArgs, CompareArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use impact_analyzer::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Environmental Impact Analyzer",
    about = "Score the environmental impact of products from their descriptions",
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
    /// Assess a single product and print its score breakdown
    Assess(AssessArgs),
    /// Assess several products from a JSON file and compare them side by side
    Compare(CompareArgs),
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
        Command::Assess(args) => run_assess(args),
        Command::Compare(args) => run_compare(args),
    }
}
