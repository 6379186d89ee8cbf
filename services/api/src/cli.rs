use crate::demo::{run_demo, DemoArgs};
use crate::report::{run_batch, run_quick, run_screen, BatchArgs, QuickArgs, ScreenArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use jobtegrity::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Jobtegrity",
    about = "Screen job postings for scam risk from the command line or over HTTP",
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
    /// Screen a single job posting given as flags or a JSON file
    Screen(ScreenArgs),
    /// Screen free text such as a pasted recruiter email
    Quick(QuickArgs),
    /// Screen every row of a job listing CSV export
    Batch(BatchArgs),
    /// Screen a set of built-in sample postings
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
        Command::Screen(args) => run_screen(args),
        Command::Quick(args) => run_quick(args),
        Command::Batch(args) => run_batch(args),
        Command::Demo(args) => run_demo(args),
    }
}
