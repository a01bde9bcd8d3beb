use crate::demo::{run_demo, run_qualify, DemoArgs, QualifyArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_qualifier::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Educational Credit Qualifier",
    about = "Run the educational credit qualification service and demos from the command line",
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
    /// Evaluate a single applicant from flags or a named sample profile
    Qualify(QualifyArgs),
    /// Run every sample applicant through the engine and print the outcomes
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
        Command::Qualify(args) => run_qualify(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
