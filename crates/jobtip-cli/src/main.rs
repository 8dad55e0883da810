mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::io::IsTerminal;

#[derive(Parser)]
#[command(
    name = "jobtip",
    about = "Explain job status codes the way the jobs list tooltip does",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tooltip for one or more status codes
    Show {
        /// Status codes, e.g. running or successful
        #[arg(required = true)]
        statuses: Vec<String>,

        /// Text to print when a status has no tooltip (text output only)
        #[arg(long, env = "JOBTIP_FALLBACK")]
        fallback: Option<String>,

        /// Fail on status codes the job system does not emit
        #[arg(long)]
        strict: bool,
    },

    /// List every status code that has a tooltip
    List,

    /// List every status the job system reports, with its lifecycle stage
    Statuses,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Show {
            statuses,
            fallback,
            strict,
        } => cmd::show::run(&statuses, fallback.as_deref(), strict, cli.json),
        Commands::List => cmd::list::run(cli.json),
        Commands::Statuses => cmd::statuses::run(cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
