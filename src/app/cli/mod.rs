//! CLI adapter.

mod logging;
mod run;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "skulens")]
#[command(version)]
#[command(
    about = "Classify catalog products by sending their images to a multimodal model",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch product rows with SQL and analyze each product's images
    #[clap(visible_alias = "r")]
    Run(run::RunArgs),
}

pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Run(args) => run::run_analysis(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
