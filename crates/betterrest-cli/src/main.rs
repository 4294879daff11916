use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "betterrest-cli", version, about = "BetterRest CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bedtime estimation
    Bedtime {
        #[command(subcommand)]
        action: commands::bedtime::BedtimeAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Sleep model management
    Model {
        #[command(subcommand)]
        action: commands::model::ModelAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Bedtime { action } => commands::bedtime::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Model { action } => commands::model::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
