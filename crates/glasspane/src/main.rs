mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "glasspane",
    version,
    about = "A transparent click-through overlay with an immediate-mode render loop"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Show the overlay until its window is destroyed
    Run(commands::run::RunArgs),
    /// Check configuration and display setup
    Doctor,
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Run(args) => commands::run::execute(&args),
        Commands::Doctor => commands::doctor::execute(),
    };

    std::process::exit(code);
}
