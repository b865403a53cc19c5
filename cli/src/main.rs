pub mod commands;

use clap::Parser;
use commands::Commands;
use log::error;
use shared::{env, logger};

/// 🌀 Mandelbrot set renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    env::init();
    logger::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::View(args) => commands::view::run(args).await,
    };

    if let Err(e) = outcome {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}
