//! Muse CLI binary.
//!
//! Command-line access to the built-in creative-writing flows:
//! - List registered flows and their fields
//! - Invoke a flow with a JSON input record

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, invoke_flow, list_flows};

    // Load .env if present; credentials stay environment-supplied
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::List => {
            list_flows()?;
        }

        Commands::Invoke { flow, input, model } => {
            invoke_flow(&flow, &input, model).await?;
        }
    }

    Ok(())
}
