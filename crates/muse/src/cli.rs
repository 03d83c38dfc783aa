//! CLI definitions and command handlers.

use clap::{Parser, Subcommand};
use muse_core::Record;
use muse_flow::{FlowInvoker, creative_flows};
use muse_models::{GeminiClient, ModelConfig};

/// Creative-writing assistant flows over hosted generative models.
#[derive(Parser)]
#[command(name = "muse", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List registered flows and their input fields
    List,

    /// Invoke a flow with a JSON input record
    Invoke {
        /// Flow name, e.g. "poem-stanza"
        flow: String,

        /// Input record as a JSON object, e.g. '{"theme": "loss"}'
        #[arg(short, long)]
        input: String,

        /// Override the default text model
        #[arg(short, long)]
        model: Option<String>,
    },
}

/// Print registered flows with their declared fields.
pub fn list_flows() -> Result<(), Box<dyn std::error::Error>> {
    let registry = creative_flows()?;
    for flow in registry.iter() {
        println!("{}: {}", flow.name(), flow.description());
        for (field, spec) in flow.input().fields() {
            let required = if *spec.required() { "required" } else { "optional" };
            println!("    {} ({})", field, required);
        }
    }
    Ok(())
}

/// Invoke a flow and print the output record as pretty JSON.
pub async fn invoke_flow(
    flow: &str,
    input: &str,
    model: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    let record = Record::from_value(value).ok_or("input must be a JSON object")?;

    let config = match model {
        Some(text_model) => {
            let defaults = ModelConfig::from_env();
            ModelConfig::new(text_model, defaults.image_model().clone())
        }
        None => ModelConfig::from_env(),
    };

    let driver = GeminiClient::with_config(config)?;
    let invoker = FlowInvoker::new(driver, creative_flows()?);

    let output = invoker.invoke(flow, &record).await?;
    println!("{}", serde_json::to_string_pretty(&output.into_value())?);
    Ok(())
}
