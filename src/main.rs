//! Loan Advisor CLI entrypoint.
//!
//! One positional question, one diagnostics flag. The answer prints to
//! stdout under a labeled banner; trace output and errors go to stderr so
//! the answer stays pipeable.

use clap::Parser;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use loan_advisor::adapters::ai::{OpenAiConfig, OpenAiProvider};
use loan_advisor::adapters::search::{HttpSearchClient, HttpSearchConfig};
use loan_advisor::adapters::trace::TracingSink;
use loan_advisor::application::WorkflowEngine;
use loan_advisor::config::{AppConfig, ValidationError};

const BANNER: &str =
    "================================================================================";

#[derive(Parser, Debug)]
#[command(
    name = "loan-advisor",
    version,
    about = "Answer loan product questions directly or via hybrid search"
)]
struct Cli {
    /// Question to answer
    question: String,

    /// Emit workflow trace output
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(&cli).await {
        Ok(answer) => {
            println!("\n{BANNER}");
            println!("Answer");
            println!("{BANNER}");
            println!("{answer}");
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

async fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let api_key = config.completion.api_key.clone().ok_or(
        ValidationError::MissingRequired("LOAN_ADVISOR__COMPLETION__API_KEY"),
    )?;

    let provider = Arc::new(OpenAiProvider::new(
        OpenAiConfig::new(api_key)
            .with_model(&config.completion.model)
            .with_base_url(&config.completion.base_url)
            .with_temperature(config.completion.temperature)
            .with_timeout(config.completion.timeout()),
    ));
    let search = Arc::new(HttpSearchClient::new(
        HttpSearchConfig::new(&config.search.base_url).with_timeout(config.search.timeout()),
    ));

    let engine = WorkflowEngine::new(
        provider,
        search,
        Arc::new(TracingSink::new()),
        config.search.top_k,
    );

    tracing::debug!(target: "workflow", question = %cli.question, "starting workflow");
    let state = engine.run(&cli.question, cli.debug).await?;

    Ok(state.answer().unwrap_or_default().to_string())
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "info,workflow=debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
