// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use ifc_faiss_docs::config::DEFAULT_CONFIG_PATH;
use ifc_faiss_docs::utils::logging::{format_error, format_success, init_logger};
use ifc_faiss_docs::{Config, Pipeline, SummarizerBackend};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "ifc_faiss_docs")]
#[command(version)]
#[command(about = "Convert an IFC element export into FAISS documents", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// IFC element export to read (overrides paths.input)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Where to write the documents (overrides paths.output)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let color = cli.color;

    if let Err(e) = run(cli).await {
        eprintln!("{}", format_error(&format!("{:#}", e), color));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    init_logger(cli.color, cli.verbose);

    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(input) = cli.input {
        config.paths.input = input;
    }
    if let Some(output) = cli.output {
        config.paths.output = output;
    }

    let summarizer = SummarizerBackend::from_config(&config.summarizer)
        .context("Failed to initialize summarizer")?;

    let output = config.paths.output.clone();
    let pipeline = Pipeline::new(summarizer, config);
    pipeline.run().await.context("Document export failed")?;

    println!(
        "{}",
        format_success(
            &format!("FAISS documents exported to '{}'", output.display()),
            cli.color
        )
    );

    Ok(())
}
