//! Property schema table generator.
//!
//! Fetches the upstream modifier source and regenerates the schema table
//! consumed by `proptype-access`.
//!
//! Usage:
//!   cargo run --bin proptype-extract -- --output crates/proptype-access/src/schema/generated.rs

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use proptype_core::tracing::init_tracing;
use proptype_core::ProptypeConfig;
use proptype_extract::fetch::StaticFetcher;
use proptype_extract::ExtractPipeline;

#[derive(Parser, Debug)]
#[command(about = "Regenerate the property schema table from the upstream modifier source")]
struct Args {
    /// TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Source URL (overrides config)
    #[arg(long, value_name = "URL")]
    source_url: Option<String>,

    /// Read the source from a local file instead of fetching it
    #[arg(long, value_name = "FILE", conflicts_with = "source_url")]
    source_file: Option<PathBuf>,

    /// Output file (overrides config)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the generated file to stdout instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ProptypeConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ProptypeConfig::default(),
    };
    init_tracing(&config.observability);

    if let Some(url) = args.source_url {
        config.extract.source_url = Some(url);
    }
    if let Some(output) = &args.output {
        config.extract.output_path = Some(output.to_string_lossy().into_owned());
    }
    config.validate().context("invalid configuration")?;

    match &args.source_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading source {}", path.display()))?;
            let pipeline = ExtractPipeline::with_fetcher(config.extract, StaticFetcher::new(text))
                .with_provenance(path.display().to_string());
            execute(&pipeline, args.stdout, args.json)
        }
        None => {
            let pipeline = ExtractPipeline::from_config(config.extract)
                .context("building HTTP client")?;
            execute(&pipeline, args.stdout, args.json)
        }
    }
}

fn execute<F: proptype_extract::fetch::SourceFetcher>(
    pipeline: &ExtractPipeline<F>,
    to_stdout: bool,
    json: bool,
) -> Result<()> {
    if to_stdout {
        let rendered = pipeline.render().context("extraction failed")?;
        std::io::stdout()
            .write_all(rendered.contents.as_bytes())
            .context("writing to stdout")?;
        return Ok(());
    }

    let report = pipeline.run().context("extraction failed")?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    }
    Ok(())
}
