//! Handler for the `evaluate` subcommand

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use log::info;

use crate::classify::{CentroidModel, ResolutionPolicy};
use crate::config::BandmapConfig;
use crate::core::{AttemptRequest, Taxonomy};
use crate::engine::Engine;
use crate::io::output::{JsonWriter, MarkdownWriter};
use crate::io::{create_writer, OutputFormat, OutputWriter};

pub struct EvaluateOptions {
    pub path: PathBuf,
    pub model: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub policy: Option<ResolutionPolicy>,
    pub taxonomy: Option<Taxonomy>,
}

pub fn evaluate_attempt(options: EvaluateOptions) -> Result<()> {
    let settings = BandmapConfig::load_or_default(options.config.as_deref())?;

    let mut engine_config = settings.engine;
    if let Some(policy) = options.policy {
        engine_config.policy = policy;
    }
    if let Some(taxonomy) = options.taxonomy {
        engine_config.taxonomy = taxonomy;
    }

    let model_path = options.model.unwrap_or_else(|| settings.model.path.clone());
    let classifier = Arc::new(CentroidModel::from_path(&model_path)?);
    info!("loaded model artifact from {}", model_path.display());

    let file = File::open(&options.path)
        .with_context(|| format!("cannot open attempt file {}", options.path.display()))?;
    let request: AttemptRequest = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot parse attempt file {}", options.path.display()))?;

    let engine = Engine::new(classifier, engine_config);
    let record = engine.evaluate(&request)?;

    match options.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("cannot create output file {}", path.display()))?;
            let mut writer: Box<dyn OutputWriter> = match options.format {
                OutputFormat::Json => Box::new(JsonWriter::new(file)),
                OutputFormat::Markdown => Box::new(MarkdownWriter::new(file)),
                OutputFormat::Terminal => bail!("terminal format writes to stdout; pick json or markdown for --output"),
            };
            writer.write_result(&record)?;
            info!("wrote result to {}", path.display());
        }
        None => create_writer(options.format).write_result(&record)?,
    }

    Ok(())
}
