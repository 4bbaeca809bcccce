use anyhow::{bail, Context, Result};
use log::{info, warn};
use std::path::PathBuf;

use collision_data::binary::{Endianness, RecordFileWriter};
use collision_data::collector::{EventCollector, ExtractionConfig};

use super::config::Config;

/// Options of the extract command after argument parsing
pub struct ExtractArgs {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub cap: Option<usize>,
    pub batch_size: Option<usize>,
    pub config: Option<PathBuf>,
    pub summary: Option<PathBuf>,
    pub byte_order: Option<Endianness>,
}

impl ExtractArgs {
    /// Defaults, then the config file, then flags
    fn resolve_config(&self) -> Result<ExtractionConfig> {
        let file_config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        let mut config = file_config.apply(ExtractionConfig::default());

        if let Some(cap) = self.cap {
            config.event_cap = cap;
        }
        if let Some(batch_size) = self.batch_size {
            config.reader.batch_size = batch_size;
        }
        if let Some(byte_order) = self.byte_order {
            config.layout.byte_order = byte_order;
        }
        Ok(config)
    }
}

/// Keep inputs that exist, warning about the rest
fn existing_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    inputs
        .iter()
        .filter(|path| {
            let exists = path.is_file();
            if !exists {
                warn!("Input file not found, skipping: {}", path.display());
            }
            exists
        })
        .cloned()
        .collect()
}

/// Run the full extraction pipeline
pub fn run(args: ExtractArgs) -> Result<()> {
    let config = args.resolve_config()?;

    let inputs = existing_inputs(&args.inputs);
    if inputs.is_empty() {
        bail!(
            "None of the {} input file(s) exist; nothing to extract",
            args.inputs.len()
        );
    }

    info!(
        "Extracting up to {} events from {} file(s)",
        config.event_cap,
        inputs.len()
    );
    let mut collector =
        EventCollector::new(&config).context("Invalid extraction configuration")?;
    let outcome = collector
        .collect(&inputs)
        .context("Event collection failed")?;

    for warning in &outcome.summary.warnings {
        warn!("{}", warning);
    }

    let mut writer = RecordFileWriter::create(&args.output, config.layout)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    writer
        .write_records(&outcome.records)
        .context("Failed to write records")?;
    let stats = writer
        .finish()
        .with_context(|| format!("Failed to finalize {}", args.output.display()))?;
    info!("{} to {}", stats, args.output.display());

    print!("{}", outcome.summary.format_colored());
    println!("Output: {} ({} bytes)", args.output.display(), stats.bytes_written);

    if let Some(path) = &args.summary {
        let json = serde_json::to_string_pretty(&outcome.summary)
            .context("Failed to serialize summary")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write summary: {}", path.display()))?;
        info!("Summary written to {}", path.display());
    }

    Ok(())
}
