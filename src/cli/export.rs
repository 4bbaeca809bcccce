use anyhow::{Context, Result};
use std::path::PathBuf;

use collision_data::binary::{default_csv_path, export_csv, RecordLayout};

/// Export a record file as CSV
pub fn run(file: PathBuf, output: Option<PathBuf>, layout: RecordLayout) -> Result<()> {
    let output = output.unwrap_or_else(|| default_csv_path(&file));
    let count = export_csv(&file, &output, layout)
        .with_context(|| format!("Failed to export {}", file.display()))?;
    println!("Exported {} records to {}", count, output.display());
    Ok(())
}
