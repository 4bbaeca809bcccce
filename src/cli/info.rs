use anyhow::{Context, Result};
use std::path::PathBuf;

use collision_data::binary::{read_record_file, RecordLayout};
use collision_data::query::EventIndex;
use collision_data::schema::RECORD_SIZE;

/// Display information about a record file
pub fn run(file: PathBuf, layout: RecordLayout) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let records = read_record_file(&file, layout)
        .with_context(|| format!("Failed to read record file: {}", file.display()))?;
    let index = EventIndex::new(records);

    println!("Record File Information");
    println!("=======================");
    println!("File: {}", file.display());
    println!("Byte order: {}", layout.byte_order);
    println!();

    println!("File Statistics:");
    println!("  Records: {}", index.len());
    println!("  Size: {} bytes", index.len() * RECORD_SIZE);
    println!();

    if let Some(record) = index.max_efficiency() {
        println!("Max efficiency event:");
        println!("  Event ID: {}", record.event_id);
        println!("  Efficiency: {:.4}", record.efficiency);
        println!("  Outgoing: {}", record.outgoing_particles);
        println!();
    }
    if let Some(record) = index.max_rest_energy() {
        println!(
            "Max rest-energy-out: {:.2} GeV (event {})",
            record.rest_energy_out, record.event_id
        );
        println!();
    }

    let totals = index.total_particle_counts();
    if !totals.is_empty() {
        println!("Outgoing particles:");
        for (category, count) in totals {
            println!("  {:<9} {}", category.name(), count);
        }
    }

    Ok(())
}
