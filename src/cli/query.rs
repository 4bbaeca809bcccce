use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use collision_data::binary::{read_record_file, write_csv, RecordLayout};
use collision_data::query::EventIndex;
use collision_data::record::EventRecord;

fn print_records(records: &[EventRecord]) {
    println!(
        "{:>10}  {:>14}  {:>10}  outgoing",
        "eventId", "restEnergyOut", "efficiency"
    );
    for record in records {
        println!(
            "{:>10}  {:>14.4}  {:>10.6}  {}",
            record.event_id, record.rest_energy_out, record.efficiency, record.outgoing_particles
        );
    }
}

/// Select records by rest energy, or the max-efficiency record
pub fn run(
    file: PathBuf,
    min: f32,
    max: f32,
    output: Option<PathBuf>,
    max_efficiency: bool,
    layout: RecordLayout,
) -> Result<()> {
    if min > max {
        bail!("--min ({}) is greater than --max ({})", min, max);
    }

    let records = read_record_file(&file, layout)
        .with_context(|| format!("Failed to read record file: {}", file.display()))?;
    let index = EventIndex::new(records);

    let selected: Vec<EventRecord> = if max_efficiency {
        index.max_efficiency().copied().into_iter().collect()
    } else {
        index.range(min, max).to_vec()
    };

    match output {
        Some(path) => {
            let csv_file = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let count = write_csv(&selected, std::io::BufWriter::new(csv_file))?;
            println!("Wrote {} records to {}", count, path.display());
        }
        None => {
            print_records(&selected);
            println!("{} of {} records", selected.len(), index.len());
        }
    }

    Ok(())
}
