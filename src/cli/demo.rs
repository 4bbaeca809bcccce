use anyhow::{bail, Context, Result};
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};

use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, ZstdLevel};
use parquet::file::properties::WriterProperties;

use collision_data::particles::{ParticleCategory, CATEGORY_COUNT};
use collision_data::schema::CollectionBatchBuilder;

const BATCH_SIZE: usize = 1000;

/// Deterministic 64-bit mixer (splitmix64)
fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Uniform value in `[lo, hi)` from a seed
fn uniform(seed: u64, lo: f32, hi: f32) -> f32 {
    let unit = (mix(seed) >> 40) as f32 / (1u64 << 24) as f32;
    lo + unit * (hi - lo)
}

/// Per-category values of one synthetic event, in MeV
fn synthetic_event(event_number: u64) -> [Vec<f32>; CATEGORY_COUNT] {
    let mut values: [Vec<f32>; CATEGORY_COUNT] = Default::default();
    for category in ParticleCategory::ALL {
        let seed = event_number.wrapping_mul(31).wrapping_add(category.index() as u64);
        let (max_count, lo, hi) = match category {
            ParticleCategory::Electron => (3, 7_000.0, 150_000.0),
            ParticleCategory::Muon => (3, 5_000.0, 120_000.0),
            ParticleCategory::Photon => (4, 10_000.0, 200_000.0),
            ParticleCategory::Jet => (9, 2_000.0, 60_000.0),
            ParticleCategory::Tau => (2, 1_000.0, 3_000.0),
        };
        let count = (mix(seed) % (max_count + 1)) as usize;
        values[category.index()] = (0..count)
            .map(|i| uniform(seed.wrapping_mul(97).wrapping_add(i as u64), lo, hi))
            .collect();
    }
    values
}

fn demo_batch(first_event: u64, count: usize) -> Result<RecordBatch> {
    let mut builder = CollectionBatchBuilder::with_capacity(count);
    for event_number in first_event..first_event + count as u64 {
        let values = synthetic_event(event_number);
        builder.push_event(event_number, std::array::from_fn(|i| values[i].as_slice()));
    }
    builder.finish().context("Failed to build demo batch")
}

fn write_demo_file(path: &Path, first_event: u64, events: usize) -> Result<()> {
    let props = WriterProperties::builder()
        .set_compression(Compression::ZSTD(ZstdLevel::try_new(3)?))
        .build();
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(
        file,
        collision_data::schema::create_collection_schema_arc(),
        Some(props),
    )?;

    let mut written = 0;
    while written < events {
        let count = BATCH_SIZE.min(events - written);
        writer.write(&demo_batch(first_event + written as u64, count)?)?;
        written += count;
    }
    writer.close().context("Failed to finalize Parquet file")?;
    Ok(())
}

/// Generate synthetic collection files
pub fn run(output_dir: PathBuf, files: usize, events: usize) -> Result<()> {
    if files == 0 {
        bail!("--files must be at least 1");
    }
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    for file_idx in 0..files {
        let path = output_dir.join(format!("DAOD_PHYSLITE.{:06}.parquet", file_idx + 1));
        let first_event = (file_idx * events) as u64 + 1;
        info!("Writing {} events to {}", events, path.display());
        write_demo_file(&path, first_event, events)?;
        println!("{}", path.display());
    }

    info!("Generated {} file(s) in {}", files, output_dir.display());
    Ok(())
}
