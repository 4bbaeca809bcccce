use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use collision_data::binary::{Endianness, RecordLayout};
use collision_data::schema::DEFAULT_OUTPUT_FILE;

mod config;
mod demo;
mod export;
mod extract;
mod info;
mod query;

/// collision-extract - ATLAS PHYSLITE event record extractor
#[derive(Parser)]
#[command(name = "collision-extract")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Byte order of the numeric record fields.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ByteOrderArg {
    /// Byte order of this machine
    #[default]
    Native,
    /// Little-endian
    Little,
    /// Big-endian
    Big,
}

impl From<ByteOrderArg> for Endianness {
    fn from(arg: ByteOrderArg) -> Self {
        match arg {
            ByteOrderArg::Native => Endianness::Native,
            ByteOrderArg::Little => Endianness::Little,
            ByteOrderArg::Big => Endianness::Big,
        }
    }
}

fn layout(byte_order: ByteOrderArg) -> RecordLayout {
    RecordLayout::new(byte_order.into())
}

#[derive(Subcommand)]
enum Commands {
    /// Extract event records from collection files
    Extract {
        /// Input Parquet collection files, processed in the order given
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Output record file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Maximum number of events across all inputs
        #[arg(long)]
        cap: Option<usize>,

        /// Events per record batch
        #[arg(short = 'b', long)]
        batch_size: Option<usize>,

        /// TOML configuration file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Write the collection summary as JSON
        #[arg(long, value_name = "FILE")]
        summary: Option<PathBuf>,

        /// Byte order of the numeric fields
        #[arg(long, value_enum)]
        byte_order: Option<ByteOrderArg>,
    },

    /// Display information about a record file
    Info {
        /// Record file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Byte order the file was written with
        #[arg(long, value_enum, default_value = "native")]
        byte_order: ByteOrderArg,
    },

    /// Export a record file as CSV
    ExportCsv {
        /// Record file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// CSV output (defaults to all_events.csv next to the input)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Byte order the file was written with
        #[arg(long, value_enum, default_value = "native")]
        byte_order: ByteOrderArg,
    },

    /// Select records by rest energy
    Query {
        /// Record file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Lower rest-energy bound in GeV (inclusive)
        #[arg(long)]
        min: Option<f32>,

        /// Upper rest-energy bound in GeV (inclusive)
        #[arg(long)]
        max: Option<f32>,

        /// Write matching records as CSV instead of printing them
        #[arg(long, value_name = "CSV")]
        output: Option<PathBuf>,

        /// Show only the record with the highest efficiency
        #[arg(long)]
        max_efficiency: bool,

        /// Byte order the file was written with
        #[arg(long, value_enum, default_value = "native")]
        byte_order: ByteOrderArg,
    },

    /// Generate synthetic collection files for testing
    Demo {
        /// Output directory
        #[arg(value_name = "OUTPUT_DIR", default_value = "demo_inputs")]
        output_dir: PathBuf,

        /// Number of files to generate
        #[arg(long, default_value = "3")]
        files: usize,

        /// Events per file
        #[arg(long, default_value = "1000")]
        events: usize,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Extract {
            inputs,
            output,
            cap,
            batch_size,
            config,
            summary,
            byte_order,
        } => extract::run(extract::ExtractArgs {
            inputs,
            output,
            cap,
            batch_size,
            config,
            summary,
            byte_order: byte_order.map(Endianness::from),
        }),
        Commands::Info { file, byte_order } => info::run(file, layout(byte_order)),
        Commands::ExportCsv {
            file,
            output,
            byte_order,
        } => export::run(file, output, layout(byte_order)),
        Commands::Query {
            file,
            min,
            max,
            output,
            max_efficiency,
            byte_order,
        } => query::run(
            file,
            min.unwrap_or(f32::NEG_INFINITY),
            max.unwrap_or(f32::INFINITY),
            output,
            max_efficiency,
            layout(byte_order),
        ),
        Commands::Demo {
            output_dir,
            files,
            events,
        } => demo::run(output_dir, files, events),
    }
}
