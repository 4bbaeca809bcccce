/// Width of the event id field in bytes
pub const EVENT_ID_WIDTH: usize = 4;

/// Fixed width of the incoming particle string in bytes
pub const INCOMING_WIDTH: usize = 32;

/// Fixed width of the outgoing particle string in bytes
pub const OUTGOING_WIDTH: usize = 256;

/// Width of each energy field in bytes
pub const FLOAT_WIDTH: usize = 4;

/// Size of one encoded record in bytes
pub const RECORD_SIZE: usize = EVENT_ID_WIDTH + INCOMING_WIDTH + OUTGOING_WIDTH + 3 * FLOAT_WIDTH;

/// Initial state written for every event
pub const INCOMING_PARTICLES: &str = "proton,proton";

/// Byte used to pad fixed-width strings
pub const PAD_BYTE: u8 = b' ';

/// Separator between outgoing particle names
pub const PARTICLE_SEPARATOR: char = ',';

/// Default name of the record file
pub const DEFAULT_OUTPUT_FILE: &str = "collision_data.bin";

/// Default name of the tabular export
pub const DEFAULT_CSV_FILE: &str = "all_events.csv";

/// Default global event cap
pub const DEFAULT_EVENT_CAP: usize = 100_000;

/// Field metadata key carrying the physical unit of a column
pub const KEY_UNIT: &str = "unit";
