use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Byte order of the numeric fields in a record file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// Byte order of the producing machine
    #[default]
    Native,
    /// Little-endian
    Little,
    /// Big-endian
    Big,
}

impl Endianness {
    /// Name as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Endianness::Native => "native",
            Endianness::Little => "little",
            Endianness::Big => "big",
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endianness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(Endianness::Native),
            "little" | "le" => Ok(Endianness::Little),
            "big" | "be" => Ok(Endianness::Big),
            other => Err(format!(
                "unknown byte order '{other}', expected native, little or big"
            )),
        }
    }
}

/// Layout options for encoding and decoding record files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordLayout {
    /// Byte order of `eventId` and the three float fields
    pub byte_order: Endianness,
}

impl RecordLayout {
    /// Layout with the given byte order
    pub fn new(byte_order: Endianness) -> Self {
        Self { byte_order }
    }
}
