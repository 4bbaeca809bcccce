//! # Event Records
//!
//! [`EventRecord`] is the unit of output: one accepted collision event, immutable
//! once built. The particle strings are held as [`FixedText`] so their encoded
//! width is part of the type.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::schema::{INCOMING_PARTICLES, INCOMING_WIDTH, OUTGOING_WIDTH, PAD_BYTE};

/// Byte string of exactly `N` bytes, right-padded with spaces.
///
/// Content longer than `N` bytes is cut at byte `N`; shorter content is padded.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedText<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> FixedText<N> {
    /// Truncate or pad `text` to `N` bytes
    pub fn new(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Truncate or pad raw bytes to `N` bytes
    pub fn from_bytes(source: &[u8]) -> Self {
        let mut bytes = [PAD_BYTE; N];
        let len = source.len().min(N);
        bytes[..len].copy_from_slice(&source[..len]);
        Self { bytes }
    }

    /// Wrap an already fixed-width buffer without modification
    pub fn from_array(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// The full padded buffer
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Content with trailing padding removed
    pub fn trimmed(&self) -> &str {
        let end = self
            .bytes
            .iter()
            .rposition(|&b| b != PAD_BYTE && b != 0)
            .map_or(0, |i| i + 1);
        // A multi-byte character may have been cut at the width boundary.
        match std::str::from_utf8(&self.bytes[..end]) {
            Ok(text) => text,
            Err(e) => {
                let valid = e.valid_up_to();
                std::str::from_utf8(&self.bytes[..valid]).unwrap_or_default()
            }
        }
    }
}

impl<const N: usize> fmt::Debug for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedText<{}>({:?})", N, self.trimmed())
    }
}

impl<const N: usize> fmt::Display for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trimmed())
    }
}

impl<const N: usize> Serialize for FixedText<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.trimmed())
    }
}

/// Incoming particle string field
pub type IncomingText = FixedText<INCOMING_WIDTH>;

/// Outgoing particle string field
pub type OutgoingText = FixedText<OUTGOING_WIDTH>;

/// One accepted collision event
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Source event number (not deduplicated across files)
    pub event_id: i32,
    /// Initial state, always `proton,proton`
    pub incoming_particles: IncomingText,
    /// Comma-joined outgoing particle names
    pub outgoing_particles: OutgoingText,
    /// Total incoming energy in GeV
    pub kinetic_energy_in: f32,
    /// Summed outgoing rest/invariant energy in GeV
    pub rest_energy_out: f32,
    /// rest_energy_out / kinetic_energy_in, unclamped
    pub efficiency: f32,
}

impl EventRecord {
    /// Build a record for a proton-proton collision
    pub fn new(
        event_id: i32,
        outgoing_particles: &str,
        kinetic_energy_in: f32,
        rest_energy_out: f32,
        efficiency: f32,
    ) -> Self {
        Self {
            event_id,
            incoming_particles: IncomingText::new(INCOMING_PARTICLES),
            outgoing_particles: OutgoingText::new(outgoing_particles),
            kinetic_energy_in,
            rest_energy_out,
            efficiency,
        }
    }

    /// Outgoing particle names, padding removed
    pub fn outgoing_names(&self) -> impl Iterator<Item = &str> {
        self.outgoing_particles
            .trimmed()
            .split(crate::schema::PARTICLE_SEPARATOR)
            .filter(|name| !name.is_empty())
    }
}
