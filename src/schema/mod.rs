//! # Collection Schema Definition
//!
//! Defines the Arrow schema of a conforming collection input file and the layout
//! constants of the fixed-width record stream.
//!
//! ## Input Columns
//!
//! One row per collision event. Particle collections are stored as nested lists,
//! one list entry per reconstructed particle.
//!
//! | Column | Type | Unit | Description |
//! |--------|------|------|-------------|
//! | EventInfoAuxDyn.eventNumber | UInt64 (Int32/Int64/UInt32 accepted) | - | Source event number |
//! | AnalysisElectronsAuxDyn.pt | List<Float32> | MeV | Electron transverse momenta |
//! | AnalysisMuonsAuxDyn.pt | List<Float32> | MeV | Muon transverse momenta |
//! | AnalysisPhotonsAuxDyn.pt | List<Float32> | MeV | Photon transverse momenta |
//! | AnalysisJetsAuxDyn.m | List<Float32> | MeV | Jet invariant masses |
//! | AnalysisTauJetsAuxDyn.m | List<Float32> | MeV | Tau jet invariant masses |
//!
//! List items may also be Float64. Only the list length of the momentum columns
//! is consumed.
//!
//! ## Record Layout
//!
//! | Offset | Width | Field | Encoding |
//! |--------|-------|-------|----------|
//! | 0 | 4 | eventId | i32 |
//! | 4 | 32 | incomingParticles | ASCII, space padded |
//! | 36 | 256 | outgoingParticles | ASCII, space padded |
//! | 292 | 4 | kineticEnergyIn | f32, GeV |
//! | 296 | 4 | restEnergyOut | f32, GeV |
//! | 300 | 4 | efficiency | f32 |

mod builders;
/// Input column name constants.
pub mod columns;
mod constants;
mod validation;


pub use builders::{create_collection_schema, create_collection_schema_arc, CollectionBatchBuilder};
pub use constants::*;
pub use validation::{validate_collection_schema, SchemaValidationError};
