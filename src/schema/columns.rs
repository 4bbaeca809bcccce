//! Column names as constants for type safety

/// Source event number
pub const EVENT_NUMBER: &str = "EventInfoAuxDyn.eventNumber";
/// Electron transverse momenta (MeV)
pub const ELECTRON_PT: &str = "AnalysisElectronsAuxDyn.pt";
/// Muon transverse momenta (MeV)
pub const MUON_PT: &str = "AnalysisMuonsAuxDyn.pt";
/// Photon transverse momenta (MeV)
pub const PHOTON_PT: &str = "AnalysisPhotonsAuxDyn.pt";
/// Jet invariant masses (MeV)
pub const JET_M: &str = "AnalysisJetsAuxDyn.m";
/// Tau jet invariant masses (MeV)
pub const TAU_M: &str = "AnalysisTauJetsAuxDyn.m";

/// Every column the extractor projects, event number first
pub const REQUIRED: [&str; 6] = [EVENT_NUMBER, ELECTRON_PT, MUON_PT, PHOTON_PT, JET_M, TAU_M];

/// Record field names, in binary layout order
pub mod record {
    /// Event identifier
    pub const EVENT_ID: &str = "eventId";
    /// Incoming particle string
    pub const INCOMING_PARTICLES: &str = "incomingParticles";
    /// Outgoing particle string
    pub const OUTGOING_PARTICLES: &str = "outgoingParticles";
    /// Total incoming kinetic energy
    pub const KINETIC_ENERGY_IN: &str = "kineticEnergyIn";
    /// Summed outgoing rest energy
    pub const REST_ENERGY_OUT: &str = "restEnergyOut";
    /// restEnergyOut / kineticEnergyIn
    pub const EFFICIENCY: &str = "efficiency";

    /// Header of the tabular export
    pub const ALL: [&str; 6] = [
        EVENT_ID,
        INCOMING_PARTICLES,
        OUTGOING_PARTICLES,
        KINETIC_ENERGY_IN,
        REST_ENERGY_OUT,
        EFFICIENCY,
    ];
}
