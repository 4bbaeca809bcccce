use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::record::EventRecord;

/// Per-file acceptance count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCount {
    /// Input file path as given
    pub path: String,
    /// Events accepted from this file
    pub events: usize,
}

/// Event whose efficiency exceeds 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EfficiencyWarning {
    /// Source event number
    pub event_id: i32,
    /// Stored (unclamped) efficiency
    pub efficiency: f32,
}

impl fmt::Display for EfficiencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event {} efficiency={:.2}", self.event_id, self.efficiency)
    }
}

/// Statistics from a completed collection run
#[derive(Debug, Clone, Serialize)]
pub struct CollectionSummary {
    /// Accepted events per opened file, in input order
    pub files: Vec<FileCount>,
    /// Total accepted events
    pub total_events: usize,
    /// Configured event cap
    pub event_cap: usize,
    /// Whether collection stopped at the cap
    pub cap_reached: bool,
    /// Highest efficiency among accepted events
    pub max_efficiency: Option<f32>,
    /// Highest rest energy among accepted events, GeV
    pub max_rest_energy_out: Option<f32>,
    /// Events with efficiency above 1.0, in output order
    pub warnings: Vec<EfficiencyWarning>,
    /// When collection finished
    pub completed_at: DateTime<Utc>,
}

impl fmt::Display for CollectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Processed {} events across {} files",
            self.total_events,
            self.files.len()
        )?;
        for (i, file) in self.files.iter().enumerate() {
            writeln!(f, "  File {}: {} events ({})", i + 1, file.events, file.path)?;
        }
        match self.max_efficiency {
            Some(eff) => writeln!(f, "Max efficiency:       {:.4}", eff)?,
            None => writeln!(f, "Max efficiency:       n/a")?,
        }
        match self.max_rest_energy_out {
            Some(energy) => write!(f, "Max rest-energy-out:  {:.2} GeV", energy),
            None => write!(f, "Max rest-energy-out:  n/a"),
        }
    }
}

impl CollectionSummary {
    /// Format the summary with colors (requires `colorized_output`)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::style;

            let mut output = format!(
                "{} {} events across {} files\n",
                style("Processed").bold().green(),
                style(self.total_events).bold(),
                self.files.len()
            );
            for (i, file) in self.files.iter().enumerate() {
                output.push_str(&format!(
                    "  File {}: {} events ({})\n",
                    i + 1,
                    style(file.events).cyan(),
                    file.path
                ));
            }
            if self.cap_reached {
                output.push_str(&format!(
                    "{}\n",
                    style(format!("Event cap {} reached", self.event_cap)).yellow()
                ));
            }
            let lines = self.to_string();
            for line in lines.lines().filter(|l| l.starts_with("Max")) {
                output.push_str(&format!("{}\n", style(line).bold()));
            }
            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}\n", self)
        }
    }
}

/// Everything a collection run produces
#[derive(Debug, Clone)]
pub struct CollectionOutcome {
    /// Accepted records in encounter order
    pub records: Vec<EventRecord>,
    /// Counts, maxima and warnings
    pub summary: CollectionSummary,
}
