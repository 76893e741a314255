//! Summary of a completed run.

use std::fmt;
use std::path::PathBuf;

use crate::scan::LabelMap;

/// Counts describing what a run wrote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Where the document was written.
    pub destination: PathBuf,
    /// Label names with their image counts, in output order.
    pub labels: Vec<(String, usize)>,
}

impl RunReport {
    pub fn new(destination: impl Into<PathBuf>, labels: &LabelMap) -> Self {
        Self {
            destination: destination.into(),
            labels: labels
                .iter()
                .map(|(label, images)| (label.clone(), images.len()))
                .collect(),
        }
    }

    /// Total number of assets across all labels.
    pub fn asset_count(&self) -> usize {
        self.labels.iter().map(|(_, count)| count).sum()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Wrote {} assets across {} labels to {}",
            self.asset_count(),
            self.labels.len(),
            self.destination.display()
        )?;

        for (label, count) in &self.labels {
            writeln!(f, "  {}: {}", label, count)?;
        }

        Ok(())
    }
}
