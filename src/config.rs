//! Analysis settings shared by the binaries

use crate::chart::palette::PALETTE;
use crate::model::LUNCH_MARKER;

/// Number of places shown individually before the rest fall into "Other"
pub const DEFAULT_TOP_N: usize = 10;

/// Largest top-N that still leaves a palette slot for "Other"
pub const MAX_TOP_N: usize = PALETTE.len() - 1;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub lunch_marker: String,
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            lunch_marker: LUNCH_MARKER.to_string(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalysisConfig {
    pub fn new(lunch_marker: &str, top_n: usize) -> Self {
        let clamped = top_n.clamp(1, MAX_TOP_N);
        if clamped != top_n {
            log::warn!("top-n {} out of range, using {}", top_n, clamped);
        }
        Self {
            lunch_marker: lunch_marker.to_string(),
            top_n: clamped,
        }
    }
}
