//! Shared types used across the scan, config, and process stages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three named output resolutions.
///
/// The tier name doubles as the output subdirectory and the filename suffix:
/// `earth.jpg` at [`Tier::Med`] becomes `med/earth_med.jpg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Low,
    Med,
    High,
}

impl Tier {
    /// All tiers in processing order.
    pub const ALL: [Tier; 3] = [Tier::Low, Tier::Med, Tier::High];

    /// Lowercase name used for directories and filename suffixes.
    pub fn name(self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Med => "med",
            Tier::High => "high",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed target dimensions for a tier.
///
/// Sources are stretched to exactly these dimensions; aspect ratio is not
/// preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierSize {
    pub width: u32,
    pub height: u32,
}

impl TierSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for TierSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
