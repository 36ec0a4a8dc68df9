//! Node runtime settings

use std::path::Path;

use frame_codec::DumpStyle;
use serde::{Deserialize, Serialize};

use crate::error::NodeError;

/// Runtime settings of a link node
///
/// The wire layout itself is fixed at build time in `pack-layout`; only
/// loop behavior is tunable here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkNodeConfig {
    /// Interval between telemetry frames (milliseconds)
    pub send_period_ms: u32,

    /// How long the loopback demo runs before shutting down (milliseconds)
    pub demo_duration_ms: u64,

    /// Layout used when dumping received frames to the log
    pub dump_style: DumpStyle,
}

impl Default for LinkNodeConfig {
    fn default() -> Self {
        Self {
            send_period_ms: 500,
            demo_duration_ms: 5000,
            dump_style: DumpStyle::HexOnly,
        }
    }
}

impl LinkNodeConfig {
    /// Load settings from a JSON file. Missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NodeError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
