//! Link quality classification from the host's network information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse signal level shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NetworkQuality {
    Maximum,
    Strong,
    Medium,
    Weak,
    Lost,
}

impl NetworkQuality {
    /// Classify from reachability and an optional downlink estimate (Mbit/s).
    /// Without a downlink estimate a reachable link counts as STRONG.
    pub fn from_downlink(downlink_mbps: Option<f64>, online: bool) -> Self {
        if !online {
            return NetworkQuality::Lost;
        }
        match downlink_mbps {
            None => NetworkQuality::Strong,
            Some(d) if d > 5.0 => NetworkQuality::Maximum,
            Some(d) if d > 0.2 => NetworkQuality::Strong,
            Some(d) if d > 0.05 => NetworkQuality::Medium,
            Some(_) => NetworkQuality::Weak,
        }
    }

    pub fn is_offline(&self) -> bool {
        *self == NetworkQuality::Lost
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkQuality::Maximum => "MAXIMUM",
            NetworkQuality::Strong => "STRONG",
            NetworkQuality::Medium => "MEDIUM",
            NetworkQuality::Weak => "WEAK",
            NetworkQuality::Lost => "LOST",
        }
    }
}

impl fmt::Display for NetworkQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
