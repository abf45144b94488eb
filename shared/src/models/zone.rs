//! Zone Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Zone of a banquet room: one independent visual column per zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneId {
    Left,
    Center,
    Right,
}

impl ZoneId {
    /// Zones in left-to-right render order
    pub const ALL: [ZoneId; 3] = [ZoneId::Left, ZoneId::Center, ZoneId::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognised zone tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownZone(pub String);

impl fmt::Display for UnknownZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown zone: {}", self.0)
    }
}

impl std::error::Error for UnknownZone {}

impl FromStr for ZoneId {
    type Err = UnknownZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(UnknownZone(s.to_string())),
        }
    }
}
