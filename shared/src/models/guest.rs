//! Guest lookup and check-in models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::{flexible_timestamp, null_as_default};

/// A guest on the list of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub name: String,
    /// Assigned table id; `None` while the host has not seated the guest
    #[serde(default)]
    pub table: Option<i64>,
    #[serde(
        default,
        with = "flexible_timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub arrived_at: Option<DateTime<Utc>>,
}

impl Guest {
    pub fn has_arrived(&self) -> bool {
        self.arrived_at.is_some()
    }
}

/// Alternative spelling offered on an ambiguous match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSuggestion {
    pub name: String,
}

/// Result of `GET /event/{eventId}/guest?name=`
///
/// On the wire this is discriminated by the boolean `found`:
/// `{found: true, guest: {...}}` or `{found: false, suggestions?: [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGuestLookup", into = "RawGuestLookup")]
pub enum GuestLookup {
    Found(Guest),
    NotFound { suggestions: Vec<NameSuggestion> },
}

impl GuestLookup {
    pub fn not_found() -> Self {
        Self::NotFound {
            suggestions: Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn guest(&self) -> Option<&Guest> {
        match self {
            Self::Found(guest) => Some(guest),
            Self::NotFound { .. } => None,
        }
    }

    /// Assigned table id of a found guest
    pub fn table_id(&self) -> Option<i64> {
        self.guest().and_then(|g| g.table)
    }
}

#[derive(Serialize, Deserialize)]
struct RawGuestLookup {
    found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    guest: Option<Guest>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    suggestions: Vec<NameSuggestion>,
}

impl TryFrom<RawGuestLookup> for GuestLookup {
    type Error = String;

    fn try_from(raw: RawGuestLookup) -> Result<Self, Self::Error> {
        match (raw.found, raw.guest) {
            (true, Some(guest)) => Ok(Self::Found(guest)),
            (true, None) => Err("lookup reported found without a guest".to_string()),
            (false, _) => Ok(Self::NotFound {
                suggestions: raw.suggestions,
            }),
        }
    }
}

impl From<GuestLookup> for RawGuestLookup {
    fn from(lookup: GuestLookup) -> Self {
        match lookup {
            GuestLookup::Found(guest) => Self {
                found: true,
                guest: Some(guest),
                suggestions: Vec::new(),
            },
            GuestLookup::NotFound { suggestions } => Self {
                found: false,
                guest: None,
                suggestions,
            },
        }
    }
}

/// Body of `POST /event/{eventId}/guest/checkin`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinRequest {
    pub name: String,
}

/// Response of `POST /event/{eventId}/guest/checkin`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinResponse {
    #[serde(with = "flexible_timestamp")]
    pub arrived_at: DateTime<Utc>,
}
