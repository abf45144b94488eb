//! Guest lookup session
//!
//! A guest may retype their name and submit again before the previous lookup
//! returned. Each lookup takes a [`LookupTicket`]; a completion carrying a
//! ticket older than the last applied one is discarded, so the newest request
//! always wins regardless of arrival order.

use chrono::{DateTime, Utc};
use shared::error::AppError;
use shared::models::{Guest, GuestLookup, NameSuggestion};

use crate::ClientResult;

/// Identity of one lookup request, ordered by issue time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupTicket(u64);

/// What the guest currently sees
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    Loading {
        name: String,
    },
    Found(Guest),
    NotFound {
        name: String,
        suggestions: Vec<NameSuggestion>,
    },
    Failed {
        name: String,
        message: String,
    },
}

#[derive(Debug, Default)]
pub struct GuestSession {
    issued: u64,
    applied: Option<LookupTicket>,
    state: LookupState,
}

impl GuestSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// The found guest, if the current state has one
    pub fn guest(&self) -> Option<&Guest> {
        match &self.state {
            LookupState::Found(guest) => Some(guest),
            _ => None,
        }
    }

    /// Start a lookup and show the loading state
    pub fn begin(&mut self, name: &str) -> LookupTicket {
        self.issued += 1;
        self.state = LookupState::Loading {
            name: name.to_string(),
        };
        LookupTicket(self.issued)
    }

    /// Apply a finished lookup. Returns `false` when a newer result was
    /// already applied and this one was dropped.
    pub fn complete(
        &mut self,
        ticket: LookupTicket,
        name: &str,
        result: ClientResult<GuestLookup>,
    ) -> bool {
        if self.applied.is_some_and(|applied| ticket < applied) {
            tracing::debug!(?ticket, "Discarding stale guest lookup");
            return false;
        }

        self.applied = Some(ticket);
        self.state = match result {
            Ok(GuestLookup::Found(guest)) => LookupState::Found(guest),
            Ok(GuestLookup::NotFound { suggestions }) => LookupState::NotFound {
                name: name.to_string(),
                suggestions,
            },
            Err(err) => LookupState::Failed {
                name: name.to_string(),
                message: AppError::from(err).message,
            },
        };
        true
    }

    /// Merge a recorded arrival into the found guest.
    /// Returns `false` when no guest is currently shown.
    pub fn record_arrival(&mut self, arrived_at: DateTime<Utc>) -> bool {
        match &mut self.state {
            LookupState::Found(guest) => {
                guest.arrived_at = Some(arrived_at);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    fn found(name: &str, table: Option<i64>) -> ClientResult<GuestLookup> {
        Ok(GuestLookup::Found(Guest {
            name: name.to_string(),
            table,
            arrived_at: None,
        }))
    }

    #[test]
    fn test_in_order_completion() {
        let mut session = GuestSession::new();
        let ticket = session.begin("Alex");
        assert!(matches!(session.state(), LookupState::Loading { .. }));

        assert!(session.complete(ticket, "Alex", found("Alex", Some(2))));
        assert_eq!(session.guest().and_then(|g| g.table), Some(2));
    }

    #[test]
    fn test_newest_request_wins_out_of_order() {
        let mut session = GuestSession::new();
        let first = session.begin("Al");
        let second = session.begin("Alex");

        assert!(session.complete(second, "Alex", found("Alex", Some(2))));
        assert!(!session.complete(first, "Al", Ok(GuestLookup::not_found())));
        assert_eq!(session.guest().map(|g| g.name.as_str()), Some("Alex"));
    }

    #[test]
    fn test_older_then_newer_both_apply() {
        let mut session = GuestSession::new();
        let first = session.begin("Al");
        let second = session.begin("Alex");

        assert!(session.complete(first, "Al", Ok(GuestLookup::not_found())));
        assert!(session.complete(second, "Alex", found("Alex", None)));
        assert!(session.guest().is_some());
    }

    #[test]
    fn test_failure_uses_generic_message() {
        let mut session = GuestSession::new();
        let ticket = session.begin("Alex");
        session.complete(
            ticket,
            "Alex",
            Err(ClientError::Status {
                status: 503,
                body: String::new(),
            }),
        );
        assert_eq!(
            session.state(),
            &LookupState::Failed {
                name: "Alex".into(),
                message: "Something went wrong. Please try again.".into(),
            }
        );
    }

    #[test]
    fn test_record_arrival() {
        let mut session = GuestSession::new();
        let now = Utc::now();
        assert!(!session.record_arrival(now));

        let ticket = session.begin("Alex");
        session.complete(ticket, "Alex", found("Alex", Some(1)));
        assert!(session.record_arrival(now));
        assert_eq!(session.guest().and_then(|g| g.arrived_at), Some(now));
    }
}
