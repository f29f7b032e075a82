//! Delegation grants
//!
//! Read-only input: lifecycle (creation, revocation) belongs to an
//! external admin module. A grant authorizes `delegate` to act as
//! `delegator` inside a validity window.

use chrono::{DateTime, Utc};
use docflow_types::ActorId;
use serde::{Deserialize, Serialize};

/// A delegation-of-record within a validity window
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationGrant {
    /// The actor being represented
    pub delegator: ActorId,
    /// The actor authorized to act on the delegator's behalf
    pub delegate: ActorId,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    /// Free-form scope tag from the issuing system
    pub scope: String,
    /// When the grant was created; last-created wins among overlaps
    pub granted_at: DateTime<Utc>,
}

impl DelegationGrant {
    pub fn new(
        delegator: ActorId,
        delegate: ActorId,
        valid_from: DateTime<Utc>,
        valid_to: DateTime<Utc>,
    ) -> Self {
        Self {
            delegator,
            delegate,
            valid_from,
            valid_to,
            scope: String::new(),
            granted_at: Utc::now(),
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_granted_at(mut self, granted_at: DateTime<Utc>) -> Self {
        self.granted_at = granted_at;
        self
    }

    /// Check whether the grant covers the given instant (inclusive ends)
    pub fn is_active_at(&self, instant: DateTime<Utc>) -> bool {
        self.valid_from <= instant && instant <= self.valid_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_window_is_inclusive() {
        let from = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2026, 1, 31, 23, 59, 59).unwrap();
        let grant = DelegationGrant::new(ActorId::new("boss"), ActorId::new("aide"), from, to);

        assert!(grant.is_active_at(from));
        assert!(grant.is_active_at(to));
        assert!(grant.is_active_at(Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()));
        assert!(!grant.is_active_at(Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_grant_serde_round_trip() {
        let from = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2026, 3, 31, 23, 59, 59).unwrap();
        let grant = DelegationGrant::new(ActorId::new("boss"), ActorId::new("aide"), from, to)
            .with_scope("documents")
            .with_granted_at(from);

        let json = serde_json::to_string(&grant).unwrap();
        let back: DelegationGrant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grant);
        assert!(back.is_active_at(from));
    }
}
