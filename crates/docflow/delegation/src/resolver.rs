//! Acting-identity resolution
//!
//! Among the grants naming an actor as delegate and active at the given
//! instant, the most recently created one wins (ties broken by the later
//! `valid_from`). The issuing system does not define a tie-break, so
//! last-write-wins is assumed here.

use crate::DelegationGrant;
use chrono::{DateTime, Utc};
use docflow_types::ActorId;
use serde::{Deserialize, Serialize};

/// Who an actor effectively is for recipient checks and routing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActingIdentity {
    /// The identity recipient checks run against
    pub effective_actor: ActorId,
    /// True when acting under a delegation grant; routing then targets
    /// the delegate-specific views
    pub is_delegated: bool,
}

impl ActingIdentity {
    /// The actor acting as themself
    pub fn own(actor: ActorId) -> Self {
        Self {
            effective_actor: actor,
            is_delegated: false,
        }
    }
}

/// Resolve whether `actor` is acting as themself or on behalf of a
/// delegator at `as_of`, given the grant snapshot.
pub fn resolve_acting_identity(
    actor: &ActorId,
    as_of: DateTime<Utc>,
    grants: &[DelegationGrant],
) -> ActingIdentity {
    let winning = grants
        .iter()
        .filter(|g| &g.delegate == actor && g.is_active_at(as_of))
        .max_by_key(|g| (g.granted_at, g.valid_from));

    match winning {
        Some(grant) => ActingIdentity {
            effective_actor: grant.delegator.clone(),
            is_delegated: true,
        },
        None => ActingIdentity::own(actor.clone()),
    }
}
