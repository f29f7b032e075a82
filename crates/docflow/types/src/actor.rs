//! Participants: actors, recipients, and attachments
//!
//! An `ActorRef` identifies a recipient or participant of a document. It is
//! an immutable value object; recipient lists on a document hold `Recipient`
//! entries, which add the per-entry delegation flag and the time the entry
//! was appended.

use crate::{ActorId, OrgNodeId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The role an actor plays on a document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorRole {
    /// An organizational unit as a whole
    Org,
    /// An individual user
    User,
    /// A user participating as a signer
    Signer,
    /// A user participating as a commenter
    Commenter,
}

/// Who an `ActorRef` points at — a user account or an org unit
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    User(ActorId),
    Org(OrgNodeId),
}

/// Identifies a recipient/participant of a document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRef {
    /// The user or org unit being referenced
    pub party: Party,
    /// The role this reference carries
    pub role: ActorRole,
    /// Display name for rendering, carried as-is
    pub display_name: String,
}

impl ActorRef {
    /// Reference a user in the `User` role
    pub fn user(id: ActorId, display_name: impl Into<String>) -> Self {
        Self {
            party: Party::User(id),
            role: ActorRole::User,
            display_name: display_name.into(),
        }
    }

    /// Reference an org unit in the `Org` role
    pub fn org(id: OrgNodeId, display_name: impl Into<String>) -> Self {
        Self {
            party: Party::Org(id),
            role: ActorRole::Org,
            display_name: display_name.into(),
        }
    }

    pub fn with_role(mut self, role: ActorRole) -> Self {
        self.role = role;
        self
    }

    /// The user id behind this reference, if it points at a user
    pub fn user_id(&self) -> Option<&ActorId> {
        match &self.party {
            Party::User(id) => Some(id),
            Party::Org(_) => None,
        }
    }

    /// Check whether this reference points at the given user
    pub fn is_user(&self, id: &ActorId) -> bool {
        matches!(&self.party, Party::User(uid) if uid == id)
    }
}

impl std::fmt::Display for ActorRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// A recipient entry on a document's role-tagged lists.
///
/// `via_delegate` marks entries added on behalf of a delegator: the legal
/// actions are identical to the primary entry, only routing destinations
/// differ.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub actor: ActorRef,
    pub via_delegate: bool,
    pub added_at: DateTime<Utc>,
}

impl Recipient {
    pub fn new(actor: ActorRef) -> Self {
        Self {
            actor,
            via_delegate: false,
            added_at: Utc::now(),
        }
    }

    pub fn via_delegate(actor: ActorRef) -> Self {
        Self {
            actor,
            via_delegate: true,
            added_at: Utc::now(),
        }
    }
}

/// A reference to an attached file (storage is external)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub id: String,
    pub name: String,
}

impl FileRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_ref_user() {
        let actor = ActorRef::user(ActorId::new("u-1"), "Alice");
        assert_eq!(actor.role, ActorRole::User);
        assert!(actor.is_user(&ActorId::new("u-1")));
        assert!(!actor.is_user(&ActorId::new("u-2")));
        assert_eq!(actor.user_id(), Some(&ActorId::new("u-1")));
    }

    #[test]
    fn test_actor_ref_org_has_no_user_id() {
        let actor = ActorRef::org(OrgNodeId::new("org-1"), "Finance");
        assert_eq!(actor.role, ActorRole::Org);
        assert_eq!(actor.user_id(), None);
        assert!(!actor.is_user(&ActorId::new("u-1")));
    }

    #[test]
    fn test_with_role() {
        let signer = ActorRef::user(ActorId::new("u-1"), "Alice").with_role(ActorRole::Signer);
        assert_eq!(signer.role, ActorRole::Signer);
    }

    #[test]
    fn test_recipient_delegation_flag() {
        let actor = ActorRef::user(ActorId::new("u-1"), "Alice");
        assert!(!Recipient::new(actor.clone()).via_delegate);
        assert!(Recipient::via_delegate(actor).via_delegate);
    }

    #[test]
    fn test_serde_round_trip() {
        let actor = ActorRef::user(ActorId::new("u-1"), "Alice").with_role(ActorRole::Commenter);
        let json = serde_json::to_string(&actor).unwrap();
        let back: ActorRef = serde_json::from_str(&json).unwrap();
        assert_eq!(actor, back);
    }
}
