//! Documents and their processing history
//!
//! A `Document` is a snapshot of one routed item: its status, its
//! role-tagged recipient lists, and the append-only trail of actions that
//! brought it here. It is owned by the engine and mutated only through
//! validated actions — the struct itself exposes queries and builders, no
//! transition logic.

use chrono::{DateTime, Utc};
use docflow_types::{
    ActionKind, ActorId, ActorRef, DocStatus, DocumentId, FileRef, Recipient,
};
use serde::{Deserialize, Serialize};

/// One entry in a document's audit trail. Never edited or deleted once
/// committed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProcessingAction {
    /// Who submitted the action
    pub actor: ActorRef,
    pub kind: ActionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<FileRef>,
    pub timestamp: DateTime<Utc>,
    /// The status the document held after this action committed
    pub resulting_status: DocStatus,
}

/// A document moving through the workflow
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub status: DocStatus,
    /// Current workflow node/step, when the surrounding system tracks one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Actors primarily responsible for progressing the document
    pub main_processors: Vec<Recipient>,
    /// Secondary actors asked to contribute without primary ownership
    pub coordinators: Vec<Recipient>,
    /// Read-only visibility, no action required
    pub for_information: Vec<Recipient>,
    pub created_by: ActorRef,
    pub can_forward: bool,
    pub can_add_user: bool,
    /// The external "booked/registered" number; `Finish` requires it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_number: Option<String>,
    /// Optimistic-concurrency version, bumped on every committed action
    pub version: u64,
    /// Append-only, ordered by time
    pub history: Vec<ProcessingAction>,
}

impl Document {
    /// A freshly drafted document
    pub fn new(id: DocumentId, created_by: ActorRef) -> Self {
        Self {
            id,
            status: DocStatus::Drafted,
            node_id: None,
            main_processors: Vec::new(),
            coordinators: Vec::new(),
            for_information: Vec::new(),
            created_by,
            can_forward: true,
            can_add_user: true,
            book_number: None,
            version: 1,
            history: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: DocStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_node_id(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }

    pub fn with_book_number(mut self, number: impl Into<String>) -> Self {
        self.book_number = Some(number.into());
        self
    }

    pub fn with_can_forward(mut self, can_forward: bool) -> Self {
        self.can_forward = can_forward;
        self
    }

    pub fn with_can_add_user(mut self, can_add_user: bool) -> Self {
        self.can_add_user = can_add_user;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Check whether a user appears on any recipient list
    pub fn is_participant(&self, actor: &ActorId) -> bool {
        self.recipient_lists().any(|r| r.actor.is_user(actor))
    }

    /// Check whether a user is a main processor
    pub fn is_main_processor(&self, actor: &ActorId) -> bool {
        self.main_processors.iter().any(|r| r.actor.is_user(actor))
    }

    /// Recipient entries across all three lists
    pub fn recipient_lists(&self) -> impl Iterator<Item = &Recipient> {
        self.main_processors
            .iter()
            .chain(self.coordinators.iter())
            .chain(self.for_information.iter())
    }

    /// Entries that were added on behalf of a delegator
    pub fn delegated_recipients(&self) -> Vec<&Recipient> {
        self.recipient_lists().filter(|r| r.via_delegate).collect()
    }

    /// The most recent committed action
    pub fn last_action(&self) -> Option<&ProcessingAction> {
        self.history.last()
    }

    /// Whether the document has been booked/registered externally
    pub fn is_booked(&self) -> bool {
        self.book_number.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_document() -> Document {
        Document::new(
            DocumentId::new("doc-1"),
            ActorRef::user(ActorId::new("author"), "Author"),
        )
    }

    #[test]
    fn test_new_document_is_drafted() {
        let doc = make_document();
        assert_eq!(doc.status, DocStatus::Drafted);
        assert_eq!(doc.version, 1);
        assert!(doc.history.is_empty());
        assert!(!doc.is_booked());
    }

    #[test]
    fn test_builders() {
        let doc = make_document()
            .with_status(DocStatus::MainProcessing)
            .with_book_number("2026/184")
            .with_node_id("step-2")
            .with_can_forward(false);
        assert_eq!(doc.status, DocStatus::MainProcessing);
        assert!(doc.is_booked());
        assert_eq!(doc.node_id.as_deref(), Some("step-2"));
        assert!(!doc.can_forward);
    }

    #[test]
    fn test_participant_checks() {
        let mut doc = make_document();
        doc.main_processors
            .push(Recipient::new(ActorRef::user(ActorId::new("m"), "Main")));
        doc.coordinators
            .push(Recipient::new(ActorRef::user(ActorId::new("c"), "Coord")));

        assert!(doc.is_participant(&ActorId::new("m")));
        assert!(doc.is_participant(&ActorId::new("c")));
        assert!(!doc.is_participant(&ActorId::new("stranger")));

        assert!(doc.is_main_processor(&ActorId::new("m")));
        assert!(!doc.is_main_processor(&ActorId::new("c")));
    }

    #[test]
    fn test_delegated_recipients() {
        let mut doc = make_document();
        doc.main_processors
            .push(Recipient::new(ActorRef::user(ActorId::new("m"), "Main")));
        doc.coordinators.push(Recipient::via_delegate(ActorRef::user(
            ActorId::new("d"),
            "Delegate",
        )));

        let delegated = doc.delegated_recipients();
        assert_eq!(delegated.len(), 1);
        assert!(delegated[0].actor.is_user(&ActorId::new("d")));
    }

    #[test]
    fn test_serde_round_trip() {
        let doc = make_document().with_book_number("2026/1");
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, doc.id);
        assert_eq!(back.status, doc.status);
        assert_eq!(back.book_number, doc.book_number);
    }
}
