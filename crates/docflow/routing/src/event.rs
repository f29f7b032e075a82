//! Inbound events and destinations

use docflow_types::{DocStatus, DocumentId};
use serde::{Deserialize, Serialize};

/// The document category a notification refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocCategory {
    /// Incoming correspondence
    DocumentIn,
    /// Outgoing correspondence
    DocumentOut,
    /// Internal memos
    InternalDoc,
    /// Assigned tasks
    Task,
}

/// Which module a document currently belongs to, when the producing
/// system distinguishes them
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleCode {
    Issued,
    Handling,
}

/// An inbound event descriptor. Produced externally, consumed once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub category: DocCategory,
    pub status: DocStatus,
    /// Disambiguates rejected-intake routing; absent for most events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleCode>,
    pub doc_id: DocumentId,
    /// True when the recipient holds the document via a delegation grant
    #[serde(default)]
    pub via_delegate: bool,
}

impl NotificationEvent {
    pub fn new(category: DocCategory, status: DocStatus, doc_id: DocumentId) -> Self {
        Self {
            category,
            status,
            module: None,
            doc_id,
            via_delegate: false,
        }
    }

    pub fn with_module(mut self, module: ModuleCode) -> Self {
        self.module = Some(module);
        self
    }

    pub fn via_delegate(mut self) -> Self {
        self.via_delegate = true;
        self
    }
}

/// A screen/role view identifier the navigation layer understands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    /// Drafting/edit view
    DraftEditor,
    /// Pending-approval worklist
    ApprovalQueue,
    /// Opinion-circulation view
    OpinionQueue,
    /// Processing desk; the delegated variant is a distinct screen
    ProcessingDesk { delegated: bool },
    /// Read-only for-information feed
    InformationFeed,
    /// Waiting-to-issue worklist
    IssuanceQueue,
    /// Issued-documents list
    IssuedList,
    /// Detail view inside the issued module
    IssuedDetail,
    /// Detail view inside the handling module
    HandlingDetail,
    /// Recall requests and confirmations
    RecallQueue,
    /// Intake acceptance review
    AcceptanceReview,
    /// Generic document detail — the fallback
    MainDetail,
}

/// Where the navigation layer should take the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub view: View,
    pub doc_id: DocumentId,
}

impl Destination {
    pub fn new(view: View, doc_id: DocumentId) -> Self {
        Self { view, doc_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builders() {
        let event = NotificationEvent::new(
            DocCategory::DocumentOut,
            DocStatus::RejectedIntake,
            DocumentId::new("doc-1"),
        )
        .with_module(ModuleCode::Issued)
        .via_delegate();

        assert_eq!(event.module, Some(ModuleCode::Issued));
        assert!(event.via_delegate);
    }

    #[test]
    fn test_event_serde_defaults() {
        let json = r#"{"category":"Task","status":"Issued","doc_id":"doc-2"}"#;
        let event: NotificationEvent = serde_json::from_str(json).unwrap();
        assert!(!event.via_delegate);
        assert!(event.module.is_none());
    }
}
