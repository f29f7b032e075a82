//! Action requests and outcomes
//!
//! An `ActionRequest` carries everything an actor submits in one go: the
//! action kind, an optional comment and attachments, and — for the actions
//! that gather recipients from a dialog — the `RecipientSelection` the
//! dialog produced. Nothing here mutates a document; the engine validates
//! and commits.

use docflow_org::RecipientSelection;
use docflow_types::{ActionKind, ActorRef, DocStatus, FileRef, TaskId};
use serde::{Deserialize, Serialize};

/// Which list (and resulting status) a processing-time `Forward` targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForwardRole {
    /// Recipients become coordinating processors
    Coordinator,
    /// Recipients receive the document for information only
    ForInformation,
}

/// A submitted action against one document
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionRequest {
    pub kind: ActionKind,
    pub actor: ActorRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<FileRef>,
    /// Output of the recipient dialog, for consult/forward/delegate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<RecipientSelection>,
    /// Target role for a `Forward` out of a processing status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_role: Option<ForwardRole>,
}

impl ActionRequest {
    pub fn new(kind: ActionKind, actor: ActorRef) -> Self {
        Self {
            kind,
            actor,
            comment: None,
            attachments: Vec::new(),
            recipients: None,
            forward_role: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_attachment(mut self, attachment: FileRef) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn with_recipients(mut self, recipients: RecipientSelection) -> Self {
        self.recipients = Some(recipients);
        self
    }

    pub fn with_forward_role(mut self, role: ForwardRole) -> Self {
        self.forward_role = Some(role);
        self
    }
}

/// What a successfully committed action produced
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub new_status: DocStatus,
    pub new_version: u64,
    /// Set when the action spawned a follow-up task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<TaskId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use docflow_types::ActorId;

    #[test]
    fn test_request_builders() {
        let request = ActionRequest::new(
            ActionKind::Forward,
            ActorRef::user(ActorId::new("u-1"), "Alice"),
        )
        .with_comment("please handle")
        .with_attachment(FileRef::new("f-1", "scan.pdf"))
        .with_forward_role(ForwardRole::ForInformation);

        assert_eq!(request.kind, ActionKind::Forward);
        assert_eq!(request.comment.as_deref(), Some("please handle"));
        assert_eq!(request.attachments.len(), 1);
        assert_eq!(request.forward_role, Some(ForwardRole::ForInformation));
        assert!(request.recipients.is_none());
    }
}
