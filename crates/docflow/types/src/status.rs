//! Document statuses and action kinds
//!
//! `DocStatus` is the single enumerated status field that replaces the
//! source system's scattered status-code comparisons. Which `ActionKind`s
//! are legal from which status, and what status results, is the legal-action
//! table in `docflow-engine`.

use serde::{Deserialize, Serialize};

/// The workflow state of a document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DocStatus {
    /// Being drafted, not yet submitted
    #[default]
    Drafted,
    /// Submitted, waiting for an approver
    PendingApproval,
    /// Circulating for opinions before approval
    AwaitingOpinion,
    /// Sent back to the drafter by an approver
    Returned,
    /// With the main processor(s)
    MainProcessing,
    /// With coordinating processors
    Coordinating,
    /// Distributed for information only
    ForInformation,
    /// Approved, waiting to be issued
    PendingIssuance,
    /// Issued to its receivers
    Issued,
    /// A recall has been requested but not confirmed
    RecallRequested,
    /// Recalled — terminal
    Recalled,
    /// Waiting for acceptance review at intake
    AcceptancePending,
    /// Accepted at intake — terminal
    AcceptanceApproved,
    /// Rejected at intake review — terminal
    AcceptanceRejected,
    /// Rejected during intake, routed back by module
    RejectedIntake,
    /// Finished processing — terminal
    Completed,
}

impl DocStatus {
    /// Check if no further actions are possible from this status
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Recalled
                | Self::AcceptanceApproved
                | Self::AcceptanceRejected
                | Self::RejectedIntake
                | Self::Completed
        )
    }

    /// Check if the document is in active processing
    pub fn is_processing(&self) -> bool {
        matches!(self, Self::MainProcessing | Self::Coordinating)
    }
}

impl std::fmt::Display for DocStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// An action an actor can submit against a document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Ask selected recipients for their input
    Consult,
    /// Hand the document on — submit for approval, or pass to
    /// coordinators / for-information recipients while processing
    Forward,
    /// Approve at the current review step
    Approve,
    /// Send back to the previous holder
    Return,
    /// Request a recall of the document
    Recall,
    /// Confirm a requested recall
    RecallConfirm,
    /// Close out processing
    Finish,
    /// Add recipients acting on behalf of the current holder
    Delegate,
    /// Leave an opinion without changing status
    Comment,
    /// Read-only acknowledgement by a for-information recipient
    Acknowledge,
    /// Distribute an issued document to further receivers
    ForwardReceivers,
    /// Spawn a follow-up task from an issued document
    CreateTask,
    /// Publish an approved document
    Issue,
    /// Approve at intake review
    AcceptanceApprove,
    /// Reject at intake review
    AcceptanceReject,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(DocStatus::Recalled.is_terminal());
        assert!(DocStatus::Completed.is_terminal());
        assert!(DocStatus::AcceptanceApproved.is_terminal());
        assert!(DocStatus::AcceptanceRejected.is_terminal());
        assert!(DocStatus::RejectedIntake.is_terminal());

        assert!(!DocStatus::Drafted.is_terminal());
        assert!(!DocStatus::Issued.is_terminal());
        assert!(!DocStatus::RecallRequested.is_terminal());
    }

    #[test]
    fn test_processing_statuses() {
        assert!(DocStatus::MainProcessing.is_processing());
        assert!(DocStatus::Coordinating.is_processing());
        assert!(!DocStatus::ForInformation.is_processing());
        assert!(!DocStatus::Issued.is_processing());
    }

    #[test]
    fn test_default_is_drafted() {
        assert_eq!(DocStatus::default(), DocStatus::Drafted);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DocStatus::PendingApproval), "PendingApproval");
        assert_eq!(format!("{}", ActionKind::RecallConfirm), "RecallConfirm");
    }
}
