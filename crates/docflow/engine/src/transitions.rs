//! The legal-action table
//!
//! One table replaces the status-string conditionals that were scattered
//! through the source system's dialogs and action panels. `legal_actions`
//! answers "which actions may be submitted from this status"; `resulting_status`
//! answers "where does a legal action land". Both are total over `DocStatus`.
//!
//! The `Finish` precondition (a booked number on the document) is deliberately
//! NOT part of this table — it is business policy checked by the engine on top
//! of legality.

use crate::ForwardRole;
use docflow_types::{ActionKind, DocStatus};

/// Maximum accepted comment length, in characters
pub const MAX_COMMENT_LEN: usize = 2000;

/// The actions that may legally be submitted from a status.
///
/// Anything not listed here fails with `IllegalTransition` and mutates
/// nothing. Terminal statuses have empty action sets.
pub fn legal_actions(status: DocStatus) -> &'static [ActionKind] {
    use ActionKind::*;
    match status {
        DocStatus::Drafted => &[Forward],
        DocStatus::PendingApproval => &[Approve, Return],
        DocStatus::AwaitingOpinion => &[Comment, Approve],
        DocStatus::Returned => &[Forward],
        DocStatus::MainProcessing | DocStatus::Coordinating => {
            &[Consult, Forward, Finish, Delegate, Recall]
        }
        DocStatus::ForInformation => &[Acknowledge],
        DocStatus::PendingIssuance => &[Issue],
        DocStatus::Issued => &[ForwardReceivers, Recall, CreateTask],
        DocStatus::RecallRequested => &[RecallConfirm],
        DocStatus::AcceptancePending => &[AcceptanceApprove, AcceptanceReject],
        DocStatus::Recalled
        | DocStatus::AcceptanceApproved
        | DocStatus::AcceptanceRejected
        | DocStatus::RejectedIntake
        | DocStatus::Completed => &[],
    }
}

/// Check a single (status, action) pair against the table
pub fn is_legal(status: DocStatus, action: ActionKind) -> bool {
    legal_actions(status).contains(&action)
}

/// The status a legal action results in.
///
/// Callers must have checked `is_legal` first; an illegal pair here keeps
/// the current status, which the engine never reaches. `Forward` from a
/// processing status is disambiguated by the chosen recipient role.
pub fn resulting_status(
    status: DocStatus,
    action: ActionKind,
    forward_role: Option<ForwardRole>,
) -> DocStatus {
    use ActionKind::*;
    match (status, action) {
        (DocStatus::Drafted | DocStatus::Returned, Forward) => DocStatus::PendingApproval,
        (DocStatus::PendingApproval, Approve) => DocStatus::PendingIssuance,
        (DocStatus::PendingApproval, Return) => DocStatus::Returned,
        (DocStatus::AwaitingOpinion, Comment) => DocStatus::AwaitingOpinion,
        (DocStatus::AwaitingOpinion, Approve) => DocStatus::MainProcessing,
        (DocStatus::MainProcessing | DocStatus::Coordinating, Consult) => DocStatus::Coordinating,
        (DocStatus::MainProcessing | DocStatus::Coordinating, Forward) => match forward_role {
            Some(ForwardRole::ForInformation) => DocStatus::ForInformation,
            _ => DocStatus::Coordinating,
        },
        (DocStatus::MainProcessing | DocStatus::Coordinating, Finish) => DocStatus::Completed,
        (DocStatus::MainProcessing | DocStatus::Coordinating, Delegate) => status,
        (DocStatus::MainProcessing | DocStatus::Coordinating, Recall) => DocStatus::RecallRequested,
        (DocStatus::ForInformation, Acknowledge) => DocStatus::ForInformation,
        (DocStatus::PendingIssuance, Issue) => DocStatus::Issued,
        (DocStatus::Issued, ForwardReceivers | CreateTask) => DocStatus::Issued,
        (DocStatus::Issued, Recall) => DocStatus::RecallRequested,
        (DocStatus::RecallRequested, RecallConfirm) => DocStatus::Recalled,
        (DocStatus::AcceptancePending, AcceptanceApprove) => DocStatus::AcceptanceApproved,
        (DocStatus::AcceptancePending, AcceptanceReject) => DocStatus::AcceptanceRejected,
        _ => status,
    }
}

#[cfg(test)]
pub(crate) const ALL_STATUSES: [DocStatus; 16] = [
    DocStatus::Drafted,
    DocStatus::PendingApproval,
    DocStatus::AwaitingOpinion,
    DocStatus::Returned,
    DocStatus::MainProcessing,
    DocStatus::Coordinating,
    DocStatus::ForInformation,
    DocStatus::PendingIssuance,
    DocStatus::Issued,
    DocStatus::RecallRequested,
    DocStatus::Recalled,
    DocStatus::AcceptancePending,
    DocStatus::AcceptanceApproved,
    DocStatus::AcceptanceRejected,
    DocStatus::RejectedIntake,
    DocStatus::Completed,
];

#[cfg(test)]
pub(crate) const ALL_ACTIONS: [ActionKind; 15] = [
    ActionKind::Consult,
    ActionKind::Forward,
    ActionKind::Approve,
    ActionKind::Return,
    ActionKind::Recall,
    ActionKind::RecallConfirm,
    ActionKind::Finish,
    ActionKind::Delegate,
    ActionKind::Comment,
    ActionKind::Acknowledge,
    ActionKind::ForwardReceivers,
    ActionKind::CreateTask,
    ActionKind::Issue,
    ActionKind::AcceptanceApprove,
    ActionKind::AcceptanceReject,
];
