//! Error types for docflow operations
//!
//! All errors are values, never process-fatal. The tree-construction
//! variants (cycle, dangling reference, duplicate) indicate malformed org
//! data and are raised fail-fast by `OrgHierarchy::build`; everything else
//! is a recoverable outcome the caller surfaces or retries as documented
//! per variant.

use crate::{ActionKind, DocStatus, OrgNodeId};

/// Errors that can occur in docflow operations
#[derive(Debug, thiserror::Error)]
pub enum DocflowError {
    /// Unknown node or document id. Recoverable — the id may be absent from
    /// the current snapshot; the caller should refetch.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The action is not in the legal-action set for the current status.
    /// Surfaced to the user, never retried automatically.
    #[error("Illegal transition: {action} is not legal from {status}")]
    IllegalTransition {
        status: DocStatus,
        action: ActionKind,
    },

    /// A validation rule was violated before any state change. The message
    /// names the specific rule so the user can correct the input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A precondition external to the state machine is missing.
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    /// Optimistic-concurrency conflict: the document changed since the
    /// caller last fetched it. The caller refetches and may re-present the
    /// action; never silently retried.
    #[error("Stale state: expected version {expected}, document is at {actual}")]
    StaleState { expected: u64, actual: u64 },

    /// The org tree contains a parent/child cycle.
    #[error("Cycle detected in org tree at node {0}")]
    CycleDetected(OrgNodeId),

    /// A node references a parent that does not exist.
    #[error("Dangling parent: node {node} references missing parent {parent}")]
    DanglingParent { node: OrgNodeId, parent: OrgNodeId },

    /// An organization references a leader that does not exist or is not a
    /// person node.
    #[error("Dangling leader: org {org} references invalid leader {leader}")]
    DanglingLeader { org: OrgNodeId, leader: OrgNodeId },

    /// The same node id appears twice in the flat org records.
    #[error("Duplicate org node id: {0}")]
    DuplicateNode(OrgNodeId),
}

/// Result type alias for docflow operations
pub type DocflowResult<T> = Result<T, DocflowError>;
