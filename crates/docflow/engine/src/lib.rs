//! Per-document workflow state machine for docflow
//!
//! A document enters the engine in an initial status; actors submit
//! actions (consult, forward, approve, return, recall, finish, delegate);
//! each action is validated against the legal-action table, moves the
//! status, updates the role-tagged recipient lists, and appends one
//! immutable history entry — atomically, or not at all.
//!
//! # Key invariants
//!
//! - An action not in the legal set for the current status fails with
//!   `IllegalTransition` and mutates nothing.
//! - Every successful transition appends exactly one [`ProcessingAction`]
//!   and bumps the optimistic-concurrency version by one.
//! - Concurrent actors are resolved by `expected_version`: a mismatch is
//!   `StaleState`, to be re-presented to the user against a fresh snapshot,
//!   never silently retried.
//!
//! # Example
//!
//! ```rust
//! use docflow_engine::{ActionRequest, DocflowEngine, Document};
//! use docflow_org::RecipientSelection;
//! use docflow_types::{ActionKind, ActorId, ActorRef, DocStatus, DocumentId};
//!
//! let mut engine = DocflowEngine::new();
//! let author = ActorRef::user(ActorId::new("author"), "Author");
//! let id = engine.insert_document(Document::new(DocumentId::new("doc-1"), author.clone()));
//!
//! let recipients = RecipientSelection::new(
//!     vec![ActorRef::user(ActorId::new("lead"), "Lead")],
//!     vec![],
//! );
//! let outcome = engine
//!     .submit_action(
//!         &id,
//!         ActionRequest::new(ActionKind::Forward, author).with_recipients(recipients),
//!         1,
//!     )
//!     .unwrap();
//! assert_eq!(outcome.new_status, DocStatus::PendingApproval);
//! ```

#![deny(unsafe_code)]

mod action;
mod document;
mod engine;
mod transitions;

pub use action::*;
pub use document::*;
pub use engine::*;
pub use transitions::{is_legal, legal_actions, resulting_status, MAX_COMMENT_LEN};
