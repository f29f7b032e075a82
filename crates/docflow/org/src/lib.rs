//! Org hierarchy and recipient selection for docflow
//!
//! Recipient-picking dialogs (consult, forward, delegate) all work the same
//! way: fetch a flat snapshot of the org structure, build an immutable tree
//! from it, and let the user multi-select nodes with cascading semantics
//! between an organization and its members. This crate holds both halves:
//!
//! - [`OrgHierarchy`] — the immutable forest, validated fail-fast at build
//!   time (cycles, dangling parents/leaders, duplicates are defects in the
//!   input, not runtime errors).
//! - [`SelectionSet`] — the per-dialog multi-select state. Created fresh per
//!   dialog invocation and discarded after the action is submitted or
//!   cancelled; it never persists and never renders anything.
//!
//! "Fully selected" for an organization is a derived display property,
//! recomputed on read. The selection itself only ever stores person nodes.

#![deny(unsafe_code)]

mod hierarchy;
mod selection;

pub use hierarchy::*;
pub use selection::*;
