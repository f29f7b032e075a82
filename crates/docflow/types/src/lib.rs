//! Shared domain types for docflow
//!
//! Docflow routes documents through an organization: who may receive them,
//! what state they are in, which actions are legal, and where a notification
//! about them should land. This crate holds the vocabulary every other
//! docflow crate speaks:
//!
//! - **Ids**: string newtypes for actors, org nodes, documents, and tasks.
//! - **ActorRef / Recipient**: who participates in a document, and in what
//!   role. A `Recipient` additionally carries the per-entry delegation flag.
//! - **DocStatus / ActionKind**: the document state machine's states and the
//!   actions that move between them. The legal-action table itself lives in
//!   `docflow-engine`.
//! - **DocflowError**: every failure is a value. The only conditions treated
//!   as malformed input rather than recoverable errors are org-tree
//!   construction defects (cycles, dangling references), which fail fast at
//!   build time.

#![deny(unsafe_code)]

mod actor;
mod errors;
mod ids;
mod status;

pub use actor::*;
pub use errors::*;
pub use ids::*;
pub use status::*;
