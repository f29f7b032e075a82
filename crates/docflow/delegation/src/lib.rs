//! Acting-identity resolution for docflow
//!
//! An actor opening a document may be acting as themself or as the
//! delegate-of-record for another actor. Grants are owned by an external
//! admin module; this crate only answers "who is actor X effectively,
//! right now, given these grants" — the engine then runs its recipient
//! checks against the effective identity, and the router switches to the
//! delegate-specific views. The legal-action table is never affected.

#![deny(unsafe_code)]

mod grant;
mod resolver;

pub use grant::*;
pub use resolver::*;
