//! Notification routing for docflow
//!
//! Turns an inbound event — a notification click, a deep link — into the
//! screen the user should land on. The resolver is a pure function over a
//! `(category, status)` dispatch table: no state, no side effects, the
//! same event always resolves to the same destination. Unmatched pairs
//! fall back to the generic main-detail view rather than failing, so new
//! statuses can ship before the router learns about them.

#![deny(unsafe_code)]

mod event;
mod resolver;

pub use event::*;
pub use resolver::*;
