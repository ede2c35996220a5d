//! Host-bound view components.
//!
//! # Responsibility
//! - Turn form submissions into validated `add_project` calls.
//! - Re-render project lists whenever the store notifies.
//!
//! # Invariants
//! - Views never own the project sequence; they cache the last snapshot.
//! - Markup, templates and layout belong to the host, never to a view.

pub mod component;
pub mod host;
pub mod input;
pub mod list;
pub mod memory;
