//! Observable project state.
//!
//! # Responsibility
//! - Hold the single authoritative project sequence of a run.
//! - Notify observers synchronously whenever a project is added.
//!
//! # Invariants
//! - Views cache only the last snapshot they were handed.
//! - Listener registration via `add_listener` is append-only; `subscribe`
//!   is the only removal path.

pub mod listener;
pub mod project_state;
