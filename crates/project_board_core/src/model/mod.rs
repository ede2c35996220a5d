//! Domain model for the project board.
//!
//! # Invariants
//! - Every project is identified by a stable, generated `ProjectId`.
//! - Projects are append-only: there is no update or delete.

pub mod project;
