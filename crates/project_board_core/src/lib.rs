//! Core domain logic for the project board.
//! This crate owns the project store, validation and the host-agnostic views.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod validation;
pub mod view;

pub use config::{ConfigError, FormRules, LogSettings};
pub use logging::{default_log_level, init_logging, logging_status, sanitize_user_text};
pub use model::project::{Project, ProjectId};
pub use state::listener::{ListenerId, ProjectListener};
pub use state::project_state::{ProjectState, Subscription};
pub use validation::{validate, Validatable, ValidatableValue, ValidationError};
pub use view::component::{Component, InsertPosition};
pub use view::host::{FormField, FormHost, ListHost};
pub use view::input::{
    coerce_number, ProjectInput, SubmitEvent, SubmitOutcome, INVALID_INPUT_ALERT,
};
pub use view::list::{ListKind, ListKindError, ProjectList};
pub use view::memory::{MemoryForm, MemoryList};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
