//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record rendered by every list view.
//! - Generate stable identifiers at creation time.
//!
//! # Invariants
//! - `id` is generated once and never reused for another project.
//! - Records are immutable after creation; no update/delete path exists.

use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque unique identifier of one project record.
///
/// Rendered as text on every external surface; callers must not parse it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One project entered through the input form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
}

impl Project {
    /// Creates a project with a generated id.
    ///
    /// Only the state container calls this; views never build records.
    pub(crate) fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: ProjectId::generate(),
            title: title.into(),
            description: description.into(),
            people,
        }
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of people assigned to the project.
    pub fn people(&self) -> u32 {
        self.people
    }
}
