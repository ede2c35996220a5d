//! Observer contract for project state changes.

use crate::model::project::Project;
use std::fmt::{Display, Formatter};

/// Receives the full project sequence after every change.
///
/// Each call gets its own snapshot; mutating it never reaches the store.
/// Implementations may read the store but must not call `add_project` on it.
pub trait ProjectListener: Send {
    fn on_projects_changed(&mut self, projects: Vec<Project>);
}

impl<F> ProjectListener for F
where
    F: FnMut(Vec<Project>) + Send,
{
    fn on_projects_changed(&mut self, projects: Vec<Project>) {
        self(projects)
    }
}

/// Registration id of one listener within its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

impl Display for ListenerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}
