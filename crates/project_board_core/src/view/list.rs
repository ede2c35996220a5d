//! Project list view.
//!
//! # Responsibility
//! - Observe the project store and mirror every snapshot into a list host.
//!
//! # Invariants
//! - The cached projects are always the last delivered snapshot.
//! - Each render clears the list element before appending, so the element
//!   holds exactly one item per project.
//! - Both list kinds render the full, unfiltered sequence; projects carry no
//!   status to filter on.

use crate::model::project::Project;
use crate::state::project_state::ProjectState;
use crate::view::component::{Component, InsertPosition};
use crate::view::host::ListHost;
use log::trace;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Which list a view represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Active,
    Finished,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [Self::Active, Self::Finished];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Id of the component's root element, e.g. `active-projects`.
    pub fn element_id(self) -> String {
        format!("{}-projects", self.as_str())
    }

    /// Id of the inner list element, e.g. `active-projects-list`.
    pub fn list_id(self) -> String {
        format!("{}-projects-list", self.as_str())
    }

    /// Heading text, e.g. `ACTIVE PROJECTS`.
    pub fn heading(self) -> String {
        format!("{} PROJECTS", self.as_str().to_uppercase())
    }
}

impl Display for ListKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListKind {
    type Err = ListKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            other => Err(ListKindError(other.to_string())),
        }
    }
}

/// Unknown list kind name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListKindError(pub String);

impl Display for ListKindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported list kind `{}`; expected active|finished",
            self.0
        )
    }
}

impl Error for ListKindError {}

struct ListInner<H> {
    host: H,
    assigned_projects: Vec<Project>,
}

impl<H: ListHost> ListInner<H> {
    fn render_projects(&mut self) {
        self.host.clear_items();
        for project in &self.assigned_projects {
            self.host.append_item(project.title());
        }
    }
}

/// List component kept in sync with a `ProjectState`.
pub struct ProjectList<H: ListHost + 'static> {
    kind: ListKind,
    state: ProjectState,
    inner: Arc<Mutex<ListInner<H>>>,
}

impl<H: ListHost + 'static> ProjectList<H> {
    /// Attaches the list to `host` and registers it as a store listener.
    pub fn new(kind: ListKind, host: H, state: &ProjectState) -> Self {
        let inner = Arc::new(Mutex::new(ListInner {
            host,
            assigned_projects: Vec::new(),
        }));

        let mut list = Self {
            kind,
            state: state.clone(),
            inner,
        };
        let (element_id, position) = (list.element_id(), list.insert_position());
        list.lock().host.attach(&element_id, position);
        list.configure();
        list.render_content();
        list
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Projects delivered by the last notification.
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.lock().assigned_projects.clone()
    }

    /// Runs `f` against the host, e.g. to read rendered items.
    pub fn with_host<R>(&self, f: impl FnOnce(&H) -> R) -> R {
        f(&self.lock().host)
    }

    fn lock(&self) -> MutexGuard<'_, ListInner<H>> {
        lock(&self.inner)
    }
}

impl<H: ListHost + 'static> Component for ProjectList<H> {
    fn element_id(&self) -> String {
        self.kind.element_id()
    }

    fn insert_position(&self) -> InsertPosition {
        InsertPosition::BeforeEnd
    }

    /// Registers the store listener that mirrors every snapshot.
    fn configure(&mut self) {
        let kind = self.kind;
        let listener_inner = Arc::clone(&self.inner);
        self.state.add_listener(move |projects: Vec<Project>| {
            let mut inner = lock(&listener_inner);
            trace!(
                "event=list_render module=view status=ok kind={} projects={}",
                kind,
                projects.len()
            );
            inner.assigned_projects = projects;
            inner.render_projects();
        });
    }

    fn render_content(&mut self) {
        let mut inner = self.lock();
        inner.host.set_list_id(&self.kind.list_id());
        inner.host.set_heading(&self.kind.heading());
    }
}

fn lock<H>(inner: &Mutex<ListInner<H>>) -> MutexGuard<'_, ListInner<H>> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
