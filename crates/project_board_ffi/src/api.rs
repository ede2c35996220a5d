//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose the board's form and lists to a native shell via FRB.
//! - Keep error semantics simple: envelopes with a message, never panics.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - All calls share one process-wide board bound to `ProjectState::instance()`.

use log::warn;
use once_cell::sync::Lazy;
use project_board_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    FormField, ListKind, LogSettings, MemoryForm, MemoryList, Project, ProjectInput,
    ProjectList, ProjectState, SubmitEvent, SubmitOutcome,
};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

static BOARD: Lazy<Mutex<BoardSession>> = Lazy::new(|| Mutex::new(BoardSession::new()));

struct BoardSession {
    input: ProjectInput<MemoryForm>,
    lists: Vec<ProjectList<MemoryList>>,
}

impl BoardSession {
    fn new() -> Self {
        let state = ProjectState::instance();
        let input = ProjectInput::new(MemoryForm::new(), state.clone());
        let lists = ListKind::ALL
            .into_iter()
            .map(|kind| ProjectList::new(kind, MemoryList::new(), &state))
            .collect();
        Self { input, lists }
    }

    fn list(&self, kind: ListKind) -> Option<&ProjectList<MemoryList>> {
        self.lists.iter().find(|list| list.kind() == kind)
    }
}

fn board() -> MutexGuard<'static, BoardSession> {
    BOARD.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory for rolling logs; empty logs to stderr.
///
/// # FFI contract
/// - Safe to call repeatedly with the same arguments (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let log_dir = log_dir.trim();
    let settings = LogSettings {
        level,
        log_dir: (!log_dir.is_empty()).then(|| PathBuf::from(log_dir)),
    };
    match init_logging_inner(&settings) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Project item returned to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardProjectItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub people: u32,
}

impl From<&Project> for BoardProjectItem {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            title: project.title().to_string(),
            description: project.description().to_string(),
            people: project.people(),
        }
    }
}

/// Envelope for one form submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSubmitResponse {
    /// Whether the project was added.
    pub ok: bool,
    /// Created project id on success.
    pub project_id: Option<String>,
    /// Alert text on failure, confirmation on success.
    pub message: String,
}

/// Submits the form with the given raw field values.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - On rejection the form keeps the submitted values and `message` carries
///   the alert text.
#[flutter_rust_bridge::frb(sync)]
pub fn board_submit(title: String, description: String, people: String) -> BoardSubmitResponse {
    let mut board = board();
    let form = board.input.host_mut();
    form.set(FormField::Title, title);
    form.set(FormField::Description, description);
    form.set(FormField::People, people);

    match board.input.submit_handler(&mut SubmitEvent::new()) {
        SubmitOutcome::Added(project) => BoardSubmitResponse {
            ok: true,
            project_id: Some(project.id().to_string()),
            message: "Project added.".to_string(),
        },
        SubmitOutcome::Rejected => {
            let message = board
                .input
                .host_mut()
                .take_alerts()
                .pop()
                .unwrap_or_default();
            BoardSubmitResponse {
                ok: false,
                project_id: None,
                message,
            }
        }
    }
}

/// Returns every project in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn board_projects() -> Vec<BoardProjectItem> {
    ProjectState::instance()
        .projects()
        .iter()
        .map(BoardProjectItem::from)
        .collect()
}

/// Returns the rendered items of the `active` or `finished` list.
///
/// Unknown kinds yield an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn board_list_items(kind: String) -> Vec<String> {
    let kind = match kind.parse::<ListKind>() {
        Ok(kind) => kind,
        Err(err) => {
            warn!("event=list_items module=ffi status=error reason=\"{err}\"");
            return Vec::new();
        }
    };
    let board = board();
    board
        .list(kind)
        .map(|list| list.with_host(|host| host.items().to_vec()))
        .unwrap_or_default()
}
