//! Observable project store.
//!
//! # Responsibility
//! - Own the project sequence and the listener sequence.
//! - Fan out a snapshot of all projects to every listener after each append.
//!
//! # Invariants
//! - `add_project` is the only path that appends a project.
//! - Listeners are notified synchronously, in registration order, before
//!   `add_project` returns.
//! - Every listener receives a fully-appended, independent snapshot.
//! - Listeners run without the data lock held; concurrent `add_project`
//!   calls notify one at a time.

use crate::model::project::Project;
use crate::state::listener::{ListenerId, ProjectListener};
use log::debug;
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

static INSTANCE: OnceCell<ProjectState> = OnceCell::new();

struct ListenerEntry {
    id: ListenerId,
    listener: Box<dyn ProjectListener>,
}

#[derive(Default)]
struct StateInner {
    projects: Vec<Project>,
    listeners: Vec<ListenerEntry>,
    next_listener_id: u64,
    /// Number of notification rounds currently running outside the lock.
    notify_depth: usize,
    /// Unsubscribes requested while listeners were checked out.
    pending_removals: Vec<ListenerId>,
}

impl StateInner {
    fn push_listener(&mut self, listener: Box<dyn ProjectListener>) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push(ListenerEntry { id, listener });
        id
    }

    /// Puts checked-out listeners back ahead of any registered meanwhile.
    fn restore_listeners(&mut self, mut checked_out: Vec<ListenerEntry>) {
        checked_out.append(&mut self.listeners);
        self.listeners = checked_out;
        self.notify_depth -= 1;
        if self.notify_depth == 0 {
            let removals = std::mem::take(&mut self.pending_removals);
            self.listeners.retain(|entry| !removals.contains(&entry.id));
        }
    }
}

#[derive(Default)]
struct Shared {
    /// Serializes notification rounds; never taken by readers.
    notify: Mutex<()>,
    inner: Mutex<StateInner>,
}

/// Listeners checked out of the store for one notification round.
///
/// Dropping the round, including during a listener panic, returns them.
struct NotifyRound<'a> {
    inner: &'a Mutex<StateInner>,
    listeners: Vec<ListenerEntry>,
}

impl Drop for NotifyRound<'_> {
    fn drop(&mut self) {
        let listeners = std::mem::take(&mut self.listeners);
        lock_inner(self.inner).restore_listeners(listeners);
    }
}

/// Shared handle to one project store.
///
/// Cloning yields another handle to the same store. Views receive a handle at
/// construction instead of reaching for a global.
#[derive(Clone, Default)]
pub struct ProjectState {
    shared: Arc<Shared>,
}

impl ProjectState {
    /// Creates an empty, independent store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide store, creating it on first access.
    ///
    /// Hosts that cannot thread a handle through (the FFI bridge) use this;
    /// everything else should prefer an injected handle.
    pub fn instance() -> Self {
        INSTANCE.get_or_init(Self::new).clone()
    }

    /// Returns whether both handles point to the same store.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    /// Appends a listener. There is no duplicate check and no way to remove it.
    pub fn add_listener(&self, listener: impl ProjectListener + 'static) {
        let id = self.lock().push_listener(Box::new(listener));
        debug!("event=listener_added module=state status=ok listener={id}");
    }

    /// Appends a listener and returns a handle that can remove it again.
    pub fn subscribe(&self, listener: impl ProjectListener + 'static) -> Subscription {
        let id = self.lock().push_listener(Box::new(listener));
        debug!("event=listener_subscribed module=state status=ok listener={id}");
        Subscription {
            state: Arc::downgrade(&self.shared),
            id,
        }
    }

    /// Creates a project, appends it and notifies every listener.
    ///
    /// Returns the created record. The store is unlocked while listeners
    /// run, so they may read it, subscribe or unsubscribe. A panicking
    /// listener propagates its panic to the caller; the project stays
    /// appended and every listener stays registered.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Project {
        let project = Project::new(title, description, people);
        let _round_order = self
            .shared
            .notify
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let (snapshot, listeners) = {
            let mut inner = self.lock();
            inner.projects.push(project.clone());
            inner.notify_depth += 1;
            (inner.projects.clone(), std::mem::take(&mut inner.listeners))
        };

        // The data lock is released here so listeners may read the store.
        let mut round = NotifyRound {
            inner: &self.shared.inner,
            listeners,
        };
        for entry in round.listeners.iter_mut() {
            entry.listener.on_projects_changed(snapshot.clone());
        }
        let notified = round.listeners.len();
        drop(round);

        debug!(
            "event=project_added module=state status=ok project_id={} total={} listeners={}",
            project.id(),
            snapshot.len(),
            notified
        );
        project
    }

    /// Snapshot of all projects in insertion order.
    pub fn projects(&self) -> Vec<Project> {
        self.lock().projects.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().projects.is_empty()
    }

    /// Registered listeners, not counting those checked out for a running
    /// notification.
    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn lock(&self) -> MutexGuard<'_, StateInner> {
        lock_inner(&self.shared.inner)
    }
}

fn lock_inner(inner: &Mutex<StateInner>) -> MutexGuard<'_, StateInner> {
    // Every mutation completes under one guard, so a poisoned lock still
    // holds consistent data.
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Registration handle returned by [`ProjectState::subscribe`].
///
/// Dropping the handle keeps the listener registered.
pub struct Subscription {
    state: Weak<Shared>,
    id: ListenerId,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Removes the listener before the next notification.
    ///
    /// Returns `false` when the store is gone or the listener was already
    /// removed.
    pub fn unsubscribe(self) -> bool {
        let Some(state) = self.state.upgrade() else {
            return false;
        };
        let mut inner = lock_inner(&state.inner);
        let before = inner.listeners.len();
        inner.listeners.retain(|entry| entry.id != self.id);
        let mut removed = inner.listeners.len() != before;
        if !removed && inner.notify_depth > 0 {
            // Checked out for the running notification; drop it on return.
            inner.pending_removals.push(self.id);
            removed = true;
        }
        debug!(
            "event=listener_unsubscribed module=state status={} listener={}",
            if removed { "ok" } else { "missing" },
            self.id
        );
        removed
    }
}
