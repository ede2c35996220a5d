use project_board_core::{Project, ProjectState, Subscription};
use std::collections::HashSet;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

fn recording_listener(state: &ProjectState) -> Arc<Mutex<Vec<Vec<Project>>>> {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    state.add_listener(move |projects: Vec<Project>| sink.lock().unwrap().push(projects));
    calls
}

#[test]
fn every_listener_sees_each_append_in_order() {
    let state = ProjectState::new();
    let first = recording_listener(&state);
    let second = recording_listener(&state);

    let titles = ["alpha", "beta", "gamma", "delta"];
    for (index, title) in titles.iter().enumerate() {
        state.add_project(*title, "some description", (index % 5) as u32 + 1);
    }

    for calls in [first, second] {
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), titles.len());
        for (call_index, snapshot) in calls.iter().enumerate() {
            assert_eq!(snapshot.len(), call_index + 1);
            let seen: Vec<&str> = snapshot.iter().map(Project::title).collect();
            assert_eq!(seen, titles[..=call_index]);
        }
    }
}

#[test]
fn mutating_a_snapshot_does_not_reach_the_store() {
    let state = ProjectState::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    state.add_listener(move |mut projects: Vec<Project>| {
        projects.clear();
        sink.lock().unwrap().push(projects.len());
    });
    let lengths = recording_listener(&state);

    state.add_project("one", "first project", 1);
    state.add_project("two", "second project", 2);

    assert_eq!(*seen.lock().unwrap(), vec![0, 0]);
    let lengths: Vec<usize> = lengths.lock().unwrap().iter().map(Vec::len).collect();
    assert_eq!(lengths, vec![1, 2]);
    assert_eq!(state.len(), 2);
}

#[test]
fn add_project_returns_record_with_unique_id() {
    let state = ProjectState::new();
    let ids: HashSet<String> = (0..50)
        .map(|i| {
            state
                .add_project(format!("p{i}"), "description", 3)
                .id()
                .to_string()
        })
        .collect();
    assert_eq!(ids.len(), 50);

    let stored: HashSet<String> = state
        .projects()
        .iter()
        .map(|project| project.id().to_string())
        .collect();
    assert_eq!(stored, ids);
}

#[test]
fn listeners_may_be_registered_twice() {
    let state = ProjectState::new();
    let count = Arc::new(Mutex::new(0));
    for _ in 0..2 {
        let count = Arc::clone(&count);
        state.add_listener(move |_: Vec<Project>| *count.lock().unwrap() += 1);
    }
    state.add_project("t", "description", 1);
    assert_eq!(*count.lock().unwrap(), 2);
}

#[test]
fn unsubscribed_listener_misses_later_notifications() {
    let state = ProjectState::new();
    let count = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&count);
    let subscription = state.subscribe(move |_: Vec<Project>| *sink.lock().unwrap() += 1);
    let kept = recording_listener(&state);

    state.add_project("one", "first project", 1);
    assert!(subscription.unsubscribe());
    state.add_project("two", "second project", 2);

    assert_eq!(*count.lock().unwrap(), 1);
    assert_eq!(kept.lock().unwrap().len(), 2);
    assert_eq!(state.listener_count(), 1);
}

#[test]
fn store_recovers_after_listener_panic() {
    let state = ProjectState::new();
    state.add_listener(|_: Vec<Project>| panic!("listener failure"));

    let panicking = state.clone();
    let result = std::panic::catch_unwind(move || {
        panicking.add_project("one", "first project", 1);
    });
    assert!(result.is_err());
    assert_eq!(state.len(), 1);
    assert_eq!(state.listener_count(), 1);
}

#[test]
fn listener_can_read_the_store_while_notified() {
    let state = ProjectState::new();
    let reader = state.clone();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    state.add_listener(move |projects: Vec<Project>| {
        let stored = reader.projects().len();
        sink.lock().unwrap().push((projects.len(), reader.len(), stored));
    });

    let (done_tx, done_rx) = mpsc::channel();
    let writer = state.clone();
    thread::spawn(move || {
        writer.add_project("one", "first project", 1);
        writer.add_project("two", "second project", 2);
        done_tx.send(()).unwrap();
    });

    done_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("add_project should return while its listener reads the store");
    assert_eq!(*seen.lock().unwrap(), vec![(1, 1, 1), (2, 2, 2)]);
}

#[test]
fn listener_can_unsubscribe_itself_while_notified() {
    let state = ProjectState::new();
    let handle: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
    let count = Arc::new(Mutex::new(0));
    let (slot, sink) = (Arc::clone(&handle), Arc::clone(&count));
    let subscription = state.subscribe(move |_: Vec<Project>| {
        *sink.lock().unwrap() += 1;
        if let Some(subscription) = slot.lock().unwrap().take() {
            assert!(subscription.unsubscribe());
        }
    });
    *handle.lock().unwrap() = Some(subscription);
    let kept = recording_listener(&state);

    state.add_project("one", "first project", 1);
    state.add_project("two", "second project", 2);

    assert_eq!(*count.lock().unwrap(), 1);
    assert_eq!(kept.lock().unwrap().len(), 2);
    assert_eq!(state.listener_count(), 1);
}

#[test]
fn listener_added_while_notified_joins_the_next_round() {
    let state = ProjectState::new();
    let late_calls = Arc::new(Mutex::new(Vec::new()));
    let registrar = state.clone();
    let sink = Arc::clone(&late_calls);
    let mut registered = false;
    state.add_listener(move |_: Vec<Project>| {
        if !registered {
            registered = true;
            let sink = Arc::clone(&sink);
            registrar.add_listener(move |projects: Vec<Project>| {
                sink.lock().unwrap().push(projects.len())
            });
        }
    });

    state.add_project("one", "first project", 1);
    assert_eq!(state.listener_count(), 2);
    assert!(late_calls.lock().unwrap().is_empty());

    state.add_project("two", "second project", 2);
    assert_eq!(*late_calls.lock().unwrap(), vec![2]);
}
