//! Category-keyed task state with deferred hydration and debounced
//! persistence.
//!
//! The store is an explicit value: construct it once per session with a
//! [`KeyValueStorage`] and a [`Clock`], call [`TaskStore::hydrate`] when the
//! caller is ready for the load, and poll [`TaskStore::poll_persist`] from the
//! event loop. Categories are independent partitions of the task map.

pub mod debounce;

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::io::clock::{Clock, SystemClock};
use crate::io::storage::{KeyValueStorage, StorageError};
use crate::model::{CategoryState, FilterSpec, LessonTask, TaskPatch, TaskStatus};
use crate::ops::filter;
use crate::ops::task_ops;

pub use debounce::Debouncer;

/// Default storage key for the whole category map
pub const DEFAULT_KEY: &str = "tasks";

/// Default quiet window before a change is persisted
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Error type for store persistence
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not persist tasks: {0}")]
    Persist(#[from] StorageError),
    #[error("could not encode tasks: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Outcome of the single-shot hydration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// Persisted state was loaded (number of categories)
    Restored(usize),
    /// Nothing was persisted yet
    Empty,
    /// Persisted state existed but could not be read or decoded
    Discarded,
    /// Hydration already ran
    Skipped,
}

#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub key: String,
    pub debounce: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            key: DEFAULT_KEY.to_string(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Owner of all per-category task state
pub struct TaskStore<S: KeyValueStorage, C: Clock = SystemClock> {
    storage: S,
    clock: C,
    key: String,
    tasks: CategoryState,
    expanded_task_id: Option<String>,
    active_filters: HashMap<String, FilterSpec>,
    hydrated: bool,
    /// Bumped on every change to `tasks`
    revision: u64,
    persist: Debouncer,
}

impl<S: KeyValueStorage> TaskStore<S, SystemClock> {
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock, StoreOptions::default())
    }
}

impl<S: KeyValueStorage, C: Clock> TaskStore<S, C> {
    pub fn with_clock(storage: S, clock: C, options: StoreOptions) -> Self {
        TaskStore {
            storage,
            clock,
            key: options.key,
            tasks: CategoryState::new(),
            expanded_task_id: None,
            active_filters: HashMap::new(),
            hydrated: false,
            revision: 0,
            persist: Debouncer::new(options.debounce),
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Load the persisted category map, replacing the in-memory one.
    ///
    /// Runs at most once. Read and decode failures are logged and treated as
    /// "no prior state"; they never reach the caller.
    pub fn hydrate(&mut self) -> Hydration {
        if self.hydrated {
            return Hydration::Skipped;
        }

        let outcome = match self.storage.load(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<CategoryState>(&raw) {
                Ok(state) => {
                    let count = state.len();
                    self.tasks = state;
                    self.revision += 1;
                    Hydration::Restored(count)
                }
                Err(e) => {
                    warn!(key = %self.key, error = %e, "discarding unreadable persisted tasks");
                    Hydration::Discarded
                }
            },
            Ok(None) => Hydration::Empty,
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not load persisted tasks");
                Hydration::Discarded
            }
        };

        self.hydrated = true;
        info!(?outcome, categories = self.tasks.len(), "task store hydrated");
        // Whatever was seeded before the load is now safe to persist
        self.schedule_persist();
        outcome
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Monotonic counter of task-map changes. Unchanged means no new state
    /// was produced.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Tasks for a category (empty if the category is unknown)
    pub fn tasks(&self, category: &str) -> &[LessonTask] {
        self.tasks.get(category).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.tasks.contains_key(category)
    }

    /// Category keys in insertion order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(|k| k.as_str())
    }

    pub fn snapshot(&self) -> &CategoryState {
        &self.tasks
    }

    /// First task in `category` with the given id
    pub fn task(&self, category: &str, task_id: &str) -> Option<&LessonTask> {
        task_ops::find_task(self.tasks(category), task_id)
    }

    /// Visible subset of a category for the given filter. Read-only.
    pub fn filter_tasks(&self, category: &str, spec: &FilterSpec) -> Vec<&LessonTask> {
        filter::filter_tasks(self.tasks(category), spec)
    }

    pub fn expanded_task_id(&self) -> Option<&str> {
        self.expanded_task_id.as_deref()
    }

    /// Last filter recorded for a category
    pub fn active_filters(&self, category: &str) -> Option<&FilterSpec> {
        self.active_filters.get(category)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Register or replace a category's task list.
    ///
    /// When the incoming list has the same length and the same id and status
    /// at every position as the stored one, nothing changes. Returns true if
    /// the list was replaced.
    pub fn set_tasks(&mut self, category: &str, tasks: Vec<LessonTask>) -> bool {
        if let Some(current) = self.tasks.get(category)
            && same_ids_and_statuses(current, &tasks)
        {
            return false;
        }
        // An absent category compares as an empty list
        if tasks.is_empty() && !self.tasks.contains_key(category) {
            return false;
        }
        debug!(category, count = tasks.len(), "replacing category tasks");
        self.tasks.insert(category.to_string(), tasks);
        self.tasks_changed();
        true
    }

    /// Merge `patch` into every task in `category` whose id is `task_id`.
    /// Unknown categories or ids are a silent no-op. Returns true if any
    /// task changed.
    pub fn update_task(&mut self, category: &str, task_id: &str, patch: &TaskPatch) -> bool {
        let Some(tasks) = self.tasks.get_mut(category) else {
            return false;
        };
        let mut changed = false;
        for task in tasks.iter_mut().filter(|t| t.id == task_id) {
            changed |= task_ops::apply_patch(task, patch);
        }
        if changed {
            self.tasks_changed();
        }
        changed
    }

    /// Advance matching tasks one step through todo → in progress → done.
    /// Returns the new status of the first match, or `None` if nothing
    /// matched.
    pub fn toggle_task_status(&mut self, category: &str, task_id: &str) -> Option<TaskStatus> {
        let tasks = self.tasks.get_mut(category)?;
        let mut first = None;
        for task in tasks.iter_mut().filter(|t| t.id == task_id) {
            let status = task_ops::cycle_status(task);
            first.get_or_insert(status);
        }
        if first.is_some() {
            self.tasks_changed();
        }
        first
    }

    /// Set the single expanded task. Setting the same id again keeps it
    /// expanded.
    pub fn set_expanded_task_id(&mut self, id: Option<String>) {
        self.expanded_task_id = id;
    }

    /// Record the filter last applied to a category. Does not affect
    /// `filter_tasks`.
    pub fn set_active_filters(&mut self, category: &str, spec: FilterSpec) {
        self.active_filters.insert(category.to_string(), spec);
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    fn tasks_changed(&mut self) {
        self.revision += 1;
        self.schedule_persist();
    }

    fn schedule_persist(&mut self) {
        if !self.hydrated || self.tasks.is_empty() {
            // Never clobber not-yet-loaded data with an empty or partial map
            self.persist.cancel();
            return;
        }
        self.persist.schedule(self.clock.now());
    }

    /// Whether a write is waiting for its quiet window to elapse
    pub fn persist_pending(&self) -> bool {
        self.persist.is_pending()
    }

    /// Time until the pending write is due, if any
    pub fn persist_due_in(&self) -> Option<Duration> {
        self.persist.due_in(self.clock.now())
    }

    /// Write the current snapshot if the debounce window has elapsed.
    /// Returns true if a write happened.
    pub fn poll_persist(&mut self) -> Result<bool, StoreError> {
        if !self.persist.fire(self.clock.now()) {
            return Ok(false);
        }
        self.write_snapshot()?;
        Ok(true)
    }

    /// Write a pending snapshot now, regardless of the window. Returns true
    /// if a write happened.
    pub fn flush(&mut self) -> Result<bool, StoreError> {
        if !self.persist.cancel() {
            return Ok(false);
        }
        self.write_snapshot()?;
        Ok(true)
    }

    fn write_snapshot(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.tasks)?;
        match self.storage.save(&self.key, &json) {
            Ok(()) => {
                debug!(key = %self.key, bytes = json.len(), revision = self.revision, "persisted tasks");
                Ok(())
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "persist failed; keeping in-memory state");
                Err(e.into())
            }
        }
    }
}

/// Cheap equality used by `set_tasks` to skip redundant replacements
fn same_ids_and_statuses(current: &[LessonTask], incoming: &[LessonTask]) -> bool {
    current.len() == incoming.len()
        && current
            .iter()
            .zip(incoming)
            .all(|(a, b)| a.id == b.id && a.status == b.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::clock::ManualClock;
    use crate::io::storage::MemoryStorage;
    use crate::model::{TaskPriority, TaskType};
    use pretty_assertions::assert_eq;

    type TestStore = TaskStore<MemoryStorage, ManualClock>;

    fn lesson(id: &str, title: &str, status: TaskStatus) -> LessonTask {
        LessonTask::new(id, title, status, TaskPriority::Medium, TaskType::Documentation)
    }

    fn html() -> Vec<LessonTask> {
        vec![
            lesson("HTML-001", "Document structure", TaskStatus::Todo),
            lesson("HTML-002", "Root element", TaskStatus::Backlog),
            lesson("HTML-003", "Head section", TaskStatus::Canceled),
        ]
    }

    fn python() -> Vec<LessonTask> {
        vec![
            lesson("TASK-3421", "Variables", TaskStatus::InProgress),
            lesson("TASK-7890", "Classes", TaskStatus::Done),
        ]
    }

    fn store_with(storage: MemoryStorage) -> (TestStore, ManualClock) {
        let clock = ManualClock::new();
        let store = TaskStore::with_clock(storage, clock.clone(), StoreOptions::default());
        (store, clock)
    }

    fn hydrated_store() -> (TestStore, ManualClock) {
        let (mut store, clock) = store_with(MemoryStorage::new());
        assert_eq!(store.hydrate(), Hydration::Empty);
        (store, clock)
    }

    fn statuses(store: &TestStore, category: &str) -> Vec<TaskStatus> {
        store.tasks(category).iter().map(|t| t.status).collect()
    }

    // --- Seeding ---

    #[test]
    fn set_tasks_registers_category() {
        let (mut store, _) = hydrated_store();
        assert!(store.set_tasks("html", html()));
        assert_eq!(store.tasks("html").len(), 3);
        assert_eq!(store.categories().collect::<Vec<_>>(), vec!["html"]);
    }

    #[test]
    fn set_tasks_is_idempotent_for_same_ids_and_statuses() {
        let (mut store, _) = hydrated_store();
        store.set_tasks("html", html());
        let rev = store.revision();

        assert!(!store.set_tasks("html", html()));
        assert_eq!(store.revision(), rev);

        // Titles are not part of the comparison
        let mut renamed = html();
        renamed[0].title = "Something else".into();
        assert!(!store.set_tasks("html", renamed));
        assert_eq!(store.revision(), rev);
        assert_eq!(store.tasks("html")[0].title, "Document structure");
    }

    #[test]
    fn set_tasks_replaces_on_status_or_length_difference() {
        let (mut store, _) = hydrated_store();
        store.set_tasks("html", html());
        store.toggle_task_status("html", "HTML-001");
        let rev = store.revision();

        assert!(store.set_tasks("html", html()));
        assert_eq!(store.revision(), rev + 1);
        assert_eq!(store.tasks("html")[0].status, TaskStatus::Todo);

        let mut shorter = html();
        shorter.pop();
        assert!(store.set_tasks("html", shorter));
        assert_eq!(store.tasks("html").len(), 2);
    }

    #[test]
    fn set_tasks_with_empty_list_on_unknown_category_is_noop() {
        let (mut store, _) = hydrated_store();
        assert!(!store.set_tasks("css", Vec::new()));
        assert!(!store.has_category("css"));
        assert_eq!(store.revision(), 0);
    }

    // --- Status cycle ---

    #[test]
    fn toggle_cycles_todo_in_progress_done() {
        let (mut store, _) = hydrated_store();
        store.set_tasks("html", html());
        let seen: Vec<_> = (0..4)
            .map(|_| store.toggle_task_status("html", "HTML-001"))
            .collect();
        assert_eq!(
            seen,
            vec![
                Some(TaskStatus::InProgress),
                Some(TaskStatus::Done),
                Some(TaskStatus::Todo),
                Some(TaskStatus::InProgress),
            ]
        );
    }

    #[test]
    fn toggle_moves_backlog_and_canceled_to_in_progress() {
        let (mut store, _) = hydrated_store();
        store.set_tasks("html", html());
        store.toggle_task_status("html", "HTML-002");
        store.toggle_task_status("html", "HTML-003");
        assert_eq!(
            statuses(&store, "html"),
            vec![TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::InProgress]
        );
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let (mut store, _) = hydrated_store();
        store.set_tasks("html", html());
        let rev = store.revision();
        assert_eq!(store.toggle_task_status("html", "nope"), None);
        assert_eq!(store.toggle_task_status("ruby", "HTML-001"), None);
        assert_eq!(store.revision(), rev);
        assert!(!store.has_category("ruby"));
    }

    #[test]
    fn toggle_applies_to_every_duplicate_id() {
        let (mut store, _) = hydrated_store();
        let mut tasks = html();
        tasks[2].id = "HTML-001".into();
        store.set_tasks("html", tasks);
        assert_eq!(
            store.toggle_task_status("html", "HTML-001"),
            Some(TaskStatus::InProgress)
        );
        assert_eq!(
            statuses(&store, "html"),
            vec![TaskStatus::InProgress, TaskStatus::Backlog, TaskStatus::InProgress]
        );
        // Lookup sees the first
        assert_eq!(
            store.task("html", "HTML-001").map(|t| t.title.as_str()),
            Some("Document structure")
        );
    }

    // --- update_task ---

    #[test]
    fn update_task_merges_fields() {
        let (mut store, _) = hydrated_store();
        store.set_tasks("html", html());
        let changed = store.update_task(
            "html",
            "HTML-002",
            &TaskPatch {
                status: Some(TaskStatus::Done),
                description: Some("The root".into()),
                ..Default::default()
            },
        );
        assert!(changed);
        let task = store.task("html", "HTML-002").unwrap();
        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.description, "The root");
        assert_eq!(task.title, "Root element");
    }

    #[test]
    fn update_unknown_id_leaves_tasks_unchanged() {
        let (mut store, _) = hydrated_store();
        store.set_tasks("html", html());
        let before = serde_json::to_string(store.snapshot()).unwrap();
        let rev = store.revision();

        assert!(!store.update_task("html", "nonexistent", &TaskPatch::status(TaskStatus::Done)));

        assert_eq!(serde_json::to_string(store.snapshot()).unwrap(), before);
        assert_eq!(store.revision(), rev);
    }

    // --- Category isolation ---

    #[test]
    fn mutating_one_category_leaves_others_alone() {
        let (mut store, _) = hydrated_store();
        store.set_tasks("html", html());
        store.set_tasks("python", python());
        let python_before = store.tasks("python").to_vec();

        store.toggle_task_status("html", "HTML-001");
        store.update_task("html", "HTML-002", &TaskPatch::status(TaskStatus::Done));
        store.set_tasks("html", Vec::new());
        // Same id in another category is untouched
        store.set_tasks("css", vec![lesson("TASK-3421", "Colors", TaskStatus::Todo)]);
        store.toggle_task_status("css", "TASK-3421");

        assert_eq!(store.tasks("python"), python_before.as_slice());
    }

    // --- Expanded task / active filters ---

    #[test]
    fn expanded_task_is_a_set_not_a_toggle() {
        let (mut store, _) = hydrated_store();
        assert_eq!(store.expanded_task_id(), None);
        store.set_expanded_task_id(Some("HTML-001".into()));
        store.set_expanded_task_id(Some("HTML-001".into()));
        assert_eq!(store.expanded_task_id(), Some("HTML-001"));
        store.set_expanded_task_id(None);
        assert_eq!(store.expanded_task_id(), None);
    }

    #[test]
    fn active_filters_do_not_change_filter_results() {
        let (mut store, _) = hydrated_store();
        store.set_tasks("python", python());
        let spec = FilterSpec {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        store.set_active_filters("python", spec.clone());
        assert_eq!(store.active_filters("python"), Some(&spec));
        assert_eq!(store.active_filters("html"), None);
        assert_eq!(store.filter_tasks("python", &FilterSpec::default()).len(), 2);
        assert_eq!(store.filter_tasks("python", &spec).len(), 1);
        assert!(store.filter_tasks("missing", &spec).is_empty());
    }

    #[test]
    fn active_filters_and_expansion_do_not_persist() {
        let (mut store, clock) = hydrated_store();
        store.set_expanded_task_id(Some("X".into()));
        store.set_active_filters("html", FilterSpec::default());
        clock.advance(Duration::from_secs(1));
        assert!(!store.poll_persist().unwrap());
        assert!(store.storage().writes().is_empty());
    }

    // --- Hydration ---

    #[test]
    fn hydrate_restores_persisted_map() {
        let persisted = serde_json::to_string(&CategoryState::from([
            ("python".to_string(), python()),
            ("html".to_string(), html()),
        ]))
        .unwrap();
        let (mut store, _) = store_with(MemoryStorage::with_value("tasks", &persisted));
        assert_eq!(store.hydrate(), Hydration::Restored(2));
        assert!(store.is_hydrated());
        assert_eq!(store.categories().collect::<Vec<_>>(), vec!["python", "html"]);
        assert_eq!(store.tasks("python"), python().as_slice());
    }

    #[test]
    fn hydrate_discards_corrupted_content() {
        let (mut store, _) = store_with(MemoryStorage::with_value("tasks", "not json {{{"));
        assert_eq!(store.hydrate(), Hydration::Discarded);
        assert!(store.snapshot().is_empty());
        assert!(store.is_hydrated());
    }

    #[test]
    fn hydrate_discards_wrong_shape() {
        let wrong = r#"{"html":[{"id":"HTML-001","status":"Todo"}]}"#;
        let (mut store, _) = store_with(MemoryStorage::with_value("tasks", wrong));
        assert_eq!(store.hydrate(), Hydration::Discarded);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn hydrate_runs_once() {
        let (mut store, _) = hydrated_store();
        assert_eq!(store.hydrate(), Hydration::Skipped);
    }

    #[test]
    fn hydrate_replaces_tasks_seeded_before_load() {
        let persisted = serde_json::to_string(&CategoryState::from([(
            "html".to_string(),
            vec![lesson("HTML-001", "Document structure", TaskStatus::Done)],
        )]))
        .unwrap();
        let (mut store, _) = store_with(MemoryStorage::with_value("tasks", &persisted));
        store.set_tasks("html", html());
        store.hydrate();
        assert_eq!(statuses(&store, "html"), vec![TaskStatus::Done]);
    }

    // --- Persistence ---

    #[test]
    fn changes_before_hydration_are_not_persisted() {
        let (mut store, clock) = store_with(MemoryStorage::new());
        store.set_tasks("html", html());
        store.toggle_task_status("html", "HTML-001");
        assert!(!store.persist_pending());
        clock.advance(Duration::from_secs(1));
        assert!(!store.poll_persist().unwrap());
        assert!(!store.flush().unwrap());
        assert!(store.storage().writes().is_empty());
    }

    #[test]
    fn seeded_state_is_persisted_after_hydration() {
        let (mut store, clock) = store_with(MemoryStorage::new());
        store.set_tasks("html", html());
        store.hydrate();
        assert!(store.persist_pending());
        clock.advance(DEFAULT_DEBOUNCE);
        assert!(store.poll_persist().unwrap());
        assert_eq!(store.storage().writes().len(), 1);
    }

    #[test]
    fn burst_of_changes_produces_one_write_with_final_state() {
        let (mut store, clock) = hydrated_store();
        store.set_tasks("html", html());
        for _ in 0..5 {
            clock.advance(Duration::from_millis(100));
            store.toggle_task_status("html", "HTML-001");
            assert!(!store.poll_persist().unwrap());
        }
        assert_eq!(store.persist_due_in(), Some(DEFAULT_DEBOUNCE));

        clock.advance(Duration::from_millis(299));
        assert!(!store.poll_persist().unwrap());
        clock.advance(Duration::from_millis(1));
        assert!(store.poll_persist().unwrap());
        assert!(!store.poll_persist().unwrap());

        let writes = store.storage().writes();
        assert_eq!(writes.len(), 1);
        let (key, json) = &writes[0];
        assert_eq!(key, "tasks");
        let persisted: CategoryState = serde_json::from_str(json).unwrap();
        // Five toggles from Todo: InProgress, Done, Todo, InProgress, Done
        assert_eq!(persisted["html"][0].status, TaskStatus::Done);
        assert_eq!(&persisted, store.snapshot());
    }

    #[test]
    fn flush_writes_pending_snapshot_immediately() {
        let (mut store, _) = hydrated_store();
        store.set_tasks("python", python());
        assert!(store.flush().unwrap());
        assert!(!store.flush().unwrap());
        assert_eq!(store.storage().writes().len(), 1);
        assert!(store.storage().get("tasks").unwrap().contains("TASK-3421"));
    }

    #[test]
    fn noop_mutations_do_not_schedule_writes() {
        let (mut store, _) = hydrated_store();
        store.set_tasks("python", python());
        store.flush().unwrap();
        store.set_tasks("python", python());
        store.update_task("python", "missing", &TaskPatch::status(TaskStatus::Done));
        store.toggle_task_status("python", "missing");
        assert!(!store.persist_pending());
    }

    #[test]
    fn custom_key_and_window() {
        let clock = ManualClock::new();
        let mut store = TaskStore::with_clock(
            MemoryStorage::new(),
            clock.clone(),
            StoreOptions {
                key: "lessons".into(),
                debounce: Duration::from_millis(50),
            },
        );
        store.hydrate();
        store.set_tasks("python", python());
        clock.advance(Duration::from_millis(50));
        assert!(store.poll_persist().unwrap());
        assert!(store.storage().get("lessons").is_some());
        assert!(store.storage().get("tasks").is_none());
    }

    #[test]
    fn persist_failure_keeps_in_memory_state() {
        let mut storage = MemoryStorage::new();
        storage.fail_writes("quota exceeded");
        let (mut store, clock) = store_with(storage);
        store.hydrate();
        store.set_tasks("python", python());
        store.toggle_task_status("python", "TASK-3421");
        clock.advance(DEFAULT_DEBOUNCE);

        let err = store.poll_persist().unwrap_err();
        assert!(matches!(err, StoreError::Persist(StorageError::Unavailable(_))));
        assert_eq!(store.tasks("python")[0].status, TaskStatus::Done);
        assert!(!store.persist_pending());

        // Next change schedules again
        store.toggle_task_status("python", "TASK-3421");
        assert!(store.persist_pending());
    }

    #[test]
    fn restored_state_round_trips_through_storage() {
        let (mut first, clock) = hydrated_store();
        first.set_tasks("html", html());
        first.toggle_task_status("html", "HTML-002");
        clock.advance(DEFAULT_DEBOUNCE);
        first.poll_persist().unwrap();

        let storage = first.storage().clone();
        let (mut second, _) = store_with(storage);
        assert_eq!(second.hydrate(), Hydration::Restored(1));
        assert_eq!(
            statuses(&second, "html"),
            vec![TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Canceled]
        );
    }
}
