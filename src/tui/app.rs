use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;
use tracing::{info, warn};

use crate::catalog::Topic;
use crate::model::filter::{ALL_LABEL, parse_dimension};
use crate::model::{FilterSpec, LessonTask, TaskPriority, TaskStatus, TaskType};
use crate::ops::filter::Completion;
use crate::session::Session;
use crate::store::Hydration;

use super::input;
use super::render;
use super::theme::Theme;

/// Longest the event loop sleeps waiting for input
const TICK: Duration = Duration::from_millis(250);

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Topic list
    Home,
    /// A topic's task table, by catalog key
    Topic(&'static str),
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the search box of the current view
    Search,
    /// A filter dropdown is open
    Dropdown,
}

/// One of the three filter dropdowns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Status,
    Priority,
    Type,
}

impl FilterKind {
    pub const ALL: [FilterKind; 3] = [FilterKind::Status, FilterKind::Priority, FilterKind::Type];

    pub fn title(self) -> &'static str {
        match self {
            FilterKind::Status => "Status",
            FilterKind::Priority => "Priority",
            FilterKind::Type => "Type",
        }
    }

    /// Dropdown entries, "All" first
    pub fn options(self) -> Vec<&'static str> {
        let mut options = vec![ALL_LABEL];
        match self {
            FilterKind::Status => options.extend(TaskStatus::ALL.iter().map(|s| s.label())),
            FilterKind::Priority => options.extend(TaskPriority::ALL.iter().map(|p| p.label())),
            FilterKind::Type => options.extend(TaskType::ALL.iter().map(|t| t.label())),
        }
        options
    }

    /// Label of the value this dimension currently holds in `spec`
    pub fn current(self, spec: &FilterSpec) -> &'static str {
        match self {
            FilterKind::Status => spec.status_label(),
            FilterKind::Priority => spec.priority_label(),
            FilterKind::Type => spec.type_label(),
        }
    }

    fn apply(self, spec: &mut FilterSpec, label: &str) {
        match self {
            FilterKind::Status => spec.status = parse_dimension(label).ok().flatten(),
            FilterKind::Priority => spec.priority = parse_dimension(label).ok().flatten(),
            FilterKind::Type => spec.task_type = parse_dimension(label).ok().flatten(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dropdown {
    pub kind: FilterKind,
    /// Index into `kind.options()`
    pub cursor: usize,
}

/// Per-topic UI state (cursor, scroll, filters)
#[derive(Debug, Clone, Default)]
pub struct TopicViewState {
    /// Cursor index into the filtered task list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    pub filter: FilterSpec,
}

/// Main application state
pub struct App {
    pub session: Session,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor for the topic list
    pub home_cursor: usize,
    /// Live search text on the topic list
    pub topic_search: String,
    pub topic_states: HashMap<&'static str, TopicViewState>,
    pub dropdown: Option<Dropdown>,
    /// Screen x of each filter button, recorded by the last render
    pub filter_anchors: [u16; 3],
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
    /// Progress of topics the store does not track yet
    seed_progress: HashMap<&'static str, Completion>,
}

impl App {
    pub fn new(session: Session) -> Self {
        let theme = Theme::from_config(&session.config.ui);
        let seed_progress = session
            .catalog
            .topics()
            .iter()
            .map(|topic| {
                let seed = session.catalog.seed_tasks(topic.key).unwrap_or_default();
                (topic.key, Completion::of(&seed))
            })
            .collect();

        App {
            show_key_hints: session.config.ui.show_key_hints,
            session,
            view: View::Home,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            home_cursor: 0,
            topic_search: String::new(),
            topic_states: HashMap::new(),
            dropdown: None,
            filter_anchors: [0; 3],
            status_message: None,
            seed_progress,
        }
    }

    /// Load persisted progress, then open the configured start topic.
    pub fn hydrate(&mut self) {
        let outcome = self.session.store.hydrate();
        if outcome == Hydration::Discarded {
            self.status_message =
                Some("saved progress could not be read; starting from the catalog".into());
        }
        if self.view == View::Home
            && let Some(key) = self.session.config.ui.default_topic.clone()
        {
            self.open_topic(&key);
        }
    }

    // -----------------------------------------------------------------------
    // Home view
    // -----------------------------------------------------------------------

    pub fn visible_topics(&self) -> Vec<&Topic> {
        self.session.catalog.search_topics(&self.topic_search)
    }

    pub fn topic_progress(&self, topic: &Topic) -> Completion {
        if self.session.store.has_category(topic.key) {
            Completion::of(self.session.store.tasks(topic.key))
        } else {
            self.seed_progress
                .get(topic.key)
                .copied()
                .unwrap_or_default()
        }
    }

    pub fn selected_topic_key(&self) -> Option<&'static str> {
        self.visible_topics().get(self.home_cursor).map(|t| t.key)
    }

    /// Switch to a topic, seeding it from the catalog on first visit
    pub fn open_topic(&mut self, key: &str) {
        match self
            .session
            .catalog
            .ensure_seeded(&mut self.session.store, key)
        {
            Ok(topic) => {
                let key = topic.key;
                info!(topic = key, "opened topic");
                self.view = View::Topic(key);
                self.mode = Mode::Navigate;
                let spec = self.topic_state(key).filter.clone();
                self.session.store.set_active_filters(key, spec);
            }
            Err(e) => {
                warn!(topic = key, error = %e, "cannot open topic");
                self.status_message = Some(e.to_string());
            }
        }
    }

    pub fn go_home(&mut self) {
        self.view = View::Home;
        self.mode = Mode::Navigate;
        self.dropdown = None;
    }

    // -----------------------------------------------------------------------
    // Topic view
    // -----------------------------------------------------------------------

    pub fn current_topic_key(&self) -> Option<&'static str> {
        match self.view {
            View::Topic(key) => Some(key),
            View::Home => None,
        }
    }

    pub fn current_topic(&self) -> Option<&Topic> {
        let key = self.current_topic_key()?;
        self.session.catalog.topic(key).ok()
    }

    /// Get or create the view state for a topic
    pub fn topic_state(&mut self, key: &'static str) -> &mut TopicViewState {
        self.topic_states.entry(key).or_default()
    }

    /// Filter in effect for the current topic
    pub fn current_filter(&self) -> FilterSpec {
        self.current_topic_key()
            .and_then(|key| self.topic_states.get(key))
            .map(|s| s.filter.clone())
            .unwrap_or_default()
    }

    pub fn current_cursor(&self) -> usize {
        self.current_topic_key()
            .and_then(|key| self.topic_states.get(key))
            .map_or(0, |s| s.cursor)
    }

    /// Tasks of the current topic that pass its filter, in catalog order
    pub fn visible_tasks(&self) -> Vec<&LessonTask> {
        let Some(key) = self.current_topic_key() else {
            return Vec::new();
        };
        match self.topic_states.get(key) {
            Some(state) => self.session.store.filter_tasks(key, &state.filter),
            None => self.session.store.filter_tasks(key, &FilterSpec::default()),
        }
    }

    pub fn selected_task_id(&self) -> Option<String> {
        self.visible_tasks()
            .get(self.current_cursor())
            .map(|t| t.id.clone())
    }

    /// The expanded task, if it is currently visible
    pub fn expanded_visible_task(&self) -> Option<&LessonTask> {
        let id = self.session.store.expanded_task_id()?;
        self.visible_tasks().into_iter().find(|t| t.id == id)
    }

    /// Change the current topic's filter and record it in the store
    pub fn update_filter(&mut self, f: impl FnOnce(&mut FilterSpec)) {
        let Some(key) = self.current_topic_key() else {
            return;
        };
        let state = self.topic_state(key);
        f(&mut state.filter);
        state.cursor = 0;
        state.scroll_offset = 0;
        let spec = state.filter.clone();
        self.session.store.set_active_filters(key, spec);
    }

    pub fn clear_filters(&mut self) {
        self.update_filter(|spec| *spec = FilterSpec::default());
    }

    /// Edit the search text of whichever view is showing
    pub fn edit_search(&mut self, f: impl FnOnce(&mut String)) {
        match self.view {
            View::Home => {
                f(&mut self.topic_search);
                self.home_cursor = 0;
            }
            View::Topic(_) => self.update_filter(|spec| f(&mut spec.search_term)),
        }
    }

    /// Expand the selected task, or collapse it if it is already expanded
    pub fn toggle_expanded_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let next = if self.session.store.expanded_task_id() == Some(id.as_str()) {
            None
        } else {
            Some(id)
        };
        self.session.store.set_expanded_task_id(next);
    }

    pub fn toggle_selected_status(&mut self) {
        let (Some(key), Some(id)) = (self.current_topic_key(), self.selected_task_id()) else {
            return;
        };
        if let Some(status) = self.session.store.toggle_task_status(key, &id) {
            info!(topic = key, id = %id, %status, "toggled status");
        }
        // The task may have left the filtered list
        self.clamp_cursor();
    }

    pub fn open_dropdown(&mut self, kind: FilterKind) {
        if self.current_topic_key().is_none() {
            return;
        }
        let current = kind.current(&self.current_filter());
        let cursor = kind
            .options()
            .iter()
            .position(|o| *o == current)
            .unwrap_or(0);
        self.dropdown = Some(Dropdown { kind, cursor });
        self.mode = Mode::Dropdown;
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown = None;
        self.mode = Mode::Navigate;
    }

    /// Apply the highlighted dropdown entry and close the dropdown
    pub fn apply_dropdown(&mut self) {
        let Some(dropdown) = self.dropdown.take() else {
            self.mode = Mode::Navigate;
            return;
        };
        if let Some(label) = dropdown.kind.options().get(dropdown.cursor).copied() {
            self.update_filter(|spec| dropdown.kind.apply(spec, label));
        }
        self.mode = Mode::Navigate;
    }

    // -----------------------------------------------------------------------
    // Cursor movement
    // -----------------------------------------------------------------------

    fn list_len(&self) -> usize {
        match self.view {
            View::Home => self.visible_topics().len(),
            View::Topic(_) => self.visible_tasks().len(),
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.list_len();
        let max = len.saturating_sub(1);
        let cursor = match self.view {
            View::Home => &mut self.home_cursor,
            View::Topic(key) => &mut self.topic_states.entry(key).or_default().cursor,
        };
        *cursor = cursor.saturating_add_signed(delta).min(max);
    }

    pub fn jump_cursor(&mut self, to_end: bool) {
        let target = if to_end {
            self.list_len().saturating_sub(1)
        } else {
            0
        };
        match self.view {
            View::Home => self.home_cursor = target,
            View::Topic(key) => self.topic_state(key).cursor = target,
        }
    }

    fn clamp_cursor(&mut self) {
        let max = self.list_len().saturating_sub(1);
        if let Some(key) = self.current_topic_key() {
            let state = self.topic_state(key);
            state.cursor = state.cursor.min(max);
        }
    }

    // -----------------------------------------------------------------------
    // Event loop support
    // -----------------------------------------------------------------------

    /// Case-insensitive literal matcher for the active search text
    pub fn active_search_re(&self) -> Option<Regex> {
        let term = match self.view {
            View::Home => self.topic_search.trim().to_string(),
            View::Topic(_) => self.current_filter().search_term.trim().to_string(),
        };
        if term.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(&term))).ok()
    }

    /// How long the loop may wait for input before the next persist check
    pub fn poll_timeout(&self) -> Duration {
        self.session
            .store
            .persist_due_in()
            .map_or(TICK, |due| due.min(TICK))
    }

    /// Write progress whose debounce window has elapsed
    pub fn tick(&mut self) {
        if let Err(e) = self.session.store.poll_persist() {
            self.status_message = Some(format!("could not save progress: {}", e));
        }
    }
}

/// Run the TUI application
pub fn run(session: Session) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(session);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Write anything still inside its debounce window
    let flushed = app.session.store.flush();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    flushed?;
    Ok(())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // First frame is on screen; now load saved progress
        if !app.session.store.is_hydrated() {
            app.hydrate();
            continue;
        }

        if event::poll(app.poll_timeout())?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
