use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Progress state of a lesson task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    Backlog,
    Done,
    Canceled,
}

impl TaskStatus {
    /// Dropdown order
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Done,
        TaskStatus::Backlog,
        TaskStatus::Canceled,
    ];

    /// Human-readable label (also the persisted spelling)
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Backlog => "Backlog",
            TaskStatus::Done => "Done",
            TaskStatus::Canceled => "Canceled",
        }
    }

    /// Single-cell icon shown next to the status label
    pub fn icon(self) -> char {
        match self {
            TaskStatus::Todo => '\u{25CB}',       // ○
            TaskStatus::InProgress => '\u{25D0}', // ◐
            TaskStatus::Backlog => '\u{25F7}',    // ◷
            TaskStatus::Done => '\u{2713}',       // ✓
            TaskStatus::Canceled => '\u{2715}',   // ✕
        }
    }
}

/// How important a lesson is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::High, TaskPriority::Medium, TaskPriority::Low];

    pub fn label(self) -> &'static str {
        match self {
            TaskPriority::High => "High",
            TaskPriority::Medium => "Medium",
            TaskPriority::Low => "Low",
        }
    }
}

/// What kind of lesson this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskType {
    Documentation,
    Feature,
    Bug,
}

impl TaskType {
    pub const ALL: [TaskType; 3] = [TaskType::Documentation, TaskType::Feature, TaskType::Bug];

    pub fn label(self) -> &'static str {
        match self {
            TaskType::Documentation => "Documentation",
            TaskType::Feature => "Feature",
            TaskType::Bug => "Bug",
        }
    }
}

/// Error returned when a status/priority/type name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value} (expected one of {expected})")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Lowercase and drop separators so "In Progress", "in-progress" and
/// "inprogress" compare equal.
fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_label<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    label: impl Fn(T) -> &'static str,
) -> Result<T, ParseLabelError> {
    let wanted = normalize_label(value);
    all.iter()
        .copied()
        .find(|v| normalize_label(label(*v)) == wanted)
        .ok_or_else(|| ParseLabelError {
            kind,
            value: value.to_string(),
            expected: all.iter().map(|v| label(*v)).collect::<Vec<_>>().join(", "),
        })
}

impl FromStr for TaskStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("status", s, &TaskStatus::ALL, TaskStatus::label)
    }
}

impl FromStr for TaskPriority {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("priority", s, &TaskPriority::ALL, TaskPriority::label)
    }
}

impl FromStr for TaskType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("type", s, &TaskType::ALL, TaskType::label)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A lesson presented as a trackable task.
///
/// Field order and names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonTask {
    /// Stable identifier, unique within its category (e.g. `HTML-001`)
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(rename = "type")]
    pub task_type: TaskType,
}

impl LessonTask {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        status: TaskStatus,
        priority: TaskPriority,
        task_type: TaskType,
    ) -> Self {
        LessonTask {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status,
            priority,
            task_type,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

/// Partial update merged into a task by `update_task`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub task_type: Option<TaskType>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        TaskPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &TaskPatch::default()
    }
}
