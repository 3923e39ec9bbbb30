use serde::Serialize;

use crate::catalog::Topic;
use crate::model::filter::FilterSpec;
use crate::model::task::LessonTask;
use crate::ops::filter::Completion;
use crate::util::unicode::{display_width, fit_to_width};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TopicJson {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub done: usize,
    pub total: usize,
}

#[derive(Serialize)]
pub struct TaskListJson<'a> {
    pub topic: &'static str,
    pub filters: FiltersJson,
    pub tasks: Vec<&'a LessonTask>,
    pub done: usize,
    pub total: usize,
}

#[derive(Serialize)]
pub struct FiltersJson {
    pub status: &'static str,
    pub priority: &'static str,
    #[serde(rename = "type")]
    pub task_type: &'static str,
    pub search: String,
}

#[derive(Serialize)]
pub struct ResetJson {
    pub topic: &'static str,
    pub tasks: usize,
    pub changed: bool,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn topic_to_json(topic: &Topic, progress: Completion) -> TopicJson {
    TopicJson {
        key: topic.key,
        name: topic.name,
        description: topic.description,
        done: progress.done,
        total: progress.total,
    }
}

pub fn filters_to_json(spec: &FilterSpec) -> FiltersJson {
    FiltersJson {
        status: spec.status_label(),
        priority: spec.priority_label(),
        task_type: spec.type_label(),
        search: spec.search_term.clone(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Widest label among the fixed-vocabulary columns
const TYPE_WIDTH: usize = 13;
const PRIORITY_WIDTH: usize = 6;
const STATUS_WIDTH: usize = 11;

/// Format a topic line for `lb topics`
pub fn format_topic_line(topic: &Topic, progress: Completion, name_width: usize) -> String {
    format!(
        "  {} ({}) {}/{}  {}",
        fit_to_width(topic.name, name_width),
        topic.key,
        progress.done,
        progress.total,
        topic.description
    )
}

/// Format a single task as a table row, padding the id column to `id_width`
pub fn format_task_line(task: &LessonTask, id_width: usize) -> String {
    format!(
        "{} {}  {}  {}  {}  {}",
        task.status.icon(),
        fit_to_width(&task.id, id_width),
        fit_to_width(task.task_type.label(), TYPE_WIDTH),
        fit_to_width(task.priority.label(), PRIORITY_WIDTH),
        fit_to_width(task.status.label(), STATUS_WIDTH),
        task.title
    )
}

/// Rows for a task list followed by a blank line and the completion footer
pub fn format_task_table(tasks: &[&LessonTask]) -> Vec<String> {
    let id_width = tasks
        .iter()
        .map(|t| display_width(&t.id))
        .max()
        .unwrap_or(0);
    let mut lines: Vec<String> = tasks
        .iter()
        .map(|t| format_task_line(t, id_width))
        .collect();
    if tasks.is_empty() {
        lines.push("No results.".to_string());
    }
    lines.push(String::new());
    lines.push(Completion::of(tasks.iter().copied()).summary());
    lines
}

/// Format detailed task view
pub fn format_task_detail(task: &LessonTask) -> Vec<String> {
    let mut lines = vec![
        format!("{} {} {}", task.status.icon(), task.id, task.title),
        format!("status: {}", task.status),
        format!("priority: {}", task.priority),
        format!("type: {}", task.task_type),
    ];
    if !task.description.is_empty() {
        lines.push("description:".to_string());
        for line in task.description.lines() {
            lines.push(format!("  {}", line));
        }
    }
    lines
}
