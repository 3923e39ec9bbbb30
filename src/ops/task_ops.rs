use crate::model::task::{LessonTask, TaskPatch, TaskStatus};

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// Next status for a toggle: todo → in progress → done → todo.
pub fn next_status(status: TaskStatus) -> TaskStatus {
    match status {
        TaskStatus::Todo => TaskStatus::InProgress,
        TaskStatus::InProgress => TaskStatus::Done,
        TaskStatus::Done => TaskStatus::Todo,
        // Backlog/Canceled snap into the cycle as if they were todo
        TaskStatus::Backlog | TaskStatus::Canceled => TaskStatus::InProgress,
    }
}

/// Advance a task one step through the toggle cycle. Returns the new status.
pub fn cycle_status(task: &mut LessonTask) -> TaskStatus {
    task.status = next_status(task.status);
    task.status
}

// ---------------------------------------------------------------------------
// Field updates
// ---------------------------------------------------------------------------

/// Merge the set fields of `patch` into `task`. Returns true if any field
/// actually changed.
pub fn apply_patch(task: &mut LessonTask, patch: &TaskPatch) -> bool {
    let before = task.clone();
    if let Some(title) = &patch.title {
        task.title = title.clone();
    }
    if let Some(description) = &patch.description {
        task.description = description.clone();
    }
    if let Some(status) = patch.status {
        task.status = status;
    }
    if let Some(priority) = patch.priority {
        task.priority = priority;
    }
    if let Some(task_type) = patch.task_type {
        task.task_type = task_type;
    }
    *task != before
}

/// Find the first task with the given id
pub fn find_task<'a>(tasks: &'a [LessonTask], id: &str) -> Option<&'a LessonTask> {
    tasks.iter().find(|t| t.id == id)
}
