use crate::model::filter::FilterSpec;
use crate::model::task::{LessonTask, TaskStatus};

/// Return the tasks that satisfy every active constraint in `spec`, in
/// their original order.
///
/// Status, priority and type must match exactly when set. A non-blank search
/// term must appear (case-insensitively) in the title, the description, or
/// the id.
pub fn filter_tasks<'a>(tasks: &'a [LessonTask], spec: &FilterSpec) -> Vec<&'a LessonTask> {
    let term = spec.normalized_term();
    tasks
        .iter()
        .filter(|task| matches_spec(task, spec, term.as_deref()))
        .collect()
}

/// Whether a single task passes the filter. `term` must already be trimmed
/// and lowercased.
pub fn matches_spec(task: &LessonTask, spec: &FilterSpec, term: Option<&str>) -> bool {
    if spec.status.is_some_and(|s| s != task.status) {
        return false;
    }
    if spec.priority.is_some_and(|p| p != task.priority) {
        return false;
    }
    if spec.task_type.is_some_and(|t| t != task.task_type) {
        return false;
    }
    match term {
        Some(term) => {
            task.title.to_lowercase().contains(term)
                || task.description.to_lowercase().contains(term)
                || task.id.to_lowercase().contains(term)
        }
        None => true,
    }
}

/// Done / total counts over a (usually filtered) task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Completion {
    pub done: usize,
    pub total: usize,
}

impl Completion {
    pub fn of<'a>(tasks: impl IntoIterator<Item = &'a LessonTask>) -> Self {
        tasks.into_iter().fold(Completion::default(), |mut acc, t| {
            acc.total += 1;
            if t.status == TaskStatus::Done {
                acc.done += 1;
            }
            acc
        })
    }

    /// Footer text shown under the task table
    pub fn summary(&self) -> String {
        format!("{} of {} task(s) completed.", self.done, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{TaskPriority, TaskType};
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<LessonTask> {
        vec![
            LessonTask::new(
                "A-1",
                "Foo",
                TaskStatus::Todo,
                TaskPriority::High,
                TaskType::Bug,
            ),
            LessonTask::new(
                "A-2",
                "Bar",
                TaskStatus::Done,
                TaskPriority::Low,
                TaskType::Feature,
            ),
        ]
    }

    fn ids(tasks: &[&LessonTask]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn empty_spec_keeps_everything() {
        let tasks = sample();
        assert_eq!(ids(&filter_tasks(&tasks, &FilterSpec::default())), vec!["A-1", "A-2"]);
    }

    #[test]
    fn status_filter() {
        let tasks = sample();
        let spec = FilterSpec {
            status: Some(TaskStatus::Todo),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &spec)), vec!["A-1"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let tasks = sample();
        let spec = FilterSpec {
            search_term: "bar".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &spec)), vec!["A-2"]);
    }

    #[test]
    fn dimensions_combine_with_and() {
        let tasks = sample();
        let spec = FilterSpec {
            status: Some(TaskStatus::Todo),
            search_term: "bar".into(),
            ..Default::default()
        };
        assert!(filter_tasks(&tasks, &spec).is_empty());
    }

    #[test]
    fn priority_and_type_filters() {
        let tasks = sample();
        let spec = FilterSpec {
            priority: Some(TaskPriority::Low),
            task_type: Some(TaskType::Feature),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &spec)), vec!["A-2"]);

        let spec = FilterSpec {
            priority: Some(TaskPriority::Low),
            task_type: Some(TaskType::Bug),
            ..Default::default()
        };
        assert!(filter_tasks(&tasks, &spec).is_empty());
    }

    #[test]
    fn search_matches_description_or_id() {
        let mut tasks = sample();
        tasks[1].description = "Explains the <meta> element".into();

        let by_desc = FilterSpec {
            search_term: "META".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &by_desc)), vec!["A-2"]);

        let by_id = FilterSpec {
            search_term: "a-1".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &by_id)), vec!["A-1"]);
    }

    #[test]
    fn search_term_is_trimmed() {
        let tasks = sample();
        let spec = FilterSpec {
            search_term: "  foo  ".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &spec)), vec!["A-1"]);

        let blank = FilterSpec {
            search_term: "   ".into(),
            ..Default::default()
        };
        assert_eq!(filter_tasks(&tasks, &blank).len(), 2);
    }

    #[test]
    fn preserves_input_order() {
        let tasks: Vec<LessonTask> = ["C-3", "C-1", "C-2", "C-9"]
            .iter()
            .map(|id| {
                LessonTask::new(
                    *id,
                    format!("lesson {}", id),
                    TaskStatus::Todo,
                    TaskPriority::Medium,
                    TaskType::Documentation,
                )
            })
            .collect();
        let spec = FilterSpec {
            search_term: "lesson".into(),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_tasks(&tasks, &spec)),
            vec!["C-3", "C-1", "C-2", "C-9"]
        );
    }

    #[test]
    fn input_is_not_modified() {
        let tasks = sample();
        let before = tasks.clone();
        let spec = FilterSpec {
            status: Some(TaskStatus::Done),
            search_term: "BAR".into(),
            ..Default::default()
        };
        let _ = filter_tasks(&tasks, &spec);
        let _ = filter_tasks(&tasks, &spec);
        assert_eq!(tasks, before);
    }

    #[test]
    fn completion_summary() {
        let tasks = sample();
        let visible = filter_tasks(&tasks, &FilterSpec::default());
        let completion = Completion::of(visible.iter().copied());
        assert_eq!(completion, Completion { done: 1, total: 2 });
        assert_eq!(completion.summary(), "1 of 2 task(s) completed.");
        assert_eq!(Completion::default().summary(), "0 of 0 task(s) completed.");
    }
}
