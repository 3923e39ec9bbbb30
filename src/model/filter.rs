use std::str::FromStr;

use super::task::{ParseLabelError, TaskPriority, TaskStatus, TaskType};

/// Sentinel shown in the filter dropdowns for "no constraint"
pub const ALL_LABEL: &str = "All";

/// Active constraints applied to a category's task list.
///
/// `None` on a dimension means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub task_type: Option<TaskType>,
    pub search_term: String,
}

impl FilterSpec {
    /// True when no dimension constrains the list
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.task_type.is_none()
            && self.search_term.trim().is_empty()
    }

    /// Lowercased, trimmed search term; `None` when there is nothing to match
    pub fn normalized_term(&self) -> Option<String> {
        let term = self.search_term.trim();
        if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        }
    }

    pub fn status_label(&self) -> &'static str {
        self.status.map_or(ALL_LABEL, TaskStatus::label)
    }

    pub fn priority_label(&self) -> &'static str {
        self.priority.map_or(ALL_LABEL, TaskPriority::label)
    }

    pub fn type_label(&self) -> &'static str {
        self.task_type.map_or(ALL_LABEL, TaskType::label)
    }
}

/// Parse one filter dimension. `"All"` (any case) or an empty string means
/// no constraint.
pub fn parse_dimension<T>(value: &str) -> Result<Option<T>, ParseLabelError>
where
    T: FromStr<Err = ParseLabelError>,
{
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL_LABEL) {
        return Ok(None);
    }
    value.parse().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_empty() {
        assert!(FilterSpec::default().is_empty());
        let spec = FilterSpec {
            search_term: "   ".into(),
            ..Default::default()
        };
        assert!(spec.is_empty());
        assert_eq!(spec.normalized_term(), None);
    }

    #[test]
    fn normalized_term_trims_and_lowercases() {
        let spec = FilterSpec {
            search_term: "  Meta Tags ".into(),
            ..Default::default()
        };
        assert_eq!(spec.normalized_term().as_deref(), Some("meta tags"));
        assert!(!spec.is_empty());
    }

    #[test]
    fn labels_fall_back_to_all() {
        let spec = FilterSpec {
            priority: Some(TaskPriority::Low),
            ..Default::default()
        };
        assert_eq!(spec.status_label(), "All");
        assert_eq!(spec.priority_label(), "Low");
        assert_eq!(spec.type_label(), "All");
    }

    #[test]
    fn parse_dimension_handles_sentinel() {
        assert_eq!(parse_dimension::<TaskStatus>("All"), Ok(None));
        assert_eq!(parse_dimension::<TaskStatus>("all"), Ok(None));
        assert_eq!(parse_dimension::<TaskStatus>(""), Ok(None));
        assert_eq!(
            parse_dimension::<TaskStatus>("todo"),
            Ok(Some(TaskStatus::Todo))
        );
        assert!(parse_dimension::<TaskType>("chore").is_err());
    }
}
