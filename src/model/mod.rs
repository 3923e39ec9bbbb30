pub mod config;
pub mod filter;
pub mod task;

pub use config::*;
pub use filter::*;
pub use task::*;

use indexmap::IndexMap;

/// Category key → tasks, in insertion (display) order
pub type CategoryState = IndexMap<String, Vec<LessonTask>>;
