use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lb", about = concat!("lessonboard v", env!("CARGO_PKG_VERSION"), " - track your way through a lesson catalog"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Keep progress and config in a different directory
    #[arg(short = 'D', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List topics with their progress
    Topics(TopicsArgs),
    /// List a topic's lessons
    List(ListArgs),
    /// Show one lesson in full
    Show(ShowArgs),
    /// Advance a lesson's status (Todo -> In Progress -> Done -> Todo)
    Toggle(ToggleArgs),
    /// Change fields of a lesson
    Set(SetArgs),
    /// Restore a topic's lessons from the catalog, discarding progress
    Reset(ResetArgs),
}

#[derive(Args)]
pub struct TopicsArgs {
    /// Only topics whose name or description contains this text
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Topic key (html, css, javascript, python, java, ruby)
    pub topic: String,
    /// Filter by status (todo, in-progress, done, backlog, canceled, all)
    #[arg(long)]
    pub status: Option<String>,
    /// Filter by priority (high, medium, low, all)
    #[arg(long)]
    pub priority: Option<String>,
    /// Filter by type (documentation, feature, bug, all)
    #[arg(long = "type")]
    pub task_type: Option<String>,
    /// Only lessons whose title, description or id contains this text
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    pub topic: String,
    /// Lesson ID
    pub id: String,
}

#[derive(Args)]
pub struct ToggleArgs {
    pub topic: String,
    /// Lesson ID
    pub id: String,
}

#[derive(Args)]
pub struct SetArgs {
    pub topic: String,
    /// Lesson ID
    pub id: String,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long = "type")]
    pub task_type: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct ResetArgs {
    pub topic: String,
}
