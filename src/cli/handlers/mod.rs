mod edit;
pub use edit::{cmd_reset, cmd_set, cmd_toggle};

use std::str::FromStr;

use crate::catalog::Topic;
use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::filter::{FilterSpec, parse_dimension};
use crate::model::task::ParseLabelError;
use crate::ops::filter::Completion;
use crate::session::Session;
use crate::util::unicode::display_width;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one subcommand against a session: hydrate, act, then flush whatever
/// the command changed.
pub fn dispatch(cli: Cli, session: &mut Session) -> CmdResult {
    let json = cli.json;
    let Some(command) = cli.command else {
        return Err("no subcommand given (run `lb` without arguments for the TUI)".into());
    };

    session.store.hydrate();

    match command {
        Commands::Topics(args) => cmd_topics(session, args, json)?,
        Commands::List(args) => cmd_list(session, args, json)?,
        Commands::Show(args) => cmd_show(session, args, json)?,
        Commands::Toggle(args) => cmd_toggle(session, args, json)?,
        Commands::Set(args) => cmd_set(session, args, json)?,
        Commands::Reset(args) => cmd_reset(session, args, json)?,
    }

    session.store.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve a topic and make sure the store tracks it, seeding from the
/// catalog the first time.
fn open_topic(session: &mut Session, key: &str) -> Result<Topic, Box<dyn std::error::Error>> {
    let topic = session.catalog.ensure_seeded(&mut session.store, key)?;
    Ok(topic.clone())
}

/// Progress for a topic: stored tasks when tracked, the catalog seed otherwise
fn topic_progress(session: &Session, topic: &Topic) -> Result<Completion, Box<dyn std::error::Error>> {
    if session.store.has_category(topic.key) {
        Ok(Completion::of(session.store.tasks(topic.key)))
    } else {
        Ok(Completion::of(&session.catalog.seed_tasks(topic.key)?))
    }
}

fn parse_filter_arg<T>(value: Option<&str>) -> Result<Option<T>, ParseLabelError>
where
    T: FromStr<Err = ParseLabelError>,
{
    value.map_or(Ok(None), parse_dimension)
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_topics(session: &Session, args: TopicsArgs, json: bool) -> CmdResult {
    let term = args.search.unwrap_or_default();
    let mut rows = Vec::new();
    for topic in session.catalog.search_topics(&term) {
        rows.push((topic.clone(), topic_progress(session, topic)?));
    }

    if json {
        let out: Vec<_> = rows.iter().map(|(t, p)| topic_to_json(t, *p)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No topics match \"{}\".", term.trim());
        return Ok(());
    }
    let name_width = rows
        .iter()
        .map(|(t, _)| display_width(t.name))
        .max()
        .unwrap_or(0);
    for (topic, progress) in &rows {
        println!("{}", format_topic_line(topic, *progress, name_width));
    }
    Ok(())
}

fn cmd_list(session: &mut Session, args: ListArgs, json: bool) -> CmdResult {
    let topic = open_topic(session, &args.topic)?;
    let spec = FilterSpec {
        status: parse_filter_arg(args.status.as_deref())?,
        priority: parse_filter_arg(args.priority.as_deref())?,
        task_type: parse_filter_arg(args.task_type.as_deref())?,
        search_term: args.search.unwrap_or_default(),
    };
    let tasks = session.store.filter_tasks(topic.key, &spec);

    if json {
        let progress = Completion::of(tasks.iter().copied());
        let out = TaskListJson {
            topic: topic.key,
            filters: filters_to_json(&spec),
            tasks,
            done: progress.done,
            total: progress.total,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("== {} ({}) ==", topic.name, topic.key);
        println!();
        print_lines(&format_task_table(&tasks));
    }
    Ok(())
}

fn cmd_show(session: &mut Session, args: ShowArgs, json: bool) -> CmdResult {
    let topic = open_topic(session, &args.topic)?;
    let task = session
        .store
        .task(topic.key, &args.id)
        .ok_or_else(|| format!("no task {} in {}", args.id, topic.key))?;

    if json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        print_lines(&format_task_detail(task));
    }
    Ok(())
}
