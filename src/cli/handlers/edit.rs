use tracing::info;

use super::{CmdResult, open_topic, print_lines};
use crate::cli::commands::{ResetArgs, SetArgs, ToggleArgs};
use crate::cli::output::{ResetJson, format_task_detail};
use crate::model::task::{TaskPatch, TaskPriority, TaskStatus, TaskType};
use crate::session::Session;

fn report_missing(id: &str, topic: &str, json: bool) {
    if json {
        println!("null");
    } else {
        println!("no task {} in {}", id, topic);
    }
}

pub fn cmd_toggle(session: &mut Session, args: ToggleArgs, json: bool) -> CmdResult {
    let topic = open_topic(session, &args.topic)?;
    let Some(status) = session.store.toggle_task_status(topic.key, &args.id) else {
        report_missing(&args.id, topic.key, json);
        return Ok(());
    };
    info!(topic = topic.key, id = %args.id, %status, "toggled from cli");

    if json {
        if let Some(task) = session.store.task(topic.key, &args.id) {
            println!("{}", serde_json::to_string_pretty(task)?);
        }
    } else {
        println!("{}: {}", args.id, status);
    }
    Ok(())
}

pub fn cmd_set(session: &mut Session, args: SetArgs, json: bool) -> CmdResult {
    // Every dimension must name a concrete value here; "All" is a filter word
    let patch = TaskPatch {
        title: args.title,
        description: args.description,
        status: args.status.as_deref().map(str::parse::<TaskStatus>).transpose()?,
        priority: args.priority.as_deref().map(str::parse::<TaskPriority>).transpose()?,
        task_type: args.task_type.as_deref().map(str::parse::<TaskType>).transpose()?,
    };
    if patch.is_empty() {
        return Err(
            "nothing to set (use --status, --priority, --type, --title or --description)".into(),
        );
    }

    let topic = open_topic(session, &args.topic)?;
    if session.store.task(topic.key, &args.id).is_none() {
        report_missing(&args.id, topic.key, json);
        return Ok(());
    }
    if session.store.update_task(topic.key, &args.id, &patch) {
        info!(topic = topic.key, id = %args.id, "updated from cli");
    }

    if let Some(task) = session.store.task(topic.key, &args.id) {
        if json {
            println!("{}", serde_json::to_string_pretty(task)?);
        } else {
            print_lines(&format_task_detail(task));
        }
    }
    Ok(())
}

pub fn cmd_reset(session: &mut Session, args: ResetArgs, json: bool) -> CmdResult {
    let topic = open_topic(session, &args.topic)?;
    let seed = session.catalog.seed_tasks(topic.key)?;
    let count = seed.len();
    let changed = session.store.set_tasks(topic.key, seed);
    if changed {
        info!(topic = topic.key, count, "reset topic from catalog");
    }

    if json {
        let out = ResetJson {
            topic: topic.key,
            tasks: count,
            changed,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if changed {
        println!("reset {}: {} task(s)", topic.name, count);
    } else {
        println!("{} already matches the catalog", topic.name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::AppConfig;
    use tempfile::TempDir;

    fn session(tmp: &TempDir) -> Session {
        let mut s = Session::with_config(tmp.path().to_path_buf(), AppConfig::default());
        s.store.hydrate();
        s
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let tmp = TempDir::new().unwrap();
        let mut s = session(&tmp);
        let args = ToggleArgs {
            topic: "ruby".into(),
            id: "NOPE".into(),
        };
        cmd_toggle(&mut s, args, false).unwrap();
        // Seeding is the only change
        assert_eq!(s.store.revision(), 1);
        assert_eq!(s.store.tasks("ruby"), s.catalog.seed_tasks("ruby").unwrap());
    }

    #[test]
    fn set_rejects_empty_patch_and_all_sentinel() {
        let tmp = TempDir::new().unwrap();
        let mut s = session(&tmp);
        let empty = SetArgs {
            topic: "ruby".into(),
            id: "TASK-7531".into(),
            status: None,
            priority: None,
            task_type: None,
            title: None,
            description: None,
        };
        assert!(cmd_set(&mut s, empty, false).is_err());

        let all = SetArgs {
            topic: "ruby".into(),
            id: "TASK-7531".into(),
            status: Some("All".into()),
            priority: None,
            task_type: None,
            title: None,
            description: None,
        };
        assert!(cmd_set(&mut s, all, false).is_err());
    }

    #[test]
    fn reset_restores_seed_statuses() {
        let tmp = TempDir::new().unwrap();
        let mut s = session(&tmp);
        let toggle = ToggleArgs {
            topic: "python".into(),
            id: "TASK-3421".into(),
        };
        cmd_toggle(&mut s, toggle, false).unwrap();
        assert_eq!(
            s.store.task("python", "TASK-3421").map(|t| t.status),
            Some(TaskStatus::Done)
        );

        cmd_reset(&mut s, ResetArgs { topic: "python".into() }, false).unwrap();
        assert_eq!(
            s.store.task("python", "TASK-3421").map(|t| t.status),
            Some(TaskStatus::InProgress)
        );
    }
}
