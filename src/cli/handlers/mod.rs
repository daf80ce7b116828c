use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{config_io, script, task_io};
use crate::model::row::RowId;
use crate::ops::coordinator::RevealCoordinator;
use crate::ops::replay;
use crate::ops::task_ops::TaskList;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let tasks_path = Path::new(&cli.tasks);
    let config_path = Path::new(&cli.config);

    match cli.command {
        // No subcommand launches the TUI from main.rs
        None => Ok(()),
        Some(cmd) => match cmd {
            // Task commands
            Commands::List => cmd_list(tasks_path, json),
            Commands::Add(args) => cmd_add(tasks_path, args, json),
            Commands::Edit(args) => cmd_edit(tasks_path, args, json),
            Commands::Toggle(args) => cmd_toggle(tasks_path, args, json),
            Commands::Delete(args) => cmd_delete(tasks_path, args, json),

            // Gesture commands
            Commands::Settle(args) => cmd_settle(config_path, args, json),
            Commands::Replay(args) => cmd_replay(config_path, args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn modify_tasks<T>(
    path: &Path,
    f: impl FnOnce(&mut TaskList) -> Result<T, Box<dyn std::error::Error>>,
) -> Result<T, Box<dyn std::error::Error>> {
    let mut tasks = task_io::read_tasks(path)?;
    let result = f(&mut tasks)?;
    task_io::write_tasks(path, &tasks)?;
    Ok(result)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Task commands
// ---------------------------------------------------------------------------

fn cmd_list(tasks_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = task_io::read_tasks(tasks_path)?;
    if json {
        let records = tasks.records();
        return print_json(&TaskListJson { tasks: &records });
    }
    if tasks.is_empty() {
        println!("no tasks");
    }
    for task in tasks.iter() {
        println!("{}", format_task_line(task));
    }
    Ok(())
}

fn cmd_add(tasks_path: &Path, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let record = modify_tasks(tasks_path, |tasks| {
        let id = tasks.add(&args.text)?;
        Ok(tasks.get(&id).cloned())
    })?;
    if let Some(record) = record {
        if json {
            print_json(&record)?;
        } else {
            println!("{}", record.id);
        }
    }
    Ok(())
}

fn cmd_edit(tasks_path: &Path, args: EditArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let id = RowId::new(args.id);
    let record = modify_tasks(tasks_path, |tasks| {
        Ok(tasks.edit(&id, &args.text, args.checked)?.clone())
    })?;
    if json {
        print_json(&record)
    } else {
        println!("{}", format_task_line(&record));
        Ok(())
    }
}

fn cmd_toggle(tasks_path: &Path, args: IdArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let id = RowId::new(args.id);
    let record = modify_tasks(tasks_path, |tasks| {
        tasks.toggle(&id)?;
        Ok(tasks.get(&id).cloned())
    })?;
    if let Some(record) = record {
        if json {
            print_json(&record)?;
        } else {
            println!("{}", format_task_line(&record));
        }
    }
    Ok(())
}

fn cmd_delete(tasks_path: &Path, args: IdArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let id = RowId::new(args.id);
    let record = modify_tasks(tasks_path, |tasks| Ok(tasks.delete(&id)?))?;
    if json {
        print_json(&record)
    } else {
        println!("{}", format_task_line(&record));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Gesture commands
// ---------------------------------------------------------------------------

fn cmd_settle(config_path: &Path, args: SettleArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::read_config(config_path)?;
    let mut coordinator = RevealCoordinator::new(config.gesture.open_threshold);
    let (target, _) = coordinator.on_drag_end(&RowId::from("settle"), args.offset, args.width);
    if json {
        print_json(&SettleJson {
            offset: args.offset,
            width: args.width,
            target,
            resting_offset: target.offset(args.width),
        })
    } else {
        println!("{}", format_settle(target));
        Ok(())
    }
}

fn cmd_replay(config_path: &Path, args: ReplayArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::read_config(config_path)?;
    let script = script::read_script(Path::new(&args.script))?;
    let report = replay::replay(&script, config.gesture);
    if json {
        print_json(&report)
    } else {
        for line in format_replay(&report) {
            println!("{}", line);
        }
        Ok(())
    }
}
