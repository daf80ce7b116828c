use serde::Serialize;

use crate::model::gesture::{RevealCommand, SettleTarget};
use crate::model::row::TaskRecord;
use crate::ops::replay::ReplayReport;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskListJson<'a> {
    pub tasks: &'a [TaskRecord],
}

#[derive(Serialize)]
pub struct SettleJson {
    pub offset: f32,
    pub width: f32,
    pub target: SettleTarget,
    pub resting_offset: f32,
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a task as a one-line summary
pub fn format_task_line(task: &TaskRecord) -> String {
    let check = if task.is_checked { 'x' } else { ' ' };
    format!("[{}] {} {}  ({})", check, task.id, task.text, task.date)
}

pub fn format_command(command: &RevealCommand) -> String {
    match command {
        RevealCommand::ApplyOffset { row, offset } => format!("apply {row} {offset}"),
        RevealCommand::AnimateTo {
            row,
            target,
            duration,
        } => format!("animate {row} -> {target} ({}ms)", duration.as_millis()),
    }
}

pub fn format_settle(target: SettleTarget) -> &'static str {
    match target {
        SettleTarget::Open => "open",
        SettleTarget::Closed => "closed",
    }
}

/// Format a replay as a step log followed by the final row states
pub fn format_replay(report: &ReplayReport) -> Vec<String> {
    let mut lines = Vec::new();
    for step in &report.steps {
        let mut header = format!("{:>3}  {}", step.index, step.event);
        if let Some(tap) = step.tap {
            header.push_str(&format!(" -> {}", tap));
        }
        lines.push(header);
        for command in &step.commands {
            lines.push(format!("       {}", format_command(command)));
        }
    }

    lines.push(String::new());
    for row in &report.rows {
        lines.push(format!(
            "{}  {}/{}  {}",
            row.id,
            row.offset,
            row.width,
            row.phase.label()
        ));
    }
    lines.push(format!(
        "open: {}",
        report
            .open_row
            .as_ref()
            .map_or_else(|| "none".to_string(), |id| id.to_string())
    ));
    lines
}
