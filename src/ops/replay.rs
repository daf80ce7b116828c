use serde::Serialize;

use crate::io::script::{GestureScript, ScriptEvent};
use crate::model::config::GestureConfig;
use crate::model::gesture::{RevealCommand, RowPhase, TapOutcome};
use crate::model::row::RowId;

use super::swipe_list::SwipeList;

/// Commands produced by one script event
#[derive(Debug, Clone, Serialize)]
pub struct ReplayStep {
    pub index: usize,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tap: Option<&'static str>,
    pub commands: Vec<RevealCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_row: Option<RowId>,
}

/// Final state of one row after a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSummary {
    pub id: RowId,
    pub offset: f32,
    pub width: f32,
    pub phase: RowPhase,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    pub rows: Vec<RowSummary>,
    pub open_row: Option<RowId>,
}

/// Run a script through a fresh swipe list.
pub fn replay(script: &GestureScript, config: GestureConfig) -> ReplayReport {
    let mut list = SwipeList::new(config);
    for row in &script.rows {
        list.bind(&row.id, row.width);
    }

    let steps = script
        .events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let mut tap = None;
            let commands = match event {
                ScriptEvent::Bind { row, width } => list.bind(row, *width),
                ScriptEvent::Drag { row, delta, active } => list.drag(row, *delta, *active),
                ScriptEvent::Release { row } => list.release(row),
                ScriptEvent::Cancel { row } => list.cancel(row),
                ScriptEvent::Tap { row } => {
                    let (outcome, commands) = list.tap(row);
                    tap = Some(match outcome {
                        TapOutcome::Closed => "closed",
                        TapOutcome::Activate => "activate",
                    });
                    commands
                }
                ScriptEvent::Close { row } => list.close(row),
                ScriptEvent::Recycle { row } => {
                    list.recycle(row);
                    Vec::new()
                }
            };
            ReplayStep {
                index,
                event: event.describe(),
                tap,
                commands,
                open_row: list.open_row().cloned(),
            }
        })
        .collect();

    let mut ids: Vec<RowId> = script.rows.iter().map(|r| r.id.clone()).collect();
    for row in list.tracked_rows() {
        if !ids.contains(row) {
            ids.push(row.clone());
        }
    }
    let rows = ids
        .into_iter()
        .map(|id| RowSummary {
            offset: list.offset(&id),
            width: list.reveal_width(&id),
            phase: list.phase(&id),
            id,
        })
        .collect();

    ReplayReport {
        steps,
        rows,
        open_row: list.open_row().cloned(),
    }
}
