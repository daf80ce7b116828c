//! Gesture scripts: a recorded sequence of row binds and pointer events that
//! can be replayed against a [`SwipeList`](crate::ops::SwipeList).
//!
//! ```toml
//! [[rows]]
//! id = "a"
//! width = 100.0
//!
//! [[events]]
//! kind = "drag"
//! row = "a"
//! delta = -60.0
//!
//! [[events]]
//! kind = "release"
//! row = "a"
//! ```

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::row::RowId;

/// Error type for loading gesture scripts
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not parse script: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("event {index} refers to row {row}, which is never bound before it")]
    UnknownRow { index: usize, row: RowId },
}

/// A row present when the script starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptRow {
    pub id: RowId,
    pub width: f32,
}

/// One step of a gesture script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScriptEvent {
    /// Bind or rebind a row with a reveal width
    Bind { row: RowId, width: f32 },
    /// One drag sample; `delta` is the displacement since the pointer went down
    Drag {
        row: RowId,
        delta: f32,
        #[serde(default = "default_true")]
        active: bool,
    },
    Release { row: RowId },
    Cancel { row: RowId },
    Tap { row: RowId },
    Close { row: RowId },
    Recycle { row: RowId },
}

fn default_true() -> bool {
    true
}

impl ScriptEvent {
    pub fn row(&self) -> &RowId {
        match self {
            ScriptEvent::Bind { row, .. }
            | ScriptEvent::Drag { row, .. }
            | ScriptEvent::Release { row }
            | ScriptEvent::Cancel { row }
            | ScriptEvent::Tap { row }
            | ScriptEvent::Close { row }
            | ScriptEvent::Recycle { row } => row,
        }
    }

    /// Short human-readable form, e.g. `drag a -30 (active)`
    pub fn describe(&self) -> String {
        match self {
            ScriptEvent::Bind { row, width } => format!("bind {row} width {width}"),
            ScriptEvent::Drag { row, delta, active } => {
                let phase = if *active { "active" } else { "released" };
                format!("drag {row} {delta} ({phase})")
            }
            ScriptEvent::Release { row } => format!("release {row}"),
            ScriptEvent::Cancel { row } => format!("cancel {row}"),
            ScriptEvent::Tap { row } => format!("tap {row}"),
            ScriptEvent::Close { row } => format!("close {row}"),
            ScriptEvent::Recycle { row } => format!("recycle {row}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    #[serde(default)]
    pub rows: Vec<ScriptRow>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl GestureScript {
    /// Every event must name a row that is bound by then. A recycled row has
    /// to be bound again before it takes events.
    pub fn validate(&self) -> Result<(), ScriptError> {
        let mut bound: HashSet<&RowId> = self.rows.iter().map(|r| &r.id).collect();
        for (index, event) in self.events.iter().enumerate() {
            match event {
                ScriptEvent::Bind { row, .. } => {
                    bound.insert(row);
                }
                ScriptEvent::Recycle { row } => {
                    bound.remove(row);
                }
                other if !bound.contains(other.row()) => {
                    return Err(ScriptError::UnknownRow {
                        index,
                        row: other.row().clone(),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

pub fn parse_script(text: &str) -> Result<GestureScript, ScriptError> {
    let script: GestureScript = toml::from_str(text)?;
    script.validate()?;
    Ok(script)
}

pub fn read_script(path: &Path) -> Result<GestureScript, ScriptError> {
    let text = fs::read_to_string(path).map_err(|e| ScriptError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_script(&text)
}
