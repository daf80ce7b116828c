use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::row::RowId;

/// Which horizontal finger motion uncovers a row's hidden actions.
///
/// Purely a coordinate convention of the rendering layer: the tracking math
/// always works on a non-negative reveal offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Leftward drag (negative delta) reveals right-anchored actions
    #[default]
    Left,
    /// Rightward drag (positive delta) reveals left-anchored actions
    Right,
}

impl SwipeDirection {
    /// Map a raw platform delta onto the reveal axis
    pub fn reveal_delta(self, raw_delta: f32) -> f32 {
        match self {
            SwipeDirection::Left => -raw_delta,
            SwipeDirection::Right => raw_delta,
        }
    }
}

/// Per-row gesture bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureState {
    /// Current reveal offset, always within `[0, reveal_width]`
    pub offset: f32,
    /// Pointer is down and moving on this row
    pub drag_active: bool,
    /// Offset captured on the first sample of the current drag
    pub base_offset_at_drag_start: f32,
    /// Set once `base_offset_at_drag_start` has been captured
    pub first_sample_consumed: bool,
    /// Offset captured on the first released sample of the current drag
    pub settle_base_offset: f32,
    /// Raw delta captured on the first released sample of the current drag
    pub settle_reference_delta: Option<f32>,
}

/// Where a row comes to rest once the pointer lets go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettleTarget {
    Open,
    Closed,
}

impl SettleTarget {
    /// Resting offset for this target
    pub fn offset(self, reveal_width: f32) -> f32 {
        match self {
            SettleTarget::Open => reveal_width.max(0.0),
            SettleTarget::Closed => 0.0,
        }
    }
}

/// Observable phase of a row, derived from its gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPhase {
    /// offset == 0
    Closed,
    /// 0 < offset < width, pointer down
    Opening,
    /// 0 < offset < width, pointer released
    Settling,
    /// offset == width
    Open,
}

impl RowPhase {
    pub fn label(self) -> &'static str {
        match self {
            RowPhase::Closed => "closed",
            RowPhase::Opening => "opening",
            RowPhase::Settling => "settling",
            RowPhase::Open => "open",
        }
    }
}

/// Instruction for the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum RevealCommand {
    /// Move the row to `offset` immediately (finger tracking)
    ApplyOffset { row: RowId, offset: f32 },
    /// Animate the row to `target` over roughly `duration`
    AnimateTo {
        row: RowId,
        target: f32,
        #[serde(with = "duration_ms")]
        duration: Duration,
    },
}

impl RevealCommand {
    pub fn row(&self) -> &RowId {
        match self {
            RevealCommand::ApplyOffset { row, .. } | RevealCommand::AnimateTo { row, .. } => row,
        }
    }
}

/// Result of a tap on a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The row was ajar and is being closed; the tap is consumed
    Closed,
    /// The row was closed; the tap goes to the row's own click target
    Activate,
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(d)?))
    }
}
