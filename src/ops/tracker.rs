use crate::model::gesture::{GestureState, RowPhase, SwipeDirection};

/// Turns the drag samples of one row into a clamped reveal offset.
///
/// Samples carry the raw horizontal displacement since the pointer went
/// down. While the pointer is down the row follows the finger 1:1 from the
/// offset it had when the drag began. After release the platform keeps
/// feeding samples while it recovers the gesture; those scale the offset
/// proportionally toward zero until the caller ends the drag.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    state: GestureState,
    direction: SwipeDirection,
}

impl GestureTracker {
    pub fn new(direction: SwipeDirection) -> Self {
        GestureTracker {
            state: GestureState::default(),
            direction,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn offset(&self) -> f32 {
        self.state.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.state.drag_active
    }

    /// Feed one drag sample and return the new offset.
    pub fn on_drag_sample(&mut self, raw_delta: f32, is_drag_active: bool, reveal_width: f32) -> f32 {
        let width = sanitize_width(reveal_width);

        // Re-grabbing a row while it settles starts a fresh drag from where
        // it currently is.
        let regrabbed = is_drag_active && self.state.settle_reference_delta.is_some();
        if !self.state.first_sample_consumed || regrabbed {
            self.state.base_offset_at_drag_start = self.state.offset.min(width);
            self.state.first_sample_consumed = true;
            self.state.settle_reference_delta = None;
        }
        self.state.drag_active = is_drag_active;

        let candidate = if is_drag_active {
            self.state.base_offset_at_drag_start + self.direction.reveal_delta(raw_delta)
        } else {
            self.settle_sample(raw_delta, width)
        };

        if candidate.is_finite() {
            self.state.offset = candidate.clamp(0.0, width);
        } else {
            log::debug!("ignoring non-finite drag sample (delta {raw_delta})");
            self.state.offset = self.state.offset.clamp(0.0, width);
        }
        self.state.offset
    }

    fn settle_sample(&mut self, raw_delta: f32, width: f32) -> f32 {
        let reference = match self.state.settle_reference_delta {
            Some(reference) => reference,
            None => {
                self.state.settle_base_offset = self.state.offset;
                self.state.settle_reference_delta = Some(raw_delta);
                raw_delta
            }
        };

        // A row released fully open stays open while the platform recovers.
        if self.state.settle_base_offset >= width {
            return self.state.offset;
        }
        if reference.abs() < f32::EPSILON {
            log::debug!(
                "degenerate settle input: zero reference delta, holding offset {}",
                self.state.offset
            );
            return self.state.offset;
        }
        self.state.settle_base_offset * (raw_delta / reference)
    }

    /// The pointer interaction is over; the next sample begins a new drag.
    /// The offset is kept as the row's resting position.
    pub fn end_drag(&mut self) {
        self.state.first_sample_consumed = false;
        self.state.drag_active = false;
        self.state.settle_reference_delta = None;
    }

    /// Set the offset directly (settle decisions, forced closes, rebinds).
    pub fn set_offset(&mut self, offset: f32, reveal_width: f32) {
        let width = sanitize_width(reveal_width);
        self.state.offset = if offset.is_finite() {
            offset.clamp(0.0, width)
        } else {
            0.0
        };
    }

    /// Forget everything; used when the row is recycled.
    pub fn reset(&mut self) {
        self.state = GestureState::default();
    }

    pub fn phase(&self, reveal_width: f32) -> RowPhase {
        let width = sanitize_width(reveal_width);
        if self.state.offset <= 0.0 {
            RowPhase::Closed
        } else if self.state.offset >= width {
            RowPhase::Open
        } else if self.state.drag_active {
            RowPhase::Opening
        } else {
            RowPhase::Settling
        }
    }
}

/// Widths that are not positive (or not numbers) make the row unopenable.
pub fn sanitize_width(reveal_width: f32) -> f32 {
    if reveal_width.is_finite() && reveal_width > 0.0 {
        reveal_width
    } else {
        if reveal_width != 0.0 {
            log::debug!("invalid reveal width {reveal_width}, treating row as unopenable");
        }
        0.0
    }
}
