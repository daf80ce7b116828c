use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::model::row::RowId;

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Animation {
    fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * t
    }

    fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Running reveal animations, one per row at most.
///
/// Linear interpolation; the gesture model already holds each row's final
/// offset, this only decides what is drawn in between.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    running: HashMap<RowId, Animation>,
}

impl Animator {
    pub fn start(&mut self, row: &RowId, from: f32, to: f32, duration: Duration, now: Instant) {
        self.running.insert(
            row.clone(),
            Animation {
                from,
                to,
                started: now,
                duration,
            },
        );
    }

    /// Finger tracking takes over the row immediately.
    pub fn stop(&mut self, row: &RowId) {
        self.running.remove(row);
    }

    /// Drawn offset of `row`, if it is animating
    pub fn value(&self, row: &RowId, now: Instant) -> Option<f32> {
        self.running.get(row).map(|a| a.value_at(now))
    }

    /// Drop finished animations. Returns true while any are still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.running.retain(|_, a| !a.finished(now));
        !self.running.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }
}
