use std::collections::{HashMap, HashSet};

use crate::model::config::GestureConfig;
use crate::model::gesture::{RevealCommand, RowPhase, TapOutcome};
use crate::model::row::RowId;

use super::coordinator::RevealCoordinator;
use super::tracker::{GestureTracker, sanitize_width};

/// Gesture state for a whole list: one tracker per row, keyed by record id,
/// and the coordinator that keeps at most one of them open.
///
/// Every operation returns the commands the rendering layer must apply, in
/// order. A forced close of another row always precedes the offset of the
/// row that displaced it.
#[derive(Debug, Clone)]
pub struct SwipeList {
    trackers: HashMap<RowId, GestureTracker>,
    widths: HashMap<RowId, f32>,
    coordinator: RevealCoordinator,
    config: GestureConfig,
}

impl Default for SwipeList {
    fn default() -> Self {
        SwipeList::new(GestureConfig::default())
    }
}

impl SwipeList {
    pub fn new(config: GestureConfig) -> Self {
        SwipeList {
            trackers: HashMap::new(),
            widths: HashMap::new(),
            coordinator: RevealCoordinator::new(config.open_threshold),
            config,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Threshold in effect after range checks
    pub fn open_threshold(&self) -> f32 {
        self.coordinator.open_threshold()
    }

    /// Width of the row's hidden action region as last bound (0 if unbound)
    pub fn reveal_width(&self, row: &RowId) -> f32 {
        self.widths.get(row).copied().unwrap_or(0.0)
    }

    pub fn offset(&self, row: &RowId) -> f32 {
        self.trackers.get(row).map_or(0.0, GestureTracker::offset)
    }

    pub fn phase(&self, row: &RowId) -> RowPhase {
        self.trackers
            .get(row)
            .map_or(RowPhase::Closed, |t| t.phase(self.reveal_width(row)))
    }

    pub fn open_row(&self) -> Option<&RowId> {
        self.coordinator.open_row()
    }

    /// Rows whose tracked offset is above zero
    pub fn ajar_rows(&self) -> Vec<&RowId> {
        let mut rows: Vec<&RowId> = self
            .trackers
            .iter()
            .filter(|(_, t)| t.offset() > 0.0)
            .map(|(id, _)| id)
            .collect();
        rows.sort();
        rows
    }

    /// Rows with gesture state, in id order
    pub fn tracked_rows(&self) -> Vec<&RowId> {
        let mut rows: Vec<&RowId> = self.trackers.keys().collect();
        rows.sort();
        rows
    }

    /// Bind (or rebind) a row with its current reveal width.
    pub fn bind(&mut self, row: &RowId, reveal_width: f32) -> Vec<RevealCommand> {
        let width = sanitize_width(reveal_width);
        let previous = self.widths.insert(row.clone(), width);

        let Some(tracker) = self.trackers.get_mut(row) else {
            return Vec::new();
        };
        let before = tracker.offset();
        let was_open = previous.is_some_and(|w| w > 0.0 && before >= w) && !tracker.is_dragging();
        let resting = if was_open { width } else { before };
        tracker.set_offset(resting, width);
        let after = tracker.offset();

        if after == before {
            return Vec::new();
        }
        let mut commands = Vec::new();
        if let Some(other) = self.coordinator.on_row_offset_changed(row, after, width) {
            commands.extend(self.force_close(&other));
        }
        commands.push(RevealCommand::ApplyOffset {
            row: row.clone(),
            offset: after,
        });
        commands
    }

    /// Feed one drag sample for `row`.
    pub fn drag(&mut self, row: &RowId, raw_delta: f32, is_drag_active: bool) -> Vec<RevealCommand> {
        let width = self.reveal_width(row);
        let direction = self.config.direction;
        let offset = self
            .trackers
            .entry(row.clone())
            .or_insert_with(|| GestureTracker::new(direction))
            .on_drag_sample(raw_delta, is_drag_active, width);

        let mut commands = Vec::new();
        if let Some(other) = self.coordinator.on_row_offset_changed(row, offset, width) {
            commands.extend(self.force_close(&other));
        }
        commands.push(RevealCommand::ApplyOffset {
            row: row.clone(),
            offset,
        });
        commands
    }

    /// The pointer let go of `row`: settle it fully open or fully closed.
    pub fn release(&mut self, row: &RowId) -> Vec<RevealCommand> {
        let width = self.reveal_width(row);
        let Some(tracker) = self.trackers.get_mut(row) else {
            return Vec::new();
        };
        tracker.end_drag();
        let current = tracker.offset();
        let (target, displaced) = self.coordinator.on_drag_end(row, current, width);
        let resting = target.offset(width);
        tracker.set_offset(resting, width);

        let mut commands = Vec::new();
        if let Some(other) = displaced {
            commands.extend(self.force_close(&other));
        }
        commands.push(RevealCommand::AnimateTo {
            row: row.clone(),
            target: resting,
            duration: self.config.settle_duration(),
        });
        commands
    }

    /// The platform took the gesture away (e.g. the list started scrolling).
    /// Settles exactly like a release so no row is left ajar.
    pub fn cancel(&mut self, row: &RowId) -> Vec<RevealCommand> {
        self.release(row)
    }

    /// A tap landed on `row`.
    pub fn tap(&mut self, row: &RowId) -> (TapOutcome, Vec<RevealCommand>) {
        if self.coordinator.on_row_tapped(row, self.offset(row)) {
            (TapOutcome::Closed, self.close(row))
        } else {
            (TapOutcome::Activate, Vec::new())
        }
    }

    /// Animate `row` back to closed if it is not already.
    pub fn close(&mut self, row: &RowId) -> Vec<RevealCommand> {
        let width = self.reveal_width(row);
        self.coordinator.on_row_offset_changed(row, 0.0, width);
        match self.trackers.get_mut(row) {
            Some(tracker) if tracker.offset() > 0.0 => {
                tracker.set_offset(0.0, width);
                vec![self.close_command(row)]
            }
            _ => Vec::new(),
        }
    }

    /// Close whichever row is open.
    pub fn close_all(&mut self) -> Vec<RevealCommand> {
        let ajar: Vec<RowId> = self.ajar_rows().into_iter().cloned().collect();
        ajar.iter().flat_map(|row| self.close(row)).collect()
    }

    /// The row was unbound or now shows a different record.
    pub fn recycle(&mut self, row: &RowId) {
        self.trackers.remove(row);
        self.widths.remove(row);
        self.coordinator.on_row_recycled(row);
    }

    /// Recycle every row whose record is no longer in `keep`.
    pub fn retain<'a>(&mut self, keep: impl IntoIterator<Item = &'a RowId>) {
        let keep: HashSet<&RowId> = keep.into_iter().collect();
        let stale: HashSet<RowId> = self
            .trackers
            .keys()
            .chain(self.widths.keys())
            .filter(|id| !keep.contains(id))
            .cloned()
            .collect();
        for row in &stale {
            self.recycle(row);
        }
    }

    fn force_close(&mut self, row: &RowId) -> Vec<RevealCommand> {
        let width = self.reveal_width(row);
        match self.trackers.get_mut(row) {
            Some(tracker) => {
                tracker.set_offset(0.0, width);
                vec![self.close_command(row)]
            }
            None => {
                log::debug!("open row {row} has no gesture state, dropping stale reference");
                Vec::new()
            }
        }
    }

    fn close_command(&self, row: &RowId) -> RevealCommand {
        RevealCommand::AnimateTo {
            row: row.clone(),
            target: 0.0,
            duration: self.config.close_duration(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    fn id(s: &str) -> RowId {
        RowId::from(s)
    }

    fn list_with(rows: &[(&str, f32)]) -> SwipeList {
        let mut list = SwipeList::default();
        for (row, width) in rows {
            list.bind(&id(row), *width);
        }
        list
    }

    fn apply(row: &str, offset: f32) -> RevealCommand {
        RevealCommand::ApplyOffset {
            row: id(row),
            offset,
        }
    }

    fn animate(row: &str, target: f32, ms: u64) -> RevealCommand {
        RevealCommand::AnimateTo {
            row: id(row),
            target,
            duration: Duration::from_millis(ms),
        }
    }

    #[test]
    fn drag_emits_apply_offset() {
        let mut list = list_with(&[("a", 100.0)]);
        assert_eq!(list.drag(&id("a"), -30.0, true), vec![apply("a", 30.0)]);
        assert_eq!(list.phase(&id("a")), RowPhase::Opening);
        assert_eq!(list.open_row(), Some(&id("a")));
    }

    #[test]
    fn opening_second_row_closes_first_before_moving() {
        let mut list = list_with(&[("a", 100.0), ("b", 100.0)]);
        list.drag(&id("a"), -100.0, true);
        list.release(&id("a"));
        assert_eq!(list.phase(&id("a")), RowPhase::Open);

        let commands = list.drag(&id("b"), -10.0, true);
        assert_eq!(commands, vec![animate("a", 0.0, 300), apply("b", 10.0)]);
        assert_eq!(list.offset(&id("a")), 0.0);
        assert_eq!(list.open_row(), Some(&id("b")));
    }

    #[test]
    fn release_past_half_opens() {
        let mut list = list_with(&[("a", 100.0)]);
        list.drag(&id("a"), -60.0, true);
        assert_eq!(list.release(&id("a")), vec![animate("a", 100.0, 200)]);
        assert_eq!(list.offset(&id("a")), 100.0);
        assert_eq!(list.open_row(), Some(&id("a")));
    }

    #[test]
    fn release_short_of_half_closes() {
        let mut list = list_with(&[("a", 100.0)]);
        list.drag(&id("a"), -40.0, true);
        assert_eq!(list.release(&id("a")), vec![animate("a", 0.0, 200)]);
        assert_eq!(list.phase(&id("a")), RowPhase::Closed);
        assert_eq!(list.open_row(), None);
    }

    #[test]
    fn release_closes_row_displaced_by_settling_open() {
        let mut list = list_with(&[("a", 100.0), ("b", 100.0)]);
        list.drag(&id("a"), -100.0, true);
        list.release(&id("a"));

        // b reached 60 without passing through the coordinator
        list.drag(&id("b"), 0.0, true);
        list.trackers.get_mut(&id("b")).unwrap().set_offset(60.0, 100.0);

        assert_eq!(
            list.release(&id("b")),
            vec![animate("a", 0.0, 300), animate("b", 100.0, 200)]
        );
        assert_eq!(list.ajar_rows(), vec![&id("b")]);
        assert_eq!(list.open_row(), Some(&id("b")));
    }

    #[test]
    fn cancel_settles_like_release() {
        let mut list = list_with(&[("a", 100.0)]);
        list.drag(&id("a"), -70.0, true);
        list.cancel(&id("a"));
        assert_eq!(list.phase(&id("a")), RowPhase::Open);
    }

    #[test]
    fn release_of_unknown_row_is_noop() {
        let mut list = SwipeList::default();
        assert!(list.release(&id("ghost")).is_empty());
    }

    #[test]
    fn tap_closes_open_row() {
        let mut list = list_with(&[("a", 100.0)]);
        list.drag(&id("a"), -100.0, true);
        list.release(&id("a"));

        let (outcome, commands) = list.tap(&id("a"));
        assert_eq!(outcome, TapOutcome::Closed);
        assert_eq!(commands, vec![animate("a", 0.0, 300)]);
        assert_eq!(list.open_row(), None);

        let (outcome, commands) = list.tap(&id("a"));
        assert_eq!(outcome, TapOutcome::Activate);
        assert!(commands.is_empty());
    }

    #[test]
    fn recycle_forgets_row() {
        let mut list = list_with(&[("a", 100.0), ("b", 100.0)]);
        list.drag(&id("a"), -100.0, true);
        list.release(&id("a"));
        list.recycle(&id("a"));
        assert_eq!(list.open_row(), None);
        assert_eq!(list.offset(&id("a")), 0.0);

        // b opens without any forced close
        assert_eq!(list.drag(&id("b"), -10.0, true), vec![apply("b", 10.0)]);
    }

    #[test]
    fn retain_recycles_removed_rows() {
        let mut list = list_with(&[("a", 100.0), ("b", 100.0)]);
        list.drag(&id("a"), -100.0, true);
        list.release(&id("a"));
        list.retain([&id("b")]);
        assert_eq!(list.open_row(), None);
        assert_eq!(list.reveal_width(&id("a")), 0.0);
        assert_eq!(list.reveal_width(&id("b")), 100.0);
    }

    #[test]
    fn rebind_narrower_clamps_offset() {
        let mut list = list_with(&[("a", 100.0)]);
        list.drag(&id("a"), -40.0, true);
        assert_eq!(list.bind(&id("a"), 30.0), vec![apply("a", 30.0)]);
        assert_eq!(list.offset(&id("a")), 30.0);
    }

    #[test]
    fn rebind_keeps_open_row_open() {
        let mut list = list_with(&[("a", 100.0)]);
        list.drag(&id("a"), -100.0, true);
        list.release(&id("a"));
        assert_eq!(list.bind(&id("a"), 120.0), vec![apply("a", 120.0)]);
        assert_eq!(list.phase(&id("a")), RowPhase::Open);
    }

    #[test]
    fn rebind_to_zero_width_closes() {
        let mut list = list_with(&[("a", 100.0)]);
        list.drag(&id("a"), -100.0, true);
        list.release(&id("a"));
        assert_eq!(list.bind(&id("a"), 0.0), vec![apply("a", 0.0)]);
        assert_eq!(list.open_row(), None);
    }

    #[test]
    fn unbound_row_cannot_open() {
        let mut list = SwipeList::default();
        assert_eq!(list.drag(&id("x"), -50.0, true), vec![apply("x", 0.0)]);
        assert_eq!(list.open_row(), None);
    }

    #[test]
    fn close_all_closes_open_row() {
        let mut list = list_with(&[("a", 100.0)]);
        list.drag(&id("a"), -100.0, true);
        list.release(&id("a"));
        assert_eq!(list.close_all(), vec![animate("a", 0.0, 300)]);
        assert!(list.ajar_rows().is_empty());
    }
}
