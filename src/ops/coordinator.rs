use crate::model::gesture::SettleTarget;
use crate::model::row::RowId;

use super::tracker::sanitize_width;

/// The single row currently revealed, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenRowRegistry {
    open: Option<RowId>,
}

impl OpenRowRegistry {
    pub fn open_row(&self) -> Option<&RowId> {
        self.open.as_ref()
    }

    pub fn is_open(&self, row: &RowId) -> bool {
        self.open.as_ref() == Some(row)
    }

    fn register(&mut self, row: &RowId) {
        self.open = Some(row.clone());
    }

    fn clear(&mut self) {
        self.open = None;
    }
}

/// List-wide authority over which row may be open and where a released row
/// comes to rest.
#[derive(Debug, Clone)]
pub struct RevealCoordinator {
    registry: OpenRowRegistry,
    open_threshold: f32,
}

impl Default for RevealCoordinator {
    fn default() -> Self {
        RevealCoordinator::new(0.5)
    }
}

impl RevealCoordinator {
    /// `open_threshold` is the fraction of the reveal width a released row
    /// must have reached to settle open. Values outside `(0, 1]` fall back
    /// to one half.
    pub fn new(open_threshold: f32) -> Self {
        let open_threshold = if open_threshold > 0.0 && open_threshold <= 1.0 {
            open_threshold
        } else {
            log::warn!("open threshold {open_threshold} out of range (0, 1], using 0.5");
            0.5
        };
        RevealCoordinator {
            registry: OpenRowRegistry::default(),
            open_threshold,
        }
    }

    pub fn registry(&self) -> &OpenRowRegistry {
        &self.registry
    }

    pub fn open_row(&self) -> Option<&RowId> {
        self.registry.open_row()
    }

    pub fn open_threshold(&self) -> f32 {
        self.open_threshold
    }

    /// Record that `row` moved to `offset`.
    ///
    /// Returns the previously open row when it must be closed. The registry
    /// already points at `row` when this returns, so the caller has to close
    /// the returned row before it shows `row` past zero.
    pub fn on_row_offset_changed(
        &mut self,
        row: &RowId,
        offset: f32,
        reveal_width: f32,
    ) -> Option<RowId> {
        let offset = offset.min(sanitize_width(reveal_width));
        if offset > 0.0 {
            if self.registry.is_open(row) {
                return None;
            }
            let displaced = self.registry.open.take();
            if let Some(other) = &displaced {
                log::trace!("row {row} opening, closing {other}");
            }
            self.registry.register(row);
            displaced
        } else {
            if self.registry.is_open(row) {
                self.registry.clear();
            }
            None
        }
    }

    /// Decide where a released row settles and update the registry to match.
    ///
    /// Settling open follows the same rule as any other offset change: a
    /// different row that was registered open is returned and must be closed
    /// by the caller.
    pub fn on_drag_end(
        &mut self,
        row: &RowId,
        current_offset: f32,
        reveal_width: f32,
    ) -> (SettleTarget, Option<RowId>) {
        let width = sanitize_width(reveal_width);
        // Compare fractions so a threshold like 0.3 is reached at exactly 30/100
        let target = if width > 0.0 && current_offset / width >= self.open_threshold {
            SettleTarget::Open
        } else {
            SettleTarget::Closed
        };
        let displaced = self.on_row_offset_changed(row, target.offset(width), width);
        (target, displaced)
    }

    /// The row was unbound or rebound to another record.
    pub fn on_row_recycled(&mut self, row: &RowId) {
        if self.registry.is_open(row) {
            self.registry.clear();
        }
    }

    /// Tapping an ajar row closes it instead of activating it.
    pub fn on_row_tapped(&self, _row: &RowId, current_offset: f32) -> bool {
        current_offset != 0.0
    }
}
