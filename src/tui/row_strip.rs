use crate::model::gesture::SwipeDirection;
use crate::model::row::TaskRecord;
use crate::util::unicode;

/// Hidden button behind a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

/// What a column of an on-screen row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHit {
    Checkbox,
    Content,
    Button(RowAction),
}

/// Which part of the strip a slice of text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripPart {
    Content,
    Button(RowAction),
}

/// `[ ]` / `[x]`
pub const CHECKBOX_WIDTH: usize = 3;

/// A row laid out as one horizontal strip: the content, exactly `width`
/// cells wide, with the action buttons beside it. The reveal offset picks
/// which `width`-cell window of the strip is on screen, so offset 0 shows
/// only the content and the full reveal width shows every button.
#[derive(Debug, Clone)]
pub struct RowStrip {
    content: String,
    buttons: Vec<(RowAction, String)>,
    direction: SwipeDirection,
    width: usize,
}

impl RowStrip {
    pub fn new(
        content: &str,
        width: usize,
        buttons: Vec<(RowAction, String)>,
        direction: SwipeDirection,
    ) -> Self {
        RowStrip {
            content: unicode::fit_to_width(content, width),
            buttons,
            direction,
            width,
        }
    }

    /// Cells taken by the buttons; this is the row's reveal width.
    pub fn buttons_width(&self) -> usize {
        self.buttons
            .iter()
            .map(|(_, label)| unicode::display_width(label))
            .sum()
    }

    /// Reveal offset rounded to whole cells
    pub fn offset_cells(&self, offset: f32) -> usize {
        if offset.is_nan() || offset <= 0.0 {
            return 0;
        }
        (offset.round() as usize).min(self.buttons_width())
    }

    fn parts(&self) -> Vec<(StripPart, &str)> {
        let content = (StripPart::Content, self.content.as_str());
        let buttons = self
            .buttons
            .iter()
            .map(|(action, label)| (StripPart::Button(*action), label.as_str()));
        match self.direction {
            SwipeDirection::Left => std::iter::once(content).chain(buttons).collect(),
            SwipeDirection::Right => buttons.chain(std::iter::once(content)).collect(),
        }
    }

    fn window_start(&self, offset: f32) -> usize {
        let cells = self.offset_cells(offset);
        match self.direction {
            SwipeDirection::Left => cells,
            SwipeDirection::Right => self.buttons_width() - cells,
        }
    }

    /// The on-screen slices of the strip at `offset`, left to right.
    pub fn visible(&self, offset: f32) -> Vec<(StripPart, String)> {
        let window_start = self.window_start(offset);
        let window_end = window_start + self.width;
        let mut out = Vec::new();
        let mut start = 0;
        for (part, text) in self.parts() {
            let end = start + unicode::display_width(text);
            let lo = start.max(window_start);
            let hi = end.min(window_end);
            if lo < hi {
                out.push((part, unicode::slice_columns(text, lo - start, hi - lo)));
            }
            start = end;
        }
        out
    }

    /// What sits at screen column `x` (relative to the row) at `offset`.
    pub fn hit(&self, offset: f32, x: usize) -> RowHit {
        let col = self.window_start(offset) + x;
        let mut start = 0;
        for (part, text) in self.parts() {
            let end = start + unicode::display_width(text);
            if col < end {
                return match part {
                    StripPart::Button(action) => RowHit::Button(action),
                    StripPart::Content if col - start < CHECKBOX_WIDTH => RowHit::Checkbox,
                    StripPart::Content => RowHit::Content,
                };
            }
            start = end;
        }
        RowHit::Content
    }
}

/// `[x] text ... date`, fitted to `width` cells with the date right-aligned.
/// The date is dropped when there is no room for it next to some text.
pub fn format_row_content(record: &TaskRecord, width: usize) -> String {
    let check = if record.is_checked { "[x]" } else { "[ ]" };
    let date_w = unicode::display_width(&record.date);
    let lead = CHECKBOX_WIDTH + 1;
    if record.date.is_empty() || width < lead + date_w + 2 {
        let text = unicode::truncate_to_width(&record.text, width.saturating_sub(lead));
        return unicode::fit_to_width(&format!("{check} {text}"), width);
    }
    let text_w = width - lead - date_w - 1;
    let text = unicode::fit_to_width(&record.text, text_w);
    format!("{check} {text} {}", record.date)
}
