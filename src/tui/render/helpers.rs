use ratatui::style::Style;
use ratatui::text::Span;

use crate::tui::row_strip::{RowAction, StripPart};
use crate::tui::theme::Theme;
use crate::util::unicode;

/// Style each visible slice of a row strip. `content` is the style of the
/// row's own text; buttons take their theme colors.
pub(super) fn strip_spans(
    parts: Vec<(StripPart, String)>,
    content: Style,
    theme: &Theme,
) -> Vec<Span<'static>> {
    parts
        .into_iter()
        .map(|(part, text)| {
            let style = match part {
                StripPart::Content => content,
                StripPart::Button(RowAction::Edit) => {
                    Style::default().fg(theme.button_text).bg(theme.edit)
                }
                StripPart::Button(RowAction::Delete) => {
                    Style::default().fg(theme.button_text).bg(theme.delete)
                }
            };
            Span::styled(text, style)
        })
        .collect()
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_get_theme_colors() {
        let theme = Theme::default();
        let spans = strip_spans(
            vec![
                (StripPart::Content, "milk".into()),
                (StripPart::Button(RowAction::Delete), " Delete ".into()),
            ],
            Style::default(),
            &theme,
        );
        assert_eq!(spans[1].style.bg, Some(theme.delete));
        assert_eq!(spans_width(&spans), 12);
    }
}
