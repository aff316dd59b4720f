use const_format::concatcp;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols::line::{TOP_LEFT, TOP_RIGHT};
use ratatui::text::{Line, Span};
use unicode_segmentation::UnicodeSegmentation;

pub const TOP_TITLE_LEFT: &str = concatcp!(TOP_RIGHT, " ");
pub const TOP_TITLE_RIGHT: &str = concatcp!(" ", TOP_LEFT);
pub const ELLIPSIS: &str = "…";

pub fn top_title_line<S: Into<Style>>(title: &'_ str, title_style: S) -> Line<'_> {
    Line::from(vec![
        Span::raw(TOP_TITLE_LEFT),
        Span::styled(title, title_style),
        Span::raw(TOP_TITLE_RIGHT),
    ])
}

/// Centered rect of `percent_x` x `percent_y` of `area`.
pub fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Cut `text` to at most `max` graphemes, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let mut graphemes = text.graphemes(true);
    let head: String = graphemes.by_ref().take(max).collect();
    if graphemes.next().is_none() {
        return head;
    }
    let mut cut: String = head.graphemes(true).take(max - 1).collect();
    cut.push_str(ELLIPSIS);
    cut
}
