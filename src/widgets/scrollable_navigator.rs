use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::widgets::scrollbar::Scroller;

/// Row focus on top of a [`Scroller`]; the focused row is kept inside the
/// viewport.
#[derive(Debug, Default)]
pub struct ScrollableNavigator {
    pub focused: Option<usize>,
    pub scroller: Scroller,
}

impl ScrollableNavigator {
    pub fn new(scroll_step: usize) -> Self {
        Self { focused: None, scroller: Scroller::new(scroll_step) }
    }

    pub fn length(&mut self, content_length: usize, viewport_content_length: usize) -> &mut Self {
        self.scroller.length(content_length, viewport_content_length);
        if let Some(focused) = self.focused
            && focused >= content_length
        {
            self.focused = content_length.checked_sub(1);
        }
        self
    }

    /// Focus relative to the first visible row, for table state.
    pub fn focused_in_viewport(&self) -> Option<usize> {
        self.focused.map(|v| v.saturating_sub(self.scroller.pos()))
    }

    /// Drop the focus and scroll back to the top.
    pub fn reset(&mut self) {
        self.focused = None;
        self.scroller.first();
    }

    fn ensure_focusable(&mut self) -> bool {
        if self.scroller.content_length() == 0 {
            self.focused = None;
            false
        } else {
            true
        }
    }

    pub fn first(&mut self) {
        if !self.ensure_focusable() {
            return;
        }
        self.focused = Some(0);
        self.scroller.first();
    }

    pub fn last(&mut self) {
        if !self.ensure_focusable() {
            return;
        }
        self.focused = Some(self.scroller.content_length() - 1);
        self.scroller.last();
    }

    pub fn next(&mut self, step: usize) {
        if !self.ensure_focusable() {
            return;
        }
        match self.focused {
            None => self.focused = Some(self.scroller.pos()),
            Some(focused) => {
                let focused = focused.saturating_add(step).min(self.scroller.content_length() - 1);
                self.focused = Some(focused);
                while focused >= self.scroller.end_pos() && self.scroller.end_pos() < self.scroller.content_length() {
                    self.scroller.next();
                }
            }
        }
    }

    pub fn prev(&mut self, step: usize) {
        if !self.ensure_focusable() {
            return;
        }
        match self.focused {
            None => self.focused = Some(self.scroller.end_pos().saturating_sub(1)),
            Some(focused) => {
                let focused = focused.saturating_sub(step);
                self.focused = Some(focused);
                while focused < self.scroller.pos() {
                    self.scroller.prev();
                }
            }
        }
    }

    pub fn page_down(&mut self) {
        if !self.ensure_focusable() {
            return;
        }
        match self.focused {
            None => self.focused = Some(self.scroller.pos()),
            Some(focused) => {
                self.focused = Some(
                    focused
                        .saturating_add(self.scroller.viewport_content_length())
                        .min(self.scroller.content_length() - 1),
                );
                self.scroller.page_down();
            }
        }
    }

    pub fn page_up(&mut self) {
        if !self.ensure_focusable() {
            return;
        }
        match self.focused {
            None => self.focused = Some(self.scroller.end_pos().saturating_sub(1)),
            Some(focused) => {
                self.focused = Some(focused.saturating_sub(self.scroller.viewport_content_length()));
                self.scroller.page_up();
            }
        }
    }

    /// Vertical navigation keys; `true` when the key was consumed.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('g') => self.first(),
            KeyCode::Char('G') => self.last(),
            KeyCode::Char('j') | KeyCode::Down => self.next(self.scroller.step_value()),
            KeyCode::Char('k') | KeyCode::Up => self.prev(self.scroller.step_value()),
            KeyCode::PageDown | KeyCode::Char(' ') => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Esc if self.focused.is_some() => self.focused = None,
            _ => return false,
        }

        true
    }

    #[inline]
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.scroller.render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(navigator: &ScrollableNavigator) -> (usize, usize) {
        (navigator.scroller.pos(), navigator.scroller.end_pos())
    }

    #[test]
    fn test_empty() {
        let mut navigator = ScrollableNavigator::new(2);
        navigator.last();
        navigator.page_up();
        assert_eq!(window(&navigator), (0, 0));
        assert_eq!(navigator.focused, None);
    }

    #[test]
    fn test_page_up() {
        let mut navigator = ScrollableNavigator::new(2);
        navigator.length(20, 4);
        navigator.last();
        assert_eq!(window(&navigator), (16, 20));
        assert_eq!(navigator.focused, Some(19));

        navigator.focused = None;
        navigator.page_up();
        assert_eq!(navigator.focused, Some(19));

        navigator.page_up();
        assert_eq!(window(&navigator), (12, 16));
        assert_eq!(navigator.focused, Some(15));

        navigator.prev(1);
        navigator.page_up();
        assert_eq!(window(&navigator), (8, 12));
        assert_eq!(navigator.focused, Some(10));
        assert_eq!(navigator.focused_in_viewport(), Some(2));
    }

    #[test]
    fn test_page_down() {
        let mut navigator = ScrollableNavigator::new(2);
        navigator.length(20, 4);

        navigator.page_down();
        assert_eq!(navigator.focused, Some(0));

        navigator.page_down();
        assert_eq!(window(&navigator), (4, 8));
        assert_eq!(navigator.focused, Some(4));

        navigator.next(1);
        navigator.page_down();
        assert_eq!(window(&navigator), (8, 12));
        assert_eq!(navigator.focused, Some(9));
    }

    #[test]
    fn test_next_prev() {
        let mut navigator = ScrollableNavigator::new(1);
        navigator.length(10, 3);

        navigator.next(1);
        assert_eq!(navigator.focused, Some(0));
        navigator.next(1);
        navigator.next(1);
        navigator.next(1);
        assert_eq!(navigator.focused, Some(3));
        assert_eq!(window(&navigator), (1, 4));

        navigator.prev(1);
        navigator.prev(1);
        assert_eq!(navigator.focused, Some(1));
        assert_eq!(window(&navigator), (1, 4));
        navigator.prev(1);
        assert_eq!(window(&navigator), (0, 3));
    }

    #[test]
    fn test_shrinking_view_clamps_focus() {
        let mut navigator = ScrollableNavigator::new(1);
        navigator.length(50, 10);
        navigator.last();
        navigator.length(5, 10);
        assert_eq!(navigator.focused, Some(4));
        assert_eq!(window(&navigator), (0, 5));

        navigator.length(0, 10);
        assert_eq!(navigator.focused, None);

        navigator.length(5, 10);
        navigator.first();
        navigator.reset();
        assert_eq!(navigator.focused, None);
    }
}
