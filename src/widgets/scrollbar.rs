use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

/// Scroll position over `content_length` lines of which
/// `viewport_content_length` are visible. Positions are multiples of `step`.
#[derive(Debug)]
pub struct Scroller {
    step: usize,
    position: usize,
    content_length: usize,
    viewport_content_length: usize,

    state: ScrollbarState,
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Scroller {
    pub fn new(step: usize) -> Self {
        Self {
            step: step.max(1),
            position: 0,
            content_length: 0,
            viewport_content_length: 0,
            state: Default::default(),
        }
    }

    pub fn position(&mut self, position: usize) -> &mut Self {
        self.position = position;
        self.state = self.state.position(position);
        self
    }

    /// Update lengths, clamping the position to the new maximum.
    pub fn length(&mut self, content_length: usize, viewport_content_length: usize) -> &mut Self {
        self.content_length = content_length;
        self.viewport_content_length = viewport_content_length;
        self.state = self
            .state
            .content_length(self.max_pos())
            .viewport_content_length(viewport_content_length);
        if self.position > self.max_pos() {
            self.position(self.max_pos());
        }
        self
    }

    fn align_up(&self, value: usize) -> usize {
        value.div_ceil(self.step) * self.step
    }

    fn max_pos(&self) -> usize {
        self.align_up(self.content_length.saturating_sub(self.viewport_content_length))
    }

    pub fn first(&mut self) {
        self.position(0);
    }

    pub fn last(&mut self) {
        self.position(self.max_pos());
    }

    pub fn next(&mut self) {
        if self.content_length > self.viewport_content_length {
            self.position(self.position.saturating_add(self.step).min(self.max_pos()));
        }
    }

    pub fn prev(&mut self) {
        self.position(self.position.saturating_sub(self.step));
    }

    pub fn page_down(&mut self) {
        self.position(self.position.saturating_add(self.viewport_content_length).min(self.max_pos()));
    }

    pub fn page_up(&mut self) {
        self.position(self.position.saturating_sub(self.viewport_content_length));
    }

    pub fn pos(&self) -> usize {
        self.position
    }

    pub fn end_pos(&self) -> usize {
        self.position.saturating_add(self.viewport_content_length).min(self.content_length)
    }

    pub fn content_length(&self) -> usize {
        self.content_length
    }

    pub fn viewport_content_length(&self) -> usize {
        self.viewport_content_length
    }

    pub fn step_value(&self) -> usize {
        self.step
    }

    /// Scroll keys for read-only content.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('g') => self.first(),
            KeyCode::Char('G') => self.last(),
            KeyCode::Char('j') | KeyCode::Down => self.next(),
            KeyCode::Char('k') | KeyCode::Up => self.prev(),
            KeyCode::PageDown | KeyCode::Char(' ') => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            _ => return false,
        }
        true
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.content_length <= self.viewport_content_length {
            return;
        }
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None);
        frame.render_stateful_widget(scrollbar, area, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next() {
        let mut scroll = Scroller::new(2);
        scroll.length(13, 10);

        let expected = vec![(0, 10), (2, 12), (4, 13), (4, 13), (4, 13)];
        for pair in expected.into_iter() {
            assert_eq!((scroll.pos(), scroll.end_pos()), pair);
            scroll.next();
        }
    }

    #[test]
    fn test_scroller() {
        let mut scroll = Scroller::new(2);
        scroll.length(100, 10);
        assert_eq!((scroll.pos(), scroll.end_pos()), (0, 10));

        scroll.next();
        scroll.next();
        assert_eq!((scroll.pos(), scroll.end_pos()), (4, 14));

        scroll.prev();
        assert_eq!((scroll.pos(), scroll.end_pos()), (2, 12));

        scroll.first();
        scroll.prev();
        assert_eq!((scroll.pos(), scroll.end_pos()), (0, 10));

        scroll.last();
        assert_eq!((scroll.pos(), scroll.end_pos()), (90, 100));

        scroll.next();
        assert_eq!((scroll.pos(), scroll.end_pos()), (90, 100));
    }

    #[test]
    fn test_pages_and_shrink() {
        let mut scroll = Scroller::new(1);
        scroll.length(25, 10);
        scroll.page_down();
        scroll.page_down();
        assert_eq!((scroll.pos(), scroll.end_pos()), (15, 25));
        scroll.page_up();
        assert_eq!(scroll.pos(), 5);

        // filtering shrinks the content below the current position
        scroll.length(8, 10);
        assert_eq!((scroll.pos(), scroll.end_pos()), (0, 8));
    }
}
