use anyhow::Result;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::{Frame, symbols};

use crate::action::Action;
use crate::components::{Component, ComponentId};

pub struct HeaderComponent {
    title: String,
    visible: usize,
    total: usize,
}

impl HeaderComponent {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), visible: 0, total: 0 }
    }

    fn title_line(&self) -> Line<'_> {
        let mut spans = vec![Span::raw(self.title.as_str()).bold().fg(Color::LightCyan)];
        if self.visible != self.total {
            spans.push(Span::styled(
                format!("  {} of {} rows", self.visible, self.total),
                Style::default().fg(Color::Yellow),
            ));
        } else {
            spans.push(Span::styled(format!("  {} rows", self.total), Style::default().fg(Color::DarkGray)));
        }
        Line::from(spans)
    }

    fn version_line(&self) -> Line<'_> {
        Line::from(vec![
            Span::styled(format!("[ {} {} ", env!("CARGO_PKG_NAME"), symbols::DOT), Style::default().fg(Color::Blue)),
            Span::styled(format!("{} ", env!("CARGO_PKG_VERSION")), Style::default().fg(Color::LightCyan)),
            Span::styled("]", Style::default().fg(Color::Blue)),
        ])
        .alignment(Alignment::Right)
    }
}

impl Component for HeaderComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Header
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::ViewChanged { visible, total } = action {
            self.visible = visible;
            self.total = total;
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        frame.render_widget(self.title_line(), chunks[0]);
        frame.render_widget(self.version_line(), chunks[1]);

        Ok(())
    }
}
