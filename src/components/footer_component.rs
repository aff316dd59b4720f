use anyhow::Result;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};

use crate::action::Action;
use crate::components::{Component, ComponentId};
use crate::widgets::shortcut::{Fragment, Shortcut};

pub struct FooterComponent {
    shortcuts: Vec<Shortcut>,
}

fn default_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new(vec![Fragment::hl("h"), Fragment::raw("elp")]),
        Shortcut::new(vec![Fragment::hl("q"), Fragment::raw("uit")]),
    ]
}

impl Default for FooterComponent {
    fn default() -> Self {
        Self { shortcuts: default_shortcuts() }
    }
}

impl FooterComponent {
    fn shortcuts_line(&self) -> Line<'_> {
        let sep = Span::styled("  ", Style::default());
        let mut spans = vec![];
        for (i, shortcut) in self.shortcuts.iter().enumerate() {
            if i > 0 {
                spans.push(sep.clone());
            }
            spans.extend(
                shortcut.spans(None).into_iter().map(|s| if s.style.fg.is_none() { s.fg(Color::DarkGray) } else { s }),
            );
        }
        Line::from(spans)
    }
}

impl Component for FooterComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Footer
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::Shortcuts(shortcuts) = action {
            let mut sc = default_shortcuts();
            sc.extend(shortcuts);
            self.shortcuts = sc;
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(self.shortcuts_line(), area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_extend_defaults() {
        let mut footer = FooterComponent::default();
        footer.update(Action::Shortcuts(vec![Shortcut::key("s", "sort")])).unwrap();
        let line = footer.shortcuts_line();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "help  quit  s sort");
    }
}
