use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridcells::grid::formatters::FormatterKind;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use strum::IntoEnumIterator;

use super::{Component, ComponentId};
use crate::action::Action;
use crate::config::get_config_path;
use crate::utils::text_ui::{popup_area, top_title_line};
use crate::widgets::scrollbar::Scroller;

#[derive(Debug, Default)]
pub struct HelpComponent {
    scroller: Scroller,
}

enum HelpRow<'a> {
    Empty,
    Title(Line<'a>),
    Entry { left: Span<'a>, right: Span<'a> },
}

impl<'a> HelpRow<'a> {
    fn key_title(s: impl Into<Span<'a>>) -> Self {
        Self::Title(Line::from(vec!["--- ".into(), s.into().italic().bold(), " ---".into()]))
    }

    fn entry(left: impl Into<Span<'a>>, right: impl Into<Span<'a>>) -> Self {
        Self::Entry { left: left.into(), right: right.into() }
    }
}

impl HelpComponent {
    fn rows<'a>() -> Vec<HelpRow<'a>> {
        let config = get_config_path()
            .map(|p| format!("'{}'", p.display()))
            .unwrap_or_else(|_| "-".to_string());
        let formatters: Vec<&'static str> = FormatterKind::iter().map(Into::into).collect();

        let mut rows = vec![
            HelpRow::Empty,
            HelpRow::entry(Span::raw("Default configuration").bold(), config),
            HelpRow::entry(Span::raw("Version").bold(), env!("CARGO_PKG_VERSION")),
            HelpRow::Empty,
            HelpRow::entry(Span::raw("Key").bold(), Span::raw("Description").bold()),
            HelpRow::key_title("common"),
            HelpRow::entry("h", "Toggle help"),
            HelpRow::entry("q / Ctrl+c", "Quits program"),
            HelpRow::entry("Ctrl+z", "Suspend"),
            HelpRow::entry("k / Up, j / Down", "navigation"),
            HelpRow::entry("g, G", "go to first, last"),
            HelpRow::entry("PageUp, Space / PageDown", "page up, down"),
            HelpRow::entry("Esc", "clear focus / close"),
            HelpRow::Empty,
            HelpRow::key_title("grid"),
            HelpRow::entry("Left, Right", "select sort column"),
            HelpRow::entry("s", "sort: ascending, descending, none"),
            HelpRow::entry("r", "reverse sort direction"),
            HelpRow::entry("f, /", "filter rows (fuzzy)"),
            HelpRow::Empty,
            HelpRow::key_title("filter box"),
            HelpRow::entry("Enter, Esc", "apply and leave"),
            HelpRow::entry("Left, Right, Ctrl+Left, Ctrl+Right", "move cursor"),
            HelpRow::entry("Back, Ctrl+w, Del, Ctrl+Del", "delete"),
            HelpRow::entry("Ctrl+u", "clear"),
            HelpRow::entry("Home, End", "jump to line start, end"),
            HelpRow::Empty,
            HelpRow::key_title("formatters"),
        ];
        rows.extend(formatters.chunks(3).map(|names| HelpRow::entry("", names.join(", "))));
        rows.push(HelpRow::Empty);
        rows
    }

    fn lines<'a>(gap: u16, center: u16) -> Vec<Line<'a>> {
        Self::rows()
            .into_iter()
            .map(|row| match row {
                HelpRow::Empty => Line::raw(""),
                HelpRow::Title(title) => {
                    let pad_left = center.saturating_sub(title.width() as u16 / 2);
                    let mut spans = vec![" ".repeat(pad_left as usize).into()];
                    spans.extend(title.spans);
                    Line::from(spans)
                }
                HelpRow::Entry { left, right } => {
                    // right-align the key column on `center`
                    let pad_left = center.saturating_sub(left.width() as u16).saturating_sub(gap / 2);
                    Line::from(vec![
                        " ".repeat(pad_left as usize).into(),
                        left,
                        " ".repeat(gap as usize).into(),
                        right,
                    ])
                }
            })
            .collect()
    }
}

impl Component for HelpComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Help
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.scroller.handle_key_event(key) {
            return Ok(None);
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Some(Action::Quit));
            }
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('h') => {
                return Ok(Some(Action::Unfocus));
            }
            _ => (),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let area = popup_area(area, 80, 85);
        frame.render_widget(Clear, area);

        let border = Block::bordered().border_type(BorderType::Rounded).title(top_title_line("help", Color::LightCyan));
        let inner = border.inner(area);
        frame.render_widget(border, area);

        let gap = 4;
        let center_x = (inner.width as f32 * 0.4) as u16;
        let lines = Self::lines(gap, center_x);

        self.scroller.length(lines.len(), inner.height as usize);
        let offset = (self.scroller.pos() as u16, 0u16);
        frame.render_widget(Paragraph::new(lines).scroll(offset), inner);

        self.scroller.render(frame, area);

        Ok(())
    }
}
