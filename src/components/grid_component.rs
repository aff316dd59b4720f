use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use gridcells::grid::formatters::format_cell_toned;
use gridcells::grid::{Dataset, GridContext, SortDirection, Tone};
use ratatui::Frame;
use ratatui::layout::{Constraint, Margin, Rect};
use ratatui::prelude::{Color, Line, Modifier, Span, Style, Stylize};
use ratatui::widgets::{Block, BorderType, Cell, Row, Table, TableState};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::action::Action;
use crate::components::grid_store::{GridSort, GridStore};
use crate::components::{Component, ComponentId};
use crate::utils::symbols::{arrow, sort_marker};
use crate::utils::text_ui::{TOP_TITLE_LEFT, TOP_TITLE_RIGHT, truncate};
use crate::widgets::scrollable_navigator::ScrollableNavigator;
use crate::widgets::shortcut::{Fragment, Shortcut};

const DEFAULT_COL_WIDTH: u16 = 12;

pub struct GridComponent {
    store: Arc<GridStore>,
    filter_pattern: Option<String>,
    view_dirty: bool,

    /// Column the sort keys act on
    selected_col: usize,
    sort: Option<GridSort>,
    sort_error: Option<String>,

    navigator: ScrollableNavigator,
    table_state: TableState,

    action_tx: Option<UnboundedSender<Action>>,
}

impl GridComponent {
    pub fn new(dataset: Dataset, grid: GridContext) -> Self {
        let store = Arc::new(GridStore::new(dataset, grid));
        let selected_col = store.columns().iter().position(|c| c.sortable).unwrap_or(0);
        Self {
            store,
            filter_pattern: None,
            view_dirty: false,
            selected_col,
            sort: None,
            sort_error: None,
            navigator: ScrollableNavigator::new(1),
            table_state: TableState::default(),
            action_tx: None,
        }
    }

    pub fn title(&self) -> &str {
        self.store.title()
    }

    /// Move the column cursor to the next sortable column in `forward` direction.
    fn select_column(&mut self, forward: bool) {
        let columns = self.store.columns();
        let n = columns.len();
        for step in 1..=n {
            let idx = if forward { (self.selected_col + step) % n } else { (self.selected_col + n - step) % n };
            if columns[idx].sortable {
                self.selected_col = idx;
                return;
            }
        }
    }

    fn cycle_sort(&mut self) {
        let Some(column) = self.store.columns().get(self.selected_col).filter(|c| c.sortable) else {
            return;
        };
        let direction = match self.sort {
            Some(sort) if sort.col == self.selected_col => sort.direction.cycle(),
            _ => SortDirection::Asc,
        };
        debug!(column = %column.id, %direction, "sort changed");
        self.sort = Some(GridSort { col: self.selected_col, direction });
        self.view_dirty = true;
    }

    fn reverse_sort(&mut self) {
        if let Some(sort) = self.sort.as_mut()
            && !sort.direction.is_neutral()
        {
            sort.direction = sort.direction.reverse();
            self.view_dirty = true;
        }
    }

    fn recompute_view(&mut self) -> Result<()> {
        self.sort_error = self
            .store
            .compute_view(self.filter_pattern.as_deref(), self.sort)
            .err()
            .map(|e| e.to_string());
        self.view_dirty = false;
        self.navigator.reset();

        let (visible, total) = (self.store.with_view(|_, view| view.len()), self.store.total());
        if let Some(tx) = self.action_tx.as_ref() {
            tx.send(Action::ViewChanged { visible, total })?;
        }
        Ok(())
    }

    fn header_cell(&self, idx: usize) -> Cell<'static> {
        let column = &self.store.columns()[idx];
        let marker = match self.sort {
            Some(sort) if sort.col == idx => sort_marker(sort.direction),
            _ => "",
        };
        let mut style = Style::default().bold();
        if idx == self.selected_col {
            style = style.underlined().fg(Color::LightCyan);
        }
        Cell::from(Line::from(vec![
            Span::styled(column.title().to_string(), style),
            Span::styled(marker, Color::Yellow),
        ]))
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        // viewport = area.height - 2 (border) - 2 (header + margin)
        let viewport = area.height.saturating_sub(4) as usize;
        let columns = self.store.columns();
        let widths: Vec<u16> = columns.iter().map(|c| c.width.unwrap_or(DEFAULT_COL_WIDTH)).collect();

        let records: Vec<Vec<Option<(String, Tone)>>> = self.store.with_view(|rows, view| {
            self.navigator.length(view.len(), viewport);
            // NOTE: end_pos() depends on length()
            let visible = view.get(self.navigator.scroller.pos()..self.navigator.scroller.end_pos()).unwrap_or(&[]);
            visible
                .iter()
                .map(|&row_idx| {
                    columns
                        .iter()
                        .enumerate()
                        .map(|(cell, col)| {
                            format_cell_toned(row_idx, cell, col, &rows[row_idx], self.store.grid())
                                .map(|f| (f.text, f.tone))
                        })
                        .collect()
                })
                .collect()
        });

        *self.table_state.selected_mut() = self.navigator.focused_in_viewport();

        let mut title = vec![
            Span::raw(TOP_TITLE_LEFT),
            Span::raw(format!("{} (", self.store.title())),
            Span::styled(
                self.navigator.focused.map(|i| (i + 1).to_string()).unwrap_or("-".into()),
                Color::LightCyan,
            ),
            Span::raw("/"),
            Span::styled(self.navigator.scroller.content_length().to_string(), Color::Cyan),
            Span::raw(")"),
        ];
        if let Some(err) = &self.sort_error {
            title.push(Span::raw(" "));
            title.push(Span::styled(err.clone(), Color::Red));
        }
        title.push(Span::raw(TOP_TITLE_RIGHT));
        let block = Block::bordered().border_type(BorderType::Rounded).title(Line::from(title));

        let header = (0..columns.len())
            .map(|idx| self.header_cell(idx))
            .collect::<Row>()
            .height(1)
            .bottom_margin(1);
        let selected_row_style = Style::default().add_modifier(Modifier::REVERSED).fg(Color::Cyan);

        let rows: Vec<Row> = records
            .into_iter()
            .map(|cells| {
                Row::new(cells.into_iter().zip(&widths).map(|(cell, &width)| match cell {
                    Some((text, tone)) => Cell::from(truncate(&text, width as usize)).style(tone_style(tone)),
                    None => Cell::from(""),
                }))
            })
            .collect();
        let table = Table::new(rows, widths.iter().map(|&w| Constraint::Length(w)))
            .block(block)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(selected_row_style);

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Plain => Style::default(),
        Tone::Strong => Style::default().bold(),
        Tone::Success => Style::default().fg(Color::Green),
        Tone::Warning => Style::default().fg(Color::Yellow),
        Tone::Danger => Style::default().fg(Color::Red),
    }
}

impl Component for GridComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Grid
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut::new(vec![
                Fragment::hl(arrow::UP),
                Fragment::raw(" nav "),
                Fragment::hl(arrow::DOWN),
            ]),
            Shortcut::new(vec![
                Fragment::hl(arrow::LEFT),
                Fragment::raw(" column "),
                Fragment::hl(arrow::RIGHT),
            ]),
            Shortcut::new(vec![Fragment::hl("s"), Fragment::raw("ort")]),
            Shortcut::new(vec![Fragment::hl("r"), Fragment::raw("everse")]),
            Shortcut::new(vec![Fragment::hl("f"), Fragment::raw("ilter")]),
        ]
    }

    fn init(&mut self) -> Result<()> {
        self.recompute_view()
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.navigator.handle_key_event(key) {
            return Ok(None);
        }
        match key.code {
            KeyCode::Left => self.select_column(false),
            KeyCode::Right => self.select_column(true),
            KeyCode::Char('s') => self.cycle_sort(),
            KeyCode::Char('r') => self.reverse_sort(),
            KeyCode::Char('f') | KeyCode::Char('/') => return Ok(Some(Action::Focus(ComponentId::Search))),
            _ => (),
        };

        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick if self.view_dirty => {
                debug!("handle Action::Tick, recompute grid view");
                self.recompute_view()?;
            }
            Action::SearchInputChanged(pattern) => {
                debug!("handle Action::SearchInputChanged, got pattern={pattern:?}");
                self.filter_pattern = pattern;
                self.view_dirty = true;
            }
            _ => {}
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.render_table(frame, area);
        self.navigator.render(frame, area.inner(Margin::new(0, 1)));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gridcells::grid::value::row;
    use gridcells::grid::{CellValue, Column};
    use tokio::sync::mpsc;

    use super::*;

    fn component() -> GridComponent {
        let dataset = Dataset {
            title: Some("People".into()),
            columns: vec![
                Column::new("id", "#"),
                Column::new("name", "Name").sortable(true).filterable(true),
                Column::new("age", "Age").sortable(true),
            ],
            rows: vec![
                row([("id", CellValue::from(0i64)), ("name", "Bob".into()), ("age", 30i64.into())]),
                row([("id", CellValue::from(1i64)), ("name", "Ava".into()), ("age", 41i64.into())]),
            ],
        };
        GridComponent::new(dataset, GridContext::new())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_column_cursor_skips_unsortable() {
        let mut grid = component();
        assert_eq!(grid.selected_col, 1);
        grid.handle_key_event(key(KeyCode::Right)).unwrap();
        assert_eq!(grid.selected_col, 2);
        grid.handle_key_event(key(KeyCode::Right)).unwrap();
        assert_eq!(grid.selected_col, 1);
        grid.handle_key_event(key(KeyCode::Left)).unwrap();
        assert_eq!(grid.selected_col, 2);
    }

    #[test]
    fn test_sort_keys() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut grid = component();
        grid.register_action_handler(tx).unwrap();
        grid.init().unwrap();
        assert_eq!(rx.try_recv().unwrap(), Action::ViewChanged { visible: 2, total: 2 });

        grid.handle_key_event(key(KeyCode::Char('s'))).unwrap();
        assert_eq!(grid.sort, Some(GridSort { col: 1, direction: SortDirection::Asc }));
        grid.update(Action::Tick).unwrap();
        assert_eq!(grid.store.with_view(|_, v| v.to_vec()), vec![1, 0]);

        grid.handle_key_event(key(KeyCode::Char('r'))).unwrap();
        grid.update(Action::Tick).unwrap();
        assert_eq!(grid.store.with_view(|_, v| v.to_vec()), vec![0, 1]);

        grid.handle_key_event(key(KeyCode::Char('s'))).unwrap();
        assert_eq!(grid.sort.map(|s| s.direction), Some(SortDirection::Neutral));

        let action = grid.handle_key_event(key(KeyCode::Char('/'))).unwrap();
        assert_eq!(action, Some(Action::Focus(ComponentId::Search)));
    }

    #[test]
    fn test_filter() {
        let mut grid = component();
        grid.update(Action::SearchInputChanged(Some("ava".into()))).unwrap();
        grid.update(Action::Tick).unwrap();
        assert_eq!(grid.store.with_view(|_, v| v.to_vec()), vec![1]);
    }
}
