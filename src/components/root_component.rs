use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridcells::grid::{Dataset, GridContext};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::action::Action;
use crate::components::footer_component::FooterComponent;
use crate::components::grid_component::GridComponent;
use crate::components::header_component::HeaderComponent;
use crate::components::help_component::HelpComponent;
use crate::components::search_component::SearchComponent;
use crate::components::{Component, ComponentId};

/// Lays out header, filter box, grid and footer, and routes key events to the
/// popup, the focused input or the grid, in that order.
pub struct RootComponent {
    header: HeaderComponent,
    search: SearchComponent,
    grid: GridComponent,
    footer: FooterComponent,
    help: HelpComponent,

    focused: Option<ComponentId>,
    popup: Option<ComponentId>,
    action_tx: Option<UnboundedSender<Action>>,
}

impl RootComponent {
    pub fn new(dataset: Dataset, grid: GridContext) -> Self {
        let grid = GridComponent::new(dataset, grid);
        Self {
            header: HeaderComponent::new(grid.title()),
            search: SearchComponent::default(),
            grid,
            footer: FooterComponent::default(),
            help: HelpComponent::default(),
            focused: None,
            popup: None,
            action_tx: None,
        }
    }

    fn children(&mut self) -> [&mut dyn Component; 5] {
        [&mut self.header, &mut self.search, &mut self.grid, &mut self.footer, &mut self.help]
    }

    fn child(&mut self, id: ComponentId) -> Option<&mut dyn Component> {
        self.children().into_iter().find(|c| c.id() == id)
    }

    fn send(&self, action: Action) -> Result<()> {
        if let Some(tx) = self.action_tx.as_ref() {
            tx.send(action)?;
        }
        Ok(())
    }
}

impl Component for RootComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Root
    }

    fn init(&mut self) -> Result<()> {
        for child in self.children() {
            child.init()?;
        }
        self.send(Action::Shortcuts(self.grid.shortcuts()))
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        for child in self.children() {
            child.register_action_handler(tx.clone())?;
        }
        self.action_tx = Some(tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // popup first, then the focused input; both release focus with `Action::Unfocus`
        if let Some(id) = self.popup.or(self.focused) {
            return match self.child(id) {
                Some(child) => child.handle_key_event(key),
                None => Ok(None),
            };
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Some(Action::Quit));
            }
            KeyCode::Char('z') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Some(Action::Suspend));
            }
            KeyCode::Char('q') => return Ok(Some(Action::Quit)),
            KeyCode::Char('h') => return Ok(Some(Action::Help)),
            _ => {}
        }
        debug!("Try handling key event: key={:?}", key);
        self.grid.handle_key_event(key)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Help => self.popup = Some(ComponentId::Help),
            Action::Focus(id) => self.focused = Some(id),
            Action::Unfocus => {
                if self.popup.take().is_none() {
                    self.focused = None;
                }
            }
            _ => {}
        }
        // propagate action to all components
        let mut follow_ups = vec![];
        for child in self.children() {
            if let Some(next) = child.update(action.clone())? {
                follow_ups.push(next);
            }
        }
        for next in follow_ups {
            self.send(next)?;
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let [header, search, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        self.header.draw(frame, header)?;
        self.search.draw(frame, search)?;
        self.grid.draw(frame, body)?;
        if self.popup == Some(ComponentId::Help) {
            self.help.draw(frame, body)?;
        }
        self.footer.draw(frame, footer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    fn root() -> RootComponent {
        RootComponent::new(Dataset::mock(10, 1), GridContext::new())
    }

    fn press(root: &mut RootComponent, code: KeyCode) -> Option<Action> {
        root.handle_key_event(KeyEvent::from(code)).unwrap()
    }

    #[test]
    fn test_routing() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut root = root();
        root.register_action_handler(tx).unwrap();

        assert_eq!(press(&mut root, KeyCode::Char('q')), Some(Action::Quit));

        let help = press(&mut root, KeyCode::Char('h')).unwrap();
        root.update(help).unwrap();
        assert_eq!(root.popup, Some(ComponentId::Help));
        // `q` closes the popup instead of quitting
        let unfocus = press(&mut root, KeyCode::Char('q')).unwrap();
        assert_eq!(unfocus, Action::Unfocus);
        root.update(unfocus).unwrap();
        assert_eq!(root.popup, None);

        let focus = press(&mut root, KeyCode::Char('f')).unwrap();
        root.update(focus).unwrap();
        assert_eq!(root.focused, Some(ComponentId::Search));
        // typed into the filter box
        assert_eq!(press(&mut root, KeyCode::Char('q')), None);
        let unfocus = press(&mut root, KeyCode::Enter).unwrap();
        root.update(unfocus).unwrap();
        assert_eq!(root.focused, None);
    }

    #[test]
    fn test_suspend() {
        let mut root = root();
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(root.handle_key_event(key).unwrap(), Some(Action::Suspend));
    }
}
