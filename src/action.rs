use crate::components::ComponentId;
use crate::widgets::shortcut::Shortcut;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    ClearScreen,
    Error(String),
    Help,
    Focus(ComponentId),
    Unfocus,
    Shortcuts(Vec<Shortcut>),
    SearchInputChanged(Option<String>),
    /// Visible rows out of total, after filtering
    ViewChanged { visible: usize, total: usize },
}
