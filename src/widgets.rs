pub mod scrollable_navigator;
pub mod scrollbar;
pub mod shortcut;
