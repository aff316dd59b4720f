pub mod row_filter;
pub mod symbols;
pub mod text_ui;
