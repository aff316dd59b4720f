use time::format_description::FormatItem;

use super::Formatted;
use crate::grid::column::Column;
use crate::grid::context::GridContext;
use crate::grid::dates;
use crate::grid::value::{CellValue, Row};

/// Shared body of the date formatters. Values that do not parse under the
/// column's source format are passed through as their plain text.
fn render_date(value: &CellValue, column: &Column, layout: &[FormatItem<'_>]) -> Option<Formatted> {
    if value.is_null() {
        return None;
    }
    let rendered = dates::to_date(value, column.field_type).and_then(|dt| dates::render(&dt, layout));
    Some(Formatted::plain(rendered.unwrap_or_else(|| value.to_string())))
}

/// `YYYY-MM-DD`
pub fn date_iso(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    render_date(value, column, dates::OUT_ISO)
}

/// `YYYY-MM-DD HH:MM:SS`
pub fn date_time_iso(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    render_date(value, column, dates::OUT_ISO_DATETIME)
}

/// `MM/DD/YYYY`
pub fn date_us(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    render_date(value, column, dates::OUT_US)
}

/// `MM/DD/YY`, time of day dropped.
pub fn date_us_short(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    render_date(value, column, dates::OUT_US_SHORT)
}

/// `DD/MM/YYYY`
pub fn date_euro(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    render_date(value, column, dates::OUT_EURO)
}
