use super::{Formatted, Tone};
use crate::grid::column::Column;
use crate::grid::context::GridContext;
use crate::grid::value::{CellValue, Row, field_value};

const CHECKMARK: &str = "✔";

/// `✔` for truthy values, empty otherwise.
pub fn checkmark(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    _column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    if value.is_null() {
        return None;
    }
    Some(if value.is_truthy() {
        Formatted::toned(CHECKMARK, Tone::Success)
    } else {
        Formatted::plain("")
    })
}

/// Boolean rendered through the `TRUE` / `FALSE` translation keys.
pub fn translate_boolean(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    _column: &Column,
    _item: &Row,
    grid: &GridContext,
) -> Option<Formatted> {
    if value.is_null() {
        return None;
    }
    let text = match value.as_bool() {
        Some(true) => grid.translate("TRUE").unwrap_or("True").to_string(),
        Some(false) => grid.translate("FALSE").unwrap_or("False").to_string(),
        None => value.to_string(),
    };
    Some(Formatted::plain(text))
}

/// The value used as a translation key, itself when untranslated.
pub fn translate(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    _column: &Column,
    _item: &Row,
    grid: &GridContext,
) -> Option<Formatted> {
    if value.is_null() {
        return None;
    }
    let key = value.to_string();
    Some(Formatted::plain(grid.translate(&key).map(str::to_string).unwrap_or(key)))
}

pub fn uppercase(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    _column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    (!value.is_null()).then(|| Formatted::plain(value.to_string().to_uppercase()))
}

pub fn lowercase(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    _column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    (!value.is_null()).then(|| Formatted::plain(value.to_string().to_lowercase()))
}

pub fn bold(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    _column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    (!value.is_null()).then(|| Formatted::toned(value.to_string(), Tone::Strong))
}

/// Reads `dataKey` (a dotted path is allowed) out of an object value. Without
/// a `dataKey` the column field itself may be a dotted path, which has already
/// been resolved into `value`.
pub fn complex_object(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    let resolved = match (value, column.data_key.as_deref()) {
        (CellValue::Object(map), Some(key)) => field_value(map, key),
        (other, _) => other,
    };
    (!resolved.is_null()).then(|| Formatted::plain(resolved.to_string()))
}

/// List items joined with `, `.
pub fn array_to_csv(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    _column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    (!value.is_null()).then(|| Formatted::plain(value.to_string()))
}
