use std::cmp::Ordering;

use super::missing_first;
use crate::grid::collate;
use crate::grid::column::Column;
use crate::grid::error::SortError;
use crate::grid::sort_direction::SortDirection;
use crate::grid::value::CellValue;

/// Collation order of the values' text; nulls first when ascending.
pub fn string_sort_comparer(
    a: &CellValue,
    b: &CellValue,
    direction: SortDirection,
    _column: &Column,
) -> Result<Ordering, SortError> {
    if direction.is_neutral() {
        return Ok(Ordering::Equal);
    }
    let text = |v: &CellValue| (!v.is_null()).then(|| v.to_string());
    let ord = missing_first(text(a), text(b), |a, b| collate::compare(&a, &b));
    Ok(direction.apply(ord))
}
