use std::cmp::Ordering;

use super::missing_first;
use crate::grid::column::Column;
use crate::grid::error::SortError;
use crate::grid::sort_direction::SortDirection;
use crate::grid::value::CellValue;

/// `false` before `true`; values that are not boolean-like come first.
pub fn boolean_sort_comparer(
    a: &CellValue,
    b: &CellValue,
    direction: SortDirection,
    _column: &Column,
) -> Result<Ordering, SortError> {
    if direction.is_neutral() {
        return Ok(Ordering::Equal);
    }
    Ok(direction.apply(missing_first(a.as_bool(), b.as_bool(), |a, b| a.cmp(&b))))
}
