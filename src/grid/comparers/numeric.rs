use std::cmp::Ordering;

use super::missing_first;
use crate::grid::column::Column;
use crate::grid::error::SortError;
use crate::grid::sort_direction::SortDirection;
use crate::grid::value::CellValue;

/// Numbers and numeric text; null, blank and non-numeric values sort first
/// when ascending.
pub fn numeric_sort_comparer(
    a: &CellValue,
    b: &CellValue,
    direction: SortDirection,
    _column: &Column,
) -> Result<Ordering, SortError> {
    if direction.is_neutral() {
        return Ok(Ordering::Equal);
    }
    let ord = missing_first(a.as_f64(), b.as_f64(), |a, b| a.total_cmp(&b));
    Ok(direction.apply(ord))
}
