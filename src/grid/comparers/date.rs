use std::cmp::Ordering;

use super::missing_first;
use crate::grid::column::Column;
use crate::grid::dates;
use crate::grid::error::SortError;
use crate::grid::sort_direction::SortDirection;
use crate::grid::value::CellValue;

/// Chronological order. Text is parsed with the column's date type;
/// unparseable values sort first when ascending.
pub fn date_sort_comparer(
    a: &CellValue,
    b: &CellValue,
    direction: SortDirection,
    column: &Column,
) -> Result<Ordering, SortError> {
    if direction.is_neutral() {
        return Ok(Ordering::Equal);
    }
    let date = |v: &CellValue| dates::to_date(v, column.field_type);
    Ok(direction.apply(missing_first(date(a), date(b), |a, b| a.cmp(&b))))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::grid::field_type::FieldType;

    #[test]
    fn test_us_dates() {
        let column = Column::new("start", "Start").of_type(FieldType::DateUs);
        let mut values: Vec<CellValue> = vec![
            "12/25/2020".into(),
            "TBD".into(),
            "1/2/2021".into(),
            CellValue::Date(datetime!(2020-12-25 08:00)),
        ];
        values.sort_by(|a, b| date_sort_comparer(a, b, SortDirection::Asc, &column).unwrap());
        assert_eq!(
            values,
            vec![
                "TBD".into(),
                "12/25/2020".into(),
                CellValue::Date(datetime!(2020-12-25 08:00)),
                "1/2/2021".into(),
            ]
        );
    }

    #[test]
    fn test_iso_text_and_native_dates_interleave() {
        let column = Column::new("finish", "Finish");
        let ord = date_sort_comparer(
            &"2019-05-01".into(),
            &CellValue::Date(datetime!(2019-04-30 23:59)),
            SortDirection::Desc,
            &column,
        );
        assert_eq!(ord, Ok(Ordering::Less));
    }
}
