use std::borrow::Cow;
use std::cmp::Ordering;

use crate::grid::collate;
use crate::grid::column::Column;
use crate::grid::error::SortError;
use crate::grid::sort_direction::SortDirection;
use crate::grid::value::{CellValue, field_value};

/// Orders values that are either plain strings or objects holding the
/// comparable string under the column's `dataKey`.
///
/// An object operand on a column without `dataKey` is a configuration error
/// and is reported even when the direction is neutral.
pub fn object_string_sort_comparer(
    a: &CellValue,
    b: &CellValue,
    direction: SortDirection,
    column: &Column,
) -> Result<Ordering, SortError> {
    let key = column.data_key.as_deref();
    let is_object = |v: &CellValue| matches!(v, CellValue::Object(_));
    if key.is_none() && (is_object(a) || is_object(b)) {
        return Err(SortError::MissingDataKey { column: column.id.clone() });
    }
    if direction.is_neutral() {
        return Ok(Ordering::Equal);
    }

    let a = comparable(a, key);
    let b = comparable(b, key);
    Ok(direction.apply(collate::compare(&a, &b)))
}

fn comparable<'a>(value: &'a CellValue, key: Option<&str>) -> Cow<'a, str> {
    let value = match (value, key) {
        (CellValue::Object(map), Some(key)) => field_value(map, key),
        (other, _) => other,
    };
    match value {
        CellValue::Null => Cow::Borrowed(""),
        CellValue::Text(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::grid::value::row;

    fn person(first: &str, last: &str) -> CellValue {
        CellValue::Object(row([("firstName", first), ("lastName", last)]))
    }

    fn people() -> Vec<CellValue> {
        vec![
            person("John", "Z"),
            person("Jane", "Doe"),
            person("Ava", "Smith"),
            person("", "Blank"),
            person("Bob", "Marley"),
            person("John", "Doe"),
        ]
    }

    fn sorted(
        mut values: Vec<CellValue>,
        direction: SortDirection,
        column: &Column,
    ) -> Result<Vec<CellValue>, SortError> {
        let mut err = None;
        values.sort_by(|a, b| {
            object_string_sort_comparer(a, b, direction, column).unwrap_or_else(|e| {
                err.get_or_insert(e);
                Ordering::Equal
            })
        });
        err.map_or(Ok(values), Err)
    }

    fn first_names(values: &[CellValue]) -> Vec<String> {
        values
            .iter()
            .map(|v| match v {
                CellValue::Object(map) => format!("{} {}", map["firstName"], map["lastName"]),
                other => other.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_neutral_direction_keeps_order() {
        let column = Column::new("user", "User").data_key("firstName");
        let out = sorted(people(), SortDirection::Neutral, &column).unwrap();
        assert_eq!(out, people());
    }

    #[test]
    fn test_ascending_is_stable() {
        let column = Column::new("user", "User").data_key("firstName");
        let out = sorted(people(), SortDirection::Asc, &column).unwrap();
        assert_eq!(
            first_names(&out),
            vec![" Blank", "Ava Smith", "Bob Marley", "Jane Doe", "John Z", "John Doe"]
        );
    }

    #[test]
    fn test_descending_keeps_ties_in_original_order() {
        let column = Column::new("user", "User").data_key("firstName");
        let out = sorted(people(), SortDirection::Desc, &column).unwrap();
        assert_eq!(
            first_names(&out),
            vec!["John Z", "John Doe", "Jane Doe", "Bob Marley", "Ava Smith", " Blank"]
        );
    }

    #[test]
    fn test_plain_strings_interleave_with_objects() {
        let column = Column::new("user", "User").data_key("firstName");
        let values = vec![person("frank", "F"), "e".into(), person("bob", "B"), "a".into()];
        let out = sorted(values, SortDirection::Asc, &column).unwrap();
        assert_eq!(first_names(&out), vec!["a", "bob B", "e", "frank F"]);
    }

    #[test]
    fn test_missing_or_null_sub_field_is_empty() {
        let column = Column::new("user", "User").data_key("nickname");
        let with_null = CellValue::Object(row([("nickname", CellValue::Null)]));
        let without = CellValue::Object(row([("firstName", "x")]));
        let ord = object_string_sort_comparer(&with_null, &without, SortDirection::Asc, &column);
        assert_eq!(ord, Ok(Ordering::Equal));
        let ord = object_string_sort_comparer(&"a".into(), &without, SortDirection::Asc, &column);
        assert_eq!(ord, Ok(Ordering::Greater));
    }

    #[test]
    fn test_plain_strings_need_no_data_key() {
        let column = Column::new("name", "Name");
        let ord = object_string_sort_comparer(&"b".into(), &"a".into(), SortDirection::Asc, &column);
        assert_eq!(ord, Ok(Ordering::Greater));
    }

    #[test]
    fn test_object_without_data_key_is_an_error() {
        let column = Column::new("user", "User");
        let err = sorted(people(), SortDirection::Asc, &column).unwrap_err();
        assert_eq!(err, SortError::MissingDataKey { column: "user".into() });
        assert!(err.to_string().contains("requires a dataKey"));

        let neutral = object_string_sort_comparer(&person("a", "b"), &"x".into(), SortDirection::Neutral, &column);
        assert!(neutral.is_err());
    }
}
