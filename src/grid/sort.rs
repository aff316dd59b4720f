//! Stable sorting of rows and values through the column comparers.

use std::cmp::Ordering;

use tracing::debug;

use crate::grid::column::Column;
use crate::grid::error::SortError;
use crate::grid::sort_direction::SortDirection;
use crate::grid::value::{CellValue, Row, field_value};

/// One sort criterion. Earlier specs take precedence.
#[derive(Debug, Clone, Copy)]
pub struct SortSpec<'a> {
    pub column: &'a Column,
    pub direction: SortDirection,
}

impl<'a> SortSpec<'a> {
    pub fn new(column: &'a Column, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

/// Stable ordering of `candidates` (indices into `rows`) under `sorts`.
///
/// Indices past the end of `rows` are dropped. Neutral criteria leave the
/// order alone but still report configuration errors, like [`sort_values`].
/// The first comparer error aborts the sort; `rows` is never touched.
pub fn sorted_order(
    rows: &[Row],
    candidates: impl IntoIterator<Item = usize>,
    sorts: &[SortSpec<'_>],
) -> Result<Vec<usize>, SortError> {
    let mut order: Vec<usize> = candidates.into_iter().filter(|&i| i < rows.len()).collect();
    for spec in sorts.iter().filter(|s| s.direction.is_neutral()) {
        let cmp = spec.column.comparer_fn();
        let key = spec.column.field_key();
        for &i in &order {
            let value = field_value(&rows[i], key);
            cmp(value, value, spec.direction, spec.column)?;
        }
    }
    let active: Vec<_> = sorts
        .iter()
        .filter(|s| !s.direction.is_neutral())
        .map(|s| (s, s.column.comparer_fn()))
        .collect();
    if active.is_empty() {
        return Ok(order);
    }

    let mut failure: Option<SortError> = None;
    order.sort_by(|&a, &b| {
        if failure.is_some() {
            return Ordering::Equal;
        }
        for (spec, cmp) in &active {
            let key = spec.column.field_key();
            let va = field_value(&rows[a], key);
            let vb = field_value(&rows[b], key);
            match cmp(va, vb, spec.direction, spec.column) {
                Ok(Ordering::Equal) => continue,
                Ok(ord) => return ord,
                Err(e) => {
                    failure = Some(e);
                    return Ordering::Equal;
                }
            }
        }
        Ordering::Equal
    });

    match failure {
        Some(e) => Err(e),
        None => {
            debug!("sorted {} rows on {} column(s)", order.len(), active.len());
            Ok(order)
        }
    }
}

/// Sort `rows` in place. On error the rows keep their previous order.
pub fn sort_rows(rows: &mut Vec<Row>, sorts: &[SortSpec<'_>]) -> Result<(), SortError> {
    let order = sorted_order(rows, 0..rows.len(), sorts)?;
    let mut slots: Vec<Option<Row>> = rows.drain(..).map(Some).collect();
    rows.extend(order.into_iter().filter_map(|i| slots[i].take()));
    Ok(())
}

/// Stable sort of bare values with the column's comparer. Configuration
/// errors surface even for a neutral direction.
pub fn sort_values(
    values: &mut [CellValue],
    direction: SortDirection,
    column: &Column,
) -> Result<(), SortError> {
    let cmp = column.comparer_fn();
    let mut failure = None;
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| match cmp(a, b, direction, column) {
        Ok(ord) => ord,
        Err(e) => {
            failure.get_or_insert(e);
            Ordering::Equal
        }
    });
    if let Some(e) = failure {
        return Err(e);
    }
    values.clone_from_slice(&sorted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::grid::comparers::ComparerKind;
    use crate::grid::field_type::FieldType;
    use crate::grid::value::row;

    fn rows() -> Vec<Row> {
        vec![
            row([("id", CellValue::from(0i64)), ("team", "b".into()), ("score", 3i64.into())]),
            row([("id", CellValue::from(1i64)), ("team", "a".into()), ("score", 5i64.into())]),
            row([("id", CellValue::from(2i64)), ("team", "b".into()), ("score", 1i64.into())]),
            row([("id", CellValue::from(3i64)), ("team", "a".into()), ("score", 5i64.into())]),
        ]
    }

    #[test]
    fn test_multi_column() {
        let team = Column::new("team", "Team");
        let score = Column::new("score", "Score").of_type(FieldType::Integer);
        let sorts = [SortSpec::new(&team, SortDirection::Asc), SortSpec::new(&score, SortDirection::Desc)];
        let order = sorted_order(&rows(), 0..4, &sorts).unwrap();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_neutral_and_subset() {
        let team = Column::new("team", "Team");
        let neutral = [SortSpec::new(&team, SortDirection::Neutral)];
        assert_eq!(sorted_order(&rows(), [3, 1, 2], &neutral).unwrap(), vec![3, 1, 2]);

        let asc = [SortSpec::new(&team, SortDirection::Asc)];
        assert_eq!(sorted_order(&rows(), [2, 3, 0], &asc).unwrap(), vec![3, 2, 0]);
    }

    #[test]
    fn test_out_of_range_candidates_are_dropped() {
        let team = Column::new("team", "Team");
        let asc = [SortSpec::new(&team, SortDirection::Asc)];
        assert_eq!(sorted_order(&rows(), [9, 1, 0, 4], &asc).unwrap(), vec![1, 0]);
        assert_eq!(sorted_order(&rows(), [7, 2], &[]).unwrap(), vec![2]);
    }

    #[test]
    fn test_neutral_still_reports_missing_data_key() {
        let owner = Column::new("owner", "Owner").sort_comparer(ComparerKind::ObjectString);
        let data = vec![
            row([("owner", CellValue::Object(row([("lastName", "Z")])))]),
            row([("owner", CellValue::Object(row([("lastName", "A")])))]),
        ];
        let neutral = [SortSpec::new(&owner, SortDirection::Neutral)];
        let err = sorted_order(&data, 0..2, &neutral).unwrap_err();
        assert_eq!(err, SortError::MissingDataKey { column: "owner".into() });

        let keyed = Column::new("owner", "Owner").sort_comparer(ComparerKind::ObjectString).data_key("lastName");
        let neutral = [SortSpec::new(&keyed, SortDirection::Neutral)];
        assert_eq!(sorted_order(&data, 0..2, &neutral).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_sort_rows() {
        let score = Column::new("score", "Score").of_type(FieldType::Number);
        let mut data = rows();
        sort_rows(&mut data, &[SortSpec::new(&score, SortDirection::Asc)]).unwrap();
        let ids: Vec<String> = data.iter().map(|r| r["id"].to_string()).collect();
        assert_eq!(ids, vec!["2", "0", "1", "3"]);
    }

    #[test]
    fn test_error_leaves_rows_untouched() {
        let owner = Column::new("owner", "Owner").sort_comparer(ComparerKind::ObjectString);
        let mut data = vec![
            row([("owner", CellValue::Object(row([("lastName", "Z")])))]),
            row([("owner", CellValue::Object(row([("lastName", "A")])))]),
        ];
        let before = data.clone();
        let err = sort_rows(&mut data, &[SortSpec::new(&owner, SortDirection::Asc)]).unwrap_err();
        assert_eq!(err, SortError::MissingDataKey { column: "owner".into() });
        assert_eq!(data, before);
    }

    #[test]
    fn test_sort_values() {
        let column = Column::new("name", "Name").sort_comparer(ComparerKind::ObjectString).data_key("n");
        let mut values: Vec<CellValue> = vec!["b".into(), CellValue::Object(row([("n", "a")])), "c".into()];
        sort_values(&mut values, SortDirection::Desc, &column).unwrap();
        assert_eq!(values[0], CellValue::from("c"));
        assert_eq!(values[2], CellValue::Object(row([("n", "a")])));

        let strict = Column::new("name", "Name").sort_comparer(ComparerKind::ObjectString);
        let mut values: Vec<CellValue> = vec![CellValue::Object(row([("n", "a")])), "b".into()];
        assert!(sort_values(&mut values, SortDirection::Neutral, &strict).is_err());
    }
}
