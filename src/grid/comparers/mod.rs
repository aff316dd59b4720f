//! Sort comparers: two cell values + direction + column -> ordering.
//!
//! Comparers are meant for a stable sort: ties return exactly
//! [`Ordering::Equal`] and a neutral direction makes every pair equal, so the
//! original order survives.

mod boolean;
mod date;
mod numeric;
mod object_string;
mod string;

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::Deserialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

pub use boolean::boolean_sort_comparer;
pub use date::date_sort_comparer;
pub use numeric::numeric_sort_comparer;
pub use object_string::object_string_sort_comparer;
pub use string::string_sort_comparer;

use crate::grid::column::Column;
use crate::grid::error::SortError;
use crate::grid::field_type::FieldType;
use crate::grid::sort_direction::SortDirection;
use crate::grid::value::CellValue;

pub type SortComparer =
    fn(&CellValue, &CellValue, SortDirection, &Column) -> Result<Ordering, SortError>;

/// Comparer names usable in column definitions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ComparerKind {
    String,
    Numeric,
    Boolean,
    Date,
    ObjectString,
}

impl ComparerKind {
    pub fn comparer(self) -> SortComparer {
        match self {
            ComparerKind::String => string_sort_comparer,
            ComparerKind::Numeric => numeric_sort_comparer,
            ComparerKind::Boolean => boolean_sort_comparer,
            ComparerKind::Date => date_sort_comparer,
            ComparerKind::ObjectString => object_string_sort_comparer,
        }
    }

    /// Default comparer for a column type.
    pub fn for_type(ty: Option<FieldType>) -> Self {
        match ty {
            Some(t) if t.is_numeric() => ComparerKind::Numeric,
            Some(t) if t.is_date() => ComparerKind::Date,
            Some(FieldType::Boolean) => ComparerKind::Boolean,
            Some(FieldType::Object) => ComparerKind::ObjectString,
            _ => ComparerKind::String,
        }
    }
}

/// The column's explicit comparer, or the default for its type.
pub fn for_column(column: &Column) -> SortComparer {
    column.sort_comparer.unwrap_or_else(|| ComparerKind::for_type(column.field_type)).comparer()
}

/// Name -> comparer lookup table covering every [`ComparerKind`].
pub fn registry() -> IndexMap<&'static str, SortComparer> {
    ComparerKind::iter().map(|kind| (kind.into(), kind.comparer())).collect()
}

/// Missing keys sort before present ones (ascending).
fn missing_first<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_type() {
        assert_eq!(ComparerKind::for_type(None), ComparerKind::String);
        assert_eq!(ComparerKind::for_type(Some(FieldType::Integer)), ComparerKind::Numeric);
        assert_eq!(ComparerKind::for_type(Some(FieldType::DateUsShort)), ComparerKind::Date);
        assert_eq!(ComparerKind::for_type(Some(FieldType::Boolean)), ComparerKind::Boolean);
        assert_eq!(ComparerKind::for_type(Some(FieldType::Object)), ComparerKind::ObjectString);
        assert_eq!(ComparerKind::for_type(Some(FieldType::Text)), ComparerKind::String);
    }

    #[test]
    fn test_explicit_comparer_wins() {
        let column = Column::new("n", "N").of_type(FieldType::Number).sort_comparer(ComparerKind::String);
        let cmp = for_column(&column);
        // "10" < "9" as text
        let ord = cmp(&10.0.into(), &9.0.into(), SortDirection::Asc, &column).unwrap();
        assert_eq!(ord, Ordering::Less);

        let numeric = Column::new("n", "N").of_type(FieldType::Number);
        let ord = for_column(&numeric)(&10.0.into(), &9.0.into(), SortDirection::Asc, &numeric).unwrap();
        assert_eq!(ord, Ordering::Greater);
    }

    #[test]
    fn test_registry() {
        let table = registry();
        assert_eq!(table.len(), 5);
        assert!(table.contains_key("objectString"));
    }

    #[test]
    fn test_missing_first() {
        assert_eq!(missing_first(None::<u8>, None, |a, b| a.cmp(&b)), Ordering::Equal);
        assert_eq!(missing_first(None, Some(1), |a: u8, b| a.cmp(&b)), Ordering::Less);
        assert_eq!(missing_first(Some(1), None, |a: u8, b| a.cmp(&b)), Ordering::Greater);
        assert_eq!(missing_first(Some(2), Some(1), |a: u8, b| a.cmp(&b)), Ordering::Greater);
    }
}
