use std::cmp::Ordering;

use serde::Deserialize;
use strum::{Display, EnumString, IntoStaticStr};

/// Tri-state sort direction. Numerically: positive is ascending, negative is
/// descending, zero (or absent) means no reordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
    #[default]
    Neutral,
}

impl SortDirection {
    pub fn from_number(n: i32) -> Self {
        match n.signum() {
            1 => SortDirection::Asc,
            -1 => SortDirection::Desc,
            _ => SortDirection::Neutral,
        }
    }

    pub fn as_number(self) -> i32 {
        match self {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
            SortDirection::Neutral => 0,
        }
    }

    #[inline]
    pub fn is_neutral(self) -> bool {
        self == SortDirection::Neutral
    }

    /// Orient an ascending ordering for this direction.
    #[inline]
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
            SortDirection::Neutral => Ordering::Equal,
        }
    }

    /// Asc -> Desc -> Neutral -> Asc
    pub fn cycle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Neutral,
            SortDirection::Neutral => SortDirection::Asc,
        }
    }

    /// Swap Asc and Desc; Neutral stays neutral.
    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
            SortDirection::Neutral => SortDirection::Neutral,
        }
    }
}

impl From<i32> for SortDirection {
    fn from(value: i32) -> Self {
        Self::from_number(value)
    }
}

impl From<Option<i32>> for SortDirection {
    fn from(value: Option<i32>) -> Self {
        value.map_or(SortDirection::Neutral, Self::from_number)
    }
}
