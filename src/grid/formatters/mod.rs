//! Value formatters: raw cell value + column context -> display representation.
//!
//! Every formatter is a plain function with the [`Formatter`] signature and can
//! be imported on its own. [`FormatterKind`] names them for column definitions
//! and [`registry`] builds an optional name -> function table.

mod date;
mod number;
mod text;

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Deserialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

pub use date::{date_euro, date_iso, date_time_iso, date_us, date_us_short};
pub use number::{decimal, dollar, percent, percent_complete, percent_complete_bar};
pub use text::{
    array_to_csv, bold, checkmark, complex_object, lowercase, translate, translate_boolean,
    uppercase,
};

use crate::grid::column::Column;
use crate::grid::context::GridContext;
use crate::grid::value::{CellValue, Row, field_value};

/// `(row index, cell index, raw value, column, row record, grid) -> display value`.
/// `None` means there is nothing to display.
pub type Formatter =
    fn(usize, usize, &CellValue, &Column, &Row, &GridContext) -> Option<Formatted>;

/// Styling hint attached to formatted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Strong,
    Success,
    Warning,
    Danger,
}

/// Display representation of one cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Formatted {
    pub text: String,
    pub tone: Tone,
}

impl Formatted {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Plain }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self { text: text.into(), tone }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Formatter names usable in column definitions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FormatterKind {
    DateIso,
    DateTimeIso,
    DateUs,
    DateUsShort,
    DateEuro,
    Decimal,
    Dollar,
    Percent,
    PercentComplete,
    PercentCompleteBar,
    Checkmark,
    TranslateBoolean,
    Translate,
    Uppercase,
    Lowercase,
    Bold,
    ComplexObject,
    ArrayToCsv,
}

impl FormatterKind {
    pub fn formatter(self) -> Formatter {
        use FormatterKind::*;
        match self {
            DateIso => date_iso,
            DateTimeIso => date_time_iso,
            DateUs => date_us,
            DateUsShort => date_us_short,
            DateEuro => date_euro,
            Decimal => decimal,
            Dollar => dollar,
            Percent => percent,
            PercentComplete => percent_complete,
            PercentCompleteBar => percent_complete_bar,
            Checkmark => checkmark,
            TranslateBoolean => translate_boolean,
            Translate => translate,
            Uppercase => uppercase,
            Lowercase => lowercase,
            Bold => bold,
            ComplexObject => complex_object,
            ArrayToCsv => array_to_csv,
        }
    }
}

/// Name -> formatter lookup table covering every [`FormatterKind`].
pub fn registry() -> IndexMap<&'static str, Formatter> {
    FormatterKind::iter().map(|kind| (kind.into(), kind.formatter())).collect()
}

/// Extract the column's value from `item` and render it with the column's
/// formatter, or the value's plain text when the column has none.
pub fn format_cell<'a>(
    row: usize,
    cell: usize,
    column: &Column,
    item: &'a Row,
    grid: &GridContext,
) -> Cow<'a, str> {
    let value = field_value(item, column.field_key());
    match column.formatter_fn() {
        Some(f) => f(row, cell, value, column, item, grid).map_or(Cow::Borrowed(""), |v| Cow::Owned(v.text)),
        None => match value {
            CellValue::Text(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        },
    }
}

/// Like [`format_cell`] but keeps the tone.
pub fn format_cell_toned(
    row: usize,
    cell: usize,
    column: &Column,
    item: &Row,
    grid: &GridContext,
) -> Option<Formatted> {
    let value = field_value(item, column.field_key());
    match column.formatter_fn() {
        Some(f) => f(row, cell, value, column, item, grid),
        None if value.is_null() => None,
        None => Some(Formatted::plain(value.to_string())),
    }
}
