use indexmap::IndexMap;
use serde::Deserialize;

use crate::grid::comparers::{self, ComparerKind, SortComparer};
use crate::grid::field_type::FieldType;
use crate::grid::formatters::{Formatter, FormatterKind};
use crate::grid::value::CellValue;

/// Column definition.
///
/// Formatter and comparer are named by enum, so the function behind a column
/// is fixed as soon as the column is built or deserialized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique, stable identifier
    pub id: String,
    /// Displayed title, the id when empty
    #[serde(default)]
    pub name: String,
    /// Key of the value in a row record, the id when empty. Dotted paths read
    /// nested objects.
    #[serde(default)]
    pub field: String,
    #[serde(default, rename = "type")]
    pub field_type: Option<FieldType>,
    /// Sub-field holding the comparable value of object cells
    #[serde(default)]
    pub data_key: Option<String>,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub filterable: bool,
    #[serde(default)]
    pub formatter: Option<FormatterKind>,
    #[serde(default)]
    pub sort_comparer: Option<ComparerKind>,
    /// Formatter options, e.g. `minDecimal` / `maxDecimal`
    #[serde(default)]
    pub params: IndexMap<String, CellValue>,
    #[serde(default)]
    pub width: Option<u16>,
}

impl Column {
    pub fn new(id: impl AsRef<str>, name: impl AsRef<str>) -> Self {
        Column {
            id: id.as_ref().to_string(),
            name: name.as_ref().to_string(),
            field: String::new(),
            field_type: None,
            data_key: None,
            sortable: false,
            filterable: false,
            formatter: None,
            sort_comparer: None,
            params: IndexMap::new(),
            width: None,
        }
    }

    pub fn field(mut self, field: impl AsRef<str>) -> Self {
        self.field = field.as_ref().to_string();
        self
    }

    pub fn of_type(mut self, ty: FieldType) -> Self {
        self.field_type = Some(ty);
        self
    }

    pub fn data_key(mut self, key: impl AsRef<str>) -> Self {
        self.data_key = Some(key.as_ref().to_string());
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn formatter(mut self, kind: FormatterKind) -> Self {
        self.formatter = Some(kind);
        self
    }

    pub fn sort_comparer(mut self, kind: ComparerKind) -> Self {
        self.sort_comparer = Some(kind);
        self
    }

    pub fn param(mut self, key: impl AsRef<str>, value: impl Into<CellValue>) -> Self {
        self.params.insert(key.as_ref().to_string(), value.into());
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn title(&self) -> &str {
        if self.name.is_empty() { &self.id } else { &self.name }
    }

    pub fn field_key(&self) -> &str {
        if self.field.is_empty() { &self.id } else { &self.field }
    }

    pub fn formatter_fn(&self) -> Option<Formatter> {
        self.formatter.map(FormatterKind::formatter)
    }

    pub fn comparer_fn(&self) -> SortComparer {
        comparers::for_column(self)
    }

    /// Numeric formatter option, `None` when missing or not a number.
    pub fn param_usize(&self, key: &str) -> Option<usize> {
        self.params.get(key).and_then(CellValue::as_f64).filter(|n| *n >= 0.0).map(|n| n as usize)
    }
}
