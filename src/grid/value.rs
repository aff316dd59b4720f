use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use time::PrimitiveDateTime;

/// A row record, field key -> raw cell value, in insertion order.
pub type Row = IndexMap<String, CellValue>;

static NULL: CellValue = CellValue::Null;

/// Raw value of a single cell.
///
/// Dates carry local calendar fields only; no zone conversion ever happens.
/// Text that merely looks like a date stays [`CellValue::Text`] and is parsed
/// on demand according to the owning column's type.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(PrimitiveDateTime),
    List(Vec<CellValue>),
    Object(Row),
}

impl CellValue {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric view of the value; numeric text is accepted, blank text is not.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if !n.is_nan() => Some(*n),
            CellValue::Text(s) => {
                let s = s.trim();
                if s.is_empty() { None } else { s.parse::<f64>().ok().filter(|n| !n.is_nan()) }
            }
            _ => None,
        }
    }

    /// `true`, any non-zero number, or the text `"true"` (any case).
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Bool(b) => *b,
            CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
            CellValue::Text(s) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// Boolean view used by sorting: `None` for values that are not boolean-like.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            CellValue::Number(n) if !n.is_nan() => Some(*n != 0.0),
            CellValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            CellValue::Text(s) => f.write_str(s),
            CellValue::Date(dt) => write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                dt.year(),
                u8::from(dt.month()),
                dt.day(),
                dt.hour(),
                dt.minute(),
                dt.second()
            ),
            CellValue::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            CellValue::Object(_) => f.write_str("{…}"),
        }
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => n.as_f64().map_or(CellValue::Null, CellValue::Number),
            Value::String(s) => CellValue::Text(s),
            Value::Array(items) => CellValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                CellValue::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<PrimitiveDateTime> for CellValue {
    fn from(value: PrimitiveDateTime) -> Self {
        CellValue::Date(value)
    }
}

impl From<Row> for CellValue {
    fn from(value: Row) -> Self {
        CellValue::Object(value)
    }
}

/// Resolve `field` in `row`. A literal key wins; otherwise the key is read as
/// a dotted path into nested objects. Missing keys resolve to `Null`.
pub fn field_value<'a>(row: &'a Row, field: &str) -> &'a CellValue {
    if let Some(value) = row.get(field) {
        return value;
    }
    let mut parts = field.split('.');
    let Some(mut current) = parts.next().and_then(|head| row.get(head)) else {
        return &NULL;
    };
    for part in parts {
        current = match current {
            CellValue::Object(map) => match map.get(part) {
                Some(v) => v,
                None => return &NULL,
            },
            _ => return &NULL,
        };
    }
    current
}

/// Build a [`Row`] from `(key, value)` pairs.
pub fn row<K, V, I>(pairs: I) -> Row
where
    K: Into<String>,
    V: Into<CellValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}
