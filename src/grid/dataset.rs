use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::grid::column::Column;
use crate::grid::error::DatasetError;
use crate::grid::mock;
use crate::grid::value::Row;

/// Columns plus rows, as loaded from a JSON5 document or generated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub title: Option<String>,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| DatasetError::Io { path: path.display().to_string(), source })?;
        let dataset = Self::parse(&text)?;
        info!("loaded {} rows from {}", dataset.rows.len(), path.display());
        Ok(dataset)
    }

    pub fn parse(text: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = json5::from_str(text).map_err(|e| DatasetError::Syntax(e.to_string()))?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn mock(count: usize, seed: u64) -> Self {
        Dataset {
            title: Some("Tasks".into()),
            columns: mock::task_columns(),
            rows: mock::tasks(count, seed),
        }
    }

    fn validate(&self) -> Result<(), DatasetError> {
        if self.columns.is_empty() {
            return Err(DatasetError::NoColumns);
        }
        let mut seen = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !seen.insert(column.id.as_str()) {
                return Err(DatasetError::DuplicateColumn(column.id.clone()));
            }
        }
        Ok(())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Dataset")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::grid::comparers::ComparerKind;
    use crate::grid::field_type::FieldType;
    use crate::grid::formatters::{FormatterKind, format_cell};
    use crate::grid::context::GridContext;
    use crate::grid::value::CellValue;

    const DOC: &str = r#"{
        // trailing commas and comments are fine
        title: 'People',
        columns: [
            { id: 'name', name: 'Name', sortable: true },
            { id: 'born', type: 'dateUs', formatter: 'dateUsShort', sortable: true },
            { id: 'boss', dataKey: 'lastName', sortComparer: 'objectString', formatter: 'complexObject' },
            { id: 'rate', formatter: 'decimal', params: { maxDecimal: 1, minDecimal: 1 } },
        ],
        rows: [
            { name: 'Ava', born: '12/25/1990', boss: { lastName: 'Doe' }, rate: 2 },
            { name: 'Bob', born: null, rate: '3.26' },
        ],
    }"#;

    #[test]
    fn test_parse() {
        let ds = Dataset::parse(DOC).unwrap();
        assert_eq!(ds.title(), "People");
        assert_eq!(ds.columns.len(), 4);
        assert_eq!(ds.columns[1].field_type, Some(FieldType::DateUs));
        assert_eq!(ds.columns[1].formatter, Some(FormatterKind::DateUsShort));
        assert_eq!(ds.columns[2].sort_comparer, Some(ComparerKind::ObjectString));
        assert_eq!(ds.rows[1]["born"], CellValue::Null);

        let grid = GridContext::new();
        assert_eq!(format_cell(0, 1, &ds.columns[1], &ds.rows[0], &grid), "12/25/90");
        assert_eq!(format_cell(0, 2, &ds.columns[2], &ds.rows[0], &grid), "Doe");
        assert_eq!(format_cell(0, 3, &ds.columns[3], &ds.rows[0], &grid), "2.0");
        assert_eq!(format_cell(1, 3, &ds.columns[3], &ds.rows[1], &grid), "3.3");
    }

    #[test]
    fn test_oversized_decimal_params() {
        let doc = "{ columns: [{ id: 'r', formatter: 'decimal', params: { maxDecimal: 1e9 } }], rows: [{ r: 1.5 }] }";
        let ds = Dataset::parse(doc).unwrap();
        assert_eq!(format_cell(0, 0, &ds.columns[0], &ds.rows[0], &GridContext::new()), "1.50");
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(Dataset::parse("{ columns: [ }"), Err(DatasetError::Syntax(_))));
        assert!(matches!(Dataset::parse("{ columns: [] }"), Err(DatasetError::NoColumns)));
        let dup = "{ columns: [{ id: 'a' }, { id: 'a' }] }";
        assert!(matches!(Dataset::parse(dup), Err(DatasetError::DuplicateColumn(id)) if id == "a"));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOC.as_bytes()).unwrap();
        let ds = Dataset::load(file.path()).unwrap();
        assert_eq!(ds.rows.len(), 2);

        let err = Dataset::load("/definitely/not/here.json5").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_mock() {
        let ds = Dataset::mock(3, 42);
        assert_eq!(ds.rows.len(), 3);
        assert!(ds.columns.iter().any(|c| c.id == "assignee"));
    }
}
