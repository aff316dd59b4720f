use std::collections::HashSet;
use std::sync::{Mutex, RwLock};

use gridcells::grid::{Column, Dataset, GridContext, Row, SortDirection, SortError, SortSpec, sorted_order};
use nucleo_matcher::{Config, Matcher};
use tracing::{debug, warn};

use crate::utils::row_filter::RowFilter;

/// Sort state of the grid: one column at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridSort {
    pub col: usize,
    pub direction: SortDirection,
}

/// Rows of the dataset plus the current view: indices into the rows after
/// filtering and sorting.
pub struct GridStore {
    title: String,
    columns: Vec<Column>,
    grid: GridContext,
    matcher: Mutex<Matcher>,

    buffer: RwLock<Vec<Row>>,
    view: RwLock<Vec<usize>>,
}

impl GridStore {
    pub fn new(dataset: Dataset, grid: GridContext) -> Self {
        let title = dataset.title().to_string();
        let view = (0..dataset.rows.len()).collect();
        Self {
            title,
            columns: dataset.columns,
            grid,
            matcher: Mutex::new(Matcher::new(Config::DEFAULT)),
            buffer: RwLock::new(dataset.rows),
            view: RwLock::new(view),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn grid(&self) -> &GridContext {
        &self.grid
    }

    pub fn total(&self) -> usize {
        self.buffer.read().unwrap().len()
    }

    /// Recompute the view. On a sort configuration error the view keeps the
    /// filtered rows in their previous relative order and the error is
    /// returned for display.
    pub fn compute_view(&self, pattern: Option<&str>, sort: Option<GridSort>) -> Result<(), SortError> {
        let buffer = self.buffer.read().unwrap();
        let filtered: Vec<usize> = {
            let mut matcher = self.matcher.lock().unwrap();
            RowFilter::new(buffer.iter().enumerate(), &mut matcher, pattern, &self.columns, &self.grid)
                .collect()
        };

        let sort_spec = sort
            .and_then(|s| self.columns.get(s.col).filter(|c| c.sortable).map(|c| SortSpec::new(c, s.direction)));
        let result = match sort_spec {
            Some(spec) => sorted_order(&buffer, filtered.iter().copied(), &[spec])
                .inspect_err(|e| warn!(column = %spec.column.id, "sort failed: {e}")),
            None => Ok(filtered.clone()),
        };
        debug!(?pattern, ?sort, "view recomputed");

        let mut guard = self.view.write().unwrap();
        match result {
            Ok(order) => {
                *guard = order;
                Ok(())
            }
            Err(e) => {
                let keep: HashSet<usize> = filtered.iter().copied().collect();
                guard.retain(|idx| keep.contains(idx));
                // rows that were filtered out before come back at the end
                let present: HashSet<usize> = guard.iter().copied().collect();
                guard.extend(filtered.into_iter().filter(|idx| !present.contains(idx)));
                Err(e)
            }
        }
    }

    /// Run `f` with the rows and the current view.
    pub fn with_view<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Row], &[usize]) -> R,
    {
        let buffer = self.buffer.read().unwrap();
        let view = self.view.read().unwrap();
        f(&buffer, &view)
    }
}

#[cfg(test)]
mod tests {
    use gridcells::grid::value::row;
    use gridcells::grid::{CellValue, ComparerKind, FieldType};

    use super::*;

    fn store() -> GridStore {
        let dataset = Dataset {
            title: None,
            columns: vec![
                Column::new("name", "Name").sortable(true).filterable(true),
                Column::new("age", "Age").of_type(FieldType::Number).sortable(true),
                Column::new("boss", "Boss").sort_comparer(ComparerKind::ObjectString).sortable(true),
            ],
            rows: vec![
                row([("name", CellValue::from("Bob")), ("age", 30i64.into()), ("boss", "x".into())]),
                row([("name", CellValue::from("Ava")), ("age", 41i64.into()), ("boss", "y".into())]),
                row([
                    ("name", CellValue::from("Jane")),
                    ("age", 25i64.into()),
                    ("boss", CellValue::Object(row([("lastName", "Doe")]))),
                ]),
            ],
        };
        GridStore::new(dataset, GridContext::new())
    }

    fn view(store: &GridStore) -> Vec<usize> {
        store.with_view(|_, view| view.to_vec())
    }

    #[test]
    fn test_sort_and_filter() {
        let store = store();
        assert_eq!(view(&store), vec![0, 1, 2]);

        let by_age = GridSort { col: 1, direction: SortDirection::Desc };
        store.compute_view(None, Some(by_age)).unwrap();
        assert_eq!(view(&store), vec![1, 0, 2]);

        store.compute_view(Some("a"), Some(by_age)).unwrap();
        assert_eq!(view(&store), vec![1, 2]);

        let neutral = GridSort { col: 1, direction: SortDirection::Neutral };
        store.compute_view(None, Some(neutral)).unwrap();
        assert_eq!(view(&store), vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_error_keeps_previous_order() {
        let store = store();
        let by_name = GridSort { col: 0, direction: SortDirection::Asc };
        store.compute_view(None, Some(by_name)).unwrap();
        assert_eq!(view(&store), vec![1, 0, 2]);

        let by_boss = GridSort { col: 2, direction: SortDirection::Asc };
        let err = store.compute_view(None, Some(by_boss)).unwrap_err();
        assert_eq!(err, SortError::MissingDataKey { column: "boss".into() });
        assert_eq!(view(&store), vec![1, 0, 2]);

        // unsorted, the column still reports its configuration
        let unsorted = GridSort { col: 2, direction: SortDirection::Neutral };
        assert!(store.compute_view(None, Some(unsorted)).is_err());
        assert_eq!(view(&store), vec![1, 0, 2]);
    }
}
