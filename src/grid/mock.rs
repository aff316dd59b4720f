//! Deterministic task list used by the demo when no dataset file is given.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use time::{Date, Month, Time};

use crate::grid::column::Column;
use crate::grid::comparers::ComparerKind;
use crate::grid::field_type::FieldType;
use crate::grid::formatters::FormatterKind;
use crate::grid::value::{CellValue, Row, row};

const FIRST_NAMES: &[&str] =
    &["John", "Jane", "Ava", "Bob", "Émile", "Chloé", "Liam", "Noah", "Olivia", "Zoë"];
const LAST_NAMES: &[&str] =
    &["Doe", "Smith", "Marley", "Öberg", "Brown", "lee", "Garcia", "Dupré", "Kim", "Young"];

/// 1 = low, 2 = medium, 3 = high
fn priority(i: usize) -> &'static str {
    let level = if i % 3 != 0 {
        2
    } else if i % 5 != 0 {
        3
    } else {
        1
    };
    match level {
        3 => "HIGH",
        2 => "MEDIUM",
        _ => "LOW",
    }
}

pub fn task_columns() -> Vec<Column> {
    vec![
        Column::new("id", "#").of_type(FieldType::Number).sortable(true).width(6),
        Column::new("title", "Title").sortable(true).filterable(true).width(12),
        Column::new("duration", "Duration").sortable(true).filterable(true).width(10),
        Column::new("percentComplete", "% Complete")
            .of_type(FieldType::Number)
            .formatter(FormatterKind::PercentCompleteBar)
            .sortable(true)
            .width(16),
        Column::new("start", "Start")
            .of_type(FieldType::DateIso)
            .formatter(FormatterKind::DateUsShort)
            .sortable(true)
            .width(10),
        Column::new("finish", "Finish")
            .of_type(FieldType::DateIso)
            .formatter(FormatterKind::DateIso)
            .sortable(true)
            .width(12),
        Column::new("priority", "Priority")
            .formatter(FormatterKind::Translate)
            .sortable(true)
            .filterable(true)
            .width(10),
        Column::new("completed", "Done")
            .of_type(FieldType::Boolean)
            .formatter(FormatterKind::Checkmark)
            .sortable(true)
            .width(6),
        Column::new("cost", "Cost")
            .of_type(FieldType::Number)
            .formatter(FormatterKind::Dollar)
            .sortable(true)
            .width(12),
        Column::new("assignee", "Assignee")
            .data_key("lastName")
            .formatter(FormatterKind::ComplexObject)
            .sort_comparer(ComparerKind::ObjectString)
            .sortable(true)
            .filterable(true)
            .width(12),
    ]
}

/// `count` task rows, the same rows for the same `seed`.
pub fn tasks(count: usize, seed: u64) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|i| task(i, &mut rng)).collect()
}

fn task(i: usize, rng: &mut StdRng) -> Row {
    let year = 2000 + rng.gen_range(0..30);
    let month = Month::January.nth_next(rng.gen_range(0..11));
    let day = rng.gen_range(1..=28);
    let start = Date::from_calendar_date(year, month, day).ok();
    let finish = Date::from_calendar_date(year, month.next(), day).ok();
    let at_midnight = |d: Option<Date>| d.map_or(CellValue::Null, |d| d.with_time(Time::MIDNIGHT).into());

    let assignee = row([
        ("firstName", FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())]),
        ("lastName", LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]),
    ]);
    let cost = (rng.gen_range(0..1_000_000) as f64) / 100.0;

    row([
        ("id", CellValue::from(i as i64)),
        ("title", format!("Task {i}").into()),
        ("duration", format!("{} days", rng.gen_range(0..25)).into()),
        ("percentComplete", (rng.gen_range(0..100) as i64).into()),
        ("start", at_midnight(start)),
        ("finish", at_midnight(finish)),
        ("priority", priority(i).into()),
        ("completed", (i % 4 == 0).into()),
        ("cost", if i % 7 == 3 { CellValue::Null } else { cost.into() }),
        ("assignee", assignee.into()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::sort::{SortSpec, sorted_order};
    use crate::grid::sort_direction::SortDirection;
    use crate::grid::value::field_value;

    #[test]
    fn test_deterministic() {
        assert_eq!(tasks(20, 7), tasks(20, 7));
        assert_ne!(tasks(20, 7), tasks(20, 8));
    }

    #[test]
    fn test_shape() {
        let rows = tasks(16, 42);
        assert_eq!(rows.len(), 16);
        assert_eq!(rows[5]["title"], CellValue::from("Task 5"));
        assert_eq!(rows[4]["completed"], CellValue::Bool(true));
        assert_eq!(rows[5]["completed"], CellValue::Bool(false));
        assert_eq!(rows[0]["priority"], CellValue::from("LOW"));
        assert_eq!(rows[3]["priority"], CellValue::from("HIGH"));
        assert_eq!(rows[1]["priority"], CellValue::from("MEDIUM"));
        for r in &rows {
            let (CellValue::Date(start), CellValue::Date(finish)) = (&r["start"], &r["finish"]) else {
                panic!("expected dates");
            };
            assert!(finish > start);
            assert!(field_value(r, "assignee.lastName").as_text().is_some());
        }
    }

    #[test]
    fn test_every_column_sorts() {
        let rows = tasks(50, 1);
        let columns = task_columns();
        for column in &columns {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let order = sorted_order(&rows, 0..rows.len(), &[SortSpec::new(column, direction)]);
                assert_eq!(order.map(|o| o.len()), Ok(rows.len()), "column {}", column.id);
            }
        }
    }
}
