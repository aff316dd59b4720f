use super::{Formatted, Tone};
use crate::grid::column::Column;
use crate::grid::context::GridContext;
use crate::grid::value::{CellValue, Row};

const BAR_CELLS: usize = 10;
/// Upper bound for `minDecimal` / `maxDecimal`.
const MAX_DECIMALS: usize = 20;

/// Render `n` with at most `max` and at least `min` fraction digits.
fn format_number(n: f64, min: usize, max: usize) -> String {
    let max = max.max(min);
    let mut s = format!("{n:.max$}");
    if let Some(dot) = s.find('.') {
        let keep = dot + 1 + min;
        while s.len() > keep && s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn decimals(column: &Column, min: usize, max: usize) -> (usize, usize) {
    let param = |key, default| column.param_usize(key).unwrap_or(default).min(MAX_DECIMALS);
    (param("minDecimal", min), param("maxDecimal", max))
}

/// Numeric formatters share this shape: nothing for null, pass-through for
/// non-numeric values, `f` for numbers.
fn with_number(value: &CellValue, f: impl FnOnce(f64) -> Formatted) -> Option<Formatted> {
    if value.is_null() {
        return None;
    }
    Some(match value.as_f64() {
        Some(n) => f(n),
        None => Formatted::plain(value.to_string()),
    })
}

/// Fixed decimals, `params.minDecimal` / `params.maxDecimal` (default 2 / 2).
pub fn decimal(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    let (min, max) = decimals(column, 2, 2);
    with_number(value, |n| Formatted::plain(format_number(n, min, max)))
}

/// Currency without digit grouping: `$1.50`, `-$1.50`.
pub fn dollar(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    let (min, max) = decimals(column, 2, 2);
    with_number(value, |n| {
        let body = format_number(n.abs(), min, max);
        if n < 0.0 && body != "0" {
            Formatted::plain(format!("-${body}"))
        } else {
            Formatted::plain(format!("${body}"))
        }
    })
}

/// Fraction as percentage: `0.125` -> `12.5%`.
pub fn percent(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    let (min, max) = decimals(column, 0, 2);
    with_number(value, |n| Formatted::plain(format!("{}%", format_number(n * 100.0, min, max))))
}

/// Whole percentage, red below 50.
pub fn percent_complete(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    _column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    with_number(value, |n| {
        let tone = if n < 50.0 { Tone::Danger } else { Tone::Success };
        Formatted::toned(format!("{}%", format_number(n, 0, 2)), tone)
    })
}

/// Text progress bar followed by the value, clamped to `0..=100`.
pub fn percent_complete_bar(
    _row: usize,
    _cell: usize,
    value: &CellValue,
    _column: &Column,
    _item: &Row,
    _grid: &GridContext,
) -> Option<Formatted> {
    with_number(value, |n| {
        let n = n.clamp(0.0, 100.0);
        let filled = ((n / 100.0) * BAR_CELLS as f64).round() as usize;
        let tone = match n {
            n if n < 30.0 => Tone::Danger,
            n if n < 70.0 => Tone::Warning,
            _ => Tone::Success,
        };
        let text = format!(
            "{}{} {}%",
            "█".repeat(filled),
            "░".repeat(BAR_CELLS - filled),
            format_number(n, 0, 0)
        );
        Formatted::toned(text, tone)
    })
}
