use gridcells::grid::formatters::format_cell;
use gridcells::grid::{Column, GridContext, Row};
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32Str};

/// An iterator over row indices whose formatted text in any filterable
/// column fuzzy-matches a pattern. Without a pattern every row passes.
pub struct RowFilter<'a, I>
where
    I: Iterator<Item = (usize, &'a Row)>,
{
    iter: I,
    matcher: &'a mut Matcher,
    pattern: Option<Pattern>,
    columns: &'a [Column],
    grid: &'a GridContext,
    buf: Vec<char>,
}

impl<'a, I> RowFilter<'a, I>
where
    I: Iterator<Item = (usize, &'a Row)>,
{
    pub fn new(
        iter: I,
        matcher: &'a mut Matcher,
        pattern: Option<&str>,
        columns: &'a [Column],
        grid: &'a GridContext,
    ) -> Self {
        let pattern = pattern
            .filter(|p| !p.trim().is_empty())
            .map(|p| Pattern::parse(p, CaseMatching::Ignore, Normalization::Smart));
        Self { iter, matcher, pattern, columns, grid, buf: Vec::new() }
    }
}

impl<'a, I> Iterator for RowFilter<'a, I>
where
    I: Iterator<Item = (usize, &'a Row)>,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(pattern) = &self.pattern else {
            return self.iter.next().map(|(idx, _)| idx);
        };
        for (idx, row) in self.iter.by_ref() {
            let hit = self.columns.iter().enumerate().filter(|(_, col)| col.filterable).any(|(cell, col)| {
                let text = format_cell(idx, cell, col, row, self.grid);
                pattern.score(Utf32Str::new(&text, &mut self.buf), self.matcher).is_some()
            });
            if hit {
                return Some(idx);
            }
        }
        None
    }
}
