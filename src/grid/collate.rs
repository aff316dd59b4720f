//! Locale-aware string ordering for sort comparers.
//!
//! Three levels, compared in turn:
//! 1. primary: base letters, ignoring case and diacritics, with whitespace and
//!    punctuation before digits before letters;
//! 2. secondary: unaccented before accented;
//! 3. tertiary: lowercase before uppercase.
//!
//! Precomposed letters and a base letter followed by combining marks get the
//! same weights, so canonically equivalent strings compare `Equal`.

use std::cmp::Ordering;

/// Marker for letters that have no canonical decomposition.
const NO_MARK: char = '\0';

/// Combining marks in secondary order.
const MARKS: &[char] = &[
    '\u{301}', // acute
    '\u{300}', // grave
    '\u{306}', // breve
    '\u{302}', // circumflex
    '\u{30C}', // caron
    '\u{30A}', // ring above
    '\u{308}', // diaeresis
    '\u{30B}', // double acute
    '\u{303}', // tilde
    '\u{307}', // dot above
    '\u{327}', // cedilla
    '\u{328}', // ogonek
    '\u{304}', // macron
];

/// Weight of combining marks missing from [`MARKS`].
const OTHER_MARK: u32 = 31;
const MARK_BITS: u32 = 5;
/// Secondary weights of letters without decomposition start here, above any
/// base-plus-marks combination.
const UNDECOMPOSED: u32 = 1 << 16;

/// Accented lowercase Latin letters as `(letter, base, combining mark)`.
const ACCENTS: &[(char, char, char)] = &[
    ('á', 'a', '\u{301}'),
    ('à', 'a', '\u{300}'),
    ('â', 'a', '\u{302}'),
    ('ä', 'a', '\u{308}'),
    ('ã', 'a', '\u{303}'),
    ('å', 'a', '\u{30A}'),
    ('ā', 'a', '\u{304}'),
    ('ă', 'a', '\u{306}'),
    ('ą', 'a', '\u{328}'),
    ('ç', 'c', '\u{327}'),
    ('ć', 'c', '\u{301}'),
    ('ĉ', 'c', '\u{302}'),
    ('ċ', 'c', '\u{307}'),
    ('č', 'c', '\u{30C}'),
    ('ď', 'd', '\u{30C}'),
    ('đ', 'd', NO_MARK),
    ('é', 'e', '\u{301}'),
    ('è', 'e', '\u{300}'),
    ('ê', 'e', '\u{302}'),
    ('ë', 'e', '\u{308}'),
    ('ē', 'e', '\u{304}'),
    ('ĕ', 'e', '\u{306}'),
    ('ė', 'e', '\u{307}'),
    ('ę', 'e', '\u{328}'),
    ('ě', 'e', '\u{30C}'),
    ('ĝ', 'g', '\u{302}'),
    ('ğ', 'g', '\u{306}'),
    ('ġ', 'g', '\u{307}'),
    ('ģ', 'g', '\u{327}'),
    ('ĥ', 'h', '\u{302}'),
    ('ħ', 'h', NO_MARK),
    ('í', 'i', '\u{301}'),
    ('ì', 'i', '\u{300}'),
    ('î', 'i', '\u{302}'),
    ('ï', 'i', '\u{308}'),
    ('ĩ', 'i', '\u{303}'),
    ('ī', 'i', '\u{304}'),
    ('ĭ', 'i', '\u{306}'),
    ('į', 'i', '\u{328}'),
    ('ı', 'i', NO_MARK),
    ('ĵ', 'j', '\u{302}'),
    ('ķ', 'k', '\u{327}'),
    ('ĺ', 'l', '\u{301}'),
    ('ļ', 'l', '\u{327}'),
    ('ľ', 'l', '\u{30C}'),
    ('ŀ', 'l', NO_MARK),
    ('ł', 'l', NO_MARK),
    ('ñ', 'n', '\u{303}'),
    ('ń', 'n', '\u{301}'),
    ('ņ', 'n', '\u{327}'),
    ('ň', 'n', '\u{30C}'),
    ('ŉ', 'n', NO_MARK),
    ('ó', 'o', '\u{301}'),
    ('ò', 'o', '\u{300}'),
    ('ô', 'o', '\u{302}'),
    ('ö', 'o', '\u{308}'),
    ('õ', 'o', '\u{303}'),
    ('ø', 'o', NO_MARK),
    ('ō', 'o', '\u{304}'),
    ('ŏ', 'o', '\u{306}'),
    ('ő', 'o', '\u{30B}'),
    ('ŕ', 'r', '\u{301}'),
    ('ŗ', 'r', '\u{327}'),
    ('ř', 'r', '\u{30C}'),
    ('ś', 's', '\u{301}'),
    ('ŝ', 's', '\u{302}'),
    ('ş', 's', '\u{327}'),
    ('š', 's', '\u{30C}'),
    ('ß', 's', NO_MARK),
    ('ţ', 't', '\u{327}'),
    ('ť', 't', '\u{30C}'),
    ('ŧ', 't', NO_MARK),
    ('ú', 'u', '\u{301}'),
    ('ù', 'u', '\u{300}'),
    ('û', 'u', '\u{302}'),
    ('ü', 'u', '\u{308}'),
    ('ũ', 'u', '\u{303}'),
    ('ū', 'u', '\u{304}'),
    ('ŭ', 'u', '\u{306}'),
    ('ů', 'u', '\u{30A}'),
    ('ű', 'u', '\u{30B}'),
    ('ų', 'u', '\u{328}'),
    ('ŵ', 'w', '\u{302}'),
    ('ý', 'y', '\u{301}'),
    ('ÿ', 'y', '\u{308}'),
    ('ŷ', 'y', '\u{302}'),
    ('ź', 'z', '\u{301}'),
    ('ż', 'z', '\u{307}'),
    ('ž', 'z', '\u{30C}'),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Space,
    Symbol,
    Digit,
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Weights {
    class: Class,
    base: char,
    accent: u32,
    upper: bool,
}

impl Weights {
    fn of(c: char) -> Self {
        let lower = c.to_lowercase().next().unwrap_or(c);
        let upper = lower != c;
        let class = if c.is_whitespace() {
            Class::Space
        } else if c.is_numeric() {
            Class::Digit
        } else if c.is_alphabetic() {
            Class::Letter
        } else {
            Class::Symbol
        };
        let (base, accent) = fold(lower);
        Self { class, base, accent, upper }
    }

    #[inline]
    fn primary(self) -> (Class, char) {
        (self.class, self.base)
    }

    /// Stack a combining mark onto this letter's secondary weight.
    fn add_mark(&mut self, mark: char) {
        self.accent = (self.accent << MARK_BITS) | mark_weight(mark);
    }
}

fn is_combining(c: char) -> bool {
    matches!(
        c,
        '\u{300}'..='\u{36F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

fn mark_weight(mark: char) -> u32 {
    MARKS.iter().position(|&m| m == mark).map_or(OTHER_MARK, |pos| pos as u32 + 1)
}

fn fold(lower: char) -> (char, u32) {
    if lower.is_ascii() {
        return (lower, 0);
    }
    match ACCENTS.iter().position(|&(c, _, _)| c == lower) {
        Some(idx) => {
            let (_, base, mark) = ACCENTS[idx];
            let accent = if mark == NO_MARK { UNDECOMPOSED + idx as u32 } else { mark_weight(mark) };
            (base, accent)
        }
        None => (lower, 0),
    }
}

fn weights(s: &str) -> Vec<Weights> {
    let mut out: Vec<Weights> = Vec::with_capacity(s.len());
    for c in s.chars() {
        if is_combining(c)
            && let Some(prev) = out.last_mut().filter(|w| w.class == Class::Letter && w.accent < UNDECOMPOSED)
        {
            prev.add_mark(c);
            continue;
        }
        out.push(Weights::of(c));
    }
    out
}

/// Compare two strings with collation rules.
pub fn compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let (wa, wb) = (weights(a), weights(b));

    let primary = wa.iter().map(|w| w.primary()).cmp(wb.iter().map(|w| w.primary()));
    primary
        .then_with(|| wa.iter().map(|w| w.accent).cmp(wb.iter().map(|w| w.accent)))
        .then_with(|| wa.iter().map(|w| w.upper).cmp(wb.iter().map(|w| w.upper)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(items: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| compare(a, b));
        v
    }

    #[test]
    fn test_identical() {
        assert_eq!(compare("John", "John"), Ordering::Equal);
        assert_eq!(compare("", ""), Ordering::Equal);
    }

    #[test]
    fn test_case_is_tertiary() {
        // case only matters when the letters are otherwise equal
        assert_eq!(compare("a", "Cash"), Ordering::Less);
        assert_eq!(compare("apple", "Banana"), Ordering::Less);
        assert_eq!(compare("abc", "ABC"), Ordering::Less);
        assert_eq!(sorted(&["b", "B", "a", "A"]), vec!["a", "A", "b", "B"]);
    }

    #[test]
    fn test_diacritics_are_secondary() {
        assert_eq!(compare("résumé", "resume"), Ordering::Greater);
        assert_eq!(compare("résumé", "resumes"), Ordering::Less);
        assert_eq!(sorted(&["Émile", "Eve", "Ezra"]), vec!["Émile", "Eve", "Ezra"]);
        assert_eq!(compare("Zoë", "Zoe"), Ordering::Greater);
    }

    #[test]
    fn test_classes() {
        assert_eq!(sorted(&["b", "2", " a", "-x", "10"]), vec![" a", "-x", "10", "2", "b"]);
        assert_eq!(compare("", "a"), Ordering::Less);
    }

    #[test]
    fn test_combining_marks_match_precomposed() {
        assert_eq!(compare("Chlo\u{e9}", "Chloe\u{301}"), Ordering::Equal);
        assert_eq!(compare("\u{c9}mile", "E\u{301}mile"), Ordering::Equal);
        // still secondary: after the bare letter, before the next base letter
        assert_eq!(compare("Chloe\u{301}", "Chloe"), Ordering::Greater);
        assert_eq!(compare("Chloe\u{301}", "Chlof"), Ordering::Less);
        assert_eq!(compare("Chloe\u{301}", "Chlo\u{e8}"), Ordering::Less);
        assert_eq!(sorted(&["Zoe\u{308}", "Zoa", "Zoe"]), vec!["Zoa", "Zoe", "Zoe\u{308}"]);
    }
}
