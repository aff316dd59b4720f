use anyhow::{Result, bail};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const DEFAULT_HL_COLOR: Color = Color::Indexed(130);

#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Raw(Box<str>),
    Hl(Box<str>),
}

impl Fragment {
    #[inline]
    pub fn raw<S: Into<Box<str>>>(s: S) -> Self {
        Self::Raw(s.into())
    }

    #[inline]
    pub fn hl<S: Into<Box<str>>>(s: S) -> Self {
        Self::Hl(s.into())
    }
}

/// A key hint such as `[f]ilter`, rendered in the footer and in titles.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortcut {
    parts: Vec<Fragment>,
}

impl Shortcut {
    pub fn new(parts: Vec<Fragment>) -> Self {
        Self { parts }
    }

    /// `key` highlighted, followed by `label`: `s sort`.
    pub fn key(key: &str, label: &str) -> Self {
        Self::new(vec![Fragment::hl(key), Fragment::raw(format!(" {label}"))])
    }

    /// Creates a `Shortcut` from ASCII `s`, highlighting the character at `hl_idx`.
    pub fn from<S: AsRef<str>>(s: S, hl_idx: usize) -> Result<Self> {
        let text = s.as_ref();
        if !text.is_ascii() {
            bail!("Shortcut::from expects ASCII text");
        }
        if hl_idx >= text.len() {
            bail!("hl_index {} is out of bounds for string of length {}", hl_idx, text.len());
        }

        let (head, rest) = text.split_at(hl_idx);
        let (key, tail) = rest.split_at(1);
        let parts = [Fragment::raw(head), Fragment::hl(key), Fragment::raw(tail)]
            .into_iter()
            .filter(|f| !matches!(f, Fragment::Raw(s) if s.is_empty()))
            .collect();
        Ok(Self::new(parts))
    }

    pub fn spans(&'_ self, hl_style: Option<Style>) -> Vec<Span<'_>> {
        let hl_style = hl_style.unwrap_or(Style::default().fg(DEFAULT_HL_COLOR));
        self.parts
            .iter()
            .map(|v| match v {
                Fragment::Raw(s) => Span::raw(s.as_ref()),
                Fragment::Hl(s) => Span::styled(s.as_ref(), hl_style),
            })
            .collect()
    }
}

impl<'a> From<&'a Shortcut> for Line<'a> {
    fn from(value: &'a Shortcut) -> Self {
        Line::from(value.spans(None))
    }
}
