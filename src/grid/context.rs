use indexmap::IndexMap;

/// Grid-wide state handed to formatters, read only.
#[derive(Debug, Clone, Default)]
pub struct GridContext {
    translations: IndexMap<String, String>,
}

impl GridContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translations<K, V>(mut self, translations: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.translations.extend(translations.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn translate(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }
}
