use thiserror::Error;

/// Column configuration errors raised by sort comparers.
///
/// These are caller bugs: fix the column definition rather than retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// An object operand was compared on a column without `dataKey`.
    #[error("Sorting an object field requires a dataKey (column `{column}`)")]
    MissingDataKey { column: String },
}

/// Failures while loading a dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset document: {0}")]
    Syntax(String),

    #[error("duplicate column id `{0}`")]
    DuplicateColumn(String),

    #[error("dataset declares no columns")]
    NoColumns,
}
