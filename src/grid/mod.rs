pub mod collate;
pub mod column;
pub mod comparers;
pub mod context;
pub mod dataset;
pub mod dates;
pub mod error;
pub mod field_type;
pub mod formatters;
pub mod mock;
pub mod sort;
pub mod sort_direction;
pub mod value;

pub use column::Column;
pub use comparers::{ComparerKind, SortComparer};
pub use context::GridContext;
pub use dataset::Dataset;
pub use error::{DatasetError, SortError};
pub use field_type::FieldType;
pub use formatters::{Formatted, Formatter, FormatterKind, Tone};
pub use sort::{SortSpec, sort_rows, sort_values, sorted_order};
pub use sort_direction::SortDirection;
pub use value::{CellValue, Row};
