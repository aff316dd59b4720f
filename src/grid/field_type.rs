use serde::Deserialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use time::format_description::FormatItem;

use crate::grid::dates;

/// Column type tag. For date tags it also names the source format text values
/// are parsed with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldType {
    Unknown,
    String,
    Text,
    Number,
    Integer,
    Float,
    Boolean,
    Object,
    Date,
    DateIso,
    DateTimeIso,
    DateTimeShortIso,
    DateUs,
    DateUsShort,
    DateTimeUs,
    DateTimeUsShort,
    DateEuro,
    DateEuroShort,
    DateTimeEuro,
}

impl FieldType {
    pub fn is_numeric(self) -> bool {
        matches!(self, FieldType::Number | FieldType::Integer | FieldType::Float)
    }

    pub fn is_date(self) -> bool {
        self.date_layout().is_some()
    }

    /// Date part of the source format used to parse text values.
    pub fn date_layout(self) -> Option<&'static [FormatItem<'static>]> {
        use FieldType::*;
        match self {
            Date | DateIso | DateTimeIso | DateTimeShortIso => Some(dates::ISO_DATE),
            DateUs | DateTimeUs => Some(dates::US_DATE),
            DateUsShort | DateTimeUsShort => Some(dates::US_SHORT_DATE),
            DateEuro | DateTimeEuro => Some(dates::EURO_DATE),
            DateEuroShort => Some(dates::EURO_SHORT_DATE),
            Unknown | String | Text | Number | Integer | Float | Boolean | Object => None,
        }
    }
}
