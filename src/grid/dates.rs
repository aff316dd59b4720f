//! Date parsing and rendering shared by the date formatters and comparer.
//!
//! Text is parsed leniently in the sense that a time part may follow the date
//! (`2019-05-01 02:36:07`, `2019-05-01T02:36:07.120Z`), but the date part must
//! match the declared source format exactly.

use time::format_description::FormatItem;
use time::macros::format_description;
use time::parsing::Parsed;
use time::{Date, PrimitiveDateTime, Time};

use crate::grid::field_type::FieldType;
use crate::grid::value::CellValue;

pub const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
pub const US_DATE: &[FormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");
pub const US_SHORT_DATE: &[FormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year repr:last_two]");
pub const EURO_DATE: &[FormatItem<'static>] =
    format_description!("[day padding:none]/[month padding:none]/[year]");
pub const EURO_SHORT_DATE: &[FormatItem<'static>] =
    format_description!("[day padding:none]/[month padding:none]/[year repr:last_two]");

const TIME_HMS: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second]");
const TIME_HM: &[FormatItem<'static>] = format_description!("[hour]:[minute]");

pub const OUT_ISO: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
pub const OUT_ISO_DATETIME: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
pub const OUT_US: &[FormatItem<'static>] = format_description!("[month]/[day]/[year]");
pub const OUT_US_SHORT: &[FormatItem<'static>] =
    format_description!("[month]/[day]/[year repr:last_two]");
pub const OUT_EURO: &[FormatItem<'static>] = format_description!("[day]/[month]/[year]");

/// Two-digit years above 68 belong to the 1900s.
pub fn expand_two_digit_year(yy: u8) -> i32 {
    let yy = i32::from(yy);
    if yy > 68 { 1900 + yy } else { 2000 + yy }
}

/// Parse `text` with the source format of `field_type`, ISO when the type is
/// absent or not a date type.
pub fn parse_date_text(text: &str, field_type: Option<FieldType>) -> Option<PrimitiveDateTime> {
    let layout = field_type.and_then(FieldType::date_layout).unwrap_or(ISO_DATE);
    parse_with(text.trim(), layout)
}

/// Calendar view of a cell value: native dates as is, text parsed per column type.
pub fn to_date(value: &CellValue, field_type: Option<FieldType>) -> Option<PrimitiveDateTime> {
    match value {
        CellValue::Date(dt) => Some(*dt),
        CellValue::Text(s) => parse_date_text(s, field_type),
        _ => None,
    }
}

pub fn render(dt: &PrimitiveDateTime, layout: &[FormatItem<'_>]) -> Option<String> {
    dt.format(layout).ok()
}

fn parse_with(text: &str, layout: &[FormatItem<'_>]) -> Option<PrimitiveDateTime> {
    let mut parsed = Parsed::new();
    let rest = parsed.parse_items(text.as_bytes(), layout).ok()?;
    let year = parsed.year().or_else(|| parsed.year_last_two().map(expand_two_digit_year))?;
    let date = Date::from_calendar_date(year, parsed.month()?, parsed.day()?.get()).ok()?;
    let time = parse_time(rest)?;
    Some(PrimitiveDateTime::new(date, time))
}

fn parse_time(rest: &[u8]) -> Option<Time> {
    let rest = match rest {
        [] => return Some(Time::MIDNIGHT),
        [b' ' | b'T', tail @ ..] => tail,
        _ => return None,
    };
    let mut parsed = Parsed::new();
    let remaining = parsed
        .parse_items(rest, TIME_HMS)
        .or_else(|_| parsed.parse_items(rest, TIME_HM))
        .ok()?;
    // fractional seconds and zone designators are accepted and ignored
    if !matches!(remaining.first(), None | Some(b'.' | b'Z' | b'z' | b'+' | b'-')) {
        return None;
    }
    Time::from_hms(parsed.hour_24()?, parsed.minute()?, parsed.second().unwrap_or(0)).ok()
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_parse_iso() {
        assert_eq!(parse_date_text("2019-05-01", None), Some(datetime!(2019-05-01 00:00)));
        assert_eq!(
            parse_date_text("2019-05-01 02:36:07", Some(FieldType::DateIso)),
            Some(datetime!(2019-05-01 02:36:07))
        );
        assert_eq!(
            parse_date_text("2019-05-01T20:36:07.250Z", None),
            Some(datetime!(2019-05-01 20:36:07))
        );
        assert_eq!(parse_date_text("2019-05-01T20:36", None), Some(datetime!(2019-05-01 20:36)));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_date_text("TBD", None), None);
        assert_eq!(parse_date_text("", None), None);
        assert_eq!(parse_date_text("2019-02-30", None), None);
        assert_eq!(parse_date_text("2019-05-01 noon", None), None);
        assert_eq!(parse_date_text("2019-05-01x", None), None);
        // declared format wins over ISO
        assert_eq!(parse_date_text("2019-05-01", Some(FieldType::DateUs)), None);
    }

    #[test]
    fn test_parse_us_and_euro() {
        assert_eq!(
            parse_date_text("5/1/2019", Some(FieldType::DateUs)),
            Some(datetime!(2019-05-01 00:00))
        );
        assert_eq!(
            parse_date_text("05/01/19 13:45", Some(FieldType::DateTimeUsShort)),
            Some(datetime!(2019-05-01 13:45))
        );
        assert_eq!(
            parse_date_text("01/05/2019", Some(FieldType::DateEuro)),
            Some(datetime!(2019-05-01 00:00))
        );
        assert_eq!(
            parse_date_text("31/12/99", Some(FieldType::DateEuroShort)),
            Some(datetime!(1999-12-31 00:00))
        );
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(expand_two_digit_year(0), 2000);
        assert_eq!(expand_two_digit_year(68), 2068);
        assert_eq!(expand_two_digit_year(69), 1969);
    }

    #[test]
    fn test_render() {
        let dt = datetime!(2019-05-01 20:36:07);
        assert_eq!(render(&dt, OUT_US_SHORT).as_deref(), Some("05/01/19"));
        assert_eq!(render(&dt, OUT_EURO).as_deref(), Some("01/05/2019"));
        assert_eq!(render(&dt, OUT_ISO_DATETIME).as_deref(), Some("2019-05-01 20:36:07"));
    }
}
