//! Gateway timestamp rendering.
//!
//! WorldNet expects `DD-MM-YYYY:HH:MM:SS:SSS` in every request `DATETIME`
//! element and renders responses the same way. Subscription start and end
//! dates use the date part alone.

use error_stack::ResultExt;
use time::{macros::format_description, OffsetDateTime, PrimitiveDateTime};

use crate::errors::{CustomResult, ParsingError};

const TIMESTAMP_FORMAT: &[time::format_description::FormatItem<'static>] = format_description!(
    "[day]-[month]-[year]:[hour]:[minute]:[second]:[subsecond digits:3]"
);

const DATE_FORMAT: &[time::format_description::FormatItem<'static>] =
    format_description!("[day]-[month]-[year]");

/// Current UTC wall-clock time without offset.
pub fn now() -> PrimitiveDateTime {
    let utc = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(utc.date(), utc.time())
}

/// Renders a timestamp in the gateway's `DD-MM-YYYY:HH:MM:SS:SSS` shape.
pub fn format_timestamp(date_time: PrimitiveDateTime) -> CustomResult<String, ParsingError> {
    date_time
        .format(&TIMESTAMP_FORMAT)
        .change_context(ParsingError::DateTimeFormattingError)
}

/// Renders a date in the gateway's `DD-MM-YYYY` shape.
pub fn format_date(date_time: PrimitiveDateTime) -> CustomResult<String, ParsingError> {
    date_time
        .format(&DATE_FORMAT)
        .change_context(ParsingError::DateTimeFormattingError)
}

/// Renders a bare date in the gateway's `DD-MM-YYYY` shape.
pub fn format_date_value(date: time::Date) -> CustomResult<String, ParsingError> {
    date.format(&DATE_FORMAT)
        .change_context(ParsingError::DateTimeFormattingError)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use time::macros::datetime;

    use super::*;

    #[test]
    fn timestamp_shape() {
        let rendered = format_timestamp(datetime!(2026-08-03 09:05:07.042)).unwrap();
        assert_eq!(rendered, "03-08-2026:09:05:07:042");
    }

    #[test]
    fn date_shape() {
        let rendered = format_date(datetime!(2026-12-31 23:59:59)).unwrap();
        assert_eq!(rendered, "31-12-2026");
    }
}
