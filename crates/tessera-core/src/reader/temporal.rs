use crate::{
    error::Error,
    payload::{Boxed, Payload, RawView, literal},
    reader::{NumericTarget, ValueReader, as_is},
    type_key::RawType,
};
use time::{
    Date, OffsetDateTime,
    format_description::well_known::{Iso8601, Rfc3339},
};

// Julian day number of 1970-01-01.
const UNIX_EPOCH_JULIAN_DAY: i32 = 2_440_588;

///
/// DateReader
///
/// Calendar dates. Numbers count days since 1970-01-01, a timestamp keeps
/// its date, and text must be an ISO 8601 date (`YYYY-MM-DD`).
///

#[derive(Clone, Copy, Debug, Default)]
pub struct DateReader;

impl ValueReader for DateReader {
    fn is_compatible(&self, target: RawType) -> bool {
        target.is::<Date>()
    }

    fn read(&self, target: RawType, value: &dyn Payload) -> Result<Boxed, Error> {
        if let Some(same) = as_is(target, value) {
            return Ok(same);
        }
        if let Some(timestamp) = value.as_any().downcast_ref::<OffsetDateTime>() {
            return Ok(Box::new(timestamp.date()));
        }

        let date = match value.view() {
            RawView::Number(number) => i32::from_number(number)
                .and_then(|days| days.checked_add(UNIX_EPOCH_JULIAN_DAY))
                .and_then(|day| Date::from_julian_day(day).ok())
                .ok_or_else(|| Error::malformed(target, number.to_string(), "out of range"))?,
            _ => {
                let text = literal(value);
                Date::parse(&text, &Iso8601::DATE)
                    .map_err(|err| Error::malformed(target, text.clone(), err))?
            }
        };

        Ok(Box::new(date))
    }
}

///
/// DateTimeReader
///
/// UTC-offset timestamps. Numbers are Unix seconds, a date reads as its
/// midnight in UTC, and text must be RFC 3339.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct DateTimeReader;

impl ValueReader for DateTimeReader {
    fn is_compatible(&self, target: RawType) -> bool {
        target.is::<OffsetDateTime>()
    }

    fn read(&self, target: RawType, value: &dyn Payload) -> Result<Boxed, Error> {
        if let Some(same) = as_is(target, value) {
            return Ok(same);
        }
        if let Some(date) = value.as_any().downcast_ref::<Date>() {
            return Ok(Box::new(date.midnight().assume_utc()));
        }

        let timestamp = match value.view() {
            RawView::Number(number) => i64::from_number(number)
                .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
                .ok_or_else(|| Error::malformed(target, number.to_string(), "out of range"))?,
            _ => {
                let text = literal(value);
                OffsetDateTime::parse(&text, &Rfc3339)
                    .map_err(|err| Error::malformed(target, text.clone(), err))?
            }
        };

        Ok(Box::new(timestamp))
    }
}
