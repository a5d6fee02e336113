//! Fallback date parsing
//!
//! The API is not consistent about timestamps: the documented format carries
//! a zone designator, some endpoints drop the zone, and the jobs endpoints use
//! a verbose `Thu Jan 02 03:04:05 UTC 2020` rendering. Each date is tried
//! against [`FALLBACK_CHAIN`] in order and the first successful parse wins.
//!
//! A date that matches nothing is absent, never an error: one bad timestamp
//! must not abort decoding of a feed holding hundreds of entities.

use chrono::{DateTime, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::raw::StructuralKind;

/// A calendar timestamp with second precision
///
/// Zoned inputs are normalized to UTC. Zone-less inputs keep their wall-clock
/// value as the API sent it.
pub type DateValue = NaiveDateTime;

/// One textual date encoding used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// Documented API format, ISO 8601 with a zone (`2020-01-02T03:04:05Z`)
    Primary,
    /// ISO-like local time without a zone (`2020-01-02T03:04:05`)
    IsoLocal,
    /// Verbose rendering with a literal UTC token (`Thu Jan 02 03:04:05 UTC 2020`)
    VerboseUtc,
}

/// Formats in trial order
pub const FALLBACK_CHAIN: [DateFormat; 3] = [
    DateFormat::Primary,
    DateFormat::IsoLocal,
    DateFormat::VerboseUtc,
];

/// `VerboseUtc` without its weekday token
const VERBOSE_UTC_AFTER_WEEKDAY: &str = "%b %d %H:%M:%S UTC %Y";

impl DateFormat {
    /// Short name used in logs and CLI output
    pub fn name(self) -> &'static str {
        match self {
            DateFormat::Primary => "primary",
            DateFormat::IsoLocal => "iso-local",
            DateFormat::VerboseUtc => "verbose-utc",
        }
    }

    /// strftime-style pattern of the format
    ///
    /// `Primary` also accepts `Z` in place of the offset and fractional
    /// seconds, which are dropped. `VerboseUtc` only requires its leading
    /// `%a` to be a weekday name; it need not match the date.
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::Primary => "%Y-%m-%dT%H:%M:%S%:z",
            DateFormat::IsoLocal => "%Y-%m-%dT%H:%M:%S",
            DateFormat::VerboseUtc => "%a %b %d %H:%M:%S UTC %Y",
        }
    }

    /// Parse `input` with this format alone
    pub fn parse(self, input: &str) -> Option<DateValue> {
        match self {
            DateFormat::Primary => DateTime::parse_from_rfc3339(input)
                .ok()
                .and_then(|zoned| zoned.naive_utc().with_nanosecond(0)),
            DateFormat::IsoLocal => NaiveDateTime::parse_from_str(input, self.pattern()).ok(),
            DateFormat::VerboseUtc => {
                let (weekday, rest) = input.split_once(' ')?;
                weekday.parse::<Weekday>().ok()?;
                NaiveDateTime::parse_from_str(rest, VERBOSE_UTC_AFTER_WEEKDAY).ok()
            }
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a date string through the fallback chain
pub fn parse_date(input: &str) -> Option<DateValue> {
    parse_date_with_format(input).map(|(value, _)| value)
}

/// Parse a date string and report which format matched
pub fn parse_date_with_format(input: &str) -> Option<(DateValue, DateFormat)> {
    let matched = FALLBACK_CHAIN
        .iter()
        .find_map(|format| format.parse(input).map(|value| (value, *format)));

    match matched {
        Some((_, format)) if format != DateFormat::Primary => {
            debug!(input, format = %format, "date parsed by fallback format");
        }
        None => debug!(input, "no date format matched, treating as absent"),
        _ => {}
    }

    matched
}

/// Serde adapter for date fields
///
/// Pair with `#[serde(default)]` so a missing field is absent too:
///
/// ```rust,ignore
/// #[serde(default, deserialize_with = "lenient_date")]
/// pub created_at: Option<DateValue>,
/// ```
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(text)) => parse_date(&text),
        None | Some(Value::Null) => None,
        Some(other) => {
            debug!(kind = %StructuralKind::of(&other), "non-string date, treating as absent");
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateValue {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_primary_format() {
        let parsed = parse_date_with_format("2020-01-02T03:04:05Z");
        assert_eq!(parsed, Some((at(2020, 1, 2, 3, 4, 5), DateFormat::Primary)));
    }

    #[test]
    fn test_primary_format_normalizes_offset() {
        let parsed = parse_date("2010-05-26T13:30:09-07:00");
        assert_eq!(parsed, Some(at(2010, 5, 26, 20, 30, 9)));
    }

    #[test]
    fn test_primary_format_drops_fraction() {
        let parsed = parse_date("2020-01-02T03:04:05.678Z");
        assert_eq!(parsed, Some(at(2020, 1, 2, 3, 4, 5)));
    }

    #[test]
    fn test_iso_local_fallback() {
        let parsed = parse_date_with_format("2020-01-02T03:04:05");
        assert_eq!(parsed, Some((at(2020, 1, 2, 3, 4, 5), DateFormat::IsoLocal)));
    }

    #[test]
    fn test_verbose_utc_fallback() {
        let parsed = parse_date_with_format("Thu Jan 02 03:04:05 UTC 2020");
        assert_eq!(
            parsed,
            Some((at(2020, 1, 2, 3, 4, 5), DateFormat::VerboseUtc))
        );
    }

    #[test]
    fn test_verbose_utc_ignores_weekday_mismatch() {
        assert_eq!(
            parse_date("Fri Jan 02 03:04:05 UTC 2020"),
            Some(at(2020, 1, 2, 3, 4, 5))
        );
        assert_eq!(parse_date("Xyz Jan 02 03:04:05 UTC 2020"), None);
        assert_eq!(parse_date("Jan 02 03:04:05 UTC 2020"), None);
    }

    #[test]
    fn test_exhausted_chain_is_absent() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2020/01/02 03:04:05 -0700"), None);
    }

    #[test]
    fn test_chain_order() {
        assert_eq!(
            FALLBACK_CHAIN,
            [
                DateFormat::Primary,
                DateFormat::IsoLocal,
                DateFormat::VerboseUtc
            ]
        );
    }

    #[derive(Debug, Deserialize)]
    struct Stamped {
        #[serde(default, deserialize_with = "lenient_date")]
        created_at: Option<DateValue>,
    }

    #[test]
    fn test_lenient_date_field() {
        let ok: Stamped = serde_json::from_value(json!({"created_at": "2020-01-02T03:04:05"})).unwrap();
        assert_eq!(ok.created_at, Some(at(2020, 1, 2, 3, 4, 5)));

        for raw in [
            json!({"created_at": "garbage"}),
            json!({"created_at": null}),
            json!({"created_at": 1577934245}),
            json!({"created_at": {"at": "2020-01-02T03:04:05Z"}}),
            json!({}),
        ] {
            let absent: Stamped = serde_json::from_value(raw).unwrap();
            assert_eq!(absent.created_at, None);
        }
    }
}
