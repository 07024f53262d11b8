use chrono::NaiveDateTime;
use thiserror::Error;

/// Input layout of message timestamps, e.g. `2024-07-20 10:30`.
pub const MESSAGE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Korean short date layout used in chat rows, e.g. `24.07.20`.
pub const SHORT_DATE_FORMAT: &str = "%y.%m.%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("timestamp `{input}` does not match yyyy-MM-dd HH:mm")]
pub struct MalformedTimestampError {
    pub input: String,
}

/// Converts a message timestamp into the short date shown next to the last
/// message of a chat room. The input must match the layout exactly: zero
/// padded fields, a single space, no surrounding whitespace.
pub fn format_short_date(raw: &str) -> Result<String, MalformedTimestampError> {
    let malformed = || MalformedTimestampError {
        input: raw.to_owned(),
    };

    let parsed =
        NaiveDateTime::parse_from_str(raw, MESSAGE_TIMESTAMP_FORMAT).map_err(|_| malformed())?;

    // chrono accepts unpadded fields and extra whitespace.
    if parsed.format(MESSAGE_TIMESTAMP_FORMAT).to_string() != raw {
        return Err(malformed());
    }

    Ok(parsed.format(SHORT_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_korean_short_date() {
        assert_eq!(format_short_date("2024-07-20 10:30"), Ok("24.07.20".to_owned()));
    }

    #[test]
    fn keeps_leading_zeroes() {
        assert_eq!(format_short_date("2009-01-05 00:00"), Ok("09.01.05".to_owned()));
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(format_short_date(" 2024-07-20 10:30 ").is_err());
        assert!(format_short_date("2024-06-12 21:05\n").is_err());
    }

    #[test]
    fn rejects_missing_or_repeated_separator() {
        assert!(format_short_date("2024-07-2010:30").is_err());
        assert!(format_short_date("2024-07-20    10:30").is_err());
    }

    #[test]
    fn rejects_unpadded_fields() {
        let err = format_short_date("2024-7-2 1:3").expect_err("must fail");

        assert_eq!(err.input, "2024-7-2 1:3");
    }

    #[test]
    fn rejects_date_without_time() {
        let err = format_short_date("2024-07-20").expect_err("must fail");

        assert_eq!(err.input, "2024-07-20");
    }

    #[test]
    fn rejects_impossible_calendar_date() {
        assert!(format_short_date("2024-02-30 10:00").is_err());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(format_short_date("").is_err());
    }
}
