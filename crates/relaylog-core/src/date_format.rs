//! Date format shared by every handler in a chain
//!
//! Patterns use single-letter tokens (`Y-m-d H:i:s`) rather than strftime
//! directives. The pattern is translated to a `chrono` format string once,
//! when the `DateFormat` is built.
//!
//! | letter | meaning                          |
//! |--------|----------------------------------|
//! | `d` `j`| day of month, padded / unpadded  |
//! | `D` `l`| weekday, short / full name       |
//! | `N`    | ISO weekday, 1 (Mon) to 7 (Sun)  |
//! | `m` `n`| month, padded / unpadded         |
//! | `M` `F`| month, short / full name         |
//! | `Y` `y`| year, four / two digits          |
//! | `H` `G`| hour 00-23, padded / unpadded    |
//! | `h` `g`| hour 01-12, padded / unpadded    |
//! | `i` `s`| minutes, seconds                 |
//! | `A` `a`| AM/PM, am/pm                     |
//! | `u` `v`| microseconds, milliseconds       |
//! | `e` `T`| `UTC`, or the offset (`+02:00`) for local and fixed-offset times |
//! | `P` `O`| offset `+02:00` / `+0200`        |
//! | `U`    | seconds since the Unix epoch     |
//!
//! A backslash escapes the next character; anything else is literal.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pattern used when the configuration does not set one
pub const DEFAULT_DATE_FORMAT: &str = "Y-m-d H:i:s";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DateFormat {
    pattern: String,
    strftime: String,
}

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let strftime = translate(&pattern);
        Self { pattern, strftime }
    }

    /// The pattern as configured
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render a timestamp
    pub fn format<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        at.format(&self.strftime).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl From<String> for DateFormat {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.pattern
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        let directive = match c {
            'd' => "%d",
            'j' => "%-d",
            'D' => "%a",
            'l' => "%A",
            'N' => "%u",
            'm' => "%m",
            'n' => "%-m",
            'M' => "%b",
            'F' => "%B",
            'Y' => "%Y",
            'y' => "%y",
            'H' => "%H",
            'G' => "%-H",
            'h' => "%I",
            'g' => "%-I",
            'i' => "%M",
            's' => "%S",
            'A' => "%p",
            'a' => "%P",
            'u' => "%6f",
            'v' => "%3f",
            'e' | 'T' => "%Z",
            'P' => "%:z",
            'O' => "%z",
            'U' => "%s",
            '\\' => {
                if let Some(next) = chars.next() {
                    push_literal(&mut out, next);
                }
                continue;
            }
            other => {
                push_literal(&mut out, other);
                continue;
            }
        };
        out.push_str(directive);
    }

    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    fn sample() -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_micro_opt(9, 5, 2, 123_456)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_default_pattern() {
        assert_eq!(DateFormat::default().format(&sample()), "2024-03-07 09:05:02");
    }

    #[test]
    fn test_unpadded_and_names() {
        let fmt = DateFormat::new("D, j M y g:i a");
        assert_eq!(fmt.format(&sample()), "Thu, 7 Mar 24 9:05 am");
        let fmt = DateFormat::new("l F n N");
        assert_eq!(fmt.format(&sample()), "Thursday March 3 4");
    }

    #[test]
    fn test_fractions_and_epoch() {
        assert_eq!(DateFormat::new("s.u").format(&sample()), "02.123456");
        assert_eq!(DateFormat::new("v").format(&sample()), "123");
        assert_eq!(
            DateFormat::new("U").format(&sample()),
            sample().timestamp().to_string()
        );
    }

    #[test]
    fn test_offsets() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = sample().with_timezone(&tz);
        assert_eq!(DateFormat::new("H P O").format(&at), "11 +02:00 +0200");
    }

    #[test]
    fn test_zone_letters_follow_offset_display() {
        assert_eq!(DateFormat::new("e T").format(&sample()), "UTC UTC");
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            DateFormat::new("e").format(&sample().with_timezone(&tz)),
            "+02:00"
        );
    }

    #[test]
    fn test_escapes_and_percent_are_literal() {
        let fmt = DateFormat::new("\\Y\\e\\a\\r: Y 100%");
        assert_eq!(fmt.format(&sample()), "Year: 2024 100%");
    }

    #[test]
    fn test_serde_round_trips_pattern() {
        let fmt: DateFormat = serde_json::from_str("\"d/m/Y\"").unwrap();
        assert_eq!(fmt.pattern(), "d/m/Y");
        assert_eq!(serde_json::to_string(&fmt).unwrap(), "\"d/m/Y\"");
    }
}
