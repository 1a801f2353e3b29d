//! UTC calendar instant with sub-second precision.
//!
//! `UtcTime` is the instant type the chart engine accepts. Timestamps and
//! fixed UTC offsets are parsed and resolved through chrono; named time
//! zones are the caller's business. By the time a value reaches the engine
//! it is UTC.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, civil_from_day_number, days_in_month};

/// Microseconds in one day.
const MICROS_PER_DAY: f64 = SECONDS_PER_DAY * 1e6;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check every field against the calendar.
    ///
    /// `second` may reach 60.x to admit a leap second.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidCalendar("month must be in 1..=12"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidCalendar("day is outside the month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidCalendar("hour must be in 0..=23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidCalendar("minute must be in 0..=59"));
        }
        if !self.second.is_finite() || !(0.0..61.0).contains(&self.second) {
            return Err(TimeError::InvalidCalendar("second must be in [0, 61)"));
        }
        Ok(())
    }

    /// Julian Date (UT) of this instant.
    pub fn to_jd_ut(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar instant of a Julian Date (UT), rounded to the microsecond.
    pub fn from_jd_ut(jd_ut: f64) -> Self {
        let shifted = jd_ut + 0.5;
        let mut day_number = shifted.floor();
        let mut micros = ((shifted - day_number) * MICROS_PER_DAY).round();
        if micros >= MICROS_PER_DAY {
            day_number += 1.0;
            micros -= MICROS_PER_DAY;
        }
        let (year, month, day) = civil_from_day_number(day_number);

        let micros = micros as u64;
        let hour = (micros / 3_600_000_000) as u32;
        let minute = ((micros / 60_000_000) % 60) as u32;
        let second = (micros % 60_000_000) as f64 / 1e6;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Apply a fixed UTC offset, turning local civil time into UTC.
    ///
    /// `offset_minutes` is the zone's offset east of Greenwich
    /// (`-180` for UTC−03:00).
    pub fn from_local(local: UtcTime, offset_minutes: i32) -> Result<Self, TimeError> {
        local.validate()?;
        let tz = FixedOffset::east_opt(offset_minutes.saturating_mul(60))
            .ok_or(TimeError::InvalidCalendar("UTC offset out of range"))?;
        resolve_local(local.to_naive()?, tz)
    }

    /// Parse a local civil timestamp and an offset such as `-03:00`.
    ///
    /// Accepts the same grammar as [`FromStr`]. A trailing `Z` already names
    /// UTC, so it is only accepted together with a zero offset.
    pub fn parse_local(date: &str, offset: &str) -> Result<Self, TimeError> {
        let (naive, zulu) = parse_civil(date)?;
        let tz = parse_utc_offset(offset)?;
        if zulu && tz.local_minus_utc() != 0 {
            return Err(TimeError::Parse {
                input: date.to_string(),
                reason: "a trailing Z needs a zero UTC offset",
            });
        }
        resolve_local(naive, tz)
    }

    fn to_naive(&self) -> Result<NaiveDateTime, TimeError> {
        let whole = self.second.floor();
        let mut nanos = (((self.second - whole) * 1e9).round() as u32).min(999_999_999);
        let mut sec = whole as u32;
        if sec >= 60 {
            // chrono spells a leap second as 59 s plus a second of nanos.
            sec = 59;
            nanos += 1_000_000_000;
        }
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_nano_opt(self.hour, self.minute, sec, nanos))
            .ok_or(TimeError::InvalidCalendar("date is not representable"))
    }
}

fn resolve_local(naive: NaiveDateTime, tz: FixedOffset) -> Result<UtcTime, TimeError> {
    tz.from_local_datetime(&naive)
        .single()
        .map(|dt| UtcTime::from(dt.with_timezone(&Utc)))
        .ok_or(TimeError::InvalidCalendar("local time out of range"))
}

const TIMESTAMP_GRAMMAR: &str = "expected YYYY-MM-DDThh:mm[:ss[.fff]][Z]";

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Civil datetime of a timestamp, and whether it ended in `Z`.
fn parse_civil(s: &str) -> Result<(NaiveDateTime, bool), TimeError> {
    let body = s.trim();
    let (body, zulu) = match body.strip_suffix(['Z', 'z']) {
        Some(rest) => (rest, true),
        None => (body, false),
    };
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(body, fmt).ok())
        .map(|naive| (naive, zulu))
        .ok_or_else(|| TimeError::Parse {
            input: s.to_string(),
            reason: TIMESTAMP_GRAMMAR,
        })
}

/// Parse a fixed UTC offset: `+hh:mm`, `-hh:mm`, `+hhmm`, `+hh` or `Z`.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset, TimeError> {
    let fail = |reason| TimeError::Parse {
        input: s.to_string(),
        reason,
    };
    let body = s.trim();
    if body.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(|| fail("zero offset"));
    }
    let (sign, rest) = if let Some(rest) = body.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = body.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(fail("offset must start with + or -"));
    };
    let (hh, mm) = match rest.split_once(':') {
        Some(parts) => parts,
        None if rest.len() == 4 && rest.is_ascii() => rest.split_at(2),
        None => (rest, "0"),
    };
    let hours: i32 = hh.parse().map_err(|_| fail("bad offset hours"))?;
    let minutes: i32 = mm.parse().map_err(|_| fail("bad offset minutes"))?;
    if !(0..=14).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(fail("offset out of range"));
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| fail("offset out of range"))
}

impl From<DateTime<Utc>> for UtcTime {
    /// Keeps a chrono leap second as `second` in [60, 61).
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
        }
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm[:ss[.fff]][Z]`; a space may replace the `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (naive, _) = parse_civil(s)?;
        Ok(Self::from(Utc.from_utc_datetime(&naive)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn parse_full_timestamp() {
        let t: UtcTime = "1879-03-14T10:30:00Z".parse().unwrap();
        assert_eq!(t, UtcTime::new(1879, 3, 14, 10, 30, 0.0));
    }

    #[test]
    fn parse_without_seconds_or_zone() {
        let t: UtcTime = "1973-06-02T06:55".parse().unwrap();
        assert_eq!(t, UtcTime::new(1973, 6, 2, 6, 55, 0.0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("1973/06/02".parse::<UtcTime>().is_err());
        assert!("1973-13-02T00:00:00Z".parse::<UtcTime>().is_err());
        assert!("1973-02-30T00:00:00Z".parse::<UtcTime>().is_err());
    }

    #[test]
    fn validate_rejects_nan_second() {
        let t = UtcTime::new(2000, 1, 1, 0, 0, f64::NAN);
        assert!(t.validate().is_err());
    }

    #[test]
    fn jd_roundtrip_to_microsecond() {
        let t = UtcTime::new(1973, 6, 2, 6, 55, 12.25);
        let back = UtcTime::from_jd_ut(t.to_jd_ut());
        assert_eq!((back.year, back.month, back.day), (1973, 6, 2));
        assert_eq!((back.hour, back.minute), (6, 55));
        assert!((back.second - 12.25).abs() < 1e-4, "second = {}", back.second);
    }

    #[test]
    fn end_of_day_does_not_produce_second_60() {
        let jd = UtcTime::new(1999, 12, 31, 0, 0, 0.0).to_jd_ut() + 1.0 - 1e-12;
        let t = UtcTime::from_jd_ut(jd);
        assert_eq!((t.year, t.month, t.day, t.hour), (2000, 1, 1, 0));
    }

    #[test]
    fn local_offset_moves_to_utc() {
        let local = UtcTime::new(1973, 6, 2, 3, 55, 0.0);
        let utc = UtcTime::from_local(local, -180).unwrap();
        assert_eq!((utc.day, utc.hour, utc.minute), (2, 6, 55));
    }

    #[test]
    fn local_offset_crosses_midnight() {
        let local = UtcTime::new(2000, 1, 1, 1, 30, 0.0);
        let utc = UtcTime::from_local(local, 330).unwrap();
        assert_eq!(utc, UtcTime::new(1999, 12, 31, 20, 0, 0.0));
    }

    #[test]
    fn parse_local_matches_from_local() {
        let parsed = UtcTime::parse_local("1973-06-02T03:55", "-03:00").unwrap();
        let built = UtcTime::from_local(UtcTime::new(1973, 6, 2, 3, 55, 0.0), -180).unwrap();
        assert_eq!(parsed, built);
        assert_eq!(parsed, UtcTime::new(1973, 6, 2, 6, 55, 0.0));
    }

    #[test]
    fn parse_local_accepts_zulu_only_at_zero_offset() {
        let t = UtcTime::parse_local("1879-03-14T10:30:00Z", "+00:00").unwrap();
        assert_eq!(t, "1879-03-14T10:30:00Z".parse::<UtcTime>().unwrap());
        assert!(UtcTime::parse_local("1879-03-14T10:30:00Z", "-03:00").is_err());
    }

    #[test]
    fn parse_fractional_and_space_separated() {
        let t: UtcTime = "1973-06-02 06:55:12.25".parse().unwrap();
        assert_eq!(t, UtcTime::new(1973, 6, 2, 6, 55, 12.25));
    }

    #[test]
    fn parse_keeps_leap_second() {
        let t: UtcTime = "1998-12-31T23:59:60.5Z".parse().unwrap();
        assert_eq!((t.hour, t.minute), (23, 59));
        assert!((t.second - 60.5).abs() < 1e-9, "second = {}", t.second);
    }

    #[test]
    fn offsets() {
        let secs = |s| parse_utc_offset(s).map(|o| o.local_minus_utc());
        assert_eq!(secs("-03:00"), Ok(-10_800));
        assert_eq!(secs("+0530"), Ok(19_800));
        assert_eq!(secs("+09"), Ok(32_400));
        assert_eq!(secs("Z"), Ok(0));
        assert!(secs("03:00").is_err());
        assert!(secs("+25:00").is_err());
        assert!(secs("+05:60").is_err());
    }

    #[test]
    fn from_chrono() {
        let dt = Utc.with_ymd_and_hms(1879, 3, 14, 10, 30, 0).unwrap();
        let t = UtcTime::from(dt);
        assert_eq!(t, UtcTime::new(1879, 3, 14, 10, 30, 0.0));
    }
}
