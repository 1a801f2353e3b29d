//! Time handling for chart computation.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions (Gregorian and Julian calendars)
//! - `UtcTime`, the validated UTC calendar instant accepted by the engine
//! - A Delta-T model for the UT → TT step needed by the analytic ephemeris

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod utc_time;

pub use delta_t::{decimal_year, delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month,
    is_leap_year, jd_to_calendar, jd_to_centuries,
};
pub use utc_time::{UtcTime, parse_utc_offset};
