//! # Julian Date ↔ UTC
//!
//! Phase instants come out of [`crate::lunar`] as Julian Dates. This module
//! places them on the chrono UTC time line and back.
//!
//! No ΔT (TT − UT) correction is applied: a JDE is read as if it were a UTC
//! Julian Date, which puts the result roughly a minute late for current
//! epochs. Leap seconds are likewise ignored, as chrono's `Utc` does.

use crate::lunar::PhaseError;
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Julian Date of 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Convert a Julian Date to a UTC instant, rounded to the millisecond.
///
/// ```
/// use moon_phase_lib::julian::jd_to_utc;
///
/// let utc = jd_to_utc(2451545.0).unwrap();
/// assert_eq!(utc.to_rfc3339(), "2000-01-01T12:00:00+00:00");
/// ```
pub fn jd_to_utc(jd: f64) -> Result<DateTime<Utc>, PhaseError> {
    let millis = ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return Err(PhaseError::DateOutOfRange(jd));
    }

    DateTime::from_timestamp_millis(millis as i64).ok_or(PhaseError::DateOutOfRange(jd))
}

/// Convert a UTC instant to a Julian Date.
pub fn utc_to_jd(utc: DateTime<Utc>) -> f64 {
    utc.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Calendar year with the elapsed part of the year as a fraction, e.g.
/// 2024-07-02T00:00Z is 2024.5.
pub fn decimal_year(utc: DateTime<Utc>) -> f64 {
    let year = utc.year();
    let start = year_start(year);
    let end = year_start(year + 1);

    match (start, end) {
        (Some(start), Some(end)) => {
            let elapsed = (utc - start).num_milliseconds() as f64;
            let length = (end - start).num_milliseconds() as f64;
            year as f64 + elapsed / length
        }
        // last representable year: fall back to a mean year length
        _ => year as f64 + utc.ordinal0() as f64 / 365.2425,
    }
}

fn year_start(year: i32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
