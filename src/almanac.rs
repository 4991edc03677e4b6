//! # Phase Almanac
//!
//! Lists phase events on the calendar: every phase of a given year, the next
//! few phases after an instant, or the phase of one kind nearest an instant.
//!
//! ## Index generation
//! Candidate indices are produced as `quarters / 4`, so their fractional part
//! is always exactly 0, .25, .5 or .75 and classification never depends on
//! the configured tolerance beyond its range check. The year's approximate
//! index from [`synodic_index`] only seeds the search; a full lunation of margin is
//! scanned on each side because the seed can be off by several days.
//!
//! ## Time scale
//! Event dates are the Julian Dates from [`true_phase`] placed on the UTC
//! line without a ΔT correction (see [`crate::julian`]).

use crate::config::{Config, MAX_UPCOMING_COUNT};
use crate::julian::{decimal_year, jd_to_utc, utc_to_jd};
use crate::lunar::{
    phase_index, synodic_index, true_phase_with_tolerance, PhaseError, PhaseKind,
    FRACTION_TOLERANCE,
};
use crate::PhaseEvent;
use chrono::{DateTime, Datelike, Utc};
use tracing::debug;

/// Phase listings driven by [`Config`] settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Almanac {
    fraction_tolerance: f64,
    upcoming_count: usize,
}

impl Default for Almanac {
    fn default() -> Self {
        Almanac {
            fraction_tolerance: FRACTION_TOLERANCE,
            upcoming_count: 4,
        }
    }
}

impl Almanac {
    /// Build from settings. `upcoming_count` is capped at [`MAX_UPCOMING_COUNT`];
    /// an out-of-range tolerance surfaces as an error from every computation.
    pub fn from_config(config: &Config) -> Self {
        Almanac {
            fraction_tolerance: config.phases.fraction_tolerance,
            upcoming_count: config.almanac.upcoming_count.min(MAX_UPCOMING_COUNT),
        }
    }

    /// Compute the event for synodic index `k`.
    ///
    /// ```
    /// use moon_phase_lib::almanac::Almanac;
    /// use moon_phase_lib::lunar::PhaseKind;
    ///
    /// let event = Almanac::default().event(300.0).unwrap();
    /// assert_eq!(event.kind, PhaseKind::NewMoon);
    /// assert_eq!(event.utc.format("%Y-%m-%d").to_string(), "2024-04-08");
    /// ```
    pub fn event(&self, k: f64) -> Result<PhaseEvent, PhaseError> {
        let kind = PhaseKind::classify(k, self.fraction_tolerance)?;
        let jd = true_phase_with_tolerance(k, self.fraction_tolerance)?;
        let utc = jd_to_utc(jd)?;
        Ok(PhaseEvent { kind, k, jd, utc })
    }

    /// Every phase whose UTC date falls inside calendar `year`, oldest first.
    pub fn year(&self, year: i32) -> Result<Vec<PhaseEvent>, PhaseError> {
        let first = quarter_floor(synodic_index(year as f64)) - 4;
        let last = quarter_floor(synodic_index(year as f64 + 1.0)) + 4;

        let mut events = Vec::with_capacity(52);
        for quarter in first..=last {
            let event = self.event(quarter as f64 / 4.0)?;
            if event.utc.year() == year {
                events.push(event);
            }
        }

        debug!(year, count = events.len(), "listed phases for year");
        Ok(events)
    }

    /// The next `upcoming_count` phases at or after `now`.
    /// If `now` is `None`, fall back to `Utc::now()`.
    pub fn upcoming(&self, now: Option<DateTime<Utc>>) -> Result<Vec<PhaseEvent>, PhaseError> {
        let now = now.unwrap_or_else(Utc::now);
        let now_jd = utc_to_jd(now);

        let mut quarter = quarter_floor(synodic_index(decimal_year(now))) - 4;
        let mut events = Vec::new();
        while events.len() < self.upcoming_count {
            let event = self.event(quarter as f64 / 4.0)?;
            if event.jd >= now_jd {
                events.push(event);
            }
            quarter += 1;
        }

        Ok(events)
    }

    /// The `kind` phase closest in time to `at`.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use moon_phase_lib::almanac::Almanac;
    /// use moon_phase_lib::lunar::PhaseKind;
    ///
    /// let at = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
    /// let full = Almanac::default().nearest(at, PhaseKind::FullMoon).unwrap();
    /// assert_eq!(full.utc.format("%Y-%m-%d").to_string(), "2024-03-25");
    /// ```
    pub fn nearest(&self, at: DateTime<Utc>, kind: PhaseKind) -> Result<PhaseEvent, PhaseError> {
        let at_jd = utc_to_jd(at);
        let seed = phase_index(decimal_year(at), kind);

        let mut best = self.event(seed)?;
        for offset in [-2.0, -1.0, 1.0, 2.0] {
            let candidate = self.event(seed + offset)?;
            if (candidate.jd - at_jd).abs() < (best.jd - at_jd).abs() {
                best = candidate;
            }
        }

        Ok(best)
    }
}

/// Largest quarter count `q` with `q / 4 <= k`.
fn quarter_floor(k: f64) -> i64 {
    (k * 4.0).floor() as i64
}
