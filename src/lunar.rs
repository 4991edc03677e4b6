//! Instants of the principal lunar phases (Meeus, *Astronomical Algorithms*, ch. 49).
//!
//! A phase is addressed by its synodic index `k`: the integer part counts
//! lunations since the New Moon of 2000 January 6, the fractional part picks
//! the phase inside that lunation (0 = New, .25 = First Quarter, .5 = Full,
//! .75 = Last Quarter).
//!
//! Over 1900–2100 the results stay well inside a minute of the full theory.
//! The returned Julian Day is in Dynamical Time.
//!
//! The periodic corrections are kept as ordered tables and summed in table
//! order so results are reproducible to the last bit.

use crate::angle::reduced_radians;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// Default slack when matching the fractional part of `k` to a phase.
pub const FRACTION_TOLERANCE: f64 = 1e-9;

/// Tolerances must stay below 1/8, or one fraction could match two phases.
pub const MAX_FRACTION_TOLERANCE: f64 = 0.125;

/// Mean synodic months per Julian century, used to turn `k` into `T`.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

/// Synodic months per tropical year.
const LUNATIONS_PER_YEAR: f64 = 12.3685;

/// Errors raised while computing a phase or converting its date.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PhaseError {
    /// The fractional part of `k` is not 0, 0.25, 0.5 or 0.75.
    #[error("invalid phase fraction {fraction} in synodic index {k}")]
    InvalidPhaseFraction { k: f64, fraction: f64 },

    /// A classification tolerance outside `[0, MAX_FRACTION_TOLERANCE)`.
    #[error("phase fraction tolerance {0} must be finite and in [0, 0.125)")]
    InvalidTolerance(f64),

    /// A Julian Date that has no representable UTC instant.
    #[error("Julian date {0} is outside the supported calendar range")]
    DateOutOfRange(f64),
}

/// The four principal phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl PhaseKind {
    /// All phases in the order they occur within a lunation.
    pub const ALL: [PhaseKind; 4] = [
        PhaseKind::NewMoon,
        PhaseKind::FirstQuarter,
        PhaseKind::FullMoon,
        PhaseKind::LastQuarter,
    ];

    /// Fractional part of `k` that selects this phase.
    pub fn fraction(self) -> f64 {
        match self {
            PhaseKind::NewMoon => 0.0,
            PhaseKind::FirstQuarter => 0.25,
            PhaseKind::FullMoon => 0.5,
            PhaseKind::LastQuarter => 0.75,
        }
    }

    /// Work out which phase a synodic index refers to.
    ///
    /// The fractional part is taken as `k - floor(k)` and compared against the
    /// four phase fractions with `tolerance` of slack. A fraction that rounds
    /// up to 1.0 (tiny negative `k`) counts as a New Moon. A `tolerance`
    /// that is not finite or not below [`MAX_FRACTION_TOLERANCE`] is refused.
    ///
    /// ```
    /// use moon_phase_lib::lunar::{PhaseKind, FRACTION_TOLERANCE};
    ///
    /// assert_eq!(PhaseKind::classify(-0.25, FRACTION_TOLERANCE), Ok(PhaseKind::LastQuarter));
    /// assert!(PhaseKind::classify(12.1, FRACTION_TOLERANCE).is_err());
    /// ```
    pub fn classify(k: f64, tolerance: f64) -> Result<PhaseKind, PhaseError> {
        if !(0.0..MAX_FRACTION_TOLERANCE).contains(&tolerance) {
            return Err(PhaseError::InvalidTolerance(tolerance));
        }

        let mut fraction = k - k.floor();
        if fraction < 0.0 {
            fraction += 1.0;
        }

        let near = |target: f64| (fraction - target).abs() <= tolerance;
        if near(0.0) || near(1.0) {
            Ok(PhaseKind::NewMoon)
        } else if near(0.25) {
            Ok(PhaseKind::FirstQuarter)
        } else if near(0.5) {
            Ok(PhaseKind::FullMoon)
        } else if near(0.75) {
            Ok(PhaseKind::LastQuarter)
        } else {
            Err(PhaseError::InvalidPhaseFraction { k, fraction })
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhaseKind::NewMoon => "New Moon",
            PhaseKind::FirstQuarter => "First Quarter",
            PhaseKind::FullMoon => "Full Moon",
            PhaseKind::LastQuarter => "Last Quarter",
        };
        f.write_str(name)
    }
}

/// Approximate number of lunations between 2000.0 and `year`.
///
/// This is only a seed; see [`phase_index`] for a usable index.
pub fn synodic_index(year: f64) -> f64 {
    LUNATIONS_PER_YEAR * (year - 2000.0)
}

/// Index of the `kind` phase closest to the fractional calendar `year`.
///
/// ```
/// use moon_phase_lib::lunar::{phase_index, PhaseKind};
///
/// assert_eq!(phase_index(2000.0, PhaseKind::NewMoon), 0.0);
/// assert_eq!(phase_index(2044.0, PhaseKind::FirstQuarter), 544.25);
/// ```
pub fn phase_index(year: f64, kind: PhaseKind) -> f64 {
    let fraction = kind.fraction();
    (synodic_index(year) - fraction).round() + fraction
}

/// Mean phase instant (JDE) for index `k`, before periodic corrections.
pub fn mean_phase(k: f64) -> f64 {
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    2451550.09766 + 29.530588861 * k + 0.00015437 * t2 - 0.000000150 * t3 + 0.00000000073 * t4
}

/// True phase instant (JDE) for index `k`.
///
/// ```
/// use moon_phase_lib::lunar::true_phase;
///
/// // New Moon of 1977 February 18
/// let jd = true_phase(-283.0).unwrap();
/// assert!((jd - 2443192.65118).abs() < 1e-5);
/// ```
pub fn true_phase(k: f64) -> Result<f64, PhaseError> {
    true_phase_with_tolerance(k, FRACTION_TOLERANCE)
}

/// [`true_phase`] with a caller-chosen tolerance on the phase fraction.
pub fn true_phase_with_tolerance(k: f64, tolerance: f64) -> Result<f64, PhaseError> {
    let kind = PhaseKind::classify(k, tolerance)?;
    let args = Arguments::new(k);

    let mut jd = mean_phase(k);
    jd += match kind {
        PhaseKind::NewMoon => args.series(&NEW_MOON),
        PhaseKind::FullMoon => args.series(&FULL_MOON),
        PhaseKind::FirstQuarter | PhaseKind::LastQuarter => args.series(&QUARTER),
    };

    match kind {
        PhaseKind::FirstQuarter => jd += args.quarter_correction(),
        PhaseKind::LastQuarter => jd -= args.quarter_correction(),
        PhaseKind::NewMoon | PhaseKind::FullMoon => {}
    }

    let planetary = planetary_correction(k, args.t2);
    trace!(k, planetary, "planetary correction");
    jd += planetary;

    debug!(k, phase = %kind, jd, "computed true phase");
    Ok(jd)
}

/// One periodic term: `coefficient * E^e_power * sin(argument)`, where the
/// argument is `mdash·M′ + m·M + f·F + omega·Ω`.
struct Term {
    coefficient: f64,
    e_power: u8,
    mdash: f64,
    m: f64,
    f: f64,
    omega: f64,
}

const fn term(coefficient: f64, e_power: u8, mdash: f64, m: f64, f: f64, omega: f64) -> Term {
    Term {
        coefficient,
        e_power,
        mdash,
        m,
        f,
        omega,
    }
}

#[rustfmt::skip]
static NEW_MOON: [Term; 25] = [
    //     coeff     E   M'    M     F     Ω
    term(-0.40720, 0,  1.0,  0.0,  0.0, 0.0),
    term( 0.17241, 1,  0.0,  1.0,  0.0, 0.0),
    term( 0.01608, 0,  2.0,  0.0,  0.0, 0.0),
    term( 0.01039, 0,  0.0,  0.0,  2.0, 0.0),
    term( 0.00739, 1,  1.0, -1.0,  0.0, 0.0),
    term(-0.00514, 1,  1.0,  1.0,  0.0, 0.0),
    term( 0.00208, 2,  0.0,  2.0,  0.0, 0.0),
    term(-0.00111, 0,  1.0,  0.0, -2.0, 0.0),
    term(-0.00057, 0,  1.0,  0.0,  2.0, 0.0),
    term( 0.00056, 1,  2.0,  1.0,  0.0, 0.0),
    term(-0.00042, 0,  3.0,  0.0,  0.0, 0.0),
    term( 0.00042, 1,  0.0,  1.0,  2.0, 0.0),
    term( 0.00038, 1,  0.0,  1.0, -2.0, 0.0),
    term(-0.00024, 1,  2.0, -1.0,  0.0, 0.0),
    term(-0.00017, 0,  0.0,  0.0,  0.0, 1.0),
    term(-0.00007, 0,  1.0,  2.0,  0.0, 0.0),
    term( 0.00004, 0,  2.0,  0.0, -2.0, 0.0),
    term( 0.00004, 0,  0.0,  3.0,  0.0, 0.0),
    term( 0.00003, 0,  1.0,  1.0, -2.0, 0.0),
    term( 0.00003, 0,  2.0,  0.0,  2.0, 0.0),
    term(-0.00003, 0,  1.0,  1.0,  2.0, 0.0),
    term( 0.00003, 0,  1.0, -1.0,  2.0, 0.0),
    term(-0.00002, 0,  1.0, -1.0, -2.0, 0.0),
    term(-0.00002, 0,  3.0,  1.0,  0.0, 0.0),
    term( 0.00002, 0,  4.0,  0.0,  0.0, 0.0),
];

#[rustfmt::skip]
static FULL_MOON: [Term; 25] = [
    term(-0.40614, 0,  1.0,  0.0,  0.0, 0.0),
    term( 0.17302, 1,  0.0,  1.0,  0.0, 0.0),
    term( 0.01614, 0,  2.0,  0.0,  0.0, 0.0),
    term( 0.01043, 0,  0.0,  0.0,  2.0, 0.0),
    term( 0.00734, 1,  1.0, -1.0,  0.0, 0.0),
    term(-0.00514, 1,  1.0,  1.0,  0.0, 0.0),
    term( 0.00209, 2,  0.0,  2.0,  0.0, 0.0),
    term(-0.00111, 0,  1.0,  0.0, -2.0, 0.0),
    term(-0.00057, 0,  1.0,  0.0,  2.0, 0.0),
    term( 0.00056, 1,  2.0,  1.0,  0.0, 0.0),
    term(-0.00042, 0,  3.0,  0.0,  0.0, 0.0),
    term( 0.00042, 1,  0.0,  1.0,  2.0, 0.0),
    term( 0.00038, 1,  0.0,  1.0, -2.0, 0.0),
    term(-0.00024, 1,  2.0, -1.0,  0.0, 0.0),
    term(-0.00017, 0,  0.0,  0.0,  0.0, 1.0),
    term(-0.00007, 0,  1.0,  2.0,  0.0, 0.0),
    term( 0.00004, 0,  2.0,  0.0, -2.0, 0.0),
    term( 0.00004, 0,  0.0,  3.0,  0.0, 0.0),
    term( 0.00003, 0,  1.0,  1.0, -2.0, 0.0),
    term( 0.00003, 0,  2.0,  0.0,  2.0, 0.0),
    term(-0.00003, 0,  1.0,  1.0,  2.0, 0.0),
    term( 0.00003, 0,  1.0, -1.0,  2.0, 0.0),
    term(-0.00002, 0,  1.0, -1.0, -2.0, 0.0),
    term(-0.00002, 0,  3.0,  1.0,  0.0, 0.0),
    term( 0.00002, 0,  4.0,  0.0,  0.0, 0.0),
];

#[rustfmt::skip]
static QUARTER: [Term; 25] = [
    term(-0.62801, 0,  1.0,  0.0,  0.0, 0.0),
    term( 0.17172, 1,  0.0,  1.0,  0.0, 0.0),
    term(-0.01183, 1,  1.0,  1.0,  0.0, 0.0),
    term( 0.00862, 0,  2.0,  0.0,  0.0, 0.0),
    term( 0.00804, 0,  0.0,  0.0,  2.0, 0.0),
    term( 0.00454, 1,  1.0, -1.0,  0.0, 0.0),
    term( 0.00204, 2,  0.0,  2.0,  0.0, 0.0),
    term(-0.00180, 0,  1.0,  0.0, -2.0, 0.0),
    term(-0.00070, 0,  1.0,  0.0,  2.0, 0.0),
    term(-0.00040, 0,  3.0,  0.0,  0.0, 0.0),
    term(-0.00034, 1,  2.0, -1.0,  0.0, 0.0),
    term( 0.00032, 1,  0.0,  1.0,  2.0, 0.0),
    term( 0.00032, 1,  0.0,  1.0, -2.0, 0.0),
    term(-0.00028, 2,  1.0,  2.0,  0.0, 0.0),
    term( 0.00027, 1,  2.0,  1.0,  0.0, 0.0),
    term(-0.00017, 0,  0.0,  0.0,  0.0, 1.0),
    term(-0.00005, 0,  1.0, -1.0, -2.0, 0.0),
    term( 0.00004, 0,  2.0,  0.0,  2.0, 0.0),
    term(-0.00004, 0,  1.0,  1.0,  2.0, 0.0),
    term( 0.00004, 0,  1.0, -2.0,  0.0, 0.0),
    term( 0.00003, 0,  1.0,  1.0, -2.0, 0.0),
    term( 0.00003, 0,  0.0,  3.0,  0.0, 0.0),
    term( 0.00002, 0,  2.0,  0.0, -2.0, 0.0),
    term( 0.00002, 0,  1.0, -1.0,  2.0, 0.0),
    term(-0.00002, 0,  3.0,  1.0,  0.0, 0.0),
];

/// Cosine terms of the quarter correction `W`, after its constant 0.00306.
#[rustfmt::skip]
static QUARTER_W: [Term; 5] = [
    term(-0.00038, 1,  0.0,  1.0,  0.0, 0.0),
    term( 0.00026, 0,  1.0,  0.0,  0.0, 0.0),
    term(-0.00002, 0,  1.0, -1.0,  0.0, 0.0),
    term( 0.00002, 0,  1.0,  1.0,  0.0, 0.0),
    term( 0.00002, 0,  0.0,  0.0,  2.0, 0.0),
];

/// Planetary argument `A_i = base + rate·k + t2·T²` (degrees) and the
/// amplitude of `sin(A_i)` in days.
struct PlanetaryTerm {
    base: f64,
    rate: f64,
    t2: f64,
    coefficient: f64,
}

const fn planetary(base: f64, rate: f64, t2: f64, coefficient: f64) -> PlanetaryTerm {
    PlanetaryTerm {
        base,
        rate,
        t2,
        coefficient,
    }
}

#[rustfmt::skip]
static PLANETARY: [PlanetaryTerm; 14] = [
    planetary(299.77,  0.107408, -0.009173, 0.000325),
    planetary(251.88,  0.016321,  0.0,      0.000165),
    planetary(251.83, 26.651886,  0.0,      0.000164),
    planetary(349.42, 36.412478,  0.0,      0.000126),
    planetary( 84.66, 18.206239,  0.0,      0.000110),
    planetary(141.74, 53.303771,  0.0,      0.000062),
    planetary(207.14,  2.453732,  0.0,      0.000060),
    planetary(154.84,  7.306860,  0.0,      0.000056),
    planetary( 34.52, 27.261239,  0.0,      0.000047),
    planetary(207.19,  0.121824,  0.0,      0.000042),
    planetary(291.34,  1.844379,  0.0,      0.000040),
    planetary(161.72, 24.198154,  0.0,      0.000037),
    planetary(239.56, 25.513099,  0.0,      0.000035),
    planetary(331.55,  3.592518,  0.0,      0.000023),
];

/// Sum of the fourteen planetary terms, applied to every phase.
fn planetary_correction(k: f64, t2: f64) -> f64 {
    PLANETARY.iter().fold(0.0, |acc, p| {
        let a = if p.t2 == 0.0 {
            reduced_radians(p.base + p.rate * k)
        } else {
            reduced_radians(p.base + p.rate * k + p.t2 * t2)
        };
        acc + p.coefficient * a.sin()
    })
}

/// Fundamental arguments (radians) and eccentricity factors at index `k`.
struct Arguments {
    t2: f64,
    e: f64,
    e2: f64,
    /// Sun's mean anomaly
    m: f64,
    /// Moon's mean anomaly
    mdash: f64,
    /// Moon's argument of latitude
    f: f64,
    /// Longitude of the ascending node
    omega: f64,
}

impl Arguments {
    fn new(k: f64) -> Self {
        let t = k / LUNATIONS_PER_CENTURY;
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;

        let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

        let m = reduced_radians(2.5534 + 29.10535670 * k - 0.0000014 * t2 - 0.00000011 * t3);
        let mdash = reduced_radians(
            201.5643 + 385.81693528 * k + 0.0107582 * t2 + 0.00001238 * t3 - 0.000000058 * t4,
        );
        let f = reduced_radians(
            160.7108 + 390.67050284 * k - 0.0016118 * t2 - 0.00000227 * t3 + 0.00000001 * t4,
        );
        let omega = reduced_radians(124.7746 - 1.56375588 * k + 0.0020672 * t2 + 0.00000215 * t3);

        Arguments {
            t2,
            e,
            e2: e * e,
            m,
            mdash,
            f,
            omega,
        }
    }

    fn angle(&self, term: &Term) -> f64 {
        term.mdash * self.mdash + term.m * self.m + term.f * self.f + term.omega * self.omega
    }

    fn scale(&self, term: &Term) -> f64 {
        match term.e_power {
            0 => term.coefficient,
            1 => term.coefficient * self.e,
            _ => term.coefficient * self.e2,
        }
    }

    fn series(&self, terms: &[Term]) -> f64 {
        terms
            .iter()
            .fold(0.0, |acc, term| acc + self.scale(term) * self.angle(term).sin())
    }

    /// The `W` term that separates First from Last Quarter.
    fn quarter_correction(&self) -> f64 {
        QUARTER_W
            .iter()
            .fold(0.00306, |acc, term| acc + self.scale(term) * self.angle(term).cos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synodic_index_epoch() {
        assert_eq!(synodic_index(2000.0), 0.0);
        assert!((synodic_index(2001.0) - 12.3685).abs() < 1e-12);
        assert!(synodic_index(1999.0) < 0.0);
    }

    #[test]
    fn test_mean_phase_at_epoch_is_exact() {
        assert_eq!(mean_phase(0.0), 2451550.09766);
    }

    #[test]
    fn test_mean_phase_advances_by_synodic_month() {
        let step = mean_phase(1.0) - mean_phase(0.0);
        assert!((step - 29.530588861).abs() < 1e-6, "step = {step}");
    }

    #[test]
    fn test_classify_all_phases() {
        assert_eq!(PhaseKind::classify(0.0, FRACTION_TOLERANCE), Ok(PhaseKind::NewMoon));
        assert_eq!(PhaseKind::classify(7.25, FRACTION_TOLERANCE), Ok(PhaseKind::FirstQuarter));
        assert_eq!(PhaseKind::classify(7.5, FRACTION_TOLERANCE), Ok(PhaseKind::FullMoon));
        assert_eq!(PhaseKind::classify(7.75, FRACTION_TOLERANCE), Ok(PhaseKind::LastQuarter));
        assert_eq!(PhaseKind::classify(-3.0, FRACTION_TOLERANCE), Ok(PhaseKind::NewMoon));
        assert_eq!(PhaseKind::classify(-3.5, FRACTION_TOLERANCE), Ok(PhaseKind::FullMoon));
        assert_eq!(PhaseKind::classify(-3.75, FRACTION_TOLERANCE), Ok(PhaseKind::FirstQuarter));
    }

    #[test]
    fn test_classify_tolerates_rounding_noise() {
        let k = 12.25 + 1e-12;
        assert_eq!(PhaseKind::classify(k, FRACTION_TOLERANCE), Ok(PhaseKind::FirstQuarter));
        assert!(PhaseKind::classify(k, 0.0).is_err());

        // wraps to 1.0 after floor()
        assert_eq!(PhaseKind::classify(-1e-17, FRACTION_TOLERANCE), Ok(PhaseKind::NewMoon));
        assert_eq!(PhaseKind::classify(5.0 - 1e-12, FRACTION_TOLERANCE), Ok(PhaseKind::NewMoon));
    }

    #[test]
    fn test_classify_rejects_other_fractions() {
        for k in [0.1, 0.6, 3.3, -0.4, 12.3685, 0.25 + 1e-6] {
            match PhaseKind::classify(k, FRACTION_TOLERANCE) {
                Err(PhaseError::InvalidPhaseFraction { k: bad, fraction }) => {
                    assert_eq!(bad, k);
                    assert!((0.0..1.0).contains(&fraction));
                }
                other => panic!("k = {k} gave {other:?}"),
            }
        }
        assert!(PhaseKind::classify(f64::NAN, FRACTION_TOLERANCE).is_err());
    }

    #[test]
    fn test_phase_index_rounds_to_requested_fraction() {
        for kind in PhaseKind::ALL {
            let k = phase_index(2024.3, kind);
            assert_eq!(PhaseKind::classify(k, 0.0), Ok(kind));
            assert!((k - synodic_index(2024.3)).abs() <= 0.5);
        }
        assert_eq!(phase_index(1977.13, PhaseKind::NewMoon), -283.0);
    }

    #[test]
    fn test_true_phase_meeus_new_moon() {
        // Example 49.a: 1977 Feb 18, JDE 2443192.65118
        let jd = true_phase(-283.0).unwrap();
        assert!((jd - 2443192.65118).abs() < 1e-5, "jd = {jd}");
    }

    #[test]
    fn test_true_phase_meeus_last_quarter() {
        // Example 49.b: Last Quarter of 2044 Jan 21, JDE 2467636.49186
        let jd = true_phase(544.75).unwrap();
        assert!((jd - 2467636.49186).abs() < 1e-5, "jd = {jd}");
    }

    #[test]
    fn test_quarter_correction_sign() {
        for k in [24.25, 24.75, 282.75, 544.75, -100.25] {
            let args = Arguments::new(k);
            let w = args.quarter_correction();
            assert!(w > 0.0023 && w < 0.0038, "W = {w}");

            let without_w = mean_phase(k) + args.series(&QUARTER) + planetary_correction(k, args.t2);
            let expected = if PhaseKind::classify(k, 0.0) == Ok(PhaseKind::FirstQuarter) {
                without_w + w
            } else {
                without_w - w
            };
            let jd = true_phase(k).unwrap();
            assert!((jd - expected).abs() < 1e-8, "k = {k}: {jd} vs {expected}");
        }
    }

    #[test]
    fn test_new_and_full_series_are_distinct() {
        let args = Arguments::new(100.0);
        assert_ne!(args.series(&NEW_MOON), args.series(&FULL_MOON));
    }

    #[test]
    fn test_planetary_correction_is_small() {
        let bound: f64 = PLANETARY.iter().map(|p| p.coefficient).sum();
        for k in [-1236.0, -12.5, 0.0, 300.25, 1236.75] {
            let t = k / LUNATIONS_PER_CENTURY;
            assert!(planetary_correction(k, t * t).abs() <= bound);
        }
    }

    #[test]
    fn test_invalid_fraction_fails() {
        assert!(matches!(
            true_phase(0.1),
            Err(PhaseError::InvalidPhaseFraction { .. })
        ));
        assert!(matches!(
            true_phase(300.6),
            Err(PhaseError::InvalidPhaseFraction { .. })
        ));
    }

    #[test]
    fn test_tolerance_is_configurable() {
        let k = 10.2501;
        assert!(true_phase(k).is_err());
        assert!(true_phase_with_tolerance(k, 1e-3).is_ok());
    }

    #[test]
    fn test_oversized_tolerance_is_refused() {
        assert_eq!(
            true_phase_with_tolerance(0.1, 0.5),
            Err(PhaseError::InvalidTolerance(0.5))
        );
        assert_eq!(
            PhaseKind::classify(0.1, MAX_FRACTION_TOLERANCE),
            Err(PhaseError::InvalidTolerance(MAX_FRACTION_TOLERANCE))
        );
        for tolerance in [-1e-9, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                PhaseKind::classify(0.0, tolerance),
                Err(PhaseError::InvalidTolerance(_))
            ));
        }
        // widest accepted tolerance still rejects a fraction midway between phases
        assert!(matches!(
            PhaseKind::classify(0.125 + 1e-3, 0.12),
            Err(PhaseError::InvalidPhaseFraction { .. })
        ));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PhaseKind::NewMoon.to_string(), "New Moon");
        assert_eq!(PhaseKind::LastQuarter.to_string(), "Last Quarter");
    }
}
