//! # Moon Phases Core Library
//!
//! Computes when the Moon reaches New Moon, First Quarter, Full Moon and Last
//! Quarter, using the truncated periodic series of Meeus' *Astronomical
//! Algorithms* (chapter 49).
//!
//! ## Design Philosophy
//!
//! ### Pure functions
//! Every computation is a deterministic function of its inputs: no caches, no
//! global state, nothing to lock. All types are `Send + Sync` and can be used
//! from any number of threads.
//!
//! ### Synodic index
//! Phases are addressed by a real index `k`. Its integer part counts
//! lunations from the New Moon of 2000 January 6; its fractional part (0, ¼,
//! ½, ¾) selects the phase. Any other fraction is rejected with
//! [`PhaseError::InvalidPhaseFraction`] rather than guessed at.
//!
//! ### Data Flow
//! 1. **Seed**: calendar year → approximate index ([`lunar::synodic_index`])
//! 2. **Select**: round to the wanted phase ([`lunar::phase_index`])
//! 3. **Compute**: mean phase + periodic corrections ([`lunar::true_phase`])
//! 4. **Present**: Julian Date → UTC ([`julian::jd_to_utc`]), or whole
//!    listings through [`almanac::Almanac`]
//!
//! ## Core Types
//! - [`PhaseKind`]: which of the four phases
//! - [`PhaseEvent`]: one computed phase with its index, Julian Date and UTC instant

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Module declarations
pub mod almanac;
pub mod angle;
pub mod config;
pub mod julian;
pub mod lunar;


pub use lunar::{PhaseError, PhaseKind};

/// A computed lunar phase.
///
/// `jd` is the corrected Julian Date from [`lunar::true_phase`]; `utc` is the
/// same instant on the UTC time line, rounded to the millisecond.
///
/// # Example
/// ```
/// use moon_phase_lib::almanac::Almanac;
/// use moon_phase_lib::PhaseKind;
///
/// let event = Almanac::default().event(0.0).unwrap();
/// assert_eq!(event.kind, PhaseKind::NewMoon);
/// assert!((event.jd - 2451550.26).abs() < 0.01);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseEvent {
    /// Which phase this is
    pub kind: PhaseKind,
    /// Synodic index the event was computed from
    pub k: f64,
    /// Julian Date of the phase
    pub jd: f64,
    /// UTC instant of the phase
    pub utc: DateTime<Utc>,
}
