//! Coarse moon-phase estimation.
//!
//! The model is deliberately simple: whole days elapsed since a reference new
//! moon, reduced modulo the mean synodic month and split into four equal
//! arcs. It gives the calendar label a host announces, not an astronomical
//! illumination figure, and its discretization (including the boundary
//! behavior of the fractional modulo) is part of the contract.

use crate::model::MoonPhase;
use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Mean length of a synodic month, in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// The reference new moon: January 6, 2000.
static REFERENCE_NEW_MOON: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2000, 1, 6).expect("reference new moon is a valid date"));

/// Returns the phase label for `date`.
///
/// Dates before the reference new moon work the same way: the day difference
/// is signed and reduced with a Euclidean modulo, so the cycle extends
/// backwards without discontinuity.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use folhinha::model::MoonPhase;
/// use folhinha::moon::phase_of;
///
/// let reference = NaiveDate::from_ymd_opt(2000, 1, 6).unwrap();
/// assert_eq!(phase_of(reference), MoonPhase::New);
/// ```
pub fn phase_of(date: NaiveDate) -> MoonPhase {
    let days = date.signed_duration_since(*REFERENCE_NEW_MOON).num_days();
    let lunation = (days as f64).rem_euclid(SYNODIC_MONTH);
    // lunation / SYNODIC_MONTH is in [0, 1), so truncation is floor here
    let index = ((lunation / SYNODIC_MONTH) * 4.0) as u8 % 4;
    MoonPhase::from_index(index)
}

/// The maximal run of consecutive days sharing one phase label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseRange {
    pub phase: MoonPhase,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Returns the contiguous run of days around `date` with the same phase.
///
/// Found by scanning one day at a time in both directions until the label
/// changes; a run is at most eight days, so the scan is bounded. The scan
/// also stops at the ends of chrono's representable date range.
pub fn phase_range(date: NaiveDate) -> PhaseRange {
    let phase = phase_of(date);

    let mut start = date;
    while let Some(previous) = start.pred_opt() {
        if phase_of(previous) != phase {
            break;
        }
        start = previous;
    }

    let mut end = date;
    while let Some(next) = end.succ_opt() {
        if phase_of(next) != phase {
            break;
        }
        end = next;
    }

    PhaseRange { phase, start, end }
}
