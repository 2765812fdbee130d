use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin of a holiday date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HolidayKind {
    /// Falls on the same day and month every year.
    Fixed,
    /// Defined as a day offset from that year's Easter Sunday.
    Movable,
}

/// A named holiday on a concrete calendar day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Holiday {
    // Date first so the derived ordering sorts listings chronologically
    pub date: NaiveDate,
    pub kind: HolidayKind,
    pub name: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, kind: HolidayKind, name: impl Into<String>) -> Self {
        Self {
            date,
            kind,
            name: name.into(),
        }
    }
}

/// Coarse four-phase moon model: each synodic month is split into four equal
/// arcs starting at the new moon.
///
/// This is a calendar label, not an illumination percentage; see
/// [`crate::moon`] for how dates map onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    New,
    Waxing,
    Full,
    Waning,
}

impl MoonPhase {
    pub(crate) fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => MoonPhase::New,
            1 => MoonPhase::Waxing,
            2 => MoonPhase::Full,
            _ => MoonPhase::Waning,
        }
    }

    /// The traditional Brazilian Portuguese label, as calendar hosts announce it.
    pub fn label_pt_br(&self) -> &'static str {
        match self {
            MoonPhase::New => "Lua Nova",
            MoonPhase::Waxing => "Lua Crescente",
            MoonPhase::Full => "Lua Cheia",
            MoonPhase::Waning => "Lua Minguante",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label_pt_br())
    }
}
