//! Brazilian national holidays: a fixed day/month table plus the four
//! Easter-relative dates (Carnaval, Sexta-feira Santa, Páscoa, Corpus
//! Christi). The fixed table is configuration, not a process-wide global:
//! [`HolidayCalendar`] carries it, with the national calendar as default.

use crate::error::{FolhinhaError, Result};
use crate::model::{Holiday, HolidayKind};
use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeMap;

/// The nine Brazilian national holidays with a fixed date, keyed `(day, month)`.
const BRAZILIAN_FIXED: [((u32, u32), &str); 9] = [
    ((1, 1), "Confraternização Universal"),
    ((21, 4), "Tiradentes"),
    ((1, 5), "Dia do Trabalho"),
    ((7, 9), "Independência do Brasil"),
    ((12, 10), "Nossa Senhora Aparecida"),
    ((2, 11), "Finados"),
    ((15, 11), "Proclamação da República"),
    ((20, 11), "Dia da Consciência Negra"),
    ((25, 12), "Natal"),
];

/// Day offsets from Easter Sunday for the movable holidays.
///
/// These are the conventional Brazilian offsets. Regional variants exist, so
/// they are preserved as-is rather than derived from any other convention.
const MOVABLE_OFFSETS: [(i64, &str); 4] = [
    (-47, "Carnaval"),
    (-2, "Sexta-feira Santa"),
    (0, "Páscoa"),
    (60, "Corpus Christi"),
];

/// Computes Easter Sunday for a Gregorian year using the anonymous Gregorian
/// computus (Meeus/Jones/Butcher variant).
///
/// The computation is exact, not an approximation: for every proleptic
/// Gregorian year it yields the ecclesiastical Easter date. Years before 1
/// are rejected.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use folhinha::holidays::easter_sunday;
///
/// let easter = easter_sunday(2024).unwrap();
/// assert_eq!(easter, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> Result<NaiveDate> {
    if year < 1 {
        return Err(FolhinhaError::YearOutOfRange(year as i64));
    }
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or(FolhinhaError::YearOutOfRange(year as i64))
}

/// Returns the movable holidays of `year`, keyed by date.
///
/// Exactly four entries: Carnaval (Easter − 47 days), Sexta-feira Santa
/// (− 2), Páscoa and Corpus Christi (+ 60).
pub fn movable_holidays(year: i32) -> Result<BTreeMap<NaiveDate, String>> {
    let easter = easter_sunday(year)?;
    let mut holidays = BTreeMap::new();
    for (offset, name) in MOVABLE_OFFSETS {
        let date = if offset < 0 {
            easter.checked_sub_days(Days::new(offset.unsigned_abs()))
        } else {
            easter.checked_add_days(Days::new(offset as u64))
        }
        .ok_or(FolhinhaError::YearOutOfRange(year as i64))?;
        holidays.insert(date, name.to_string());
    }
    Ok(holidays)
}

/// Holiday lookup over a fixed day/month table plus the movable set.
///
/// The table is injected at construction so hosts can carry regional or
/// municipal calendars; [`HolidayCalendar::brazilian`] (also `Default`) is
/// the national one.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    fixed: BTreeMap<(u32, u32), String>,
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::brazilian()
    }
}

impl HolidayCalendar {
    /// The Brazilian national calendar: nine fixed holidays.
    pub fn brazilian() -> Self {
        Self {
            fixed: BRAZILIAN_FIXED
                .iter()
                .map(|&((day, month), name)| ((day, month), name.to_string()))
                .collect(),
        }
    }

    /// Builds a calendar from caller-supplied `((day, month), name)` entries.
    ///
    /// Entries are validated against a leap reference year, so `(29, 2)` is
    /// admissible; an impossible day such as `(32, 1)` is an error, never
    /// clamped. Duplicate keys keep the last entry, as with any map collect.
    pub fn with_fixed<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = ((u32, u32), S)>,
        S: Into<String>,
    {
        let mut fixed = BTreeMap::new();
        for ((day, month), name) in entries {
            if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
                return Err(FolhinhaError::InvalidFixedHoliday { day, month });
            }
            fixed.insert((day, month), name.into());
        }
        Ok(Self { fixed })
    }

    /// The fixed-holiday table, keyed `(day, month)`.
    pub fn fixed(&self) -> &BTreeMap<(u32, u32), String> {
        &self.fixed
    }

    /// Name of the fixed holiday falling on `date`, if any.
    pub fn fixed_holiday(&self, date: NaiveDate) -> Option<&str> {
        self.fixed
            .get(&(date.day(), date.month()))
            .map(String::as_str)
    }

    /// The holiday observed on `date`, checking the fixed table first and the
    /// movable set second.
    pub fn holiday_on(&self, date: NaiveDate) -> Result<Option<Holiday>> {
        if let Some(name) = self.fixed_holiday(date) {
            return Ok(Some(Holiday::new(date, HolidayKind::Fixed, name)));
        }
        let movables = movable_holidays(date.year())?;
        Ok(movables
            .get(&date)
            .map(|name| Holiday::new(date, HolidayKind::Movable, name.clone())))
    }

    /// All holidays of `year`, fixed and movable, sorted by date ascending.
    ///
    /// A fixed entry that does not exist in `year` (a February 29 entry in a
    /// common year) is skipped rather than reported as an error.
    pub fn year_holidays(&self, year: i32) -> Result<Vec<Holiday>> {
        let mut all = Vec::with_capacity(self.fixed.len() + MOVABLE_OFFSETS.len());
        for (&(day, month), name) in &self.fixed {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                all.push(Holiday::new(date, HolidayKind::Fixed, name.clone()));
            }
        }
        for (date, name) in movable_holidays(year)? {
            all.push(Holiday::new(date, HolidayKind::Movable, name));
        }
        all.sort();
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn easter_reference_years() {
        for (year, expected) in [
            (2000, ymd(2000, 4, 23)),
            (2024, ymd(2024, 3, 31)),
            (2025, ymd(2025, 4, 20)),
            (2030, ymd(2030, 4, 21)),
        ] {
            assert_eq!(easter_sunday(year).unwrap(), expected, "easter {year}");
        }
    }

    #[test]
    fn easter_rejects_years_before_one() {
        assert!(easter_sunday(0).is_err());
        assert!(easter_sunday(-44).is_err());
        assert!(easter_sunday(1).is_ok());
    }

    #[test]
    fn movable_holidays_2025() {
        let movables = movable_holidays(2025).unwrap();
        assert_eq!(movables.len(), 4);
        assert_eq!(movables[&ymd(2025, 3, 4)], "Carnaval");
        assert_eq!(movables[&ymd(2025, 4, 18)], "Sexta-feira Santa");
        assert_eq!(movables[&ymd(2025, 4, 20)], "Páscoa");
        assert_eq!(movables[&ymd(2025, 6, 19)], "Corpus Christi");
    }

    #[test]
    fn movable_holidays_cross_february_in_leap_years() {
        // Easter 2024-03-31 minus 47 days lands before the leap day
        let movables = movable_holidays(2024).unwrap();
        assert_eq!(movables[&ymd(2024, 2, 13)], "Carnaval");
        assert_eq!(movables[&ymd(2024, 5, 30)], "Corpus Christi");
    }

    #[test]
    fn default_table_has_nine_entries() {
        let calendar = HolidayCalendar::brazilian();
        assert_eq!(calendar.fixed().len(), 9);
        assert_eq!(calendar.fixed()[&(25, 12)], "Natal");
        assert_eq!(calendar.fixed()[&(7, 9)], "Independência do Brasil");
    }

    #[test]
    fn fixed_lookup_by_date() {
        let calendar = HolidayCalendar::brazilian();
        assert_eq!(calendar.fixed_holiday(ymd(2025, 12, 25)), Some("Natal"));
        assert_eq!(calendar.fixed_holiday(ymd(1998, 12, 25)), Some("Natal"));
        assert_eq!(calendar.fixed_holiday(ymd(2025, 12, 24)), None);
    }

    #[test]
    fn holiday_on_prefers_fixed_over_movable() {
        let calendar = HolidayCalendar::brazilian();

        let fixed = calendar.holiday_on(ymd(2025, 11, 20)).unwrap().unwrap();
        assert_eq!(fixed.kind, HolidayKind::Fixed);
        assert_eq!(fixed.name, "Dia da Consciência Negra");

        let movable = calendar.holiday_on(ymd(2025, 4, 20)).unwrap().unwrap();
        assert_eq!(movable.kind, HolidayKind::Movable);
        assert_eq!(movable.name, "Páscoa");

        assert!(calendar.holiday_on(ymd(2025, 7, 3)).unwrap().is_none());
    }

    #[test]
    fn year_holidays_sorted_ascending() {
        let calendar = HolidayCalendar::brazilian();
        let all = calendar.year_holidays(2025).unwrap();

        assert_eq!(all.len(), 13);
        assert!(all.windows(2).all(|pair| pair[0].date <= pair[1].date));
        assert_eq!(all[0].name, "Confraternização Universal");
        assert_eq!(all[all.len() - 1].name, "Natal");
        assert!(all.iter().any(|h| h.name == "Carnaval"));
    }

    #[test]
    fn custom_table_validation() {
        let ok = HolidayCalendar::with_fixed([((29, 2), "Dia Bissexto")]).unwrap();
        assert_eq!(ok.fixed().len(), 1);
        // The leap-day entry only occurs in leap years
        assert_eq!(ok.year_holidays(2023).unwrap().len(), 4);
        assert_eq!(ok.year_holidays(2024).unwrap().len(), 5);

        let err = HolidayCalendar::with_fixed([((32, 1), "Impossível")]);
        assert!(matches!(
            err,
            Err(FolhinhaError::InvalidFixedHoliday { day: 32, month: 1 })
        ));
    }
}
