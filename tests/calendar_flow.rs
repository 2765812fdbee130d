use chrono::NaiveDate;
use folhinha::holidays::{easter_sunday, HolidayCalendar};
use folhinha::model::{HolidayKind, MoonPhase};
use folhinha::month::{add_months, add_years, step_within_month, year_day, MonthGrid};
use folhinha::moon::{phase_of, phase_range};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_easter_across_centuries() {
    // 1818 and 2038 are the extreme possible dates, March 22 and April 25
    for (year, month, day) in [
        (1818, 3, 22),
        (1900, 4, 15),
        (1999, 4, 4),
        (2000, 4, 23),
        (2024, 3, 31),
        (2025, 4, 20),
        (2030, 4, 21),
        (2038, 4, 25),
    ] {
        assert_eq!(
            easter_sunday(year).unwrap(),
            date(year, month, day),
            "easter {year}"
        );
    }
}

#[test]
fn test_year_holidays_2024_listing() {
    let calendar = HolidayCalendar::brazilian();
    let all = calendar.year_holidays(2024).unwrap();

    assert_eq!(all.len(), 13);
    assert!(all.windows(2).all(|pair| pair[0].date <= pair[1].date));

    let find = |name: &str| all.iter().find(|h| h.name == name).unwrap();
    assert_eq!(find("Carnaval").date, date(2024, 2, 13));
    assert_eq!(find("Sexta-feira Santa").date, date(2024, 3, 29));
    assert_eq!(find("Páscoa").date, date(2024, 3, 31));
    assert_eq!(find("Corpus Christi").date, date(2024, 5, 30));
    assert_eq!(find("Dia da Consciência Negra").date, date(2024, 11, 20));
    assert_eq!(find("Natal").date, date(2024, 12, 25));
}

#[test]
fn test_month_view_flow() {
    // April 2025 starts on a Tuesday, so the Monday-first grid opens with one gap
    let grid = MonthGrid::new(2025, 4).unwrap();
    assert_eq!(grid.cells()[0], None);
    assert_eq!(grid.cells()[1], Some(1));
    assert_eq!(grid.weeks().count(), 6);

    // Every day of the month round-trips through the grid
    for day in 1..=30 {
        let (row, column) = grid.position_of(day).unwrap();
        assert_eq!(grid.date_at(row, column), Some(date(2025, 4, day)));
    }
    assert_eq!(grid.position_of(31), None);

    // Easter Sunday sits in the Sunday column
    let (row, column) = grid.position_of(20).unwrap();
    assert_eq!((row, column), (2, 6));

    // The host reads the cell and asks the library about the date
    let easter = grid.date_at(row, column).unwrap();
    let holiday = HolidayCalendar::brazilian()
        .holiday_on(easter)
        .unwrap()
        .unwrap();
    assert_eq!(holiday.name, "Páscoa");
    assert_eq!(holiday.kind, HolidayKind::Movable);
}

#[test]
fn test_moon_phase_reference_window() {
    // The reference new moon opens an eight-day Lua Nova run
    assert_eq!(phase_of(date(2000, 1, 6)), MoonPhase::New);

    let range = phase_range(date(2000, 1, 10));
    assert_eq!(range.phase, MoonPhase::New);
    assert_eq!(range.start, date(2000, 1, 6));
    assert_eq!(range.end, date(2000, 1, 13));
    assert_ne!(phase_of(date(2000, 1, 5)), MoonPhase::New);
    assert_ne!(phase_of(date(2000, 1, 14)), MoonPhase::New);

    // Dates before the reference still get a phase
    assert_eq!(phase_of(date(1999, 12, 20)), MoonPhase::Waxing);
}

#[test]
fn test_navigation_across_boundaries() {
    // Month jumps land on day 1 of the target month
    assert_eq!(add_months(date(2025, 12, 15), 1).unwrap(), date(2026, 1, 1));
    assert_eq!(add_months(date(2025, 1, 15), -1).unwrap(), date(2024, 12, 1));

    // Year jumps keep the day, clamping February 29
    assert_eq!(add_years(date(2024, 2, 29), 1).unwrap(), date(2025, 2, 28));
    assert_eq!(add_years(date(2024, 2, 29), 4).unwrap(), date(2028, 2, 29));

    // Day steps stop at the edges of the month
    assert_eq!(step_within_month(date(2025, 8, 15), 7), Some(date(2025, 8, 22)));
    assert_eq!(step_within_month(date(2025, 8, 31), 1), None);
    assert_eq!(step_within_month(date(2025, 8, 1), -1), None);
}

#[test]
fn test_year_day_counters() {
    let first = year_day(date(2025, 1, 1));
    assert_eq!(first.ordinal, 1);
    assert_eq!(first.total, 365);
    assert_eq!(first.remaining(), 364);

    let last = year_day(date(2024, 12, 31));
    assert_eq!(last.ordinal, 366);
    assert_eq!(last.total, 366);
    assert_eq!(last.remaining(), 0);

    // Day 61 of a leap year is March 1
    assert_eq!(year_day(date(2024, 3, 1)).ordinal, 61);
}
