//! Calendar age arithmetic.
//!
//! Ages are mixed calendar durations (years, months, days) rather than plain
//! day counts, computed with borrow-based arithmetic: borrow a year while the
//! month difference is negative, borrow a month while the day difference is
//! negative, where a borrowed month contributes the day count of the month
//! immediately preceding the reference month. Feb 29 birth dates are
//! normalized to Feb 28 before any comparison, so later-year anniversaries
//! never reference a nonexistent date.

use chrono::{Datelike, NaiveDate};

/// Elapsed time between two dates as a mixed calendar duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeDelta {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Where the nearest birthday anniversary sits relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayProximity {
    /// The reference date is the anniversary itself.
    Today,
    /// The anniversary is ahead of the reference date.
    Upcoming { months: u32, days: u32 },
    /// The anniversary is behind the reference date.
    Past { months: u32, days: u32 },
}

impl BirthdayProximity {
    /// Human-readable message for display layers.
    pub fn label(&self) -> String {
        match self {
            BirthdayProximity::Today => "has a birthday today".to_string(),
            BirthdayProximity::Upcoming { months, days } => {
                format!("has a birthday in {}", format_span(*months, *days))
            }
            BirthdayProximity::Past { months, days } => {
                format!("last had a birthday {} ago", format_span(*months, *days))
            }
        }
    }
}

fn format_span(months: u32, days: u32) -> String {
    let month_part = match months {
        0 => None,
        1 => Some("1 month".to_string()),
        n => Some(format!("{} months", n)),
    };
    let day_part = match days {
        0 => None,
        1 => Some("1 day".to_string()),
        n => Some(format!("{} days", n)),
    };
    match (month_part, day_part) {
        (Some(m), Some(d)) => format!("{} and {}", m, d),
        (Some(m), None) => m,
        (None, Some(d)) => d,
        (None, None) => "0 days".to_string(),
    }
}

/// Normalize a Feb 29 birth date to Feb 28 of the same year.
/// All other dates pass through unchanged.
pub fn fix_leap_day(date: NaiveDate) -> NaiveDate {
    if date.month() == 2 && date.day() == 29 {
        NaiveDate::from_ymd_opt(date.year(), 2, 28).unwrap_or(date)
    } else {
        date
    }
}

/// Number of days in the month before the given one, rolling over the year
/// boundary at January.
fn days_in_previous_month(year: i32, month: u32) -> u32 {
    let (year, month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    days_in_month(year, month)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Compute the calendar age of someone born on `birth_date` as of `reference`.
///
/// Precondition (guarded by callers): `birth_date <= reference`. The returned
/// components are all non-negative and, re-added to the birth date as a
/// calendar duration, reconstruct the reference date.
pub fn calculate_age(birth_date: NaiveDate, reference: NaiveDate) -> AgeDelta {
    let birth_date = fix_leap_day(birth_date);

    let mut years = reference.year() - birth_date.year();
    let mut months = reference.month() as i32 - birth_date.month() as i32;
    let mut days = reference.day() as i32 - birth_date.day() as i32;

    while months < 0 || days < 0 {
        while months < 0 {
            years -= 1;
            months += 12;
        }
        if days < 0 {
            months -= 1;
            let borrowed = days_in_previous_month(reference.year(), reference.month()) as i32;
            days = (borrowed - birth_date.day() as i32).max(0) + reference.day() as i32;
        }
    }

    AgeDelta {
        years: years.max(0) as u32,
        months: months as u32,
        days: days as u32,
    }
}

/// The anniversary of `birth_date` nearest to `reference`, chosen among the
/// candidates in the year before, the year of, and the year after the
/// reference date (leap-day birth dates compare as Feb 28).
///
/// When two candidates are equidistant the upcoming one wins: candidates are
/// scanned oldest to newest and a later candidate replaces an earlier one on
/// an equal distance.
pub fn closest_birthday(birth_date: NaiveDate, reference: NaiveDate) -> NaiveDate {
    let fixed = fix_leap_day(birth_date);

    let mut closest = reference;
    let mut best_distance = i64::MAX;
    for year in [reference.year() - 1, reference.year(), reference.year() + 1] {
        if let Some(candidate) = NaiveDate::from_ymd_opt(year, fixed.month(), fixed.day()) {
            let distance = candidate.signed_duration_since(reference).num_days().abs();
            if distance <= best_distance {
                best_distance = distance;
                closest = candidate;
            }
        }
    }

    closest
}

/// How far the nearest anniversary of `birth_date` is from `reference`,
/// as a calendar offset with a direction.
pub fn birthday_offset(birth_date: NaiveDate, reference: NaiveDate) -> BirthdayProximity {
    let closest = closest_birthday(birth_date, reference);

    if closest == reference {
        return BirthdayProximity::Today;
    }

    if reference < closest {
        let delta = calculate_age(reference, closest);
        BirthdayProximity::Upcoming {
            months: delta.months,
            days: delta.days,
        }
    } else {
        let delta = calculate_age(closest, reference);
        BirthdayProximity::Past {
            months: delta.months,
            days: delta.days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Re-add a delta to a birth date the way the borrow arithmetic defines
    /// it: years, then months (day clamped to the target month), then days.
    fn re_add(birth: NaiveDate, delta: AgeDelta) -> NaiveDate {
        let birth = fix_leap_day(birth);
        let total_months = birth.month() as i32 - 1 + delta.months as i32;
        let year = birth.year() + delta.years as i32 + total_months / 12;
        let month = (total_months % 12) as u32 + 1;
        let day = birth.day().min(days_in_month(year, month));
        date(year, month, day) + chrono::Duration::days(delta.days as i64)
    }

    #[test]
    fn test_calculate_age_reference_vector() {
        let delta = calculate_age(date(1987, 10, 22), date(2008, 10, 3));
        assert_eq!(
            delta,
            AgeDelta {
                years: 20,
                months: 11,
                days: 11
            }
        );
    }

    #[test]
    fn test_calculate_age_leap_day_birth() {
        let delta = calculate_age(date(1988, 2, 29), date(2008, 10, 3));
        assert_eq!(
            delta,
            AgeDelta {
                years: 20,
                months: 7,
                days: 5
            }
        );
    }

    #[test]
    fn test_calculate_age_on_birthday() {
        let delta = calculate_age(date(1990, 6, 15), date(2020, 6, 15));
        assert_eq!(
            delta,
            AgeDelta {
                years: 30,
                months: 0,
                days: 0
            }
        );
    }

    #[test]
    fn test_calculate_age_day_before_birthday() {
        let delta = calculate_age(date(1990, 6, 15), date(2020, 6, 14));
        assert_eq!(delta.years, 29);
        assert_eq!(delta.months, 11);
    }

    #[test]
    fn test_calculate_age_end_of_month_clamp() {
        // Born Jan 31, reference Mar 1 of a non-leap year: one borrowed
        // month (February, 28 days) has fewer days than the birth day.
        let delta = calculate_age(date(1990, 1, 31), date(1991, 3, 1));
        assert_eq!(
            delta,
            AgeDelta {
                years: 1,
                months: 1,
                days: 1
            }
        );
    }

    #[test]
    fn test_calculate_age_components_non_negative_and_reconstruct() {
        let births = [
            date(1987, 10, 22),
            date(1988, 2, 29),
            date(1990, 1, 31),
            date(2000, 12, 31),
            date(1999, 3, 1),
        ];
        let references = [
            date(2008, 10, 3),
            date(2020, 2, 28),
            date(2020, 2, 29),
            date(2021, 1, 1),
            date(2024, 7, 15),
        ];
        for birth in births {
            for reference in references {
                if birth > reference {
                    continue;
                }
                let delta = calculate_age(birth, reference);
                assert_eq!(
                    re_add(birth, delta),
                    reference,
                    "delta {:?} does not reconstruct {} from {}",
                    delta,
                    reference,
                    birth
                );
            }
        }
    }

    #[test]
    fn test_fix_leap_day() {
        assert_eq!(fix_leap_day(date(1988, 2, 29)), date(1988, 2, 28));
        assert_eq!(fix_leap_day(date(1988, 2, 28)), date(1988, 2, 28));
        assert_eq!(fix_leap_day(date(1988, 3, 29)), date(1988, 3, 29));
    }

    #[test]
    fn test_closest_birthday_upcoming() {
        // Birthday Oct 22; in early October the nearest anniversary is ahead.
        let closest = closest_birthday(date(1987, 10, 22), date(2008, 10, 3));
        assert_eq!(closest, date(2008, 10, 22));
    }

    #[test]
    fn test_closest_birthday_past() {
        // Birthday Oct 22; in early January the nearest anniversary is behind.
        let closest = closest_birthday(date(1987, 10, 22), date(2009, 1, 5));
        assert_eq!(closest, date(2008, 10, 22));
    }

    #[test]
    fn test_closest_birthday_same_day() {
        let closest = closest_birthday(date(1987, 10, 22), date(2008, 10, 22));
        assert_eq!(closest, date(2008, 10, 22));
    }

    #[test]
    fn test_closest_birthday_leap_day_compares_as_feb_28() {
        let closest = closest_birthday(date(1988, 2, 29), date(2021, 2, 27));
        assert_eq!(closest, date(2021, 2, 28));
    }

    #[test]
    fn test_birthday_offset_today() {
        let offset = birthday_offset(date(1987, 10, 22), date(2008, 10, 22));
        assert_eq!(offset, BirthdayProximity::Today);
        assert_eq!(offset.label(), "has a birthday today");
    }

    #[test]
    fn test_birthday_offset_upcoming() {
        let offset = birthday_offset(date(1987, 10, 22), date(2008, 10, 3));
        assert_eq!(
            offset,
            BirthdayProximity::Upcoming {
                months: 0,
                days: 19
            }
        );
        assert_eq!(offset.label(), "has a birthday in 19 days");
    }

    #[test]
    fn test_birthday_offset_past() {
        let offset = birthday_offset(date(1987, 10, 22), date(2008, 11, 25));
        assert_eq!(
            offset,
            BirthdayProximity::Past {
                months: 1,
                days: 3
            }
        );
        assert_eq!(offset.label(), "last had a birthday 1 month and 3 days ago");
    }

    #[test]
    fn test_format_span_wording() {
        assert_eq!(format_span(2, 5), "2 months and 5 days");
        assert_eq!(format_span(1, 0), "1 month");
        assert_eq!(format_span(0, 1), "1 day");
        assert_eq!(format_span(0, 0), "0 days");
    }
}
