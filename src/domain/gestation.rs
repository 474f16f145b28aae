//! Gestation calculator: LMP or EDD + "today" -> full metric set.
//!
//! Pure functions; "today" is always an explicit parameter, never read from
//! the environment. All arithmetic is whole-day. The LMP/EDD pair is kept
//! exactly 280 days apart: whichever side was not given is derived.

use chrono::{Days, NaiveDate};

use crate::domain::entities::{PregnancyResult, Trimester};
use crate::domain::errors::DomainError;

/// Standard gestation length by LMP convention.
pub const GESTATION_DAYS: u64 = 280;

/// Weeks are clamped here; term is reached at 40 weeks.
pub const MAX_WEEKS: i64 = 40;

/// LMP input older than this is rejected.
const LMP_MAX_AGE_DAYS: u64 = 365;

/// EDD input may be at most this many days overdue.
const EDD_MAX_OVERDUE_DAYS: u64 = 14;

/// Fruit-for-scale labels, one per gestational week, indexed by min(week, 39).
/// Order is load-bearing; do not sort or dedupe.
pub const BABY_SIZES: [&str; 40] = [
    "Kwayoyin halitta",
    "Kankana",
    "Kankana",
    "Blueberry",
    "Blueberry",
    "Cherry",
    "Cherry",
    "Fig",
    "Fig",
    "Lime",
    "Lime",
    "Lemon",
    "Lemon",
    "Apple",
    "Apple",
    "Avocado",
    "Avocado",
    "Pear",
    "Pear",
    "Sweet Potato",
    "Sweet Potato",
    "Mango",
    "Mango",
    "Banana",
    "Banana",
    "Carrot",
    "Carrot",
    "Papaya",
    "Papaya",
    "Grapefruit",
    "Grapefruit",
    "Cantaloupe",
    "Cantaloupe",
    "Cauliflower",
    "Cauliflower",
    "Zucchini",
    "Zucchini",
    "Eggplant",
    "Eggplant",
    "Watermelon",
];

/// Parse user input as `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| DomainError::InvalidDate)
}

/// Derive metrics from a last-menstrual-period date.
pub fn compute_from_lmp(lmp: NaiveDate, today: NaiveDate) -> Result<PregnancyResult, DomainError> {
    if lmp > today {
        return Err(DomainError::FutureLmp);
    }
    let one_year_ago = today - Days::new(LMP_MAX_AGE_DAYS);
    if lmp < one_year_ago {
        return Err(DomainError::LmpTooOld);
    }

    let edd = lmp + Days::new(GESTATION_DAYS);
    derive(lmp, edd, today)
}

/// Derive metrics from an estimated due date. The LMP anchor is back-computed
/// by the 280-day relationship.
pub fn compute_from_edd(edd: NaiveDate, today: NaiveDate) -> Result<PregnancyResult, DomainError> {
    let two_weeks_ago = today - Days::new(EDD_MAX_OVERDUE_DAYS);
    if edd < two_weeks_ago {
        return Err(DomainError::EddTooOld);
    }

    let lmp = edd - Days::new(GESTATION_DAYS);
    derive(lmp, edd, today)
}

/// Shared derivation. Each field is a pure function of `gestational_days` /
/// `days_remaining`, computed in the stated order.
fn derive(lmp: NaiveDate, edd: NaiveDate, today: NaiveDate) -> Result<PregnancyResult, DomainError> {
    let gestational_days = (today - lmp).num_days();

    // Floor division so that a pre-LMP "today" surfaces as negative weeks.
    let weeks_raw = gestational_days.div_euclid(7);
    if weeks_raw < 0 {
        return Err(DomainError::NegativeGestation);
    }
    let gestational_weeks = weeks_raw.min(MAX_WEEKS);
    let gestational_day_of_week = gestational_days.rem_euclid(7);

    let days_remaining = (edd - today).num_days().max(0);
    let weeks_remaining = (days_remaining + 6) / 7;

    let trimester = if gestational_weeks <= 13 {
        Trimester::First
    } else if gestational_weeks <= 27 {
        Trimester::Second
    } else {
        Trimester::Third
    };

    let lunar_month = (gestational_weeks as f64 / 4.3).floor() as i64 + 1;

    let progress_percent =
        ((gestational_weeks as f64 / MAX_WEEKS as f64).min(1.0) * 100.0).round() as u8;

    let baby_size = BABY_SIZES[gestational_weeks.min(39) as usize];

    Ok(PregnancyResult {
        lmp,
        edd,
        gestational_days,
        gestational_weeks,
        gestational_day_of_week,
        days_remaining,
        weeks_remaining,
        trimester,
        lunar_month,
        progress_percent,
        baby_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_lmp_worked_example() {
        // 91 days elapsed: exactly 13 weeks, day 0.
        let result = compute_from_lmp(d(2024, 1, 1), d(2024, 4, 1)).unwrap();
        assert_eq!(result.gestational_days, 91);
        assert_eq!(result.gestational_weeks, 13);
        assert_eq!(result.gestational_day_of_week, 0);
        assert_eq!(result.trimester, Trimester::First);
        assert_eq!(result.edd, d(2024, 10, 7));
        assert_eq!(result.progress_percent, 33);
        assert_eq!(result.lunar_month, 4);
        assert_eq!(result.baby_size, "Apple");
    }

    #[test]
    fn test_edd_minus_lmp_is_always_280_days() {
        let today = d(2024, 4, 1);
        let from_lmp = compute_from_lmp(d(2024, 1, 1), today).unwrap();
        assert_eq!((from_lmp.edd - from_lmp.lmp).num_days(), 280);

        let from_edd = compute_from_edd(d(2024, 10, 7), today).unwrap();
        assert_eq!((from_edd.edd - from_edd.lmp).num_days(), 280);
    }

    #[test]
    fn test_round_trip_via_edd() {
        let today = d(2024, 4, 1);
        let first = compute_from_lmp(d(2024, 1, 1), today).unwrap();
        let second = compute_from_edd(first.edd, today).unwrap();
        assert_eq!(second.edd, first.edd);
        assert_eq!(second.lmp, first.lmp);
        assert_eq!(second.gestational_weeks, first.gestational_weeks);
    }

    #[test]
    fn test_future_lmp_rejected() {
        let err = compute_from_lmp(d(2024, 4, 2), d(2024, 4, 1)).unwrap_err();
        assert!(matches!(err, DomainError::FutureLmp));
    }

    #[test]
    fn test_lmp_older_than_a_year_rejected() {
        let today = d(2024, 4, 1);
        let err = compute_from_lmp(today - Days::new(366), today).unwrap_err();
        assert!(matches!(err, DomainError::LmpTooOld));
        // Exactly 365 days ago is still accepted.
        assert!(compute_from_lmp(today - Days::new(365), today).is_ok());
    }

    #[test]
    fn test_edd_more_than_two_weeks_overdue_rejected() {
        let today = d(2024, 4, 1);
        let err = compute_from_edd(today - Days::new(15), today).unwrap_err();
        assert!(matches!(err, DomainError::EddTooOld));
        assert!(compute_from_edd(today - Days::new(14), today).is_ok());
    }

    #[test]
    fn test_far_future_edd_is_negative_gestation() {
        // EDD 300 days out puts LMP 20 days after today.
        let today = d(2024, 4, 1);
        let err = compute_from_edd(today + Days::new(300), today).unwrap_err();
        assert!(matches!(err, DomainError::NegativeGestation));
    }

    #[test]
    fn test_weeks_clamped_at_term() {
        // 301 days elapsed: raw 43 weeks, clamped to 40.
        let today = d(2024, 11, 1);
        let result = compute_from_lmp(d(2024, 1, 5), today).unwrap();
        assert_eq!(result.gestational_weeks, 40);
        assert_eq!(result.progress_percent, 100);
        assert_eq!(result.days_remaining, 0);
        assert_eq!(result.weeks_remaining, 0);
        assert_eq!(result.trimester, Trimester::Third);
        assert_eq!(result.baby_size, "Watermelon");
    }

    #[test]
    fn test_day_zero() {
        let today = d(2024, 1, 1);
        let result = compute_from_lmp(today, today).unwrap();
        assert_eq!(result.gestational_days, 0);
        assert_eq!(result.gestational_weeks, 0);
        assert_eq!(result.gestational_day_of_week, 0);
        assert_eq!(result.days_remaining, 280);
        assert_eq!(result.weeks_remaining, 40);
        assert_eq!(result.progress_percent, 0);
        assert_eq!(result.baby_size, "Kwayoyin halitta");
    }

    #[test]
    fn test_progress_monotonic_in_days() {
        let lmp = d(2024, 1, 1);
        let mut last = 0u8;
        for offset in 0..320u64 {
            let result = compute_from_lmp(lmp, lmp + Days::new(offset)).unwrap();
            assert!(result.progress_percent >= last);
            assert!(result.progress_percent <= 100);
            assert!((0..=40).contains(&result.gestational_weeks));
            assert!((0..=6).contains(&result.gestational_day_of_week));
            last = result.progress_percent;
        }
    }

    #[test]
    fn test_trimester_boundaries() {
        let lmp = d(2024, 1, 1);
        let at_weeks = |w: u64| compute_from_lmp(lmp, lmp + Days::new(w * 7)).unwrap().trimester;
        assert_eq!(at_weeks(13), Trimester::First);
        assert_eq!(at_weeks(14), Trimester::Second);
        assert_eq!(at_weeks(27), Trimester::Second);
        assert_eq!(at_weeks(28), Trimester::Third);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(" 2024-01-01 ").unwrap(), d(2024, 1, 1));
        assert!(matches!(parse_date("not-a-date"), Err(DomainError::InvalidDate)));
        assert!(matches!(parse_date("2024-02-30"), Err(DomainError::InvalidDate)));
    }
}
