//! Ovulation / fertile window calculator.
//!
//! Whole-day arithmetic, no time-of-day component. "Today" is an explicit
//! parameter, used only for the future-LMP check.

use chrono::{Days, NaiveDate};

use crate::domain::entities::FertileWindow;
use crate::domain::errors::DomainError;

/// Supported menstrual cycle lengths, inclusive.
pub const CYCLE_RANGE: std::ops::RangeInclusive<u32> = 21..=45;

/// Luteal phase length: ovulation is assumed 14 days before the next period.
const LUTEAL_DAYS: u32 = 14;

/// Estimate the ovulation day and the fertile/safe windows around it.
pub fn fertile_window(
    lmp: NaiveDate,
    cycle_length_days: u32,
    today: NaiveDate,
) -> Result<FertileWindow, DomainError> {
    if !CYCLE_RANGE.contains(&cycle_length_days) {
        return Err(DomainError::InvalidCycleLength);
    }
    if lmp > today {
        return Err(DomainError::FutureLmp);
    }

    let ovulation_day = lmp + Days::new(u64::from(cycle_length_days - LUTEAL_DAYS));
    let fertile_start = ovulation_day - Days::new(3);
    let fertile_end = ovulation_day + Days::new(3);
    let safe_window_start = lmp + Days::new(1);
    let safe_window_end = fertile_start - Days::new(1);

    Ok(FertileWindow {
        ovulation_day,
        fertile_start,
        fertile_end,
        safe_window_start,
        safe_window_end,
    })
}
