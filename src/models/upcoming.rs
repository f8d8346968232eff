//! Birthday window calculation.
//!
//! A birthday is "upcoming" when its next occurrence (this year, or next
//! year if it already passed) lies within `[today, today + horizon]`.
//! Occurrences on a weekend are congratulated on the following Monday.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;

/// Output format of congratulation dates.
const NOTICE_DATE_FORMAT: &str = "%Y.%m.%d";

/// Default window length in days.
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// A contact whose birthday falls inside the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The day to congratulate on, after the weekend shift.
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User {} has a birthday this week! {}",
            self.name,
            self.congratulation_date.format(NOTICE_DATE_FORMAT)
        )
    }
}

/// The next date strictly after `date` that falls on `weekday`.
///
/// Always between one and seven days ahead; a date already on `weekday`
/// advances a full week.
pub fn next_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let current = date.weekday().num_days_from_monday();
    let target = weekday.num_days_from_monday();
    let days_ahead = (target + 7 - current) % 7;
    let days_ahead = if days_ahead == 0 { 7 } else { days_ahead };
    date + Days::new(u64::from(days_ahead))
}

/// The birthday's anniversary in `year`.
///
/// 29 February falls back to 1 March in non-leap years.
fn anniversary_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// When to congratulate someone born on `birthday`, if that falls in the
/// window starting at `today` and spanning `horizon_days` more days.
///
/// The window test uses the actual occurrence; the weekend shift is applied
/// afterwards and may land past the end of the window.
pub fn congratulation_date(
    birthday: NaiveDate,
    today: NaiveDate,
    horizon_days: u32,
) -> Option<NaiveDate> {
    let mut occurrence = anniversary_in(birthday, today.year())?;
    if occurrence < today {
        occurrence = anniversary_in(birthday, today.year() + 1)?;
    }

    if (occurrence - today).num_days() > i64::from(horizon_days) {
        return None;
    }

    Some(match occurrence.weekday() {
        Weekday::Sat | Weekday::Sun => next_weekday(occurrence, Weekday::Mon),
        _ => occurrence,
    })
}
