//! Month grids for the calendar page.
//!
//! A grid is rebuilt from scratch for every anchor date; no state carries
//! over between months.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Anything that falls on a single calendar day.
pub trait Dated {
    /// Returns the day this item falls on.
    fn date(&self) -> NaiveDate;
}

/// One cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day<'a, T> {
    /// The date of this cell.
    pub date: NaiveDate,
    /// `false` for padding days borrowed from the adjacent months.
    pub in_current_month: bool,
    /// Items falling on this day, in collection order.
    pub items: Vec<&'a T>,
}

/// The first column of a padded grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    /// Weeks run Sunday to Saturday.
    #[default]
    Sunday,
    /// Weeks run Monday to Sunday.
    Monday,
}

impl WeekStart {
    /// Returns the column headers of a week starting on this day.
    #[must_use]
    pub const fn headers(self) -> [&'static str; 7] {
        match self {
            Self::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            Self::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }

    /// Returns the column of `date` in a week starting on this day (0-6).
    #[must_use]
    pub fn column(self, date: NaiveDate) -> u32 {
        match self {
            Self::Sunday => date.weekday().num_days_from_sunday(),
            Self::Monday => date.weekday().num_days_from_monday(),
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sunday => f.write_str("sunday"),
            Self::Monday => f.write_str("monday"),
        }
    }
}

impl FromStr for WeekStart {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" => Ok(Self::Sunday),
            "monday" => Ok(Self::Monday),
            _ => Err(ProtocolError::UnknownWeekStart(s.to_string())),
        }
    }
}

/// Returns the first day of the month containing `anchor`.
#[must_use]
pub fn month_start(anchor: NaiveDate) -> NaiveDate {
    anchor - Days::new(u64::from(anchor.day0()))
}

/// Returns the items falling on `date`, in collection order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use snvl_protocol::dummy::mock_events;
/// use snvl_protocol::items_on;
///
/// let events = mock_events();
/// let day = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
/// assert_eq!(items_on(&events, day)[0].title, "Project Deadline");
/// ```
#[must_use]
pub fn items_on<T: Dated>(items: &[T], date: NaiveDate) -> Vec<&T> {
    items.iter().filter(|item| item.date() == date).collect()
}

fn day<'a, T: Dated>(items: &'a [T], date: NaiveDate, month: u32) -> Day<'a, T> {
    Day {
        date,
        in_current_month: date.month() == month,
        items: items_on(items, date),
    }
}

/// Builds the days of the month containing `anchor`, in chronological order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use snvl_protocol::dummy::mock_events;
/// use snvl_protocol::build_grid;
///
/// let events = mock_events();
/// let grid = build_grid(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), &events);
///
/// assert_eq!(grid.len(), 31);
/// assert_eq!(grid[14].items.len(), 1);
/// ```
#[must_use]
pub fn build_grid<T: Dated>(anchor: NaiveDate, items: &[T]) -> Vec<Day<'_, T>> {
    let start = month_start(anchor);
    let month = start.month();
    start
        .iter_days()
        .take_while(|date| date.month() == month)
        .map(|date| day(items, date, month))
        .collect()
}

/// Builds a rectangular grid of whole weeks covering the month of `anchor`.
///
/// Leading and trailing days of the adjacent months fill the first and last
/// weeks; they carry their own items and have `in_current_month == false`.
#[must_use]
pub fn build_padded_grid<T: Dated>(
    anchor: NaiveDate,
    items: &[T],
    week_start: WeekStart,
) -> Vec<Day<'_, T>> {
    let start = month_start(anchor);
    let month = start.month();
    let leading = week_start.column(start) as usize;
    let month_len = start
        .iter_days()
        .take_while(|date| date.month() == month)
        .count();
    let cells = (leading + month_len).div_ceil(7) * 7;

    (start - Days::new(leading as u64))
        .iter_days()
        .take(cells)
        .map(|date| day(items, date, month))
        .collect()
}

/// Shifts `anchor` back by one month, clamping the day to the month's length.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use snvl_protocol::prev_month;
///
/// let march = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
/// assert_eq!(prev_month(march), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
#[must_use]
pub fn prev_month(anchor: NaiveDate) -> NaiveDate {
    anchor.checked_sub_months(Months::new(1)).unwrap_or(anchor)
}

/// Shifts `anchor` forward by one month, clamping the day to the month's length.
#[must_use]
pub fn next_month(anchor: NaiveDate) -> NaiveDate {
    anchor.checked_add_months(Months::new(1)).unwrap_or(anchor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy::mock_events;
    use crate::event::Event;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn titles<'a>(day: &Day<'a, Event>) -> Vec<&'a str> {
        day.items.iter().map(|event| event.title.as_str()).collect()
    }

    #[test]
    fn january_2024_has_every_mock_event_once() {
        let events = mock_events();

        let grid = build_grid(date(2024, 1, 9), &events);

        assert_eq!(grid.len(), 31);
        assert_eq!(grid[0].date, date(2024, 1, 1));
        assert_eq!(grid[30].date, date(2024, 1, 31));
        assert!(grid.iter().all(|day| day.in_current_month));

        let populated: Vec<_> = grid
            .iter()
            .filter(|day| !day.items.is_empty())
            .map(|day| (day.date.day(), titles(day)))
            .collect();
        insta::assert_debug_snapshot!(populated, @r#"
        [
            (
                15,
                [
                    "Team Standup",
                ],
            ),
            (
                18,
                [
                    "Code Review",
                ],
            ),
            (
                20,
                [
                    "Project Deadline",
                ],
            ),
            (
                25,
                [
                    "Company All-Hands",
                ],
            ),
        ]
        "#);
    }

    #[test]
    fn leap_february() {
        let events = mock_events();
        assert_eq!(build_grid(date(2024, 2, 10), &events).len(), 29);
        assert_eq!(build_grid(date(2023, 2, 10), &events).len(), 28);
    }

    #[test]
    fn other_months_have_no_mock_events() {
        let events = mock_events();
        let grid = build_grid(date(2024, 2, 1), &events);
        assert!(grid.iter().all(|day| day.items.is_empty()));
    }

    #[test]
    fn padded_grid_sunday_start() {
        let events = mock_events();

        let grid = build_padded_grid(date(2024, 1, 1), &events, WeekStart::Sunday);

        // 2024-01-01 is a Monday.
        assert_eq!(grid.len(), 35);
        assert_eq!(grid[0].date, date(2023, 12, 31));
        assert!(!grid[0].in_current_month);
        assert!(grid[1].in_current_month);
        assert_eq!(grid[34].date, date(2024, 2, 3));
        assert!(!grid[34].in_current_month);
    }

    #[test]
    fn padded_grid_monday_start() {
        let events = mock_events();

        let grid = build_padded_grid(date(2024, 1, 20), &events, WeekStart::Monday);

        assert_eq!(grid.len(), 35);
        assert_eq!(grid[0].date, date(2024, 1, 1));
        assert_eq!(titles(&grid[19]), vec!["Project Deadline"]);
    }

    #[test]
    fn padded_grid_exact_fit() {
        let events = mock_events();

        // February 2026 starts on a Sunday and has 28 days.
        let grid = build_padded_grid(date(2026, 2, 14), &events, WeekStart::Sunday);

        assert_eq!(grid.len(), 28);
        assert!(grid.iter().all(|day| day.in_current_month));
    }

    #[test]
    fn padding_days_carry_their_own_items() {
        let events = mock_events();

        // February 2024 with Monday start begins on 2024-01-29.
        let grid = build_padded_grid(date(2024, 2, 1), &events, WeekStart::Monday);

        assert_eq!(grid[0].date, date(2024, 1, 29));
        assert!(grid.iter().all(|day| day.items.is_empty()));

        let grid = build_padded_grid(date(2023, 12, 1), &events, WeekStart::Sunday);
        let last = grid.last().unwrap();
        assert!(!last.in_current_month);
        assert_eq!(last.date, date(2024, 1, 6));
    }

    #[test]
    fn month_navigation_clamps_day() {
        assert_eq!(next_month(date(2024, 1, 31)), date(2024, 2, 29));
        assert_eq!(prev_month(date(2024, 3, 31)), date(2024, 2, 29));
        assert_eq!(next_month(date(2023, 12, 15)), date(2024, 1, 15));
        assert_eq!(prev_month(date(2024, 1, 15)), date(2023, 12, 15));
    }

    #[test]
    fn week_start_parsing() {
        assert_eq!("Monday".parse::<WeekStart>(), Ok(WeekStart::Monday));
        assert_eq!(
            " friday".parse::<WeekStart>(),
            Err(ProtocolError::UnknownWeekStart(" friday".to_string()))
        );
        assert_eq!(WeekStart::Monday.headers()[6], "Sun");
    }
}
