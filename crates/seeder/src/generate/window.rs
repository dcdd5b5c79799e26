//! Calendar months and the order-date window.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Errors building a [`YearMonth`] or [`OrderWindow`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("expected YYYY-MM, got {0:?}")]
    Format(String),
    #[error("month must be between 1 and 12, got {0}")]
    Month(u32),
    #[error("window end {end} must be after start {start}")]
    Empty { start: YearMonth, end: YearMonth },
}

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// # Errors
    ///
    /// Returns an error if `month` is not in `1..=12`.
    pub fn new(year: i32, month: u32) -> Result<Self, WindowError> {
        if !(1..=12).contains(&month) {
            return Err(WindowError::Month(month));
        }
        Ok(Self { year, month })
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// The month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The following month.
    #[must_use]
    pub const fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Number of days in the month (28–31).
    #[must_use]
    pub fn days(&self) -> u32 {
        let next = self.next();
        NaiveDate::from_ymd_opt(next.year, next.month, 1)
            .and_then(|first| first.pred_opt())
            .map_or(28, |last| last.day())
    }

    /// The given day of this month, if it exists.
    #[must_use]
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    const fn index(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || WindowError::Format(s.to_owned());
        let (year, month) = s.trim().split_once('-').ok_or_else(format_err)?;
        let year = year.parse().map_err(|_| format_err())?;
        let month = month.parse().map_err(|_| format_err())?;
        Self::new(year, month)
    }
}

/// Months orders may be dated in: `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderWindow {
    start: YearMonth,
    end: YearMonth,
}

impl OrderWindow {
    /// # Errors
    ///
    /// Returns an error unless `end` is after `start`.
    pub fn new(start: YearMonth, end: YearMonth) -> Result<Self, WindowError> {
        if end <= start {
            return Err(WindowError::Empty { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> YearMonth {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> YearMonth {
        self.end
    }

    /// Number of months in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::try_from(self.end.index() - self.start.index()).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every month in the window, in order.
    #[must_use]
    pub fn months(&self) -> Vec<YearMonth> {
        std::iter::successors(Some(self.start), |month| Some(month.next()))
            .take_while(|month| *month < self.end)
            .collect()
    }

    /// Whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        let month = YearMonth::of(date);
        self.start <= month && month < self.end
    }
}

impl Default for OrderWindow {
    /// January 2020 up to (not including) January 2025.
    fn default() -> Self {
        Self {
            start: YearMonth {
                year: 2020,
                month: 1,
            },
            end: YearMonth {
                year: 2025,
                month: 1,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_month() {
        let ym: YearMonth = "2023-07".parse().unwrap();
        assert_eq!((ym.year(), ym.month()), (2023, 7));
        assert_eq!(ym.to_string(), "2023-07");

        assert_eq!("2023-13".parse::<YearMonth>(), Err(WindowError::Month(13)));
        assert!(matches!(
            "July 2023".parse::<YearMonth>(),
            Err(WindowError::Format(_))
        ));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days(), 29);
        assert_eq!(YearMonth::new(2023, 2).unwrap().days(), 28);
        assert_eq!(YearMonth::new(2023, 4).unwrap().days(), 30);
        assert_eq!(YearMonth::new(2023, 12).unwrap().days(), 31);
    }

    #[test]
    fn test_default_window_spans_sixty_months() {
        let window = OrderWindow::default();
        let months = window.months();
        assert_eq!(window.len(), 60);
        assert_eq!(months.len(), 60);
        assert_eq!(months.first().unwrap().to_string(), "2020-01");
        assert_eq!(months.last().unwrap().to_string(), "2024-12");
    }

    #[test]
    fn test_window_must_not_be_empty() {
        let jan = YearMonth::new(2024, 1).unwrap();
        assert!(matches!(
            OrderWindow::new(jan, jan),
            Err(WindowError::Empty { .. })
        ));
        assert_eq!(OrderWindow::new(jan, jan.next()).unwrap().len(), 1);
    }

    #[test]
    fn test_contains() {
        let window = OrderWindow::default();
        assert!(window.contains(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()));
        assert!(window.contains(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2019, 12, 31).unwrap()));
    }
}
