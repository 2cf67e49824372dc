//! Calendar year-month value
//!
//! Budgets are keyed by month ("2025-01") and the monthly summary groups
//! by month. Keeping the month as a typed value rather than a label means
//! sorting is chronological without ever parsing "Jan 2024" back.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month of a specific year
///
/// Orders chronologically (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a year-month, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing the given date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // year/month are validated on construction, day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month
    pub fn next(&self) -> Self {
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

    /// The preceding month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Chart label, e.g. "Jan 2024"
    pub fn label(&self) -> String {
        self.first_day().format("%b %Y").to_string()
    }

    /// Parse a chart label ("Jan 2024") back into a year-month
    pub fn parse_label(label: &str) -> Result<Self, MonthParseError> {
        let date = NaiveDate::parse_from_str(&format!("1 {}", label.trim()), "%d %b %Y")
            .map_err(|_| MonthParseError::InvalidFormat(label.to_string()))?;
        Ok(Self::of(date))
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        if year.len() != 4 || month.len() != 2 {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = MonthParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> Self {
        month.to_string()
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid month format: {} (expected YYYY-MM)", s),
            Self::InvalidMonth(m) => write!(f, "Invalid month number: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let m = YearMonth::parse("2025-01").unwrap();
        assert_eq!(m.year(), 2025);
        assert_eq!(m.month(), 1);
        assert_eq!(m.to_string(), "2025-01");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(YearMonth::parse("2025-13").is_err());
        assert!(YearMonth::parse("2025-1").is_err());
        assert!(YearMonth::parse("January").is_err());
        assert_eq!(
            YearMonth::parse("2025-00"),
            Err(MonthParseError::InvalidMonth(0))
        );
    }

    #[test]
    fn test_label_round_trip() {
        let m = ym(2024, 1);
        assert_eq!(m.label(), "Jan 2024");
        assert_eq!(YearMonth::parse_label("Jan 2024").unwrap(), m);
        assert_eq!(YearMonth::parse_label("Dec 2023").unwrap(), ym(2023, 12));
    }

    #[test]
    fn test_chronological_order_across_years() {
        let mut months = vec![ym(2024, 1), ym(2023, 12), ym(2023, 2), ym(2024, 2)];
        months.sort();
        assert_eq!(months, vec![ym(2023, 2), ym(2023, 12), ym(2024, 1), ym(2024, 2)]);
    }

    #[test]
    fn test_contains() {
        let m = ym(2025, 2);
        assert!(m.contains(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()));
        assert!(!m.contains(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
        assert!(!m.contains(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()));
    }

    #[test]
    fn test_next_prev_wrap_years() {
        assert_eq!(ym(2024, 12).next(), ym(2025, 1));
        assert_eq!(ym(2025, 1).prev(), ym(2024, 12));
        assert_eq!(ym(2025, 6).next().prev(), ym(2025, 6));
    }

    #[test]
    fn test_serde_as_string() {
        let m = ym(2025, 3);
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"2025-03\"");
        let back: YearMonth = serde_json::from_str("\"2025-03\"").unwrap();
        assert_eq!(back, m);
        assert!(serde_json::from_str::<YearMonth>("\"2025-3\"").is_err());
    }
}
