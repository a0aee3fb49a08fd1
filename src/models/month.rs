//! Calendar month representation ("YYYY-MM")
//!
//! Budgets belong to a month and the main view shows one month at a time.
//! Navigation is plain calendar arithmetic delegated to chrono.

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month, returning `None` when `month` is not in 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month according to the local clock
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The previous month, rolling over into the previous year after January
    pub fn prev(&self) -> Self {
        self.first_day()
            .checked_sub_months(Months::new(1))
            .map(Self::of)
            .unwrap_or(*self)
    }

    /// The next month, rolling over into the next year after December
    pub fn next(&self) -> Self {
        self.first_day()
            .checked_add_months(Months::new(1))
            .map(Self::of)
            .unwrap_or(*self)
    }

    /// Human-friendly label, e.g. "January 2024"
    pub fn friendly(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Parse "YYYY-MM"
    ///
    /// A full date ("YYYY-MM-DD") is also accepted; only the year and month are
    /// kept.
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let head = s.get(..7).unwrap_or(s);
        let rest = s.get(7..).unwrap_or("");

        if !rest.is_empty() {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        }

        let (year, month) = head
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

        Self::new(year, month).ok_or(MonthParseError::InvalidMonth(month))
    }
}

impl Default for Month {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Month::parse(&s).map_err(serde::de::Error::custom)
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
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format (expected YYYY-MM): {}", s)
            }
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}
