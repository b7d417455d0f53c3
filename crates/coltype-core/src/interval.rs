//! ANSI interval types: day-time and year-month families.
//!
//! Each family is parameterized by a `(start, end)` field range with
//! `start <= end`. The full set of valid ranges is small and enumerated up
//! front so the registry can hold every combination.

use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayTimeField {
    Day,
    Hour,
    Minute,
    Second,
}

impl DayTimeField {
    pub const ALL: [DayTimeField; 4] = [
        DayTimeField::Day,
        DayTimeField::Hour,
        DayTimeField::Minute,
        DayTimeField::Second,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            DayTimeField::Day => "day",
            DayTimeField::Hour => "hour",
            DayTimeField::Minute => "minute",
            DayTimeField::Second => "second",
        }
    }
}

impl fmt::Display for DayTimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum YearMonthField {
    Year,
    Month,
}

impl YearMonthField {
    pub const ALL: [YearMonthField; 2] = [YearMonthField::Year, YearMonthField::Month];

    pub const fn as_str(&self) -> &'static str {
        match self {
            YearMonthField::Year => "year",
            YearMonthField::Month => "month",
        }
    }
}

impl fmt::Display for YearMonthField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayTimeIntervalType {
    start: DayTimeField,
    end: DayTimeField,
}

impl DayTimeIntervalType {
    pub const DEFAULT: DayTimeIntervalType = DayTimeIntervalType {
        start: DayTimeField::Day,
        end: DayTimeField::Second,
    };

    pub fn new(start: DayTimeField, end: DayTimeField) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidInterval {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> DayTimeField {
        self.start
    }

    pub const fn end(&self) -> DayTimeField {
        self.end
    }

    /// Every valid `(start, end)` range, in field order.
    pub fn all() -> impl Iterator<Item = DayTimeIntervalType> {
        DayTimeField::ALL.into_iter().flat_map(|start| {
            DayTimeField::ALL
                .into_iter()
                .filter(move |end| *end >= start)
                .map(move |end| DayTimeIntervalType { start, end })
        })
    }

    pub fn type_name(&self) -> String {
        interval_name(self.start.as_str(), self.end.as_str())
    }
}

impl Default for DayTimeIntervalType {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonthIntervalType {
    start: YearMonthField,
    end: YearMonthField,
}

impl YearMonthIntervalType {
    pub const DEFAULT: YearMonthIntervalType = YearMonthIntervalType {
        start: YearMonthField::Year,
        end: YearMonthField::Month,
    };

    pub fn new(start: YearMonthField, end: YearMonthField) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidInterval {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> YearMonthField {
        self.start
    }

    pub const fn end(&self) -> YearMonthField {
        self.end
    }

    pub fn all() -> impl Iterator<Item = YearMonthIntervalType> {
        YearMonthField::ALL.into_iter().flat_map(|start| {
            YearMonthField::ALL
                .into_iter()
                .filter(move |end| *end >= start)
                .map(move |end| YearMonthIntervalType { start, end })
        })
    }

    pub fn type_name(&self) -> String {
        interval_name(self.start.as_str(), self.end.as_str())
    }
}

impl Default for YearMonthIntervalType {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn interval_name(start: &str, end: &str) -> String {
    if start == end {
        format!("interval {start}")
    } else {
        format!("interval {start} to {end}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_all_ranges() {
        assert_eq!(DayTimeIntervalType::all().count(), 10);
        assert_eq!(YearMonthIntervalType::all().count(), 3);
    }

    #[test]
    fn names_single_and_ranged_intervals() {
        let day = DayTimeIntervalType::new(DayTimeField::Day, DayTimeField::Day).unwrap();
        assert_eq!(day.type_name(), "interval day");
        assert_eq!(DayTimeIntervalType::DEFAULT.type_name(), "interval day to second");
        assert_eq!(YearMonthIntervalType::DEFAULT.type_name(), "interval year to month");
    }

    #[test]
    fn rejects_reversed_range() {
        assert!(DayTimeIntervalType::new(DayTimeField::Second, DayTimeField::Hour).is_err());
        assert!(YearMonthIntervalType::new(YearMonthField::Month, YearMonthField::Year).is_err());
    }
}
