//! Rate Converter: maps an hourly rate to daily/weekly/bi-weekly/monthly/yearly amounts.
//!
//! Two modes share one entry point:
//! - `FixedSchedule` uses the standard 2080-hour year and the 173.33-hour average month.
//!   Landing pages are computed this way.
//! - `CustomSchedule` derives every period from a caller-supplied schedule.
//!   The calculator widget uses this mode.
//!
//! The modes agree on the standard 8h/5d/52w schedule except for `monthly`, which fixed
//! mode rounds to whole dollars.

use std::sync::LazyLock;

use fancy_regex::Regex;
use serde::{Deserialize, Serialize};

/// Standard working-time constants. Also cited verbatim in generated page copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleConstants {
    pub hours_per_day: f64,
    pub hours_per_week: f64,
    pub weeks_per_year: f64,
    pub hours_per_month: f64,
    pub hours_per_year: f64,
}

pub const STANDARD: ScheduleConstants = ScheduleConstants {
    hours_per_day: 8.0,
    hours_per_week: 40.0,
    weeks_per_year: 52.0,
    hours_per_month: 173.33,
    hours_per_year: 2080.0,
};

/// A working schedule supplied by the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub hours_per_day: f64,
    pub days_per_week: f64,
    pub weeks_per_year: f64,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            hours_per_day: 8.0,
            days_per_week: 5.0,
            weeks_per_year: 52.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ConversionMode {
    #[default]
    FixedSchedule,
    CustomSchedule(Schedule),
}

/// Period amounts derived from a single hourly rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub daily: f64,
    pub weekly: f64,
    pub biweekly: f64,
    pub monthly: f64,
    pub yearly: f64,
}

/// Converts an hourly rate into period amounts.
pub fn convert(hourly_rate: f64, mode: ConversionMode) -> SalaryBreakdown {
    match mode {
        ConversionMode::FixedSchedule => SalaryBreakdown {
            daily: hourly_rate * STANDARD.hours_per_day,
            weekly: hourly_rate * STANDARD.hours_per_week,
            biweekly: hourly_rate * STANDARD.hours_per_week * 2.0,
            monthly: (hourly_rate * STANDARD.hours_per_month).round(),
            yearly: hourly_rate * STANDARD.hours_per_year,
        },
        ConversionMode::CustomSchedule(schedule) => {
            let weekly = hourly_rate * schedule.hours_per_day * schedule.days_per_week;
            SalaryBreakdown {
                daily: hourly_rate * schedule.hours_per_day,
                weekly,
                biweekly: weekly * 2.0,
                monthly: weekly * schedule.weeks_per_year / 12.0,
                yearly: weekly * schedule.weeks_per_year,
            }
        }
    }
}

/// Optional sign, digits with an optional fraction, optional exponent.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
        .unwrap_or_else(|e| panic!("invalid number pattern: {e}"))
});

/// Reads the number at the start of `input`, the way a browser form field is read:
/// leading whitespace is skipped and trailing text is ignored (`"12abc"` is 12).
///
/// Returns `None` when the text does not start with a finite number.
pub fn parse_rate(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let number = LEADING_NUMBER.find(text).ok().flatten()?;
    number
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
}

/// Parses raw text as an hourly rate and converts it.
pub fn convert_input(input: &str, mode: ConversionMode) -> Option<SalaryBreakdown> {
    parse_rate(input).map(|rate| convert(rate, mode))
}

/// Hourly rate equivalent to a yearly salary on the standard 2080-hour year.
pub fn hourly_from_yearly(yearly: f64) -> f64 {
    yearly / STANDARD.hours_per_year
}
