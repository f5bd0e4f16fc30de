//! Server side of the interactive calculator widget.
//!
//! The widget posts raw input values on every change. Values are parsed leniently: each
//! field is read up to the first non-numeric character, and a schedule field that is
//! missing, non-numeric or zero falls back to its default. A half-typed form still
//! produces a result instead of an error; a rate that is not a number shows `$0`.

use serde::{Deserialize, Serialize};

use crate::salary::converter::{
    convert_input, parse_rate, ConversionMode, SalaryBreakdown, Schedule,
};
use crate::salary::format::{whole_dollars, FormattedBreakdown};

/// Raw widget form values, exactly as typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WidgetInput {
    pub rate: Option<String>,
    pub hours_per_day: Option<String>,
    pub days_per_week: Option<String>,
    pub weeks_per_year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetResult {
    pub rate: f64,
    pub schedule: Schedule,
    pub breakdown: SalaryBreakdown,
    pub formatted: FormattedBreakdown,
    /// Landing page for the rate rounded to whole dollars.
    pub detail_url: String,
}

impl WidgetInput {
    pub fn schedule(&self) -> Schedule {
        let defaults = Schedule::default();
        Schedule {
            hours_per_day: field_or(self.hours_per_day.as_deref(), defaults.hours_per_day),
            days_per_week: field_or(self.days_per_week.as_deref(), defaults.days_per_week),
            weeks_per_year: field_or(self.weeks_per_year.as_deref(), defaults.weeks_per_year),
        }
    }

    pub fn evaluate(&self) -> WidgetResult {
        let raw_rate = self.rate.as_deref().unwrap_or_default();
        let schedule = self.schedule();
        let breakdown = convert_input(raw_rate, ConversionMode::CustomSchedule(schedule));
        let rate = parse_rate(raw_rate).unwrap_or(0.0);

        WidgetResult {
            rate,
            schedule,
            formatted: FormattedBreakdown::from_optional(breakdown.as_ref()),
            breakdown: breakdown.unwrap_or_default(),
            detail_url: format!("/salary-calculator/{}-dollar-per-hour/", whole_dollars(rate)),
        }
    }
}

fn field_or(value: Option<&str>, default: f64) -> f64 {
    value
        .and_then(parse_rate)
        .filter(|v| *v != 0.0)
        .unwrap_or(default)
}
