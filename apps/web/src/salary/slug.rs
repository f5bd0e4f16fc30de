//! Slug Interpreter: maps a `/salary-calculator/:slug/` path segment to an hourly rate.
//!
//! Patterns are tried in a fixed order and the first one yielding a usable rate wins.
//! A pattern that matches textually but yields a zero or unparsable rate does not count
//! as a match; evaluation continues with the next pattern. Negative hourly tokens are
//! accepted and render like any other rate.

use std::sync::LazyLock;

use fancy_regex::Regex;
use serde::{Deserialize, Serialize};

use crate::salary::converter::{hourly_from_yearly, STANDARD};

/// Which quantity the visitor originally asked about. Drives the headline variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitTag {
    Hourly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedSlug {
    pub hourly_rate: f64,
    pub unit: UnitTag,
}

struct SlugPattern {
    regex: &'static LazyLock<Regex>,
    unit: UnitTag,
    to_hourly: fn(f64) -> f64,
}

static DOLLAR_PER_HOUR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^([\d.-]+)-dollar-per-hour$"));
static K_A_YEAR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(\d+)k-a-year-is-how-much-an-hour$"));
static DOLLARS_PER_YEAR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(\d+)-dollars-per-year$"));
static DOLLARS_PER_MONTH: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(\d+)-dollars-per-month$"));
static A_WEEK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(\d+)-a-week-is-how-much-a-year$"));

fn compile(pattern: &str) -> Regex {
    // Patterns are string literals in this file; a failure here is a programming error.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid slug pattern {pattern}: {e}"))
}

/// Slug patterns in priority order.
fn patterns() -> [SlugPattern; 5] {
    [
        SlugPattern {
            regex: &DOLLAR_PER_HOUR,
            unit: UnitTag::Hourly,
            to_hourly: |n| n,
        },
        SlugPattern {
            regex: &K_A_YEAR,
            unit: UnitTag::Yearly,
            to_hourly: |n| hourly_from_yearly(n * 1000.0),
        },
        SlugPattern {
            regex: &DOLLARS_PER_YEAR,
            unit: UnitTag::Yearly,
            to_hourly: hourly_from_yearly,
        },
        SlugPattern {
            regex: &DOLLARS_PER_MONTH,
            unit: UnitTag::Hourly,
            to_hourly: |n| n / STANDARD.hours_per_month,
        },
        SlugPattern {
            regex: &A_WEEK,
            unit: UnitTag::Hourly,
            to_hourly: |n| n * STANDARD.weeks_per_year / STANDARD.hours_per_year,
        },
    ]
}

/// Interprets a calculator slug. Returns `None` when no pattern yields a non-zero rate.
pub fn parse_slug(slug: &str) -> Option<ParsedSlug> {
    patterns().iter().find_map(|pattern| {
        let captures = pattern.regex.captures(slug).ok().flatten()?;
        let amount = captures.get(1)?.as_str().parse::<f64>().ok()?;
        let hourly_rate = (pattern.to_hourly)(amount);
        (hourly_rate.is_finite() && hourly_rate != 0.0).then_some(ParsedSlug {
            hourly_rate,
            unit: pattern.unit,
        })
    })
}

/// Canonical slug for an hourly rate page, e.g. `30-dollar-per-hour`.
pub fn hourly_slug(rate: f64) -> String {
    format!("{}-dollar-per-hour", crate::salary::format::display_rate(rate))
}

/// Canonical calculator URL for an hourly rate, with the trailing slash.
pub fn calculator_path(rate: f64) -> String {
    format!("/salary-calculator/{}/", hourly_slug(rate))
}
