//! Content Generator: builds the landing-page copy for a rate.
//!
//! Amounts always come from the fixed standard schedule, and the section copy cites the
//! standard constants (8-hour day, 40-hour week, 173.33-hour month, 2,080-hour year)
//! even when a visitor's widget is set to a different schedule.

use serde::Serialize;

use crate::salary::converter::{convert, ConversionMode, SalaryBreakdown, STANDARD};
use crate::salary::format::{display_rate, format_amount, format_number, thousands};
use crate::salary::slug::UnitTag;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sections {
    pub daily: Section,
    pub weekly: Section,
    pub biweekly: Section,
    pub monthly: Section,
    pub yearly: Section,
}

impl Sections {
    /// Sections in page order, longest period first.
    pub fn in_page_order(&self) -> [&Section; 5] {
        [
            &self.yearly,
            &self.monthly,
            &self.biweekly,
            &self.weekly,
            &self.daily,
        ]
    }
}

/// All generated copy for one calculator page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageContent {
    pub title: String,
    pub meta_description: String,
    pub h1: String,
    pub intro: String,
    pub sections: Sections,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Generates page copy for an hourly rate. `brand` is appended to the `<title>`.
///
/// Returns `None` for a non-finite rate.
pub fn generate(hourly_rate: f64, unit: UnitTag, brand: &str) -> Option<PageContent> {
    if !hourly_rate.is_finite() {
        return None;
    }

    let salaries = convert(hourly_rate, ConversionMode::FixedSchedule);
    let rate = display_rate(hourly_rate);

    let h1 = headline(&rate, unit, &salaries);
    let title = format!("{h1} | {brand}");

    let meta_description = format!(
        "${rate}/hour equals {} per year, {} per month, {} per week. \
         Use our free salary calculator to convert hourly wages.",
        format_amount(salaries.yearly),
        format_amount(salaries.monthly),
        format_amount(salaries.weekly),
    );

    let intro = format!(
        "Break down your income of ${rate} into its daily, weekly, bi-weekly, monthly and \
         yearly salary equivalents. Whether you're planning your finances or evaluating job \
         offers, our Salary Calculator has you covered."
    );

    Some(PageContent {
        title,
        meta_description,
        h1,
        intro,
        sections: sections(&rate, &salaries),
    })
}

fn headline(rate: &str, unit: UnitTag, salaries: &SalaryBreakdown) -> String {
    match unit {
        UnitTag::Hourly => {
            format!("At ${rate} an hour, what is your weekly, monthly, and yearly salary?")
        }
        UnitTag::Yearly => {
            let yearly = if salaries.yearly >= 1000.0 {
                format!("${}", thousands(salaries.yearly))
            } else {
                format_amount(salaries.yearly)
            };
            format!("{yearly} a year is how much an hour?")
        }
    }
}

fn sections(rate: &str, salaries: &SalaryBreakdown) -> Sections {
    let hours_per_day = format_number(STANDARD.hours_per_day);
    let hours_per_week = format_number(STANDARD.hours_per_week);
    let hours_per_biweek = format_number(STANDARD.hours_per_week * 2.0);
    let weeks_per_year = format_number(STANDARD.weeks_per_year);
    let hours_per_month = format_number(STANDARD.hours_per_month);
    let hours_per_year = format_number(STANDARD.hours_per_year);

    Sections {
        yearly: Section {
            title: format!("How much is ${rate} an hour annually?"),
            content: format!(
                "If you're earning ${rate} per hour, your annual income amounts to {}. \
                 This calculation is based on working {hours_per_week} hours per week for \
                 {weeks_per_year} weeks a year ({hours_per_year} hours total). Knowing your \
                 yearly salary helps you set savings goals, plan for taxes, and budget \
                 effectively for the year ahead.",
                format_amount(salaries.yearly)
            ),
        },
        monthly: Section {
            title: format!("How much is ${rate} an hour monthly?"),
            content: format!(
                "At ${rate} per hour, your monthly income will total approximately {}. \
                 This calculation assumes an average of {hours_per_month} working hours per \
                 month ({hours_per_week} hours × {weeks_per_year} weeks ÷ 12 months). Your \
                 actual monthly pay may vary slightly based on the number of working days in \
                 each month.",
                format_amount(salaries.monthly)
            ),
        },
        biweekly: Section {
            title: format!("How much is ${rate} an hour bi-weekly?"),
            content: format!(
                "When earning ${rate} per hour, your bi-weekly paycheck totals {}. This is \
                 calculated by multiplying your hourly wage by {hours_per_biweek} hours (two \
                 {hours_per_week}-hour work weeks). Bi-weekly pay periods are common for many \
                 employers and help with consistent budgeting.",
                format_amount(salaries.biweekly)
            ),
        },
        weekly: Section {
            title: format!("How much is ${rate} an hour weekly?"),
            content: format!(
                "At ${rate} per hour, your weekly paycheck totals {}. This is based on a \
                 standard {hours_per_week}-hour work week. Understanding your weekly income \
                 helps you manage week-to-week expenses and short-term savings goals.",
                format_amount(salaries.weekly)
            ),
        },
        daily: Section {
            title: format!("How much is ${rate} an hour daily?"),
            content: format!(
                "If you earn ${rate} per hour, your daily income is {}. This assumes a \
                 standard {hours_per_day}-hour workday. Your daily wage is useful for \
                 calculating the value of overtime, time off, or comparing different work \
                 arrangements.",
                format_amount(salaries.daily)
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::salary::slug::parse_slug;

    const BRAND: &str = "SalaryCalc";

    #[test]
    fn test_hourly_headline_and_title() {
        let page = generate(30.0, UnitTag::Hourly, BRAND).unwrap();
        assert_eq!(
            page.h1,
            "At $30 an hour, what is your weekly, monthly, and yearly salary?"
        );
        assert_eq!(
            page.title,
            "At $30 an hour, what is your weekly, monthly, and yearly salary? | SalaryCalc"
        );
    }

    #[test]
    fn test_meta_description() {
        let page = generate(30.0, UnitTag::Hourly, BRAND).unwrap();
        assert_eq!(
            page.meta_description,
            "$30/hour equals $62,400 per year, $5,200 per month, $1,200 per week. \
             Use our free salary calculator to convert hourly wages."
        );
    }

    #[test]
    fn test_yearly_headline_abbreviates_thousands() {
        let parsed = parse_slug("50000-dollars-per-year").unwrap();
        let page = generate(parsed.hourly_rate, parsed.unit, BRAND).unwrap();
        assert_eq!(page.h1, "$50k a year is how much an hour?");
        assert!(page.title.contains("50k"));
        assert!(page.intro.contains("$24.04"));
    }

    #[test]
    fn test_yearly_headline_small_amount_uses_full_currency() {
        let page = generate(0.25, UnitTag::Yearly, BRAND).unwrap();
        assert_eq!(page.h1, "$520 a year is how much an hour?");
    }

    #[test]
    fn test_fractional_rate_display() {
        let page = generate(13.5, UnitTag::Hourly, BRAND).unwrap();
        assert!(page.h1.starts_with("At $13.5 an hour"));
        assert!(page.sections.daily.content.contains("$108"));
    }

    #[test]
    fn test_sections_cite_standard_constants() {
        let page = generate(20.0, UnitTag::Hourly, BRAND).unwrap();
        let s = &page.sections;
        assert!(s.yearly.content.contains("$41,600"));
        assert!(s.yearly.content.contains("40 hours per week for 52 weeks"));
        assert!(s.yearly.content.contains("2,080 hours total"));
        assert!(s.monthly.content.contains("173.33 working hours"));
        assert!(s.monthly.content.contains("$3,467"));
        assert!(s.biweekly.content.contains("80 hours"));
        assert!(s.biweekly.content.contains("$1,600"));
        assert!(s.weekly.content.contains("40-hour work week"));
        assert!(s.daily.content.contains("8-hour workday"));
        assert_eq!(s.daily.title, "How much is $20 an hour daily?");
    }

    #[test]
    fn test_page_order() {
        let page = generate(20.0, UnitTag::Hourly, BRAND).unwrap();
        let titles: Vec<&str> = page
            .sections
            .in_page_order()
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert!(titles[0].ends_with("annually?"));
        assert!(titles[4].ends_with("daily?"));
    }

    #[test]
    fn test_non_finite_rate_generates_nothing() {
        assert!(generate(f64::NAN, UnitTag::Hourly, BRAND).is_none());
        assert!(generate(f64::INFINITY, UnitTag::Yearly, BRAND).is_none());
    }
}
