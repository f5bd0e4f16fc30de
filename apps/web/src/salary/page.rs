//! Assembles everything a calculator landing page needs from a slug.
//!
//! Slug Interpreter → Rate Converter → Content Generator → Related-Rate Finder.

use serde::Serialize;

use crate::salary::content::{generate, PageContent};
use crate::salary::converter::{convert, ConversionMode, SalaryBreakdown};
use crate::salary::format::{display_rate, FormattedBreakdown};
use crate::salary::jobs::build_job_search_url;
use crate::salary::related::{find_related, RateCatalog};
use crate::salary::slug::{calculator_path, parse_slug, UnitTag};

/// Site-level inputs to page generation, fixed at startup.
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub brand: String,
    pub job_search_base_url: String,
    pub related_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedRate {
    pub rate: f64,
    pub label: String,
    pub url: String,
}

impl RelatedRate {
    pub fn new(rate: f64) -> Self {
        Self {
            rate,
            label: display_rate(rate),
            url: calculator_path(rate),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorPage {
    pub slug: String,
    pub hourly_rate: f64,
    pub display_rate: String,
    pub unit: UnitTag,
    pub breakdown: SalaryBreakdown,
    pub formatted: FormattedBreakdown,
    pub content: PageContent,
    pub related: Vec<RelatedRate>,
    pub job_search_url: String,
}

/// Builds the page for `slug`, or `None` when the slug is not recognised.
pub fn build_calculator_page(
    slug: &str,
    catalog: &RateCatalog,
    settings: &PageSettings,
) -> Option<CalculatorPage> {
    let parsed = parse_slug(slug)?;
    let content = generate(parsed.hourly_rate, parsed.unit, &settings.brand)?;
    let breakdown = convert(parsed.hourly_rate, ConversionMode::FixedSchedule);

    let related = find_related(parsed.hourly_rate, catalog, settings.related_limit)
        .into_iter()
        .map(RelatedRate::new)
        .collect();

    Some(CalculatorPage {
        slug: slug.to_string(),
        hourly_rate: parsed.hourly_rate,
        display_rate: display_rate(parsed.hourly_rate),
        unit: parsed.unit,
        formatted: FormattedBreakdown::from(&breakdown),
        breakdown,
        content,
        related,
        job_search_url: build_job_search_url(&settings.job_search_base_url, parsed.hourly_rate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> PageSettings {
        PageSettings {
            brand: "SalaryCalc".to_string(),
            job_search_base_url: "https://jooble.org".to_string(),
            related_limit: 10,
        }
    }

    #[test]
    fn test_hourly_page() {
        let page =
            build_calculator_page("25-dollar-per-hour", &RateCatalog::default(), &settings())
                .unwrap();
        assert_eq!(page.display_rate, "25");
        assert_eq!(page.unit, UnitTag::Hourly);
        assert_eq!(page.formatted.yearly, "$52,000");
        assert_eq!(page.job_search_url, "https://jooble.org/jobs-25-per-hour");
        assert_eq!(page.related.len(), 10);
        assert_eq!(page.related[0].rate, 24.5);
        assert_eq!(page.related[0].url, "/salary-calculator/24.5-dollar-per-hour/");
    }

    #[test]
    fn test_yearly_page_round_trip() {
        let page = build_calculator_page(
            "50000-dollars-per-year",
            &RateCatalog::default(),
            &settings(),
        )
        .unwrap();
        assert!((page.hourly_rate - 24.0385).abs() < 1e-4);
        assert_eq!(page.unit, UnitTag::Yearly);
        assert!(page.content.h1.contains("50k"));
        assert_eq!(page.job_search_url, "https://jooble.org/jobs-24-per-hour");
        assert_eq!(page.related[0].rate, 24.0);
    }

    #[test]
    fn test_related_limit_is_honoured() {
        let limited = PageSettings {
            related_limit: 3,
            ..settings()
        };
        let page =
            build_calculator_page("30-dollar-per-hour", &RateCatalog::default(), &limited)
                .unwrap();
        assert_eq!(page.related.len(), 3);
    }

    #[test]
    fn test_unknown_slug() {
        assert!(
            build_calculator_page("not-a-salary", &RateCatalog::default(), &settings()).is_none()
        );
    }
}
