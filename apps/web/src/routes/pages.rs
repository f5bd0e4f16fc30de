//! HTML page handlers.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, info};

use crate::errors::PageError;
use crate::salary::converter::{convert, ConversionMode};
use crate::salary::format::FormattedBreakdown;
use crate::salary::page::{build_calculator_page, RelatedRate};
use crate::salary::widget::WidgetInput;
use crate::state::AppState;
use crate::views::{
    AboutTemplate, CalculatorTemplate, CookiesTemplate, HomeTemplate, NotFoundTemplate, PageMeta,
    PopularRate, PrivacyTemplate,
};

/// Rates featured in the home page table.
const POPULAR_RATES: &[f64] = &[
    15.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0, 35.0, 40.0, 45.0, 50.0,
];

/// Rate pre-filled in the home page quick calculator.
const QUICK_CALC_RATE: &str = "25";

fn meta(state: &AppState, title: &str, description: &str) -> PageMeta {
    PageMeta {
        brand: state.config.site_name.clone(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn render<T: Template>(template: &T) -> Result<Response, PageError> {
    Ok(Html(template.render()?).into_response())
}

/// GET /
pub async fn home(State(state): State<AppState>) -> Result<Response, PageError> {
    let brand = &state.config.site_name;

    let popular = POPULAR_RATES
        .iter()
        .map(|&rate| PopularRate {
            link: RelatedRate::new(rate),
            formatted: FormattedBreakdown::from(&convert(rate, ConversionMode::FixedSchedule)),
        })
        .collect();

    let all_rates = state
        .catalog
        .rates()
        .iter()
        .map(|&rate| RelatedRate::new(rate))
        .collect();

    let quick = WidgetInput {
        rate: Some(QUICK_CALC_RATE.to_string()),
        ..WidgetInput::default()
    }
    .evaluate();

    render(&HomeTemplate {
        meta: meta(
            &state,
            &format!("Salary Calculator - Convert Hourly Wage to Annual Salary | {brand}"),
            "Free salary calculator to convert hourly wages to yearly, monthly, weekly income. \
             Calculate your annual salary from $10 to $100 per hour.",
        ),
        quick_rate: QUICK_CALC_RATE.to_string(),
        quick: quick.formatted,
        quick_detail_url: quick.detail_url,
        popular,
        all_rates,
    })
}

/// GET /about/
pub async fn about(State(state): State<AppState>) -> Result<Response, PageError> {
    let brand = &state.config.site_name;
    render(&AboutTemplate {
        meta: meta(
            &state,
            &format!("About Us | {brand} - Salary Calculator"),
            &format!(
                "Learn about {brand} - our mission, expertise, and how we help workers \
                 understand their earning potential."
            ),
        ),
    })
}

/// GET /privacy-policy/
pub async fn privacy_policy(State(state): State<AppState>) -> Result<Response, PageError> {
    let brand = &state.config.site_name;
    render(&PrivacyTemplate {
        meta: meta(
            &state,
            &format!("Privacy Policy | {brand}"),
            &format!(
                "{brand} privacy policy - how we collect, use, and protect your information."
            ),
        ),
    })
}

/// GET /cookie-policy/
pub async fn cookie_policy(State(state): State<AppState>) -> Result<Response, PageError> {
    let brand = &state.config.site_name;
    render(&CookiesTemplate {
        meta: meta(
            &state,
            &format!("Cookie Policy | {brand}"),
            &format!("{brand} cookie policy - what cookies we use and how to manage them."),
        ),
    })
}

/// GET /salary-calculator/:slug/
///
/// Unrecognised slugs render the 404 page.
pub async fn calculator(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, PageError> {
    let Some(page) = build_calculator_page(&slug, &state.catalog, &state.page_settings) else {
        debug!("No calculator pattern matched slug '{slug}'");
        return not_found_page(&state, &format!("/salary-calculator/{slug}/"));
    };

    info!(
        "Calculator page: slug={slug} rate={} unit={:?}",
        page.display_rate, page.unit
    );

    render(&CalculatorTemplate {
        meta: PageMeta {
            brand: state.config.site_name.clone(),
            title: page.content.title.clone(),
            description: page.content.meta_description.clone(),
        },
        rate: page.display_rate,
        formatted: page.formatted,
        content: page.content,
        related: page.related,
        job_search_url: page.job_search_url,
    })
}

/// GET /salary-calculator/:slug
///
/// Permanent (301) redirect to the trailing-slash form.
pub async fn redirect_to_slash(uri: Uri) -> Response {
    // The raw path keeps the slug percent-encoded, so it is always a valid header value.
    let location = format!("{}/", uri.path());
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
}

/// Fallback for every unmatched route.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Result<Response, PageError> {
    debug!("No route for {uri}");
    not_found_page(&state, uri.path())
}

fn not_found_page(state: &AppState, path: &str) -> Result<Response, PageError> {
    let body = NotFoundTemplate {
        meta: meta(
            state,
            &format!("Page Not Found | {}", state.config.site_name),
            "Page not found",
        ),
        path: path.to_string(),
    }
    .render()?;
    Ok((StatusCode::NOT_FOUND, Html(body)).into_response())
}
