//! JSON endpoints backing the calculator widget.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::salary::page::{build_calculator_page, CalculatorPage};
use crate::salary::widget::{WidgetInput, WidgetResult};
use crate::state::AppState;

/// GET /api/v1/convert?rate=&hours_per_day=&days_per_week=&weeks_per_year=
///
/// Recomputes the widget on every input change. Never fails: unusable fields fall back
/// to their defaults.
pub async fn handle_convert(Query(input): Query<WidgetInput>) -> Json<WidgetResult> {
    let result = input.evaluate();
    debug!(
        "Widget conversion: rate={} schedule={:?}",
        result.rate, result.schedule
    );
    Json(result)
}

/// GET /api/v1/pages/:slug
///
/// The same data the HTML calculator page renders, as JSON.
pub async fn handle_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CalculatorPage>, AppError> {
    build_calculator_page(&slug, &state.catalog, &state.page_settings)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No salary page for slug '{slug}'")))
}
