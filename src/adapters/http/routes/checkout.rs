use axum::{
    Router,
    extract::{RawQuery, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use url::form_urlencoded;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/checkout", get(checkout))
}

/// GET /checkout?plan=<plan>
///
/// Redirects (302) to the hosted checkout page of the requested plan.
async fn checkout(
    State(app_state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<impl IntoResponse> {
    let plan = query.as_deref().and_then(first_plan_param);

    let destination = app_state.checkout_use_cases.resolve(plan.as_deref())?;

    let location = HeaderValue::from_str(&destination.url).map_err(|err| {
        AppError::Internal(format!(
            "checkout link for {} is not a valid header value: {err}",
            destination.plan
        ))
    })?;

    tracing::info!(plan = %destination.plan, "Redirecting to checkout");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// First `plan` value in the query string; later repeats are ignored.
fn first_plan_param(query: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "plan")
        .map(|(_, value)| value.into_owned())
}
