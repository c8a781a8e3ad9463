use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::adapters::http::app_state::AppState;

#[derive(Deserialize)]
struct EmbedQuery {
    host: Option<String>,
}

#[derive(Serialize)]
struct EmbedUrlResponse {
    url: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/embed-url", get(embed_url))
}

async fn embed_url(
    State(app_state): State<AppState>,
    Query(query): Query<EmbedQuery>,
) -> impl IntoResponse {
    let url = app_state
        .booking_use_cases
        .embed_url(query.host.as_deref());
    Json(EmbedUrlResponse { url })
}
