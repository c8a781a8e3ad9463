pub mod booking;
pub mod checkout;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(checkout::router())
        .nest("/booking", booking::router())
}
