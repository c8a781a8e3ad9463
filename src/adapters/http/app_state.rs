use std::sync::Arc;

use crate::{
    infra::config::AppConfig,
    use_cases::{booking::BookingUseCases, checkout::CheckoutUseCases},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub checkout_use_cases: Arc<CheckoutUseCases>,
    pub booking_use_cases: Arc<BookingUseCases>,
}
