//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` creates an `AppState` from an in-memory set of
//! environment values, so tests never touch the process environment.

use std::collections::HashMap;

use axum::http::HeaderValue;
use url::Url;

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::{
        booking_link::{BookingLink, DEFAULT_BOOKING_URL},
        plan_catalog::PlanCatalog,
    },
    infra::{config::AppConfig, setup::build_app_state},
};

pub struct TestAppStateBuilder {
    env: HashMap<String, String>,
    booking_url: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            env: HashMap::new(),
            booking_url: DEFAULT_BOOKING_URL.to_string(),
        }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    /// Primary checkout links for every plan at `https://pay.example/<plan>`.
    pub fn with_all_plans(self) -> Self {
        self.with_env("STRIPE_STARTER_URL", "https://pay.example/starter")
            .with_env("STRIPE_PRO_URL", "https://pay.example/pro")
            .with_env("STRIPE_VIP_URL", "https://pay.example/vip")
    }

    pub fn with_booking_url(mut self, url: &str) -> Self {
        self.booking_url = url.to_string();
        self
    }

    pub fn build(self) -> AppState {
        let env = self.env;
        let config = AppConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            booking_link: BookingLink::new(Url::parse(&self.booking_url).unwrap()),
            plans: PlanCatalog::from_lookup(|key| env.get(key).cloned()),
        };
        build_app_state(config)
    }
}
