use std::net::SocketAddr;

use anyhow::Context;
use axum::http::HeaderValue;
use env_helpers::{get_env_default, get_env_opt};
use url::Url;

use crate::domain::entities::{
    booking_link::{BookingLink, DEFAULT_BOOKING_URL},
    plan_catalog::{PlanCatalog, coalesce},
};

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub booking_link: BookingLink,
    pub plans: PlanCatalog,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = parse_bind_addr(get_env_opt("BIND_ADDR"))?;
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .context("CORS_ORIGIN must be a valid header value")?;

        // Empty means unset, like the checkout links.
        let booking_url = coalesce(std::env::var("NEXT_PUBLIC_CALENDLY_URL").ok(), None)
            .unwrap_or_else(|| DEFAULT_BOOKING_URL.to_string());
        let booking_url =
            Url::parse(&booking_url).context("NEXT_PUBLIC_CALENDLY_URL must be a valid URL")?;

        let plans = PlanCatalog::from_lookup(|key| std::env::var(key).ok());

        Ok(Self {
            bind_addr,
            cors_origin,
            booking_link: BookingLink::new(booking_url),
            plans,
        })
    }
}

/// `BIND_ADDR` as a socket address; `127.0.0.1:3001` when unset or empty.
fn parse_bind_addr(raw: Option<String>) -> anyhow::Result<SocketAddr> {
    match raw.filter(|value| !value.trim().is_empty()) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("BIND_ADDR must be a socket address, got {value:?}")),
        None => Ok(SocketAddr::from(([127, 0, 0, 1], 3001))),
    }
}
