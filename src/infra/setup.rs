use crate::{
    adapters::http::app_state::AppState,
    domain::entities::plan::Plan,
    infra::config::AppConfig,
    use_cases::{booking::BookingUseCases, checkout::CheckoutUseCases},
};
use env_helpers::get_env_default;
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env()?;
    Ok(build_app_state(config))
}

pub fn build_app_state(config: AppConfig) -> AppState {
    let checkout_use_cases = CheckoutUseCases::new(Arc::new(config.plans.clone()));
    let booking_use_cases = BookingUseCases::new(config.booking_link.clone());

    AppState {
        config: Arc::new(config),
        checkout_use_cases: Arc::new(checkout_use_cases),
        booking_use_cases: Arc::new(booking_use_cases),
    }
}

/// Logs which plans can be purchased. Runs after tracing is initialized.
pub fn log_plan_summary(config: &AppConfig) {
    let configured = config.plans.configured_plans();
    let missing: Vec<Plan> = Plan::all()
        .iter()
        .copied()
        .filter(|plan| !configured.contains(plan))
        .collect();

    tracing::info!(?configured, "Checkout links loaded");
    if !missing.is_empty() {
        tracing::warn!(?missing, "Plans without a checkout link will be rejected");
    }
}

pub fn init_tracing() {
    let log_file: String = get_env_default("LOG_FILE", String::from("app.log"));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "growth_hub=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs), skipped if the file can't be created
    let (json_layer, file_error) = match File::create(&log_file) {
        Ok(file) => {
            let layer = fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true);
            (Some(layer), None)
        }
        Err(err) => (None, Some(err)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    if let Some(err) = file_error {
        tracing::warn!(error = %err, %log_file, "JSON log file disabled");
    }
}
