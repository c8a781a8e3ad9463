use std::sync::Arc;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::{plan::Plan, plan_catalog::PlanCatalog},
};

/// Resolved hosted checkout page for a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDestination {
    pub plan: Plan,
    pub url: String,
}

pub struct CheckoutUseCases {
    catalog: Arc<PlanCatalog>,
}

impl CheckoutUseCases {
    pub fn new(catalog: Arc<PlanCatalog>) -> Self {
        Self { catalog }
    }

    /// Maps a raw plan token to its checkout link.
    ///
    /// A missing token is treated as empty. Unknown plans and plans without a
    /// configured link both fail with `InvalidPlan`.
    pub fn resolve(&self, requested_plan: Option<&str>) -> AppResult<CheckoutDestination> {
        let token = requested_plan.unwrap_or_default();

        let plan = Plan::from_token(token).ok_or(AppError::InvalidPlan)?;
        let url = self
            .catalog
            .destination(plan)
            .ok_or(AppError::InvalidPlan)?;

        tracing::debug!(plan = %plan, "Resolved checkout destination");

        Ok(CheckoutDestination {
            plan,
            url: url.to_string(),
        })
    }
}
