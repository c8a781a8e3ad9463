use axum::http::HeaderValue;
use url::Url;

use super::plan::Plan;

/// Checkout destination per plan. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanCatalog {
    pub starter: Option<String>,
    pub pro: Option<String>,
    pub vip: Option<String>,
}

impl PlanCatalog {
    /// Builds the catalog from a key lookup (normally the process environment).
    ///
    /// For every plan the primary key wins over the fallback key when it is
    /// non-empty. A winning value that is not an absolute http(s) URL, or that
    /// cannot be sent as a `Location` header as-is, leaves the plan
    /// unconfigured.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |plan: Plan| {
            let (primary_key, fallback_key) = plan.checkout_env_keys();
            let value = coalesce(lookup(primary_key), lookup(fallback_key))?;
            if is_checkout_url(&value) {
                Some(value)
            } else {
                tracing::warn!(
                    plan = %plan,
                    "Ignoring checkout link that is not a usable absolute http(s) URL"
                );
                None
            }
        };

        Self {
            starter: resolve(Plan::Starter),
            pro: resolve(Plan::Pro),
            vip: resolve(Plan::Vip),
        }
    }

    pub fn destination(&self, plan: Plan) -> Option<&str> {
        match plan {
            Plan::Starter => self.starter.as_deref(),
            Plan::Pro => self.pro.as_deref(),
            Plan::Vip => self.vip.as_deref(),
        }
    }

    pub fn configured_plans(&self) -> Vec<Plan> {
        Plan::all()
            .iter()
            .copied()
            .filter(|plan| self.destination(*plan).is_some())
            .collect()
    }
}

/// First non-empty value, returned unchanged. Absent and whitespace-only
/// values count as empty.
pub fn coalesce(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    [primary, fallback]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

// `Url::parse` strips tabs and newlines and tolerates surrounding whitespace,
// so the raw value is also checked as the header it will be sent in.
fn is_checkout_url(value: &str) -> bool {
    let parses = Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false);

    parses && value.trim() == value && HeaderValue::from_str(value).is_ok()
}
