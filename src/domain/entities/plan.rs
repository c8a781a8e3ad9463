use strum::{AsRefStr, Display, EnumString};

/// Purchasable plan offered on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Plan {
    Starter,
    Pro,
    Vip,
}

impl Plan {
    pub fn all() -> &'static [Plan] {
        &[Plan::Starter, Plan::Pro, Plan::Vip]
    }

    /// Parses a raw, user-supplied token. Lower-cases the input but does
    /// not trim it, so `" pro"` is not a plan.
    pub fn from_token(token: &str) -> Option<Self> {
        token.to_lowercase().parse().ok()
    }

    /// Environment keys holding the checkout link, primary first.
    pub fn checkout_env_keys(&self) -> (&'static str, &'static str) {
        match self {
            Plan::Starter => ("STRIPE_STARTER_URL", "NEXT_PUBLIC_STRIPE_STARTER"),
            Plan::Pro => ("STRIPE_PRO_URL", "NEXT_PUBLIC_STRIPE_PRO"),
            Plan::Vip => ("STRIPE_VIP_URL", "NEXT_PUBLIC_STRIPE_VIP"),
        }
    }
}
