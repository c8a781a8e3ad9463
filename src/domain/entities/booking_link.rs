use url::Url;

pub const DEFAULT_BOOKING_URL: &str = "https://calendly.com/admin-oursocialimage/30min";

const DEFAULT_EMBED_HOST: &str = "localhost";

/// Theming applied to the inline scheduling widget.
const EMBED_PARAMS: [(&str, &str); 5] = [
    ("embed_type", "inline"),
    ("primary_color", "0f172a"),
    ("text_color", "0f172a"),
    ("background_color", "ffffff"),
    ("hide_gdpr_banner", "1"),
];

/// Scheduling event link the booking page embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingLink {
    event_url: Url,
}

impl BookingLink {
    pub fn new(event_url: Url) -> Self {
        Self { event_url }
    }

    /// Inline-embed URL for a page served from `host`.
    ///
    /// Embed parameters replace any value of the same name already on the
    /// event link; unrelated parameters are kept in their original order.
    pub fn embed_url(&self, host: Option<&str>) -> Url {
        let host = host
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_EMBED_HOST);

        let mut params: Vec<(&str, &str)> = vec![("embed_domain", host)];
        params.extend(EMBED_PARAMS);

        let kept: Vec<(String, String)> = self
            .event_url
            .query_pairs()
            .filter(|(key, _)| !params.iter().any(|(name, _)| *name == &**key))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut url = self.event_url.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .extend_pairs(params);
        url
    }
}
