use crate::domain::entities::booking_link::BookingLink;

pub struct BookingUseCases {
    link: BookingLink,
}

impl BookingUseCases {
    pub fn new(link: BookingLink) -> Self {
        Self { link }
    }

    /// Inline scheduling widget URL for the page embedding it.
    pub fn embed_url(&self, host: Option<&str>) -> String {
        self.link.embed_url(host).to_string()
    }
}
