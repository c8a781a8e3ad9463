pub mod booking_link;
pub mod plan;
pub mod plan_catalog;
