pub mod booking;
pub mod checkout;
