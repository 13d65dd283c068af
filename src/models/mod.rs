pub mod booking;
pub mod error;
pub mod ticket;
