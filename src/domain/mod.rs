//! Domain layer - core business logic and entities

pub mod notify;
pub mod price;
pub mod report;
