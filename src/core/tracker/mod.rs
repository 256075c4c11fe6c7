//! One tracker per entity type. A tracker is the only way to change its
//! records; cross-entity checks happen in the commands that use two trackers.

pub mod appointment;
pub mod client;
pub mod expense;
pub mod revenue;
pub mod service;

pub use appointment::AppointmentTracker;
pub use client::ClientTracker;
pub use expense::ExpenseTracker;
pub use revenue::RevenueTracker;
pub use service::ServiceTracker;
