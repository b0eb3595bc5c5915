//! Route Handlers
//!
//! Handlers organized by page.

pub mod dashboard;
pub mod health;
pub mod reports;
