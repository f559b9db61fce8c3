//! # koi-core
//!
//! Core types and pure domain logic for the El Koi operations client.
//!
//! This crate performs no I/O. It provides:
//! - Entity structs for the payloads exchanged with the operations API
//! - Wire enums (expense categories, vouchers, payment terminals, ...)
//! - Lenient amount parsing for text form fields
//! - The cash reconciliation calculator
//! - Form state for shift closing and expense intake
//! - Chart and currency formatting helpers
//! - Process-wide application state (active route and branch)

pub mod amount;
pub mod app_state;
pub mod chart;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod intake;
pub mod money;
pub mod reconciliation;
pub mod shift_close;

pub use errors::CoreError;
