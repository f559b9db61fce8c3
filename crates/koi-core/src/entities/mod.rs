//! Payload entities sent to the operations API.
//!
//! Field names are English in Rust and renamed to the API's Spanish wire
//! names through serde.

mod expense;
mod shift_close;

pub use expense::{ExpenseLineItem, NewExpense};
pub use shift_close::{CashCountUpdate, ShiftClose, TipEntry};

use serde::{Deserialize, Deserializer, Serializer};

/// Serialize an optional text field as `""` when absent.
pub(crate) fn empty_when_none<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

/// Deserialize a text field, mapping `null` and blank strings to `None`.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}
