//! Wire enums shared by forms, payloads, and API responses.
//!
//! All enums serialize as the upper snake-case strings the operations API
//! uses (`COMIDA_PERSONAL`, `TRANSFERENCIA`, ...). Parsing from user input is
//! case-insensitive and accepts spaces or dashes in place of underscores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Normalize user input to the wire token form (`"compras insumos"` -> `"COMPRAS_INSUMOS"`).
fn wire_token(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|ch| match ch {
            ' ' | '-' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

/// Human label for a wire token (`"COMPRAS_INSUMOS"` -> `"COMPRAS INSUMOS"`).
#[must_use]
pub fn label_of(token: &str) -> String {
    token.replace('_', " ")
}

// ---------------------------------------------------------------------------
// ExpenseClass
// ---------------------------------------------------------------------------

/// Accounting class of a shift expense. The API knows a single class today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseClass {
    #[default]
    Nmp,
}

impl ExpenseClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nmp => "NMP",
        }
    }
}

impl fmt::Display for ExpenseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match wire_token(s).as_str() {
            "NMP" => Ok(Self::Nmp),
            _ => Err(CoreError::UnknownVariant {
                kind: "expense class",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ExpenseCategory
// ---------------------------------------------------------------------------

/// Category of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    ComidaPersonal,
    Propinas,
    ComprasInsumos,
    Servicios,
    Mantenimiento,
    Limpieza,
    Nomina,
    Impuestos,
    Renta,
    Otros,
}

impl ExpenseCategory {
    /// Every category the API accepts.
    pub const ALL: [Self; 10] = [
        Self::ComidaPersonal,
        Self::Propinas,
        Self::ComprasInsumos,
        Self::Servicios,
        Self::Mantenimiento,
        Self::Limpieza,
        Self::Nomina,
        Self::Impuestos,
        Self::Renta,
        Self::Otros,
    ];

    /// Categories offered for cash expenses paid during a shift.
    pub const SHIFT_CLOSE: [Self; 7] = [
        Self::ComidaPersonal,
        Self::Propinas,
        Self::ComprasInsumos,
        Self::Servicios,
        Self::Mantenimiento,
        Self::Limpieza,
        Self::Otros,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ComidaPersonal => "COMIDA_PERSONAL",
            Self::Propinas => "PROPINAS",
            Self::ComprasInsumos => "COMPRAS_INSUMOS",
            Self::Servicios => "SERVICIOS",
            Self::Mantenimiento => "MANTENIMIENTO",
            Self::Limpieza => "LIMPIEZA",
            Self::Nomina => "NOMINA",
            Self::Impuestos => "IMPUESTOS",
            Self::Renta => "RENTA",
            Self::Otros => "OTROS",
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        label_of(self.as_str())
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = wire_token(s);
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == token)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "expense category",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// VoucherType
// ---------------------------------------------------------------------------

/// Supporting document attached to a shift expense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherType {
    #[default]
    Vale,
    Sistema,
    Factura,
    Ticket,
    SinComprobante,
}

impl VoucherType {
    pub const ALL: [Self; 5] = [
        Self::Vale,
        Self::Sistema,
        Self::Factura,
        Self::Ticket,
        Self::SinComprobante,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vale => "VALE",
            Self::Sistema => "SISTEMA",
            Self::Factura => "FACTURA",
            Self::Ticket => "TICKET",
            Self::SinComprobante => "SIN_COMPROBANTE",
        }
    }
}

impl fmt::Display for VoucherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoucherType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = wire_token(s);
        Self::ALL
            .into_iter()
            .find(|voucher| voucher.as_str() == token)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "voucher type",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// PaymentMethod
// ---------------------------------------------------------------------------

/// How a standalone expense is paid.
///
/// `Efectivo` means cash taken from the safe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Efectivo,
    Transferencia,
}

impl PaymentMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Efectivo => "EFECTIVO",
            Self::Transferencia => "TRANSFERENCIA",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match wire_token(s).as_str() {
            "EFECTIVO" | "CASH" | "CAJA_FUERTE" => Ok(Self::Efectivo),
            "TRANSFERENCIA" | "TRANSFER" => Ok(Self::Transferencia),
            _ => Err(CoreError::UnknownVariant {
                kind: "payment method",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// PaymentTerminal
// ---------------------------------------------------------------------------

/// Card terminal whose tips are paid out in cash at shift close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentTerminal {
    Parrot,
    Clip,
    Getnet,
}

impl PaymentTerminal {
    /// Terminals in the order they appear on the shift-close form.
    pub const ALL: [Self; 3] = [Self::Parrot, Self::Clip, Self::Getnet];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parrot => "PARROT",
            Self::Clip => "CLIP",
            Self::Getnet => "GETNET",
        }
    }
}

impl fmt::Display for PaymentTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentTerminal {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = wire_token(s);
        Self::ALL
            .into_iter()
            .find(|terminal| terminal.as_str() == token)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "payment terminal",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// CashCountStatus
// ---------------------------------------------------------------------------

/// Cash-count outcome as stored by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashCountStatus {
    Cuadrada,
    Sobrante,
    Faltante,
}

impl CashCountStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cuadrada => "CUADRADA",
            Self::Sobrante => "SOBRANTE",
            Self::Faltante => "FALTANTE",
        }
    }
}

impl fmt::Display for CashCountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PaymentStatus
// ---------------------------------------------------------------------------

/// Disbursement state of a recorded expense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pendiente,
    Pagado,
}

impl PaymentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "PENDIENTE",
            Self::Pagado => "PAGADO",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
