//! Expense intake state machine.
//!
//! ```text
//! Idle --begin_extraction--> Processing --complete_extraction--> Success
//!                                       --fail_extraction------> Success (manual fallback)
//! Idle --start_manual------------------------------------------> Success
//! Success --finish_submit(Ok) .. reset delay .. tick--> Idle
//! ```
//!
//! The machine holds no I/O. The caller uploads the receipt between
//! `begin_extraction` and `complete_extraction`, and sends the payload
//! returned by `begin_submit`.

use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::amount::parse_amount;
use crate::entities::NewExpense;
use crate::enums::{ExpenseCategory, PaymentMethod};
use crate::errors::CoreError;

/// Days between a scheduled transfer's expense date and its payment.
pub const SCHEDULED_PAYMENT_DAYS: u64 = 10;

/// Default delay before a successful form clears itself.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStage {
    Idle,
    Processing,
    Success,
}

impl IntakeStage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Processing => "processing",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for IntakeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the editable form's initial values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormOrigin {
    /// Pre-filled from an OCR result.
    Extracted,
    /// Opened blank by the user.
    Manual,
    /// Opened blank because extraction failed.
    ManualFallback,
}

/// Fields returned by the extraction service. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    pub date: Option<NaiveDate>,
    pub vendor: Option<String>,
    pub category: Option<String>,
    pub total: Option<f64>,
    pub description: Option<String>,
}

/// Editable expense form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseForm {
    pub date: NaiveDate,
    pub vendor: String,
    pub category: Option<ExpenseCategory>,
    pub total: String,
    pub payment_method: PaymentMethod,
    pub description: String,
}

impl ExpenseForm {
    /// Blank form dated `date`, paid from the safe.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            vendor: String::new(),
            category: None,
            total: String::new(),
            payment_method: PaymentMethod::default(),
            description: String::new(),
        }
    }

    /// Form pre-filled from an extraction result.
    ///
    /// Missing fields fall back to blanks and `today`. A category the client
    /// does not know is dropped so the user has to pick one.
    #[must_use]
    pub fn from_extracted(fields: ExtractedFields, today: NaiveDate) -> Self {
        Self {
            date: fields.date.unwrap_or(today),
            vendor: fields.vendor.unwrap_or_default(),
            category: fields
                .category
                .as_deref()
                .and_then(|raw| raw.parse::<ExpenseCategory>().ok()),
            total: fields
                .total
                .filter(|value| value.is_finite())
                .map(|value| value.to_string())
                .unwrap_or_default(),
            payment_method: PaymentMethod::default(),
            description: fields.description.unwrap_or_default(),
        }
    }

    /// True when this expense is paid by transfer some days after the fact.
    #[must_use]
    pub fn is_scheduled_disbursement(&self) -> bool {
        self.payment_method == PaymentMethod::Transferencia
            && self.category == Some(ExpenseCategory::Servicios)
    }

    /// Payment date for a scheduled disbursement.
    #[must_use]
    pub fn scheduled_payment_date(&self) -> Option<NaiveDate> {
        if !self.is_scheduled_disbursement() {
            return None;
        }
        self.date.checked_add_days(Days::new(SCHEDULED_PAYMENT_DAYS))
    }

    /// Validate and convert into the API payload.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the total is not a finite number
    /// greater than zero, the vendor is blank, or no category is selected.
    pub fn validate(&self) -> Result<NewExpense, CoreError> {
        let amount = parse_amount(&self.total)
            .filter(|value| *value > 0.0)
            .ok_or_else(|| CoreError::validation("amount must be greater than 0"))?;
        let vendor = self.vendor.trim();
        if vendor.is_empty() {
            return Err(CoreError::validation("vendor is required"));
        }
        let category = self
            .category
            .ok_or_else(|| CoreError::validation("category is required"))?;
        let description = self.description.trim();

        Ok(NewExpense {
            date: self.date,
            vendor: vendor.to_string(),
            category,
            amount,
            payment_method: self.payment_method,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

/// MIME type for an accepted receipt file, chosen by extension.
///
/// # Errors
///
/// Returns [`CoreError::UnsupportedFile`] for anything but an image or a PDF.
pub fn receipt_mime_type(file_name: &str) -> Result<&'static str, CoreError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        "gif" => Ok("image/gif"),
        "webp" => Ok("image/webp"),
        "heic" => Ok("image/heic"),
        "pdf" => Ok("application/pdf"),
        _ => Err(CoreError::UnsupportedFile(file_name.to_string())),
    }
}

/// The expense intake flow for a single receipt.
#[derive(Debug, Clone)]
pub struct ExpenseIntake {
    today: NaiveDate,
    reset_delay: Duration,
    stage: IntakeStage,
    origin: Option<FormOrigin>,
    form: Option<ExpenseForm>,
    file_name: Option<String>,
    notice: Option<String>,
    error: Option<String>,
    success: Option<String>,
    saving: bool,
    reset_at: Option<Instant>,
}

impl ExpenseIntake {
    #[must_use]
    pub const fn new(today: NaiveDate, reset_delay: Duration) -> Self {
        Self {
            today,
            reset_delay,
            stage: IntakeStage::Idle,
            origin: None,
            form: None,
            file_name: None,
            notice: None,
            error: None,
            success: None,
            saving: false,
            reset_at: None,
        }
    }

    fn transition(&self, expected: IntakeStage, to: IntakeStage) -> Result<(), CoreError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                from: self.stage.to_string(),
                to: to.to_string(),
            })
        }
    }

    /// Accept a receipt and move to `Processing`. Returns its MIME type.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] outside `Idle`, or
    /// [`CoreError::UnsupportedFile`] for a file that is not an image or PDF.
    pub fn begin_extraction(&mut self, file_name: &str) -> Result<&'static str, CoreError> {
        self.transition(IntakeStage::Idle, IntakeStage::Processing)?;
        let mime = receipt_mime_type(file_name)?;
        self.file_name = Some(file_name.to_string());
        self.error = None;
        self.stage = IntakeStage::Processing;
        Ok(mime)
    }

    /// Pre-fill the form from the extraction result.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] outside `Processing`.
    pub fn complete_extraction(&mut self, fields: ExtractedFields) -> Result<(), CoreError> {
        self.transition(IntakeStage::Processing, IntakeStage::Success)?;
        self.form = Some(ExpenseForm::from_extracted(fields, self.today));
        self.origin = Some(FormOrigin::Extracted);
        self.stage = IntakeStage::Success;
        Ok(())
    }

    /// Degrade to manual entry after the extraction call failed.
    ///
    /// The failure becomes a notice; the error slot stays empty.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] outside `Processing`.
    pub fn fail_extraction(&mut self, reason: &str) -> Result<(), CoreError> {
        self.transition(IntakeStage::Processing, IntakeStage::Success)?;
        self.form = Some(ExpenseForm::new(self.today));
        self.origin = Some(FormOrigin::ManualFallback);
        self.notice = Some(format!(
            "could not read the receipt ({reason}); enter the details manually"
        ));
        self.stage = IntakeStage::Success;
        Ok(())
    }

    /// Skip extraction and open a blank form dated today.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] outside `Idle`.
    pub fn start_manual(&mut self) -> Result<(), CoreError> {
        self.transition(IntakeStage::Idle, IntakeStage::Success)?;
        self.form = Some(ExpenseForm::new(self.today));
        self.origin = Some(FormOrigin::Manual);
        self.stage = IntakeStage::Success;
        Ok(())
    }

    #[must_use]
    pub const fn form(&self) -> Option<&ExpenseForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ExpenseForm> {
        self.form.as_mut()
    }

    #[must_use]
    pub fn scheduled_payment_date(&self) -> Option<NaiveDate> {
        self.form.as_ref()?.scheduled_payment_date()
    }

    /// Notice shown while the scheduled-disbursement rule applies.
    #[must_use]
    pub fn disbursement_notice(&self) -> Option<String> {
        self.scheduled_payment_date().map(|date| {
            format!(
                "transfer for services: payment scheduled {SCHEDULED_PAYMENT_DAYS} days out ({date})"
            )
        })
    }

    /// Validate the form and raise the `saving` flag.
    ///
    /// # Errors
    ///
    /// [`CoreError::SubmissionInFlight`] while saving,
    /// [`CoreError::InvalidTransition`] when no form is open, or the
    /// validation error (also stored as the form error).
    pub fn begin_submit(&mut self) -> Result<NewExpense, CoreError> {
        if self.saving {
            return Err(CoreError::SubmissionInFlight);
        }
        let Some(form) = self.form.as_ref().filter(|_| self.stage == IntakeStage::Success) else {
            return Err(CoreError::InvalidTransition {
                from: self.stage.to_string(),
                to: "submit".to_string(),
            });
        };
        self.error = None;
        self.success = None;
        match form.validate() {
            Ok(payload) => {
                self.saving = true;
                Ok(payload)
            }
            Err(error) => {
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Record the API outcome. On success the reset timer starts at `now`.
    pub fn finish_submit(&mut self, outcome: Result<(), String>, now: Instant) {
        self.saving = false;
        match outcome {
            Ok(()) => {
                self.success = Some("expense recorded".to_string());
                self.reset_at = Some(now + self.reset_delay);
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Advance the clock. Resets the flow once the delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.reset_at {
            Some(deadline) if now >= deadline => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// Back to `Idle` with every field cleared.
    pub fn reset(&mut self) {
        *self = Self::new(self.today, self.reset_delay);
    }

    #[must_use]
    pub const fn stage(&self) -> IntakeStage {
        self.stage
    }

    #[must_use]
    pub const fn origin(&self) -> Option<FormOrigin> {
        self.origin
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    #[must_use]
    pub const fn is_saving(&self) -> bool {
        self.saving
    }

    #[must_use]
    pub const fn reset_at(&self) -> Option<Instant> {
        self.reset_at
    }
}
