//! Visit report domain types.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use vendra_shared::types::{ClientId, ContactMethodId, PaymentMethodId, ProductTypeId};

/// Designated "N/A" lookup rows, resolved once at startup.
///
/// No-sale reports have their payment method and product set forced to
/// these rows. A database without them is a fatal configuration error
/// detected at boot, not a per-record error.
#[derive(Debug, Clone, Copy)]
pub struct Sentinels {
    /// The "N/A" product category.
    pub product_type_na: ProductTypeId,
    /// The "N/A" payment method.
    pub payment_method_na: PaymentMethodId,
}

/// A visit report as submitted by a seller, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct VisitDraft {
    /// Confirmed client visited, if any.
    pub client_id: Option<ClientId>,
    /// Contact first name when the visit was to an unconverted prospect.
    pub first_name: Option<String>,
    /// Contact surname when the visit was to an unconverted prospect.
    pub last_name: Option<String>,
    /// Commerce name when the visit was to an unconverted prospect.
    pub commerce_name: Option<String>,
    /// Wall-clock start of the visit.
    pub started_at: Option<NaiveTime>,
    /// Wall-clock end of the visit; must be after the start.
    pub ended_at: Option<NaiveTime>,
    /// Whether a sale was completed during the visit.
    pub sale_completed: bool,
    /// Product categories involved in the sale.
    #[serde(default)]
    pub product_type_ids: Vec<ProductTypeId>,
    /// Payment method used, when a sale was completed.
    pub payment_method_id: Option<PaymentMethodId>,
    /// How the contact was made.
    pub contact_method_id: Option<ContactMethodId>,
    /// Free-text observations.
    #[serde(default)]
    pub note: String,
}

/// A visit report that passed validation and is ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedVisit {
    /// Confirmed client visited, if any.
    pub client_id: Option<ClientId>,
    /// Denormalized contact first name for unconverted prospects.
    pub first_name: Option<String>,
    /// Denormalized contact surname for unconverted prospects.
    pub last_name: Option<String>,
    /// Denormalized commerce name for unconverted prospects.
    pub commerce_name: Option<String>,
    /// Visit start combined with the submission date.
    pub started_at: Option<NaiveDateTime>,
    /// Visit end combined with the submission date.
    pub ended_at: Option<NaiveDateTime>,
    /// Whether a sale was completed.
    pub sale_completed: bool,
    /// Product categories; the "N/A" sentinel for no-sale reports.
    pub product_type_ids: Vec<ProductTypeId>,
    /// Payment method; the "N/A" sentinel for no-sale reports.
    pub payment_method_id: Option<PaymentMethodId>,
    /// How the contact was made.
    pub contact_method_id: Option<ContactMethodId>,
    /// Free-text observations.
    pub note: String,
}

/// A validation error scoped to a single submitted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
