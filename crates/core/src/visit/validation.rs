//! Draft validation for visit reports.

use chrono::NaiveDate;

use super::types::{FieldError, Sentinels, ValidatedVisit, VisitDraft};

/// Validates a submitted visit draft.
///
/// Rules:
/// - when both times are present, the end must be strictly after the start;
///   both are combined with `today` into timestamps,
/// - no-sale reports have their payment method and product set forced to
///   the "N/A" sentinels regardless of what was submitted.
///
/// # Errors
///
/// Returns the list of field-scoped errors when any rule fails.
pub fn validate_draft(
    draft: VisitDraft,
    sentinels: &Sentinels,
    today: NaiveDate,
) -> Result<ValidatedVisit, Vec<FieldError>> {
    let mut errors = Vec::new();

    if let (Some(start), Some(end)) = (draft.started_at, draft.ended_at) {
        if end <= start {
            errors.push(FieldError::new(
                "ended_at",
                "La hora de término debe ser mayor a la de inicio.",
            ));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let (product_type_ids, payment_method_id) = if draft.sale_completed {
        (draft.product_type_ids, draft.payment_method_id)
    } else {
        (
            vec![sentinels.product_type_na],
            Some(sentinels.payment_method_na),
        )
    };

    Ok(ValidatedVisit {
        client_id: draft.client_id,
        first_name: draft.first_name,
        last_name: draft.last_name,
        commerce_name: draft.commerce_name,
        started_at: draft.started_at.map(|t| today.and_time(t)),
        ended_at: draft.ended_at.map(|t| today.and_time(t)),
        sale_completed: draft.sale_completed,
        product_type_ids,
        payment_method_id,
        contact_method_id: draft.contact_method_id,
        note: draft.note,
    })
}
