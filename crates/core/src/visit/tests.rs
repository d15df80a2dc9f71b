//! Tests for visit draft validation.

use chrono::{NaiveDate, NaiveTime};
use vendra_shared::types::{PaymentMethodId, ProductTypeId};

use super::types::{Sentinels, VisitDraft};
use super::validation::validate_draft;

fn sentinels() -> Sentinels {
    Sentinels {
        product_type_na: ProductTypeId::new(),
        payment_method_na: PaymentMethodId::new(),
    }
}

fn draft() -> VisitDraft {
    VisitDraft {
        client_id: None,
        first_name: Some("Ana".to_string()),
        last_name: Some("Rojas".to_string()),
        commerce_name: None,
        started_at: Some(NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
        ended_at: Some(NaiveTime::from_hms_opt(11, 30, 0).unwrap()),
        sale_completed: true,
        product_type_ids: vec![ProductTypeId::new()],
        payment_method_id: Some(PaymentMethodId::new()),
        contact_method_id: None,
        note: "Visita en terreno".to_string(),
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

#[test]
fn test_valid_sale_draft_keeps_submitted_products_and_payment() {
    let input = draft();
    let products = input.product_type_ids.clone();
    let payment = input.payment_method_id;

    let visit = validate_draft(input, &sentinels(), today()).unwrap();

    assert!(visit.sale_completed);
    assert_eq!(visit.product_type_ids, products);
    assert_eq!(visit.payment_method_id, payment);
}

#[test]
fn test_times_are_combined_with_submission_date() {
    let visit = validate_draft(draft(), &sentinels(), today()).unwrap();

    let started = visit.started_at.unwrap();
    let ended = visit.ended_at.unwrap();
    assert_eq!(started.date(), today());
    assert_eq!(ended.date(), today());
    assert!(ended > started);
}

#[test]
fn test_end_before_start_is_a_field_error() {
    let mut input = draft();
    input.started_at = Some(NaiveTime::from_hms_opt(15, 0, 0).unwrap());
    input.ended_at = Some(NaiveTime::from_hms_opt(14, 0, 0).unwrap());

    let errors = validate_draft(input, &sentinels(), today()).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "ended_at");
}

#[test]
fn test_end_equal_to_start_is_rejected() {
    let mut input = draft();
    let t = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    input.started_at = Some(t);
    input.ended_at = Some(t);

    assert!(validate_draft(input, &sentinels(), today()).is_err());
}

#[test]
fn test_no_sale_forces_sentinels_regardless_of_submission() {
    let sentinels = sentinels();
    let mut input = draft();
    input.sale_completed = false;
    // Submitted values must be discarded.
    input.product_type_ids = vec![ProductTypeId::new(), ProductTypeId::new()];
    input.payment_method_id = Some(PaymentMethodId::new());

    let visit = validate_draft(input, &sentinels, today()).unwrap();

    assert_eq!(visit.product_type_ids, vec![sentinels.product_type_na]);
    assert_eq!(visit.payment_method_id, Some(sentinels.payment_method_na));
}

#[test]
fn test_missing_times_are_allowed() {
    let mut input = draft();
    input.started_at = None;
    input.ended_at = None;

    let visit = validate_draft(input, &sentinels(), today()).unwrap();
    assert_eq!(visit.started_at, None);
    assert_eq!(visit.ended_at, None);
}
