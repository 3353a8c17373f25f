use crate::tests::set_of;
use crate::{UseCase, UseCaseSelector};

use serde_json::json;

#[test]
fn given_known_string_when_normalized_then_single_element_set() {
    // Given
    let value = json!("Healthcare Price Transparency");

    // When
    let set = UseCaseSelector::from_value(Some(&value)).normalize();

    // Then
    assert_eq!(set, set_of(&[UseCase::HealthcarePriceTransparency]));
}

#[test]
fn given_unknown_string_when_normalized_then_empty() {
    let value = json!("Dental Copilot");

    let set = UseCaseSelector::from_value(Some(&value)).normalize();

    assert!(set.is_empty());
}

#[test]
fn given_array_with_unknowns_and_duplicates_when_normalized_then_order_kept_and_filtered() {
    // Given
    let value = json!([
        "Member Dashboard",
        "Dental Copilot",
        "Healthcare Underwriter Dashboard",
        "Member Dashboard",
        42,
        null
    ]);

    // When
    let set = UseCaseSelector::from_value(Some(&value)).normalize();

    // Then
    assert_eq!(
        set.as_slice(),
        &[UseCase::MemberDashboard, UseCase::HealthcareUnderwriterDashboard]
    );
}

#[test]
fn given_missing_or_null_selector_when_normalized_then_empty() {
    assert_eq!(UseCaseSelector::from_value(None), UseCaseSelector::Absent);
    assert_eq!(
        UseCaseSelector::from_value(Some(&json!(null))),
        UseCaseSelector::Absent
    );
    assert!(UseCaseSelector::Absent.normalize().is_empty());
}

#[test]
fn given_object_or_number_selector_when_normalized_then_malformed_and_empty() {
    for value in [json!({"useCase": "Member Dashboard"}), json!(7), json!(true)] {
        let selector = UseCaseSelector::from_value(Some(&value));
        assert_eq!(selector, UseCaseSelector::Malformed);
        assert!(selector.normalize().is_empty());
    }
}

#[test]
fn given_empty_array_when_normalized_then_empty() {
    let set = UseCaseSelector::from_value(Some(&json!([]))).normalize();
    assert!(set.is_empty());
}

#[test]
fn given_set_when_duplicate_inserted_then_rejected() {
    let mut set = set_of(&[UseCase::MemberDashboard]);

    assert!(!set.insert(UseCase::MemberDashboard));
    assert!(set.insert(UseCase::HealthcarePriceTransparency));
    assert_eq!(set.len(), 2);
}

#[test]
fn given_set_in_input_order_when_iterated_in_enumeration_order_then_reordered() {
    let set = set_of(&[
        UseCase::VoiceEnabledHealthcarePriceTransparency,
        UseCase::UserFeedbackAnalysisDashboard,
    ]);

    let ordered: Vec<UseCase> = set.in_enumeration_order().collect();

    assert_eq!(
        ordered,
        vec![
            UseCase::UserFeedbackAnalysisDashboard,
            UseCase::VoiceEnabledHealthcarePriceTransparency
        ]
    );
}
