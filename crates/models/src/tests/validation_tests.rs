use crate::{provider_profile, service};
use serde_json::json;

#[test]
fn price_type_is_case_insensitive() {
    assert_eq!(service::validate_price_type("FIXED").unwrap(), "fixed");
    assert_eq!(service::validate_price_type("Hourly").unwrap(), "hourly");
    assert!(service::validate_price_type("barter").is_err());
}

#[test]
fn rejects_blank_name_and_negative_price() {
    assert!(service::validate_name("  ").is_err());
    assert!(service::validate_name("Haircut").is_ok());
    assert!(service::validate_price_amount(-1.0).is_err());
    assert!(service::validate_price_amount(f64::NAN).is_err());
    assert!(service::validate_price_amount(0.0).is_ok());
}

#[test]
fn verification_status_enumeration() {
    assert!(provider_profile::validate_status("approved").is_ok());
    assert!(provider_profile::validate_status("verified").is_err());
}

#[test]
fn embedded_services_parse_leniently() {
    let m = sample_profile(json!([
        {"name": "Haircut", "priceAmount": 30.5, "category": "beauty-wellness"},
        {"name": "Massage"}
    ]));
    let svcs = m.embedded_services();
    assert_eq!(svcs.len(), 2);
    assert_eq!(svcs[0].name, "Haircut");
    assert_eq!(svcs[0].price_amount, Some(30.5));
    assert!(svcs[1].category.is_none());
}

#[test]
fn malformed_embedded_services_degrade_to_empty() {
    let m = sample_profile(json!({"oops": true}));
    assert!(m.embedded_services().is_empty());
}

fn sample_profile(services: serde_json::Value) -> provider_profile::Model {
    provider_profile::Model {
        id: uuid::Uuid::new_v4(),
        user_id: uuid::Uuid::new_v4(),
        business_name: "Sample Co".into(),
        city: "Dubai".into(),
        state: "Dubai".into(),
        verification_status: provider_profile::STATUS_APPROVED.into(),
        services,
        created_at: chrono::Utc::now().into(),
        updated_at: chrono::Utc::now().into(),
    }
}
