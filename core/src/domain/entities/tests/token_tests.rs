//! Unit tests for token claims

use chrono::{Duration, Utc};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

#[test]
fn test_claims_expiry_window() {
    let now = Utc::now();
    let claims = Claims::new("A", 7, now, 3600).unwrap();

    assert_eq!(claims.name, "A");
    assert_eq!(claims.id, 7);
    assert_eq!(claims.exp - claims.iat, 3600);
    assert!(!claims.is_expired());
}

#[test]
fn test_claims_issued_in_the_past_are_expired() {
    let issued_at = Utc::now() - Duration::seconds(120);
    let claims = Claims::new("A", 7, issued_at, 60).unwrap();

    assert!(claims.is_expired());
}

#[test]
fn test_claims_serialize_only_name_id_and_timestamps() {
    let claims = Claims::new("A", 7, Utc::now(), 60).unwrap();
    let json = serde_json::to_value(&claims).unwrap();
    let object = json.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["exp", "iat", "id", "name"]);
}

#[test]
fn test_claims_reject_expiry_past_date_range() {
    let result = Claims::new("A", 7, Utc::now(), i64::MAX / 100);
    assert_eq!(result, Err(TokenError::TokenGenerationFailed));

    let result = Claims::new("A", 7, Utc::now(), i64::MAX);
    assert_eq!(result, Err(TokenError::TokenGenerationFailed));
}
