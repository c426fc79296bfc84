use super::*;

#[test]
fn missing_element_names_the_selector() {
    let err = FxError::MissingElement("#navMenu");
    assert_eq!(err.to_string(), "missing element: #navMenu");
}

#[test]
fn network_and_response_errors_are_distinct() {
    let net = FxError::Network("offline".to_owned());
    let body = FxError::BadResponse("expected value at line 1".to_owned());
    assert_ne!(net, body);
    assert!(body.to_string().starts_with("unexpected response"));
}
