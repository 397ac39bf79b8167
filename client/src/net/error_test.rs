use super::*;

#[test]
fn provider_error_message_reads_gotrue_msg() {
    let body = r#"{"code":422,"error_code":"user_already_exists","msg":"User already registered"}"#;
    assert_eq!(provider_error_message(body), Some("User already registered".to_owned()));
}

#[test]
fn provider_error_message_reads_error_description() {
    let body = r#"{"error":"invalid_grant","error_description":"Password should be at least 6 characters"}"#;
    assert_eq!(
        provider_error_message(body),
        Some("Password should be at least 6 characters".to_owned())
    );
}

#[test]
fn provider_error_message_reads_postgrest_message() {
    let body = r#"{"code":"23505","details":null,"hint":null,"message":"duplicate key value violates unique constraint"}"#;
    assert_eq!(
        provider_error_message(body),
        Some("duplicate key value violates unique constraint".to_owned())
    );
}

#[test]
fn provider_error_message_skips_blank_fields() {
    let body = r#"{"msg":"  ","error":"rate limited"}"#;
    assert_eq!(provider_error_message(body), Some("rate limited".to_owned()));
}

#[test]
fn provider_error_message_ignores_non_json() {
    assert_eq!(provider_error_message("<html>502</html>"), None);
    assert_eq!(provider_error_message(""), None);
}

#[test]
fn from_response_prefers_provider_message() {
    assert_eq!(
        ApiError::from_response(400, r#"{"msg":"Signups not allowed"}"#),
        ApiError::Rejected("Signups not allowed".to_owned())
    );
    assert_eq!(ApiError::from_response(503, "upstream down"), ApiError::Status(503));
}

#[test]
fn rejected_displays_message_verbatim() {
    assert_eq!(ApiError::Rejected("User already registered".to_owned()).to_string(), "User already registered");
}

#[test]
fn other_variants_have_short_descriptions() {
    assert_eq!(ApiError::Status(500).to_string(), "request failed: 500");
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
    assert_eq!(ApiError::Decode("missing id".to_owned()).to_string(), "unexpected response: missing id");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
