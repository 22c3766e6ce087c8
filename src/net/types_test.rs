use super::*;

// =============================================================
// Credentials serialization
// =============================================================

#[test]
fn credentials_serialize_to_expected_shape() {
    let creds = Credentials {
        username: "alice".to_owned(),
        password: "hunter2".to_owned(),
    };
    let json = serde_json::to_value(&creds).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "username": "alice", "password": "hunter2" })
    );
}

// =============================================================
// ApiMessage deserialization
// =============================================================

#[test]
fn api_message_reads_message_field() {
    let body: ApiMessage =
        serde_json::from_str(r#"{"message":"Username already exists"}"#).expect("deserialize");
    assert_eq!(body.message.as_deref(), Some("Username already exists"));
}

#[test]
fn api_message_tolerates_missing_message() {
    let body: ApiMessage = serde_json::from_str("{}").expect("deserialize");
    assert!(body.message.is_none());
}

#[test]
fn api_message_ignores_extra_fields() {
    let body: ApiMessage =
        serde_json::from_str(r#"{"message":"ok","user_id":7}"#).expect("deserialize");
    assert_eq!(body.message.as_deref(), Some("ok"));
}
