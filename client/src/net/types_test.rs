use super::*;

#[test]
fn sign_up_request_uses_confirm_pw_key() {
    let req = SignUpRequest {
        name: "Bob".to_owned(),
        username: "bob_the_user".to_owned(),
        password: "Abcdef1!".to_owned(),
        confirm_password: "Abcdef1!".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Bob",
            "username": "bob_the_user",
            "password": "Abcdef1!",
            "confirmPw": "Abcdef1!",
        })
    );
}

#[test]
fn log_in_request_has_only_credentials() {
    let req = LogInRequest { username: "bob".to_owned(), password: "pw".to_owned() };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({ "username": "bob", "password": "pw" }));
}

#[test]
fn log_in_response_reads_camel_case_token() {
    let body: LogInResponse = serde_json::from_str(r#"{"accessToken":"t1","username":"bob","extra":true}"#).unwrap();
    assert_eq!(body.access_token, "t1");
    assert_eq!(body.username, "bob");
}

#[test]
fn log_in_response_rejects_missing_token() {
    assert!(serde_json::from_str::<LogInResponse>(r#"{"username":"bob"}"#).is_err());
}
