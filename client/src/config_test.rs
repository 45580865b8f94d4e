use super::*;

#[test]
fn normalize_base_url_strips_trailing_slashes_and_whitespace() {
    assert_eq!(normalize_base_url(" https://api.example.com/ "), "https://api.example.com");
    assert_eq!(normalize_base_url("https://api.example.com//"), "https://api.example.com");
    assert_eq!(normalize_base_url(""), "");
}

#[test]
fn endpoint_is_same_origin_when_base_is_empty() {
    let config = ClientConfig::default();
    assert_eq!(config.endpoint(SIGN_UP_ENDPOINT), "/api/sign-up");
    assert_eq!(config.endpoint(LOG_IN_ENDPOINT), "/api/log-in");
}

#[test]
fn endpoint_prefixes_configured_base() {
    let config = ClientConfig { api_base_url: "http://localhost:8080".to_owned() };
    assert_eq!(config.endpoint(LOG_IN_ENDPOINT), "http://localhost:8080/api/log-in");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn runtime_override_is_absent_outside_browser() {
    assert_eq!(runtime_api_base_url(), None);
}
