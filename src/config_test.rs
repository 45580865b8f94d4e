use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(3000));
    assert_eq!(parse_port(Some("  ")), Ok(3000));
}

#[test]
fn parse_port_reads_number() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 8081 ")), Ok(8081));
}

#[test]
fn parse_port_rejects_garbage() {
    assert!(parse_port(Some("eighty")).is_err());
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn normalize_backend_url_trims_trailing_slash() {
    assert_eq!(normalize_backend_url(Some("http://auth:8080/")), Some("http://auth:8080".to_owned()));
    assert_eq!(normalize_backend_url(Some(" http://auth:8080 ")), Some("http://auth:8080".to_owned()));
}

#[test]
fn normalize_backend_url_empty_is_none() {
    assert_eq!(normalize_backend_url(None), None);
    assert_eq!(normalize_backend_url(Some("")), None);
    assert_eq!(normalize_backend_url(Some("/")), None);
}
