use super::*;

use std::{collections::HashMap, io::Write};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_point_at_public_member_list() {
    let settings = resolve_settings(None, env_from(&[])).expect("settings");
    assert_eq!(settings, Settings::default());
    assert!(settings.members_url.ends_with("members.json"));
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_values_override_defaults() {
    let raw = r#"
        members_url = "http://localhost:9000/members.json"
        request_timeout_secs = 3
    "#;
    let settings = resolve_settings(Some(raw), env_from(&[])).expect("settings");
    assert_eq!(settings.members_url, "http://localhost:9000/members.json");
    assert_eq!(settings.request_timeout(), Duration::from_secs(3));
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn prefixed_env_wins_over_plain_env_and_file() {
    let raw = r#"members_url = "http://file/members.json""#;
    let settings = resolve_settings(
        Some(raw),
        env_from(&[
            ("MEMBERS_URL", "http://plain/members.json"),
            ("APP__MEMBERS_URL", "http://prefixed/members.json"),
            ("APP__LOG_FILTER", "debug"),
        ]),
    )
    .expect("settings");
    assert_eq!(settings.members_url, "http://prefixed/members.json");
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn invalid_timeout_env_is_ignored() {
    let settings = resolve_settings(None, env_from(&[("APP__REQUEST_TIMEOUT_SECS", "soon")]))
        .expect("settings");
    assert_eq!(settings.request_timeout_secs, Settings::default().request_timeout_secs);
}

#[test]
fn zero_timeout_is_raised_to_one_second() {
    let settings =
        resolve_settings(Some("request_timeout_secs = 0"), env_from(&[])).expect("settings");
    assert_eq!(settings.request_timeout(), Duration::from_secs(1));
}

#[test]
fn blank_url_falls_back_to_default() {
    let settings =
        resolve_settings(Some(r#"members_url = "   ""#), env_from(&[])).expect("settings");
    assert_eq!(settings.members_url, Settings::default().members_url);
}

#[test]
fn malformed_file_is_an_error() {
    assert!(resolve_settings(Some("members_url = "), env_from(&[])).is_err());
}

#[test]
fn explicit_config_file_is_read() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "log_filter = \"warn\"").expect("write config");

    let settings = load_settings(Some(file.path())).expect("settings");
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_settings(Some(&dir.path().join("absent.toml"))).expect_err("missing file");
    assert!(err.to_string().contains("failed to read config file"));
}
