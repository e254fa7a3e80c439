use super::*;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults_match_original_backend() {
    let settings = settings_from_sources(None, no_env);
    assert_eq!(settings.server_bind, "0.0.0.0:8000");
    assert_eq!(settings.cors_allow_origin, "*");
    assert_eq!(settings.max_sessions, 32);
    assert_eq!(settings.bind_addr().expect("addr").port(), 8000);
}

#[test]
fn file_values_override_defaults() {
    let file = r#"
        bind_addr = "127.0.0.1:9100"
        cors_allow_origin = "http://localhost:3000"
        max_sessions = 4
        max_body_bytes = "2048"
    "#;
    let settings = settings_from_sources(Some(file), no_env);
    assert_eq!(settings.server_bind, "127.0.0.1:9100");
    assert_eq!(settings.cors_allow_origin, "http://localhost:3000");
    assert_eq!(settings.max_sessions, 4);
    assert_eq!(settings.max_body_bytes, 2048);
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let file = r#"bind_addr = "127.0.0.1:9100""#;
    let env = |key: &str| match key {
        "SERVER_BIND" => Some("127.0.0.1:9200".to_string()),
        "APP__BIND_ADDR" => Some("127.0.0.1:9300".to_string()),
        "APP__MAX_SESSIONS" => Some("8".to_string()),
        _ => None,
    };
    let settings = settings_from_sources(Some(file), env);
    assert_eq!(settings.server_bind, "127.0.0.1:9300");
    assert_eq!(settings.max_sessions, 8);
}

#[test]
fn unparseable_numbers_keep_defaults() {
    let env = |key: &str| match key {
        "APP__MAX_SESSIONS" => Some("many".to_string()),
        _ => None,
    };
    let settings = settings_from_sources(Some("max_body_bytes = \"lots\""), env);
    assert_eq!(settings.max_sessions, 32);
    assert_eq!(settings.max_body_bytes, 16 * 1024);
}

#[test]
fn malformed_file_is_ignored() {
    let settings = settings_from_sources(Some("this is = = not toml"), no_env);
    assert_eq!(settings.server_bind, "0.0.0.0:8000");
}

#[test]
fn port_override_keeps_host() {
    let mut settings = Settings {
        server_bind: "127.0.0.1:8000".into(),
        ..Settings::default()
    };
    settings.override_port(9000).expect("override");
    assert_eq!(settings.server_bind, "127.0.0.1:9000");

    settings.server_bind = "not an address".into();
    assert!(settings.override_port(9000).is_err());
}
