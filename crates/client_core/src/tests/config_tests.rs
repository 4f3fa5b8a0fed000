use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_settings_path(tag: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    env::temp_dir().join(format!("activity_client_{tag}_{suffix}.toml"))
}

#[test]
fn defaults_point_at_local_server() {
    let settings = ClientSettings::default();
    assert_eq!(settings.server_url, "http://localhost:8000");
    assert_eq!(settings.request_timeout(), Duration::from_secs(10));
}

#[test]
fn missing_file_yields_defaults() {
    let settings = load_settings_file(&temp_settings_path("missing"));
    assert_eq!(settings, ClientSettings::default());
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_path("file");
    fs::write(
        &path,
        "server_url = \"http://records.internal:9000/api\"\nrequest_timeout_secs = 3\n",
    )
    .expect("write settings");

    let settings = load_settings_file(&path);
    assert_eq!(settings.server_url, "http://records.internal:9000/api");
    assert_eq!(settings.request_timeout_secs, 3);

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn malformed_file_is_ignored() {
    let path = temp_settings_path("malformed");
    fs::write(&path, "server_url = [").expect("write settings");

    assert_eq!(load_settings_file(&path), ClientSettings::default());

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn env_overrides_take_precedence_with_app_prefix_last() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("ACTIVITY_SERVER_URL", "http://first:1"),
        ("APP__SERVER_URL", "http://second:2"),
        ("APP__REQUEST_TIMEOUT_SECS", "30"),
    ]);
    let mut settings = ClientSettings::default();
    apply_env_overrides(&mut settings, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(settings.server_url, "http://second:2");
    assert_eq!(settings.request_timeout_secs, 30);
}

#[test]
fn non_numeric_timeout_is_ignored() {
    let mut settings = ClientSettings::default();
    apply_env_overrides(&mut settings, |key| {
        (key == "APP__REQUEST_TIMEOUT_SECS").then(|| "soon".to_string())
    });
    assert_eq!(settings.request_timeout_secs, 10);
}

#[test]
fn base_url_gains_trailing_slash() {
    let settings = ClientSettings {
        server_url: "http://records.internal:9000/api".into(),
        ..ClientSettings::default()
    };
    let base = settings.base_url().expect("base url");
    assert_eq!(base.as_str(), "http://records.internal:9000/api/");
    assert_eq!(
        base.join("activities/").expect("join").as_str(),
        "http://records.internal:9000/api/activities/"
    );
}

#[test]
fn rejects_unparseable_server_url() {
    let settings = ClientSettings {
        server_url: "not a url".into(),
        ..ClientSettings::default()
    };
    assert!(settings.base_url().is_err());

    let settings = ClientSettings {
        server_url: "mailto:someone@example.com".into(),
        ..ClientSettings::default()
    };
    assert!(settings.base_url().is_err());
}

#[test]
fn zero_timeout_is_clamped_to_one_second() {
    let settings = ClientSettings {
        request_timeout_secs: 0,
        ..ClientSettings::default()
    };
    assert_eq!(settings.request_timeout(), Duration::from_secs(1));
}
