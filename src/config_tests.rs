use crate::config::Config;
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

const KEYS: [&str; 8] = [
    "HOST",
    "PORT",
    "CORS_ENABLED",
    "REQUEST_TRACING",
    "MODEL_PATH",
    "PREPROCESSING_PATH",
    "OBSERVABILITY_ENABLED",
    "OBSERVABILITY_INTERVAL",
];

fn clear_env() {
    for key in KEYS {
        // SAFETY: callers hold ENV_LOCK, so no other test thread touches the environment.
        unsafe { env::remove_var(key) };
    }
}

fn set(key: &str, value: &str) {
    // SAFETY: callers hold ENV_LOCK.
    unsafe { env::set_var(key, value) };
}

#[test]
fn test_config_from_env_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    let config = Config::from_env().expect("Should parse with defaults");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 5000);
    assert!(config.server.cors_enabled);
    assert_eq!(config.artifacts.model_path, PathBuf::from("loan_model.json"));
    assert_eq!(
        config.artifacts.preprocessing_path,
        PathBuf::from("preprocessing_info.json")
    );
    assert!(config.observability.enabled);
    assert_eq!(config.observability.interval_seconds, 60);
}

#[test]
fn test_config_reads_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    set("HOST", "127.0.0.1");
    set("PORT", "8088");
    set("CORS_ENABLED", "false");
    set("MODEL_PATH", "/srv/models/loan_model.json");
    set("OBSERVABILITY_INTERVAL", "15");

    let config = Config::from_env().unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8088);
    assert!(!config.server.cors_enabled);
    assert_eq!(
        config.artifacts.model_path,
        PathBuf::from("/srv/models/loan_model.json")
    );
    assert_eq!(config.observability.interval_seconds, 15);

    clear_env();
}

#[test]
fn test_invalid_port_is_error() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    set("PORT", "seventy");

    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_zero_interval_is_error() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    set("OBSERVABILITY_INTERVAL", "0");

    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_unparsable_bool_falls_back_to_default() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    set("REQUEST_TRACING", "maybe");

    let config = Config::from_env().unwrap();
    assert!(config.server.request_tracing);

    clear_env();
}
