use super::*;
use std::sync::Mutex;

/// Serializes tests that mutate process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK`.
unsafe fn clear_coach_env() {
    unsafe {
        std::env::remove_var("COACH_API_URL");
        std::env::remove_var("COACH_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("COACH_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe { clear_coach_env() };

    let cfg = CoachConfig::from_env().unwrap();
    assert_eq!(cfg, CoachConfig::default());
    assert_eq!(cfg.api_url, DEFAULT_COACH_API_URL);
    assert_eq!(
        cfg.timeouts,
        CoachTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_coach_env();
        std::env::set_var("COACH_API_URL", "http://127.0.0.1:8000/api/coach/");
        std::env::set_var("COACH_REQUEST_TIMEOUT_SECS", "45");
        std::env::set_var("COACH_CONNECT_TIMEOUT_SECS", "3");
    }

    let cfg = CoachConfig::from_env().unwrap();
    assert_eq!(cfg.api_url, "http://127.0.0.1:8000/api/coach");
    assert_eq!(cfg.timeouts, CoachTimeouts { request_secs: 45, connect_secs: 3 });

    unsafe { clear_coach_env() };
}

#[test]
fn from_env_ignores_unparsable_or_zero_timeouts() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_coach_env();
        std::env::set_var("COACH_REQUEST_TIMEOUT_SECS", "soon");
        std::env::set_var("COACH_CONNECT_TIMEOUT_SECS", "0");
    }

    let cfg = CoachConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts, CoachTimeouts::default());

    unsafe { clear_coach_env() };
}

#[test]
fn from_env_rejects_non_http_url() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_coach_env();
        std::env::set_var("COACH_API_URL", "ftp://example.test/coach");
    }

    let err = CoachConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::InvalidUrl("ftp://example.test/coach".into()));

    unsafe { clear_coach_env() };
}

#[test]
fn new_trims_whitespace_and_trailing_slash() {
    let cfg = CoachConfig::new("  https://coach.example.test/api/coach/ ").unwrap();
    assert_eq!(cfg.api_url, "https://coach.example.test/api/coach");
}

#[test]
fn with_request_timeout_overrides_only_request() {
    let cfg = CoachConfig::default().with_request_timeout(5);
    assert_eq!(cfg.timeouts.request_secs, 5);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}
