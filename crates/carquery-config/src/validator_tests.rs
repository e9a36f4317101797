use super::*;

#[test]
fn test_validate_default_config() {
    let result = ConfigValidator::validate(&Config::default());
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_non_http_endpoint() {
    let mut config = Config::default();
    config.backend.endpoint = "ftp://127.0.0.1/v1/chat".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "backend.endpoint"));
}

#[test]
fn test_validate_unparseable_endpoint() {
    let mut config = Config::default();
    config.backend.endpoint = "localhost".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
}

#[test]
fn test_validate_zero_timeout() {
    let mut config = Config::default();
    config.backend.timeout_seconds = Some(0);

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "backend.timeout_seconds"));
}

#[test]
fn test_validate_long_timeout_warning() {
    let mut config = Config::default();
    config.backend.timeout_seconds = Some(3600);

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_validate_empty_highlight_key() {
    let mut config = Config::default();
    config.display.highlight_key = "  ".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "display.highlight_key"));
}

#[test]
fn test_validate_zero_window_size() {
    let mut config = Config::default();
    config.window.height = 0;

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
}

#[test]
fn test_into_result_reports_first_error() {
    let mut config = Config::default();
    config.backend.endpoint = "ftp://host/".to_string();
    config.display.highlight_key = String::new();

    let err = ConfigValidator::validate(&config).into_result().unwrap_err();
    assert!(err.to_string().contains("backend.endpoint"));
}

#[test]
fn test_into_result_passes_warnings() {
    let mut config = Config::default();
    config.backend.timeout_seconds = Some(1000);

    let warnings = ConfigValidator::validate(&config).into_result().unwrap();
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_validate_logging_levels() {
    for level in ["warn", "INFO", "off", "warn,carquery_core=debug", "carquery_relay=trace"] {
        let mut config = Config::default();
        config.logging.level = level.to_string();
        assert!(ConfigValidator::validate(&config).is_valid(), "level {level:?}");
    }
}

#[test]
fn test_validate_unknown_logging_level() {
    let mut config = Config::default();
    config.logging.level = "verbose".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    let err = result.errors.iter().find(|e| e.path == "logging.level").unwrap();
    assert!(err.message.contains("verbose"));
}

#[test]
fn test_validate_bad_target_level() {
    let mut config = Config::default();
    config.logging.level = "warn,carquery_core=loud".to_string();
    assert!(!ConfigValidator::validate(&config).is_valid());

    config.logging.level = "  ".to_string();
    assert!(!ConfigValidator::validate(&config).is_valid());
}
