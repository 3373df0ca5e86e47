use notaires_utils::utils::validation::Validate;
use notaires_utils::{SmsConfig, SmsConfigProvider};
use tempfile::TempDir;

#[test]
fn test_load_toml_with_env_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sms.toml");
    std::fs::write(
        &path,
        r#"
api_key = "key-from-file"
sender = "ETUDE"
timeout_seconds = 10
"#,
    )
    .unwrap();

    let config = SmsConfig::load(&path).unwrap();
    assert_eq!(config.api_key.as_deref(), Some("key-from-file"));
    assert_eq!(config.sender, "ETUDE");
    assert_eq!(config.timeout_seconds, 10);
    assert_eq!(config.base_url, "https://www.aqilas.com");
    assert!(config.token.is_none());

    // env wins over the file
    std::env::set_var("AQILAS_API_KEY", "key-from-env");
    std::env::set_var("AQILAS_TIMEOUT", "45");
    let config = SmsConfig::load(&path).unwrap();
    assert_eq!(config.api_key.as_deref(), Some("key-from-env"));
    assert_eq!(config.timeout_seconds, 45);
    assert_eq!(config.sender, "ETUDE");
    std::env::remove_var("AQILAS_API_KEY");
    std::env::remove_var("AQILAS_TIMEOUT");
}

#[test]
fn test_load_rejects_malformed_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sms.toml");
    std::fs::write(&path, "api_key = [not toml").unwrap();

    assert!(SmsConfig::load(&path).is_err());
}

#[test]
fn test_load_missing_file_is_an_io_error() {
    assert!(SmsConfig::load("/nonexistent/sms.toml").is_err());
}

#[test]
fn test_validation_requires_a_credential() {
    let config = SmsConfig::default();
    assert!(config.validate().is_err());

    let config = SmsConfig {
        api_key: Some("key".to_string()),
        ..SmsConfig::default()
    };
    assert!(config.validate().is_ok());

    let config = SmsConfig {
        token: Some("token".to_string()),
        ..SmsConfig::default()
    };
    assert!(config.validate().is_ok());

    // blank credentials count as absent
    let config = SmsConfig {
        api_key: Some("   ".to_string()),
        ..SmsConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_checks_url_and_timeout() {
    let config = SmsConfig {
        base_url: "ftp://www.aqilas.com".to_string(),
        api_key: Some("key".to_string()),
        ..SmsConfig::default()
    };
    assert!(config.validate().is_err());

    let config = SmsConfig {
        timeout_seconds: 0,
        api_key: Some("key".to_string()),
        ..SmsConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_provider_filters_blank_credentials() {
    let config = SmsConfig {
        api_key: Some("".to_string()),
        token: Some("secret".to_string()),
        ..SmsConfig::default()
    };
    assert!(config.api_key().is_none());
    assert_eq!(config.token(), Some("secret"));
    assert_eq!(config.sender(), "NOTAIRES");
}
