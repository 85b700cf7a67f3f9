//! Configuration loading and validation tests
//!
//! Tests focus on the observable outcome of loading a config file: defaults,
//! overrides, and the errors reported for unreadable or invalid files.

use kagimcp::config::{ConfigError, ServerConfig, SUMMARIZER_ENGINE_ENV};
use kagimcp::testing::MockKagiApi;
use kagimcp::tools::KagiTools;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;

#[test]
fn test_config_loads_successfully_from_valid_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[kagi]
api_key_env = "TEAM_KAGI_KEY"
base_url = "https://kagi.com/api/v0"
request_timeout_secs = 45
"#
    )
    .unwrap();

    let config = ServerConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.kagi.api_key_env, "TEAM_KAGI_KEY");
    assert_eq!(config.kagi.request_timeout_secs, 45);
}

#[test]
fn test_config_sections_are_optional() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "# empty config").unwrap();

    let config = ServerConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.kagi.api_key_env, "KAGI_API_KEY");
    assert_eq!(config.kagi.base_url, "https://kagi.com/api/v0");
}

#[test]
fn test_config_file_not_found() {
    let result = ServerConfig::load_from_file(Path::new("/nonexistent/kagimcp.toml"));

    assert!(matches!(result, Err(ConfigError::FileRead(_))));
}

#[test]
fn test_config_invalid_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[kagi\nbase_url = ").unwrap();

    let result = ServerConfig::load_from_file(temp_file.path());

    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_config_wrong_field_type() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[kagi]\nrequest_timeout_secs = \"soon\"").unwrap();

    let result = ServerConfig::load_from_file(temp_file.path());

    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_config_invalid_base_url() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[kagi]\nbase_url = \"::not a url::\"").unwrap();

    let result = ServerConfig::load_from_file(temp_file.path());

    assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
}

#[test]
fn test_config_roundtrips_through_show_output() {
    let config = ServerConfig::default();

    let rendered = toml::to_string_pretty(&config).unwrap();
    let parsed: ServerConfig = toml::from_str(&rendered).unwrap();

    assert_eq!(parsed, config);
    assert!(rendered.contains("[summarizer]"));
}

#[test]
fn test_api_key_resolved_from_named_variable() {
    let mut config = ServerConfig::default();
    // PATH is set in every test environment
    config.kagi.api_key_env = "PATH".to_string();

    let client_config = config.client_config().unwrap();

    assert!(!client_config.api_key.is_empty());
    assert_eq!(client_config.timeout.as_secs(), 30);
}

// Single test so the process-wide variable is not raced by other cases
#[tokio::test]
async fn test_summarizer_engine_env_override() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[summarizer]\nengine = \"agnes\"").unwrap();

    std::env::remove_var(SUMMARIZER_ENGINE_ENV);
    assert_eq!(ServerConfig::from_env().unwrap().summarizer.engine, "cecil");
    assert_eq!(
        ServerConfig::load_from_file(temp_file.path())
            .unwrap()
            .summarizer
            .engine,
        "agnes"
    );

    std::env::set_var(SUMMARIZER_ENGINE_ENV, "muriel");
    assert_eq!(ServerConfig::from_env().unwrap().summarizer.engine, "muriel");
    assert_eq!(
        ServerConfig::load_from_file(temp_file.path())
            .unwrap()
            .summarizer
            .engine,
        "muriel"
    );

    // An unknown engine still loads and is reported per call
    std::env::set_var(SUMMARIZER_ENGINE_ENV, "eliza");
    let config = ServerConfig::from_env().unwrap();
    std::env::remove_var(SUMMARIZER_ENGINE_ENV);

    let mock = Arc::new(MockKagiApi::new());
    let tools = KagiTools::new(mock.clone(), config.summarizer.engine.clone());
    let text = tools
        .kagi_summarizer("https://example.com", None, None)
        .await;

    assert_eq!(
        text,
        "Error: Summarizer configured incorrectly, invalid summarization engine set: eliza. Must be one of the following: cecil, agnes, daphne, muriel"
    );
    assert!(mock.summarize_calls().is_empty());
}
