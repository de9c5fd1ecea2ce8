//! Tests for agent configuration loading.

use std::io::Write;
use tictac_agent::{AgentConfig, DEFAULT_SEARCH_DEPTH};

#[test]
fn loads_config_from_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
agent_id = "ai-rs"
http_base = "http://localhost:5000"
ws_base = "ws://localhost:5000"
search_depth = 9
"#
    )
    .unwrap();

    let config = AgentConfig::from_file(file.path()).unwrap();
    assert_eq!(config.agent_id().as_str(), "ai-rs");
    assert_eq!(config.http_base().as_str(), "http://localhost:5000");
    assert_eq!(config.ws_base().as_str(), "ws://localhost:5000");
    assert_eq!(*config.search_depth(), 9);
}

#[test]
fn search_depth_defaults_when_absent() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
agent_id = "ai-rs"
http_base = "http://localhost:5000"
ws_base = "ws://localhost:5000"
"#
    )
    .unwrap();

    let config = AgentConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.search_depth(), DEFAULT_SEARCH_DEPTH);
}

#[test]
fn with_search_depth_overrides() {
    let config =
        AgentConfig::new("ai-rs", "http://localhost:5000", "ws://localhost:5000")
            .with_search_depth(9);
    assert_eq!(*config.search_depth(), 9);
}

#[test]
fn missing_file_is_an_error() {
    let err = AgentConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn malformed_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "agent_id = ").unwrap();

    let err = AgentConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}
