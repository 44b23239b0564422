// ABOUTME: Tests for environment-based configuration parsing
// ABOUTME: Defaults, overrides, and malformed-value errors; serialized because env vars are process-global

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;

use vita_server::config::environment::{
    Environment, LogLevel, ServerConfig, DATABASE_URL_ENV, ENVIRONMENT_ENV, HTTP_PORT_ENV,
    LLM_BASE_URL_ENV, LLM_MODEL_ENV,
};

fn clear_env() {
    for var in [
        HTTP_PORT_ENV,
        DATABASE_URL_ENV,
        LLM_BASE_URL_ENV,
        LLM_MODEL_ENV,
        ENVIRONMENT_ENV,
        "RUST_LOG",
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();

    let config = ServerConfig::from_env().expect("Defaults must parse");
    assert_eq!(config.http_port, 8081);
    assert_eq!(config.database_url, "sqlite:./data/vita.db");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.llm.base_url, "http://localhost:11434");
    assert_eq!(config.llm.model, "qwen2.5:0.5b");
}

#[test]
#[serial]
fn test_overrides_applied() {
    clear_env();
    env::set_var(HTTP_PORT_ENV, "9090");
    env::set_var(DATABASE_URL_ENV, "sqlite::memory:");
    env::set_var(LLM_BASE_URL_ENV, "http://ollama:11434");
    env::set_var(LLM_MODEL_ENV, "llama3.2:1b");
    env::set_var(ENVIRONMENT_ENV, "production");
    env::set_var("RUST_LOG", "debug");

    let config = ServerConfig::from_env().expect("Overrides must parse");
    assert_eq!(config.http_port, 9090);
    assert_eq!(config.database_url, "sqlite::memory:");
    assert!(config.environment.is_production());
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.llm.base_url, "http://ollama:11434");
    assert_eq!(config.llm.model, "llama3.2:1b");

    clear_env();
}

#[test]
#[serial]
fn test_invalid_port_rejected() {
    clear_env();
    env::set_var(HTTP_PORT_ENV, "not-a-port");

    let err = ServerConfig::from_env().expect_err("Non-numeric port must fail");
    assert!(err.to_string().contains(HTTP_PORT_ENV));

    clear_env();
}

#[test]
#[serial]
fn test_invalid_base_url_rejected() {
    clear_env();
    env::set_var(LLM_BASE_URL_ENV, "not a url");

    let err = ServerConfig::from_env().expect_err("Malformed base URL must fail");
    assert!(err.to_string().contains(LLM_BASE_URL_ENV));

    clear_env();
}

#[test]
#[serial]
fn test_environment_parsing_fallback() {
    assert_eq!(
        Environment::from_str_or_default("prod"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("TEST"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("anything-else"),
        Environment::Development
    );
}
