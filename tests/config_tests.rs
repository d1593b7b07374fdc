use std::fs;

use signalcast::error::{ConfigError, Error};
use signalcast::infrastructure::config::discord::Credentials;
use signalcast::infrastructure::config::settings::Config;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("create temp config");
    fs::write(file.path(), contents).expect("write temp config");
    file
}

#[test]
fn config_loads_from_file() {
    let file = write_temp_config(
        r#"
[logging]
level = "signalcast=debug"
format = "json"

[discord]
register_commands = false
"#,
    );

    let config = Config::load(file.path()).expect("valid config");
    assert_eq!(config.logging.level, "signalcast=debug");
    assert_eq!(config.logging.format, "json");
    assert!(!config.discord.register_commands);
}

#[test]
fn config_sections_are_optional() {
    let file = write_temp_config("[logging]\nlevel = \"warn\"\n");

    let config = Config::load(file.path()).expect("valid config");
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, "pretty");
    assert!(config.discord.register_commands);
}

#[test]
fn config_rejects_unknown_log_format() {
    let file = write_temp_config("[logging]\nformat = \"xml\"\n");

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "logging.format",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid log format error, got {err}"),
        Ok(_) => panic!("Expected invalid log format error, got Ok"),
    }
}

#[test]
fn config_reports_malformed_toml() {
    let file = write_temp_config("[discord\nregister_commands = ");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn config_missing_file_is_read_error_unless_defaulted() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
    assert!(Config::load_or_default(&path).is_ok());
}

#[test]
fn credentials_prefer_whole_variables() {
    let creds = Credentials::from_lookup(|name| match name {
        "DISCORD_TOKEN" => Some("whole".to_string()),
        "DISCORD_TOKEN_PART1" => Some("part".to_string()),
        "DISCORD_CLIENT_ID" => Some("42".to_string()),
        _ => None,
    })
    .expect("credentials");

    assert_eq!(creds.token, "whole");
    assert_eq!(creds.application_id, Some(42));
}

#[test]
fn credentials_require_a_token() {
    let err = Credentials::from_lookup(|_| None).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingField {
            field: "DISCORD_TOKEN"
        }
    ));
}
