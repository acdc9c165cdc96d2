use std::io::Write;

use matchday::domain::CharacteristicType;
use matchday::error::{ConfigError, Error};
use matchday::infrastructure::config::settings::Config;
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_full_config_from_file() {
    let file = write_config(
        r#"
[services]
roster_url = "http://localhost:8080/api/v1"
team_url = "http://localhost:8081/api"
game_url = "http://localhost:8082/api/v1"
roster_page_size = 11

[scenario]
initial_budget = 2500
characteristic = "SPEED"
poll_interval_secs = 3
utc_offset_hours = -5
backdate_minutes = 0
users = 4

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.services.team_url, "http://localhost:8081/api");
    assert_eq!(config.services.roster_page_size, 11);
    assert_eq!(config.scenario.initial_budget, dec!(2500));
    assert_eq!(config.scenario.characteristic, CharacteristicType::Speed);
    assert_eq!(config.scenario.poll_interval_secs, 3);
    assert_eq!(config.scenario.utc_offset_hours, -5);
    assert_eq!(config.scenario.users, 4);
    assert_eq!(config.logging.format, "json");
}

#[test]
fn partial_sections_keep_defaults() {
    let file = write_config(
        r#"
[scenario]
users = 2
"#,
    );

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.scenario.users, 2);
    assert_eq!(config.scenario.backdate_minutes, 5);
    assert_eq!(
        config.services.game_url,
        "http://host.docker.internal:8082/api/v1"
    );
}

#[test]
fn missing_file_is_a_read_error() {
    let result = Config::load("/definitely/not/here/matchday.toml");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let result = Config::parse_toml("[scenario\nusers = 1");
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn zero_users_is_rejected() {
    let result = Config::parse_toml("[scenario]\nusers = 0\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue { field: "users", .. }))
    ));
}

#[test]
fn zero_poll_interval_is_rejected() {
    let result = Config::parse_toml("[scenario]\npoll_interval_secs = 0\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "poll_interval_secs",
            ..
        }))
    ));
}

#[test]
fn negative_budget_is_rejected() {
    let result = Config::parse_toml("[scenario]\ninitial_budget = -1\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "initial_budget",
            ..
        }))
    ));
}

#[test]
fn out_of_range_offset_is_rejected() {
    let result = Config::parse_toml("[scenario]\nutc_offset_hours = 19\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "utc_offset_hours",
            ..
        }))
    ));
}

#[test]
fn empty_url_is_missing() {
    let result = Config::parse_toml("[services]\nroster_url = \"\"\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingField {
            field: "roster_url"
        }))
    ));
}

#[test]
fn example_config_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/matchday.example.toml");
    let config = Config::load(path).unwrap();
    assert_eq!(config.scenario.users, 1);
    assert_eq!(config.logging.format, "pretty");
}
