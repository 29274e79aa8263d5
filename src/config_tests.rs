//! Tests for configuration loading

use super::*;
use proptest::prelude::*;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.search.debounce_ms, 300);
    assert!(!config.theme.dark);
    assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
}

#[test]
fn test_parse_full_config() {
    let toml = r#"
[search]
debounce_ms = 150

[theme]
dark = true

[clipboard]
backend = "osc52"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.search.debounce_ms, 150);
    assert!(config.theme.dark);
    assert_eq!(config.clipboard.backend, ClipboardBackend::Osc52);
}

#[test]
fn test_partial_config_fills_defaults() {
    let toml = r#"
[theme]
dark = true
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.search.debounce_ms, 300);
    assert!(config.theme.dark);
    assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
}

#[test]
fn test_parse_system_backend() {
    let toml = r#"
[clipboard]
backend = "system"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.clipboard.backend, ClipboardBackend::System);
}

#[test]
fn test_malformed_toml_fails_to_parse() {
    let toml = "[search\ndebounce_ms = 150";
    let result: Result<Config, _> = toml::from_str(toml);
    assert!(result.is_err(), "Malformed TOML should fail to parse");
}

#[test]
fn test_missing_value_fails_to_parse() {
    let toml = "[search]\n debounce_ms";
    let result: Result<Config, _> = toml::from_str(toml);
    assert!(result.is_err(), "Malformed TOML should fail to parse");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any invalid clipboard backend value is rejected by the parser;
    // load_config then falls back to Config::default() with Auto.
    #[test]
    fn prop_invalid_backend_fallback(
        invalid_backend in "[a-z]{3,10}".prop_filter(
            "not valid",
            |s| !["auto", "system", "osc52"].contains(&s.as_str())
        )
    ) {
        let toml_content = format!(r#"
[clipboard]
backend = "{}"
"#, invalid_backend);

        let config: Result<Config, _> = toml::from_str(&toml_content);
        prop_assert!(config.is_err(), "Invalid backend should fail to parse");

        let default_config = Config::default();
        prop_assert_eq!(
            default_config.clipboard.backend,
            ClipboardBackend::Auto,
            "Default config should use Auto backend"
        );
    }

    // Any explicit positive debounce value parses through unchanged.
    #[test]
    fn prop_debounce_value_round_trips(debounce in 1u64..10_000) {
        let toml_content = format!("[search]\ndebounce_ms = {}\n", debounce);
        let config: Config = toml::from_str(&toml_content).unwrap();
        prop_assert_eq!(config.search.debounce_ms, debounce);
    }
}
