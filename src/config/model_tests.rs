use super::*;

#[test]
fn config_default_values() {
    let config = Config::default();
    assert_eq!(config.scan.max_path_length, 260);
    assert!(!config.scan.follow_symlinks);
    assert!(config.scan.fix_names);
    assert!(config.exclude.patterns.is_empty());
}

#[test]
fn empty_toml_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_scan_section_keeps_other_defaults() {
    let config: Config = toml::from_str("[scan]\nmax_path_length = 400\n").unwrap();
    assert_eq!(config.scan.max_path_length, 400);
    assert!(config.scan.fix_names);
}

#[test]
fn full_config_parses() {
    let content = r#"
[scan]
max_path_length = 200
follow_symlinks = true
fix_names = false

[exclude]
patterns = ["node_modules", "*.part"]
"#;
    let config: Config = toml::from_str(content).unwrap();
    assert_eq!(config.scan.max_path_length, 200);
    assert!(config.scan.follow_symlinks);
    assert!(!config.scan.fix_names);
    assert_eq!(config.exclude.patterns, vec!["node_modules", "*.part"]);
}

#[test]
fn unknown_keys_are_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str("[scan]\nmax_lenght = 10\n");
    assert!(result.is_err());
}

#[test]
fn zero_length_fails_validation() {
    let mut config = Config::default();
    config.scan.max_path_length = 0;
    assert!(matches!(config.validate(), Err(SyncGuardError::Config(_))));
}

#[test]
fn default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn scan_options_mirror_config() {
    let mut config = Config::default();
    config.scan.max_path_length = 100;
    config.scan.follow_symlinks = true;
    config.scan.fix_names = false;

    let options = config.scan_options();
    assert_eq!(options.max_path_length, 100);
    assert!(options.follow_symlinks);
    assert!(!options.fix_names);
}
