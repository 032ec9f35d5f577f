use anyhow::Result;
use bazi_chart::domain::ports::ConfigProvider;
use bazi_chart::utils::validation::Validate;
use bazi_chart::{BaziError, BirthInput, ChartEngine, TomlConfig};
use tempfile::TempDir;

#[test]
fn test_load_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bazi.toml");
    std::fs::write(
        &path,
        r#"
[chart]
default_hour = 0
strict_ranges = true

[logging]
level = "debug"
"#,
    )?;

    let config = TomlConfig::from_file(&path)?;
    assert_eq!(config.default_hour(), 0);
    assert!(config.strict_ranges());
    assert_eq!(config.log_level(), Some("debug"));

    let engine = ChartEngine::from_config(&config);
    let chart = engine.calculate(&BirthInput::new(1984, 2, 2, None))?;
    assert_eq!(chart.pillars.hour.to_string(), "戊子");
    Ok(())
}

#[test]
fn test_empty_file_uses_defaults() -> Result<()> {
    let config = TomlConfig::from_toml_str("")?;
    assert_eq!(config, TomlConfig::default());
    assert_eq!(config.default_hour(), 12);
    assert!(!config.strict_ranges());
    assert!(config.validate().is_ok());
    Ok(())
}

#[test]
fn test_invalid_values_rejected() {
    let err = TomlConfig::from_toml_str("[chart]\ndefault_hour = 24\n").unwrap_err();
    assert!(matches!(err, BaziError::InvalidConfigValueError { .. }));
    assert!(err.is_config_error());

    let err = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap_err();
    assert!(matches!(err, BaziError::InvalidConfigValueError { .. }));

    let err = TomlConfig::from_toml_str("[chart]\ndefault_hour = \"noon\"\n").unwrap_err();
    assert!(matches!(err, BaziError::TomlError(_)));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = TomlConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, BaziError::IoError(_)));
    assert_eq!(err.status_code(), 500);
}
