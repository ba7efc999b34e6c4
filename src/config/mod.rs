use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{errors::ConfigError, utils::paths};

const TMP_SUFFIX: &str = "tmp";
const MAX_PERCENT_PRECISION: u8 = 4;

/// Display preferences. Session data is never stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub currency_label: String,
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub percent_precision: u8,
    pub ui_color_enabled: bool,
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
    pub quiet_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_label: "VND".into(),
            grouping_separator: ',',
            decimal_separator: '.',
            percent_precision: 1,
            ui_color_enabled: true,
            screen_reader_mode: false,
            high_contrast_mode: false,
            quiet_mode: false,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 8] = [
        "currency_label",
        "grouping_separator",
        "decimal_separator",
        "percent_precision",
        "ui_color_enabled",
        "screen_reader_mode",
        "high_contrast_mode",
        "quiet_mode",
    ];

    /// Key/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency_label", self.currency_label.clone()),
            ("grouping_separator", format!("'{}'", self.grouping_separator)),
            ("decimal_separator", format!("'{}'", self.decimal_separator)),
            ("percent_precision", self.percent_precision.to_string()),
            ("ui_color_enabled", on_off(self.ui_color_enabled)),
            ("screen_reader_mode", on_off(self.screen_reader_mode)),
            ("high_contrast_mode", on_off(self.high_contrast_mode)),
            ("quiet_mode", on_off(self.quiet_mode)),
        ]
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let key = key.to_ascii_lowercase();
        let mut next = self.clone();
        match key.as_str() {
            "currency_label" => {
                let label = value.trim();
                if label.is_empty() {
                    return Err(invalid(&key, "label must not be empty"));
                }
                next.currency_label = label.to_string();
            }
            "grouping_separator" => next.grouping_separator = parse_separator(&key, value)?,
            "decimal_separator" => next.decimal_separator = parse_separator(&key, value)?,
            "percent_precision" => {
                let parsed: u8 = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid(&key, "must be numeric"))?;
                if parsed > MAX_PERCENT_PRECISION {
                    return Err(invalid(
                        &key,
                        &format!("must be between 0 and {MAX_PERCENT_PRECISION}"),
                    ));
                }
                next.percent_precision = parsed;
            }
            "ui_color_enabled" => next.ui_color_enabled = parse_toggle(&key, value)?,
            "screen_reader_mode" => next.screen_reader_mode = parse_toggle(&key, value)?,
            "high_contrast_mode" => next.high_contrast_mode = parse_toggle(&key, value)?,
            "quiet_mode" => next.quiet_mode = parse_toggle(&key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.clone())),
        }
        if next.grouping_separator == next.decimal_separator {
            return Err(invalid(&key, "grouping and decimal separators must differ"));
        }
        *self = next;
        Ok(())
    }
}

fn on_off(flag: bool) -> String {
    let label = if flag { "on" } else { "off" };
    label.to_string()
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_toggle(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(invalid(key, "use on or off")),
    }
}

fn parse_separator(key: &str, value: &str) -> Result<char, ConfigError> {
    let value = match value {
        "space" => " ",
        other => other,
    };
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !ch.is_ascii_digit() => Ok(ch),
        _ => Err(invalid(key, "expected a single non-digit character")),
    }
}

/// Loads and saves [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses the default location under the application home directory.
    pub fn new() -> Self {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: paths::config_file_in(&base),
        }
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Like [`ConfigManager::load`] but falls back to defaults on a broken file.
    pub fn load_or_default(&self) -> Config {
        self.load().unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "ignoring unreadable config");
            Config::default()
        })
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        assert_eq!(manager.load().unwrap(), Config::default());
        assert!(!manager.path().exists());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        let mut config = Config::default();
        config.set_value("currency_label", "USD").unwrap();
        config.set_value("percent_precision", "2").unwrap();
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.currency_label, "USD");
        assert_eq!(loaded.percent_precision, 2);
        assert!(!tmp_path(manager.path()).exists());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        fs::create_dir_all(manager.path().parent().unwrap()).unwrap();
        fs::write(manager.path(), r#"{ "quiet_mode": true }"#).unwrap();
        let loaded = manager.load().unwrap();
        assert!(loaded.quiet_mode);
        assert_eq!(loaded.currency_label, "VND");
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        fs::create_dir_all(manager.path().parent().unwrap()).unwrap();
        fs::write(manager.path(), "not json").unwrap();
        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default(), Config::default());
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        let mut config = Config::default();
        assert!(matches!(
            config.set_value("theme", "dark"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(config.set_value("percent_precision", "9").is_err());
        assert!(config.set_value("quiet_mode", "maybe").is_err());
        assert!(config.set_value("grouping_separator", "7").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn separators_must_differ() {
        let mut config = Config::default();
        assert!(config.set_value("grouping_separator", ".").is_err());
        assert_eq!(config.grouping_separator, ',');
    }
}
