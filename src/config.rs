use serde::{Serialize, Deserialize};
use std::time::Duration;

use crate::data::DatasetSpec;
use crate::error::{Error, Result};
use crate::report::{Language, OutputFormat};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "HUB_SMOKE_CONFIG";

/// Everything a smoke run needs. Defaults reproduce the stock editor check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeConfig {
    pub title: String,
    pub values: Vec<f64>,
    pub seed: u64,
    pub samples: usize,
    pub features: usize,
    pub num_classes: u32,
    pub epochs: usize,
    pub epoch_delay_ms: u64,
    pub format: OutputFormat,
    pub language: Language,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        SmokeConfig {
            title: "NoppoAIHub Python Test".to_owned(),
            values: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            seed: 42,
            samples: 100,
            features: 10,
            num_classes: 2,
            epochs: 5,
            epoch_delay_ms: 100,
            format: OutputFormat::Text,
            language: Language::Ja,
        }
    }
}

impl SmokeConfig {
    /// Deserializes a config from a JSON file. Missing fields take defaults.
    pub fn load_json(path: &str) -> Result<SmokeConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: SmokeConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file named by `HUB_SMOKE_CONFIG`, or the defaults if unset.
    pub fn from_env() -> Result<SmokeConfig> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                log::info!("loading config from {path}");
                SmokeConfig::load_json(&path)
            }
            Err(_) => {
                log::debug!("{CONFIG_ENV} not set, using defaults");
                Ok(SmokeConfig::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(Error::InvalidConfig("values must not be empty".to_owned()));
        }
        for (name, n) in [
            ("samples", self.samples),
            ("features", self.features),
            ("num_classes", self.num_classes as usize),
            ("epochs", self.epochs),
        ] {
            if n == 0 {
                return Err(Error::InvalidConfig(format!("{name} must be at least 1")));
            }
        }
        Ok(())
    }

    pub fn dataset_spec(&self) -> DatasetSpec {
        DatasetSpec {
            samples: self.samples,
            features: self.features,
            num_classes: self.num_classes,
        }
    }

    pub fn epoch_delay(&self) -> Duration {
        Duration::from_millis(self.epoch_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SmokeConfig::default();
        config.validate().unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.epochs, 5);
        assert_eq!(config.language, Language::Ja);
        assert_eq!(config.epoch_delay(), Duration::from_millis(100));
        assert_eq!(config.dataset_spec(), DatasetSpec { samples: 100, features: 10, num_classes: 2 });
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SmokeConfig =
            serde_json::from_str(r#"{ "seed": 7, "epoch_delay_ms": 0, "format": "json", "language": "en" }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.epoch_delay_ms, 0);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.language, Language::En);
        assert_eq!(config.samples, 100);
    }

    #[test]
    fn zero_epochs_rejected() {
        let config = SmokeConfig { epochs: 0, ..SmokeConfig::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(msg)) if msg.contains("epochs")));
    }

    #[test]
    fn empty_values_rejected() {
        let config = SmokeConfig { values: vec![], ..SmokeConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_json_reads_file() {
        let path = std::env::temp_dir().join(format!("hub-smoke-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "title": "custom", "epochs": 2 }"#).unwrap();
        let config = SmokeConfig::load_json(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.title, "custom");
        assert_eq!(config.epochs, 2);
    }

    #[test]
    fn load_json_missing_file_is_io_error() {
        assert!(matches!(
            SmokeConfig::load_json("/nonexistent/hub-smoke.json"),
            Err(Error::Io(_))
        ));
    }
}
