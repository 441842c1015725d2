//! Driver configuration.

use crate::matrix::BlinkRate;
use crate::{Error, Result, DEFAULT_ADDRESS, DEFAULT_BRIGHTNESS, MAX_BRIGHTNESS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lowest address an HT16K33 can be strapped to.
pub const MIN_ADDRESS: u8 = 0x70;

/// Highest address an HT16K33 can be strapped to.
pub const MAX_ADDRESS: u8 = 0x77;

/// Matrix driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// I2C bus number, used when the driver opens the bus itself
    #[serde(default = "default_bus")]
    pub bus: u8,

    /// 7-bit device address (0x70-0x77)
    #[serde(default = "default_address")]
    pub address: u8,

    /// Initial brightness (0-15)
    #[serde(default = "default_brightness")]
    pub brightness: u8,

    /// Initial blink rate
    #[serde(default)]
    pub blink: BlinkRate,
}

fn default_bus() -> u8 {
    1
}

fn default_address() -> u8 {
    DEFAULT_ADDRESS
}

fn default_brightness() -> u8 {
    DEFAULT_BRIGHTNESS
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            bus: default_bus(),
            address: default_address(),
            brightness: default_brightness(),
            blink: BlinkRate::default(),
        }
    }
}

impl MatrixConfig {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MatrixConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the address and brightness ranges.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_ADDRESS..=MAX_ADDRESS).contains(&self.address) {
            return Err(Error::InvalidAddress(self.address));
        }
        if self.brightness > MAX_BRIGHTNESS {
            return Err(Error::InvalidBrightness(self.brightness));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatrixConfig::default();
        assert_eq!(config.bus, 1);
        assert_eq!(config.address, 0x70);
        assert_eq!(config.brightness, 15);
        assert_eq!(config.blink, BlinkRate::Off);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = MatrixConfig::from_toml_str(
            r#"
            bus = 2
            address = 0x71
            blink = "1hz"
            "#,
        )
        .unwrap();
        assert_eq!(config.bus, 2);
        assert_eq!(config.address, 0x71);
        assert_eq!(config.brightness, 15);
        assert_eq!(config.blink, BlinkRate::Hz1);

        assert!(MatrixConfig::from_toml_str("").is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            MatrixConfig::from_toml_str("brightness = 16"),
            Err(Error::InvalidBrightness(16))
        ));
        assert!(matches!(
            MatrixConfig::from_toml_str("address = 0x20"),
            Err(Error::InvalidAddress(0x20))
        ));
        assert!(matches!(
            MatrixConfig::from_toml_str("blink = \"fast\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            MatrixConfig::load("/nonexistent/ht16k33.toml"),
            Err(Error::Io(_))
        ));
    }
}
