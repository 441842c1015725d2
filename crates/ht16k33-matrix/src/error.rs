//! Error types for the HT16K33 matrix driver.

use embedded_hal::i2c::ErrorKind;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving the matrix.
#[derive(Error, Debug)]
pub enum Error {
    /// I2C write to the controller failed.
    #[error("I2C write to 0x{address:02X} failed: {kind}")]
    Transport { address: u8, kind: ErrorKind },

    /// The I2C bus could not be opened.
    #[error("Could not open I2C bus {bus}: {reason}")]
    BusOpen { bus: u8, reason: String },

    /// Row index outside 0-7.
    #[error("Row out of range (must be 0-7): {0}")]
    RowOutOfRange(u8),

    /// Column index outside 0-7.
    #[error("Column out of range (must be 0-7): {0}")]
    ColumnOutOfRange(u8),

    /// Brightness outside 0-15.
    #[error("Invalid brightness (must be 0-15): {0}")]
    InvalidBrightness(u8),

    /// Blink mode outside 0-3.
    #[error("Invalid blink rate (must be 0-3): {0}")]
    InvalidBlinkRate(u8),

    /// Blink rate name not recognised.
    #[error("Invalid blink rate: {0}")]
    InvalidBlinkName(String),

    /// Device address outside the HT16K33 range.
    #[error("Invalid HT16K33 address (must be 0x70-0x77): 0x{0:02X}")]
    InvalidAddress(u8),

    /// Bitmap does not hold exactly one byte per row.
    #[error("Bitmap size mismatch: expected {expected}, got {actual}")]
    BitmapLength { expected: usize, actual: usize },

    /// Configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for errors caused by caller input rather than the bus.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::RowOutOfRange(_)
                | Error::ColumnOutOfRange(_)
                | Error::InvalidBrightness(_)
                | Error::InvalidBlinkRate(_)
                | Error::InvalidBlinkName(_)
                | Error::InvalidAddress(_)
                | Error::BitmapLength { .. }
        )
    }
}
