//! HT16K33 8x8 LED Matrix Driver
//!
//! Drives 8x8 LED matrix backpacks (Adafruit and compatibles) built on the
//! Holtek HT16K33 over any `embedded-hal` 1.0 I2C bus.

pub mod config;
pub mod error;
pub mod matrix;
pub mod orientation;
pub mod transport;

pub use config::MatrixConfig;
pub use error::{Error, Result};
pub use matrix::{BlinkRate, Framebuffer, Matrix8x8};
pub use orientation::rotate_right_1;
pub use transport::{Connection, OpenBus};

/// Matrix dimensions
pub const MATRIX_ROWS: u8 = 8;
pub const MATRIX_COLUMNS: u8 = 8;

/// Factory default I2C address of the backpack
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// Brightness range upper bound, also the power-on default
pub const MAX_BRIGHTNESS: u8 = 15;
pub const DEFAULT_BRIGHTNESS: u8 = MAX_BRIGHTNESS;
