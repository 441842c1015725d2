//! 8x8 LED matrix module.
//!
//! Provides the framebuffer, the HT16K33 command encoding and the driver
//! that ties them to an I2C transport.

mod device;

pub mod framebuffer;
pub mod protocol;

pub use device::Matrix8x8;
pub use framebuffer::Framebuffer;
pub use protocol::{row_address, BlinkRate};
