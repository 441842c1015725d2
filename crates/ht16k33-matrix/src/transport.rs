//! I2C transport selection.
//!
//! The driver talks to any `embedded_hal::i2c::I2c`. A connection is either a
//! bus number the driver opens itself or a transport the caller already built.

use crate::{Error, Result};
use embedded_hal::i2c::{Error as _, I2c};
use tracing::{debug, warn};

/// Where the driver gets its I2C transport from.
#[derive(Debug)]
pub enum Connection<I2C> {
    /// Open the numbered bus (e.g. `1` for `/dev/i2c-1`).
    Bus(u8),
    /// Use a transport the caller already opened.
    Device(I2C),
}

/// Transports that can be opened from a bus number.
pub trait OpenBus: Sized {
    /// Opens the numbered I2C bus.
    fn open_bus(bus: u8) -> Result<Self>;
}

impl<I2C: OpenBus> Connection<I2C> {
    /// Resolves the connection into a ready transport.
    pub fn into_transport(self) -> Result<I2C> {
        match self {
            Connection::Bus(bus) => I2C::open_bus(bus),
            Connection::Device(i2c) => Ok(i2c),
        }
    }
}

#[cfg(feature = "linux")]
impl OpenBus for linux_embedded_hal::I2cdev {
    fn open_bus(bus: u8) -> Result<Self> {
        let path = format!("/dev/i2c-{}", bus);
        let device = linux_embedded_hal::I2cdev::new(&path).map_err(|e| {
            debug!("Failed to open {}: {}", path, e);
            Error::BusOpen {
                bus,
                reason: e.to_string(),
            }
        })?;
        debug!("Opened I2C bus {}", path);
        Ok(device)
    }
}

/// Writes one payload to the device, mapping bus errors to [`Error::Transport`].
pub(crate) fn send<I2C: I2c>(i2c: &mut I2C, address: u8, bytes: &[u8]) -> Result<()> {
    debug!("Writing to 0x{:02X}: {:02X?}", address, bytes);
    i2c.write(address, bytes).map_err(|e| {
        let kind = e.kind();
        warn!("I2C write to 0x{:02X} failed: {}", address, kind);
        Error::Transport { address, kind }
    })
}
