//! Matrix driver.

use crate::config::MatrixConfig;
use crate::transport::{send, Connection, OpenBus};
use crate::Result;
use embedded_hal::i2c::I2c;
use tracing::{debug, info};

use super::framebuffer::{Framebuffer, FRAMEBUFFER_SIZE};
use super::protocol::{
    build_buffer_packet, build_row_packet, dimming, display_off, display_on, oscillator_on,
    BlinkRate,
};

/// 8x8 LED matrix on an HT16K33.
///
/// Every mutating call updates the framebuffer first and then writes the
/// affected bytes to the chip. If that write fails the error is returned but
/// the framebuffer keeps the new contents, so the panel may lag behind it
/// until the next successful write (see [`Matrix8x8::refresh`]).
///
/// The driver does no locking. Callers sharing it between threads must wrap
/// it in a `Mutex` themselves.
#[derive(Debug)]
pub struct Matrix8x8<I2C> {
    i2c: I2C,
    address: u8,
    framebuffer: Framebuffer,
    is_on: bool,
    blink: BlinkRate,
    brightness: u8,
}

impl<I2C: I2c> Matrix8x8<I2C> {
    /// Initialises the matrix over an already opened transport.
    ///
    /// Starts the oscillator, applies the brightness, blanks the panel and
    /// turns it on. Any failure drops the transport and returns the error.
    pub fn new(i2c: I2C, config: &MatrixConfig) -> Result<Self> {
        config.validate()?;

        let mut matrix = Self {
            i2c,
            address: config.address,
            framebuffer: Framebuffer::new(),
            is_on: false,
            blink: config.blink,
            brightness: config.brightness,
        };

        matrix.write(&[oscillator_on()])?;
        matrix.set_brightness(config.brightness)?;
        matrix.clear()?;
        matrix.on()?;

        info!(
            "HT16K33 matrix initialised at 0x{:02X} (brightness: {}, blink: {})",
            matrix.address, matrix.brightness, matrix.blink
        );
        Ok(matrix)
    }

    /// Initialises the matrix from either connection variant.
    pub fn connect(connection: Connection<I2C>, config: &MatrixConfig) -> Result<Self>
    where
        I2C: OpenBus,
    {
        config.validate()?;
        Self::new(connection.into_transport()?, config)
    }

    /// Opens `config.bus` and initialises the matrix on it.
    pub fn open(config: &MatrixConfig) -> Result<Self>
    where
        I2C: OpenBus,
    {
        Self::connect(Connection::Bus(config.bus), config)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        send(&mut self.i2c, self.address, bytes)
    }

    fn write_row(&mut self, row: u8) -> Result<()> {
        let packet = build_row_packet(&self.framebuffer, row)?;
        self.write(&packet)
    }

    fn write_buffer(&mut self) -> Result<()> {
        let packet = build_buffer_packet(&self.framebuffer);
        self.write(&packet)
    }

    /// Turns the display on with the current blink rate.
    pub fn on(&mut self) -> Result<()> {
        self.is_on = true;
        self.write(&[display_on(self.blink)])?;
        debug!("Display on (blink: {})", self.blink);
        Ok(())
    }

    /// Turns the display off. Drawing keeps working and shows on the next `on()`.
    pub fn off(&mut self) -> Result<()> {
        self.is_on = false;
        self.write(&[display_off()])?;
        debug!("Display off");
        Ok(())
    }

    /// Sets brightness (0-15). Values above 15 are rejected.
    pub fn set_brightness(&mut self, brightness: u8) -> Result<()> {
        let command = dimming(brightness)?;
        self.write(&[command])?;
        self.brightness = brightness;
        debug!("Brightness set to {}", brightness);
        Ok(())
    }

    /// Sets the blink rate, resending the display command if the display is on.
    pub fn set_blinking(&mut self, blink: BlinkRate) -> Result<()> {
        self.blink = blink;
        if self.is_on {
            self.on()?;
        }
        Ok(())
    }

    /// Replaces the whole picture; `bitmap` must hold exactly eight row bytes.
    pub fn set(&mut self, bitmap: &[u8]) -> Result<()> {
        self.framebuffer.copy_from_slice(bitmap)?;
        self.write_buffer()
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) -> Result<()> {
        self.framebuffer.clear();
        self.write_buffer()
    }

    /// Replaces one row.
    pub fn set_row(&mut self, row: u8, byte: u8) -> Result<()> {
        self.framebuffer.set_row(row, byte)?;
        self.write_row(row)
    }

    /// Turns one row off.
    pub fn clear_row(&mut self, row: u8) -> Result<()> {
        self.set_row(row, 0)
    }

    /// Replaces one column; bit 7 of `byte` is row 0.
    pub fn set_column(&mut self, column: u8, byte: u8) -> Result<()> {
        self.framebuffer.set_column(column, byte)?;
        self.write_buffer()
    }

    /// Turns one column off.
    pub fn clear_column(&mut self, column: u8) -> Result<()> {
        self.framebuffer.clear_column(column)?;
        self.write_buffer()
    }

    /// Turns one pixel on.
    pub fn set_pixel(&mut self, row: u8, column: u8) -> Result<()> {
        self.framebuffer.set_pixel(row, column)?;
        self.write_row(row)
    }

    /// Turns one pixel off.
    pub fn clear_pixel(&mut self, row: u8, column: u8) -> Result<()> {
        self.framebuffer.clear_pixel(row, column)?;
        self.write_row(row)
    }

    /// Rewrites the whole framebuffer to the chip.
    pub fn refresh(&mut self) -> Result<()> {
        self.write_buffer()
    }
}

impl<I2C> Matrix8x8<I2C> {
    /// Returns a copy of the framebuffer rows.
    pub fn framebuffer(&self) -> [u8; FRAMEBUFFER_SIZE] {
        self.framebuffer.rows()
    }

    /// Returns one row byte.
    pub fn row(&self, row: u8) -> Result<u8> {
        self.framebuffer.row(row)
    }

    /// Returns one column byte, row 0 in bit 7.
    pub fn column(&self, column: u8) -> Result<u8> {
        self.framebuffer.column(column)
    }

    /// Returns whether a pixel is lit in the framebuffer.
    pub fn pixel(&self, row: u8, column: u8) -> Result<bool> {
        self.framebuffer.pixel(row, column)
    }

    /// Returns true if the display was last turned on.
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Returns the current blink rate.
    pub fn blink_rate(&self) -> BlinkRate {
        self.blink
    }

    /// Returns the last brightness written.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Returns the device address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consumes the driver and hands back the transport.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
