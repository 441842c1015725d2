//! HT16K33 command encoding.
//!
//! Command bytes:
//! - 0x21: system setup, oscillator on
//! - 0x80 | on | blink << 1: display setup
//! - 0xE0 | level: dimming
//!
//! Display RAM is written by sending a start address followed by data; the
//! chip auto-increments the address after each byte.

use crate::orientation::to_hardware;
use crate::{Error, Result, MAX_BRIGHTNESS};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::framebuffer::{check_row, Framebuffer, FRAMEBUFFER_SIZE};

/// Size of a full-buffer write payload.
pub const BUFFER_PACKET_SIZE: usize = FRAMEBUFFER_SIZE * 2;

/// Size of a single-row write payload.
pub const ROW_PACKET_SIZE: usize = 2;

/// First display RAM address.
pub const DISPLAY_RAM_START: u8 = 0x00;

/// Command byte groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// System setup register.
    SystemSetup = 0x20,
    /// Display setup register.
    DisplaySetup = 0x80,
    /// Dimming register.
    Dimming = 0xE0,
}

/// System setup flag enabling the internal oscillator.
const OSCILLATOR_ON: u8 = 0x01;

/// Display setup flag enabling output.
const DISPLAY_ON: u8 = 0x01;

/// Blink rate options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlinkRate {
    /// Steady output.
    #[default]
    #[serde(rename = "off")]
    Off = 0,
    /// Blink at 2 Hz.
    #[serde(rename = "2hz")]
    Hz2 = 1,
    /// Blink at 1 Hz.
    #[serde(rename = "1hz")]
    Hz1 = 2,
    /// Blink at 0.5 Hz.
    #[serde(rename = "0.5hz")]
    HalfHz = 3,
}

impl BlinkRate {
    /// Converts a mode number (0-3) to BlinkRate.
    pub fn from_byte(value: u8) -> Result<Self> {
        match value {
            0 => Ok(BlinkRate::Off),
            1 => Ok(BlinkRate::Hz2),
            2 => Ok(BlinkRate::Hz1),
            3 => Ok(BlinkRate::HalfHz),
            _ => Err(Error::InvalidBlinkRate(value)),
        }
    }

    /// Returns the two-bit field value.
    pub fn bits(&self) -> u8 {
        *self as u8
    }
}

impl FromStr for BlinkRate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "off" | "0" => Ok(BlinkRate::Off),
            "2hz" | "1" => Ok(BlinkRate::Hz2),
            "1hz" | "2" => Ok(BlinkRate::Hz1),
            "0.5hz" | "3" => Ok(BlinkRate::HalfHz),
            _ => Err(Error::InvalidBlinkName(s.to_string())),
        }
    }
}

impl std::fmt::Display for BlinkRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlinkRate::Off => write!(f, "off"),
            BlinkRate::Hz2 => write!(f, "2hz"),
            BlinkRate::Hz1 => write!(f, "1hz"),
            BlinkRate::HalfHz => write!(f, "0.5hz"),
        }
    }
}

/// Maps a logical row (0-7) to its display RAM address (0x00, 0x02 .. 0x0E).
#[inline]
pub fn row_address(row: u8) -> u8 {
    DISPLAY_RAM_START + row * 2
}

/// Command that starts the internal oscillator.
pub fn oscillator_on() -> u8 {
    Command::SystemSetup as u8 | OSCILLATOR_ON
}

/// Command that blanks the display.
pub fn display_off() -> u8 {
    Command::DisplaySetup as u8
}

/// Command that enables the display with a blink rate.
pub fn display_on(blink: BlinkRate) -> u8 {
    Command::DisplaySetup as u8 | DISPLAY_ON | (blink.bits() << 1)
}

/// Command that sets the dimming level.
pub fn dimming(brightness: u8) -> Result<u8> {
    if brightness > MAX_BRIGHTNESS {
        return Err(Error::InvalidBrightness(brightness));
    }
    Ok(Command::Dimming as u8 | brightness)
}

/// Builds the write for a single row.
pub fn build_row_packet(framebuffer: &Framebuffer, row: u8) -> Result<[u8; ROW_PACKET_SIZE]> {
    let byte = framebuffer.rows()[check_row(row)?];
    Ok([row_address(row), to_hardware(byte)])
}

/// Builds the write for the whole framebuffer.
///
/// Byte 0 is the start address. Row `r` lands at index `2r + 1`, which the
/// auto-increment maps onto register `2r`; the odd registers stay 0.
pub fn build_buffer_packet(framebuffer: &Framebuffer) -> [u8; BUFFER_PACKET_SIZE] {
    let mut buffer = [0u8; BUFFER_PACKET_SIZE];
    buffer[0] = DISPLAY_RAM_START;
    for (i, &row) in framebuffer.rows().iter().enumerate() {
        buffer[i * 2 + 1] = to_hardware(row);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_address() {
        for row in 0..8u8 {
            assert_eq!(row_address(row), row * 2);
        }
        assert_eq!(row_address(7), 0x0E);
    }

    #[test]
    fn test_command_bytes() {
        assert_eq!(oscillator_on(), 0x21);
        assert_eq!(display_off(), 0x80);
        assert_eq!(display_on(BlinkRate::Off), 0x81);
        assert_eq!(display_on(BlinkRate::Hz2), 0x83);
        assert_eq!(display_on(BlinkRate::Hz1), 0x85);
        assert_eq!(display_on(BlinkRate::HalfHz), 0x87);
        assert_eq!(dimming(0).unwrap(), 0xE0);
        assert_eq!(dimming(15).unwrap(), 0xEF);
        assert!(matches!(dimming(16), Err(Error::InvalidBrightness(16))));
    }

    #[test]
    fn test_row_packet() {
        let fb = Framebuffer::from_rows([0, 0, 0x01, 0, 0, 0, 0, 0x80]);
        assert_eq!(build_row_packet(&fb, 2).unwrap(), [0x04, 0x80]);
        assert_eq!(build_row_packet(&fb, 7).unwrap(), [0x0E, 0x40]);
        assert!(build_row_packet(&fb, 8).is_err());
    }

    #[test]
    fn test_buffer_packet() {
        let fb = Framebuffer::from_rows([0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80]);
        let packet = build_buffer_packet(&fb);
        assert_eq!(
            packet,
            [0x00, 0x80, 0, 0x01, 0, 0x02, 0, 0x04, 0, 0x08, 0, 0x10, 0, 0x20, 0, 0x40]
        );
    }

    #[test]
    fn test_blink_rate_parse() {
        assert_eq!(BlinkRate::from_byte(2).unwrap(), BlinkRate::Hz1);
        assert!(matches!(
            BlinkRate::from_byte(4),
            Err(Error::InvalidBlinkRate(4))
        ));
        assert_eq!("0.5Hz".parse::<BlinkRate>().unwrap(), BlinkRate::HalfHz);
        assert_eq!("off".parse::<BlinkRate>().unwrap(), BlinkRate::Off);
        assert!("fast".parse::<BlinkRate>().is_err());
        assert_eq!(BlinkRate::Hz2.to_string(), "2hz");
    }
}
