//! Bit orientation between logical rows and the controller's wiring.
//!
//! Logical addressing puts column 0 in the MSB of a row byte. The Adafruit
//! 8x8 backpack wires the HT16K33 so that column 0 sits one bit further
//! along, so every row byte is rotated right by one before it is written.

/// Number of bit positions the hardware columns are offset from logical ones.
pub const HARDWARE_COLUMN_OFFSET: u32 = 1;

/// Mask selecting logical column 0 in a row byte.
pub const COLUMN_0_MASK: u8 = 0x80;

/// Rotates a byte right by one bit; bit 0 wraps round to bit 7.
#[inline]
pub fn rotate_right_1(byte: u8) -> u8 {
    byte.rotate_right(1)
}

/// Converts a logical row byte into the byte the controller expects.
#[inline]
pub fn to_hardware(row: u8) -> u8 {
    row.rotate_right(HARDWARE_COLUMN_OFFSET)
}

/// Returns the row-byte mask for a logical column (0 = MSB).
#[inline]
pub fn column_mask(column: u8) -> u8 {
    COLUMN_0_MASK >> column
}

/// Moves the bit describing `row` in a column byte into `column`'s position
/// of a row byte.
///
/// A column byte lists the column top to bottom, MSB first, so row `r`'s
/// state is bit `0x80 >> r`. Shifting that bit by `column - row` lands it on
/// `0x80 >> column`, the column's slot in the row.
pub fn transpose_column_bit(byte: u8, row: u8, column: u8) -> u8 {
    let bit = byte & (COLUMN_0_MASK >> row);
    let shift = column as i8 - row as i8;
    if shift >= 0 {
        bit >> shift
    } else {
        bit << -shift
    }
}

/// Gathers one column out of eight row bytes into a column byte (row 0 = MSB).
pub fn gather_column(rows: &[u8; 8], column: u8) -> u8 {
    let mask = column_mask(column);
    let mut byte = 0u8;
    for (r, &row) in rows.iter().enumerate() {
        if row & mask != 0 {
            byte |= COLUMN_0_MASK >> r;
        }
    }
    byte
}
