//! Eight-byte framebuffer for the 8x8 matrix.

use crate::orientation::{column_mask, gather_column, transpose_column_bit};
use crate::{Error, Result, MATRIX_COLUMNS, MATRIX_ROWS};

/// Number of bytes held by the framebuffer (one per row).
pub const FRAMEBUFFER_SIZE: usize = MATRIX_ROWS as usize;

/// In-memory mirror of the matrix, one byte per row, column 0 in the MSB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Framebuffer {
    rows: [u8; FRAMEBUFFER_SIZE],
}

/// Checks a row index.
pub(crate) fn check_row(row: u8) -> Result<usize> {
    if row >= MATRIX_ROWS {
        return Err(Error::RowOutOfRange(row));
    }
    Ok(row as usize)
}

/// Checks a column index.
pub(crate) fn check_column(column: u8) -> Result<u8> {
    if column >= MATRIX_COLUMNS {
        return Err(Error::ColumnOutOfRange(column));
    }
    Ok(column)
}

impl Framebuffer {
    /// Creates a new framebuffer with every pixel off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a framebuffer from eight row bytes.
    pub fn from_rows(rows: [u8; FRAMEBUFFER_SIZE]) -> Self {
        Self { rows }
    }

    /// Returns a copy of all row bytes.
    pub fn rows(&self) -> [u8; FRAMEBUFFER_SIZE] {
        self.rows
    }

    /// Replaces every row from a slice that must hold exactly eight bytes.
    pub fn copy_from_slice(&mut self, bitmap: &[u8]) -> Result<()> {
        if bitmap.len() != FRAMEBUFFER_SIZE {
            return Err(Error::BitmapLength {
                expected: FRAMEBUFFER_SIZE,
                actual: bitmap.len(),
            });
        }
        self.rows.copy_from_slice(bitmap);
        Ok(())
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.rows.fill(0);
    }

    /// Returns one row byte.
    pub fn row(&self, row: u8) -> Result<u8> {
        Ok(self.rows[check_row(row)?])
    }

    /// Replaces one row byte.
    pub fn set_row(&mut self, row: u8, byte: u8) -> Result<()> {
        self.rows[check_row(row)?] = byte;
        Ok(())
    }

    /// Returns one column as a byte, row 0 in the MSB.
    pub fn column(&self, column: u8) -> Result<u8> {
        Ok(gather_column(&self.rows, check_column(column)?))
    }

    /// Writes a column byte (row 0 in the MSB) down the given column.
    pub fn set_column(&mut self, column: u8, byte: u8) -> Result<()> {
        self.clear_column(column)?;
        if byte == 0 {
            return Ok(());
        }
        for (r, row) in self.rows.iter_mut().enumerate() {
            *row |= transpose_column_bit(byte, r as u8, column);
        }
        Ok(())
    }

    /// Turns every pixel of a column off, leaving the other columns alone.
    pub fn clear_column(&mut self, column: u8) -> Result<()> {
        let mask = column_mask(check_column(column)?);
        for row in self.rows.iter_mut() {
            *row &= !mask;
        }
        Ok(())
    }

    /// Returns whether a pixel is lit.
    pub fn pixel(&self, row: u8, column: u8) -> Result<bool> {
        let mask = column_mask(check_column(column)?);
        Ok(self.rows[check_row(row)?] & mask != 0)
    }

    /// Turns a pixel on.
    pub fn set_pixel(&mut self, row: u8, column: u8) -> Result<()> {
        let mask = column_mask(check_column(column)?);
        self.rows[check_row(row)?] |= mask;
        Ok(())
    }

    /// Turns a pixel off.
    pub fn clear_pixel(&mut self, row: u8, column: u8) -> Result<()> {
        let mask = column_mask(check_column(column)?);
        self.rows[check_row(row)?] &= !mask;
        Ok(())
    }
}
