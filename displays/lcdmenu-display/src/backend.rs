//! Row/column text backends
//!
//! Displays driven by "text at (row, col)" commands: OLED and TFT text
//! renderers, serial terminals, remote display links.

/// Errors reported by a text backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or link failure; raised by I2C, SPI and serial backends
    Communication,
    /// Draw started outside the display
    InvalidCoordinates,
}

/// Display addressed by character row and column
pub trait TextBackend {
    /// Blank the whole display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw `text` starting at `row`, `col` (both 0-based)
    ///
    /// Text running past the last column is clipped.
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Push buffered content to the hardware; a no-op for unbuffered displays
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Size as (columns, rows) in characters
    fn dimensions(&self) -> (u8, u8);

    /// Draw a single character
    fn draw_char(&mut self, row: u8, col: u8, c: char) -> Result<(), DisplayError> {
        let mut buf = [0u8; 4];
        self.draw_text(row, col, c.encode_utf8(&mut buf))
    }
}

impl<T: TextBackend + ?Sized> TextBackend for &mut T {
    fn clear(&mut self) -> Result<(), DisplayError> {
        (**self).clear()
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        (**self).draw_text(row, col, text)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        (**self).flush()
    }

    fn dimensions(&self) -> (u8, u8) {
        (**self).dimensions()
    }

    fn draw_char(&mut self, row: u8, col: u8, c: char) -> Result<(), DisplayError> {
        (**self).draw_char(row, col, c)
    }
}
