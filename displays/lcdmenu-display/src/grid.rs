//! In-memory character display
//!
//! A fixed-size grid of ASCII cells that behaves like an HD44780 without the
//! hardware: a write cursor, clipping at the end of each row, no scrolling.
//! Host simulators render it to a terminal; tests read it back line by line.

use lcdmenu_core::MenuDisplay;

use crate::backend::{DisplayError, TextBackend};

/// Rows of the common 20x4 character LCD
pub const LCD_ROWS: usize = 4;

/// Columns of the common 20x4 character LCD
pub const LCD_COLS: usize = 20;

/// Drawn in place of characters the grid cannot hold
const SUBSTITUTE: u8 = b'?';

/// Character grid implementing both display interfaces
#[derive(Clone)]
pub struct TextGrid<const ROWS: usize = LCD_ROWS, const COLS: usize = LCD_COLS> {
    cells: [[u8; COLS]; ROWS],
    /// Write cursor (row, column)
    cursor: (u8, u8),
    /// Number of `screen_init` calls
    init_count: u32,
    /// Whether the grid changed since the last `mark_clean`
    dirty: bool,
}

impl<const ROWS: usize, const COLS: usize> Default for TextGrid<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> TextGrid<ROWS, COLS> {
    /// Geometry is reported as `u8`
    const FITS_GEOMETRY: () = assert!(
        ROWS <= u8::MAX as usize && COLS <= u8::MAX as usize,
        "TextGrid dimensions must fit in u8"
    );

    /// Create a blank grid
    pub const fn new() -> Self {
        let () = Self::FITS_GEOMETRY;
        Self {
            cells: [[b' '; COLS]; ROWS],
            cursor: (0, 0),
            init_count: 0,
            dirty: true,
        }
    }

    /// Blank every cell and home the cursor
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(b' ');
        }
        self.cursor = (0, 0);
        self.dirty = true;
    }

    /// Content of a row, trailing blanks included
    pub fn line(&self, row: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
            .unwrap_or("")
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        (0..ROWS).map(move |row| self.line(row))
    }

    /// Character at a cell
    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row)?.get(col).map(|&b| b as char)
    }

    /// Current write cursor as (row, column)
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    /// Number of times the screen was initialized
    pub fn init_count(&self) -> u32 {
        self.init_count
    }

    /// Check if the grid changed since it was last marked clean
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the grid as presented
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Write one character at the cursor and advance it
    fn put(&mut self, c: char) {
        let (row, col) = (self.cursor.0 as usize, self.cursor.1 as usize);
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = if c.is_ascii() { c as u8 } else { SUBSTITUTE };
            self.dirty = true;
        }
        self.cursor.1 = self.cursor.1.saturating_add(1);
    }
}

impl<const ROWS: usize, const COLS: usize> MenuDisplay for TextGrid<ROWS, COLS> {
    fn screen_init(&mut self) {
        self.init_count += 1;
        self.clear();
    }

    fn clear_screen(&mut self) {
        self.clear();
    }

    fn set_cursor(&mut self, row: u8, column: u8) {
        self.cursor = (row, column);
    }

    fn print_str(&mut self, text: &str) {
        for c in text.chars() {
            self.put(c);
        }
    }

    fn print_char(&mut self, c: char) {
        self.put(c);
    }

    fn lines(&self) -> u8 {
        ROWS as u8
    }

    fn columns(&self) -> u8 {
        COLS as u8
    }
}

impl<const ROWS: usize, const COLS: usize> TextBackend for TextGrid<ROWS, COLS> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        TextGrid::clear(self);
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row as usize >= ROWS || col as usize >= COLS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.cursor = (row, col);
        MenuDisplay::print_str(self, text);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (COLS as u8, ROWS as u8)
    }
}

#[cfg(feature = "defmt")]
impl<const ROWS: usize, const COLS: usize> defmt::Format for TextGrid<ROWS, COLS> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TextGrid[");
        for (i, line) in self.rows().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line);
        }
        defmt::write!(f, "]");
    }
}
