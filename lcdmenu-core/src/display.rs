//! Display driver capability set
//!
//! The menu engine draws through this trait only. A driver for an HD44780,
//! a serial terminal or an in-memory grid implements it and hands a mutable
//! borrow to [`Menu::init`](crate::Menu::init).

use core::ops::BitOr;

/// Set of display operations a driver provides
///
/// Every [`MenuDisplay`] method is a capability. Drivers assembled from
/// partial hardware support (for example a write-only backpack that cannot
/// report its geometry) override [`MenuDisplay::capabilities`] so the engine
/// can refuse them at init time instead of misrendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Capabilities(u8);

impl Capabilities {
    pub const SCREEN_INIT: Self = Self(1 << 0);
    pub const CLEAR_SCREEN: Self = Self(1 << 1);
    pub const SET_CURSOR: Self = Self(1 << 2);
    pub const PRINT_STR: Self = Self(1 << 3);
    pub const PRINT_CHAR: Self = Self(1 << 4);
    pub const LINES: Self = Self(1 << 5);
    pub const COLUMNS: Self = Self(1 << 6);

    /// No capabilities
    pub const NONE: Self = Self(0);

    /// Everything the menu engine needs
    pub const REQUIRED: Self = Self(0x7F);

    /// Check that every capability in `other` is present
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Remove capabilities
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Raw bit representation
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for Capabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Character grid size reported by a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    /// Number of text rows
    pub lines: u8,
    /// Number of characters per row
    pub columns: u8,
}

impl Geometry {
    /// Query a driver's size through `lines()` and `columns()`
    pub fn of<D: MenuDisplay + ?Sized>(display: &D) -> Self {
        Self {
            lines: display.lines(),
            columns: display.columns(),
        }
    }

    /// Number of rows below the header available for items
    pub const fn body_rows(&self) -> u8 {
        self.lines.saturating_sub(1)
    }

    /// Last row index a selection can occupy, relative to the first body row
    pub const fn last_body_row(&self) -> u8 {
        self.lines.saturating_sub(2)
    }
}

/// Character display driver
///
/// Rows and columns are 0-based. Printing advances the driver's write
/// cursor; what happens past the end of a row is up to the driver.
pub trait MenuDisplay {
    /// Initialize the display hardware
    fn screen_init(&mut self);

    /// Clear the whole screen
    fn clear_screen(&mut self);

    /// Move the write cursor
    fn set_cursor(&mut self, row: u8, column: u8);

    /// Print a string at the write cursor
    fn print_str(&mut self, text: &str);

    /// Print a single character at the write cursor
    fn print_char(&mut self, c: char);

    /// Number of text rows
    fn lines(&self) -> u8;

    /// Number of characters per row
    fn columns(&self) -> u8;

    /// Operations this driver actually supports
    fn capabilities(&self) -> Capabilities {
        Capabilities::REQUIRED
    }
}

impl<T: MenuDisplay + ?Sized> MenuDisplay for &mut T {
    fn screen_init(&mut self) {
        (**self).screen_init()
    }

    fn clear_screen(&mut self) {
        (**self).clear_screen()
    }

    fn set_cursor(&mut self, row: u8, column: u8) {
        (**self).set_cursor(row, column)
    }

    fn print_str(&mut self, text: &str) {
        (**self).print_str(text)
    }

    fn print_char(&mut self, c: char) {
        (**self).print_char(c)
    }

    fn lines(&self) -> u8 {
        (**self).lines()
    }

    fn columns(&self) -> u8 {
        (**self).columns()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }
}
