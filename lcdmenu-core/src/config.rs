//! Render configuration
//!
//! Fixed strings and characters used when drawing the menu. Defaults match
//! the classic HD44780 layout: a dashed header row with " MENU " in it and a
//! `>` marker in column 0.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default maximum menu depth for [`Menu`](crate::Menu)
pub const DEFAULT_MAX_MENU_DEPTH: usize = 4;

/// Maximum length of configurable header / placeholder text
pub const MAX_TEXT_LEN: usize = 20;

/// Header text used at the root when no custom header is given
pub const DEFAULT_HEADER: &str = " MENU ";

/// Column the default header is drawn at
pub const DEFAULT_HEADER_COLUMN: u8 = 7;

/// Text drawn for items without a name
pub const NO_NAME_PLACEHOLDER: &str = "NO NAME";

/// Drawing parameters for the menu view
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    /// Root header when the view was started without a custom one
    pub default_header: String<MAX_TEXT_LEN>,
    /// Column `default_header` starts at
    pub default_header_column: u8,
    /// Character filling the header row
    pub header_fill: char,
    /// Selection marker drawn in column 0
    pub cursor_marker: char,
    /// Shown in place of a missing item name
    pub placeholder: String<MAX_TEXT_LEN>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_header: text(DEFAULT_HEADER),
            default_header_column: DEFAULT_HEADER_COLUMN,
            header_fill: '-',
            cursor_marker: '>',
            placeholder: text(NO_NAME_PLACEHOLDER),
        }
    }
}

impl RenderConfig {
    /// Replace the default root header, truncating to [`MAX_TEXT_LEN`]
    pub fn with_default_header(mut self, header: &str, column: u8) -> Self {
        self.default_header = text(header);
        self.default_header_column = column;
        self
    }

    /// Replace the header fill and cursor marker characters
    pub fn with_glyphs(mut self, header_fill: char, cursor_marker: char) -> Self {
        self.header_fill = header_fill;
        self.cursor_marker = cursor_marker;
        self
    }

    /// Replace the missing-name placeholder, truncating to [`MAX_TEXT_LEN`]
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = text(placeholder);
        self
    }
}

fn text(s: &str) -> String<MAX_TEXT_LEN> {
    let mut out = String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
