//! Character display implementations for the lcdmenu engine
//!
//! This crate provides:
//! - [`TextGrid`], an in-memory character display implementing
//!   [`MenuDisplay`](lcdmenu_core::MenuDisplay), for host simulators and tests
//! - [`TextBackend`], a row/column text interface for OLED, TFT or serial
//!   terminals, and [`CursorAdapter`] which drives one through the
//!   cursor-oriented `MenuDisplay` interface
//!
//! # Architecture
//!
//! The menu engine writes through a cursor: position, then print. Many
//! display stacks instead take "text at (row, col)" commands. The adapter
//! bridges the two so the same menu runs on either kind of display:
//!
//! ```text
//! Menu ──MenuDisplay──► CursorAdapter ──TextBackend──► OLED / UART / TextGrid
//!   └──MenuDisplay──► HD44780 driver / TextGrid
//! ```

#![cfg_attr(not(test), no_std)]

pub mod adapter;
pub mod backend;
pub mod grid;

// Re-export key types
pub use adapter::CursorAdapter;
pub use backend::{DisplayError, TextBackend};
pub use grid::{TextGrid, LCD_COLS, LCD_ROWS};
