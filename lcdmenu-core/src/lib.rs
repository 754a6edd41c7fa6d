//! Display-agnostic hierarchical menu engine for character LCDs
//!
//! This crate contains everything the menu needs that does not depend on a
//! specific display or input hardware:
//!
//! - Static menu tree types and structural checks
//! - The `MenuDisplay` capability trait a display driver implements
//! - The navigation state machine and viewport renderer
//! - Keypad bindings onto navigation commands
//! - Render configuration and error types
//!
//! # Usage
//!
//! ```ignore
//! let mut menu: Menu<'_, '_, Lcd> = Menu::new();
//! menu.init(Some(&mut lcd))?;
//! menu.view_init(MENU, Some(ItemId(0)), Some(on_exit), None)?;
//!
//! loop {
//!     if let Some(cmd) = keymap.resolve(keypad.poll()) {
//!         menu.handle(cmd);
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod input;
pub mod tree;

pub use config::{RenderConfig, DEFAULT_MAX_MENU_DEPTH};
pub use display::{Capabilities, Geometry, MenuDisplay};
pub use engine::{Menu, Response};
pub use error::MenuError;
pub use input::{KeyMap, MenuCommand, NavKey};
pub use tree::{ItemId, LinkError, MenuAction, MenuItem, MenuTree};
