//! Menu engine errors

use core::fmt;

/// Errors reported by session and view initialization
///
/// Navigation never fails; these are only returned from
/// [`Menu::init`](crate::Menu::init) and [`Menu::view_init`](crate::Menu::view_init).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuError {
    /// No display driver was supplied
    NoDisplayInterface,
    /// Display driver lacks a required capability or reports unusable geometry
    IncompleteInterface,
    /// `view_init` called before a successful `init`
    NotInitialized,
    /// Root item missing or not part of the tree
    NoMenu,
    /// Tree depth exceeds the session's maximum depth
    MenuTooDeep,
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MenuError::NoDisplayInterface => "no display interface",
            MenuError::IncompleteInterface => "display interface incomplete",
            MenuError::NotInitialized => "menu not initialized",
            MenuError::NoMenu => "no menu",
            MenuError::MenuTooDeep => "menu too deep",
        };
        f.write_str(msg)
    }
}
