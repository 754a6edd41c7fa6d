//! Input bindings
//!
//! Maps keypad buttons onto menu navigation commands. Debouncing and
//! auto-repeat happen upstream; these are the discrete presses that come
//! out of it.

/// Navigation command understood by [`Menu::handle`](crate::Menu::handle)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuCommand {
    Prev,
    Next,
    Enter,
    Esc,
}

/// Four-button navigation keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Esc,
}

impl NavKey {
    /// Command the key triggers while the menu has the keypad
    pub fn menu_command(self) -> MenuCommand {
        match self {
            NavKey::Up => MenuCommand::Prev,
            NavKey::Down => MenuCommand::Next,
            NavKey::Enter => MenuCommand::Enter,
            NavKey::Esc => MenuCommand::Esc,
        }
    }
}

/// Rebindable key-to-command table
///
/// The application swaps tables when focus moves: the main screen only lets
/// Enter open the menu, the menu binds all four keys, and an item action
/// that takes over the screen can unbind everything it handles itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyMap {
    pub up: Option<MenuCommand>,
    pub down: Option<MenuCommand>,
    pub enter: Option<MenuCommand>,
    pub esc: Option<MenuCommand>,
}

impl KeyMap {
    /// Full menu navigation
    pub const MENU: Self = Self {
        up: Some(MenuCommand::Prev),
        down: Some(MenuCommand::Next),
        enter: Some(MenuCommand::Enter),
        esc: Some(MenuCommand::Esc),
    };

    /// Only Enter is live; used outside the menu to open it
    pub const ENTER_ONLY: Self = Self {
        up: None,
        down: None,
        enter: Some(MenuCommand::Enter),
        esc: None,
    };

    /// Nothing bound
    pub const NONE: Self = Self {
        up: None,
        down: None,
        enter: None,
        esc: None,
    };

    /// Rebind a single key
    pub const fn bind(mut self, key: NavKey, command: Option<MenuCommand>) -> Self {
        match key {
            NavKey::Up => self.up = command,
            NavKey::Down => self.down = command,
            NavKey::Enter => self.enter = command,
            NavKey::Esc => self.esc = command,
        }
        self
    }

    /// Command bound to `key`, if any
    pub fn resolve(&self, key: NavKey) -> Option<MenuCommand> {
        match key {
            NavKey::Up => self.up,
            NavKey::Down => self.down,
            NavKey::Enter => self.enter,
            NavKey::Esc => self.esc,
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::MENU
    }
}
