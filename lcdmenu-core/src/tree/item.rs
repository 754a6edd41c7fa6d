//! Menu item definition

/// Action bound to a leaf item or to leaving the root menu
pub type MenuAction = fn();

/// Index of an item inside its [`MenuTree`](super::MenuTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ItemId(pub u16);

impl ItemId {
    /// Position in the item slice
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single entry in a static menu tree
///
/// Items on the same level form a doubly linked list through `next` and
/// `prev`. An item with a `child` opens a submenu; every item of that
/// submenu has `parent` set to the item that opened it.
///
/// ```ignore
/// static ITEMS: [MenuItem; 3] = [
///     MenuItem::new("Info").with_next(ItemId(1)).with_action(show_info),
///     MenuItem::new("Settings").with_prev(ItemId(0)).with_child(ItemId(2)),
///     MenuItem::new("Sound").with_parent(ItemId(1)),
/// ];
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MenuItem<'a> {
    /// Label shown on the display
    pub name: Option<&'a str>,
    /// Next sibling
    pub next: Option<ItemId>,
    /// Previous sibling
    pub prev: Option<ItemId>,
    /// First item of the submenu
    pub child: Option<ItemId>,
    /// Item whose submenu contains this item
    pub parent: Option<ItemId>,
    /// Invoked when a childless item is entered
    pub action: Option<MenuAction>,
}

impl<'a> MenuItem<'a> {
    /// Item with a label and no links
    pub const fn new(name: &'a str) -> Self {
        Self {
            name: Some(name),
            ..Self::unnamed()
        }
    }

    /// Item without a label
    pub const fn unnamed() -> Self {
        Self {
            name: None,
            next: None,
            prev: None,
            child: None,
            parent: None,
            action: None,
        }
    }

    /// Link the next sibling
    pub const fn with_next(mut self, next: ItemId) -> Self {
        self.next = Some(next);
        self
    }

    /// Link the previous sibling
    pub const fn with_prev(mut self, prev: ItemId) -> Self {
        self.prev = Some(prev);
        self
    }

    /// Open a submenu starting at `child`
    pub const fn with_child(mut self, child: ItemId) -> Self {
        self.child = Some(child);
        self
    }

    /// Set the item whose submenu holds this one
    pub const fn with_parent(mut self, parent: ItemId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Run `action` when this item is entered
    pub const fn with_action(mut self, action: MenuAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Check if entering this item opens a submenu
    pub const fn has_submenu(&self) -> bool {
        self.child.is_some()
    }
}

impl Default for MenuItem<'_> {
    fn default() -> Self {
        Self::unnamed()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MenuItem<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "MenuItem {{ name: {}, next: {}, prev: {}, child: {}, parent: {} }}",
            self.name,
            self.next,
            self.prev,
            self.child,
            self.parent
        );
    }
}
