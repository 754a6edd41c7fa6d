//! Static menu tree
//!
//! Menus are built by the application, usually as a generated `static`
//! table, and only ever walked by the engine. Items reference each other by
//! [`ItemId`], so a tree is a plain slice and needs no allocation.
//!
//! Well-formedness (acyclic `child`/`next` links, paired `next`/`prev`,
//! consistent `parent`) is the caller's responsibility. Walks are bounded by
//! the number of items so a broken table cannot hang the engine, and
//! [`MenuTree::check_links`] is available to verify generated tables in tests.

pub mod item;

pub use item::{ItemId, MenuAction, MenuItem};

/// Structural problems found by [`MenuTree::check_links`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Item links to an id outside the tree
    OutOfRange(ItemId),
    /// `next`/`prev` links of the item do not point back at it
    Unpaired(ItemId),
    /// Item's `parent` does not own the list the item is in
    WrongParent(ItemId),
}

/// Borrowed slice of menu items
#[derive(Debug, Clone, Copy)]
pub struct MenuTree<'a> {
    items: &'a [MenuItem<'a>],
}

impl<'a> MenuTree<'a> {
    /// Wrap an item table; ids index into `items`
    pub const fn new(items: &'a [MenuItem<'a>]) -> Self {
        Self { items }
    }

    /// Look up an item; ids outside the tree read as absent
    pub fn get(&self, id: ItemId) -> Option<&'a MenuItem<'a>> {
        self.items.get(id.index())
    }

    /// Check if `id` names an item of this tree
    pub fn contains(&self, id: ItemId) -> bool {
        id.index() < self.items.len()
    }

    /// Number of items
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the tree has no items
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Walk a sibling list starting at `first`
    pub fn siblings(&self, first: Option<ItemId>) -> Siblings<'a> {
        Siblings {
            tree: *self,
            next: first,
            remaining: self.items.len(),
        }
    }

    /// First item of the list `id` belongs to
    pub fn list_head(&self, id: ItemId) -> Option<ItemId> {
        let mut head = id;
        for _ in 0..self.items.len() {
            match self.get(head)?.prev {
                Some(prev) => head = prev,
                None => return Some(head),
            }
        }
        None
    }

    /// Maximum depth of the level starting at `root`, capped at `limit + 1`
    ///
    /// A childless item has depth 1 and an item with children has depth
    /// 1 + the deepest child. Every sibling of `root` reachable through
    /// `next` counts, since the engine can navigate to all of them. Only
    /// `child` and `next` links are followed. The walk stops descending once
    /// the depth exceeds `limit`, so a result greater than `limit` means
    /// "too deep" and recursion stays bounded even on a cyclic table.
    pub fn depth(&self, root: ItemId, limit: usize) -> usize {
        self.level_depth(Some(root), limit.saturating_add(1))
    }

    fn level_depth(&self, first: Option<ItemId>, budget: usize) -> usize {
        if budget == 0 {
            return 0;
        }

        let mut deepest = 0;
        for id in self.siblings(first) {
            let Some(item) = self.get(id) else {
                break;
            };
            let depth = 1 + self.level_depth(item.child, budget - 1);
            deepest = deepest.max(depth);
            if deepest >= budget {
                break;
            }
        }
        deepest
    }

    /// Verify link consistency of every item
    pub fn check_links(&self) -> Result<(), LinkError> {
        for (index, item) in self.items.iter().enumerate() {
            let id = ItemId(index as u16);

            for link in [item.next, item.prev, item.child, item.parent]
                .into_iter()
                .flatten()
            {
                if !self.contains(link) {
                    return Err(LinkError::OutOfRange(id));
                }
            }

            if let Some(next) = item.next.and_then(|n| self.get(n)) {
                if next.prev != Some(id) {
                    return Err(LinkError::Unpaired(id));
                }
            }
            if let Some(prev) = item.prev.and_then(|p| self.get(p)) {
                if prev.next != Some(id) {
                    return Err(LinkError::Unpaired(id));
                }
            }

            if let Some(child) = item.child {
                if self.get(child).is_some_and(|c| c.prev.is_some()) {
                    return Err(LinkError::WrongParent(child));
                }
                for sibling in self.siblings(Some(child)) {
                    let parent = self.get(sibling).and_then(|s| s.parent);
                    if parent != Some(id) {
                        return Err(LinkError::WrongParent(sibling));
                    }
                }
            }

            if let Some(parent) = item.parent.and_then(|p| self.get(p)) {
                let owned = self
                    .list_head(id)
                    .is_some_and(|head| parent.child == Some(head));
                if !owned {
                    return Err(LinkError::WrongParent(id));
                }
            }
        }
        Ok(())
    }
}

/// Iterator over a sibling list, see [`MenuTree::siblings`]
#[derive(Debug, Clone)]
pub struct Siblings<'a> {
    tree: MenuTree<'a>,
    next: Option<ItemId>,
    remaining: usize,
}

impl Iterator for Siblings<'_> {
    type Item = ItemId;

    fn next(&mut self) -> Option<ItemId> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.next?;
        let item = self.tree.get(id)?;
        self.remaining -= 1;
        self.next = item.next;
        Some(id)
    }
}
