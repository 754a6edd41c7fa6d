//! Menu session and navigation state machine
//!
//! A [`Menu`] owns all navigation state and borrows the display driver.
//! The navigation state is `(current item, level)` plus a per-level
//! selection index and on-screen row, so returning to a level restores the
//! cursor where the user left it.
//!
//! Navigation requests that cannot be honoured (moving past the end of a
//! list, entering a leaf without an action, leaving the root) are absorbed
//! silently; they are not errors.

mod render;

#[cfg(test)]
pub(crate) mod mock;

use crate::config::{RenderConfig, DEFAULT_MAX_MENU_DEPTH};
use crate::display::{Capabilities, Geometry, MenuDisplay};
use crate::error::MenuError;
use crate::input::MenuCommand;
use crate::tree::{ItemId, MenuAction, MenuItem, MenuTree};

use render::Frame;

/// Outcome of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    /// Selection moved to a sibling
    Moved,
    /// Descended into a submenu
    Entered,
    /// Returned to the parent level
    Exited,
    /// Leaf item's action was invoked; the action owns the screen
    Invoked(ItemId),
    /// `esc` at the root; the exit action (if any) was invoked
    ExitRequested,
    /// Nothing changed
    Unchanged,
}

impl Response {
    /// Check if the menu view was redrawn
    pub fn redrawn(&self) -> bool {
        matches!(self, Response::Moved | Response::Entered | Response::Exited)
    }
}

/// Active view: which tree is shown and where the cursor is
#[derive(Debug, Clone, Copy)]
struct View<'t> {
    tree: MenuTree<'t>,
    /// First item of level 0
    root: ItemId,
    /// Highlighted item
    current: ItemId,
    exit_action: Option<MenuAction>,
    header: Option<&'t str>,
}

/// Menu session bound to one display
///
/// `DEPTH` is the maximum number of menu levels; views on deeper trees are
/// rejected by [`Menu::view_init`].
pub struct Menu<'d, 't, D: MenuDisplay + ?Sized, const DEPTH: usize = DEFAULT_MAX_MENU_DEPTH> {
    display: Option<&'d mut D>,
    geometry: Geometry,
    initialized: bool,
    config: RenderConfig,
    view: Option<View<'t>>,
    level: usize,
    /// Absolute index of the highlighted item, per level
    selection: [u8; DEPTH],
    /// Row of the highlighted item below the header, per level
    row: [u8; DEPTH],
}

impl<'d, 't, D: MenuDisplay + ?Sized, const DEPTH: usize> Default for Menu<'d, 't, D, DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'d, 't, D: MenuDisplay + ?Sized, const DEPTH: usize> Menu<'d, 't, D, DEPTH> {
    /// Create an uninitialized session with the default render configuration
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create an uninitialized session
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            display: None,
            geometry: Geometry::default(),
            initialized: false,
            config,
            view: None,
            level: 0,
            selection: [0; DEPTH],
            row: [0; DEPTH],
        }
    }

    /// Bind a display driver
    ///
    /// Checks the driver provides every required capability and a usable
    /// geometry, caches the geometry and initializes the screen. On failure
    /// the session is left exactly as it was. On success any active view is
    /// dropped; start one with [`Menu::view_init`].
    pub fn init(&mut self, display: Option<&'d mut D>) -> Result<(), MenuError> {
        let Some(display) = display else {
            return Err(log_failure(MenuError::NoDisplayInterface));
        };

        if !display.capabilities().contains(Capabilities::REQUIRED) {
            return Err(log_failure(MenuError::IncompleteInterface));
        }

        let geometry = Geometry::of(&*display);
        if geometry.lines == 0 || geometry.columns == 0 {
            return Err(log_failure(MenuError::IncompleteInterface));
        }

        display.screen_init();

        #[cfg(feature = "defmt")]
        defmt::debug!("menu display bound: {}", geometry);

        self.display = Some(display);
        self.geometry = geometry;
        self.initialized = true;
        self.view = None;
        self.level = 0;
        Ok(())
    }

    /// Start a view on `root` and draw it
    ///
    /// `exit_action` runs when `esc` is pressed at the root. `header`
    /// replaces the default root header and is centered on the header row.
    /// On failure the previous view, if any, stays active and untouched.
    pub fn view_init(
        &mut self,
        tree: MenuTree<'t>,
        root: Option<ItemId>,
        exit_action: Option<MenuAction>,
        header: Option<&'t str>,
    ) -> Result<(), MenuError> {
        if !self.initialized {
            return Err(log_failure(MenuError::NotInitialized));
        }

        let Some(root) = root.filter(|id| tree.contains(*id)) else {
            return Err(log_failure(MenuError::NoMenu));
        };

        if tree.depth(root, DEPTH) > DEPTH {
            return Err(log_failure(MenuError::MenuTooDeep));
        }

        self.view = Some(View {
            tree,
            root,
            current: root,
            exit_action,
            header,
        });
        self.level = 0;
        self.selection = [0; DEPTH];
        self.row = [0; DEPTH];

        #[cfg(feature = "defmt")]
        defmt::debug!("menu view started at {}", root);

        self.update_screen_view();
        Ok(())
    }

    /// Move the selection to the next sibling
    pub fn next(&mut self) -> Response {
        let Some(view) = self.view.as_mut() else {
            return Response::Unchanged;
        };
        let Some(next) = sibling(view, |item| item.next) else {
            return Response::Unchanged;
        };

        view.current = next;
        let last_row = self.geometry.last_body_row();
        if let Some(selection) = self.selection.get_mut(self.level) {
            *selection = selection.saturating_add(1);
        }
        if let Some(row) = self.row.get_mut(self.level) {
            if *row < last_row {
                *row += 1;
            }
        }

        self.update_screen_view();
        Response::Moved
    }

    /// Move the selection to the previous sibling
    pub fn prev(&mut self) -> Response {
        let Some(view) = self.view.as_mut() else {
            return Response::Unchanged;
        };
        let Some(prev) = sibling(view, |item| item.prev) else {
            return Response::Unchanged;
        };

        view.current = prev;
        if let Some(selection) = self.selection.get_mut(self.level) {
            *selection = selection.saturating_sub(1);
        }
        if let Some(row) = self.row.get_mut(self.level) {
            *row = row.saturating_sub(1);
        }

        self.update_screen_view();
        Response::Moved
    }

    /// Open the highlighted item's submenu, or run its action
    ///
    /// Running an action does not redraw the menu: the action owns the
    /// screen until the application calls [`Menu::update_screen_view`].
    pub fn enter(&mut self) -> Response {
        let Some(view) = self.view.as_mut() else {
            return Response::Unchanged;
        };
        let Some(item) = view.tree.get(view.current) else {
            return Response::Unchanged;
        };

        if let Some(child) = item.child.filter(|id| view.tree.contains(*id)) {
            let response = if self.level + 1 < DEPTH {
                self.level += 1;
                view.current = child;
                self.selection[self.level] = 0;
                self.row[self.level] = 0;
                Response::Entered
            } else {
                Response::Unchanged
            };
            self.update_screen_view();
            response
        } else if let Some(action) = item.action {
            let id = view.current;
            action();
            Response::Invoked(id)
        } else {
            Response::Unchanged
        }
    }

    /// Return to the parent level, or request leaving the menu at the root
    pub fn esc(&mut self) -> Response {
        let Some(view) = self.view.as_mut() else {
            return Response::Unchanged;
        };
        let Some(item) = view.tree.get(view.current) else {
            return Response::Unchanged;
        };

        if let Some(parent) = item.parent.filter(|id| view.tree.contains(*id)) {
            self.level = self.level.saturating_sub(1);
            view.current = parent;
            self.update_screen_view();
            Response::Exited
        } else {
            if let Some(exit) = view.exit_action {
                exit();
            }
            Response::ExitRequested
        }
    }

    /// Dispatch a navigation command
    pub fn handle(&mut self, command: MenuCommand) -> Response {
        match command {
            MenuCommand::Next => self.next(),
            MenuCommand::Prev => self.prev(),
            MenuCommand::Enter => self.enter(),
            MenuCommand::Esc => self.esc(),
        }
    }

    /// Redraw the header and the visible part of the current level
    pub fn update_screen_view(&mut self) {
        let (Some(view), Some(display)) = (self.view.as_ref(), self.display.as_deref_mut()) else {
            return;
        };

        let frame = Frame {
            tree: view.tree,
            root: view.root,
            current: view.current,
            header: view.header,
            selection: self.selection.get(self.level).copied().unwrap_or(0),
            row: self.row.get(self.level).copied().unwrap_or(0),
            geometry: self.geometry,
            config: &self.config,
        };
        frame.draw(display);
    }

    /// Highlighted item, `None` until a view is started
    pub fn current(&self) -> Option<ItemId> {
        self.view.map(|view| view.current)
    }

    /// Highlighted item's definition
    pub fn current_item(&self) -> Option<&'t MenuItem<'t>> {
        self.view.and_then(|view| view.tree.get(view.current))
    }

    /// Current depth, 0 at the root list
    pub fn level(&self) -> usize {
        self.level
    }

    /// Absolute index of the highlighted item within its list
    pub fn selection(&self) -> u8 {
        self.selection.get(self.level).copied().unwrap_or(0)
    }

    /// Row of the highlighted item, counted from the first row below the header
    pub fn cursor_row(&self) -> u8 {
        self.row.get(self.level).copied().unwrap_or(0)
    }

    /// Geometry cached at init
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Check if a display has been bound by [`Menu::init`]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Check if a view has been started
    pub fn is_active(&self) -> bool {
        self.view.is_some()
    }

    /// Render configuration in use
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Borrow the bound display, for screens drawn by item actions
    pub fn display_mut(&mut self) -> Option<&mut D> {
        self.display.as_deref_mut()
    }
}

/// Sibling of the highlighted item, if it exists in the tree
fn sibling(view: &View<'_>, link: impl Fn(&MenuItem<'_>) -> Option<ItemId>) -> Option<ItemId> {
    let item = view.tree.get(view.current)?;
    link(item).filter(|id| view.tree.contains(*id))
}

fn log_failure(err: MenuError) -> MenuError {
    #[cfg(feature = "defmt")]
    defmt::warn!("menu initialization failed: {}", err);
    err
}
