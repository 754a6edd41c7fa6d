//! Viewport rendering
//!
//! Row 0 is the header. Items of the current level fill the rows below it,
//! scrolled so the highlighted item sits on its remembered row.

use crate::config::RenderConfig;
use crate::display::{Geometry, MenuDisplay};
use crate::tree::{ItemId, MenuItem, MenuTree};

const HEADER_ROW: u8 = 0;
const FIRST_ITEM_ROW: u8 = 1;
const MARKER_COLUMN: u8 = 0;
const NAME_COLUMN: u8 = 1;
/// Spaces around a submenu title
const TITLE_PADDING: usize = 2;

/// Snapshot of everything needed to draw one screen
pub(super) struct Frame<'a, 't> {
    pub tree: MenuTree<'t>,
    pub root: ItemId,
    pub current: ItemId,
    pub header: Option<&'t str>,
    pub selection: u8,
    pub row: u8,
    pub geometry: Geometry,
    pub config: &'a RenderConfig,
}

impl<'t> Frame<'_, 't> {
    pub fn draw<D: MenuDisplay + ?Sized>(&self, display: &mut D) {
        let parent = self.parent();

        self.draw_header(display, parent);
        self.clear_body(display);

        // Level 0 lists start at the root; submenus at the parent's child
        let anchor = match parent {
            Some(parent) => parent.child,
            None => Some(self.root),
        };
        let skip = self.selection.saturating_sub(self.row) as usize;
        let mut items = self.tree.siblings(anchor).skip(skip);

        for row in FIRST_ITEM_ROW..self.geometry.lines {
            display.set_cursor(row, MARKER_COLUMN);
            if u16::from(row) == u16::from(self.row) + u16::from(FIRST_ITEM_ROW) {
                display.print_char(self.config.cursor_marker);
            }

            let Some(item) = items.next().and_then(|id| self.tree.get(id)) else {
                break;
            };
            display.set_cursor(row, NAME_COLUMN);
            display.print_str(self.name(item));
        }
    }

    /// Item owning the current level, `None` at the root
    fn parent(&self) -> Option<&'t MenuItem<'t>> {
        let current = self.tree.get(self.current)?;
        self.tree.get(current.parent?)
    }

    fn name<'n>(&'n self, item: &'n MenuItem<'t>) -> &'n str {
        item.name.unwrap_or(self.config.placeholder.as_str())
    }

    fn draw_header<D: MenuDisplay + ?Sized>(&self, display: &mut D, parent: Option<&MenuItem<'t>>) {
        display.set_cursor(HEADER_ROW, 0);
        for _ in 0..self.geometry.columns {
            display.print_char(self.config.header_fill);
        }

        match parent {
            None => match self.header {
                Some(header) => {
                    let column = self.centered(header.chars().count());
                    display.set_cursor(HEADER_ROW, column);
                    display.print_str(header);
                }
                None => {
                    display.set_cursor(HEADER_ROW, self.config.default_header_column);
                    display.print_str(&self.config.default_header);
                }
            },
            Some(parent) => {
                let title = self.name(parent);
                let column = self.centered(title.chars().count() + TITLE_PADDING);
                display.set_cursor(HEADER_ROW, column);
                display.print_char(' ');
                display.print_str(title);
                display.print_char(' ');
            }
        }
    }

    /// Column that centers `len` characters, or 0 when they do not fit
    fn centered(&self, len: usize) -> u8 {
        let columns = usize::from(self.geometry.columns);
        if columns > len {
            ((columns - len) / 2) as u8
        } else {
            0
        }
    }

    fn clear_body<D: MenuDisplay + ?Sized>(&self, display: &mut D) {
        for row in FIRST_ITEM_ROW..self.geometry.lines {
            display.set_cursor(row, 0);
            for _ in 0..self.geometry.columns {
                display.print_char(' ');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::mock::{example_tree, MockLcd};
    use crate::{ItemId, Menu, MenuItem, MenuTree, RenderConfig};

    fn numbered() -> [MenuItem<'static>; 5] {
        [
            MenuItem::new("One").with_next(ItemId(1)),
            MenuItem::new("Two").with_next(ItemId(2)).with_prev(ItemId(0)),
            MenuItem::new("Three").with_next(ItemId(3)).with_prev(ItemId(1)),
            MenuItem::new("Four").with_next(ItemId(4)).with_prev(ItemId(2)),
            MenuItem::new("Five").with_prev(ItemId(3)),
        ]
    }

    fn lines(lcd: &MockLcd) -> std::vec::Vec<std::string::String> {
        (0..lcd.lines as usize).map(|row| lcd.line(row)).collect()
    }

    #[test]
    fn test_root_view_with_default_header() {
        let mut lcd = MockLcd::new(4, 20);
        {
            let mut menu: Menu<'_, '_, MockLcd> = Menu::new();
            menu.init(Some(&mut lcd)).unwrap();
            menu.view_init(example_tree(), Some(ItemId(0)), None, None)
                .unwrap();
        }

        assert_eq!(
            lines(&lcd),
            ["------- MENU -------", ">Info", " Settings", " Action"]
        );
    }

    #[test]
    fn test_custom_header_centered() {
        let mut lcd = MockLcd::new(4, 20);
        {
            let mut menu: Menu<'_, '_, MockLcd> = Menu::new();
            menu.init(Some(&mut lcd)).unwrap();
            menu.view_init(example_tree(), Some(ItemId(0)), None, Some("Main"))
                .unwrap();
        }

        assert_eq!(lcd.line(0), "--------Main--------");
    }

    #[test]
    fn test_header_too_long_starts_at_first_column() {
        let mut lcd = MockLcd::new(2, 8);
        {
            let mut menu: Menu<'_, '_, MockLcd> = Menu::new();
            menu.init(Some(&mut lcd)).unwrap();
            menu.view_init(example_tree(), Some(ItemId(0)), None, Some("Configuration"))
                .unwrap();
        }

        assert_eq!(lcd.line(0), "Configur");
    }

    #[test]
    fn test_submenu_header_centers_parent_name() {
        let mut lcd = MockLcd::new(4, 20);
        {
            let mut menu: Menu<'_, '_, MockLcd> = Menu::new();
            menu.init(Some(&mut lcd)).unwrap();
            menu.view_init(example_tree(), Some(ItemId(0)), None, None)
                .unwrap();
            menu.next();
            menu.enter();
        }

        assert_eq!(lcd.line(0), "----- Settings -----");
        assert_eq!(&lcd.line(0)[5..15], " Settings ");
        assert_eq!(lines(&lcd)[1..], [">LCD Brightness", " Sound", ""]);
    }

    #[test]
    fn test_viewport_scrolls_past_last_row() {
        let items = numbered();
        let mut lcd = MockLcd::new(4, 20);
        {
            let mut menu: Menu<'_, '_, MockLcd> = Menu::new();
            menu.init(Some(&mut lcd)).unwrap();
            menu.view_init(MenuTree::new(&items), Some(ItemId(0)), None, None)
                .unwrap();
            for _ in 0..3 {
                menu.next();
            }
            assert_eq!((menu.selection(), menu.cursor_row()), (3, 2));
        }

        assert_eq!(lines(&lcd)[1..], [" Two", " Three", ">Four"]);
    }

    #[test]
    fn test_viewport_keeps_window_when_moving_back() {
        let items = numbered();
        let mut lcd = MockLcd::new(4, 20);
        {
            let mut menu: Menu<'_, '_, MockLcd> = Menu::new();
            menu.init(Some(&mut lcd)).unwrap();
            menu.view_init(MenuTree::new(&items), Some(ItemId(0)), None, None)
                .unwrap();
            for _ in 0..4 {
                menu.next();
            }
            menu.prev();
            assert_eq!((menu.selection(), menu.cursor_row()), (3, 1));
        }

        assert_eq!(lines(&lcd)[1..], [" Three", ">Four", " Five"]);
    }

    #[test]
    fn test_shorter_list_clears_stale_rows() {
        let mut lcd = MockLcd::new(4, 20);
        {
            let mut menu: Menu<'_, '_, MockLcd> = Menu::new();
            menu.init(Some(&mut lcd)).unwrap();
            menu.view_init(example_tree(), Some(ItemId(0)), None, None)
                .unwrap();
            menu.next();
            menu.next();
            menu.enter();
        }

        assert_eq!(
            lines(&lcd),
            ["------ Action ------", ">Start", " Stop", ""]
        );
    }

    #[test]
    fn test_missing_names_use_placeholder() {
        let items = [
            MenuItem::unnamed().with_next(ItemId(1)).with_child(ItemId(2)),
            MenuItem::new("Named").with_prev(ItemId(0)),
            MenuItem::new("Leaf").with_parent(ItemId(0)),
        ];
        let mut lcd = MockLcd::new(3, 20);
        {
            let mut menu: Menu<'_, '_, MockLcd> = Menu::new();
            menu.init(Some(&mut lcd)).unwrap();
            menu.view_init(MenuTree::new(&items), Some(ItemId(0)), None, None)
                .unwrap();
            assert_eq!(menu.display_mut().map(|d| d.line(1)), Some(">NO NAME".into()));
            menu.enter();
        }

        assert_eq!(lcd.line(0), "----- NO NAME ------");
    }

    #[test]
    fn test_render_config_glyphs() {
        let config = RenderConfig::default()
            .with_default_header("[TOP]", 0)
            .with_glyphs('=', '*');
        let mut lcd = MockLcd::new(3, 10);
        {
            let mut menu: Menu<'_, '_, MockLcd> = Menu::with_config(config);
            menu.init(Some(&mut lcd)).unwrap();
            menu.view_init(example_tree(), Some(ItemId(0)), None, None)
                .unwrap();
        }

        assert_eq!(lines(&lcd), ["[TOP]=====", "*Info", " Settings"]);
    }

    #[test]
    fn test_single_line_display_draws_header_only() {
        let mut lcd = MockLcd::new(1, 20);
        {
            let mut menu: Menu<'_, '_, MockLcd> = Menu::new();
            menu.init(Some(&mut lcd)).unwrap();
            menu.view_init(example_tree(), Some(ItemId(0)), None, None)
                .unwrap();
            menu.next();
            assert_eq!(menu.cursor_row(), 0);
        }

        assert_eq!(lines(&lcd), ["------- MENU -------"]);
    }
}
