//! Recording display and sample menu for engine tests

use std::string::String;
use std::vec::Vec;

use crate::display::{Capabilities, MenuDisplay};
use crate::tree::{ItemId, MenuItem, MenuTree};

/// Character grid that records what the engine draws
pub struct MockLcd {
    pub lines: u8,
    pub columns: u8,
    pub cells: Vec<Vec<char>>,
    pub cursor: (u8, u8),
    pub capabilities: Capabilities,
    pub init_calls: usize,
    /// Number of print calls
    pub writes: usize,
}

impl MockLcd {
    pub fn new(lines: u8, columns: u8) -> Self {
        Self {
            lines,
            columns,
            cells: vec![vec![' '; columns as usize]; lines as usize],
            cursor: (0, 0),
            capabilities: Capabilities::REQUIRED,
            init_calls: 0,
            writes: 0,
        }
    }

    /// Row contents with trailing blanks removed
    pub fn line(&self, row: usize) -> String {
        let line: String = self.cells[row].iter().collect();
        line.trim_end().into()
    }

    fn put(&mut self, c: char) {
        let (row, col) = (self.cursor.0 as usize, self.cursor.1 as usize);
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = c;
        }
        self.cursor.1 = self.cursor.1.saturating_add(1);
    }
}

impl MenuDisplay for MockLcd {
    fn screen_init(&mut self) {
        self.init_calls += 1;
        self.clear_screen();
    }

    fn clear_screen(&mut self) {
        for row in &mut self.cells {
            row.fill(' ');
        }
        self.cursor = (0, 0);
    }

    fn set_cursor(&mut self, row: u8, column: u8) {
        self.cursor = (row, column);
    }

    fn print_str(&mut self, text: &str) {
        self.writes += 1;
        for c in text.chars() {
            self.put(c);
        }
    }

    fn print_char(&mut self, c: char) {
        self.writes += 1;
        self.put(c);
    }

    fn lines(&self) -> u8 {
        self.lines
    }

    fn columns(&self) -> u8 {
        self.columns
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}

// Info | Settings > (LCD Brightness, Sound) | Action > (Start, Stop) | About
static EXAMPLE_ITEMS: [MenuItem<'static>; 8] = [
    MenuItem::new("Info").with_next(ItemId(1)),
    MenuItem::new("Settings")
        .with_next(ItemId(4))
        .with_prev(ItemId(0))
        .with_child(ItemId(2)),
    MenuItem::new("LCD Brightness")
        .with_next(ItemId(3))
        .with_parent(ItemId(1)),
    MenuItem::new("Sound")
        .with_prev(ItemId(2))
        .with_parent(ItemId(1)),
    MenuItem::new("Action")
        .with_next(ItemId(7))
        .with_prev(ItemId(1))
        .with_child(ItemId(5)),
    MenuItem::new("Start")
        .with_next(ItemId(6))
        .with_parent(ItemId(4)),
    MenuItem::new("Stop").with_prev(ItemId(5)).with_parent(ItemId(4)),
    MenuItem::new("About").with_prev(ItemId(4)),
];

pub fn example_tree() -> MenuTree<'static> {
    MenuTree::new(&EXAMPLE_ITEMS)
}
