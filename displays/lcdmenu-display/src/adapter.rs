//! Cursor adapter over a row/column backend

use lcdmenu_core::MenuDisplay;

use crate::backend::{DisplayError, TextBackend};

/// Drives a [`TextBackend`] through the [`MenuDisplay`] interface
///
/// The adapter keeps the write cursor the menu engine expects and turns
/// each print into a positioned draw. `MenuDisplay` has no error channel,
/// so the first backend error is latched and can be collected with
/// [`CursorAdapter::take_error`] after a redraw.
pub struct CursorAdapter<B: TextBackend> {
    backend: B,
    row: u8,
    col: u8,
    error: Option<DisplayError>,
}

impl<B: TextBackend> CursorAdapter<B> {
    /// Wrap `backend` with the cursor at the top-left corner
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            row: 0,
            col: 0,
            error: None,
        }
    }

    /// Push buffered content to the display and report any latched error
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        let latched = self.take_error();
        self.backend.flush()?;
        latched.map_or(Ok(()), Err)
    }

    /// Take the first error seen since the last call
    pub fn take_error(&mut self) -> Option<DisplayError> {
        self.error.take()
    }

    /// Borrow the wrapped backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutably borrow the wrapped backend
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Unwrap the backend
    pub fn into_inner(self) -> B {
        self.backend
    }

    fn record(&mut self, result: Result<(), DisplayError>) {
        if let Err(err) = result {
            #[cfg(feature = "defmt")]
            defmt::warn!("display backend error: {}", err);
            if self.error.is_none() {
                self.error = Some(err);
            }
        }
    }

    /// Whether the cursor still lies on the display
    fn cursor_visible(&self) -> bool {
        let (cols, rows) = self.backend.dimensions();
        self.row < rows && self.col < cols
    }
}

impl<B: TextBackend> MenuDisplay for CursorAdapter<B> {
    fn screen_init(&mut self) {
        self.clear_screen();
    }

    fn clear_screen(&mut self) {
        let result = self.backend.clear();
        self.record(result);
        self.row = 0;
        self.col = 0;
    }

    fn set_cursor(&mut self, row: u8, column: u8) {
        self.row = row;
        self.col = column;
    }

    fn print_str(&mut self, text: &str) {
        if self.cursor_visible() {
            let result = self.backend.draw_text(self.row, self.col, text);
            self.record(result);
        }
        let advance = text.chars().count().min(u8::MAX as usize) as u8;
        self.col = self.col.saturating_add(advance);
    }

    fn print_char(&mut self, c: char) {
        if self.cursor_visible() {
            let result = self.backend.draw_char(self.row, self.col, c);
            self.record(result);
        }
        self.col = self.col.saturating_add(1);
    }

    fn lines(&self) -> u8 {
        self.backend.dimensions().1
    }

    fn columns(&self) -> u8 {
        self.backend.dimensions().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TextGrid;
    use lcdmenu_core::{ItemId, Menu, MenuItem, MenuTree};
    use std::string::String;
    use std::vec::Vec;

    /// Backend that logs every draw call
    #[derive(Default)]
    struct Recorder {
        draws: Vec<(u8, u8, String)>,
        clears: usize,
        flushes: usize,
        fail: Option<DisplayError>,
    }

    impl TextBackend for Recorder {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.clears += 1;
            Ok(())
        }

        fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
            if let Some(err) = self.fail {
                return Err(err);
            }
            self.draws.push((row, col, text.into()));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.flushes += 1;
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            (16, 2)
        }
    }

    #[test]
    fn test_prints_follow_cursor() {
        let mut adapter = CursorAdapter::new(Recorder::default());
        adapter.set_cursor(1, 3);
        adapter.print_str("ab");
        adapter.print_char('c');

        assert_eq!(
            adapter.backend().draws,
            [(1, 3, "ab".into()), (1, 5, "c".into())]
        );
    }

    #[test]
    fn test_offscreen_prints_skipped() {
        let mut adapter = CursorAdapter::new(Recorder::default());
        adapter.set_cursor(2, 0);
        adapter.print_str("below");
        adapter.set_cursor(0, 16);
        adapter.print_char('x');

        assert!(adapter.backend().draws.is_empty());
        assert_eq!(adapter.take_error(), None);
    }

    #[test]
    fn test_geometry_from_dimensions() {
        let adapter = CursorAdapter::new(Recorder::default());
        assert_eq!((adapter.lines(), adapter.columns()), (2, 16));
    }

    #[test]
    fn test_error_latched_until_flush() {
        let mut adapter = CursorAdapter::new(Recorder {
            fail: Some(DisplayError::Communication),
            ..Default::default()
        });
        adapter.print_str("lost");
        adapter.backend_mut().fail = Some(DisplayError::InvalidCoordinates);
        adapter.print_str("also lost");

        assert_eq!(adapter.flush(), Err(DisplayError::Communication));
        assert_eq!(adapter.backend().flushes, 1);
        assert_eq!(adapter.flush(), Ok(()));
    }

    #[test]
    fn test_menu_through_adapter_matches_direct_grid() {
        let items = [
            MenuItem::new("Start").with_next(ItemId(1)),
            MenuItem::new("Stop").with_prev(ItemId(0)),
        ];
        let tree = MenuTree::new(&items);

        let mut direct: TextGrid<3, 16> = TextGrid::new();
        let mut adapted = CursorAdapter::new(TextGrid::<3, 16>::new());
        {
            let mut menu: Menu<'_, '_, TextGrid<3, 16>> = Menu::new();
            menu.init(Some(&mut direct)).unwrap();
            menu.view_init(tree, Some(ItemId(0)), None, Some("Pump"))
                .unwrap();
            menu.next();
        }
        {
            let mut menu: Menu<'_, '_, CursorAdapter<TextGrid<3, 16>>> = Menu::new();
            menu.init(Some(&mut adapted)).unwrap();
            menu.view_init(tree, Some(ItemId(0)), None, Some("Pump"))
                .unwrap();
            menu.next();
        }

        assert_eq!(adapted.flush(), Ok(()));
        let grid = adapted.into_inner();
        for row in 0..3 {
            assert_eq!(grid.line(row), direct.line(row));
        }
        assert_eq!(grid.line(0), "------Pump------");
        assert_eq!(grid.line(2).trim_end(), ">Stop");
    }

    #[test]
    fn test_dyn_display_binding() {
        let mut adapter = CursorAdapter::new(Recorder::default());
        let display: &mut (dyn MenuDisplay + 'static) = &mut adapter;
        let mut menu: Menu<'_, 'static, dyn MenuDisplay> = Menu::new();

        assert_eq!(menu.init(Some(display)), Ok(()));
        assert_eq!(adapter.backend().clears, 1);
    }
}
