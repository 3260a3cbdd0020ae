//! Navigation methods and the cursor/scroll invariant

use super::state::ViewState;

/// Clamps a cursor and scroll offset for a list of `len` rows shown in a
/// window of `height` rows.
///
/// The cursor lands in `[0, len - 1]` (0 when empty) and the window is
/// moved just enough to contain it, never past the end of the list.
pub fn clamp_viewport(cursor: usize, scroll: usize, len: usize, height: usize) -> (usize, usize) {
    if len == 0 {
        return (0, 0);
    }
    let height = height.max(1);
    let cursor = cursor.min(len - 1);
    let mut scroll = scroll.min(len.saturating_sub(height));
    if cursor < scroll {
        scroll = cursor;
    } else if cursor >= scroll + height {
        scroll = cursor + 1 - height;
    }
    (cursor, scroll)
}

impl ViewState {
    /// Re-establishes the cursor/scroll invariant.
    pub fn clamp_viewport(&mut self) {
        let (cursor, scroll) = clamp_viewport(
            self.cursor,
            self.scroll_offset,
            self.visible_rows.len(),
            self.viewport_height(),
        );
        self.cursor = cursor;
        self.scroll_offset = scroll;
    }

    /// Moves the selection by `delta` rows.
    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor = self.cursor.saturating_add_signed(delta);
        self.clamp_viewport();
    }

    /// Moves selection up by one page.
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.viewport_height());
        self.clamp_viewport();
    }

    /// Moves selection down by one page.
    pub fn page_down(&mut self) {
        self.cursor = self.cursor.saturating_add(self.viewport_height());
        self.clamp_viewport();
    }

    /// Jumps selection to the first process.
    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.clamp_viewport();
    }

    /// Jumps selection to the last process.
    pub fn jump_to_end(&mut self) {
        self.cursor = self.visible_rows.len().saturating_sub(1);
        self.clamp_viewport();
    }
}
