//! Documentation view state - scroll position, viewport bounds and anchors.
//!
//! Shared by the handler layer (scroll and jump commands) and the TUI layer,
//! which reports line counts and heading rows after laying out the page.

use crate::toc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocViewState {
    /// First visible line
    pub offset: usize,
    /// Total laid-out lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
    /// Row of each section heading, in section order (set during render)
    anchor_rows: Vec<usize>,
    /// Highlighted sidebar entry
    pub toc_selected: usize,
    /// Jump requested before the layout was known
    pending_anchor: Option<usize>,
    /// Rows kept above a heading after a jump
    margin_rows: usize,
}

impl DocViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top with nothing selected.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.toc_selected = 0;
        self.pending_anchor = None;
    }

    pub fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.visible_lines.saturating_sub(2).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.visible_lines.saturating_sub(2).max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.toc_selected = (self.toc_selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.toc_selected = self.toc_selected.saturating_sub(1);
    }

    /// Scroll so section `index` sits `margin_rows` below the top.
    ///
    /// Applied immediately when the layout is known, otherwise on the next
    /// [`set_layout`](Self::set_layout).
    pub fn jump_to(&mut self, index: usize, margin_rows: usize) {
        self.toc_selected = index;
        self.margin_rows = margin_rows;
        match self.anchor_rows.get(index) {
            Some(&row) => {
                self.offset = toc::scroll_target(row, margin_rows).min(self.max_offset());
                self.pending_anchor = None;
            }
            None => self.pending_anchor = Some(index),
        }
    }

    /// Record the result of laying out the page.
    pub fn set_layout(&mut self, total_lines: usize, visible_lines: usize, anchor_rows: Vec<usize>) {
        self.total_lines = total_lines;
        self.visible_lines = visible_lines;
        self.anchor_rows = anchor_rows;
        if let Some(index) = self.pending_anchor.take() {
            if let Some(&row) = self.anchor_rows.get(index) {
                self.offset = toc::scroll_target(row, self.margin_rows);
            }
        }
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn anchor_rows(&self) -> &[usize] {
        &self.anchor_rows
    }

    /// Section whose heading is at or above the top of the view.
    pub fn current_section(&self) -> Option<usize> {
        let top = self.offset + self.margin_rows;
        self.anchor_rows.iter().rposition(|&row| row <= top)
    }
}
