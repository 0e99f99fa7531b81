//! Screen layout definitions for the TUI
//!
//! The header height follows the navigation bar's pixel height for the
//! current layout mode; the body is split into the table of contents and
//! the reading column on the documentation page.

use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the table of contents column gets.
pub const SIDEBAR_MAX_WIDTH: u16 = 34;

/// Width of the compact navigation drawer (250px at 10px per column).
pub const DRAWER_WIDTH: u16 = 25;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Fixed navigation bar
    pub header: Rect,
    /// Page content
    pub body: Rect,
    /// One-row key hints and auth status
    pub status: Rect,
}

/// Split the screen into header, body and status rows.
pub fn create(area: Rect, header_rows: u16) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(header_rows),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DocAreas {
    pub sidebar: Rect,
    pub main: Rect,
}

/// Sidebar takes a third of the body, capped at [`SIDEBAR_MAX_WIDTH`].
pub fn documentation(body: Rect) -> DocAreas {
    let sidebar_width = (body.width / 3).min(SIDEBAR_MAX_WIDTH);
    let chunks =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(1)]).split(body);

    DocAreas {
        sidebar: chunks[0],
        main: chunks[1],
    }
}

/// Full-height panel pinned to the right edge of `area`.
pub fn drawer(area: Rect) -> Rect {
    let width = DRAWER_WIDTH.min(area.width);
    Rect {
        x: area.x + area.width - width,
        width,
        ..area
    }
}
