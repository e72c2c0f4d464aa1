//! Screen geometry
//!
//! Shared by the render pass and by mouse hit-testing in the app, so a
//! click lands on exactly what was drawn.

use ratatui::layout::{Constraint, Layout, Position, Rect};

/// Rows per dropdown entry: title, creator line, date line
pub const ITEM_HEIGHT: u16 = 3;

/// Preferred dropdown width
pub const DROPDOWN_WIDTH: u16 = 52;

/// Width of the bell anchor in the header
pub const BELL_WIDTH: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Split the terminal into header, content and status bar
pub fn screen(area: Rect) -> ScreenLayout {
    let [header, content, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenLayout {
        header,
        content,
        status,
    }
}

/// Bell button at the right end of the tab row
pub fn bell_anchor(header: Rect) -> Rect {
    let width = BELL_WIDTH.min(header.width);
    Rect {
        x: header.right().saturating_sub(width + 1).max(header.x),
        y: header.y + 1,
        width,
        height: 1.min(header.height),
    }
}

/// Dropdown panel under the bell, sized for `entries` items
pub fn dropdown(anchor: Rect, entries: usize, area: Rect) -> Rect {
    let rows = entries.max(1) as u16 * ITEM_HEIGHT;
    // borders + summary line + footer line
    let wanted = rows + 4;
    let y = anchor.bottom();
    let height = wanted.min(area.bottom().saturating_sub(y));
    let width = DROPDOWN_WIDTH.min(area.width);
    let x = anchor.right().saturating_sub(width).max(area.x);

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// First row of the entry list inside the dropdown
fn items_top(dropdown: Rect) -> u16 {
    dropdown.y + 2
}

/// Area of the `index`th entry, if it fits
pub fn dropdown_item(dropdown: Rect, index: usize) -> Option<Rect> {
    let y = items_top(dropdown) + index as u16 * ITEM_HEIGHT;
    // Leave room for footer + bottom border
    if y + ITEM_HEIGHT > dropdown.bottom().saturating_sub(2) {
        return None;
    }
    Some(Rect {
        x: dropdown.x + 1,
        y,
        width: dropdown.width.saturating_sub(2),
        height: ITEM_HEIGHT,
    })
}

/// Which entry a pointer position falls on
pub fn dropdown_item_at(dropdown: Rect, entries: usize, position: Position) -> Option<usize> {
    (0..entries).find(|i| {
        dropdown_item(dropdown, *i)
            .map(|r| r.contains(position))
            .unwrap_or(false)
    })
}

/// Rect of width/height centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}
