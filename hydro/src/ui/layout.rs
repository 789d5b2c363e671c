//! Screen layout calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the main screen
pub struct AppLayout {
    pub title_area: Rect,
    pub monster_area: Rect,
    pub sidebar_area: Rect,
    pub menu_area: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Split the terminal: title, freak/stats body, menu, status line
    pub fn calculate(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        Self {
            title_area: rows[0],
            monster_area: body[0],
            sidebar_area: body[1],
            menu_area: rows[2],
            status_bar: rows[3],
        }
    }
}

/// A rectangle of at most `width` x `height`, centered in `area`
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
