//! Layout helpers shared by all screens.

use ratatui::layout::{Constraint, Layout, Rect};

/// Split an area into header, content, and footer bands.
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Center a fixed-size popup inside an area, clamped to fit.
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_heights() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, content, footer) = create_standard_layout(area, 5, 2);
        assert_eq!(header.height, 5);
        assert_eq!(footer.height, 2);
        assert_eq!(content.height, 24 - 5 - 2);
    }

    #[test]
    fn test_centered_popup_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered_popup(area, 60, 40);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }
}
