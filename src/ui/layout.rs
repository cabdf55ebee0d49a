use ratatui::layout::Rect;

/// Splits the screen into the fixed regions every view shares:
/// a three-line header, the body, a three-line status area, and a
/// one-line footer for key hints.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 1.min(area.height.saturating_sub(header_height));
    let status_height = 3.min(
        area.height
            .saturating_sub(header_height + footer_height),
    );

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let status = Rect {
        x: area.x,
        y: footer.y.saturating_sub(status_height),
        width: area.width,
        height: status_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + status_height + footer_height),
    };
    (header, body, status, footer)
}
