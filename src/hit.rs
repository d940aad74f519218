use crate::metrics::Metrics;

/// Replacement scrollbar hit-test predicate.
///
/// The built-in edge-margin test assumes scrollbar tracks render flush to
/// the trailing edges of the container. Hosts with overlay or custom-drawn
/// scrollbars can substitute their own geometry via
/// [`Config::hit_test`](crate::Config::hit_test).
pub type HitTest = fn(&Metrics, u16, u16) -> bool;

/// Whether a point lands on the vertical scrollbar track.
///
/// The track occupies the trailing `rect.width - client_width` cells of
/// the right edge. A container without vertical overflow chrome reports
/// zero thickness and never matches.
pub fn on_vertical_scrollbar(metrics: &Metrics, x: u16, y: u16) -> bool {
    let thickness = metrics.scrollbar_width();
    if thickness == 0 || !metrics.rect.contains(x, y) {
        return false;
    }
    x >= metrics.rect.right().saturating_sub(thickness)
}

/// Whether a point lands on the horizontal scrollbar track along the
/// bottom edge.
pub fn on_horizontal_scrollbar(metrics: &Metrics, x: u16, y: u16) -> bool {
    let thickness = metrics.scrollbar_height();
    if thickness == 0 || !metrics.rect.contains(x, y) {
        return false;
    }
    y >= metrics.rect.bottom().saturating_sub(thickness)
}

/// Whether a point lands on either scrollbar track.
///
/// Best-effort heuristic: it misreads the corner where the two tracks
/// meet (a resize handle hits both bands) and misses scrollbars that do
/// not occupy the trailing edge. Known limitation of edge-margin math.
pub fn on_scrollbar(metrics: &Metrics, x: u16, y: u16) -> bool {
    on_vertical_scrollbar(metrics, x, y) || on_horizontal_scrollbar(metrics, x, y)
}
