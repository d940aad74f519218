use std::collections::HashMap;

use crate::rect::Rect;

/// Scroll offset of a container, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOffset {
    pub x: u16,
    pub y: u16,
}

impl ScrollOffset {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Geometry snapshot of one scrollable container.
///
/// `rect` is the border box on screen; the client size is the inner
/// content box, excluding borders and scrollbar tracks. The difference
/// between the two along an axis is that axis's scrollbar thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub rect: Rect,
    pub client_width: u16,
    pub client_height: u16,
    pub scroll: ScrollOffset,
}

impl Metrics {
    pub fn new(rect: Rect, client_width: u16, client_height: u16) -> Self {
        Self {
            rect,
            client_width,
            client_height,
            scroll: ScrollOffset::default(),
        }
    }

    pub fn with_scroll(mut self, x: u16, y: u16) -> Self {
        self.scroll = ScrollOffset::new(x, y);
        self
    }

    /// Thickness of the vertical scrollbar track on the right edge.
    pub fn scrollbar_width(&self) -> u16 {
        self.rect.width.saturating_sub(self.client_width)
    }

    /// Thickness of the horizontal scrollbar track on the bottom edge.
    pub fn scrollbar_height(&self) -> u16 {
        self.rect.height.saturating_sub(self.client_height)
    }
}

/// Host-side query surface for container geometry and focus.
///
/// The detector reads geometry through this trait at dispatch time, so the
/// host keeps ownership of layout and the classifier holds no references
/// into it.
pub trait ContainerView {
    /// Current geometry for a container, or `None` if it is not laid out.
    fn metrics(&self, id: &str) -> Option<Metrics>;

    /// Whether focus is on the container or one of its descendants.
    /// Only consulted when the keyboard signal is focus-gated.
    fn has_focus(&self, _id: &str) -> bool {
        false
    }
}

/// Map-backed [`ContainerView`] for tests and simple hosts.
#[derive(Debug, Default)]
pub struct StaticView {
    metrics: HashMap<String, Metrics>,
    focused: Option<String>,
}

impl StaticView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, metrics: Metrics) {
        self.metrics.insert(id.into(), metrics);
    }

    /// Update a container's scroll offset in place.
    pub fn set_scroll(&mut self, id: &str, x: u16, y: u16) {
        if let Some(metrics) = self.metrics.get_mut(id) {
            metrics.scroll = ScrollOffset::new(x, y);
        }
    }

    /// Mark a container as holding focus (or clear with `None`).
    pub fn focus(&mut self, id: Option<&str>) {
        self.focused = id.map(str::to_string);
    }
}

impl ContainerView for StaticView {
    fn metrics(&self, id: &str) -> Option<Metrics> {
        self.metrics.get(id).copied()
    }

    fn has_focus(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }
}
