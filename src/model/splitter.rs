//! Three-slot splitter: edge panel, center, opposite edge panel
//!
//! Only the two edge slots store a size. The center always takes whatever is
//! left of the extent, so resizing an edge trades space with the center and
//! never with the opposite edge.

use crate::edge::{Axis, Edge};

#[derive(Debug, Clone)]
pub struct Splitter {
    axis: Axis,
    sizes: [f32; 2],
    visible: [bool; 2],
    extent: f32,
    handle_width: f32,
    min_center: f32,
    /// Sizes to restore when a maximized slot is toggled back
    maximized: [Option<[f32; 2]>; 2],
}

/// Slot index of an edge inside its splitter (0 = leading, 1 = trailing)
#[inline]
pub fn slot_of(edge: Edge) -> usize {
    if edge.is_leading() {
        0
    } else {
        1
    }
}

impl Splitter {
    pub fn new(axis: Axis, sizes: [f32; 2], handle_width: f32, min_center: f32) -> Self {
        Self {
            axis,
            sizes,
            visible: [false; 2],
            extent: 0.0,
            handle_width,
            min_center,
            maximized: [None; 2],
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn extent(&self) -> f32 {
        self.extent
    }

    pub fn handle_width(&self) -> f32 {
        self.handle_width
    }

    pub(crate) fn set_extent(&mut self, extent: f32) {
        self.extent = extent.max(0.0);
    }

    pub(crate) fn set_slot_visible(&mut self, slot: usize, visible: bool) {
        self.visible[slot] = visible;
    }

    pub fn is_slot_visible(&self, slot: usize) -> bool {
        self.visible[slot]
    }

    /// Stored size of an edge slot, whether or not it is shown
    pub fn edge_size(&self, slot: usize) -> f32 {
        self.sizes[slot]
    }

    pub fn is_maximized(&self, slot: usize) -> bool {
        self.maximized[slot].is_some()
    }

    /// Size `slot` returns to when a maximize is toggled back
    pub fn restore_size(&self, slot: usize) -> Option<f32> {
        self.maximized[slot].map(|saved| saved[slot])
    }

    fn handles(&self) -> f32 {
        self.visible.iter().filter(|&&v| v).count() as f32 * self.handle_width
    }

    /// Largest size `slot` can take while leaving the minimum center extent
    pub fn max_edge_size(&self, slot: usize) -> f32 {
        let other = 1 - slot;
        let other_size = if self.visible[other] {
            self.sizes[other] + self.handle_width
        } else {
            0.0
        };
        (self.extent - self.min_center - self.handle_width - other_size).max(0.0)
    }

    /// Resize one edge slot, trading the difference with the center.
    ///
    /// Returns the delta actually applied.
    pub fn set_edge_size(&mut self, slot: usize, size: f32) -> f32 {
        let target = size.clamp(0.0, self.max_edge_size(slot));
        let delta = target - self.sizes[slot];
        self.sizes[slot] += delta;
        delta
    }

    /// Toggle between the remembered split and an edge slot that consumes
    /// all the room the center can give up.
    pub fn toggle_maximize(&mut self, slot: usize) {
        if let Some(saved) = self.maximized[slot].take() {
            self.sizes = saved;
            tracing::debug!(axis = ?self.axis, slot, "splitter slot restored");
            return;
        }
        let saved = self.sizes;
        self.sizes[slot] = self.max_edge_size(slot);
        self.maximized[slot] = Some(saved);
        tracing::debug!(axis = ?self.axis, slot, size = self.sizes[slot], "splitter slot maximized");
    }

    /// Resolved `[leading, center, trailing]` extents for layout.
    ///
    /// Hidden slots resolve to zero. When the stored sizes do not fit, the
    /// edge slots shrink proportionally and the center collapses to zero.
    pub fn resolved(&self) -> [f32; 3] {
        let mut first = if self.visible[0] { self.sizes[0] } else { 0.0 };
        let mut last = if self.visible[1] { self.sizes[1] } else { 0.0 };
        let room = (self.extent - self.handles()).max(0.0);

        let edges = first + last;
        if edges > room && edges > 0.0 {
            let scale = room / edges;
            first *= scale;
            last *= scale;
        }
        let center = (room - first - last).max(0.0);
        [first, center, last]
    }

    /// Replace the stored edge sizes from a `[leading, center, trailing]`
    /// triple. The center entry is ignored since it is derived.
    pub fn set_resolved(&mut self, sizes: [f32; 3]) {
        self.sizes = [sizes[0].max(0.0), sizes[2].max(0.0)];
        let first = self.sizes[0];
        self.set_edge_size(0, first);
        let last = self.sizes[1];
        self.set_edge_size(1, last);
    }
}
