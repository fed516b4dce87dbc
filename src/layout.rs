//! Layout pass: bars, buttons, splitters, panel stacks and containers
//!
//! The dock frame is a cross of two splitters inside a ring of side bars:
//!
//! ```text
//! +--------------------- top bar ----------------------+
//! |   |               top panel                    |   |
//! | l |------------------------------------------- | r |
//! | e | left  |        center          |  right    | i |
//! | f | panel |                        |  panel    | g |
//! | t |------------------------------------------- | h |
//! |   |              bottom panel                  | t |
//! +-------------------- bottom bar --------------------+
//! ```
//!
//! The vertical splitter splits top panel / middle / bottom panel; the
//! horizontal splitter splits the middle into left panel / center / right
//! panel. All functions here are pure geometry over the dock's parts.

use crate::edge::{Axis, Edge, Side, ViewMode};
use crate::geometry::Rect;
use crate::model::{SideBar, Splitter};
use crate::registry::Registry;

/// Index of the horizontal (left/center/right) splitter
pub const HORIZONTAL: usize = 0;
/// Index of the vertical (top/middle/bottom) splitter
pub const VERTICAL: usize = 1;

/// Splitter index responsible for an edge's panel
#[inline]
pub fn splitter_index(edge: Edge) -> usize {
    match edge.axis() {
        // Top/Bottom bars are horizontal, their panels stack vertically
        Axis::Horizontal => VERTICAL,
        Axis::Vertical => HORIZONTAL,
    }
}

/// Spacing metrics the layout needs
#[derive(Debug, Clone, Copy)]
pub struct LayoutMetrics {
    pub button_spacing: f32,
    pub handle_width: f32,
}

/// Preferred cross-axis thickness of a bar
///
/// Zero for hidden bars and for empty bars that are not highlighted.
pub(crate) fn bar_thickness(bar: &SideBar, registry: &Registry) -> f32 {
    if !bar.is_visible() {
        return 0.0;
    }
    let cross = bar.axis().cross();
    let content = Side::ALL
        .iter()
        .flat_map(|&side| bar.buttons(side).iter())
        .filter_map(|&b| registry.get(b))
        .filter(|r| r.button.is_visible())
        .map(|r| r.button.size_hint().along(cross))
        .fold(0.0_f32, f32::max);
    content.max(bar.width_hint())
}

/// Run the full layout for `geometry`, returning the central content rect
pub(crate) fn layout_dock(
    geometry: Rect,
    metrics: LayoutMetrics,
    bars: &mut [SideBar; 4],
    registry: &mut Registry,
    splitters: &mut [Splitter; 2],
) -> Rect {
    let t = |edge: Edge, bars: &[SideBar; 4], registry: &Registry| {
        bar_thickness(&bars[edge.index()], registry)
    };
    let top = t(Edge::Top, bars, registry);
    let bottom = t(Edge::Bottom, bars, registry);
    let left = t(Edge::Left, bars, registry);
    let right = t(Edge::Right, bars, registry);

    let side_height = (geometry.height - top - bottom).max(0.0);
    let bar_rects = [
        (Edge::Top, Rect::new(geometry.x, geometry.y, geometry.width, top)),
        (
            Edge::Bottom,
            Rect::new(geometry.x, geometry.bottom() - bottom, geometry.width, bottom),
        ),
        (
            Edge::Left,
            Rect::new(geometry.x, geometry.y + top, left, side_height),
        ),
        (
            Edge::Right,
            Rect::new(geometry.right() - right, geometry.y + top, right, side_height),
        ),
    ];
    for (edge, rect) in bar_rects {
        layout_bar(&mut bars[edge.index()], rect, metrics.button_spacing, registry);
    }

    let inner = Rect::new(
        geometry.x + left,
        geometry.y + top,
        (geometry.width - left - right).max(0.0),
        side_height,
    );

    // Vertical splitter: top panel / middle / bottom panel
    let vertical = &mut splitters[VERTICAL];
    vertical.set_extent(inner.height);
    vertical.set_slot_visible(0, registry.panel(Edge::Top).is_visible());
    vertical.set_slot_visible(1, registry.panel(Edge::Bottom).is_visible());
    let [top_h, mid_h, bottom_h] = vertical.resolved();
    let handle = vertical.handle_width();
    let top_gap = if vertical.is_slot_visible(0) { handle } else { 0.0 };

    let top_rect = Rect::new(inner.x, inner.y, inner.width, top_h);
    let middle = Rect::new(inner.x, inner.y + top_h + top_gap, inner.width, mid_h);
    let bottom_rect = Rect::new(inner.x, inner.bottom() - bottom_h, inner.width, bottom_h);

    // Horizontal splitter: left panel / center / right panel
    let horizontal = &mut splitters[HORIZONTAL];
    horizontal.set_extent(middle.width);
    horizontal.set_slot_visible(0, registry.panel(Edge::Left).is_visible());
    horizontal.set_slot_visible(1, registry.panel(Edge::Right).is_visible());
    let [left_w, center_w, right_w] = horizontal.resolved();
    let handle = horizontal.handle_width();
    let left_gap = if horizontal.is_slot_visible(0) { handle } else { 0.0 };

    let left_rect = Rect::new(middle.x, middle.y, left_w, middle.height);
    let central = Rect::new(middle.x + left_w + left_gap, middle.y, center_w, middle.height);
    let right_rect = Rect::new(middle.right() - right_w, middle.y, right_w, middle.height);

    for (edge, rect) in [
        (Edge::Top, top_rect),
        (Edge::Bottom, bottom_rect),
        (Edge::Left, left_rect),
        (Edge::Right, right_rect),
    ] {
        layout_panel(edge, rect, metrics.handle_width, registry);
    }

    layout_containers(registry);
    central
}

/// Place buttons: front group from the bar's start, back group from its end
fn layout_bar(bar: &mut SideBar, rect: Rect, spacing: f32, registry: &mut Registry) {
    let axis = bar.axis();
    let mut front_extent = 0.0;
    let mut back_extent = 0.0;

    for side in Side::ALL {
        let mut advance = 0.0_f32;
        for &button in bar.buttons(side) {
            let Some(record) = registry.get_mut(button) else {
                continue;
            };
            if !record.button.is_visible() {
                continue;
            }
            let size = record.button.size_hint();
            let length = size.along(axis);
            let start = match side {
                Side::Front => rect.start(axis) + advance,
                Side::Back => rect.end(axis) - advance - length,
            };
            let geometry = match axis {
                Axis::Horizontal => Rect::new(start, rect.y, size.width, size.height),
                Axis::Vertical => Rect::new(rect.x, start, size.width, size.height),
            };
            record.button.set_geometry(geometry);
            advance += length + spacing;
        }
        let used = (advance - spacing).max(0.0);
        match side {
            Side::Front => front_extent = used,
            Side::Back => back_extent = used,
        }
    }

    bar.set_layout(rect, front_extent, back_extent);
}

/// Split a panel between its stacks along the bar's axis
fn layout_panel(edge: Edge, rect: Rect, handle: f32, registry: &mut Registry) {
    let panel = registry.panel_mut(edge);
    let axis = edge.axis();
    let front_visible = panel.is_container_visible(Side::Front) && panel.is_visible();
    let back_visible = panel.is_container_visible(Side::Back) && panel.is_visible();

    let length = rect.extent(axis);
    let (front_len, back_len) = match (front_visible, back_visible) {
        (true, true) => {
            let half = ((length - handle) / 2.0).max(0.0);
            (half, half)
        }
        (true, false) => (length, 0.0),
        (false, true) => (0.0, length),
        (false, false) => (0.0, 0.0),
    };

    let span = |start: f32, len: f32| match axis {
        Axis::Horizontal => Rect::new(start, rect.y, len, rect.height),
        Axis::Vertical => Rect::new(rect.x, start, rect.width, len),
    };
    let front = span(rect.start(axis), front_len);
    let back = span(rect.end(axis) - back_len, back_len);
    panel.set_layout(rect, front, back);
}

/// Shown containers take their stack's geometry; pinned widgets follow them
fn layout_containers(registry: &mut Registry) {
    let mut shown = Vec::new();
    for edge in Edge::ALL {
        let panel = registry.panel(edge);
        if !panel.is_visible() {
            continue;
        }
        for side in Side::ALL {
            let stack = panel.stack(side);
            if let (true, Some(current)) = (stack.is_visible(), stack.current_widget()) {
                shown.push((current, stack.geometry()));
            }
        }
    }

    for (_, record) in registry.records_mut() {
        if let Some(&(_, geometry)) = shown.iter().find(|(c, _)| *c == record.container.id) {
            record.container.geometry = geometry;
        }
        if record.view_mode == ViewMode::Pinned && record.content.in_layout {
            record.content.geometry = record.container.geometry;
        }
    }
}
