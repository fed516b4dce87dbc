//! Side bar: the strip of toggle buttons docked to one edge
//!
//! Buttons are split into a front group, laid out from the edge's start
//! (left or top), and a back group laid out from its end, with a stretch
//! between them. The bar only tracks membership and order; everything that
//! depends on button or registry state is asked of the [`BarHost`].

use crate::edge::{Axis, Edge, Orientation, Side};
use crate::geometry::Rect;

use super::ButtonId;

/// Callbacks a side bar needs from its owning dock
pub trait BarHost {
    /// Checked and pinned
    fn dock_visible(&self, button: ButtonId) -> bool;

    fn is_enabled(&self, button: ButtonId) -> bool;

    /// Uncheck a sibling, with the usual toggle side effects
    fn uncheck(&mut self, button: ButtonId);

    fn show_button(&mut self, button: ButtonId);

    fn apply_orientation(&mut self, button: ButtonId, orientation: Orientation);

    /// A button landed at `index` of `side`; attach its container to the panel
    fn button_added(&mut self, edge: Edge, side: Side, index: usize, button: ButtonId);

    /// A button left `side`; detach its container from the panel
    fn button_removed(&mut self, edge: Edge, side: Side, button: ButtonId);
}

#[derive(Debug, Clone)]
pub struct SideBar {
    edge: Edge,
    orientation: Orientation,
    front: Vec<ButtonId>,
    back: Vec<ButtonId>,
    highlight: bool,
    width_hint: f32,
    visible: bool,
    enabled: bool,
    geometry: Rect,
    front_extent: f32,
    back_extent: f32,
}

impl SideBar {
    pub fn new(edge: Edge) -> Self {
        Self {
            edge,
            orientation: Orientation::for_edge(edge),
            front: Vec::new(),
            back: Vec::new(),
            highlight: false,
            width_hint: 0.0,
            visible: true,
            enabled: true,
            geometry: Rect::default(),
            front_extent: 0.0,
            back_extent: 0.0,
        }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Orientation imposed on every button in this bar
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Primary layout axis
    pub fn axis(&self) -> Axis {
        self.edge.axis()
    }

    pub fn buttons(&self, side: Side) -> &[ButtonId] {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }

    fn buttons_mut(&mut self, side: Side) -> &mut Vec<ButtonId> {
        match side {
            Side::Front => &mut self.front,
            Side::Back => &mut self.back,
        }
    }

    pub fn count(&self, side: Side) -> usize {
        self.buttons(side).len()
    }

    pub fn total_count(&self) -> usize {
        self.front.len() + self.back.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    pub fn index_of(&self, side: Side, button: ButtonId) -> Option<usize> {
        self.buttons(side).iter().position(|&b| b == button)
    }

    pub fn contains(&self, button: ButtonId) -> bool {
        self.front.contains(&button) || self.back.contains(&button)
    }

    /// Insert `button` into `side` at `index` (clamped to the group size).
    ///
    /// A button that arrives dock-visible unchecks its dock-visible siblings
    /// first. Returns the index the button actually landed at.
    pub fn insert_button(
        &mut self,
        side: Side,
        index: usize,
        button: ButtonId,
        host: &mut impl BarHost,
    ) -> usize {
        debug_assert!(!self.contains(button), "button inserted twice");

        if host.dock_visible(button) {
            self.uncheck_siblings(side, button, host);
        }

        let buttons = self.buttons_mut(side);
        let index = index.min(buttons.len());
        buttons.insert(index, button);

        host.show_button(button);
        host.apply_orientation(button, self.orientation);
        host.button_added(self.edge, side, index, button);

        tracing::trace!(edge = ?self.edge, ?side, index, ?button, "bar button inserted");
        index
    }

    /// Remove `button` from `side`. Does nothing if it is not there.
    ///
    /// The button itself is not destroyed.
    pub fn remove_button(&mut self, side: Side, button: ButtonId, host: &mut impl BarHost) {
        let Some(index) = self.index_of(side, button) else {
            return;
        };
        self.buttons_mut(side).remove(index);
        host.button_removed(self.edge, side, button);

        tracing::trace!(edge = ?self.edge, ?side, index, ?button, "bar button removed");
    }

    pub fn button_toggled(&self, side: Side, button: ButtonId, host: &mut impl BarHost) {
        if host.dock_visible(button) {
            self.uncheck_siblings(side, button, host);
        }
    }

    pub fn button_view_mode_changed(&self, side: Side, button: ButtonId, host: &mut impl BarHost) {
        if host.dock_visible(button) {
            self.uncheck_siblings(side, button, host);
        }
    }

    /// Disabled buttons are held in place by a drag and are left alone
    fn uncheck_siblings(&self, side: Side, button: ButtonId, host: &mut impl BarHost) {
        for &cur in self.buttons(side) {
            if cur != button && host.is_enabled(cur) && host.dock_visible(cur) {
                host.uncheck(cur);
            }
        }
    }

    pub fn highlight(&self) -> bool {
        self.highlight
    }

    /// Cross-axis size the bar grows to while highlighted
    pub fn width_hint(&self) -> f32 {
        if self.highlight {
            self.width_hint
        } else {
            0.0
        }
    }

    pub fn set_highlight(&mut self, highlight: bool, width_hint: f32) {
        self.highlight = highlight;
        self.width_hint = width_hint;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Geometry assigned by the last layout pass
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Region occupied by one button group
    pub fn layout_geometry(&self, side: Side) -> Rect {
        let g = self.geometry;
        match (self.axis(), side) {
            (Axis::Horizontal, Side::Front) => Rect::new(g.x, g.y, self.front_extent, g.height),
            (Axis::Horizontal, Side::Back) => Rect::new(
                g.right() - self.back_extent,
                g.y,
                self.back_extent,
                g.height,
            ),
            (Axis::Vertical, Side::Front) => Rect::new(g.x, g.y, g.width, self.front_extent),
            (Axis::Vertical, Side::Back) => Rect::new(
                g.x,
                g.bottom() - self.back_extent,
                g.width,
                self.back_extent,
            ),
        }
    }

    pub(crate) fn set_layout(&mut self, geometry: Rect, front_extent: f32, back_extent: f32) {
        self.geometry = geometry;
        self.front_extent = front_extent;
        self.back_extent = back_extent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    /// Minimal host recording calls
    #[derive(Default)]
    struct RecordingHost {
        checked: HashSet<ButtonId>,
        disabled: HashSet<ButtonId>,
        shown: Vec<ButtonId>,
        orientations: HashMap<ButtonId, Orientation>,
        added: Vec<(Edge, Side, usize, ButtonId)>,
        removed: Vec<(Edge, Side, ButtonId)>,
    }

    impl BarHost for RecordingHost {
        fn dock_visible(&self, button: ButtonId) -> bool {
            self.checked.contains(&button)
        }
        fn is_enabled(&self, button: ButtonId) -> bool {
            !self.disabled.contains(&button)
        }
        fn uncheck(&mut self, button: ButtonId) {
            self.checked.remove(&button);
        }
        fn show_button(&mut self, button: ButtonId) {
            self.shown.push(button);
        }
        fn apply_orientation(&mut self, button: ButtonId, orientation: Orientation) {
            self.orientations.insert(button, orientation);
        }
        fn button_added(&mut self, edge: Edge, side: Side, index: usize, button: ButtonId) {
            self.added.push((edge, side, index, button));
        }
        fn button_removed(&mut self, edge: Edge, side: Side, button: ButtonId) {
            self.removed.push((edge, side, button));
        }
    }

    #[test]
    fn test_insert_clamps_index_and_notifies() {
        let mut bar = SideBar::new(Edge::Left);
        let mut host = RecordingHost::default();

        assert_eq!(bar.insert_button(Side::Front, 5, ButtonId(1), &mut host), 0);
        assert_eq!(bar.insert_button(Side::Front, 0, ButtonId(2), &mut host), 0);
        assert_eq!(bar.insert_button(Side::Front, 99, ButtonId(3), &mut host), 2);

        assert_eq!(bar.buttons(Side::Front), &[ButtonId(2), ButtonId(1), ButtonId(3)]);
        assert_eq!(host.added.len(), 3);
        assert_eq!(host.added[2], (Edge::Left, Side::Front, 2, ButtonId(3)));
        assert_eq!(host.orientations[&ButtonId(1)], Orientation::BottomToTop);
        assert_eq!(host.shown, vec![ButtonId(1), ButtonId(2), ButtonId(3)]);
    }

    #[test]
    fn test_insert_dock_visible_unchecks_same_group_only() {
        let mut bar = SideBar::new(Edge::Top);
        let mut host = RecordingHost::default();
        host.checked.extend([ButtonId(1), ButtonId(2), ButtonId(3)]);

        bar.insert_button(Side::Front, 0, ButtonId(1), &mut host);
        bar.insert_button(Side::Back, 0, ButtonId(2), &mut host);
        bar.insert_button(Side::Front, 1, ButtonId(3), &mut host);

        assert!(!host.checked.contains(&ButtonId(1)));
        assert!(host.checked.contains(&ButtonId(2)), "back group untouched");
        assert!(host.checked.contains(&ButtonId(3)));
    }

    #[test]
    fn test_exclusivity_skips_disabled_buttons() {
        let mut bar = SideBar::new(Edge::Right);
        let mut host = RecordingHost::default();
        bar.insert_button(Side::Front, 0, ButtonId(1), &mut host);
        bar.insert_button(Side::Front, 1, ButtonId(2), &mut host);

        host.checked.extend([ButtonId(1), ButtonId(2)]);
        host.disabled.insert(ButtonId(1));
        bar.button_toggled(Side::Front, ButtonId(2), &mut host);

        assert!(host.checked.contains(&ButtonId(1)));
    }

    #[test]
    fn test_remove_missing_button_is_noop() {
        let mut bar = SideBar::new(Edge::Bottom);
        let mut host = RecordingHost::default();
        bar.insert_button(Side::Back, 0, ButtonId(1), &mut host);

        bar.remove_button(Side::Front, ButtonId(1), &mut host);
        assert!(host.removed.is_empty());
        assert_eq!(bar.count(Side::Back), 1);

        bar.remove_button(Side::Back, ButtonId(1), &mut host);
        assert_eq!(host.removed, vec![(Edge::Bottom, Side::Back, ButtonId(1))]);
        assert!(bar.is_empty());
    }

    #[test]
    fn test_layout_geometry_regions() {
        let mut bar = SideBar::new(Edge::Bottom);
        bar.set_layout(Rect::new(0.0, 500.0, 800.0, 24.0), 100.0, 60.0);
        assert_eq!(bar.layout_geometry(Side::Front), Rect::new(0.0, 500.0, 100.0, 24.0));
        assert_eq!(bar.layout_geometry(Side::Back), Rect::new(740.0, 500.0, 60.0, 24.0));
    }
}
