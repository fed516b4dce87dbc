//! Panel: the content area behind a side bar
//!
//! Each edge has one panel holding two stacks (front and back) that mirror the
//! side bar's button groups one-to-one. Only the current container of a stack
//! is shown. The panel hides itself when both stacks are hidden.

use crate::edge::{Edge, Side};
use crate::geometry::Rect;

use super::ContainerId;

/// A stack of containers showing at most one at a time
#[derive(Debug, Clone, Default)]
pub struct Stack {
    items: Vec<ContainerId>,
    current: Option<usize>,
    visible: bool,
    geometry: Rect,
}

impl Stack {
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[ContainerId] {
        &self.items
    }

    pub fn index_of(&self, container: ContainerId) -> Option<usize> {
        self.items.iter().position(|&c| c == container)
    }

    pub fn widget(&self, index: usize) -> Option<ContainerId> {
        self.items.get(index).copied()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_widget(&self) -> Option<ContainerId> {
        self.current.and_then(|i| self.widget(i))
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Insert keeping the current item stable; the first item becomes current
    fn insert(&mut self, index: usize, container: ContainerId) -> usize {
        let index = index.min(self.items.len());
        self.items.insert(index, container);
        self.current = match self.current {
            None => Some(index),
            Some(cur) if index <= cur => Some(cur + 1),
            keep => keep,
        };
        index
    }

    /// Remove; if the current item goes, the item now at its index takes over
    fn remove(&mut self, container: ContainerId) -> bool {
        let Some(pos) = self.index_of(container) else {
            return false;
        };
        self.items.remove(pos);
        self.current = match self.current {
            _ if self.items.is_empty() => None,
            Some(cur) if pos < cur => Some(cur - 1),
            Some(cur) if pos == cur => Some(cur.min(self.items.len() - 1)),
            keep => keep,
        };
        true
    }

    fn set_current_index(&mut self, index: usize) {
        if index < self.items.len() {
            self.current = Some(index);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Panel {
    edge: Edge,
    front: Stack,
    back: Stack,
    visible: bool,
    geometry: Rect,
}

impl Panel {
    pub fn new(edge: Edge) -> Self {
        Self {
            edge,
            front: Stack::default(),
            back: Stack::default(),
            visible: false,
            geometry: Rect::default(),
        }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn stack(&self, side: Side) -> &Stack {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }

    fn stack_mut(&mut self, side: Side) -> &mut Stack {
        match side {
            Side::Front => &mut self.front,
            Side::Back => &mut self.back,
        }
    }

    pub fn add_widget(&mut self, side: Side, container: ContainerId, visible: bool) -> usize {
        let index = self.count(side);
        self.insert_widget(side, index, container, visible)
    }

    /// Insert a container; `visible` also shows the stack and makes it current
    pub fn insert_widget(
        &mut self,
        side: Side,
        index: usize,
        container: ContainerId,
        visible: bool,
    ) -> usize {
        let stack = self.stack_mut(side);
        let index = stack.insert(index, container);
        if visible {
            stack.visible = true;
            stack.set_current_index(index);
            self.visible = true;
        }
        index
    }

    pub fn remove_widget(&mut self, side: Side, container: ContainerId) {
        let stack = self.stack_mut(side);
        let was_current = stack.current_widget() == Some(container);
        if !stack.remove(container) {
            return;
        }
        if was_current && stack.visible {
            stack.visible = false;
            self.update_visibility();
        }
    }

    pub fn current_widget(&self, side: Side) -> Option<ContainerId> {
        self.stack(side).current_widget()
    }

    pub fn current_index(&self, side: Side) -> Option<usize> {
        self.stack(side).current_index()
    }

    pub fn index_of(&self, side: Side, container: ContainerId) -> Option<usize> {
        self.stack(side).index_of(container)
    }

    pub fn widget(&self, side: Side, index: usize) -> Option<ContainerId> {
        self.stack(side).widget(index)
    }

    pub fn count(&self, side: Side) -> usize {
        self.stack(side).count()
    }

    pub fn set_current_index(&mut self, side: Side, index: usize) {
        self.stack_mut(side).set_current_index(index);
    }

    pub fn set_current_widget(&mut self, side: Side, container: ContainerId) {
        if let Some(index) = self.index_of(side, container) {
            self.set_current_index(side, index);
        }
    }

    /// Show or hide one stack; showing always shows the panel
    pub fn set_container_visible(&mut self, side: Side, visible: bool) {
        self.stack_mut(side).visible = visible;
        if visible {
            self.visible = true;
        } else {
            self.update_visibility();
        }
    }

    pub fn is_container_visible(&self, side: Side) -> bool {
        self.stack(side).visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub(crate) fn set_layout(&mut self, geometry: Rect, front: Rect, back: Rect) {
        self.geometry = geometry;
        self.front.geometry = front;
        self.back.geometry = back;
    }

    fn update_visibility(&mut self) {
        if !self.front.visible && !self.back.visible {
            self.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_panel_is_hidden() {
        let panel = Panel::new(Edge::Left);
        assert!(!panel.is_visible());
        assert_eq!(panel.count(Side::Front), 0);
        assert_eq!(panel.current_widget(Side::Front), None);
    }

    #[test]
    fn test_insert_visible_shows_stack_and_panel() {
        let mut panel = Panel::new(Edge::Left);
        panel.add_widget(Side::Front, ContainerId(1), false);
        assert!(!panel.is_visible());
        assert_eq!(panel.current_widget(Side::Front), Some(ContainerId(1)));

        panel.insert_widget(Side::Front, 0, ContainerId(2), true);
        assert!(panel.is_visible());
        assert!(panel.is_container_visible(Side::Front));
        assert_eq!(panel.current_widget(Side::Front), Some(ContainerId(2)));
        assert_eq!(panel.index_of(Side::Front, ContainerId(1)), Some(1));
    }

    #[test]
    fn test_insert_before_current_keeps_current() {
        let mut panel = Panel::new(Edge::Top);
        panel.add_widget(Side::Back, ContainerId(1), false);
        panel.add_widget(Side::Back, ContainerId(2), false);
        panel.set_current_widget(Side::Back, ContainerId(2));

        panel.insert_widget(Side::Back, 0, ContainerId(3), false);
        assert_eq!(panel.current_widget(Side::Back), Some(ContainerId(2)));
        assert_eq!(panel.current_index(Side::Back), Some(2));
    }

    #[test]
    fn test_remove_current_visible_hides_panel() {
        let mut panel = Panel::new(Edge::Right);
        panel.add_widget(Side::Front, ContainerId(1), true);
        panel.add_widget(Side::Front, ContainerId(2), false);

        panel.remove_widget(Side::Front, ContainerId(1));
        assert!(!panel.is_container_visible(Side::Front));
        assert!(!panel.is_visible());
        assert_eq!(panel.current_widget(Side::Front), Some(ContainerId(2)));
    }

    #[test]
    fn test_panel_stays_visible_while_other_stack_shown() {
        let mut panel = Panel::new(Edge::Bottom);
        panel.add_widget(Side::Front, ContainerId(1), true);
        panel.add_widget(Side::Back, ContainerId(2), true);

        panel.set_container_visible(Side::Front, false);
        assert!(panel.is_visible());

        panel.set_container_visible(Side::Back, false);
        assert!(!panel.is_visible());

        panel.set_container_visible(Side::Back, true);
        assert!(panel.is_visible());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut panel = Panel::new(Edge::Left);
        panel.add_widget(Side::Front, ContainerId(1), true);
        panel.remove_widget(Side::Back, ContainerId(1));
        assert!(panel.is_visible());
        assert_eq!(panel.count(Side::Front), 1);
    }
}
