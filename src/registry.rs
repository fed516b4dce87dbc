//! Button registry: records keyed by button handle, plus the panels they feed
//!
//! The registry is the only owner of per-button state. Side bars reach it
//! through the [`BarHost`] implementation below, which is also where a bar's
//! "button added/removed" notifications turn into panel attach/detach.

use std::collections::HashMap;

use crate::edge::{Edge, Orientation, Side, ViewMode};
use crate::gesture::ButtonGesture;
use crate::geometry::Rect;
use crate::model::{
    BarHost, ButtonDelegate, ButtonId, ContainerId, ContentState, ContentTracker, DockButton,
    FloatingHelper, Panel, WidgetId,
};

/// The container wrapping a content widget inside a panel stack
#[derive(Debug, Clone, Copy)]
pub struct Container {
    pub id: ContainerId,
    /// Last geometry the container had while shown
    pub geometry: Rect,
}

/// Everything the dock knows about one registered widget
#[derive(Debug, Clone)]
pub struct ButtonRecord {
    pub(crate) button: DockButton,
    pub(crate) view_mode: ViewMode,
    pub(crate) edge: Edge,
    pub(crate) side: Side,
    pub(crate) widget: WidgetId,
    pub(crate) container: Container,
    pub(crate) content: ContentState,
    pub(crate) helper: FloatingHelper,
    pub(crate) tracker: ContentTracker,
    pub(crate) gesture: ButtonGesture,
}

impl ButtonRecord {
    pub fn button(&self) -> &DockButton {
        &self.button
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn widget(&self) -> WidgetId {
        self.widget
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn content(&self) -> &ContentState {
        &self.content
    }

    pub fn helper(&self) -> &FloatingHelper {
        &self.helper
    }

    pub fn tracker(&self) -> &ContentTracker {
        &self.tracker
    }

    /// Checked and pinned: the only state in which panel exclusivity applies
    pub fn dock_visible(&self) -> bool {
        self.button.is_checked() && self.view_mode == ViewMode::Pinned
    }
}

pub(crate) struct Registry {
    records: HashMap<ButtonId, ButtonRecord>,
    by_widget: HashMap<WidgetId, ButtonId>,
    pub(crate) panels: [Panel; 4],
    pub(crate) delegate: Box<dyn ButtonDelegate>,
    next_id: u64,
}

impl Registry {
    pub(crate) fn new(delegate: Box<dyn ButtonDelegate>) -> Self {
        Self {
            records: HashMap::new(),
            by_widget: HashMap::new(),
            panels: Edge::ALL.map(Panel::new),
            delegate,
            next_id: 1,
        }
    }

    /// Mint a button handle and the matching container handle
    pub(crate) fn next_ids(&mut self) -> (ButtonId, ContainerId) {
        let id = self.next_id;
        self.next_id += 1;
        (ButtonId(id), ContainerId(id))
    }

    pub(crate) fn contains(&self, button: ButtonId) -> bool {
        self.records.contains_key(&button)
    }

    pub(crate) fn contains_widget(&self, widget: WidgetId) -> bool {
        self.by_widget.contains_key(&widget)
    }

    pub(crate) fn insert(&mut self, id: ButtonId, record: ButtonRecord) {
        self.by_widget.insert(record.widget, id);
        self.records.insert(id, record);
    }

    pub(crate) fn remove(&mut self, button: ButtonId) -> Option<ButtonRecord> {
        let record = self.records.remove(&button)?;
        self.by_widget.remove(&record.widget);
        Some(record)
    }

    pub(crate) fn get(&self, button: ButtonId) -> Option<&ButtonRecord> {
        self.records.get(&button)
    }

    pub(crate) fn get_mut(&mut self, button: ButtonId) -> Option<&mut ButtonRecord> {
        self.records.get_mut(&button)
    }

    pub(crate) fn find_button(&self, widget: WidgetId) -> Option<ButtonId> {
        self.by_widget.get(&widget).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn records_mut(&mut self) -> impl Iterator<Item = (&ButtonId, &mut ButtonRecord)> {
        self.records.iter_mut()
    }

    pub(crate) fn panel(&self, edge: Edge) -> &Panel {
        &self.panels[edge.index()]
    }

    pub(crate) fn panel_mut(&mut self, edge: Edge) -> &mut Panel {
        &mut self.panels[edge.index()]
    }

    /// Panel or window visibility follows a button's checked state.
    ///
    /// Pinned content is shown by making its container current in the panel
    /// stack; detached content shows or hides its own window.
    pub(crate) fn apply_check_effects(&mut self, button: ButtonId) {
        let Some(record) = self.records.get_mut(&button) else {
            return;
        };
        let checked = record.button.is_checked();
        if record.view_mode != ViewMode::Pinned {
            record.content.visible = checked;
            return;
        }

        let (edge, side, container) = (record.edge, record.side, record.container.id);
        let panel = &mut self.panels[edge.index()];
        if checked {
            panel.set_current_widget(side, container);
            panel.set_container_visible(side, true);
        } else if panel.current_widget(side) == Some(container) {
            panel.set_container_visible(side, false);
        }
    }
}

impl BarHost for Registry {
    fn dock_visible(&self, button: ButtonId) -> bool {
        self.records
            .get(&button)
            .map(ButtonRecord::dock_visible)
            .unwrap_or(false)
    }

    fn is_enabled(&self, button: ButtonId) -> bool {
        self.records
            .get(&button)
            .map(|r| r.button.is_enabled())
            .unwrap_or(false)
    }

    fn uncheck(&mut self, button: ButtonId) {
        let changed = self
            .records
            .get_mut(&button)
            .map(|r| r.button.set_checked(false))
            .unwrap_or(false);
        if changed {
            tracing::debug!(?button, "unchecked by exclusivity");
            self.apply_check_effects(button);
        }
    }

    fn show_button(&mut self, button: ButtonId) {
        if let Some(record) = self.records.get_mut(&button) {
            record.button.set_visible(true);
        }
    }

    fn apply_orientation(&mut self, button: ButtonId, orientation: Orientation) {
        if let Some(record) = self.records.get_mut(&button) {
            self.delegate.set_orientation(&mut record.button, orientation);
        }
    }

    fn button_added(&mut self, edge: Edge, side: Side, index: usize, button: ButtonId) {
        let Some(record) = self.records.get(&button) else {
            return;
        };
        let visible = record.dock_visible();
        let container = record.container.id;
        self.panels[edge.index()].insert_widget(side, index, container, visible);
    }

    fn button_removed(&mut self, edge: Edge, side: Side, button: ButtonId) {
        let Some(record) = self.records.get(&button) else {
            return;
        };
        let container = record.container.id;
        self.panels[edge.index()].remove_widget(side, container);
    }
}
