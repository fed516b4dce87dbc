//! DockWidget - the docking orchestrator
//!
//! Owns the four side bars, the button registry (with the four panels), the
//! crossed splitter pair, the drag controller and the deferred-task queue.
//! Every public operation is synchronous; fixups that need a settled layout
//! are queued and run by [`DockWidget::process_deferred`].
//!
//! Unknown or stale button handles are silently ignored everywhere.

use crate::config::DockConfig;
use crate::deferred::{DeferredQueue, DeferredTask};
use crate::drag::{DragController, DropOutcome, PreviewImage};
use crate::edge::{Axis, Edge, Side, ViewMode};
use crate::gesture::ButtonGesture;
use crate::geometry::{Margins, Point, Rect, Size};
use crate::layout::{self, LayoutMetrics, HORIZONTAL, VERTICAL};
use crate::model::splitter::slot_of;
use crate::model::{
    ButtonDelegate, ButtonId, ContentState, ContentTracker, DefaultButtonDelegate, DockButton,
    FloatingHelper, Panel, SideBar, Splitter, ViewModeMenu, WidgetId, WidgetParent, WindowFlags,
};
use crate::registry::{ButtonRecord, Container, Registry};

pub struct DockWidget {
    config: DockConfig,
    bars: [SideBar; 4],
    registry: Registry,
    /// `[HORIZONTAL, VERTICAL]`, see [`crate::layout`]
    splitters: [Splitter; 2],
    drag: DragController,
    deferred: DeferredQueue,
    geometry: Rect,
    central: Rect,
    screens: Vec<Rect>,
    resize_margins: Margins,
    /// Button whose gesture received the last pointer press
    pub(crate) pressed: Option<ButtonId>,
}

impl DockWidget {
    pub fn new(config: DockConfig) -> Self {
        Self::with_delegate(config, Box::new(DefaultButtonDelegate))
    }

    pub fn with_delegate(config: DockConfig, delegate: Box<dyn ButtonDelegate>) -> Self {
        let handle = config.splitter_handle_width;
        let min_center = config.min_center_extent;
        let sizes = &config.edge_sizes;
        let splitters = [
            Splitter::new(Axis::Horizontal, [sizes.left, sizes.right], handle, min_center),
            Splitter::new(Axis::Vertical, [sizes.top, sizes.bottom], handle, min_center),
        ];

        let mut dock = Self {
            bars: Edge::ALL.map(SideBar::new),
            registry: Registry::new(delegate),
            splitters,
            drag: DragController::default(),
            deferred: DeferredQueue::default(),
            geometry: config.window,
            central: Rect::default(),
            screens: vec![config.screen],
            resize_margins: config.resize_margins,
            pressed: None,
            config,
        };
        dock.relayout();
        dock
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Append `widget` to the end of `side` on `edge`
    pub fn add_widget(&mut self, edge: Edge, side: Side, widget: WidgetId) -> Option<ButtonId> {
        let index = self.bars[edge.index()].count(side);
        self.insert_widget(edge, side, index, widget)
    }

    /// Register `widget` behind a new button at `index` of `side` on `edge`.
    ///
    /// Returns `None` if the widget is already registered.
    pub fn insert_widget(
        &mut self,
        edge: Edge,
        side: Side,
        index: usize,
        widget: WidgetId,
    ) -> Option<ButtonId> {
        if self.registry.contains_widget(widget) {
            tracing::debug!(?widget, "widget already registered, ignoring insert");
            return None;
        }

        let mut button = self.registry.delegate.create();
        if button.base_size_hint().is_empty() {
            button.set_size_hint(self.config.button_size);
        }
        button.set_checkable(true);
        button.set_enabled(true);

        let (id, container) = self.registry.next_ids();
        let record = ButtonRecord {
            button,
            view_mode: ViewMode::Pinned,
            edge,
            side,
            widget,
            container: Container {
                id: container,
                geometry: Rect::default(),
            },
            content: ContentState::default(),
            helper: FloatingHelper::new(self.resize_margins),
            tracker: ContentTracker::default(),
            gesture: ButtonGesture::default(),
        };
        self.registry.insert(id, record);

        let landed = self.bars[edge.index()].insert_button(side, index, id, &mut self.registry);
        tracing::debug!(button = ?id, ?widget, ?edge, ?side, index = landed, "widget registered");

        self.relayout();
        Some(id)
    }

    /// Unregister the widget behind `button`, tearing down its container.
    ///
    /// The content widget itself is left detached and hidden for the host.
    pub fn remove_widget(&mut self, button: ButtonId) {
        let Some(record) = self.registry.get_mut(button) else {
            return;
        };
        record.content.in_layout = false;
        record.content.parent = WidgetParent::Detached;
        record.content.visible = false;
        record.helper.set_floating(false, WindowFlags::Widget);
        let (edge, side, widget) = (record.edge, record.side, record.widget);

        if self.drag.button() == Some(button) {
            self.drag.end(&mut self.bars, &mut self.registry);
            self.deferred.push(DeferredTask::DisposePreview);
        }
        if self.pressed == Some(button) {
            self.pressed = None;
        }

        self.bars[edge.index()].remove_button(side, button, &mut self.registry);
        self.registry.remove(button);
        tracing::debug!(?button, ?widget, "widget unregistered");

        self.relayout();
    }

    /// The host destroyed a registered content widget
    pub fn widget_destroyed(&mut self, widget: WidgetId) {
        if let Some(button) = self.registry.find_button(widget) {
            tracing::debug!(?widget, "content widget destroyed");
            self.remove_widget(button);
        }
    }

    /// The host destroyed a side bar button
    pub fn button_destroyed(&mut self, button: ButtonId) {
        if self.registry.contains(button) {
            tracing::debug!(?button, "button destroyed");
            self.remove_widget(button);
        }
    }

    /// Move `button` to `index` of `side` on `edge`
    pub fn move_widget(&mut self, button: ButtonId, edge: Edge, side: Side, index: usize) {
        let Some(record) = self.registry.get(button) else {
            return;
        };
        let (old_edge, old_side) = (record.edge, record.side);

        self.bars[old_edge.index()].remove_button(old_side, button, &mut self.registry);
        if let Some(record) = self.registry.get_mut(button) {
            record.edge = edge;
            record.side = side;
        }
        let landed = self.bars[edge.index()].insert_button(side, index, button, &mut self.registry);
        tracing::debug!(?button, from = ?(old_edge, old_side), to = ?(edge, side), index = landed, "widget moved");

        self.relayout();
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    pub fn widget_count(&self, edge: Edge, side: Side) -> usize {
        self.bars[edge.index()].count(side)
    }

    /// Total number of registered widgets
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Widgets of one group in bar order
    pub fn widgets(&self, edge: Edge, side: Side) -> Vec<WidgetId> {
        self.bars[edge.index()]
            .buttons(side)
            .iter()
            .filter_map(|&b| self.registry.get(b).map(|r| r.widget))
            .collect()
    }

    pub fn find_button(&self, widget: WidgetId) -> Option<ButtonId> {
        self.registry.find_button(widget)
    }

    pub fn view_mode(&self, button: ButtonId) -> Option<ViewMode> {
        self.registry.get(button).map(|r| r.view_mode)
    }

    pub fn record(&self, button: ButtonId) -> Option<&ButtonRecord> {
        self.registry.get(button)
    }

    pub fn button(&self, button: ButtonId) -> Option<&DockButton> {
        self.registry.get(button).map(|r| &r.button)
    }

    pub fn content(&self, widget: WidgetId) -> Option<&ContentState> {
        let button = self.registry.find_button(widget)?;
        self.registry.get(button).map(|r| &r.content)
    }

    pub fn is_checked(&self, button: ButtonId) -> bool {
        self.button(button).is_some_and(DockButton::is_checked)
    }

    /// Checked and pinned
    pub fn dock_visible(&self, button: ButtonId) -> bool {
        self.registry
            .get(button)
            .is_some_and(ButtonRecord::dock_visible)
    }

    pub fn side_bar(&self, edge: Edge) -> &SideBar {
        &self.bars[edge.index()]
    }

    pub fn panel(&self, edge: Edge) -> &Panel {
        self.registry.panel(edge)
    }

    pub fn splitter(&self, axis: Axis) -> &Splitter {
        &self.splitters[splitter_for_axis(axis)]
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Area left for the central content after bars and panels
    pub fn central_rect(&self) -> Rect {
        self.central
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn pending_tasks(&self) -> usize {
        self.deferred.len()
    }

    /// Topmost visible button under `pos`
    pub fn button_at(&self, pos: Point) -> Option<ButtonId> {
        self.bars
            .iter()
            .filter(|bar| bar.is_visible())
            .flat_map(|bar| Side::ALL.into_iter().flat_map(move |side| bar.buttons(side).iter()))
            .copied()
            .find(|&b| {
                self.registry
                    .get(b)
                    .is_some_and(|r| r.button.is_visible() && r.button.geometry().contains(pos))
            })
    }

    pub fn view_mode_menu(&self, button: ButtonId) -> Option<ViewModeMenu> {
        let record = self.registry.get(button)?;
        Some(
            self.registry
                .delegate
                .create_view_mode_menu(&record.button, record.view_mode),
        )
    }

    pub(crate) fn gesture_mut(&mut self, button: ButtonId) -> Option<&mut ButtonGesture> {
        self.registry.get_mut(button).map(|r| &mut r.gesture)
    }

    // ========================================================================
    // Button state
    // ========================================================================

    pub fn set_button_text(&mut self, button: ButtonId, text: &str) {
        if let Some(record) = self.registry.get_mut(button) {
            record.button.set_text(text);
        }
    }

    pub fn set_button_size_hint(&mut self, button: ButtonId, size: Size) {
        if let Some(record) = self.registry.get_mut(button) {
            record.button.set_size_hint(size);
            self.relayout();
        }
    }

    /// Check or uncheck a button, with exclusivity and visibility effects
    pub fn set_checked(&mut self, button: ButtonId, checked: bool) {
        let Some(record) = self.registry.get_mut(button) else {
            return;
        };
        if !record.button.set_checked(checked) {
            return;
        }
        let (edge, side) = (record.edge, record.side);
        tracing::debug!(?button, checked, "button toggled");

        self.bars[edge.index()].button_toggled(side, button, &mut self.registry);
        self.registry.apply_check_effects(button);
        self.relayout();
    }

    pub fn toggle(&mut self, button: ButtonId) {
        let checked = self.is_checked(button);
        self.set_checked(button, !checked);
    }

    // ========================================================================
    // View modes
    // ========================================================================

    /// Move the widget behind `button` between panel, tool window and
    /// top-level window.
    pub fn set_view_mode(&mut self, button: ButtonId, mode: ViewMode) {
        let Some(record) = self.registry.get_mut(button) else {
            return;
        };
        let old = record.view_mode;
        if old == mode {
            return;
        }

        let pre_detach = record.content.geometry;
        if old == ViewMode::Pinned {
            record.tracker.pinned_geometry = Some(pre_detach);
        } else {
            record.tracker.window_geometry = Some(pre_detach);
        }
        record.view_mode = mode;
        let (edge, side, container) = (record.edge, record.side, record.container);

        match mode {
            ViewMode::Pinned => {
                record.helper.set_floating(false, WindowFlags::Widget);
                record.content = ContentState {
                    parent: WidgetParent::Container,
                    in_layout: true,
                    flags: WindowFlags::Widget,
                    geometry: container.geometry,
                    visible: true,
                };
                let pinned = record
                    .tracker
                    .pinned_geometry
                    .filter(|g| !g.size().is_empty());
                if let Some(pinned) = pinned {
                    let extent = pinned.extent(edge.axis().cross());
                    self.deferred.push(DeferredTask::RestoreEdgeExtent {
                        button,
                        edge,
                        extent,
                    });
                }
            }
            ViewMode::Floating => {
                record.content.in_layout = false;
                record.content.parent = WidgetParent::Container;
                record.helper.set_floating(true, WindowFlags::Tool);
                record.content.flags = WindowFlags::Tool;
                self.place_as_window(button, pre_detach);
            }
            ViewMode::Window => {
                record.content.in_layout = false;
                record.content.parent = WidgetParent::Detached;
                record.helper.set_floating(false, WindowFlags::Widget);
                record.content.flags = WindowFlags::Window;
                self.place_as_window(button, pre_detach);
            }
        }
        tracing::debug!(?button, from = ?old, to = ?mode, "view mode changed");

        self.bars[edge.index()].button_view_mode_changed(side, button, &mut self.registry);

        if self.is_checked(button) {
            let panel = self.registry.panel_mut(edge);
            if mode == ViewMode::Pinned {
                panel.set_current_widget(side, container.id);
                panel.set_container_visible(side, true);
                self.deferred.push(DeferredTask::RefreshContainer { button });
            } else if old == ViewMode::Pinned {
                panel.set_container_visible(side, false);
            }
        }

        self.relayout();
    }

    /// Size and position a freshly detached widget
    fn place_as_window(&mut self, button: ButtonId, pre_detach: Rect) {
        let default_size = self.config.default_window_size;
        let gap = self.config.window_gap;
        let Some(record) = self.registry.get(button) else {
            return;
        };
        let remembered = record.tracker.window_geometry;
        let button_rect = record.button.geometry();
        let checked = record.button.is_checked();
        let edge = record.edge;

        let size = match remembered {
            Some(g) => g.size(),
            None if !pre_detach.size().is_empty() => pre_detach.size(),
            None => default_size,
        };
        let origin = match remembered {
            Some(g) => g.origin(),
            None => beside_button(edge, button_rect, size, gap),
        };
        let screen = self.screen_at(button_rect.center());
        let geometry = Rect::from_origin_size(origin, size).clamp_inside(&screen);

        if let Some(record) = self.registry.get_mut(button) {
            record.content.geometry = geometry;
            record.content.visible = checked;
        }
    }

    /// Float a widget dropped outside every bar at `pos`
    fn float_at(&mut self, button: ButtonId, pos: Point) {
        let Some(record) = self.registry.get(button) else {
            return;
        };
        let (mode, checked) = (record.view_mode, record.button.is_checked());
        if mode == ViewMode::Pinned {
            self.set_view_mode(button, ViewMode::Floating);
            self.move_content(button, pos);
        } else if !checked {
            self.move_content(button, pos);
        }
        self.set_checked(button, true);
    }

    fn move_content(&mut self, button: ButtonId, pos: Point) {
        let screen = self.screen_at(pos);
        if let Some(record) = self.registry.get_mut(button) {
            let geometry = record.content.geometry.moved_to(pos).clamp_inside(&screen);
            record.content.geometry = geometry;
            record.tracker.window_geometry = Some(geometry);
        }
    }

    /// The host moved or resized a detached widget's window
    pub fn set_widget_geometry(&mut self, widget: WidgetId, geometry: Rect) {
        let Some(button) = self.registry.find_button(widget) else {
            return;
        };
        if let Some(record) = self.registry.get_mut(button) {
            if record.view_mode != ViewMode::Pinned {
                record.content.geometry = geometry;
                record.tracker.window_geometry = Some(geometry);
            }
        }
    }

    /// The host closed a widget's window; the button follows
    pub fn widget_closed(&mut self, widget: WidgetId) {
        if let Some(button) = self.registry.find_button(widget) {
            self.set_checked(button, false);
        }
    }

    // ========================================================================
    // Sizes and visibility
    // ========================================================================

    /// Stored panel extent of an edge
    pub fn edge_size(&self, edge: Edge) -> f32 {
        self.splitters[layout::splitter_index(edge)].edge_size(slot_of(edge))
    }

    pub fn set_edge_size(&mut self, edge: Edge, size: f32) {
        let delta = self.splitters[layout::splitter_index(edge)].set_edge_size(slot_of(edge), size);
        tracing::trace!(?edge, size, delta, "edge size set");
        self.relayout();
    }

    /// `[leading edge, center, trailing edge]` extents of the splitter along `axis`
    pub fn orientation_sizes(&self, axis: Axis) -> [f32; 3] {
        self.splitters[splitter_for_axis(axis)].resolved()
    }

    pub fn set_orientation_sizes(&mut self, axis: Axis, sizes: [f32; 3]) {
        self.splitters[splitter_for_axis(axis)].set_resolved(sizes);
        self.relayout();
    }

    pub fn toggle_maximize(&mut self, edge: Edge) {
        self.splitters[layout::splitter_index(edge)].toggle_maximize(slot_of(edge));
        self.relayout();
    }

    pub fn is_maximized(&self, edge: Edge) -> bool {
        self.splitters[layout::splitter_index(edge)].is_maximized(slot_of(edge))
    }

    /// Extent a maximized edge goes back to, `None` when not maximized
    pub fn restore_size(&self, edge: Edge) -> Option<f32> {
        self.splitters[layout::splitter_index(edge)].restore_size(slot_of(edge))
    }

    /// Forget queued extent restores for `buttons`
    pub(crate) fn drop_extent_restores(&mut self, buttons: &[ButtonId]) {
        self.deferred.retain(|task| {
            !matches!(task, DeferredTask::RestoreEdgeExtent { button, .. } if buttons.contains(button))
        });
    }

    pub fn bar_visible(&self, edge: Edge) -> bool {
        self.bars[edge.index()].is_visible()
    }

    pub fn set_bar_visible(&mut self, edge: Edge, visible: bool) {
        self.bars[edge.index()].set_visible(visible);
        self.relayout();
    }

    pub fn resize_margins(&self) -> Margins {
        self.resize_margins
    }

    /// Applies to every floating and window widget, present and future
    pub fn set_resize_margins(&mut self, margins: Margins) {
        self.resize_margins = margins;
        for (_, record) in self.registry.records_mut() {
            record.helper.set_resize_margins(margins);
        }
    }

    pub fn set_show_view_mode_menu(&mut self, enabled: bool) {
        self.config.show_view_mode_menu = enabled;
    }

    pub fn set_float_when_dragged_outside(&mut self, enabled: bool) {
        self.config.float_when_dragged_outside = enabled;
    }

    pub fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
        self.relayout();
    }

    /// Screens available for placing detached windows
    pub fn set_screens(&mut self, screens: Vec<Rect>) {
        self.screens = if screens.is_empty() {
            vec![self.config.screen]
        } else {
            screens
        };
    }

    /// Screen containing `pos`, else the first one
    fn screen_at(&self, pos: Point) -> Rect {
        self.screens
            .iter()
            .copied()
            .find(|s| s.contains(pos))
            .or_else(|| self.screens.first().copied())
            .unwrap_or(self.config.screen)
    }

    // ========================================================================
    // Drag and drop
    // ========================================================================

    /// Begin dragging `button`, grabbed `grab_offset` from its top-left corner
    pub fn start_drag(
        &mut self,
        button: ButtonId,
        grab_offset: Point,
        image: PreviewImage,
        pointer: Point,
    ) -> bool {
        let started = self.drag.start(
            button,
            grab_offset,
            image,
            pointer,
            &mut self.bars,
            &mut self.registry,
        );
        if started {
            self.relayout();
        }
        started
    }

    pub fn drag_move(&mut self, pointer: Point) {
        if !self.drag.is_dragging() {
            return;
        }
        self.drag.drag_move(pointer, &mut self.bars, &self.registry);
        self.relayout();
    }

    /// Drop the dragged button (pointer release or preview focus loss)
    pub fn drag_release(&mut self) {
        let Some(outcome) = self.drag.drop_outcome(&self.bars, &self.registry) else {
            return;
        };

        match outcome {
            DropOutcome::Move {
                button,
                edge,
                side,
                index,
            } => self.move_widget(button, edge, side, index),
            DropOutcome::Outside { button, pos } => {
                if self.config.float_when_dragged_outside {
                    self.deferred.push(DeferredTask::FloatAt { button, pos });
                } else {
                    tracing::debug!(?button, "dropped outside side bars, ignored");
                }
            }
        }

        self.drag.end(&mut self.bars, &mut self.registry);
        self.deferred.push(DeferredTask::DisposePreview);
        self.relayout();
    }

    /// The preview lost focus mid-drag; treated as a release at the last pointer
    pub fn drag_focus_lost(&mut self) {
        tracing::debug!("drag preview lost focus");
        self.drag_release();
    }

    /// Abort the drag, leaving the button where it was
    pub fn cancel_drag(&mut self) {
        if self.drag.end(&mut self.bars, &mut self.registry).is_some() {
            self.deferred.push(DeferredTask::DisposePreview);
            self.relayout();
        }
    }

    // ========================================================================
    // Deferred work and layout
    // ========================================================================

    /// Run the tasks queued before this call. Returns how many ran.
    pub fn process_deferred(&mut self) -> usize {
        let batch = self.deferred.take_batch();
        let mut ran = 0;
        for task in batch {
            if let Some(button) = task.button() {
                if !self.registry.contains(button) {
                    tracing::debug!(?task, "skipping deferred task for removed button");
                    continue;
                }
            }
            match task {
                DeferredTask::RestoreEdgeExtent {
                    button,
                    edge,
                    extent,
                } => {
                    let still_pinned = self
                        .registry
                        .get(button)
                        .is_some_and(|r| r.view_mode == ViewMode::Pinned && r.edge == edge);
                    if !still_pinned {
                        continue;
                    }
                    self.set_edge_size(edge, extent);
                }
                DeferredTask::RefreshContainer { .. } => self.relayout(),
                DeferredTask::FloatAt { button, pos } => self.float_at(button, pos),
                DeferredTask::DisposePreview => self.drag.dispose_preview(),
            }
            ran += 1;
        }
        ran
    }

    /// Recompute every geometry from the current state
    pub fn relayout(&mut self) {
        let metrics = LayoutMetrics {
            button_spacing: self.config.button_spacing,
            handle_width: self.config.splitter_handle_width,
        };
        self.central = layout::layout_dock(
            self.geometry,
            metrics,
            &mut self.bars,
            &mut self.registry,
            &mut self.splitters,
        );
    }
}

impl Default for DockWidget {
    fn default() -> Self {
        Self::new(DockConfig::default())
    }
}

fn splitter_for_axis(axis: Axis) -> usize {
    match axis {
        Axis::Horizontal => HORIZONTAL,
        Axis::Vertical => VERTICAL,
    }
}

/// Top-left corner for a window placed just inside the dock, beside the
/// button that spawned it
fn beside_button(edge: Edge, button: Rect, size: Size, gap: f32) -> Point {
    match edge {
        Edge::Left => Point::new(button.right() + gap, button.y),
        Edge::Right => Point::new(button.x - gap - size.width, button.y),
        Edge::Top => Point::new(button.x, button.bottom() + gap),
        Edge::Bottom => Point::new(button.x, button.y - gap - size.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beside_button_points_into_window() {
        let size = Size::new(100.0, 50.0);
        let button = Rect::new(0.0, 40.0, 24.0, 80.0);
        assert_eq!(beside_button(Edge::Left, button, size, 4.0), Point::new(28.0, 40.0));

        let button = Rect::new(776.0, 40.0, 24.0, 80.0);
        assert_eq!(beside_button(Edge::Right, button, size, 4.0), Point::new(672.0, 40.0));

        let button = Rect::new(10.0, 576.0, 80.0, 24.0);
        assert_eq!(beside_button(Edge::Bottom, button, size, 4.0), Point::new(10.0, 522.0));
    }

    #[test]
    fn test_new_dock_is_empty_and_laid_out() {
        let dock = DockWidget::default();
        assert!(dock.is_empty());
        assert_eq!(dock.central_rect(), dock.geometry());
        for edge in Edge::ALL {
            assert!(!dock.panel(edge).is_visible());
            assert!(dock.bar_visible(edge));
        }
    }
}
