//! Drag-and-dock state machine
//!
//! A drag starts when a button's gesture passes the drag threshold and ends on
//! pointer release or when the preview loses focus:
//!
//! - **start**: the dragged button is hidden, or disabled in place when it is
//!   the only button of its bar so the bar does not collapse under the
//!   pointer. A borderless preview follows the pointer and grabs input.
//! - **move**: the preview follows the pointer; bars are scanned in canonical
//!   edge order and the first one overlapping the preview becomes the target.
//! - **release**: the drop side and index are computed from the preview's
//!   position inside the target bar, or the widget is floated when dropped
//!   outside every bar (if the host enabled that).
//!
//! The controller computes outcomes; the dock applies them.

use crate::edge::{Axis, Edge, Orientation, Side};
use crate::geometry::{Point, Rect, Size};
use crate::model::{ButtonId, SideBar};
use crate::registry::Registry;

/// Pixels the preview shows; painting is up to the host
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreviewImage {
    pub size: Size,
}

/// The floating preview that follows the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct DragPreview {
    pub image: PreviewImage,
    pub geometry: Rect,
    /// Holds the pointer grab while the drag runs
    pub grabbing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub button: ButtonId,
    pub grab_offset: Point,
    pub pointer: Point,
    pub origin: Edge,
    pub target: Option<Edge>,
    pub preview: DragPreview,
    /// The button stays in its bar disabled instead of being hidden
    pub held_in_place: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Where a released drag should go
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropOutcome {
    Move {
        button: ButtonId,
        edge: Edge,
        side: Side,
        index: usize,
    },
    Outside { button: ButtonId, pos: Point },
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
    /// Preview of a finished drag awaiting deferred disposal
    retired: Option<DragPreview>,
}

impl DragController {
    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    fn session_mut(&mut self) -> Option<&mut DragSession> {
        match &mut self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn button(&self) -> Option<ButtonId> {
        self.session().map(|s| s.button)
    }

    pub fn retired_preview(&self) -> Option<&DragPreview> {
        self.retired.as_ref()
    }

    /// Enter the dragging state. Returns false when already dragging or the
    /// button is unknown.
    pub(crate) fn start(
        &mut self,
        button: ButtonId,
        grab_offset: Point,
        image: PreviewImage,
        pointer: Point,
        bars: &mut [SideBar; 4],
        registry: &mut Registry,
    ) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(record) = registry.get_mut(button) else {
            return false;
        };

        let origin = record.edge;
        let held_in_place = bars[origin.index()].total_count() == 1;
        if held_in_place {
            record.button.set_enabled(false);
        } else {
            record.button.set_visible(false);
        }

        let preview = DragPreview {
            image,
            geometry: Rect::from_origin_size(pointer.sub(grab_offset), image.size),
            grabbing: true,
        };
        self.state = DragState::Dragging(DragSession {
            button,
            grab_offset,
            pointer,
            origin,
            target: None,
            preview,
            held_in_place,
        });
        tracing::debug!(?button, origin = ?origin, held_in_place, "drag started");

        self.drag_move(pointer, bars, registry);
        true
    }

    /// Follow the pointer and re-evaluate the target bar
    pub(crate) fn drag_move(&mut self, pointer: Point, bars: &mut [SideBar; 4], registry: &Registry) {
        let Some(session) = self.session_mut() else {
            return;
        };
        session.pointer = pointer;
        session.preview.geometry = session.preview.geometry.moved_to(pointer.sub(session.grab_offset));

        let width_hint = registry
            .get(session.button)
            .map(|r| {
                let hint = r.button.size_hint();
                if registry.delegate.orientation(&r.button) == Orientation::Horizontal {
                    hint.height
                } else {
                    hint.width
                }
            })
            .unwrap_or(0.0);

        let preview = session.preview.geometry;
        let mut target = None;
        for edge in Edge::ALL {
            let bar = &mut bars[edge.index()];
            if target.is_none() && bar.is_enabled() && bar.is_visible() {
                let hit = if bar.is_empty() {
                    empty_bar_strip(edge, bar.geometry(), width_hint).intersects(&preview)
                } else {
                    bar.geometry().intersects(&preview)
                };
                if hit {
                    bar.set_highlight(edge != session.origin, width_hint);
                    target = Some(edge);
                    continue;
                }
            }
            bar.set_highlight(false, 0.0);
        }

        if target != session.target {
            tracing::trace!(?target, "drag target changed");
        }
        session.target = target;
    }

    /// Compute where the current drag would drop
    pub(crate) fn drop_outcome(&self, bars: &[SideBar; 4], registry: &Registry) -> Option<DropOutcome> {
        let session = self.session()?;
        let button = session.button;

        let Some(edge) = session.target else {
            return Some(DropOutcome::Outside {
                button,
                pos: session.pointer,
            });
        };

        let bar = &bars[edge.index()];
        let axis = bar.axis();
        let preview = session.preview.geometry;

        let front_end = bar.geometry().start(axis) + bar.layout_geometry(Side::Front).extent(axis);
        let back_start = bar.geometry().end(axis) - bar.layout_geometry(Side::Back).extent(axis);
        let side = if preview.start(axis) - front_end < back_start - preview.end(axis) {
            Side::Front
        } else {
            Side::Back
        };

        let index = insertion_index(bar, side, preview.center().along(axis), button, registry);
        Some(DropOutcome::Move {
            button,
            edge,
            side,
            index,
        })
    }

    /// Leave the dragging state, restoring the button and bar highlights.
    ///
    /// The preview is kept aside until [`DragController::dispose_preview`]
    /// runs from the deferred queue.
    pub(crate) fn end(&mut self, bars: &mut [SideBar; 4], registry: &mut Registry) -> Option<ButtonId> {
        let DragState::Dragging(mut session) = std::mem::take(&mut self.state) else {
            return None;
        };

        if let Some(record) = registry.get_mut(session.button) {
            if !record.button.is_enabled() {
                record.button.set_enabled(true);
            }
            if !record.button.is_visible() {
                record.button.set_visible(true);
            }
            record.gesture.reset();
        }

        session.preview.grabbing = false;
        self.retired = Some(session.preview);

        for bar in bars.iter_mut() {
            bar.set_highlight(false, 0.0);
        }
        tracing::debug!(button = ?session.button, target = ?session.target, "drag ended");
        Some(session.button)
    }

    pub(crate) fn dispose_preview(&mut self) {
        if self.retired.take().is_some() {
            tracing::trace!("drag preview disposed");
        }
    }
}

/// Hit strip for a bar with no buttons: a band of the dragged button's
/// thickness along the bar's outer edge
pub fn empty_bar_strip(edge: Edge, bar: Rect, width_hint: f32) -> Rect {
    match edge {
        Edge::Left => Rect::new(bar.x, bar.y, width_hint, bar.height),
        Edge::Right => Rect::new(bar.right() - width_hint, bar.y, width_hint, bar.height),
        Edge::Top => Rect::new(bar.x, bar.y, bar.width, width_hint),
        Edge::Bottom => Rect::new(bar.x, bar.bottom() - width_hint, bar.width, width_hint),
    }
}

/// Index at which a button dropped with its center at `center` lands.
///
/// Front buttons run from the bar's start, so the drop goes before the first
/// button whose center lies beyond the preview's. Back buttons run from the
/// bar's end, so the comparison flips. A center exactly on a button's center
/// goes after it. The dragged button itself is skipped, which makes the index
/// valid once it has been removed from its old place.
pub(crate) fn insertion_index(
    bar: &SideBar,
    side: Side,
    center: f32,
    dragged: ButtonId,
    registry: &Registry,
) -> usize {
    let axis: Axis = bar.axis();
    let mut index = 0;
    for &button in bar.buttons(side) {
        if button == dragged {
            continue;
        }
        let Some(record) = registry.get(button) else {
            continue;
        };
        let c = record.button.geometry().center().along(axis);
        let past = match side {
            Side::Front => c > center,
            Side::Back => c < center,
        };
        if past {
            break;
        }
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bar_strip_hugs_outer_edge() {
        let left = Rect::new(0.0, 24.0, 0.0, 500.0);
        assert_eq!(empty_bar_strip(Edge::Left, left, 24.0), Rect::new(0.0, 24.0, 24.0, 500.0));

        let right = Rect::new(800.0, 24.0, 0.0, 500.0);
        assert_eq!(
            empty_bar_strip(Edge::Right, right, 24.0),
            Rect::new(776.0, 24.0, 24.0, 500.0)
        );

        let bottom = Rect::new(0.0, 600.0, 800.0, 0.0);
        assert_eq!(
            empty_bar_strip(Edge::Bottom, bottom, 24.0),
            Rect::new(0.0, 576.0, 800.0, 24.0)
        );
    }

    #[test]
    fn test_idle_controller_has_no_outcome() {
        let controller = DragController::default();
        assert!(!controller.is_dragging());
        assert_eq!(controller.button(), None);
        assert!(controller.retired_preview().is_none());
    }
}
