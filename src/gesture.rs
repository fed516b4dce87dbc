//! Per-button pointer gesture recognizer
//!
//! Turns raw pointer events on a side bar button into clicks, drag starts and
//! context-menu requests: Idle → Armed (left press) → Dragging (moved past
//! the drag threshold).

use winit::event::MouseButton;

use crate::geometry::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Left button held, not yet moved far enough to drag
    Armed {
        press: Point,
        /// Pointer offset from the button's top-left corner
        grab_offset: Point,
    },
    /// A drag was handed to the drag controller
    Dragging,
}

/// What a gesture resolved to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Click,
    StartDrag { grab_offset: Point, pointer: Point },
    ContextMenu { pos: Point },
}

#[derive(Debug, Clone, Default)]
pub struct ButtonGesture {
    state: GestureState,
}

impl ButtonGesture {
    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, GestureState::Idle)
    }

    pub fn on_pointer_down(
        &mut self,
        button: MouseButton,
        pos: Point,
        button_rect: Rect,
    ) -> Option<GestureEvent> {
        match button {
            MouseButton::Left => {
                self.state = GestureState::Armed {
                    press: pos,
                    grab_offset: pos.sub(button_rect.origin()),
                };
                None
            }
            MouseButton::Right => Some(GestureEvent::ContextMenu { pos }),
            _ => None,
        }
    }

    pub fn on_pointer_move(&mut self, pos: Point, drag_threshold: f32) -> Option<GestureEvent> {
        let GestureState::Armed { press, grab_offset } = self.state else {
            return None;
        };
        if pos.distance(press) < drag_threshold {
            return None;
        }
        self.state = GestureState::Dragging;
        Some(GestureEvent::StartDrag {
            grab_offset,
            pointer: pos,
        })
    }

    /// A release only clicks when it lands back on the button
    pub fn on_pointer_up(
        &mut self,
        button: MouseButton,
        pos: Point,
        button_rect: Rect,
    ) -> Option<GestureEvent> {
        if button != MouseButton::Left {
            return None;
        }
        match std::mem::take(&mut self.state) {
            GestureState::Armed { .. } if button_rect.contains(pos) => Some(GestureEvent::Click),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }
}
