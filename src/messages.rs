//! Message types for the Elm-style architecture
//!
//! Host events and application requests reach the dock as [`DockMsg`]s.

use winit::event::MouseButton;

use crate::edge::{Edge, ViewMode};
use crate::geometry::Point;
use crate::model::ButtonId;

#[derive(Debug, Clone, PartialEq)]
pub enum DockMsg {
    // === Pointer ===
    /// Pointer pressed at a global position
    PointerDown { button: MouseButton, pos: Point },
    /// Pointer moved (with or without a button held)
    PointerMove { pos: Point },
    /// Pointer released
    PointerUp { button: MouseButton, pos: Point },
    /// The drag preview lost focus
    PreviewFocusLost,

    // === Buttons ===
    ToggleButton(ButtonId),
    SetViewMode { button: ButtonId, mode: ViewMode },

    // === Sizes and visibility ===
    SetEdgeSize { edge: Edge, size: f32 },
    ToggleMaximize(Edge),
    SetBarVisible { edge: Edge, visible: bool },

    /// One event-loop iteration passed; drains deferred work
    Tick,
}
