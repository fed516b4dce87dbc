//! Update functions for the Elm-style architecture
//!
//! All dock state transformations driven by host events flow through here.

mod pointer;

use crate::commands::Cmd;
use crate::dock::DockWidget;
use crate::messages::DockMsg;

pub use pointer::{pointer_down, pointer_move, pointer_up};

/// Main update function - dispatches to sub-handlers
pub fn update_dock(dock: &mut DockWidget, msg: DockMsg) -> Option<Cmd> {
    match msg {
        DockMsg::PointerDown { button, pos } => pointer_down(dock, button, pos),
        DockMsg::PointerMove { pos } => pointer_move(dock, pos),
        DockMsg::PointerUp { button, pos } => pointer_up(dock, button, pos),

        DockMsg::PreviewFocusLost => {
            if !dock.is_dragging() {
                return None;
            }
            dock.pressed = None;
            dock.drag_focus_lost();
            Some(Cmd::Redraw)
        }

        DockMsg::ToggleButton(button) => {
            dock.toggle(button);
            Some(Cmd::Redraw)
        }

        DockMsg::SetViewMode { button, mode } => {
            dock.set_view_mode(button, mode);
            Some(Cmd::Redraw)
        }

        DockMsg::SetEdgeSize { edge, size } => {
            dock.set_edge_size(edge, size);
            Some(Cmd::Redraw)
        }

        DockMsg::ToggleMaximize(edge) => {
            dock.toggle_maximize(edge);
            Some(Cmd::Redraw)
        }

        DockMsg::SetBarVisible { edge, visible } => {
            dock.set_bar_visible(edge, visible);
            Some(Cmd::Redraw)
        }

        DockMsg::Tick => {
            let ran = dock.process_deferred();
            if ran > 0 {
                tracing::trace!(ran, "deferred tasks drained");
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
