//! Pointer routing: hit-testing, button gestures and the active drag

use winit::event::MouseButton;

use crate::commands::Cmd;
use crate::dock::DockWidget;
use crate::drag::PreviewImage;
use crate::geometry::Point;
use crate::gesture::GestureEvent;

pub fn pointer_down(dock: &mut DockWidget, mouse: MouseButton, pos: Point) -> Option<Cmd> {
    if dock.is_dragging() {
        return None;
    }
    let button = dock.button_at(pos)?;
    let rect = match dock.button(button) {
        Some(b) if b.is_enabled() => b.geometry(),
        _ => return None,
    };

    let event = dock.gesture_mut(button)?.on_pointer_down(mouse, pos, rect);
    if mouse == MouseButton::Left {
        dock.pressed = Some(button);
    }

    match event {
        Some(GestureEvent::ContextMenu { pos }) if dock.config().show_view_mode_menu => {
            let menu = dock.view_mode_menu(button)?;
            Some(Cmd::ShowViewModeMenu { button, menu, pos })
        }
        _ => None,
    }
}

pub fn pointer_move(dock: &mut DockWidget, pos: Point) -> Option<Cmd> {
    if dock.is_dragging() {
        dock.drag_move(pos);
        return Some(Cmd::Redraw);
    }

    let button = dock.pressed?;
    let threshold = dock.config().drag_threshold;
    let Some(GestureEvent::StartDrag {
        grab_offset,
        pointer,
    }) = dock.gesture_mut(button)?.on_pointer_move(pos, threshold)
    else {
        return None;
    };

    let image = PreviewImage {
        size: dock.button(button)?.size_hint(),
    };
    dock.start_drag(button, grab_offset, image, pointer)
        .then_some(Cmd::Redraw)
}

pub fn pointer_up(dock: &mut DockWidget, mouse: MouseButton, pos: Point) -> Option<Cmd> {
    if dock.is_dragging() {
        if mouse != MouseButton::Left {
            return None;
        }
        dock.drag_move(pos);
        dock.pressed = None;
        dock.drag_release();
        return Some(Cmd::Redraw);
    }

    if mouse != MouseButton::Left {
        return None;
    }
    let button = dock.pressed.take()?;
    let rect = dock.button(button)?.geometry();
    match dock.gesture_mut(button)?.on_pointer_up(mouse, pos, rect) {
        Some(GestureEvent::Click) => {
            dock.toggle(button);
            Some(Cmd::Redraw)
        }
        _ => None,
    }
}
