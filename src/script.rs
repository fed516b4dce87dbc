//! Scenario scripts replayed against a dock
//!
//! A script is a YAML (or JSON) list of steps:
//!
//! ```yaml
//! - op: insert
//!   widget: 1
//!   edge: left
//!   side: front
//!   text: Project
//! - op: toggle
//!   widget: 1
//! - op: drag
//!   widget: 1
//!   to: { x: 640, y: 790 }
//! - op: tick
//! ```
//!
//! Steps naming an unregistered widget are skipped with a warning.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::dock::DockWidget;
use crate::drag::PreviewImage;
use crate::edge::{Edge, Side, ViewMode};
use crate::geometry::{Margins, Point, Rect};
use crate::messages::DockMsg;
use crate::model::WidgetId;
use crate::update::update_dock;

use winit::event::MouseButton;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Insert {
        widget: WidgetId,
        edge: Edge,
        #[serde(default)]
        side: Side,
        /// Appended when absent
        #[serde(default)]
        index: Option<usize>,
        #[serde(default)]
        text: Option<String>,
    },
    Remove {
        widget: WidgetId,
    },
    Move {
        widget: WidgetId,
        edge: Edge,
        #[serde(default)]
        side: Side,
        #[serde(default)]
        index: usize,
    },
    Toggle {
        widget: WidgetId,
    },
    SetChecked {
        widget: WidgetId,
        checked: bool,
    },
    SetViewMode {
        widget: WidgetId,
        mode: ViewMode,
    },
    /// The host closed a detached widget's window
    Close {
        widget: WidgetId,
    },
    SetEdgeSize {
        edge: Edge,
        size: f32,
    },
    ToggleMaximize {
        edge: Edge,
    },
    SetBarVisible {
        edge: Edge,
        visible: bool,
    },
    SetGeometry {
        rect: Rect,
    },
    SetResizeMargins {
        margins: Margins,
    },
    SetFloatWhenDraggedOutside {
        enabled: bool,
    },
    /// Drag a button by its center and drop it at `to`
    Drag {
        widget: WidgetId,
        to: Point,
    },
    /// Raw pointer input, routed like host events
    Press {
        pos: Point,
        #[serde(default)]
        right: bool,
    },
    PointerMove {
        pos: Point,
    },
    Release {
        pos: Point,
        #[serde(default)]
        right: bool,
    },
    Tick,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_yaml(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).map_err(|e| anyhow::anyhow!("Invalid script: {}", e))
    }

    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| anyhow::anyhow!("Invalid script: {}", e))
    }

    /// Replay every step, ending with a drain of deferred work.
    ///
    /// Returns the commands the dock emitted for pointer steps.
    pub fn run(&self, dock: &mut DockWidget) -> Vec<Cmd> {
        let mut cmds = Vec::new();
        for (i, step) in self.steps.iter().enumerate() {
            tracing::debug!(step = i, ?step, "script step");
            if let Some(cmd) = apply_step(dock, step) {
                cmds.push(cmd);
            }
        }
        dock.process_deferred();
        cmds
    }
}

fn button_for(dock: &DockWidget, widget: WidgetId) -> Option<crate::model::ButtonId> {
    let button = dock.find_button(widget);
    if button.is_none() {
        tracing::warn!(?widget, "script step names an unregistered widget");
    }
    button
}

fn mouse(right: bool) -> MouseButton {
    if right {
        MouseButton::Right
    } else {
        MouseButton::Left
    }
}

fn apply_step(dock: &mut DockWidget, step: &Step) -> Option<Cmd> {
    match step {
        Step::Insert {
            widget,
            edge,
            side,
            index,
            text,
        } => {
            let index = index.unwrap_or_else(|| dock.widget_count(*edge, *side));
            let button = dock.insert_widget(*edge, *side, index, *widget)?;
            if let Some(text) = text {
                dock.set_button_text(button, text);
            }
        }
        Step::Remove { widget } => {
            let button = button_for(dock, *widget)?;
            dock.remove_widget(button);
        }
        Step::Move {
            widget,
            edge,
            side,
            index,
        } => {
            let button = button_for(dock, *widget)?;
            dock.move_widget(button, *edge, *side, *index);
        }
        Step::Toggle { widget } => {
            let button = button_for(dock, *widget)?;
            dock.toggle(button);
        }
        Step::SetChecked { widget, checked } => {
            let button = button_for(dock, *widget)?;
            dock.set_checked(button, *checked);
        }
        Step::SetViewMode { widget, mode } => {
            let button = button_for(dock, *widget)?;
            dock.set_view_mode(button, *mode);
        }
        Step::Close { widget } => dock.widget_closed(*widget),
        Step::SetEdgeSize { edge, size } => dock.set_edge_size(*edge, *size),
        Step::ToggleMaximize { edge } => dock.toggle_maximize(*edge),
        Step::SetBarVisible { edge, visible } => dock.set_bar_visible(*edge, *visible),
        Step::SetGeometry { rect } => dock.set_geometry(*rect),
        Step::SetResizeMargins { margins } => dock.set_resize_margins(*margins),
        Step::SetFloatWhenDraggedOutside { enabled } => {
            dock.set_float_when_dragged_outside(*enabled)
        }
        Step::Drag { widget, to } => {
            let button = button_for(dock, *widget)?;
            let rect = dock.button(button)?.geometry();
            let grab_offset = Point::new(rect.width / 2.0, rect.height / 2.0);
            let image = PreviewImage { size: rect.size() };
            if dock.start_drag(button, grab_offset, image, rect.center()) {
                dock.drag_move(*to);
                dock.drag_release();
            }
        }
        Step::Press { pos, right } => {
            return update_dock(
                dock,
                DockMsg::PointerDown {
                    button: mouse(*right),
                    pos: *pos,
                },
            )
        }
        Step::PointerMove { pos } => return update_dock(dock, DockMsg::PointerMove { pos: *pos }),
        Step::Release { pos, right } => {
            return update_dock(
                dock,
                DockMsg::PointerUp {
                    button: mouse(*right),
                    pos: *pos,
                },
            )
        }
        Step::Tick => return update_dock(dock, DockMsg::Tick),
    }
    None
}
