//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.

use crate::geometry::Point;
use crate::model::{ButtonId, ViewModeMenu};

#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Geometry or visibility changed; repaint
    Redraw,
    /// Pop up the view-mode menu for a button at a global position.
    /// The host answers with `DockMsg::SetViewMode` for the chosen entry.
    ShowViewModeMenu {
        button: ButtonId,
        menu: ViewModeMenu,
        pos: Point,
    },
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine two optional commands
    pub fn merge(a: Option<Cmd>, b: Option<Cmd>) -> Option<Cmd> {
        match (a, b) {
            (None, None) => None,
            (Some(c), None) | (None, Some(c)) => Some(c),
            (Some(Cmd::Batch(mut v)), Some(c)) => {
                v.push(c);
                Some(Cmd::Batch(v))
            }
            (Some(a), Some(b)) => Some(Cmd::Batch(vec![a, b])),
        }
    }

    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::ShowViewModeMenu { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
        }
    }
}
