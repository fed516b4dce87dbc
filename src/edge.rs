//! Edge and side addressing
//!
//! Every cross reference between side bars, panels and splitters goes through
//! the canonical edge order defined here: Left=0, Top=1, Right=2, Bottom=3.

use serde::{Deserialize, Serialize};

/// One of the four window edges a side bar can live on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges in canonical index order (also the drag hit-test scan order)
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom];

    /// Canonical array index for per-edge storage
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Edge::Left => 0,
            Edge::Top => 1,
            Edge::Right => 2,
            Edge::Bottom => 3,
        }
    }

    /// Inverse of [`Edge::index`]
    pub fn from_index(index: usize) -> Option<Edge> {
        Self::ALL.get(index).copied()
    }

    /// Primary layout axis of the side bar docked to this edge
    pub fn axis(self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Horizontal,
            Edge::Left | Edge::Right => Axis::Vertical,
        }
    }

    pub fn opposite(self) -> Edge {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }

    /// Whether this edge occupies the first slot of its splitter
    /// (Left in the horizontal splitter, Top in the vertical one)
    #[inline]
    pub fn is_leading(self) -> bool {
        matches!(self, Edge::Left | Edge::Top)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }
}

/// Which end of a side bar (and which stack of a panel) a button belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Front,
    Back,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Front, Side::Back];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Front => 0,
            Side::Back => 1,
        }
    }
}

/// Layout axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Paint orientation of a side bar button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    TopToBottom,
    BottomToTop,
}

impl Orientation {
    /// Orientation a side bar imposes on its buttons
    pub fn for_edge(edge: Edge) -> Orientation {
        match edge {
            Edge::Top | Edge::Bottom => Orientation::Horizontal,
            Edge::Left => Orientation::BottomToTop,
            Edge::Right => Orientation::TopToBottom,
        }
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        !matches!(self, Orientation::Horizontal)
    }
}

/// Where a docked widget's content currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Inside its panel stack
    #[default]
    Pinned,
    /// Detached as a tool window owned by its container
    Floating,
    /// Detached as an independent top-level window
    Window,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Pinned, ViewMode::Floating, ViewMode::Window];

    pub fn display_name(self) -> &'static str {
        match self {
            ViewMode::Pinned => "Dock Pinned",
            ViewMode::Floating => "Float",
            ViewMode::Window => "Window",
        }
    }
}
