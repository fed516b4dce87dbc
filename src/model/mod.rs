//! Dock model - the state behind side bars, panels and splitters
//!
//! ## Architecture
//!
//! - `DockButton` / `ButtonDelegate`: the toggle buttons living in side bars
//! - `SideBar`: front/back button groups for one edge
//! - `Panel`: front/back content stacks mirroring a side bar
//! - `Splitter`: three-slot size allocation (edge, center, opposite edge)
//! - `FloatingHelper` / `ContentTracker`: detached window bookkeeping
//!
//! Side bars and panels never reach into the registry. They report back to
//! their owner through the [`BarHost`] trait.

pub mod button;
pub mod floating;
pub mod panel;
pub mod side_bar;
pub mod splitter;

use serde::{Deserialize, Serialize};

pub use button::{ButtonDelegate, DefaultButtonDelegate, DockButton, MenuEntry, ViewModeMenu};
pub use floating::{ContentState, ContentTracker, FloatingHelper, WidgetParent, WindowFlags};
pub use panel::{Panel, Stack};
pub use side_bar::{BarHost, SideBar};
pub use splitter::Splitter;

/// Opaque handle for a side bar button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ButtonId(pub u64);

/// Host-supplied identity of a content widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

/// Handle for the container wrapping a content widget inside a panel stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerId(pub u64);
