//! sidedock - headless side-bar docking model
//!
//! Content widgets are registered against one of four window edges. Each
//! gets a toggle button in that edge's side bar and a container in that
//! edge's panel; buttons can be dragged between bars and widgets can be
//! pinned in their panel, floated as tool windows or detached as top-level
//! windows. Host events flow in through the Elm-style [`update`] layer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod deferred;
pub mod dock;
pub mod drag;
pub mod edge;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod messages;
pub mod model;
mod registry;
pub mod script;
pub mod state;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DockConfig;
pub use dock::DockWidget;
pub use edge::{Axis, Edge, Orientation, Side, ViewMode};
pub use geometry::{Margins, Point, Rect, Size};
pub use messages::DockMsg;
pub use model::{ButtonDelegate, ButtonId, DockButton, WidgetId};
pub use registry::{ButtonRecord, Container};
pub use script::{Script, Step};
pub use state::DockState;
