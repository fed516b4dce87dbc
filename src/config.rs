//! Dock configuration persistence
//!
//! Stores host attributes and layout metrics in `~/.config/sidedock/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::geometry::{Margins, Rect, Size};

/// Initial panel extent per edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSizes {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for EdgeSizes {
    fn default() -> Self {
        Self {
            left: 250.0,
            top: 200.0,
            right: 250.0,
            bottom: 200.0,
        }
    }
}

impl EdgeSizes {
    pub fn get(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }
}

/// Dock configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    /// Right-clicking a side bar button opens the view-mode menu
    pub show_view_mode_menu: bool,

    /// Dropping a dragged button outside every side bar floats its widget
    pub float_when_dragged_outside: bool,

    /// Pointer travel (logical px) before a press on a button becomes a drag
    pub drag_threshold: f32,

    /// Resize handle margins applied to every floating/window widget
    pub resize_margins: Margins,

    pub splitter_handle_width: f32,

    /// The center content area never shrinks below this when resizing edges
    pub min_center_extent: f32,

    /// Default size hint (horizontal painting) of new buttons
    pub button_size: Size,

    pub button_spacing: f32,

    /// Gap between a button and a freshly detached window placed beside it
    pub window_gap: f32,

    /// Size of a detached window whose widget was never laid out
    pub default_window_size: Size,

    pub edge_sizes: EdgeSizes,

    /// Initial dock geometry
    pub window: Rect,

    /// Screen used for clamping detached windows until the host reports screens
    pub screen: Rect,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            show_view_mode_menu: true,
            float_when_dragged_outside: false,
            drag_threshold: 10.0,
            resize_margins: Margins::uniform(5.0),
            splitter_handle_width: 4.0,
            min_center_extent: 100.0,
            button_size: Size::new(80.0, 24.0),
            button_spacing: 0.0,
            window_gap: 4.0,
            default_window_size: Size::new(400.0, 300.0),
            edge_sizes: EdgeSizes::default(),
            window: Rect::new(0.0, 0.0, 1280.0, 800.0),
            screen: Rect::new(0.0, 0.0, 1920.0, 1080.0),
        }
    }
}

impl DockConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
