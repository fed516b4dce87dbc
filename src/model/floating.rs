//! Detached window bookkeeping
//!
//! The frameless move/resize behaviour itself belongs to the host toolkit.
//! `FloatingHelper` only records what the dock asked of it, and
//! `ContentTracker` remembers geometry across view-mode changes.

use serde::{Deserialize, Serialize};

use crate::geometry::{Margins, Rect};

/// Window kind requested for a content widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowFlags {
    /// Plain child widget, no native window
    #[default]
    Widget,
    /// Tool window staying above its owner
    Tool,
    /// Independent top-level window
    Window,
}

/// Drag-to-resize / frameless behaviour attached to a container
#[derive(Debug, Clone)]
pub struct FloatingHelper {
    floating: bool,
    flags: WindowFlags,
    frameless: bool,
    saved_flags: WindowFlags,
    resize_margins: Margins,
}

impl FloatingHelper {
    pub fn new(resize_margins: Margins) -> Self {
        Self {
            floating: false,
            flags: WindowFlags::Widget,
            frameless: false,
            saved_flags: WindowFlags::Widget,
            resize_margins,
        }
    }

    pub fn is_floating(&self) -> bool {
        self.floating
    }

    /// Flags currently applied to the content window
    pub fn flags(&self) -> WindowFlags {
        self.flags
    }

    pub fn is_frameless(&self) -> bool {
        self.frameless
    }

    /// Enabling remembers the current flags and applies `flags` frameless;
    /// disabling puts the remembered flags back.
    pub fn set_floating(&mut self, floating: bool, flags: WindowFlags) {
        if floating == self.floating {
            if floating {
                self.flags = flags;
            }
            return;
        }
        self.floating = floating;
        if floating {
            self.saved_flags = self.flags;
            self.flags = flags;
            self.frameless = true;
        } else {
            self.flags = self.saved_flags;
            self.saved_flags = WindowFlags::Widget;
            self.frameless = false;
        }
    }

    pub fn resize_margins(&self) -> Margins {
        self.resize_margins
    }

    pub fn set_resize_margins(&mut self, margins: Margins) {
        self.resize_margins = margins;
    }
}

/// Geometry remembered across view-mode transitions
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTracker {
    /// Last geometry while docked in the panel
    pub pinned_geometry: Option<Rect>,
    /// Last geometry while detached (floating or window)
    pub window_geometry: Option<Rect>,
}

/// Where the content widget is parented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetParent {
    Container,
    Detached,
}

/// What the dock asserts about a host content widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentState {
    pub parent: WidgetParent,
    /// Managed by the container's layout (only while pinned)
    pub in_layout: bool,
    pub flags: WindowFlags,
    pub geometry: Rect,
    pub visible: bool,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            parent: WidgetParent::Container,
            in_layout: true,
            flags: WindowFlags::Widget,
            geometry: Rect::default(),
            visible: true,
        }
    }
}

impl ContentState {
    pub fn is_window(&self) -> bool {
        !matches!(self.flags, WindowFlags::Widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floating_restores_previous_flags() {
        let mut helper = FloatingHelper::new(Margins::uniform(5.0));
        helper.set_floating(true, WindowFlags::Tool);
        assert!(helper.is_floating());
        assert!(helper.is_frameless());
        assert_eq!(helper.flags(), WindowFlags::Tool);

        helper.set_floating(false, WindowFlags::Window);
        assert!(!helper.is_floating());
        assert!(!helper.is_frameless());
        assert_eq!(helper.flags(), WindowFlags::Widget);
    }

    #[test]
    fn test_floating_twice_only_updates_flags() {
        let mut helper = FloatingHelper::new(Margins::default());
        helper.set_floating(true, WindowFlags::Tool);
        helper.set_floating(true, WindowFlags::Window);
        assert_eq!(helper.flags(), WindowFlags::Window);

        helper.set_floating(false, WindowFlags::Widget);
        assert_eq!(helper.flags(), WindowFlags::Widget);
    }
}
