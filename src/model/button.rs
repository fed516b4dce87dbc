//! Side bar buttons and the delegate that creates them
//!
//! The delegate is the host's customization point: it decides what a button
//! starts out as, how its orientation is stored, and which view-mode menu it
//! offers on right click.

use crate::edge::{Orientation, ViewMode};
use crate::geometry::{Rect, Size};

/// A checkable toggle button docked in a side bar
///
/// Checked, enabled and visible state are owned by the dock so that toggle
/// notifications cannot be bypassed; hosts read them and mirror them.
#[derive(Debug, Clone, Default)]
pub struct DockButton {
    text: String,
    /// Size hint for horizontal painting; vertical orientations transpose it
    size_hint: Size,
    orientation: Orientation,
    checkable: bool,
    checked: bool,
    enabled: bool,
    visible: bool,
    geometry: Rect,
}

impl DockButton {
    pub fn new(text: impl Into<String>, size_hint: Size) -> Self {
        Self {
            text: text.into(),
            size_hint,
            enabled: true,
            ..Default::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Size hint as laid out, accounting for rotated painting
    pub fn size_hint(&self) -> Size {
        if self.orientation.is_vertical() {
            self.size_hint.transposed()
        } else {
            self.size_hint
        }
    }

    /// Size hint as given, before rotation
    pub fn base_size_hint(&self) -> Size {
        self.size_hint
    }

    pub fn set_size_hint(&mut self, size: Size) {
        self.size_hint = size;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn is_checkable(&self) -> bool {
        self.checkable
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Geometry assigned by the last layout pass
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub(crate) fn set_checkable(&mut self, checkable: bool) {
        self.checkable = checkable;
        if !checkable {
            self.checked = false;
        }
    }

    /// Returns true when the state actually changed
    pub(crate) fn set_checked(&mut self, checked: bool) -> bool {
        let checked = checked && self.checkable;
        if self.checked == checked {
            return false;
        }
        self.checked = checked;
        true
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
    }
}

/// One entry of a view-mode context menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub mode: ViewMode,
    pub label: String,
    pub checked: bool,
}

/// Context menu offering view-mode changes for a button
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModeMenu {
    pub entries: Vec<MenuEntry>,
}

impl ViewModeMenu {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mode of the entry at `index`, if any
    pub fn mode_at(&self, index: usize) -> Option<ViewMode> {
        self.entries.get(index).map(|e| e.mode)
    }
}

/// Host customization point for side bar buttons
pub trait ButtonDelegate {
    /// Create a fresh, unchecked button
    fn create(&self) -> DockButton;

    fn orientation(&self, button: &DockButton) -> Orientation;

    fn set_orientation(&self, button: &mut DockButton, orientation: Orientation);

    fn create_view_mode_menu(&self, button: &DockButton, current: ViewMode) -> ViewModeMenu;
}

/// Delegate used when the host supplies none
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultButtonDelegate;

impl ButtonDelegate for DefaultButtonDelegate {
    fn create(&self) -> DockButton {
        DockButton::new(String::new(), Size::default())
    }

    fn orientation(&self, button: &DockButton) -> Orientation {
        button.orientation()
    }

    fn set_orientation(&self, button: &mut DockButton, orientation: Orientation) {
        button.set_orientation(orientation);
    }

    fn create_view_mode_menu(&self, _button: &DockButton, current: ViewMode) -> ViewModeMenu {
        ViewModeMenu {
            entries: ViewMode::ALL
                .into_iter()
                .map(|mode| MenuEntry {
                    mode,
                    label: mode.display_name().to_string(),
                    checked: mode == current,
                })
                .collect(),
        }
    }
}
