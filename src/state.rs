//! Serializable snapshot of a dock's arrangement
//!
//! A [`DockState`] captures where every widget lives, how it is shown and the
//! edge sizes. Restoring only rearranges widgets the dock already knows;
//! registering content stays the host's job.

use serde::{Deserialize, Serialize};

use crate::dock::DockWidget;
use crate::edge::{Edge, Side, ViewMode};
use crate::geometry::Rect;
use crate::model::WidgetId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeState {
    pub edge: Edge,
    pub size: f32,
    pub bar_visible: bool,
    #[serde(default)]
    pub maximized: bool,
    /// Extent a maximized edge returns to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restore_size: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryState {
    pub widget: WidgetId,
    pub edge: Edge,
    pub side: Side,
    pub index: usize,
    #[serde(default)]
    pub view_mode: ViewMode,
    #[serde(default)]
    pub checked: bool,
    /// Window geometry of floating and window widgets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DockState {
    pub geometry: Rect,
    /// Informational; recomputed on restore
    #[serde(default)]
    pub central: Rect,
    #[serde(default)]
    pub edges: Vec<EdgeState>,
    #[serde(default)]
    pub entries: Vec<EntryState>,
}

impl DockState {
    pub fn entry(&self, widget: WidgetId) -> Option<&EntryState> {
        self.entries.iter().find(|e| e.widget == widget)
    }

    pub fn edge(&self, edge: Edge) -> Option<&EdgeState> {
        self.edges.iter().find(|e| e.edge == edge)
    }
}

impl DockWidget {
    pub fn snapshot(&self) -> DockState {
        let edges = Edge::ALL
            .into_iter()
            .map(|edge| EdgeState {
                edge,
                size: self.edge_size(edge),
                bar_visible: self.bar_visible(edge),
                maximized: self.is_maximized(edge),
                restore_size: self.restore_size(edge),
            })
            .collect();

        let mut entries = Vec::new();
        for edge in Edge::ALL {
            for side in Side::ALL {
                for (index, &button) in self.side_bar(edge).buttons(side).iter().enumerate() {
                    let Some(record) = self.record(button) else {
                        continue;
                    };
                    let view_mode = record.view_mode();
                    entries.push(EntryState {
                        widget: record.widget(),
                        edge,
                        side,
                        index,
                        view_mode,
                        checked: record.button().is_checked(),
                        geometry: (view_mode != ViewMode::Pinned)
                            .then(|| record.content().geometry),
                    });
                }
            }
        }

        DockState {
            geometry: self.geometry(),
            central: self.central_rect(),
            edges,
            entries,
        }
    }

    /// Re-apply a snapshot to the widgets already registered here.
    ///
    /// Extent restores queued by the restored widgets' mode changes are
    /// dropped in favor of the snapshot's edge sizes. Other pending tasks stay
    /// queued for the next [`DockWidget::process_deferred`].
    ///
    /// Returns how many entries matched a registered widget.
    pub fn restore(&mut self, state: &DockState) -> usize {
        self.set_geometry(state.geometry);

        let mut entries: Vec<&EntryState> = state.entries.iter().collect();
        entries.sort_by_key(|e| (e.edge.index(), e.side.index(), e.index));

        let mut restored = Vec::new();
        for entry in entries {
            let Some(button) = self.find_button(entry.widget) else {
                tracing::debug!(widget = ?entry.widget, "snapshot entry for unknown widget skipped");
                continue;
            };
            self.move_widget(button, entry.edge, entry.side, entry.index);
            self.set_view_mode(button, entry.view_mode);
            if let Some(geometry) = entry.geometry {
                self.set_widget_geometry(entry.widget, geometry);
            }
            self.set_checked(button, entry.checked);
            restored.push(button);
        }
        self.drop_extent_restores(&restored);

        // Both slots of a splitter must be back to their plain split before
        // either is sized or maximized again
        for edge_state in &state.edges {
            self.set_bar_visible(edge_state.edge, edge_state.bar_visible);
            if self.is_maximized(edge_state.edge) {
                self.toggle_maximize(edge_state.edge);
            }
        }
        for edge_state in &state.edges {
            let size = edge_state.restore_size.unwrap_or(edge_state.size);
            self.set_edge_size(edge_state.edge, size);
        }
        for edge_state in state.edges.iter().filter(|e| e.maximized) {
            self.toggle_maximize(edge_state.edge);
        }

        let applied = restored.len();
        tracing::info!(applied, total = state.entries.len(), "dock state restored");
        applied
    }
}
