//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use sidedock::model::ContainerId;
use sidedock::{ButtonId, DockConfig, DockWidget, Edge, Side, WidgetId};

/// A 1280x800 dock with default metrics (80x24 buttons, 250/200 edge sizes)
pub fn test_dock() -> DockWidget {
    DockWidget::new(DockConfig::default())
}

/// A dock with the given widgets appended in order, returning their buttons
pub fn dock_with(widgets: &[(u64, Edge, Side)]) -> (DockWidget, Vec<ButtonId>) {
    let mut dock = test_dock();
    let buttons = widgets
        .iter()
        .map(|&(id, edge, side)| {
            dock.add_widget(edge, side, WidgetId(id))
                .expect("fresh widget registers")
        })
        .collect();
    (dock, buttons)
}

pub fn ids(widgets: &[WidgetId]) -> Vec<u64> {
    widgets.iter().map(|w| w.0).collect()
}

/// Widget ids of one bar group, in order
pub fn order(dock: &DockWidget, edge: Edge, side: Side) -> Vec<u64> {
    ids(&dock.widgets(edge, side))
}

/// Containers a bar group's buttons map to
pub fn bar_containers(dock: &DockWidget, edge: Edge, side: Side) -> Vec<ContainerId> {
    dock.side_bar(edge)
        .buttons(side)
        .iter()
        .map(|&b| dock.record(b).expect("registered").container().id)
        .collect()
}

/// Every bar group is mirrored by the matching panel stack
pub fn assert_mirrored(dock: &DockWidget) {
    for edge in Edge::ALL {
        for side in Side::ALL {
            assert_eq!(
                bar_containers(dock, edge, side),
                dock.panel(edge).stack(side).items(),
                "bar and panel disagree on {:?}/{:?}",
                edge,
                side
            );
        }
    }
}

/// At most one checked, pinned button per bar group
pub fn assert_exclusive(dock: &DockWidget) {
    for edge in Edge::ALL {
        for side in Side::ALL {
            let visible = dock
                .side_bar(edge)
                .buttons(side)
                .iter()
                .filter(|&&b| dock.dock_visible(b))
                .count();
            assert!(visible <= 1, "{} dock-visible buttons on {:?}/{:?}", visible, edge, side);
        }
    }
}
