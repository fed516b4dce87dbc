//! Shared helpers for benchmarks

use sidedock::{DockConfig, DockWidget, Edge, Side, WidgetId};

/// A dock with `per_group` widgets in every bar group, one checked per group
#[allow(dead_code)]
pub fn make_dock(per_group: usize) -> DockWidget {
    let mut dock = DockWidget::new(DockConfig::default());
    let mut next = 1;
    for edge in Edge::ALL {
        for side in Side::ALL {
            for i in 0..per_group {
                let button = dock.add_widget(edge, side, WidgetId(next));
                next += 1;
                if let (0, Some(button)) = (i, button) {
                    dock.set_checked(button, true);
                }
            }
        }
    }
    dock
}
