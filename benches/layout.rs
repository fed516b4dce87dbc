//! Benchmarks for the layout pass and sizing operations
//!
//! Run with: cargo bench --bench layout

mod support;
use support::make_dock;

use sidedock::{Axis, Edge, Rect};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Full relayout
// ============================================================================

#[divan::bench(args = [1, 4, 16, 64])]
fn relayout(bencher: divan::Bencher, per_group: usize) {
    let mut dock = make_dock(per_group);
    bencher.bench_local(|| {
        dock.relayout();
        divan::black_box(dock.central_rect());
    });
}

#[divan::bench(args = [4, 16])]
fn resize_window(bencher: divan::Bencher, per_group: usize) {
    let mut dock = make_dock(per_group);
    let mut width = 1280.0_f32;
    bencher.bench_local(|| {
        width = if width > 1900.0 { 800.0 } else { width + 7.0 };
        dock.set_geometry(Rect::new(0.0, 0.0, width, 800.0));
        divan::black_box(dock.orientation_sizes(Axis::Horizontal));
    });
}

// ============================================================================
// Edge sizing
// ============================================================================

#[divan::bench]
fn drag_splitter_handle(bencher: divan::Bencher) {
    let mut dock = make_dock(4);
    let mut size = 100.0_f32;
    bencher.bench_local(|| {
        size = if size > 600.0 { 100.0 } else { size + 3.0 };
        dock.set_edge_size(Edge::Left, size);
        divan::black_box(dock.edge_size(Edge::Left));
    });
}
