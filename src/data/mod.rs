mod demo;
mod snapshot;

pub use {
    demo::demo_snapshot,
    snapshot::{DashboardSnapshot, load_snapshot, save_snapshot},
};
