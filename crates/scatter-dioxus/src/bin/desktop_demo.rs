// File: crates/scatter-dioxus/src/bin/desktop_demo.rs
// Purpose: Minimal launcher for the Dioxus desktop RegressionChart widget.

#[cfg(feature = "desktop")]
fn main() {
    env_logger::init();
    if let Err(e) = scatter_dioxus::ui::run_demo_ui() {
        eprintln!("scatter-dioxus demo error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    eprintln!("This demo requires --features desktop");
}
