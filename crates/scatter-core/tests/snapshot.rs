// File: crates/scatter-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic chart (fixed sample, settled animation, no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips the comparison to ease first run; the zoomed
//   case also checks fill pixels directly so it never passes vacuously.

use std::time::Instant;

use scatter_core::sample::{GeneratorParams, Point, Sample};
use scatter_core::{render_to_png_bytes, ChartEvent, ChartState, RenderOptions, Theme, WheelMode};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn fixed_state(theme: Theme) -> ChartState {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // deterministic
    opts.theme = theme;
    let mut st = ChartState::new(GeneratorParams::default(), opts);
    let points = vec![
        Point::new(1.0, 6.2), Point::new(2.0, 9.8), Point::new(3.0, 10.1),
        Point::new(4.0, 14.6), Point::new(5.0, 13.9), Point::new(6.0, 18.4),
    ];
    st.set_sample(Sample::from_points(points), Instant::now());
    st
}

fn snap(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_scatter_light() {
    let st = fixed_state(Theme::light());
    let bytes = render_to_png_bytes(&st.settled_scene(), st.options()).expect("render bytes");
    write_or_compare(&snap("scatter_light.png"), &bytes);
}

#[test]
fn golden_scatter_dark_zoomed() {
    let mut st = fixed_state(Theme::dark());
    let mut rng = rand::rng();
    st.apply(ChartEvent::Wheel { x: 300.0, y: 250.0, delta_y: -1.0, mode: WheelMode::Page }, &mut rng, Instant::now());
    assert!((st.view().k - 2.0).abs() < 1e-9);
    let scene = st.settled_scene();
    let bytes = render_to_png_bytes(&scene, st.options()).expect("render bytes");

    // Independent of the golden file: (4, 14.6) sits well clear of the fit line,
    // and at k = 2 its disc is drawn with a 10 px radius
    let p = scene.points[3];
    let (x, y) = scene.view.apply((p.cx as f64, p.cy as f64));
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    let want = Theme::dark().point_fill;
    let want = [want.r(), want.g(), want.b(), 255];
    assert_eq!(img.get_pixel(x.floor() as u32, y.floor() as u32).0, want);
    assert_eq!(img.get_pixel((x + 7.0).floor() as u32, y.floor() as u32).0, want);

    write_or_compare(&snap("scatter_dark_zoomed.png"), &bytes);
}
