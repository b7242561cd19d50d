// File: crates/scatter-core/tests/export.rs
// Purpose: Export yields chart.png bytes, and fails loudly when nothing was rendered.

use std::time::Instant;

use scatter_core::sample::{GeneratorParams, Sample};
use scatter_core::{export_png, export_settled_png, ChartError, ChartState, RenderOptions, EXPORT_FILE_NAME};

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

fn opts() -> RenderOptions {
    let mut o = RenderOptions::default();
    o.draw_labels = false; // avoid font variance
    o
}

#[test]
fn export_on_empty_scene_is_an_error() {
    let st = ChartState::new(GeneratorParams::default(), opts());
    let err = export_png(&st, Instant::now()).unwrap_err();
    assert!(matches!(err, ChartError::NothingToExport), "got {err:?}");
    assert!(matches!(export_settled_png(&st), Err(ChartError::NothingToExport)));
}

#[test]
fn export_produces_named_png() {
    let params = GeneratorParams::default();
    let mut st = ChartState::new(params, opts());
    st.set_sample(Sample::generate_seeded(&params, 3), Instant::now());

    let img = export_settled_png(&st).expect("export");
    assert_eq!(img.file_name, EXPORT_FILE_NAME);
    assert_eq!(img.file_name, "chart.png");
    assert!(img.bytes.starts_with(&PNG_SIGNATURE));

    let decoded = image::load_from_memory(&img.bytes).expect("decode").to_rgba8();
    assert_eq!(decoded.width(), st.options().width as u32);
    assert_eq!(decoded.height(), st.options().height as u32);
}

#[test]
fn export_mid_animation_still_succeeds() {
    let params = GeneratorParams::default();
    let mut st = ChartState::new(params, opts());
    let now = Instant::now();
    st.set_sample(Sample::generate_seeded(&params, 8), now);
    let img = export_png(&st, now).expect("export at t=0");
    assert!(img.bytes.starts_with(&PNG_SIGNATURE));
}

#[test]
fn save_in_writes_chart_png() {
    let params = GeneratorParams::default();
    let mut st = ChartState::new(params, opts());
    st.set_sample(Sample::generate_seeded(&params, 5), Instant::now());
    let img = export_settled_png(&st).expect("export");

    let dir = std::path::PathBuf::from("target/test_out/export");
    let path = img.save_in(&dir).expect("save");
    assert_eq!(path, dir.join("chart.png"));
    let on_disk = std::fs::read(&path).expect("read back");
    assert_eq!(on_disk, img.bytes);
}
