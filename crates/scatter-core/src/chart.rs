// File: crates/scatter-core/src/chart.rs
// Summary: Render options and the headless PNG pipeline that rasterizes a Scene with Skia CPU surfaces.

use skia_safe as skia;

use crate::axis::TICK_SIZE;
use crate::error::{ChartError, Result};
use crate::scene::Scene;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const LABEL_SIZE: f32 = 11.0;
const LEGEND_SIZE: f32 = 13.0;
const TOOLTIP_SIZE: f32 = 12.0;
const TOOLTIP_PAD: f32 = 6.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (tick labels, legend, tooltip text). Off for pixel-exact tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

/// Rasterize `scene` and return PNG bytes.
pub fn render_to_png_bytes(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((scene.width, scene.height))
        .ok_or(ChartError::Surface { width: scene.width, height: scene.height })?;

    let shaper = opts.draw_labels.then(TextShaper::new);
    paint_scene(surface.canvas(), scene, &opts.theme, shaper.as_ref());

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(ChartError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

/// Render `scene` to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(
    scene: &Scene,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(scene, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

/// Clear, then axes, points and fit line under the zoom transform, then the
/// fixed-position legend and tooltip.
pub fn paint_scene(canvas: &skia::Canvas, scene: &Scene, theme: &Theme, shaper: Option<&TextShaper>) {
    canvas.clear(theme.background);

    canvas.save();
    canvas.translate((scene.view.x as f32, scene.view.y as f32));
    canvas.scale((scene.view.k as f32, scene.view.k as f32));
    draw_axes(canvas, scene, theme, shaper);
    draw_points(canvas, scene, theme);
    draw_fit_line(canvas, scene, theme);
    canvas.restore();

    if let (Some(legend), Some(shaper)) = (&scene.legend, shaper) {
        shaper.draw_left(canvas, legend, scene.plot.left as f32 + 8.0, scene.plot.top as f32 + LEGEND_SIZE, LEGEND_SIZE, theme.legend, false);
    }
    draw_tooltip(canvas, scene, theme, shaper);
}

// ---- helpers ----------------------------------------------------------------

fn draw_axes(canvas: &skia::Canvas, scene: &Scene, theme: &Theme, shaper: Option<&TextShaper>) {
    let l = scene.plot.left as f32;
    let r = scene.plot.right as f32;
    let t = scene.plot.top as f32;
    let b = scene.plot.bottom as f32;

    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    let mut tick_paint = axis_paint.clone();
    tick_paint.set_color(theme.tick);

    // X axis along the bottom, ticks pointing down
    canvas.draw_line((l, b), (r, b), &axis_paint);
    for tick in &scene.x_ticks {
        canvas.draw_line((tick.px, b), (tick.px, b + TICK_SIZE), &tick_paint);
        if let Some(s) = shaper {
            s.draw_centered(canvas, &tick.label, tick.px, b + TICK_SIZE + LABEL_SIZE + 2.0, LABEL_SIZE, theme.tick_label);
        }
    }

    // Y axis along the left, ticks pointing left
    canvas.draw_line((l, t), (l, b), &axis_paint);
    for tick in &scene.y_ticks {
        canvas.draw_line((l - TICK_SIZE, tick.px), (l, tick.px), &tick_paint);
        if let Some(s) = shaper {
            s.draw_right(canvas, &tick.label, l - TICK_SIZE - 3.0, tick.px + LABEL_SIZE * 0.4, LABEL_SIZE, theme.tick_label);
        }
    }

    if let Some(s) = shaper {
        s.draw_left(canvas, &scene.x_axis.label, r + 6.0, b + 4.0, LABEL_SIZE, theme.tick_label, false);
        s.draw_left(canvas, &scene.y_axis.label, l - 4.0, t - 6.0, LABEL_SIZE, theme.tick_label, false);
    }
}

fn draw_points(canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.point_fill);

    for p in scene.points.iter().filter(|p| p.radius > 0.0) {
        canvas.draw_circle((p.cx, p.cy), p.radius, &fill);
    }
}

fn draw_fit_line(canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
    if scene.line.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = scene.line[0];
    path.move_to((x0, y0));
    for &(x, y) in scene.line.iter().skip(1) {
        path.line_to((x, y));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(theme.fit_line);

    canvas.draw_path(&path, &stroke);
}

fn draw_tooltip(canvas: &skia::Canvas, scene: &Scene, theme: &Theme, shaper: Option<&TextShaper>) {
    let Some(tip) = &scene.tooltip else { return };

    let text_w = match shaper {
        Some(s) => s.measure_width(&tip.text, TOOLTIP_SIZE, true),
        None => tip.text.chars().count() as f32 * TOOLTIP_SIZE * 0.6,
    };
    let (x, y) = tip.anchor;
    let rect = skia::Rect::from_xywh(x, y, text_w + TOOLTIP_PAD * 2.0, TOOLTIP_SIZE + TOOLTIP_PAD * 2.0);

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_style(skia::paint::Style::Fill);
    bg.set_color(theme.tooltip_background);
    canvas.draw_round_rect(rect, 4.0, 4.0, &bg);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.tooltip_border);
    canvas.draw_round_rect(rect, 4.0, 4.0, &border);

    if let Some(s) = shaper {
        s.draw_left(canvas, &tip.text, x + TOOLTIP_PAD, y + TOOLTIP_PAD + TOOLTIP_SIZE, TOOLTIP_SIZE, theme.tooltip_text, true);
    }
}
