// File: crates/demo/src/main.rs
// Summary: Headless demo: generate a sample, fit it, optionally dump CSV and animation frames, export chart.png.

use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use scatter_core::animation::{LINE_STAGGER, POINT_POP_DURATION};
use scatter_core::sample::{GeneratorParams, Sample};
use scatter_core::types::{HEIGHT, WIDTH};
use scatter_core::{export_settled_png, render_to_png, theme, ChartState, RenderOptions};

#[derive(Parser, Debug)]
#[command(name = "scatterfit-demo", about = "Render a random scatter sample with its least-squares line to chart.png")]
struct Args {
    /// Seed for the sample; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory receiving chart.png (and frames, when requested).
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Theme preset: light or dark.
    #[arg(long, default_value = "light")]
    theme: String,

    #[arg(long, default_value_t = WIDTH)]
    width: i32,

    #[arg(long, default_value_t = HEIGHT)]
    height: i32,

    /// Skip tick labels, legend and tooltip text.
    #[arg(long)]
    no_labels: bool,

    /// Also write the generated sample as CSV (`x,y` header).
    #[arg(long)]
    sample_csv: Option<PathBuf>,

    /// Write this many evenly spaced animation frames as frame_NNN.png.
    #[arg(long, default_value_t = 0)]
    frames: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut opts = RenderOptions::default();
    opts.width = args.width;
    opts.height = args.height;
    opts.theme = theme::find(&args.theme);
    opts.draw_labels = !args.no_labels;

    let seed = args.seed.unwrap_or_else(clock_seed);
    println!("Using seed {seed} and theme '{}'", opts.theme.name);

    let params = GeneratorParams::default();
    let mut state = ChartState::new(params, opts);
    let started = Instant::now();
    state.set_sample(Sample::generate_seeded(&params, seed), started);
    println!("Generated {} points", state.sample().len());

    match state.fit() {
        Ok(f) => println!("Fit: {}  (R\u{b2} = {:.4})", f.equation(), f.r_squared(state.sample().points())),
        Err(e) => println!("Fit: {e}"),
    }

    if let Some(path) = &args.sample_csv {
        write_sample_csv(state.sample(), path)
            .with_context(|| format!("failed to write sample CSV '{}'", path.display()))?;
        println!("Wrote {}", path.display());
    }

    if args.frames > 0 {
        write_frames(&state, started, args.frames, &args.out_dir)?;
    }

    let image = export_settled_png(&state).context("export failed")?;
    let out = image
        .save_in(&args.out_dir)
        .with_context(|| format!("failed to save into '{}'", args.out_dir.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Write the sample with an `x,y` header.
fn write_sample_csv(sample: &Sample, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["x", "y"])?;
    for p in sample.points() {
        wtr.write_record([p.x.to_string(), p.y.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render `count` frames spread evenly from the first tick to the settled scene.
fn write_frames(state: &ChartState, started: Instant, count: u32, out_dir: &Path) -> Result<()> {
    let line_len = state.settled_scene().line.len() as u32;
    let total = POINT_POP_DURATION.max(LINE_STAGGER * line_len);
    for i in 0..count {
        let at = if count == 1 { total } else { total * i / (count - 1) };
        let scene = state.scene_at(started + at);
        let path = out_dir.join(format!("frame_{i:03}.png"));
        render_to_png(&scene, state.options(), &path)
            .with_context(|| format!("failed to render frame {}", path.display()))?;
        debug!("frame {i} at {:?}", at);
    }
    println!("Wrote {count} frames over {:?}", total);
    Ok(())
}
