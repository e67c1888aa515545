use std::{
    fs::File,
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use framekit::NamedVariant as _;

#[derive(Parser, Debug)]
#[command(name = "framekit", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a composition JSON and print a summary.
    Validate(ValidateArgs),
    /// Evaluate one frame and print its description as JSON.
    Frame(FrameArgs),
    /// Solve a layout shape and print the slot rectangles as JSON.
    Layout(LayoutArgs),
    /// Print a spring preset's progress curve and settle frame.
    Spring(SpringArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Shape name such as `2x2`, `split_vertical`, `main_left` or `pip_top_right`.
    #[arg(long)]
    shape: String,

    #[arg(long, default_value_t = 1920)]
    width: u32,

    #[arg(long, default_value_t = 1080)]
    height: u32,

    #[arg(long, default_value_t = 40.0)]
    padding: f64,

    #[arg(long, default_value_t = 20.0)]
    gap: f64,

    /// Requested slot count; defaults to the shape's capacity.
    #[arg(long)]
    slots: Option<usize>,
}

#[derive(Parser, Debug)]
struct SpringArgs {
    /// Preset name (gentle, smooth, bouncy, snappy, elastic).
    #[arg(long, default_value = "smooth")]
    preset: String,

    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Number of frames to sample.
    #[arg(long, default_value_t = 30)]
    frames: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Layout(args) => cmd_layout(args),
        Command::Spring(args) => cmd_spring(args),
    }
}

fn read_comp_json(path: &Path) -> anyhow::Result<framekit::Composition> {
    framekit::Composition::from_path(path)
        .with_context(|| format!("load composition '{}'", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("serialize output")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let comp = read_comp_json(&args.in_path)?;
    let timeline = framekit::Timeline::new(comp)?;
    let comp = timeline.composition();
    println!(
        "ok: {} scenes, {} frames at {}/{} fps, {}x{}",
        comp.scenes.len(),
        comp.duration.0,
        comp.fps.num,
        comp.fps.den,
        comp.canvas.width,
        comp.canvas.height
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = read_comp_json(&args.in_path)?;
    let timeline = framekit::Timeline::new(comp)?;
    let frame = timeline.eval_frame(framekit::FrameIndex(args.frame))?;

    let Some(out) = args.out else {
        return print_json(&frame);
    };

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(&out).with_context(|| format!("create '{}'", out.display()))?;
    serde_json::to_writer_pretty(f, &frame)
        .with_context(|| format!("write frame json '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let config = framekit::LayoutConfig {
        canvas: framekit::Canvas {
            width: args.width,
            height: args.height,
        },
        padding: args.padding,
        gap: args.gap,
        border_width: 0.0,
    };
    let shape = framekit::LayoutShape::from_name(&args.shape);
    let slots = framekit::compute_layout(&shape, args.slots, &config)?;

    let rows: Vec<serde_json::Value> = slots
        .iter()
        .map(|s| {
            serde_json::json!({
                "index": s.index,
                "z": s.z,
                "x": s.rect.x0,
                "y": s.rect.y0,
                "width": s.rect.width(),
                "height": s.rect.height(),
                "percent": s.percent(config.canvas),
            })
        })
        .collect();
    print_json(&serde_json::json!({ "shape": shape, "slots": rows }))
}

fn cmd_spring(args: SpringArgs) -> anyhow::Result<()> {
    let fps = framekit::Fps::new(args.fps, 1)?;
    let preset = framekit::SpringPreset::from_name(&args.preset);
    let config = preset.config();

    let curve: Vec<f64> = (0..=args.frames)
        .map(|f| framekit::spring_progress(f as i64, fps, &config))
        .collect();
    let settle = framekit::settle_frames(fps, &config, 0.001);

    print_json(&serde_json::json!({
        "preset": preset.name(),
        "config": config,
        "settle_frames": settle,
        "progress": curve,
    }))
}
