use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{NaiveTime, TimeDelta};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use clockface::{CpuCanvas, FaceConfig, SpriteFrame, SurfaceSize, WatchFace};

#[derive(Parser, Debug)]
#[command(name = "clockface", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single face frame as a PNG.
    Frame(FrameArgs),
    /// Render consecutive frames as numbered PNGs.
    Strip(StripArgs),
}

#[derive(Args, Debug)]
struct FaceArgs {
    /// Directory of sprite frames; every `*.png` in lexical order.
    #[arg(long)]
    frames: PathBuf,

    /// Palette reference image (defaults to the first sprite frame).
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Surface width in pixels.
    #[arg(long)]
    width: u32,

    /// Surface height in pixels (defaults to the width).
    #[arg(long)]
    height: Option<u32>,

    /// Wall-clock time, `HH:MM:SS[.mmm]` (defaults to local now).
    #[arg(long)]
    time: Option<NaiveTime>,

    /// Low-power ambient mode.
    #[arg(long)]
    ambient: bool,

    /// Dimmed hands.
    #[arg(long)]
    muted: bool,

    /// Face config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// TTF/OTF font for hour labels; labels are skipped without one.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Sprite frames to skip before the first render.
    #[arg(long, default_value_t = 0)]
    advance: usize,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    face: FaceArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct StripArgs {
    #[command(flatten)]
    face: FaceArgs,

    /// Number of frames to render.
    #[arg(long)]
    count: u32,

    /// Clock advance between frames, in milliseconds.
    #[arg(long, default_value_t = 25)]
    step_ms: i64,

    /// Output directory for `frame_NNNN.png`.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Strip(args) => cmd_strip(args),
    }
}

struct Prepared {
    face: WatchFace,
    canvas: CpuCanvas,
    time: NaiveTime,
}

fn prepare(args: &FaceArgs) -> anyhow::Result<Prepared> {
    let frames = load_frames(&args.frames)?;
    let reference = match &args.reference {
        Some(path) => load_frame(path)?,
        None => frames
            .first()
            .cloned()
            .context("frame directory has no PNG files")?,
    };
    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            FaceConfig::from_json_str(&text)?
        }
        None => FaceConfig::default(),
    };

    let size = SurfaceSize::new(args.width, args.height.unwrap_or(args.width))?;
    let mut face = WatchFace::new(frames, reference, config, size)?;
    face.wait_palette();
    face.set_ambient(args.ambient);
    face.set_muted(args.muted);
    face.skip_frames(args.advance);

    let mut canvas = CpuCanvas::new(size)?;
    if let Some(path) = &args.font {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        canvas = canvas.with_font(&bytes)?;
    }

    let time = args
        .time
        .unwrap_or_else(|| chrono::Local::now().time());
    Ok(Prepared { face, canvas, time })
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let Prepared {
        mut face,
        mut canvas,
        time,
    } = prepare(&args.face)?;

    face.draw(&mut canvas, &time)?;
    write_png(&mut canvas, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_strip(args: StripArgs) -> anyhow::Result<()> {
    let Prepared {
        mut face,
        mut canvas,
        time,
    } = prepare(&args.face)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let step = TimeDelta::try_milliseconds(args.step_ms).context("step-ms out of range")?;
    let mut t = time;
    for i in 0..args.count {
        face.draw(&mut canvas, &t)?;
        let out = args.out_dir.join(format!("frame_{i:04}.png"));
        write_png(&mut canvas, &out)?;
        tracing::debug!(frame = i, time = %t, "strip frame written");
        t += step;
    }

    eprintln!("wrote {} frames to {}", args.count, args.out_dir.display());
    Ok(())
}

fn load_frame(path: &Path) -> anyhow::Result<SpriteFrame> {
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    clockface::decode_image(&bytes).with_context(|| format!("decode image '{}'", path.display()))
}

fn load_frames(dir: &Path) -> anyhow::Result<Vec<SpriteFrame>> {
    let mut paths = Vec::new();
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("read frame dir '{}'", dir.display()))?
    {
        let path = entry?.path();
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if is_png {
            paths.push(path);
        }
    }
    paths.sort();
    if paths.is_empty() {
        anyhow::bail!("no PNG frames in '{}'", dir.display());
    }

    paths.iter().map(|p| load_frame(p)).collect()
}

fn write_png(canvas: &mut CpuCanvas, out: &Path) -> anyhow::Result<()> {
    let frame = canvas.finish()?.into_straight();

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}
