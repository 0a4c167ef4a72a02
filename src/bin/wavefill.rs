use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wavefill", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the surface at one point in time as a PNG.
    Frame(FrameArgs),
    /// Render a PNG sequence covering the configured duration.
    Frames(FramesArgs),
    /// Dump the generated wave texture as a PNG.
    Texture(TextureArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input wave config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Playback time in milliseconds since the animators started.
    #[arg(long, default_value_t = 0)]
    at_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input wave config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory receiving `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct TextureArgs {
    /// Input wave config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Texture(args) => cmd_texture(args),
    }
}

fn load(path: &Path) -> anyhow::Result<(wavefill::WaveConfig, wavefill::WaveSurface)> {
    let cfg = wavefill::WaveConfig::from_path(path)?;
    let surface = wavefill::WaveSurface::from_config(&cfg)
        .with_context(|| format!("build surface from '{}'", path.display()))?;
    Ok((cfg, surface))
}

fn make_backend(cfg: &wavefill::WaveConfig) -> anyhow::Result<Box<dyn wavefill::RenderBackend>> {
    Ok(wavefill::create_backend(
        wavefill::BackendKind::Cpu,
        &cfg.render_settings(),
    )?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (cfg, mut surface) = load(&args.in_path)?;
    let mut backend = make_backend(&cfg)?;

    surface.start_animators(Duration::ZERO);
    surface.advance(Duration::from_millis(args.at_ms));
    let frame = surface.render(backend.as_mut())?;

    write_png(&args.out, frame.width, frame.height, &frame.to_straight_rgba8())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let (cfg, mut surface) = load(&args.in_path)?;
    let mut backend = make_backend(&cfg)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let written = render_timeline(&cfg, &mut surface, backend.as_mut(), |idx, frame| {
        let path = args.out_dir.join(format!("frame_{idx:05}.png"));
        write_png(&path, frame.width, frame.height, &frame.to_straight_rgba8())
    })?;

    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

/// Step the animators through every frame of `cfg`'s duration, then end them and emit the
/// settled frame last. Returns the number of frames emitted.
fn render_timeline(
    cfg: &wavefill::WaveConfig,
    surface: &mut wavefill::WaveSurface,
    backend: &mut dyn wavefill::RenderBackend,
    mut emit: impl FnMut(u64, &wavefill::FrameRGBA) -> anyhow::Result<()>,
) -> anyhow::Result<u64> {
    let count = cfg.frame_count();
    surface.start_animators(Duration::ZERO);
    for idx in 0..count {
        surface.advance(cfg.fps.frame_time(idx));
        let frame = surface
            .render(backend)
            .with_context(|| format!("render frame {idx}"))?;
        emit(idx, &frame)?;
    }

    surface.end_animators();
    let frame = surface.render(backend).context("render settled frame")?;
    emit(count, &frame)?;
    Ok(count + 1)
}

fn cmd_texture(args: TextureArgs) -> anyhow::Result<()> {
    let (_, surface) = load(&args.in_path)?;
    let texture = surface
        .texture()
        .context("canvas is zero-size, no texture to write")?;

    write_png(
        &args.out,
        texture.width(),
        texture.height(),
        &texture.to_rgba8_straight(),
    )?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> anyhow::Result<()> {
    if width == 0 || height == 0 {
        anyhow::bail!("refusing to write empty {width}x{height} image '{}'", path.display());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        rgba,
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
