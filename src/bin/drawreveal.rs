use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "drawreveal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the timing plan of an SVG as JSON.
    Plan(PlanArgs),
    /// Render a single instant of the reveal as a PNG.
    Frame(FrameArgs),
    /// Render the whole reveal as a numbered PNG sequence.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Input SVG.
    #[arg(long)]
    svg: PathBuf,

    /// Reveal configuration JSON (defaults apply to missing fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of silhouette shapes.
    #[arg(long)]
    keep: Option<usize>,

    /// Override the square output size in pixels.
    #[arg(long)]
    size: Option<u32>,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Milliseconds after `play` was asserted.
    #[arg(long)]
    at_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Background color (`#RRGGBB[AA]`); transparent when omitted.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Length to render; defaults to the time the reveal settles.
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Background color (`#RRGGBB[AA]`); transparent when omitted.
    #[arg(long)]
    background: Option<String>,

    /// Rasterize frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load(common: &CommonArgs) -> anyhow::Result<(drawreveal::Illustration, drawreveal::RevealConfig)> {
    let mut config = match &common.config {
        Some(path) => drawreveal::RevealConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => drawreveal::RevealConfig::default(),
    };
    if let Some(keep) = common.keep {
        config.keep = keep;
    }
    if let Some(size) = common.size {
        config.size = size;
    }
    config.validate()?;

    let illustration = drawreveal::Illustration::from_path(&common.svg)
        .with_context(|| format!("load svg '{}'", common.svg.display()))?;
    Ok((illustration, config))
}

fn session_opts(
    background: Option<&str>,
    parallel: bool,
) -> anyhow::Result<drawreveal::RevealSessionOpts> {
    let background = background
        .map(drawreveal::ColorDef::from_hex)
        .transpose()
        .context("parse --background")?
        .map(drawreveal::ColorDef::rgba8);
    Ok(drawreveal::RevealSessionOpts {
        parallel,
        renderer: drawreveal::CpuRendererOpts { background },
        ..Default::default()
    })
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let (illustration, config) = load(&args.common)?;
    let plan = drawreveal::plan_reveal(&illustration, &config);
    let json = serde_json::to_string_pretty(&plan).context("serialize plan")?;
    println!("{json}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (illustration, config) = load(&args.common)?;
    let opts = session_opts(args.background.as_deref(), false)?;
    let mut session = drawreveal::RevealSession::new(illustration, config, opts)?;
    session.play();
    let frame = session.frame_at(args.at_ms)?;

    ensure_parent(&args.out)?;
    drawreveal::write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    let (illustration, config) = load(&args.common)?;
    let opts = session_opts(args.background.as_deref(), args.parallel)?;
    let mut session = drawreveal::RevealSession::new(illustration, config, opts)?;

    let duration_ms = args.duration_ms.unwrap_or_else(|| session.settled_after_ms());
    let frame_count = duration_ms
        .checked_mul(u64::from(args.fps))
        .context("--duration-ms is too large for the requested --fps")?
        / 1000
        + 1;

    let mut sink = drawreveal::PngSequenceSink::new(&args.out_dir, "frame");
    session.render_range(args.fps, frame_count, &mut sink)?;
    eprintln!(
        "wrote {} frames to {}",
        sink.written().len(),
        args.out_dir.display()
    );
    Ok(())
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
