use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "loep", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate the backdrop for a number of frames and save the last one as a PNG.
    Frame(FrameArgs),
    /// Render consecutive frames to a numbered PNG sequence.
    Sequence(SequenceArgs),
    /// Print the validated project catalog as JSON.
    Projects(ProjectsArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene config JSON; every field is optional.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width in CSS pixels.
    #[arg(long)]
    width: Option<f64>,

    /// Viewport height in CSS pixels.
    #[arg(long)]
    height: Option<f64>,

    /// Device pixel ratio.
    #[arg(long)]
    dpr: Option<f64>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Frames to simulate before capturing.
    #[arg(long, default_value_t = 1)]
    frames: u64,

    #[command(flatten)]
    scene: SceneArgs,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Directory receiving `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of frames to render.
    #[arg(long)]
    frames: u64,

    #[command(flatten)]
    scene: SceneArgs,
}

#[derive(Parser, Debug)]
struct ProjectsArgs {
    /// Projects JSON array. Defaults to the built-in list.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Projects(args) => cmd_projects(args),
    }
}

fn load_config(args: &SceneArgs) -> anyhow::Result<loep::SceneConfig> {
    let mut cfg = match &args.config {
        Some(path) => loep::SceneConfig::from_path(path)
            .with_context(|| format!("load scene config '{}'", path.display()))?,
        None => loep::SceneConfig::default(),
    };
    if let Some(w) = args.width {
        cfg.viewport.width = w;
    }
    if let Some(h) = args.height {
        cfg.viewport.height = h;
    }
    if let Some(dpr) = args.dpr {
        cfg.viewport.device_pixel_ratio = dpr;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    cfg.validate().context("invalid scene settings")?;
    Ok(cfg)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.scene)?;
    let frame = loep::render_still(&cfg, args.frames)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    loep::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.scene)?;
    let stats = loep::render_sequence(&cfg, args.frames, &args.out_dir)?;
    eprintln!(
        "wrote {} frames to {}",
        stats.frames_rendered,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_projects(args: ProjectsArgs) -> anyhow::Result<()> {
    let catalog = match &args.in_path {
        Some(path) => loep::ProjectCatalog::from_path(path)?,
        None => loep::ProjectCatalog::builtin(),
    };
    println!("{}", catalog.to_json_pretty()?);
    Ok(())
}
