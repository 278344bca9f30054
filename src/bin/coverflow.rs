use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "coverflow", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the default configuration as JSON.
    Defaults,
    /// List the tunable parameters with their panel ranges.
    Params(ConfigArgs),
    /// Run the controller headless and dump per-frame snapshots as JSON.
    Simulate(SimulateArgs),
    /// Print slide transforms for a fixed controller position.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Configuration JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override a parameter, e.g. `--set vMax=20` (repeatable).
    #[arg(long = "set", value_parser = parse_override)]
    overrides: Vec<(coverflow::Tunable, f64)>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Simulated frame rate; at least 30, since slower frames would be clamped to 1/30 s.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Simulated duration in seconds (at most 1,000,000 frames).
    #[arg(long, default_value_t = 1.0)]
    seconds: f64,

    /// Slide to select before the first frame.
    #[arg(long, allow_hyphen_values = true)]
    target: Option<i64>,

    /// Change the selection at a frame, as `FRAME:INDEX` (repeatable).
    #[arg(long, value_parser = parse_retarget)]
    retarget: Vec<(u64, i64)>,

    /// Omit per-slide transforms from the output.
    #[arg(long, default_value_t = false)]
    no_slides: bool,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Controller position the slides are laid out around.
    #[arg(long, allow_hyphen_values = true)]
    position: f64,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Upper bound on frames a single `simulate` run will produce.
const MAX_SIMULATED_FRAMES: u64 = 1_000_000;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Defaults => cmd_defaults(),
        Command::Params(args) => cmd_params(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn parse_override(s: &str) -> Result<(coverflow::Tunable, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let t = name
        .trim()
        .parse::<coverflow::Tunable>()
        .map_err(|e| e.to_string())?;
    let v = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad value for {name}: {e}"))?;
    Ok((t, v))
}

fn parse_retarget(s: &str) -> Result<(u64, i64), String> {
    let (frame, index) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FRAME:INDEX, got '{s}'"))?;
    let frame = frame
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("bad frame '{frame}': {e}"))?;
    let index = index
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("bad index '{index}': {e}"))?;
    Ok((frame, index))
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<coverflow::CoverflowConfig> {
    let mut config = match &args.config {
        Some(path) => coverflow::CoverflowConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => coverflow::CoverflowConfig::default(),
    };
    for &(t, v) in &args.overrides {
        let stored = config.set(t, v)?;
        if stored != v {
            eprintln!("note: {t} clamped from {v} to {stored}");
        }
    }
    Ok(config)
}

fn open_output(out: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    let Some(path) = out else {
        return Ok(Box::new(BufWriter::new(std::io::stdout().lock())));
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(Box::new(BufWriter::new(f)))
}

fn write_json<T: serde::Serialize>(out: Option<&Path>, value: &T) -> anyhow::Result<()> {
    let mut w = open_output(out)?;
    serde_json::to_writer_pretty(&mut w, value).context("serialize output JSON")?;
    writeln!(w)?;
    w.flush()?;
    if let Some(path) = out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_defaults() -> anyhow::Result<()> {
    let json = coverflow::CoverflowConfig::default().to_json_pretty()?;
    println!("{json}");
    Ok(())
}

fn cmd_params(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    println!(
        "{:<20} {:<20} {:>8} {:>8} {:>10}",
        "name", "field", "min", "max", "value"
    );
    for t in coverflow::Tunable::ALL {
        let (lo, hi) = t.range();
        println!(
            "{:<20} {:<20} {:>8} {:>8} {:>10}",
            t.name(),
            t.field_name(),
            lo,
            hi,
            config.get(t)
        );
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = load_config(&args.config)?;
    let fps = coverflow::Fps::new(args.fps)?;
    anyhow::ensure!(
        !fps.is_clamped(),
        "--fps {} is below 30; each frame would be clamped to 1/30 s",
        fps.get()
    );
    anyhow::ensure!(
        args.seconds.is_finite() && args.seconds >= 0.0,
        "--seconds must be a non-negative number"
    );
    let frames = fps.frames_in(args.seconds);
    anyhow::ensure!(
        frames <= MAX_SIMULATED_FRAMES,
        "--seconds {} at {} fps is {frames} frames; the limit is {MAX_SIMULATED_FRAMES}",
        args.seconds,
        fps.get()
    );

    let mut sess = coverflow::CoverflowSession::new(config)?;
    if let Some(target) = args.target {
        sess.select(target);
    }

    let delta = fps.frame_delta_secs();
    let mut snapshots = Vec::new();
    for frame in 0..frames {
        for &(_, index) in args.retarget.iter().filter(|(f, _)| *f == frame) {
            sess.select(index);
        }
        let mut snap = sess.tick(delta);
        if args.no_slides {
            snap.slides.clear();
        }
        snapshots.push(snap);
    }

    tracing::info!(
        frames,
        simulated_secs = fps.elapsed_secs(frames),
        position = sess.state().position,
        target = sess.target_index(),
        "simulation finished"
    );
    write_json(args.out.as_deref(), &snapshots)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let config = load_config(&args.config)?;
    anyhow::ensure!(args.position.is_finite(), "--position must be finite");

    let state = coverflow::ControllerState::new(args.position, 0.0);
    let slides: Vec<_> =
        coverflow::slide_transforms(config.slide_count, &state, &config.shape).collect();
    write_json(args.out.as_deref(), &slides)
}
