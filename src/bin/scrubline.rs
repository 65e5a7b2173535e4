use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrubline::{FrameState, Progress, Timeline, TimelineDoc, scene::building, style::css};

#[derive(Parser, Debug)]
#[command(name = "scrubline", version)]
struct Cli {
    /// Log timeline construction and evaluation to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the evaluated state of a timeline document at one progress value as JSON.
    Sample(SampleArgs),
    /// Print inline styles of a timeline document at evenly spaced progress values.
    Trace(TraceArgs),
    /// Print the building-entry scene at one progress value.
    Building(BuildingArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Progress in [0, 1]; out-of-range values are clamped.
    #[arg(long, allow_negative_numbers = true)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of intervals between progress 0 and 1.
    #[arg(long, default_value_t = 10)]
    steps: u32,
}

#[derive(Parser, Debug)]
struct BuildingArgs {
    /// Progress in [0, 1]; out-of-range values are clamped.
    #[arg(long, allow_negative_numbers = true)]
    progress: f64,

    /// Print the state as JSON instead of inline styles.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Trace(args) => cmd_trace(args),
        Command::Building(args) => cmd_building(args),
    }
}

fn load(path: &std::path::Path) -> anyhow::Result<Timeline> {
    let doc = TimelineDoc::from_path(path)?;
    let tl = doc
        .into_timeline()
        .with_context(|| format!("build timeline from '{}'", path.display()))?;
    Ok(tl)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let tl = load(&args.in_path)?;
    let state = tl.apply(args.progress);
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps > 0, "--steps must be > 0");
    let tl = load(&args.in_path)?;
    for i in 0..=args.steps {
        let p = Progress::new(f64::from(i) / f64::from(args.steps));
        println!("progress {:.3} (t={:.3})", p.get(), tl.time_at(p));
        print_styles(&tl.apply(p));
    }
    Ok(())
}

fn cmd_building(args: BuildingArgs) -> anyhow::Result<()> {
    let tl = building::building_timeline()?;
    let state = tl.apply(args.progress);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_styles(&state);
    }
    Ok(())
}

fn print_styles(state: &FrameState) {
    for (target, props) in state.iter() {
        println!("  {target}: {}", css::inline_style(props));
    }
}
