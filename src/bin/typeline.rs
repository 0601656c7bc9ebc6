use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "typeline", version)]
struct Cli {
    /// Log at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute timelines for a request and write them as JSON.
    Build(BuildArgs),
    /// Print a short overview of the timelines of a request.
    Summary(SummaryArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Font file used to measure text; approximate widths are used when absent or unreadable.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SummaryArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Font file used to measure text.
    #[arg(long)]
    font: Option<PathBuf>,
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
        Command::Build(args) => cmd_build(args),
        Command::Summary(args) => cmd_summary(args),
    }
}

fn load(
    in_path: &std::path::Path,
    font: Option<&std::path::Path>,
) -> anyhow::Result<typeline::TimelineSet> {
    let req = typeline::RenderRequest::from_path(in_path)?;
    let oracle = typeline::resolve_oracle(font);
    let set = req
        .build(oracle.as_ref())
        .with_context(|| format!("build timelines for '{}'", in_path.display()))?;
    Ok(set)
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let set = load(&args.in_path, args.font.as_deref())?;
    let json = set.to_json_pretty()?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write timelines '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_summary(args: SummaryArgs) -> anyhow::Result<()> {
    let set = load(&args.in_path, args.font.as_deref())?;
    println!("topology: {:?}", set.topology);
    for line in &set.lines {
        println!(
            "{}  {:>8.1} ms  begin={:<16} fill={:<6} keys={:<3} {:?}",
            line.index,
            line.total_duration_ms,
            line.begin.to_string(),
            line.fill_policy.as_fill_attr(),
            line.key_times.len(),
            line.text,
        );
    }
    if let Some(cursor) = &set.cursor {
        println!(
            "cursor  {:>8.1} ms  begin={:<16} keys={}",
            cursor.total_duration_ms,
            cursor.begin.to_string(),
            cursor.len()
        );
    }
    Ok(())
}
