//! `mirrorbox` — runs a particle through a mirror box from the command line.
//!
//! **Usage:**
//! ```text
//! mirrorbox --width 5 --height 5 --mirror CC/ --mirror 'AB\' --entry '>C'
//! mirrorbox --config box.json [--all] [--path] [--max-ticks N]
//! ```
//!
//! Prints the rendered box, then the exit for each entry. Exits non-zero on the first error.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use mirrorbox::{
    max_ticks, simulate, simulate_all, simulate_with_limit, trace, BoxConfig, EdgeDescriptor, MirrorBox, Outcome,
};

/// Simulate a particle bouncing through a box of diagonal mirrors.
#[derive(Parser)]
#[command(name = "mirrorbox", about = "Simulate a particle bouncing through a box of diagonal mirrors")]
struct Args {
    /// JSON box description; flags below are merged into it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Box width, 3 to 26.
    #[arg(long)]
    width: Option<String>,

    /// Box height, 3 to 26.
    #[arg(long)]
    height: Option<String>,

    /// Mirror placement such as `CB/` (column, row, kind). Repeatable.
    #[arg(long = "mirror")]
    mirrors: Vec<String>,

    /// Entry such as `>C`. Repeatable.
    #[arg(long = "entry")]
    entries: Vec<String>,

    /// Simulate every edge cell.
    #[arg(long)]
    all: bool,

    /// Print the box with the particle's path marked for each entry.
    #[arg(long)]
    path: bool,

    /// Stop a run after this many ticks and report it as trapped.
    #[arg(long)]
    max_ticks: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => BoxConfig::from_file(path)?,
        None => BoxConfig::default(),
    };
    if let Some(width) = &args.width {
        config.width = MirrorBox::parse_dimension("width", width)?;
    }
    if let Some(height) = &args.height {
        config.height = MirrorBox::parse_dimension("height", height)?;
    }
    config.mirrors.extend(args.mirrors.iter().cloned());
    config.entries.extend(args.entries.iter().cloned());

    let mirror_box = config.build().context("building the box")?;
    println!("{}", mirror_box);

    if args.all {
        for (entry, exit) in simulate_all(&mirror_box) {
            println!("{} -> {}", entry, exit);
        }
        return Ok(());
    }

    let entries = config.entry_descriptors(&mirror_box)?;
    if entries.is_empty() {
        bail!("no entry given; pass --entry, --all, or entries in the config");
    }
    for entry in entries {
        run(&mirror_box, entry, &args)?;
    }
    Ok(())
}

fn run(mirror_box: &MirrorBox, entry: EdgeDescriptor, args: &Args) -> Result<()> {
    if args.path {
        let limit = args.max_ticks.unwrap_or_else(|| max_ticks(mirror_box));
        let path = trace(mirror_box, entry, limit)?;
        println!("{}", mirror_box.render_path(&path));
    }
    match args.max_ticks {
        Some(limit) => match simulate_with_limit(mirror_box, entry, limit)? {
            Outcome::Exit { exit, .. } => println!("{}", exit),
            Outcome::Trapped { ticks } => eprintln!("{}: no exit found after {} ticks", entry, ticks),
        },
        None => println!("{}", simulate(mirror_box, entry)?),
    }
    Ok(())
}
