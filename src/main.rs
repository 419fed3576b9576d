//! sgf-quadrants: draw the setup stones of an SGF record as four board images.
//!
//! ## Usage
//!
//! - `sgf-quadrants` - Render built-in sample 2 into the current directory
//! - `sgf-quadrants render game.sgf -o out/` - Render a file, one PNG per quadrant
//! - `sgf-quadrants stones game.sgf` - Print the parsed position as text
//!
//! Use `-v` / `-vv` (or `RUST_LOG`) for more log output.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{debug, info, warn};

use sgf_quadrants::board::{Board, Color, duplicate_points};
use sgf_quadrants::constants::{BOARD_SIZE, MAX_BOARD_SIZE, OUTPUT_PREFIX};
use sgf_quadrants::region::plan_quadrants;
use sgf_quadrants::render::{RenderStyle, encode_png, render_regions};
use sgf_quadrants::samples::sample;
use sgf_quadrants::sgf::{Stone, board_size, parse_sized};

/// Render the setup stones of an SGF record as quadrant images
#[derive(Parser)]
#[command(name = "sgf-quadrants")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one PNG per board quadrant
    Render(RenderArgs),
    /// Print the parsed stones and the board as text
    Stones(InputArgs),
}

#[derive(Args, Default)]
struct InputArgs {
    /// SGF file to read, or "-" for stdin. Defaults to a built-in sample.
    input: Option<PathBuf>,

    /// Built-in sample to use when no input is given (1 or 2) [default: 2]
    #[arg(long)]
    sample: Option<usize>,

    /// Board size. Defaults to the SZ property, or 19.
    #[arg(long)]
    board_size: Option<usize>,
}

#[derive(Args, Default)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Directory for the images [default: .]
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// File name prefix; images are written as <prefix>_<region>.png [default: goboard]
    #[arg(long)]
    prefix: Option<String>,

    /// Distance between grid lines in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Space around the grid in pixels
    #[arg(long)]
    margin: Option<u32>,

    /// Stone diameter in pixels
    #[arg(long)]
    stone_size: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Render(args)) => run_render(&args),
        Some(Commands::Stones(args)) => run_stones(&args),
        None => run_render(&RenderArgs::default()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .init();
}

/// Read the SGF text and work out the board size.
fn load(args: &InputArgs) -> Result<(String, usize)> {
    let text = match args.input.as_deref() {
        Some(path) if path == Path::new("-") => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read SGF from stdin")?;
            text
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let n = args.sample.unwrap_or(2);
            let Some(text) = sample(n) else {
                bail!("no built-in sample {n} (choose 1 or 2)");
            };
            info!("using built-in sample {n}");
            text.to_string()
        }
    };

    let size = args
        .board_size
        .or_else(|| board_size(&text))
        .unwrap_or(BOARD_SIZE);
    if size == 0 || size > MAX_BOARD_SIZE {
        bail!("board size {size} is not supported (1..={MAX_BOARD_SIZE})");
    }
    debug!("board size {size}");
    Ok((text, size))
}

fn parse_stones(text: &str, size: usize) -> Vec<Stone> {
    let stones = parse_sized(text, size);
    if stones.is_empty() {
        warn!("no AB/AW stones found in input");
    }
    for (column, row) in duplicate_points(&stones) {
        warn!("more than one stone at column {column}, row {row}");
    }
    stones
}

fn run_render(args: &RenderArgs) -> Result<()> {
    let (text, size) = load(&args.input)?;
    let stones = parse_stones(&text, size);
    info!("parsed {} stones", stones.len());

    let mut style = RenderStyle::for_board_size(size);
    if let Some(v) = args.cell_size {
        style.cell_size = v;
    }
    if let Some(v) = args.margin {
        style.margin = v;
    }
    if let Some(v) = args.stone_size {
        style.stone_diameter = v;
    }

    let out_dir = args.out_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let prefix = args.prefix.as_deref().unwrap_or(OUTPUT_PREFIX);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let images = render_regions(&plan_quadrants(size), &stones, &style)?;
    for rendered in &images {
        let bytes = encode_png(&rendered.image)?;
        let path = out_dir.join(format!("{prefix}_{}.png", rendered.label));
        fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
        info!(
            "{}: {}x{}",
            rendered.label,
            rendered.image.width(),
            rendered.image.height()
        );
        println!("Saved: {}", path.display());
    }
    Ok(())
}

fn run_stones(args: &InputArgs) -> Result<()> {
    let (text, size) = load(args)?;
    let stones = parse_stones(&text, size);
    let board = Board::from_stones(size, &stones);

    print!("{board}");
    println!(
        "Black: {}  White: {}",
        board.count(Color::Black),
        board.count(Color::White)
    );
    for region in plan_quadrants(size) {
        let listed: Vec<String> = region.stones(&stones).map(|s| s.to_string()).collect();
        println!("{:>12} ({:>2}): {}", region.label, listed.len(), listed.join(" "));
    }
    Ok(())
}
