use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use life::{Board, BoardConfig};

/// Run a toroidal Game of Life in the terminal and report blocks and boxes.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with width, height, cellSize, liveDensity and optional seed.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed grid, one line per row, '1' for a live cell.
    #[arg(long, default_value = "input.txt")]
    seed: PathBuf,

    /// Keep the random start instead of reading the seed file.
    #[arg(long)]
    random: bool,

    /// Number of generations to render.
    #[arg(long, default_value_t = 15)]
    generations: u32,

    /// Pause between generations.
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<BoardConfig> {
    let Some(path) = path else {
        return Ok(BoardConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parse config {}", path.display()))
}

fn parse_config(text: &str) -> anyhow::Result<BoardConfig> {
    Ok(serde_json::from_str(text)?)
}

/// Clear the screen and draw the board, `*` for a live cell.
fn render(board: &Board) -> String {
    let mut frame = String::with_capacity((board.columns() + 1) * board.rows() + 8);
    frame.push_str("\x1b[H\x1b[J");
    for row in board.iter_rows() {
        frame.extend(row.iter().map(|cell| if cell.is_alive() { '*' } else { ' ' }));
        frame.push('\n');
    }
    frame
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let mut board = Board::new(&config).context("create board")?;
    if !args.random {
        let seed = fs::read_to_string(&args.seed).with_context(|| format!("read seed {}", args.seed.display()))?;
        board
            .read_seed(&seed)
            .with_context(|| format!("apply seed {}", args.seed.display()))?;
    }
    log::info!(
        "running {} generations on a {}x{} board",
        args.generations,
        board.columns(),
        board.rows()
    );

    let delay = Duration::from_millis(args.delay_ms);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..args.generations {
        out.write_all(render(&board).as_bytes())?;
        out.flush()?;
        if !board.advance() {
            log::debug!("board is stable at generation {}", board.generation());
        }
        thread::sleep(delay);
    }

    let census = board.census();
    log::info!("finished after {} generations", board.generation());
    writeln!(out, "{census}")?;
    Ok(())
}
