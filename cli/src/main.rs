use clap::Parser;
use std::io;
use std::path::PathBuf;
use sweeper_core::{Board, RevealMode};

mod game;
mod input;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board to play, one row per line with `x` for mines and `o` for safe tiles
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reveal only the chosen tile, never its empty neighbors
    #[arg(long)]
    single_reveal: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut settings = match &args.config {
        Some(path) => settings::Settings::load(path)?,
        None => settings::Settings::default(),
    };
    if let Some(board) = args.board {
        settings.board = Some(board);
    }
    if args.single_reveal {
        settings.reveal_mode = RevealMode::Single;
    }

    let layout = settings.load_layout()?;
    let mut board = Board::with_reveal_mode(layout, settings.reveal_mode);
    log::debug!(
        "starting {:?} board with {} mines, {:?} reveal",
        board.bounds(),
        board.mine_count(),
        board.reveal_mode()
    );

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    game::play(&mut board, stdin, &mut stdout, &settings.prompt)?;

    Ok(())
}
