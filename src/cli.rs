use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "hangterm")]
#[command(about = "🎩 Hangman in your terminal")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON word list: [{"word": "...", "hint": "..."}, ...]
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Seed the random source for reproducible rounds
    #[arg(long)]
    pub seed: Option<u64>,
}
