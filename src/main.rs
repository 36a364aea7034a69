use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hangterm::cli::Cli;
use hangterm::core::app::App;
use hangterm::game::catalog::WordCatalog;
use hangterm::game::engine::GameEngine;
use hangterm::game::rng::{RandomSource, SeededRandom, ThreadRandom};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let catalog = match &cli.words {
        Some(path) => WordCatalog::load(path)?,
        None => WordCatalog::builtin(),
    };

    let rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    let engine = GameEngine::new(catalog, rng);

    let terminal = ratatui::init();
    let result = App::new(engine).run(terminal).await;
    ratatui::restore();
    result
}
