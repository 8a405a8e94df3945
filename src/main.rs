use std::io;

use anyhow::Context;
use clap::Parser;
use log::info;

use maze_backtracker::grids::DEFAULT_DIMS;
use maze_backtracker::presenter::DEFAULT_FPS;
use maze_backtracker::{GeneratorConfig, Presenter};

/// Grows a perfect maze with a randomized depth-first search and draws it
/// in the terminal as it is carved.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_DIMS.0)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_DIMS.1)]
    height: usize,

    /// Square grid of this size, overrides width and height
    #[arg(long)]
    size: Option<usize>,

    #[arg(long, default_value_t = 0)]
    start_x: usize,

    #[arg(long, default_value_t = 0)]
    start_y: usize,

    /// Random seed for a reproducible maze
    #[arg(long)]
    seed: Option<u64>,

    /// Frames per second while animating, 0 for as fast as possible
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Skip the animation and print only the finished maze
    #[arg(long)]
    instant: bool,
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        let base = match self.size {
            Some(size) => GeneratorConfig::square(size),
            None => GeneratorConfig {
                width: self.width,
                height: self.height,
                ..GeneratorConfig::default()
            },
        };
        GeneratorConfig {
            start: (self.start_x, self.start_y),
            seed: self.seed,
            ..base
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.config();
    let mut generator = config
        .build()
        .with_context(|| format!("failed to set up maze generator from {:?}", config))?;

    let stdout = io::stdout();
    let mut presenter = Presenter::new(stdout.lock(), args.fps, !args.instant);
    let steps = presenter
        .run(&mut generator)
        .context("failed to draw maze")?;

    info!(
        "{}x{} maze finished in {} steps",
        config.width, config.height, steps
    );
    Ok(())
}
