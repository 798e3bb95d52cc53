//! spark-grid demo - topic chips in a staggered grid
//!
//! Lays the topic chips out in a staggered grid under a heading aligned by
//! its first baseline, then prints the frame inline.
//!
//! Run with: cargo run -- --rows 3
//! Logs go to stderr, filtered by RUST_LOG (e.g. RUST_LOG=spark_grid=trace).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use spark_grid::{
    Attr, Chip, Column, Constraints, FirstBaselineToTop, FrameBuffer, GridConfig, InlineRenderer,
    Measurable, Paint, StaggeredGrid, TOPICS, Text, Widget,
};

/// Height budget handed to the column. Content below this is clipped.
const MAX_FRAME_HEIGHT: u32 = 200;

#[derive(Debug, Parser)]
#[command(name = "spark-grid", about = "Staggered grid of topic chips")]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of grid rows (overrides config and SPARK_GRID_ROWS)
    #[arg(short, long)]
    rows: Option<usize>,

    /// Layout width in cells (defaults to the terminal width)
    #[arg(short, long)]
    width: Option<u32>,

    /// Heading shown above the grid
    #[arg(long, default_value = "Hi there!")]
    heading: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            GridConfig::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => GridConfig::default(),
    };
    config.apply_env().context("applying environment overrides")?;
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(width) = args.width {
        config.max_width = Some(width);
    }
    config.validate().context("validating configuration")?;

    let width = match config.max_width {
        Some(width) => width,
        None => crossterm::terminal::size().map(|(w, _)| w as u32).unwrap_or(80),
    };
    tracing::info!(rows = config.rows, width, "laying out topics");

    let chips = TOPICS
        .iter()
        .map(|topic| Chip::new(*topic, config.chip_style()))
        .collect::<spark_grid::Result<Vec<_>>>()
        .context("building chips")?;
    let grid = StaggeredGrid::new(config.rows)?.with_children(chips);

    let heading = FirstBaselineToTop::new(
        Text::new(args.heading).with_attrs(Attr::BOLD),
        config.baseline_target(),
    )
    .with_density(config.density());

    let mut root: Column<Box<dyn Widget>> = Column::new();
    root.push(Box::new(heading));
    root.push(Box::new(grid));

    root.measure(Constraints::loose(width, MAX_FRAME_HEIGHT))
        .context("measuring layout")?;

    let (_, content_height) = root
        .placement()
        .map(|p| p.content_bounds())
        .unwrap_or((0, 0));
    let mut buffer = FrameBuffer::new(width, content_height.min(MAX_FRAME_HEIGHT));
    root.paint(&mut buffer, 0, 0);

    InlineRenderer::stdout().render(&buffer).context("writing frame")?;
    Ok(())
}
