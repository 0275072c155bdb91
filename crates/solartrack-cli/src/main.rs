//! Solartrack CLI Application
//!
//! Command-line viewer for solar installation workflow progress.

mod args;
mod cli;
mod input;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use solartrack_core::Pipeline;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let pipeline = Pipeline::standard().context("Invalid pipeline definition")?;
    let renderer = TerminalRenderer::new(!no_color);

    info!(
        "Solartrack started with {} pipeline steps",
        pipeline.steps().len()
    );

    let cli = Cli::new(pipeline, renderer);
    match command {
        Commands::Show(args) => cli.show(args),
        Commands::Status(args) => cli.status(args),
        Commands::Summary(args) => cli.summary(args),
        Commands::Pipeline => cli.pipeline(),
        Commands::Schema => cli.schema(),
    }
}
