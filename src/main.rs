/*  Copyright 2026 the Conwayste Developers.
 *
 *  This file is part of lifeterm.
 *
 *  lifeterm is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  lifeterm is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with lifeterm.  If not, see <http://www.gnu.org/licenses/>. */

use std::io;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::*;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use lifeterm::config::{Args, Settings};
use lifeterm::shutdown::spawn_signal_listener;
use lifeterm::terminal::detect_grid_size;
use lifeterm::{BigBang, Renderer, RunSummary, Simulation};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    color_backtrace::install();

    let args = Args::parse();

    // stdout carries the frames, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = Settings::from_args(&args)?;
    if args.dump_config {
        println!("{:#?}", settings);
        return Ok(());
    }

    let summary = run(&settings).await?;
    info!("lifeterm exiting after {} generations", summary.generations);
    Ok(())
}

async fn run(settings: &Settings) -> anyhow::Result<RunSummary> {
    let size = detect_grid_size();
    let universe = BigBang::new()
        .width(size.width)
        .height(size.height)
        .density(settings.density)
        .seed_or_entropy(settings.seed)
        .birth()?;
    info!(
        "seed {} (pass --seed {} to replay), initial population {}",
        universe.seed(),
        universe.seed(),
        universe.population()
    );

    let shutdown = CancellationToken::new();
    let listener = spawn_signal_listener(shutdown.clone());

    let renderer = Renderer::new(io::stdout(), settings.style);
    let mut sim = Simulation::new(universe, renderer, settings.tick()).max_generations(settings.generations);
    let result = sim.run(shutdown.clone()).await;

    // lets the listener finish if we stopped for any other reason
    shutdown.cancel();
    if let Ok(Some(signal)) = listener.await {
        debug!("shutdown requested by {}", signal);
    }

    Ok(result?)
}
