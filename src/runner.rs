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

use std::io::Write;
use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::*;

use crate::error::LifeResult;
use crate::render::Renderer;
use crate::universe::Universe;

/// Why `Simulation::run` returned.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum StopReason {
    /// The shutdown token was cancelled (normally by SIGINT/SIGTERM).
    Cancelled,
    /// The configured number of generations was drawn.
    GenerationLimit,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct RunSummary {
    /// Frames drawn, which is also the number of times the universe advanced.
    pub generations: usize,
    pub reason:      StopReason,
}

/// The render-then-advance loop.
pub struct Simulation<W: Write> {
    universe:        Universe,
    renderer:        Renderer<W>,
    tick:            Duration,
    max_generations: Option<usize>,
}

impl<W: Write> Simulation<W> {
    pub fn new(universe: Universe, renderer: Renderer<W>, tick: Duration) -> Self {
        Simulation {
            universe,
            renderer,
            tick,
            max_generations: None,
        }
    }

    /// Stop on our own after this many generations. `None` runs until cancelled.
    pub fn max_generations(mut self, limit: Option<usize>) -> Self {
        self.max_generations = limit;
        self
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Clears the screen, then draws and advances once per tick until `shutdown` is cancelled or
    /// the generation limit is hit. Cancellation is checked before every tick and wins over a tick
    /// that is due at the same time. The terminal is restored on every return path.
    pub async fn run(&mut self, shutdown: CancellationToken) -> LifeResult<RunSummary> {
        self.renderer.begin()?;

        // first frame one tick after the screen is cleared
        let mut ticker = time::interval_at(Instant::now() + self.tick, self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut generations = 0;

        let reason = loop {
            if let Some(limit) = self.max_generations {
                if generations >= limit {
                    break StopReason::GenerationLimit;
                }
            }

            tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    break StopReason::Cancelled;
                }
                _ = ticker.tick() => {
                    self.renderer.draw(&self.universe)?;
                    self.universe.next();
                    generations += 1;
                }
            }
        };

        if reason == StopReason::Cancelled {
            self.renderer.farewell()?;
        }
        self.renderer.restore()?;
        info!(
            "stopped after {} generations ({:?}), final population {}",
            generations,
            reason,
            self.universe.population()
        );
        Ok(RunSummary { generations, reason })
    }
}
