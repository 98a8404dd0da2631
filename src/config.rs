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

use std::fs;
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;

use crate::constants::{DEFAULT_DENSITY, DEFAULT_LOG_LEVEL, DEFAULT_TICK_MS, MAX_TICK_MS, MIN_TICK_MS};
use crate::error::{LifeError, LifeResult};
use crate::render::RenderStyle;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, help = "Path to lifeterm.toml file.")]
    pub config_file: Option<String>,

    #[arg(long, help = "Seed for the initial random population.")]
    pub seed: Option<u64>,

    #[arg(long, help = "Probability of each cell starting alive (0 to 1).")]
    pub density: Option<f64>,

    #[arg(long, help = "Milliseconds between generations (80 to 100).")]
    pub tick_ms: Option<u64>,

    #[arg(long, help = "Exit after this many generations instead of waiting for a signal.")]
    pub generations: Option<usize>,

    #[arg(long, help = "Monochrome output; cells are not colored by age.")]
    pub plain: bool,

    #[arg(long, default_value = DEFAULT_LOG_LEVEL, help = "Log level used when RUST_LOG is unset.")]
    pub log_level: String,

    #[arg(long, help = "Dump configuration and then exit with success return code.")]
    pub dump_config: bool,
}

/// Contents of a `lifeterm.toml` file. Every key is optional.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub simulation: SimulationConfig,
    pub display:    DisplayConfig,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub seed:        Option<u64>,
    pub density:     Option<f64>,
    pub tick_ms:     Option<u64>,
    pub generations: Option<usize>,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub plain: Option<bool>,
}

/// Effective settings after merging command line, config file, and defaults, in that order of
/// precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub seed:        Option<u64>,
    pub density:     f64,
    pub tick_ms:     u64,
    pub generations: Option<usize>,
    pub style:       RenderStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            seed:        None,
            density:     DEFAULT_DENSITY,
            tick_ms:     DEFAULT_TICK_MS,
            generations: None,
            style:       RenderStyle::Aged,
        }
    }
}

pub fn config_from_str(path: &str, contents: &str) -> LifeResult<FileConfig> {
    toml::from_str(contents).map_err(|e| LifeError::Config {
        path:   path.to_owned(),
        reason: e.to_string(),
    })
}

pub fn config_from_file(path: &str) -> LifeResult<FileConfig> {
    let contents = fs::read_to_string(path).map_err(|e| LifeError::Config {
        path:   path.to_owned(),
        reason: e.to_string(),
    })?;
    config_from_str(path, &contents)
}

impl Settings {
    /// Builds settings from parsed arguments, reading the config file if one was given.
    pub fn from_args(args: &Args) -> LifeResult<Settings> {
        let file = match args.config_file {
            Some(ref path) => config_from_file(path)?,
            None => FileConfig::default(),
        };
        Settings::merge(args, &file)
    }

    /// Command line values win over file values, which win over defaults.
    pub fn merge(args: &Args, file: &FileConfig) -> LifeResult<Settings> {
        let defaults = Settings::default();
        let sim = &file.simulation;
        let plain = args.plain || file.display.plain.unwrap_or(false);
        let settings = Settings {
            seed:        args.seed.or(sim.seed),
            density:     args.density.or(sim.density).unwrap_or(defaults.density),
            tick_ms:     args.tick_ms.or(sim.tick_ms).unwrap_or(defaults.tick_ms),
            generations: args.generations.or(sim.generations),
            style:       if plain { RenderStyle::Plain } else { RenderStyle::Aged },
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> LifeResult<()> {
        use LifeError::*;
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&self.tick_ms) {
            return Err(InvalidData {
                reason: format!(
                    "Tick must be between {} and {} ms, got {}",
                    MIN_TICK_MS, MAX_TICK_MS, self.tick_ms
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(InvalidData {
                reason: format!("Density must be between 0 and 1, got {}", self.density),
            });
        }
        Ok(())
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
