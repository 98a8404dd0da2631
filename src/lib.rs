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

//! Conway's Game of Life on a wrapping grid sized to the terminal, drawn as colored text frames.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod grids;
pub mod render;
pub mod runner;
pub mod shutdown;
pub mod terminal;
pub mod universe;

pub use error::{LifeError, LifeResult};

pub use grids::{Cell, CellGrid};
pub use render::{RenderStyle, Renderer};
pub use runner::{RunSummary, Simulation, StopReason};
pub use universe::{BigBang, Universe};

#[cfg(test)]
pub mod tests;
