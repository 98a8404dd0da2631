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

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::*;

use crate::constants::DEFAULT_DENSITY;
use crate::error::{LifeError, LifeResult};
use crate::grids::{Cell, CellGrid};

/// Builder paradigm to create `Universe` structs with default values.
pub struct BigBang {
    width:   usize,
    height:  usize,
    density: f64,
    seed:    Option<u64>,
    random:  bool,
}

/// This is a builder for `Universe` structs.
///
/// # Examples
///
/// ```
/// let uni = lifeterm::universe::BigBang::new()
///             .width(80)       // optionally override width
///             .height(23)      // optionally override height
///             .seed(1234)      // reproducible initial state
///             .birth()
///             .unwrap();
/// assert_eq!(uni.latest_gen(), 1);
/// ```
impl BigBang {
    /// Creates and returns a new builder.
    pub fn new() -> BigBang {
        BigBang {
            width:   80,
            height:  23,
            density: DEFAULT_DENSITY,
            seed:    None,
            random:  true,
        }
    }

    /// Update the total number of columns for this Universe
    pub fn width(mut self, new_width: usize) -> BigBang {
        self.width = new_width;
        self
    }

    /// Update the total number of rows for this Universe
    pub fn height(mut self, new_height: usize) -> BigBang {
        self.height = new_height;
        self
    }

    /// Probability that any one cell starts out alive. Cells are seeded independently.
    pub fn density(mut self, new_density: f64) -> BigBang {
        self.density = new_density;
        self
    }

    /// Seeds the random number generator used for the first generation. Without a seed, one is
    /// drawn from the OS entropy source and can be read back with `Universe::seed`.
    pub fn seed(mut self, new_seed: u64) -> BigBang {
        self.seed = Some(new_seed);
        self
    }

    /// Like `seed`, but `None` leaves seeding to the OS entropy source.
    pub fn seed_or_entropy(mut self, new_seed: Option<u64>) -> BigBang {
        self.seed = new_seed;
        self
    }

    /// Skip random seeding entirely; every cell starts dead. Used for hand-built fixtures.
    pub fn empty(mut self) -> BigBang {
        self.random = false;
        self
    }

    /// "Gives life to the universe and the first moment of time."
    /// Creates a Universe which can then CGoL process generations.
    ///
    /// # Errors
    ///
    /// - if `width` or `height` are not positive.
    /// - if `density` is not within `0.0..=1.0`.
    pub fn birth(&self) -> LifeResult<Universe> {
        use LifeError::*;
        if self.width == 0 {
            return Err(InvalidData {
                reason: "Width must be positive".to_owned(),
            });
        }
        if self.height == 0 {
            return Err(InvalidData {
                reason: "Height must be positive".to_owned(),
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(InvalidData {
                reason: format!("Density must be between 0 and 1, got {}", self.density),
            });
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        let mut uni = Universe::new(self.width, self.height, seed);
        if self.random {
            let mut rng = StdRng::seed_from_u64(seed);
            let cells = &mut uni.gen_states[uni.state_index];
            for row in cells.0.iter_mut() {
                for cell in row.iter_mut() {
                    if rng.gen_bool(self.density) {
                        *cell = Cell::NEWBORN;
                    }
                }
            }
        }
        debug!(
            "Universe born: {}x{}, seed {}, population {}",
            uni.width,
            uni.height,
            seed,
            uni.population()
        );
        Ok(uni)
    }
}

impl Default for BigBang {
    fn default() -> Self {
        BigBang::new()
    }
}

/// Represents a wrapping universe in Conway's game of life.
///
/// Two equally sized buffers are allocated up front. `state_index` selects the one holding the
/// current generation; the other receives the next generation, after which the index flips.
pub struct Universe {
    width:       usize,
    height:      usize,
    generation:  usize,          // current generation (1-based)
    seed:        u64,            // RNG seed used for generation 1
    state_index: usize,          // index of the current generation within gen_states
    gen_states:  [CellGrid; 2],  // double buffer
}

/// Counts the live cells among the 8 neighbors of (`col`, `row`), wrapping around every edge.
///
/// # Panics
///
/// Panics if `col` or `row` are out of range.
#[inline]
pub fn neighbor_count(grid: &CellGrid, col: usize, row: usize) -> usize {
    let (width, height) = (grid.width(), grid.height());
    let mut count = 0;
    // offsets are biased by +1 so that -1 becomes `width - 1` (resp. `height - 1`) under modulo
    for dy in 0..3 {
        let ny = (row + height + dy - 1) % height;
        for dx in 0..3 {
            if dx == 1 && dy == 1 {
                continue;
            }
            let nx = (col + width + dx - 1) % width;
            if grid[ny][nx].alive {
                count += 1;
            }
        }
    }
    count
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.current().0.iter() {
            let mut s = String::with_capacity(self.width);
            for cell in row {
                s.push(if cell.alive { '*' } else { ' ' });
            }
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}

impl Universe {
    /// Instantiate a new blank universe with the given width and height, in cells.
    /// The universe is at generation 1.
    ///
    /// **Note**: use `BigBang` to build a `Universe`; it validates dimensions and seeds the cells.
    fn new(width: usize, height: usize, seed: u64) -> Universe {
        Universe {
            width,
            height,
            generation: 1,
            seed,
            state_index: 0,
            gen_states: [CellGrid::new(width, height), CellGrid::new(width, height)],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The seed the first generation was drawn from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the latest generation number (1-based).
    pub fn latest_gen(&self) -> usize {
        assert!(self.generation != 0);
        self.generation
    }

    /// The grid holding the current generation.
    pub fn current(&self) -> &CellGrid {
        &self.gen_states[self.state_index]
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.current().population()
    }

    /// Gets the cell at (`col`, `row`) in the current generation.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` are out of range.
    pub fn get_cell(&self, col: usize, row: usize) -> Cell {
        self.current()[row][col]
    }

    /// Sets a cell in the current generation. A cell set alive starts at age 0.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` are out of range.
    pub fn set_unchecked(&mut self, col: usize, row: usize, alive: bool) {
        let cell = if alive { Cell::NEWBORN } else { Cell::DEAD };
        self.gen_states[self.state_index][row][col] = cell;
    }

    /// Live neighbor count of (`col`, `row`) in the current generation.
    pub fn neighbor_count(&self, col: usize, row: usize) -> usize {
        neighbor_count(self.current(), col, row)
    }

    fn borrow_current_and_next(&mut self) -> (&CellGrid, &mut CellGrid) {
        let (p0, p1) = self.gen_states.split_at_mut(1);
        if self.state_index == 0 {
            (&p0[0], &mut p1[0])
        } else {
            (&p1[0], &mut p0[0])
        }
    }

    /// Computes the next generation into the spare buffer, then makes it current. Returns the new
    /// generation number.
    pub fn next(&mut self) -> usize {
        let (width, height) = (self.width, self.height);
        {
            let (cells, cells_next) = self.borrow_current_and_next();
            for row_idx in 0..height {
                for col_idx in 0..width {
                    let neighbors = neighbor_count(cells, col_idx, row_idx);
                    cells_next[row_idx][col_idx] = cells[row_idx][col_idx].next(neighbors);
                }
            }
        }

        self.state_index = 1 - self.state_index;
        self.generation += 1;
        trace!("generation {} population {}", self.generation, self.population());
        self.generation
    }
}
