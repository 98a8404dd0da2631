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

use std::ops::{Index, IndexMut};

/// One cell of the universe. `age` counts the consecutive generations this cell has survived; it
/// is always 0 for a dead cell and for a cell that was just born.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct Cell {
    pub alive: bool,
    pub age:   usize,
}

impl Cell {
    pub const DEAD: Cell = Cell { alive: false, age: 0 };
    pub const NEWBORN: Cell = Cell { alive: true, age: 0 };

    /// Applies the B3/S23 rule to this cell given its live neighbor count.
    ///
    /// Survivors age by one; births and deaths reset the age to 0.
    #[inline]
    pub fn next(self, live_neighbors: usize) -> Cell {
        match (self.alive, live_neighbors) {
            (true, 2) | (true, 3) => Cell {
                alive: true,
                age:   self.age + 1,
            },
            (false, 3) => Cell::NEWBORN,
            _ => Cell::DEAD,
        }
    }
}

/// Rows of cells. Indexing by `row` yields that row; `grid[row][col]` is a single cell.
#[derive(Debug, PartialEq, Clone)]
pub struct CellGrid(pub Vec<Vec<Cell>>);

impl CellGrid {
    /// Creates a new all-dead CellGrid of given dimensions.
    ///
    /// # Panics
    ///
    /// This function will panic if `width` or `height` are zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width != 0);
        assert!(height != 0);

        let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(height);
        for _ in 0..height {
            rows.push(vec![Cell::DEAD; width]);
        }
        CellGrid(rows)
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        if self.height() > 0 {
            self.0[0].len()
        } else {
            0
        }
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.0.len()
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.0
            .iter()
            .map(|row| row.iter().filter(|cell| cell.alive).count())
            .sum()
    }

    /// Calls callback on each live cell. Callback receives (col, row, cell).
    pub fn each_alive<F: FnMut(usize, usize, Cell)>(&self, mut callback: F) {
        for (row_idx, row) in self.0.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                if cell.alive {
                    callback(col_idx, row_idx, *cell);
                }
            }
        }
    }
}

impl Index<usize> for CellGrid {
    type Output = Vec<Cell>;

    fn index(&self, i: usize) -> &Vec<Cell> {
        &self.0[i]
    }
}

impl IndexMut<usize> for CellGrid {
    fn index_mut(&mut self, i: usize) -> &mut Vec<Cell> {
        &mut self.0[i]
    }
}
