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

use std::fmt::Display;
use std::io;

use crossterm::terminal;
use crossterm::tty::IsTty;
use tracing::*;

use crate::constants::{FALLBACK_COLUMNS, FALLBACK_ROWS, RESERVED_ROWS};

/// Grid dimensions derived from the terminal, in cells.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct GridSize {
    pub width:    usize,
    pub height:   usize,
    /// true if the terminal could not be queried and the 80x24 default was used
    pub fallback: bool,
}

impl GridSize {
    /// Turns a (columns, rows) terminal size into grid dimensions, keeping `RESERVED_ROWS` rows
    /// free. `None`, or a terminal too small to hold a single row, yields the fallback size.
    pub fn from_terminal(size: Option<(u16, u16)>) -> GridSize {
        match size {
            Some((cols, rows)) if cols > 0 && rows > RESERVED_ROWS => GridSize {
                width:    cols as usize,
                height:   (rows - RESERVED_ROWS) as usize,
                fallback: false,
            },
            _ => GridSize {
                width:    FALLBACK_COLUMNS as usize,
                height:   (FALLBACK_ROWS - RESERVED_ROWS) as usize,
                fallback: true,
            },
        }
    }
}

/// Sizes the grid from the terminal stdout is attached to. Never fails; see `grid_size_for`.
pub fn detect_grid_size() -> GridSize {
    let grid_size = grid_size_for(io::stdout().is_tty(), terminal::size);
    info!(
        "grid is {}x{}{}",
        grid_size.width,
        grid_size.height,
        if grid_size.fallback { " (fallback)" } else { "" }
    );
    grid_size
}

/// Only asks `query` for a size when stdout is a terminal; frames sent to a pipe or a file get the
/// fallback size even if a controlling terminal exists.
pub fn grid_size_for<F, E>(stdout_is_tty: bool, query: F) -> GridSize
where
    F: FnOnce() -> Result<(u16, u16), E>,
    E: Display,
{
    if !stdout_is_tty {
        debug!("stdout is not a terminal, using {}x{}", FALLBACK_COLUMNS, FALLBACK_ROWS);
        return GridSize::from_terminal(None);
    }
    let size = match query() {
        Ok(size) => Some(size),
        Err(e) => {
            debug!("terminal size unavailable ({}), using {}x{}", e, FALLBACK_COLUMNS, FALLBACK_ROWS);
            None
        }
    };
    GridSize::from_terminal(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_is_reserved() {
        assert_eq!(
            GridSize::from_terminal(Some((120, 40))),
            GridSize {
                width:    120,
                height:   39,
                fallback: false,
            }
        );
    }

    #[test]
    fn missing_terminal_falls_back_to_80x24() {
        assert_eq!(
            GridSize::from_terminal(None),
            GridSize {
                width:    80,
                height:   23,
                fallback: true,
            }
        );
    }

    #[test]
    fn degenerate_terminal_falls_back() {
        assert!(GridSize::from_terminal(Some((0, 40))).fallback);
        assert!(GridSize::from_terminal(Some((80, 1))).fallback);
        assert!(!GridSize::from_terminal(Some((1, 2))).fallback);
    }

    #[test]
    fn redirected_stdout_ignores_controlling_terminal() {
        let mut queried = false;
        let size = grid_size_for(false, || -> Result<(u16, u16), io::Error> {
            queried = true;
            Ok((120, 40))
        });
        assert!(!queried);
        assert_eq!(
            size,
            GridSize {
                width:    80,
                height:   23,
                fallback: true,
            }
        );
    }

    #[test]
    fn tty_stdout_uses_queried_size() {
        let size = grid_size_for(true, || -> Result<(u16, u16), io::Error> { Ok((100, 30)) });
        assert_eq!(
            size,
            GridSize {
                width:    100,
                height:   29,
                fallback: false,
            }
        );
    }

    #[test]
    fn failed_query_falls_back() {
        let size = grid_size_for(true, || -> Result<(u16, u16), io::Error> {
            Err(io::ErrorKind::Other.into())
        });
        assert!(size.fallback);
        assert_eq!((size.width, size.height), (80, 23));
    }
}
