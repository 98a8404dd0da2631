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

/// Terminal size used when the output is not a terminal or the query fails.
pub const FALLBACK_COLUMNS: u16 = 80;
pub const FALLBACK_ROWS: u16 = 24;

/// Rows left free below the grid so the last row's newline doesn't scroll the screen.
pub const RESERVED_ROWS: u16 = 1;

pub const DEFAULT_DENSITY: f64 = 0.25;

pub const DEFAULT_TICK_MS: u64 = 100;
pub const MIN_TICK_MS: u64 = 80;
pub const MAX_TICK_MS: u64 = 100;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub const ALIVE_GLYPH: char = '█';
pub const DEAD_GLYPH: char = ' ';

pub const SHUTDOWN_NOTICE: &str = "\nShutting down gracefully...\n";

