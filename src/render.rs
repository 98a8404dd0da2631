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

use std::io::{BufWriter, Write};

use tracing::*;

use crate::color::{color_for_age, RESET};
use crate::constants::{ALIVE_GLYPH, DEAD_GLYPH, SHUTDOWN_NOTICE};
use crate::error::LifeResult;
use crate::universe::Universe;

pub const CLEAR_SCREEN: &str = "\x1b[2J";
pub const CURSOR_HOME: &str = "\x1b[H";
pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// How live cells are drawn.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum RenderStyle {
    /// Glyphs colored by cell age.
    Aged,
    /// Monochrome glyphs, no color codes at all.
    Plain,
}

/// Draws frames of a `Universe` to a byte sink.
///
/// Output is buffered and flushed once per frame. Between `begin` and `restore` the terminal is
/// in drawing mode (cursor hidden); if the renderer is dropped without `restore` having run, the
/// drop restores the terminal instead, so every exit path leaves it usable.
pub struct Renderer<W: Write> {
    out:    BufWriter<W>,
    style:  RenderStyle,
    active: bool, // cursor hidden and not yet restored
}

impl<W: Write> Renderer<W> {
    pub fn new(sink: W, style: RenderStyle) -> Self {
        Renderer {
            out: BufWriter::new(sink),
            style,
            active: false,
        }
    }

    /// Hides the cursor and clears the screen.
    pub fn begin(&mut self) -> LifeResult<()> {
        write!(self.out, "{}{}", HIDE_CURSOR, CLEAR_SCREEN)?;
        self.out.flush()?;
        self.active = true;
        Ok(())
    }

    /// Draws the current generation of `uni` over the previous frame.
    pub fn draw(&mut self, uni: &Universe) -> LifeResult<()> {
        self.out.write_all(CURSOR_HOME.as_bytes())?;
        let mut glyph = [0u8; 4];
        let alive_glyph: &str = ALIVE_GLYPH.encode_utf8(&mut glyph);
        for row in uni.current().0.iter() {
            for cell in row {
                if !cell.alive {
                    write!(self.out, "{}", DEAD_GLYPH)?;
                    continue;
                }
                match self.style {
                    RenderStyle::Aged => write!(self.out, "{}{}{}", color_for_age(cell.age), alive_glyph, RESET)?,
                    RenderStyle::Plain => self.out.write_all(alive_glyph.as_bytes())?,
                }
            }
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Writes the shutdown notice. Terminal state is left for `restore`.
    pub fn farewell(&mut self) -> LifeResult<()> {
        self.out.write_all(SHUTDOWN_NOTICE.as_bytes())?;
        Ok(())
    }

    /// Resets color, shows the cursor, and flushes. Does nothing unless `begin` ran and no
    /// restore has happened since.
    pub fn restore(&mut self) -> LifeResult<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        write!(self.out, "{}{}", RESET, SHOW_CURSOR)?;
        self.out.flush()?;
        debug!("terminal restored");
        Ok(())
    }
}

impl<W: Write> Drop for Renderer<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::test_helpers::*;

    fn frame(uni: &Universe, style: RenderStyle) -> String {
        let mut sink: Vec<u8> = vec![];
        {
            let mut renderer = Renderer::new(&mut sink, style);
            renderer.draw(uni).unwrap();
        }
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn plain_frame_is_home_then_rows() {
        let uni = universe_with(3, 2, &[(0, 0), (2, 1)]);
        assert_eq!(frame(&uni, RenderStyle::Plain), "\x1b[H█  \n  █\n");
    }

    #[test]
    fn aged_frame_wraps_each_glyph_in_color() {
        let mut uni = universe_with(3, 3, &[(0, 1), (1, 1), (2, 1)]);
        // a blinker on a 3-wide torus: the row survives and ages
        uni.next();
        let out = frame(&uni, RenderStyle::Aged);
        assert!(out.starts_with(CURSOR_HOME));
        assert_eq!(out.matches("\x1b[96m█\x1b[0m").count(), 3);
        assert_eq!(out.matches('\n').count(), 3);
    }

    #[test]
    fn newborn_cells_are_bright_white() {
        let uni = universe_with(2, 1, &[(1, 0)]);
        assert_eq!(frame(&uni, RenderStyle::Aged), "\x1b[H \x1b[97m█\x1b[0m\n");
    }

    #[test]
    fn begin_hides_cursor_and_clears() {
        let mut sink: Vec<u8> = vec![];
        {
            let mut renderer = Renderer::new(&mut sink, RenderStyle::Aged);
            renderer.begin().unwrap();
            renderer.restore().unwrap();
        }
        assert_eq!(String::from_utf8(sink).unwrap(), "\x1b[?25l\x1b[2J\x1b[0m\x1b[?25h");
    }

    #[test]
    fn drop_restores_terminal_once() {
        let mut sink: Vec<u8> = vec![];
        {
            let mut renderer = Renderer::new(&mut sink, RenderStyle::Plain);
            renderer.begin().unwrap();
        }
        let out = String::from_utf8(sink).unwrap();
        assert!(out.ends_with("\x1b[0m\x1b[?25h"));
        assert_eq!(out.matches(SHOW_CURSOR).count(), 1);
    }

    #[test]
    fn nothing_to_restore_without_begin() {
        let mut sink: Vec<u8> = vec![];
        {
            let mut renderer = Renderer::new(&mut sink, RenderStyle::Plain);
            renderer.restore().unwrap();
        }
        assert!(sink.is_empty());
    }
}
