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

//! Age-to-color staircase for live cells.

pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const PURPLE: &str = "\x1b[35m";
pub const BRIGHT_GREEN: &str = "\x1b[92m";
pub const BRIGHT_YELLOW: &str = "\x1b[93m";
pub const BRIGHT_CYAN: &str = "\x1b[96m";
pub const BRIGHT_WHITE: &str = "\x1b[97m";

/// Age buckets, youngest first.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy)]
pub enum AgeColor {
    Newborn,
    Young,
    Mature,
    Aging,
    Old,
    VeryOld,
    Ancient,
}

impl AgeColor {
    pub const ALL: [AgeColor; 7] = [
        AgeColor::Newborn,
        AgeColor::Young,
        AgeColor::Mature,
        AgeColor::Aging,
        AgeColor::Old,
        AgeColor::VeryOld,
        AgeColor::Ancient,
    ];

    /// Bucket for a cell of the given age. Anything at or past the last bucket is `Ancient`.
    pub fn from_age(age: usize) -> AgeColor {
        match AgeColor::ALL.get(age) {
            Some(color) => *color,
            None => AgeColor::Ancient,
        }
    }

    /// The ANSI escape sequence that selects this color.
    pub fn code(self) -> &'static str {
        match self {
            AgeColor::Newborn => BRIGHT_WHITE,
            AgeColor::Young => BRIGHT_CYAN,
            AgeColor::Mature => BRIGHT_GREEN,
            AgeColor::Aging => BRIGHT_YELLOW,
            AgeColor::Old => YELLOW,
            AgeColor::VeryOld => RED,
            AgeColor::Ancient => PURPLE,
        }
    }
}

/// Shorthand for `AgeColor::from_age(age).code()`.
#[inline]
pub fn color_for_age(age: usize) -> &'static str {
    AgeColor::from_age(age).code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn staircase_matches_palette() {
        let expected = [BRIGHT_WHITE, BRIGHT_CYAN, BRIGHT_GREEN, BRIGHT_YELLOW, YELLOW, RED, PURPLE];
        for (age, code) in expected.iter().enumerate() {
            assert_eq!(color_for_age(age), *code);
        }
    }

    #[test]
    fn buckets_are_monotonic() {
        for age in 1..20 {
            assert!(AgeColor::from_age(age) >= AgeColor::from_age(age - 1));
        }
    }

    proptest! {
        #[test]
        fn old_cells_are_always_ancient(age in 6usize..usize::MAX) {
            prop_assert_eq!(AgeColor::from_age(age), AgeColor::Ancient);
            prop_assert_eq!(color_for_age(age), PURPLE);
        }
    }
}
