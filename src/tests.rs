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

use crate::color::{color_for_age, AgeColor, PURPLE};
use crate::grids::Cell;
use crate::render::{RenderStyle, Renderer};
use crate::universe::test_helpers::*;
use crate::universe::BigBang;

#[test]
fn blinker_rotates_on_5x5_torus() {
    let mut uni = universe_with(5, 5, &[(1, 0), (1, 1), (1, 2)]);
    uni.next();
    assert_eq!(alive_cells(&uni), vec![(0, 1), (1, 1), (2, 1)]);
    // the center survived, the ends are newborn
    assert_eq!(uni.get_cell(1, 1), Cell { alive: true, age: 1 });
    assert_eq!(uni.get_cell(0, 1), Cell::NEWBORN);
    uni.next();
    assert_eq!(alive_cells(&uni), vec![(1, 0), (1, 1), (1, 2)]);
    assert_eq!(uni.get_cell(1, 1).age, 2);
    assert_eq!(uni.get_cell(1, 0).age, 0);
}

#[test]
fn glider_crosses_the_edge_and_comes_back() {
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let mut uni = universe_with(6, 6, &glider);
    // a glider moves one cell down and right every 4 generations; 24 generations on a 6x6 torus
    // bring it back to where it started
    for _ in 0..24 {
        uni.next();
    }
    assert_eq!(uni.latest_gen(), 25);
    assert_eq!(alive_cells(&uni), alive_cells(&universe_with(6, 6, &glider)));
}

#[test]
fn glider_translates_by_one_diagonal() {
    let mut uni = universe_with(8, 8, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    for _ in 0..4 {
        uni.next();
    }
    assert_eq!(alive_cells(&uni), vec![(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
}

#[test]
fn block_ages_by_one_each_generation_until_ancient() {
    let mut uni = universe_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
    for expected_age in 0..10 {
        uni.current().each_alive(|_, _, cell| assert_eq!(cell.age, expected_age));
        assert_eq!(uni.population(), 4);
        uni.next();
    }
    assert_eq!(AgeColor::from_age(uni.get_cell(2, 2).age), AgeColor::Ancient);
    assert_eq!(color_for_age(uni.get_cell(2, 2).age), PURPLE);
}

#[test]
fn death_resets_age() {
    // a lone cell dies of loneliness; its slot must read dead with age 0 afterwards
    let mut uni = universe_with(5, 5, &[(2, 2)]);
    uni.next();
    assert_eq!(uni.get_cell(2, 2), Cell::DEAD);
    assert_eq!(uni.population(), 0);
}

#[test]
fn current_is_what_was_computed() {
    let mut uni = BigBang::new().width(30).height(20).seed(99).birth().unwrap();
    // compute the expected next generation independently, cell by cell
    let mut expected = vec![];
    for row in 0..uni.height() {
        for col in 0..uni.width() {
            expected.push(uni.get_cell(col, row).next(uni.neighbor_count(col, row)));
        }
    }
    uni.next();
    let mut actual = vec![];
    for row in 0..uni.height() {
        for col in 0..uni.width() {
            actual.push(uni.get_cell(col, row));
        }
    }
    assert_eq!(actual, expected);
}

#[test]
fn frames_overwrite_in_place() {
    let mut uni = universe_with(5, 5, &[(1, 0), (1, 1), (1, 2)]);
    let mut sink: Vec<u8> = vec![];
    {
        let mut renderer = Renderer::new(&mut sink, RenderStyle::Plain);
        renderer.begin().unwrap();
        for _ in 0..3 {
            renderer.draw(&uni).unwrap();
            uni.next();
        }
    }
    let out = String::from_utf8(sink).unwrap();
    // clear once, home once per frame
    assert_eq!(out.matches("\x1b[2J").count(), 1);
    assert_eq!(out.matches("\x1b[H").count(), 3);
    let frames: Vec<&str> = out.split("\x1b[H").skip(1).collect();
    assert_eq!(frames[0], " █   \n █   \n █   \n     \n     \n");
    assert!(frames[1].starts_with("     \n███  \n     \n     \n     \n"));
}
