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

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error("LifeError->InvalidData->{reason}")]
    InvalidData { reason: String },
    #[error("LifeError->Config->{path}: {reason}")]
    Config { path: String, reason: String },
    #[error("LifeError->Io->{0}")]
    Io(#[from] io::Error),
}

pub type LifeResult<T> = ::std::result::Result<T, LifeError>;

impl PartialEq for LifeError {
    fn eq(&self, other: &LifeError) -> bool {
        use LifeError::*;
        match (self, other) {
            (InvalidData { reason: a }, InvalidData { reason: b }) => a == b,
            (
                Config { path: path_a, reason: reason_a },
                Config { path: path_b, reason: reason_b },
            ) => path_a == path_b && reason_a == reason_b,
            // io::Error has no equality of its own; the kind is close enough for callers
            (Io(a), Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}
