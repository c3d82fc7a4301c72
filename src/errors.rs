// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong when carving.
//!
//! There is no I/O in the library, so every one of these is a caller
//! error: a bad address, a ragged table, or a seam that doesn't fit
//! the grid it was handed to.

use failure::Fail;

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum SeamError {
    #[fail(
        display = "pixel ({}, {}) is outside of a {}x{} grid",
        column, row, width, height
    )]
    IndexOutOfBounds {
        column: u32,
        row: u32,
        width: u32,
        height: u32,
    },

    #[fail(
        display = "column {} has {} rows, but column 0 has {}",
        column, found, expected
    )]
    JaggedGrid {
        column: u32,
        expected: u32,
        found: u32,
    },

    #[fail(display = "buffer holds {} pixels, expected {}", found, expected)]
    BufferSize { expected: usize, found: usize },

    #[fail(display = "seam has {} entries, expected {}", found, expected)]
    SeamLength { expected: usize, found: usize },

    #[fail(
        display = "seam entry {} points at {}, but the axis only has {}",
        position, index, limit
    )]
    SeamIndex { position: usize, index: u32, limit: u32 },

    #[fail(display = "there is nothing left to carve along that axis")]
    EmptyGrid,

    #[fail(display = "grid is too large: {} exceeds the u32 coordinate range", _0)]
    TooLarge(usize),
}

pub type Result<T> = std::result::Result<T, SeamError>;
