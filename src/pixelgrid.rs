// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The image being carved.
//!
//! A rectangular table of pixels addressed `(column, row)`.  Callers
//! usually think of it as a list of columns; internally it's one flat
//! row-major buffer, which is what the energy pass walks.

use crate::errors::{Result, SeamError};
use crate::pixel::Pixel;
use crate::twodmap::{to_coord, TwoDimensionalMap};
use std::ops::Index;

#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    pixels: TwoDimensionalMap<Pixel>,
}

impl PixelGrid {
    /// Build a grid from a table of columns, `columns[x][y]`.  Every
    /// column must be the same length.  No columns at all is a 0x0
    /// grid.
    pub fn from_columns(columns: Vec<Vec<Pixel>>) -> Result<Self> {
        let width = to_coord(columns.len())?;
        let height = to_coord(columns.first().map_or(0, Vec::len))?;

        if let Some((x, column)) = columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != height as usize)
        {
            return Err(SeamError::JaggedGrid {
                column: to_coord(x)?,
                expected: height,
                found: to_coord(column.len())?,
            });
        }

        let pixels = TwoDimensionalMap::from_fn(width, height, |x, y| {
            columns[x as usize][y as usize]
        });
        Ok(PixelGrid { pixels })
    }

    /// Build a grid from a row-major buffer of `width * height` pixels,
    /// the layout image decoders hand back.  No columns means no rows,
    /// whatever height is asked for.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        let height = if width == 0 { 0 } else { height };
        let pixels = TwoDimensionalMap::from_raw(width, height, pixels)?;
        Ok(PixelGrid { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// The pixel at `(column, row)`, or `IndexOutOfBounds`.
    pub fn get_pixel(&self, column: u32, row: u32) -> Result<Pixel> {
        self.pixels
            .get(column, row)
            .copied()
            .ok_or(SeamError::IndexOutOfBounds {
                column,
                row,
                width: self.width(),
                height: self.height(),
            })
    }

    /// Hand the grid back as a table of columns.
    pub fn columns(&self) -> Vec<Vec<Pixel>> {
        (0..self.width())
            .map(|x| (0..self.height()).map(|y| self[(x, y)]).collect())
            .collect()
    }

    /// All pixels, row by row.
    pub fn as_slice(&self) -> &[Pixel] {
        self.pixels.as_slice()
    }

    // The carver is the only writer.
    pub(crate) fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.pixels.remove_vertical_seam(seam)
    }

    pub(crate) fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.pixels.remove_horizontal_seam(seam)
    }
}

impl Index<(u32, u32)> for PixelGrid {
    type Output = Pixel;

    /// Unchecked in the sense of returning no Result; it still panics
    /// on a bad address rather than reading a neighbour.
    fn index(&self, (column, row): (u32, u32)) -> &Pixel {
        &self.pixels[(column, row)]
    }
}
