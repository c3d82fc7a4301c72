// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two dimensional map
//!
//! One flat buffer and a width and height, addressed `(x, y)`, that is
//! `(column, row)`.  The pixel grid, the energy map, and the seam
//! digraph are all one of these with a different payload.

use crate::errors::{Result, SeamError};
use itertools::iproduct;
use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

/// Defines the basic two dimensional map: An addressable field
/// containing an object that represents one of several possible
/// objects during processing: a pixel for the image, a float for the
/// energy map, or an energy + parent address for the seam digraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new (abstract) map full of the content type's
    /// default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap a row-major buffer.  The buffer must hold exactly
    /// `width * height` values.
    pub fn from_raw(width: u32, height: u32, data: Vec<P>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(SeamError::BufferSize {
                expected,
                found: data.len(),
            });
        }
        Ok(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    /// Build a map by asking `f` for the value at every `(x, y)`.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let data = iproduct!(0..height, 0..width)
            .map(|(y, x)| f(x, y))
            .collect();
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The backing buffer, in row-major order.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get the value at a single address, or None if it's off the map.
    pub fn get(&self, x: u32, y: u32) -> Option<&P> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(self.get_index(x, y))
    }

    /// Delete the cell at `(seam[y], y)` from every row, sliding the
    /// rest of the row left.  The map loses one column.  Losing the
    /// last column leaves nothing, so the height goes to zero as well.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        if self.width == 0 {
            return Err(SeamError::EmptyGrid);
        }
        check_seam(seam, self.height, self.width)?;

        let (width, height) = (self.width, self.height);
        let newwidth = width - 1;
        for (y, x) in iproduct!(0..height, 0..width) {
            let cut = seam[y as usize];
            if x == cut {
                continue;
            }
            let nx = if x > cut { x - 1 } else { x };
            let from = self.get_index(x, y);
            self.data[y as usize * newwidth as usize + nx as usize] = self.data[from];
        }
        self.shrink(newwidth, if newwidth == 0 { 0 } else { height });
        Ok(())
    }

    /// Delete the cell at `(x, seam[x])` from every column, sliding the
    /// rest of the column up.  The map loses one row.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        if self.height == 0 {
            return Err(SeamError::EmptyGrid);
        }
        check_seam(seam, self.width, self.height)?;

        let (width, height) = (self.width, self.height);
        for (y, x) in iproduct!(0..height, 0..width) {
            let cut = seam[x as usize];
            if y == cut {
                continue;
            }
            let ny = if y > cut { y - 1 } else { y };
            let (from, to) = (self.get_index(x, y), self.get_index(x, ny));
            self.data[to] = self.data[from];
        }
        self.shrink(width, height - 1);
        Ok(())
    }

    // Both removals compact in a single forward pass: every destination
    // index is at or before the source index it is read from, so
    // nothing is overwritten before it has been moved.
    fn shrink(&mut self, width: u32, height: u32) {
        self.data.truncate(width as usize * height as usize);
        self.width = width;
        self.height = height;
    }
}

// A seam must supply one entry per cell along `length`, and each entry
// must land inside `limit`.  Checked in full before anything moves.
pub(crate) fn check_seam(seam: &[u32], length: u32, limit: u32) -> Result<()> {
    if seam.len() != length as usize {
        return Err(SeamError::SeamLength {
            expected: length as usize,
            found: seam.len(),
        });
    }
    match seam.iter().position(|&i| i >= limit) {
        Some(position) => Err(SeamError::SeamIndex {
            position,
            index: seam[position],
            limit,
        }),
        None => Ok(()),
    }
}

/// Converts a buffer length to a coordinate, refusing anything the u32
/// address space can't reach.
pub(crate) fn to_coord(n: usize) -> Result<u32> {
    u32::try_from(n).map_err(|_| SeamError::TooLarge(n))
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside of a {}x{} map",
            x,
            y,
            self.width,
            self.height
        );
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside of a {}x{} map",
            x,
            y,
            self.width,
            self.height
        );
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
