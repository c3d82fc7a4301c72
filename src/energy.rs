// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image, calculate the energy map and either a horizontal or
//! vertical seam for that image.  The energy is the plain dual
//! gradient: the square root of the summed squared RGB distances
//! between each pixel's left and right neighbours and between its
//! upper and lower neighbours.  Neighbours wrap around the edges, so
//! the first column's left neighbour is the last column.

use crate::pixel::squared_color_distance;
use crate::pixelgrid::PixelGrid;
use crate::twodmap::TwoDimensionalMap;
use std::ops::RangeInclusive;
use tracing::{debug, trace};

/// Energy per pixel, same dimensions as the grid it came from.
pub type EnergyMap = TwoDimensionalMap<f64>;

/// A cell of the seam digraph: the cheapest cumulative energy that
/// reaches this cell, and which cell on the previous line it came
/// from.
#[derive(Default, Debug, Copy, Clone)]
struct EnergyAndBackPointer {
    energy: f64,
    parent: u32,
}

// Toroidal neighbours.  `n` is never zero here; there's no pixel to ask
// about in an empty grid.
#[inline]
fn before(i: u32, n: u32) -> u32 {
    if i == 0 {
        n - 1
    } else {
        i - 1
    }
}

#[inline]
fn after(i: u32, n: u32) -> u32 {
    if i + 1 >= n {
        0
    } else {
        i + 1
    }
}

// Image -> Energy Map

/// Compute the energy of every pixel in the grid.  Nothing is cached:
/// any removal invalidates the whole map, so every call starts over.
pub fn calculate_energy(grid: &PixelGrid) -> EnergyMap {
    let (width, height) = grid.dimensions();
    trace!(width, height, "computing energy map");

    TwoDimensionalMap::from_fn(width, height, |x, y| {
        let (leftpixel, rightpixel, uppixel, downpixel) = (
            grid[(before(x, width), y)],
            grid[(after(x, width), y)],
            grid[(x, before(y, height))],
            grid[(x, after(y, height))],
        );
        let abscissa = squared_color_distance(&rightpixel, &leftpixel);
        let ordinate = squared_color_distance(&downpixel, &uppixel);
        ((abscissa + ordinate) as f64).sqrt()
    })
}

// Scans the candidates in order and keeps the first one with the
// lowest energy.  Candidates always arrive lowest index first, so on
// exact ties the lower index wins: left over centre, centre over right.
fn cheapest<F>(candidates: RangeInclusive<u32>, energy_of: F) -> (u32, f64)
where
    F: Fn(u32) -> f64,
{
    let start = *candidates.start();
    candidates.fold((start, energy_of(start)), |(best, least), i| {
        let e = energy_of(i);
        if e < least {
            (i, e)
        } else {
            (best, least)
        }
    })
}

// The up-to-three cells on the previous line adjacent to `i`, clipped
// to [0, max].
#[inline]
fn adjacent(i: u32, max: u32) -> RangeInclusive<u32> {
    i.saturating_sub(1)..=(i + 1).min(max)
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.  An empty map has an empty seam.
pub fn energy_to_vertical_seam(energy: &EnergyMap) -> Vec<u32> {
    let (width, height) = energy.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut target: TwoDimensionalMap<EnergyAndBackPointer> =
        TwoDimensionalMap::new(width, height);

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)].energy = energy[(x, 0)];
    }

    let maxwidth = width - 1;
    // For every subsequent row, populate the target cell with the sum
    // of the *lowest adjacent upper energy* and the *x coordinate of
    // that energy*
    for y in 1..height {
        for x in 0..width {
            let (parent, least) =
                cheapest(adjacent(x, maxwidth), |px| target[(px, y - 1)].energy);
            target[(x, y)] = EnergyAndBackPointer {
                energy: energy[(x, y)] + least,
                parent,
            };
        }
    }

    // Find the x coordinate of the bottommost seam with the least energy.
    let (mut seam_col, _) = cheapest(0..=maxwidth, |x| target[(x, height - 1)].energy);
    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    let mut seam: Vec<u32> = (0..height)
        .rev()
        .map(|y| {
            let x = seam_col;
            seam_col = target[(x, y)].parent;
            x
        })
        .collect();
    seam.reverse();
    debug!(
        width,
        height,
        top = ?seam.first(),
        bottom = ?seam.last(),
        "found vertical seam"
    );
    seam
}

/// Given an energy map, return the list of y-coordinates that, when
/// mapped with the range (0..width), give the XY coordinates for each
/// pixel in the seam to be removed.  An empty map has an empty seam.
pub fn energy_to_horizontal_seam(energy: &EnergyMap) -> Vec<u32> {
    let (width, height) = energy.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut target: TwoDimensionalMap<EnergyAndBackPointer> =
        TwoDimensionalMap::new(width, height);

    // Populate the first column with their native energies.
    for y in 0..height {
        target[(0, y)].energy = energy[(0, y)];
    }

    let maxheight = height - 1;
    // For every subsequent column, populate the target cell with the sum
    // of the *lowest adjacent leftmost energy* and the *y coordinate of
    // that energy*
    for x in 1..width {
        for y in 0..height {
            let (parent, least) =
                cheapest(adjacent(y, maxheight), |py| target[(x - 1, py)].energy);
            target[(x, y)] = EnergyAndBackPointer {
                energy: energy[(x, y)] + least,
                parent,
            };
        }
    }

    // Find the y coordinate of the rightmost seam with the least
    // energy.
    let (mut seam_row, _) = cheapest(0..=maxheight, |y| target[(width - 1, y)].energy);
    let mut seam: Vec<u32> = (0..width)
        .rev()
        .map(|x| {
            let y = seam_row;
            seam_row = target[(x, y)].parent;
            y
        })
        .collect();
    seam.reverse();
    debug!(
        width,
        height,
        left = ?seam.first(),
        right = ?seam.last(),
        "found horizontal seam"
    );
    seam
}
