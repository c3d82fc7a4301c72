// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarver - the engine
//!
//! Owns the image being carved.  Energy and seams are always computed
//! fresh from the current image; removing a seam is the only thing that
//! changes it, and a removal makes every earlier energy map and seam
//! stale.

use crate::energy::{calculate_energy, EnergyMap};
use crate::errors::{Result, SeamError};
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::SeamFinder;
use tracing::debug;

/// Which dimension a single carve shrinks.  Carving the width removes
/// a vertical seam; carving the height removes a horizontal one.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Carve {
    Width,
    Height,
}

/// A struct for holding the image to be carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    grid: PixelGrid,
}

impl SeamCarver {
    /// Creates a new SeamCarver that takes ownership of the image.
    pub fn new(grid: PixelGrid) -> Self {
        SeamCarver { grid }
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Gives the (possibly carved) image back.
    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// The energy map of the image as it stands right now.
    pub fn calculate_pixel_energy(&self) -> EnergyMap {
        calculate_energy(&self.grid)
    }

    /// The energy of a single pixel.  This computes the whole map to
    /// do it, so don't call it in a loop.
    pub fn pixel_energy(&self, column: u32, row: u32) -> Result<f64> {
        self.calculate_pixel_energy()
            .get(column, row)
            .copied()
            .ok_or(SeamError::IndexOutOfBounds {
                column,
                row,
                width: self.width(),
                height: self.height(),
            })
    }

    /// Removes one pixel from every row, at the column the seam names
    /// for that row.  The seam must have one entry per row, each a
    /// valid column; nothing is touched if it doesn't.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.grid.remove_vertical_seam(seam)?;
        debug!(
            top = ?seam.first(),
            bottom = ?seam.last(),
            width = self.width(),
            height = self.height(),
            "removed vertical seam"
        );
        Ok(())
    }

    /// Removes one pixel from every column, at the row the seam names
    /// for that column.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.grid.remove_horizontal_seam(seam)?;
        debug!(
            left = ?seam.first(),
            right = ?seam.last(),
            width = self.width(),
            height = self.height(),
            "removed horizontal seam"
        );
        Ok(())
    }

    /// Find the cheapest seam in one direction and remove it, returning
    /// the seam that was taken out.
    pub fn carve_once(&mut self, direction: Carve) -> Result<Vec<u32>> {
        let seam = match direction {
            Carve::Width => {
                let seam = self.find_vertical_seam();
                self.remove_vertical_seam(&seam)?;
                seam
            }
            Carve::Height => {
                let seam = self.find_horizontal_seam();
                self.remove_horizontal_seam(&seam)?;
                seam
            }
        };
        Ok(seam)
    }
}

impl SeamFinder for SeamCarver {
    fn energy(&self) -> EnergyMap {
        self.calculate_pixel_energy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    fn gray(v: i32) -> Pixel {
        Pixel::new(v, v, v)
    }

    // Pixel (x, y) has red = x, green = y, so survivors are easy to trace.
    fn addressed(width: u32, height: u32) -> PixelGrid {
        PixelGrid::from_columns(
            (0..width as i32)
                .map(|x| (0..height as i32).map(|y| Pixel::new(x, y, 0)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn removing_a_vertical_seam_keeps_the_rest_in_order() {
        let mut carver = SeamCarver::new(addressed(3, 3));
        carver.remove_vertical_seam(&[1, 1, 1]).unwrap();
        assert_eq!((carver.width(), carver.height()), (2, 3));
        let grid = carver.into_grid();
        for y in 0..3 {
            assert_eq!(grid.get_pixel(0, y), Ok(Pixel::new(0, y as i32, 0)));
            assert_eq!(grid.get_pixel(1, y), Ok(Pixel::new(2, y as i32, 0)));
        }
    }

    #[test]
    fn removing_a_horizontal_seam_shifts_rows_up() {
        let mut carver = SeamCarver::new(addressed(3, 4));
        carver.remove_horizontal_seam(&[3, 2, 0]).unwrap();
        assert_eq!((carver.width(), carver.height()), (3, 3));
        let columns = carver.grid().columns();
        let rows_of = |x: usize| columns[x].iter().map(|p| p.green).collect::<Vec<_>>();
        assert_eq!(rows_of(0), vec![0, 1, 2]);
        assert_eq!(rows_of(1), vec![0, 1, 3]);
        assert_eq!(rows_of(2), vec![1, 2, 3]);
    }

    #[test]
    fn mismatched_seams_are_refused_before_anything_moves() {
        let mut carver = SeamCarver::new(addressed(3, 3));
        let before = carver.grid().clone();
        assert_eq!(
            carver.remove_vertical_seam(&[0, 0]),
            Err(SeamError::SeamLength {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            carver.remove_vertical_seam(&[0, 1, 3]),
            Err(SeamError::SeamIndex {
                position: 2,
                index: 3,
                limit: 3
            })
        );
        assert!(carver.remove_horizontal_seam(&[0, 0, 0, 0]).is_err());
        assert_eq!(carver.grid(), &before);
    }

    #[test]
    fn finding_a_seam_twice_gives_the_same_seam() {
        let mut columns = vec![vec![gray(0); 5]; 6];
        columns[2][3] = gray(255);
        columns[4][1] = gray(90);
        let carver = SeamCarver::new(PixelGrid::from_columns(columns).unwrap());
        assert_eq!(carver.find_vertical_seam(), carver.find_vertical_seam());
        assert_eq!(carver.find_horizontal_seam(), carver.find_horizontal_seam());
    }

    #[test]
    fn carving_shrinks_exactly_one_dimension() {
        let mut carver = SeamCarver::new(addressed(5, 4));
        let seam = carver.carve_once(Carve::Width).unwrap();
        assert_eq!(seam.len(), 4);
        assert_eq!((carver.width(), carver.height()), (4, 4));

        let seam = carver.carve_once(Carve::Height).unwrap();
        assert_eq!(seam.len(), 4);
        assert_eq!((carver.width(), carver.height()), (4, 3));
    }

    #[test]
    fn carving_a_single_column_away_empties_the_grid() {
        let mut carver = SeamCarver::new(addressed(1, 3));
        assert_eq!(carver.carve_once(Carve::Width), Ok(vec![0, 0, 0]));
        assert_eq!((carver.width(), carver.height()), (0, 0));
        assert_eq!(carver.carve_once(Carve::Width), Err(SeamError::EmptyGrid));
        assert_eq!(carver.carve_once(Carve::Height), Err(SeamError::EmptyGrid));
    }

    #[test]
    fn carving_a_single_row_away_leaves_empty_columns() {
        let mut carver = SeamCarver::new(addressed(3, 1));
        assert_eq!(carver.carve_once(Carve::Height), Ok(vec![0, 0, 0]));
        assert_eq!((carver.width(), carver.height()), (3, 0));
        assert_eq!(carver.grid().columns(), vec![Vec::<Pixel>::new(); 3]);
    }

    #[test]
    fn pixel_energy_is_bounds_checked() {
        let mut columns = vec![vec![gray(10); 3]; 3];
        columns[1][1] = gray(200);
        let carver = SeamCarver::new(PixelGrid::from_columns(columns).unwrap());
        assert_eq!(carver.pixel_energy(0, 0), Ok(0.0));
        assert!(carver.pixel_energy(1, 0).unwrap() > 0.0);
        assert_eq!(
            carver.pixel_energy(0, 3),
            Err(SeamError::IndexOutOfBounds {
                column: 0,
                row: 3,
                width: 3,
                height: 3
            })
        );
    }
}
