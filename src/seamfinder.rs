// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::energy::{energy_to_horizontal_seam, energy_to_vertical_seam, EnergyMap};

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface: anything that can produce a fresh energy map
/// gets both seam searches for free.
pub trait SeamFinder {
    /// The energy of every pixel in the current image.
    fn energy(&self) -> EnergyMap;

    /// Request a horizontal seam: one row index per column.
    fn find_horizontal_seam(&self) -> Vec<u32> {
        energy_to_horizontal_seam(&self.energy())
    }

    /// Request a vertical seam: one column index per row.
    fn find_vertical_seam(&self) -> Vec<u32> {
        energy_to_vertical_seam(&self.energy())
    }
}
