// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam carving: find the cheapest connected path of pixels across an
//! image and take it out, one seam at a time.

pub mod energy;
pub mod errors;
pub mod imageio;
pub mod pixel;
pub mod pixelgrid;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use energy::{
    calculate_energy, energy_to_horizontal_seam, energy_to_vertical_seam, EnergyMap,
};
pub use errors::{Result, SeamError};
pub use imageio::{energy_to_image, mark_horizontal_seam, mark_vertical_seam};
pub use pixel::Pixel;
pub use pixelgrid::PixelGrid;
pub use seamcarver::{Carve, SeamCarver};
pub use seamfinder::SeamFinder;
