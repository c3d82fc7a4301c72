// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Moving between the `image` crate and the carver.
//!
//! Decoding and encoding stay with `image`; this module only copies
//! pixels in and out of a `PixelGrid`, renders an energy map as a
//! graymap, and paints seams onto a picture so you can see what would
//! be taken out.

use crate::energy::EnergyMap;
use crate::errors::Result;
use crate::pixel::Pixel;
use crate::pixelgrid::PixelGrid;
use crate::twodmap::check_seam;
use image::{GenericImageView, GrayImage, Luma, Pixel as ImagePixel, Primitive, Rgb, RgbImage};
use itertools::iproduct;
use num_traits::{clamp, NumCast};

/// The colour seams are painted in.
pub const SEAM_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

// Subpixels are carried over as-is, not rescaled: a 16-bit image gives
// channels up to 65535.  Anything that won't fit an i32 saturates.
fn channel<S: Primitive>(s: S) -> i32 {
    <i32 as NumCast>::from(s).unwrap_or(i32::MAX)
}

fn to_u8(c: i32) -> u8 {
    clamp(c, 0, 255) as u8
}

impl PixelGrid {
    /// Copy any image the `image` crate can view into a grid.
    pub fn from_image<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: ImagePixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = image.dimensions();
        let pixels = iproduct!(0..height, 0..width)
            .map(|(y, x)| {
                let Rgb([r, g, b]) = image.get_pixel(x, y).to_rgb();
                Pixel::new(channel(r), channel(g), channel(b))
            })
            .collect();
        PixelGrid::from_raw(width, height, pixels)
    }

    /// Render the grid as an 8-bit RGB image, clamping every channel
    /// into [0, 255].
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            let p = self[(x, y)];
            Rgb([to_u8(p.red), to_u8(p.green), to_u8(p.blue)])
        })
    }
}

/// Render an energy map as a graymap, scaled so that the most
/// energetic pixel is white.  A map with no energy at all is black.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let factor = energy.as_slice().iter().cloned().fold(0.0f64, f64::max);
    GrayImage::from_fn(energy.width(), energy.height(), |x, y| {
        if factor <= 0.0 {
            return Luma([0]);
        }
        let scaled = (energy[(x, y)] * 255.0 / factor).round();
        Luma([clamp(scaled, 0.0, 255.0) as u8])
    })
}

/// Paint a vertical seam (one column per row) onto an image.
pub fn mark_vertical_seam(image: &mut RgbImage, seam: &[u32]) -> Result<()> {
    let (width, height) = image.dimensions();
    check_seam(seam, height, width)?;
    for (y, &x) in (0..height).zip(seam) {
        image.put_pixel(x, y, SEAM_COLOR);
    }
    Ok(())
}

/// Paint a horizontal seam (one row per column) onto an image.
pub fn mark_horizontal_seam(image: &mut RgbImage, seam: &[u32]) -> Result<()> {
    let (width, height) = image.dimensions();
    check_seam(seam, width, height)?;
    for (x, &y) in (0..width).zip(seam) {
        image.put_pixel(x, y, SEAM_COLOR);
    }
    Ok(())
}
