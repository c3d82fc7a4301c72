// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the distance between a pixel pair
//!
//! A pixel is three signed channels.  They are conventionally in
//! [0, 255], but nothing here clamps them; the energy math only ever
//! subtracts one channel from its twin.

/// A red, green, blue triple.  Plain value, no identity.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Pixel {
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Pixel { red, green, blue }
    }
}

/// (Pixel, Pixel) -> squared distance
///
/// This is the rusty expression of:
///
/// ```text
///     |Δ|² = (Δr)²+(Δg)²+(Δb)²
/// ```
///
/// Returned as an i64 so that channels well outside of [0, 255] still
/// have headroom.
#[inline]
pub fn squared_color_distance(p1: &Pixel, p2: &Pixel) -> i64 {
    let square = |a: i32, b: i32| {
        let d = i64::from(a) - i64::from(b);
        d * d
    };
    square(p1.red, p2.red) + square(p1.green, p2.green) + square(p1.blue, p2.blue)
}
