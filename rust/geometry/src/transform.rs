// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D affine transforms
//!
//! Six-coefficient maps in SVG attribute order: `x' = a*x + c*y + e`,
//! `y' = b*x + d*y + f`.

use nalgebra::Point2;

/// A 2x3 affine map over plan coordinates.
///
/// Coefficients follow the SVG `matrix(a,b,c,d,e,f)` convention: `(a,b)` is
/// the first column, `(c,d)` the second, `(e,f)` the translation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform2D {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform2D {
    /// The identity map.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Build from the six SVG matrix coefficients.
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Pure translation by `(tx, ty)`.
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Axis-aligned scale about the origin.
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Map a single point.
    #[inline]
    pub fn apply_point(&self, p: &Point2<f64>) -> Point2<f64> {
        Point2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Map every point in place.
    pub fn apply(&self, points: &mut [Point2<f64>]) {
        for p in points.iter_mut() {
            *p = self.apply_point(p);
        }
    }

    /// The same map with the translation components dropped.
    ///
    /// Layer transforms are applied this way: the layer's offset is
    /// discarded while its scaling and rotation are kept.
    pub fn without_translation(&self) -> Self {
        Self {
            e: 0.0,
            f: 0.0,
            ..*self
        }
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
