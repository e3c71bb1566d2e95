// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometric predicates
//!
//! Stateless tests the triangulator is built from: a signed cross product,
//! local convexity at a vertex, and an odd-even point-in-polygon test.

use nalgebra::Point2;

/// Signed cross product `x1*y2 - x2*y1` of two 2D vectors.
///
/// The sign encodes turn direction for the vector order fixed by
/// [`is_convex_vertex`].
#[inline]
pub fn cross(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    x1 * y2 - x2 * y1
}

/// Whether the outline makes a convex turn at `cur`.
///
/// The turn is taken from the vectors `cur - next` and `prev - cur`, in that
/// order; this fixes which winding the ear loop accepts. Colinear triplets
/// (cross product exactly zero) are not convex.
#[inline]
pub fn is_convex_vertex(prev: &Point2<f64>, cur: &Point2<f64>, next: &Point2<f64>) -> bool {
    cross(cur.x - next.x, cur.y - next.y, prev.x - cur.x, prev.y - cur.y) > 0.0
}

/// Odd-even containment test.
///
/// Casts a ray from `point` toward +x and counts edge crossings, walking
/// one edge per vertex with the last-to-first edge handled first. An edge
/// crosses when the point's y lies in the edge's half-open y-interval and
/// the point is left of the edge's x at that y. Zero y-span edges can never
/// cross the ray and are skipped before the x-at-y division sees a zero
/// denominator.
pub fn point_in_polygon(point: &Point2<f64>, vertices: &[Point2<f64>]) -> bool {
    let mut prev = match vertices.last() {
        Some(p) => *p,
        None => return false,
    };

    let mut crossings = 0u32;
    for cur in vertices {
        if prev.y != cur.y {
            let spans_ray = (cur.y <= point.y && point.y < prev.y)
                || (prev.y <= point.y && point.y < cur.y);
            if spans_ray
                && point.x < (prev.x - cur.x) * (point.y - cur.y) / (prev.y - cur.y) + cur.x
            {
                crossings += 1;
            }
        }
        prev = *cur;
    }

    crossings % 2 == 1
}
