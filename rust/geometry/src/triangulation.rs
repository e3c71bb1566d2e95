// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ear-clipping triangulation
//!
//! Decomposes a simple polygon into triangles by repeatedly clipping ears:
//! convex corners whose triangle contains no other outline vertex. The scan
//! is O(n^3) overall, which is fine for floor-plan outlines of a few dozen
//! vertices.

use nalgebra::Point2;
use smallvec::SmallVec;

use crate::predicates::{is_convex_vertex, point_in_polygon};
use crate::shape::PolygonShape;

/// Working vertex list; most floor-plan outlines fit inline.
type WorkingList = SmallVec<[Point2<f64>; 16]>;

/// One triangle of a decomposition. Vertices are taken verbatim from the
/// input outline, never interpolated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    pub a: Point2<f64>,
    pub b: Point2<f64>,
    pub c: Point2<f64>,
}

impl Triangle {
    pub fn new(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Self {
        Self { a, b, c }
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        0.5 * ((self.b.x - self.a.x) * (self.c.y - self.a.y)
            - (self.c.x - self.a.x) * (self.b.y - self.a.y))
            .abs()
    }

    /// The three corners in order.
    pub fn vertices(&self) -> [Point2<f64>; 3] {
        [self.a, self.b, self.c]
    }
}

/// Signed shoelace area of a closed outline; the sign encodes winding.
pub fn signed_area(points: &[Point2<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = &points[i];
        let q = &points[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    0.5 * sum
}

/// Whether convex corners outnumber reflex ones. The ear loop expects the
/// convex kind to be the majority; a simple outline in the wrong winding
/// fails this vote and gets reversed.
fn convex_majority(points: &[Point2<f64>]) -> bool {
    let n = points.len();
    let mut convex = 0usize;
    let mut reflex = 0usize;

    for i in 0..n {
        let p0 = &points[i];
        let p1 = &points[(i + 1) % n];
        let p2 = &points[(i + 2) % n];
        if is_convex_vertex(p0, p1, p2) {
            convex += 1;
        } else {
            reflex += 1;
        }
    }

    convex > reflex
}

/// First ear in index order, as the start index of its triplet.
///
/// The corner at `i + 1` is an ear tip when it turns convex and no other
/// working vertex lies inside the triplet's triangle. Vertices equal by
/// value to one of the three corners do not count as blockers.
fn find_ear(points: &[Point2<f64>]) -> Option<usize> {
    let n = points.len();

    for i in 0..n {
        let p0 = points[i];
        let p1 = points[(i + 1) % n];
        let p2 = points[(i + 2) % n];

        if !is_convex_vertex(&p0, &p1, &p2) {
            continue;
        }

        let corners = [p0, p1, p2];
        let blocked = points
            .iter()
            .filter(|p| **p != p0 && **p != p1 && **p != p2)
            .any(|p| point_in_polygon(p, &corners));

        if !blocked {
            return Some(i);
        }
    }

    None
}

/// Triangulate an ordered vertex sequence.
///
/// The winding is normalized first: when reflex corners win the vote the
/// order is reversed. Each pass then clips the first ear found; the clipped
/// tip is removed by value (first occurrence). A pass that finds no ear, as
/// happens on degenerate or self-intersecting outlines, stops early and
/// yields the triangles clipped so far rather than failing.
///
/// Fewer than 3 vertices produce nothing; exactly 3 produce that single
/// triangle.
pub fn triangulate_points(points: &[Point2<f64>]) -> Vec<Triangle> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut working: WorkingList = points.iter().copied().collect();
    if !convex_majority(&working) {
        working.reverse();
    }

    let mut triangles = Vec::with_capacity(working.len() - 2);

    while working.len() > 3 {
        let i = match find_ear(&working) {
            Some(i) => i,
            // No ear on a full pass: the simple-outline assumption does not
            // hold. Partial output is the documented degraded result.
            None => return triangles,
        };

        let n = working.len();
        let p0 = working[i];
        let p1 = working[(i + 1) % n];
        let p2 = working[(i + 2) % n];
        triangles.push(Triangle::new(p0, p1, p2));

        if let Some(pos) = working.iter().position(|p| *p == p1) {
            working.remove(pos);
        }
    }

    triangles.push(Triangle::new(working[0], working[1], working[2]));
    triangles
}

/// Triangulate a shape's outline. Empty and degenerate shapes produce no
/// triangles; the shape itself is never mutated.
pub fn triangulate(shape: &PolygonShape) -> Vec<Triangle> {
    triangulate_points(shape.points())
}
