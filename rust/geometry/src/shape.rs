// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor-plan shapes
//!
//! A `PolygonShape` owns one closed outline plus its style attributes.
//! Extents and center are derived state: recomputed whenever the points
//! change, `None` while the shape is empty.

use nalgebra::Point2;
use rustc_hash::FxHashMap;

use crate::bounds::BoundingBox;
use crate::transform::Transform2D;

/// Style attributes (`fill`, `stroke`, ...) keyed by property name.
pub type StyleMap = FxHashMap<String, String>;

/// Fill color assumed when a shape's style has no `fill` entry.
pub const DEFAULT_FILL: &str = "#000000";

/// One closed outline from a floor-plan document.
#[derive(Debug, Clone)]
pub struct PolygonShape {
    points: Vec<Point2<f64>>,
    bounds: Option<BoundingBox>,
    /// Style attributes; only `fill` is consulted downstream.
    pub style: StyleMap,
    /// Author-facing name (an Inkscape label). May be empty.
    pub label: String,
    /// Document id of the source element. May be empty.
    pub id: String,
}

impl PolygonShape {
    /// Build a shape; derived extents are computed immediately.
    pub fn new(points: Vec<Point2<f64>>, style: StyleMap, label: String, id: String) -> Self {
        let bounds = BoundingBox::from_points(&points);
        Self {
            points,
            bounds,
            style,
            label,
            id,
        }
    }

    /// Boundary vertices in drawing order.
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rewrite every point through `transform` and recompute extents.
    ///
    /// The only mutation a shape supports. Collapsing maps are accepted;
    /// they just leave a zero-area bounding box behind.
    pub fn apply_transform(&mut self, transform: &Transform2D) {
        transform.apply(&mut self.points);
        self.bounds = BoundingBox::from_points(&self.points);
    }

    /// Extent of the outline, `None` for an empty shape.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounds
    }

    /// Bounding-box midpoint, `None` for an empty shape.
    pub fn center(&self) -> Option<Point2<f64>> {
        self.bounds.map(|b| b.center())
    }

    /// The `fill` style entry, or the default black.
    pub fn fill_color(&self) -> &str {
        self.style
            .get("fill")
            .map(String::as_str)
            .unwrap_or(DEFAULT_FILL)
    }
}
