// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene normalization
//!
//! Folds per-shape extents into a scene bounding box and re-centers every
//! shape about the origin with a pure translation.

use crate::bounds::BoundingBox;
use crate::shape::PolygonShape;
use crate::transform::Transform2D;

/// Union of all shape bounding boxes. `None` when no shape has any points;
/// shapes without extents are skipped, not counted.
pub fn scene_bounding_box(shapes: &[PolygonShape]) -> Option<BoundingBox> {
    shapes
        .iter()
        .filter_map(|s| s.bounding_box())
        .reduce(|acc, b| acc.union(&b))
}

/// Translate every shape so the scene extent is centered on the origin.
///
/// Returns the bounding box the translation was derived from. A scene with
/// no extent is left untouched and returns `None`.
pub fn center_scene(shapes: &mut [PolygonShape]) -> Option<BoundingBox> {
    let bbox = scene_bounding_box(shapes)?;
    let center = bbox.center();
    let shift = Transform2D::translation(-center.x, -center.y);

    for shape in shapes.iter_mut() {
        shape.apply_transform(&shift);
    }

    Some(bbox)
}
