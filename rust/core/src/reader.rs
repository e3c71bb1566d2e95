// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor-plan extraction
//!
//! Walks a parsed document, finds the requested group, and turns its path
//! and rect children into shapes with all transforms applied.

use svgplan_geometry::{PolygonShape, StyleMap, Transform2D};

use crate::document::{parse_document, Element};
use crate::error::{Result, SvgError};
use crate::parser::{parse_number, parse_path_points, parse_style, parse_transform, rect_corners};

/// Attribute carrying the author-facing name in Inkscape documents.
const LABEL_ATTR: &str = "inkscape:label";

/// Read every shape under the named group of an SVG document.
///
/// Each path or rect child becomes one shape with its own transform
/// applied, then the group's transform with the translation components
/// zeroed: a layer's offset is dropped, its scaling kept. Children of
/// other kinds (nested groups, text, ...) are skipped.
pub fn read_floor_plan(svg: &str, group_id: &str) -> Result<Vec<PolygonShape>> {
    let root = parse_document(svg)?;
    let group = root
        .find_by_id(group_id)
        .ok_or_else(|| SvgError::GroupNotFound(group_id.to_string()))?;

    shapes_from_group(group)
}

/// Build shapes from the direct children of a group element.
pub fn shapes_from_group(group: &Element) -> Result<Vec<PolygonShape>> {
    let group_transform = match group.attr("transform") {
        Some(value) => parse_transform(value)?.without_translation(),
        None => Transform2D::IDENTITY,
    };

    let mut shapes = Vec::new();
    for child in &group.children {
        let shape = match child.local_name() {
            "path" => Some(shape_from_path(child)?),
            "rect" => Some(shape_from_rect(child)?),
            _ => None,
        };
        if let Some(mut shape) = shape {
            shape.apply_transform(&group_transform);
            shapes.push(shape);
        }
    }

    Ok(shapes)
}

fn shape_from_path(element: &Element) -> Result<PolygonShape> {
    let points = match element.attr("d") {
        Some(d) => parse_path_points(d)?,
        None => Vec::new(),
    };

    let mut shape = PolygonShape::new(points, style_of(element)?, label_of(element), id_of(element));
    shape.apply_transform(&own_transform(element)?);
    Ok(shape)
}

fn shape_from_rect(element: &Element) -> Result<PolygonShape> {
    let x = attr_number(element, "x")?;
    let y = attr_number(element, "y")?;
    let width = attr_number(element, "width")?;
    let height = attr_number(element, "height")?;

    let mut shape = PolygonShape::new(
        rect_corners(x, y, width, height),
        style_of(element)?,
        label_of(element),
        id_of(element),
    );
    shape.apply_transform(&own_transform(element)?);
    Ok(shape)
}

/// Missing placement attributes default to zero, as for an unplaced rect.
fn attr_number(element: &Element, key: &str) -> Result<f64> {
    match element.attr(key) {
        Some(value) => parse_number(value),
        None => Ok(0.0),
    }
}

fn style_of(element: &Element) -> Result<StyleMap> {
    match element.attr("style") {
        Some(value) => parse_style(value),
        None => Ok(StyleMap::default()),
    }
}

fn own_transform(element: &Element) -> Result<Transform2D> {
    match element.attr("transform") {
        Some(value) => parse_transform(value),
        None => Ok(Transform2D::IDENTITY),
    }
}

fn label_of(element: &Element) -> String {
    element.attr(LABEL_ATTR).unwrap_or_default().to_string()
}

fn id_of(element: &Element) -> String {
    element.attr("id").unwrap_or_default().to_string()
}
