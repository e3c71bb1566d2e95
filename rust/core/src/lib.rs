// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # svgplan Core Reader
//!
//! SVG floor-plan reading built on [nom](https://docs.rs/nom): a minimal
//! element-tree parser plus the attribute micro-grammars Inkscape plans
//! actually use (style declarations, transform lists, path point data).
//!
//! ## Overview
//!
//! A floor plan is a named `<g>` group whose `path` and `rect` children
//! are closed outlines. [`read_floor_plan`] parses the document, locates
//! the group by id, and returns one [`PolygonShape`] per outline with the
//! child's transform applied and the group's transform applied on top,
//! minus its translation.
//!
//! This is not a general XML or SVG implementation; see the module docs
//! for what each layer accepts.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use svgplan_core::read_floor_plan;
//!
//! let svg = std::fs::read_to_string("floorplan.svg")?;
//! let shapes = read_floor_plan(&svg, "gFloorPlan")?;
//! for shape in &shapes {
//!     println!("{}: {} points", shape.id, shape.points().len());
//! }
//! ```

pub mod document;
pub mod error;
pub mod parser;
pub mod reader;

pub use document::{parse_document, Element};
pub use error::{Result, SvgError};
pub use parser::{parse_path_points, parse_style, parse_transform};
pub use reader::{read_floor_plan, shapes_from_group};

// Re-export the shape type readers hand back
pub use svgplan_geometry::PolygonShape;
