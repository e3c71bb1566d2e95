//! # svgplan Geometry
//!
//! 2D geometry for floor-plan processing: affine transforms, polygon
//! shapes with derived extents, geometric predicates, ear-clipping
//! triangulation, and scene normalization.
//!
//! ## Overview
//!
//! The pipeline this crate serves is small: shapes come out of an SVG
//! document with their transforms already applied, get centered as one
//! scene, and are decomposed into triangles that downstream exporters
//! serialize. Everything here works on `nalgebra::Point2<f64>` in plan
//! coordinates (y grows downward, as drawn).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use svgplan_geometry::{center_scene, triangulate, PolygonShape, StyleMap};
//!
//! let mut shapes: Vec<PolygonShape> = load_shapes();
//! let extent = center_scene(&mut shapes);
//!
//! for shape in &shapes {
//!     for triangle in triangulate(shape) {
//!         println!("{:?} area {}", triangle.vertices(), triangle.area());
//!     }
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialization support for the plain geometry types

pub mod bounds;
pub mod extrusion;
pub mod predicates;
pub mod scene;
pub mod shape;
pub mod transform;
pub mod triangulation;

// Re-export the nalgebra point types used throughout the API
pub use nalgebra::{Point2, Vector2};

pub use bounds::BoundingBox;
pub use extrusion::{wall_segments, WallSegment};
pub use predicates::{cross, is_convex_vertex, point_in_polygon};
pub use scene::{center_scene, scene_bounding_box};
pub use shape::{PolygonShape, StyleMap, DEFAULT_FILL};
pub use transform::Transform2D;
pub use triangulation::{signed_area, triangulate, triangulate_points, Triangle};
