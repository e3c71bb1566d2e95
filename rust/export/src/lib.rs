// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # svgplan Exporters
//!
//! Serializers for the triangulated scene: the delimited row format
//! consumed by downstream tooling, and Maya MEL scripts that rebuild the
//! plan as curves plus wall boxes.

pub mod maya;
pub mod rows;

pub use maya::{write_mel, WallOptions};
pub use rows::{scene_rows, shape_row};
