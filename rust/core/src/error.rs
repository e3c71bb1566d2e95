// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for floor-plan reading.

/// Result type alias for reader operations.
pub type Result<T> = std::result::Result<T, SvgError>;

/// Errors that can occur while reading a floor-plan document.
#[derive(Debug, thiserror::Error)]
pub enum SvgError {
    /// The markup itself could not be parsed.
    #[error("malformed markup at byte {offset}: {message}")]
    Markup { offset: usize, message: String },

    /// A numeric attribute did not parse as a float.
    #[error("malformed number: {0:?}")]
    Number(String),

    /// A style declaration entry had no `property:value` form.
    #[error("malformed style entry: {0:?}")]
    Style(String),

    /// A transform attribute did not parse, or used an unsupported function.
    #[error("malformed transform attribute: {0:?}")]
    Transform(String),

    /// A path data token was not a coordinate pair or command letter.
    #[error("malformed path data token: {0:?}")]
    Path(String),

    /// The requested group id does not exist in the document.
    #[error("no group {0:?} in document")]
    GroupNotFound(String),
}
