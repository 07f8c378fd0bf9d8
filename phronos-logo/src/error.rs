// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the logo widget.

use thiserror::Error;

/// Errors surfaced by the widget's fallible helpers.
///
/// The widget itself never returns these to its caller; construction and the
/// mutators log them and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogoError {
    /// No element with the given id exists in the document.
    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    /// The host handed over an options object that does not deserialize.
    #[error("Invalid display options: {0}")]
    InvalidOptions(String),

    /// Building or inserting DOM nodes failed.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// No factory is registered under the requested name.
    #[error("Unknown widget: {0}")]
    UnknownWidget(String),
}
