// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for floor plan document operations
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors that can occur when loading or validating a floor plan document
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid floor plan document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Floor plan scale must be positive, got {0}")]
    InvalidScale(f64),

    #[error("Wall '{id}': {dimension} must be positive, got {value}")]
    InvalidWall {
        id: String,
        dimension: &'static str,
        value: f64,
    },

    #[error("Room '{id}': bounds {dimension} must be positive, got {value}")]
    InvalidRoom {
        id: String,
        dimension: &'static str,
        value: f64,
    },
}
