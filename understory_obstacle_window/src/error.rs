// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for course loading and window operations.

use thiserror::Error;

/// Failure while reading or validating a course configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading a course file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON or an unknown obstacle type.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Window distances must be finite, non-negative, and evict no earlier than they hide.
    #[error("invalid window: behind={behind}, ahead={ahead}, evict_behind={evict_behind}")]
    InvalidWindow {
        /// Visible distance behind the cursor.
        behind: f64,
        /// Visible distance ahead of the cursor.
        ahead: f64,
        /// Eviction distance behind the cursor.
        evict_behind: f64,
    },
    /// Spawn distances must satisfy `min_ahead <= max_ahead`.
    #[error("invalid spawn distance range {min_ahead}..={max_ahead}")]
    InvalidSpawn {
        /// Closest spawn distance ahead of the cursor.
        min_ahead: u32,
        /// Farthest spawn distance ahead of the cursor.
        max_ahead: u32,
    },
    /// Spawning needs at least one finite lane position.
    #[error("spawn config needs at least one finite lane")]
    NoLanes,
    /// Spawning needs at least one obstacle kind.
    #[error("spawn config needs at least one obstacle kind")]
    NoKinds,
    /// An initial obstacle has a non-finite position.
    #[error("obstacle #{index} has a non-finite position ({x}, {y})")]
    InvalidObstacle {
        /// Position of the entry in the course file.
        index: usize,
        /// Track position.
        x: f64,
        /// Lane position.
        y: f64,
    },
}

/// Failure of an [`ObstacleWindow`](crate::ObstacleWindow) operation.
#[derive(Debug, Error)]
pub enum WindowError {
    /// Obstacle keys must be finite to be ordered.
    #[error("obstacle position must be finite, got {0}")]
    NonFiniteKey(f64),
    /// The window cursor must be finite.
    #[error("cursor must be finite, got {0}")]
    NonFiniteCursor(f64),
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
