// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Obstacle Window: obstacles on a scrolling track, indexed by position.
//!
//! Obstacles are stored in an [`understory_ordered_index::AvlTree`] keyed by their track
//! position. Once per update the caller asks for the obstacles around the cursor and evicts the
//! ones left behind:
//!
//! ```rust
//! use understory_obstacle_window::{CourseConfig, ObstacleWindow};
//!
//! let course = CourseConfig::from_json_str(r#"{
//!     "obstacles": [
//!         { "x": 400, "y": 225, "type": "rock" },
//!         { "x": 900, "y": 325, "type": "tree" },
//!         { "x": 2500, "y": 225, "type": "hole" }
//!     ]
//! }"#)?;
//! let mut window = ObstacleWindow::from_course(&course)?;
//!
//! // Default window: 200 behind, 1000 ahead.
//! let visible: Vec<_> = window.visible(0.0)?.iter().map(|o| o.kind.name()).collect();
//! assert_eq!(visible, ["rock", "tree"]);
//!
//! // Obstacles more than 300 behind the cursor are dropped.
//! let passed = window.evict_passed(1000.0)?;
//! assert_eq!(passed.len(), 1);
//! assert_eq!(window.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Course files are JSON and every field is optional; see [`CourseConfig`]. Random obstacles can
//! be placed ahead of the cursor with [`ObstacleWindow::spawn_random`].
//!
//! Collision, drawing, and scoring are left to the caller: [`Obstacle::bounds`] gives the
//! footprint as a [`kurbo::Rect`].
//!
//! ## Logging
//!
//! Insertions, evictions, resets, and spawns are reported as `tracing` events at `DEBUG` level;
//! each visible-window query emits a `TRACE` event.

pub mod config;
pub mod error;
pub mod obstacle;
pub mod window;

pub use config::{CourseConfig, SpawnConfig, WindowConfig};
pub use error::{ConfigError, WindowError};
pub use obstacle::{Obstacle, ObstacleKind, ObstacleSpec};
pub use window::ObstacleWindow;
