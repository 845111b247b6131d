// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window, spawn, and course configuration.
//!
//! Every field has a default, so a course file only needs the parts it changes. Unknown fields
//! are ignored, which lets a course live inside a larger game configuration file.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use understory_ordered_index::KeyRange;

use crate::error::ConfigError;
use crate::obstacle::{ObstacleKind, ObstacleSpec};

/// Distances that define the view window around a cursor on the track.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// How far behind the cursor obstacles stay visible.
    pub behind: f64,
    /// How far ahead of the cursor obstacles become visible.
    pub ahead: f64,
    /// Obstacles further than this behind the cursor are evicted.
    pub evict_behind: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            behind: 200.0,
            ahead: 1000.0,
            evict_behind: 300.0,
        }
    }
}

impl WindowConfig {
    /// Check that all distances are finite and non-negative, and that eviction happens no
    /// earlier than an obstacle leaves the visible window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [self.behind, self.ahead, self.evict_behind]
            .iter()
            .all(|d| d.is_finite() && *d >= 0.0);
        if !finite || self.evict_behind < self.behind {
            return Err(ConfigError::InvalidWindow {
                behind: self.behind,
                ahead: self.ahead,
                evict_behind: self.evict_behind,
            });
        }
        Ok(())
    }

    /// Inclusive key range visible from `cursor`.
    pub fn visible_range(&self, cursor: f64) -> KeyRange<f64> {
        KeyRange::<f64>::around(cursor, self.behind, self.ahead)
    }

    /// Keys strictly below this are evicted at `cursor`.
    pub fn evict_threshold(&self, cursor: f64) -> f64 {
        cursor - self.evict_behind
    }
}

/// Parameters for placing random obstacles ahead of the cursor.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Closest spawn distance ahead of the cursor.
    pub min_ahead: u32,
    /// Farthest spawn distance ahead of the cursor (inclusive).
    pub max_ahead: u32,
    /// Lane positions for obstacles that occupy a single lane.
    pub lanes: Vec<f64>,
    /// Fixed lane position for holes, which extend down across lanes.
    pub hole_lane: f64,
    /// Kinds to choose from.
    pub kinds: Vec<ObstacleKind>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            min_ahead: 400,
            max_ahead: 800,
            lanes: vec![225.0, 325.0],
            hole_lane: 225.0,
            kinds: ObstacleKind::ALL.to_vec(),
        }
    }
}

impl SpawnConfig {
    /// Check the distance range, lanes, and kinds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_ahead > self.max_ahead {
            return Err(ConfigError::InvalidSpawn {
                min_ahead: self.min_ahead,
                max_ahead: self.max_ahead,
            });
        }
        if self.lanes.is_empty()
            || !self.hole_lane.is_finite()
            || self.lanes.iter().any(|y| !y.is_finite())
        {
            return Err(ConfigError::NoLanes);
        }
        if self.kinds.is_empty() {
            return Err(ConfigError::NoKinds);
        }
        Ok(())
    }
}

/// A full course: window, spawn parameters, and the obstacles present at the start.
///
/// ```json
/// {
///   "window": { "behind": 200, "ahead": 1000, "evict_behind": 300 },
///   "obstacles": [
///     { "x": 400, "y": 225, "type": "rock" },
///     { "x": 900, "y": 325, "type": "tree" }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    /// View window distances.
    pub window: WindowConfig,
    /// Random spawn parameters.
    pub spawn: SpawnConfig,
    /// Obstacles loaded when the course starts or resets.
    pub obstacles: Vec<ObstacleSpec>,
}

impl CourseConfig {
    /// Parse and validate a course from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let course: Self = serde_json::from_str(json)?;
        course.validate()?;
        Ok(course)
    }

    /// Parse and validate a course from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let course: Self = serde_json::from_reader(reader)?;
        course.validate()?;
        Ok(course)
    }

    /// Parse and validate a course from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Validate the window, the spawn parameters, and every initial obstacle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        self.spawn.validate()?;
        for (index, spec) in self.obstacles.iter().enumerate() {
            if !spec.x.is_finite() || !spec.y.is_finite() {
                return Err(ConfigError::InvalidObstacle {
                    index,
                    x: spec.x,
                    y: spec.y,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let course = CourseConfig::from_json_str("{}").unwrap();
        assert_eq!(course, CourseConfig::default());
        assert_eq!(course.window.behind, 200.0);
        assert_eq!(course.spawn.lanes, [225.0, 325.0]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let course = CourseConfig::from_json_str(
            r#"{ "title": "2D Car Game", "initial_energy": 100,
                 "obstacles": [{ "x": 500, "y": 225, "type": "hole" }] }"#,
        )
        .unwrap();
        assert_eq!(course.obstacles.len(), 1);
        assert_eq!(course.obstacles[0].kind, ObstacleKind::Hole);
    }

    #[test]
    fn window_that_evicts_visible_obstacles_is_rejected() {
        let err = CourseConfig::from_json_str(r#"{ "window": { "behind": 400 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWindow { behind, .. } if behind == 400.0));
    }

    #[test]
    fn inverted_spawn_range_is_rejected() {
        let err =
            CourseConfig::from_json_str(r#"{ "spawn": { "min_ahead": 900, "max_ahead": 100 } }"#)
                .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSpawn {
                min_ahead: 900,
                max_ahead: 100
            }
        ));
    }

    #[test]
    fn empty_lanes_and_kinds_are_rejected() {
        let lanes = CourseConfig::from_json_str(r#"{ "spawn": { "lanes": [] } }"#).unwrap_err();
        assert!(matches!(lanes, ConfigError::NoLanes));
        let kinds = CourseConfig::from_json_str(r#"{ "spawn": { "kinds": [] } }"#).unwrap_err();
        assert!(matches!(kinds, ConfigError::NoKinds));
    }

    #[test]
    fn unknown_obstacle_type_is_a_json_error() {
        let err = CourseConfig::from_json_str(
            r#"{ "obstacles": [{ "x": 1, "y": 2, "type": "cactus" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CourseConfig::from_path("/definitely/not/here/course.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn visible_range_and_threshold_follow_cursor() {
        let w = WindowConfig::default();
        assert_eq!(w.visible_range(1000.0), KeyRange::new(800.0, 2000.0));
        assert_eq!(w.evict_threshold(1000.0), 700.0);
    }
}
