// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Obstacle payloads stored in the window's index.

use kurbo::{Point, Rect, Size};
use serde::Deserialize;

/// Category tag of an obstacle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    /// A rock sitting in one lane.
    Rock,
    /// A tree sitting in one lane.
    Tree,
    /// A shallow pothole in one lane.
    Pothole,
    /// A hole spanning the road from the upper lane down.
    Hole,
}

impl ObstacleKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 4] = [Self::Rock, Self::Tree, Self::Pothole, Self::Hole];

    /// Lowercase name, as used in course files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Tree => "tree",
            Self::Pothole => "pothole",
            Self::Hole => "hole",
        }
    }
}

/// An obstacle placed on the track.
///
/// The index key is `position.x`; `position.y` selects the lane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Obstacle {
    /// Top-left corner in track coordinates.
    pub position: Point,
    /// Category tag.
    pub kind: ObstacleKind,
    /// Footprint size.
    pub size: Size,
}

impl Obstacle {
    /// Footprint used when a course file does not say otherwise.
    pub const DEFAULT_SIZE: Size = Size::new(50.0, 50.0);

    /// Create an obstacle with the default footprint.
    pub const fn new(x: f64, y: f64, kind: ObstacleKind) -> Self {
        Self {
            position: Point::new(x, y),
            kind,
            size: Self::DEFAULT_SIZE,
        }
    }

    /// Position along the track; the key under which the obstacle is indexed.
    pub const fn key(&self) -> f64 {
        self.position.x
    }

    /// Axis-aligned footprint, for collision and drawing collaborators.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

/// One obstacle entry of a course file: `{ "x": 400, "y": 225, "type": "rock" }`.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct ObstacleSpec {
    /// Position along the track.
    pub x: f64,
    /// Lane position.
    pub y: f64,
    /// Category tag.
    #[serde(rename = "type")]
    pub kind: ObstacleKind,
}

impl From<ObstacleSpec> for Obstacle {
    fn from(spec: ObstacleSpec) -> Self {
        Self::new(spec.x, spec.y, spec.kind)
    }
}
