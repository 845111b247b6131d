// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`ObstacleWindow`]: obstacles in an ordered index, viewed through a window that slides with a
//! cursor along the track.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, trace};
use understory_ordered_index::AvlTree;

use crate::config::{CourseConfig, SpawnConfig, WindowConfig};
use crate::error::{ConfigError, WindowError};
use crate::obstacle::{Obstacle, ObstacleKind};

/// Obstacles keyed by track position, with visibility and eviction relative to a cursor.
///
/// At most one obstacle occupies a given track position; inserting at an occupied position
/// replaces the previous obstacle.
#[derive(Debug)]
pub struct ObstacleWindow {
    config: WindowConfig,
    spawn: SpawnConfig,
    tree: AvlTree<f64, Obstacle>,
    initial: Vec<Obstacle>,
}

impl ObstacleWindow {
    /// Create an empty window with default spawn parameters.
    pub fn new(config: WindowConfig) -> Result<Self, WindowError> {
        config.validate()?;
        Ok(Self {
            config,
            spawn: SpawnConfig::default(),
            tree: AvlTree::new(),
            initial: Vec::new(),
        })
    }

    /// Replace the spawn parameters.
    pub fn with_spawn(mut self, spawn: SpawnConfig) -> Result<Self, WindowError> {
        spawn.validate()?;
        self.spawn = spawn;
        Ok(self)
    }

    /// Build a window from a course and load its initial obstacles.
    #[instrument(skip_all, fields(obstacles = course.obstacles.len()), err)]
    pub fn from_course(course: &CourseConfig) -> Result<Self, WindowError> {
        course.validate()?;
        let mut window = Self::new(course.window)?.with_spawn(course.spawn.clone())?;
        window.load_initial(course.obstacles.iter().copied().map(Obstacle::from))?;
        Ok(window)
    }

    /// Insert obstacles and remember them as part of the starting set restored by
    /// [`ObstacleWindow::reset`]. Returns how many were inserted.
    pub fn load_initial(
        &mut self,
        obstacles: impl IntoIterator<Item = Obstacle>,
    ) -> Result<usize, WindowError> {
        let mut loaded = 0;
        for obstacle in obstacles {
            self.insert(obstacle)?;
            self.initial.push(obstacle);
            loaded += 1;
        }
        debug!(loaded, total = self.tree.len(), "initial obstacles loaded");
        Ok(loaded)
    }

    /// Insert an obstacle at its track position, returning the obstacle it replaced.
    pub fn insert(&mut self, obstacle: Obstacle) -> Result<Option<Obstacle>, WindowError> {
        let x = obstacle.key();
        if !x.is_finite() {
            return Err(WindowError::NonFiniteKey(x));
        }
        let replaced = self.tree.insert(x, obstacle);
        let kind = obstacle.kind.name();
        if let Some(old) = &replaced {
            debug!(x, kind, old = old.kind.name(), "obstacle replaced");
        } else {
            debug!(x, y = obstacle.position.y, kind, "obstacle added");
        }
        Ok(replaced)
    }

    /// Remove the obstacle at track position `x`, if any.
    pub fn remove(&mut self, x: f64) -> Option<Obstacle> {
        if !x.is_finite() {
            return None;
        }
        let removed = self.tree.remove(&x);
        if removed.is_some() {
            debug!(x, "obstacle removed");
        }
        removed
    }

    /// Obstacles inside the view window around `cursor`, in ascending track order.
    pub fn visible(&self, cursor: f64) -> Result<Vec<&Obstacle>, WindowError> {
        check_cursor(cursor)?;
        let range = self.config.visible_range(cursor);
        let hits: Vec<_> = self.tree.range_in(range).map(|(_, o)| o).collect();
        trace!(cursor, min = range.min, max = range.max, hits = hits.len(), "visible query");
        Ok(hits)
    }

    /// Remove and return every obstacle the cursor has left far enough behind.
    pub fn evict_passed(&mut self, cursor: f64) -> Result<Vec<Obstacle>, WindowError> {
        check_cursor(cursor)?;
        let threshold = self.config.evict_threshold(cursor);
        let evicted: Vec<_> = self
            .tree
            .remove_below(threshold)
            .into_iter()
            .map(|(_, o)| o)
            .collect();
        if !evicted.is_empty() {
            debug!(
                cursor,
                threshold,
                evicted = evicted.len(),
                remaining = self.tree.len(),
                "evicted passed obstacles"
            );
        }
        Ok(evicted)
    }

    /// Drop every obstacle and reload the starting set.
    pub fn reset(&mut self) {
        self.tree.clear();
        self.tree.extend(self.initial.iter().map(|o| (o.key(), *o)));
        debug!(obstacles = self.tree.len(), "obstacles reset");
    }

    /// Place a random obstacle ahead of `cursor` and insert it.
    ///
    /// The distance ahead is drawn uniformly from `min_ahead..=max_ahead`. Holes use the hole
    /// lane; every other kind picks a random lane.
    pub fn spawn_random<R: Rng + ?Sized>(
        &mut self,
        cursor: f64,
        rng: &mut R,
    ) -> Result<Obstacle, WindowError> {
        check_cursor(cursor)?;
        let offset = rng.gen_range(self.spawn.min_ahead..=self.spawn.max_ahead);
        let kind = *self.spawn.kinds.choose(rng).ok_or(ConfigError::NoKinds)?;
        let y = match kind {
            ObstacleKind::Hole => self.spawn.hole_lane,
            _ => *self.spawn.lanes.choose(rng).ok_or(ConfigError::NoLanes)?,
        };
        let obstacle = Obstacle::new(cursor + f64::from(offset), y, kind);
        self.insert(obstacle)?;
        Ok(obstacle)
    }

    /// Read-only access to the underlying index, for diagnostics.
    pub fn index(&self) -> &AvlTree<f64, Obstacle> {
        &self.tree
    }

    /// Window distances in use.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Spawn parameters in use.
    pub fn spawn_config(&self) -> &SpawnConfig {
        &self.spawn
    }

    /// Number of obstacles currently held.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether no obstacles are held.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

fn check_cursor(cursor: f64) -> Result<(), WindowError> {
    if cursor.is_finite() {
        Ok(())
    } else {
        Err(WindowError::NonFiniteCursor(cursor))
    }
}
