// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a cursor along a course, spawning obstacles ahead and evicting the ones passed.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example obstacle_window_drive`
//! - `cargo run -p understory_demos --example obstacle_window_drive -- path/to/course.json`

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_obstacle_window::{CourseConfig, ObstacleWindow};

const DEFAULT_COURSE: &str = r#"{
    "obstacles": [
        { "x": 400, "y": 225, "type": "rock" },
        { "x": 800, "y": 325, "type": "tree" },
        { "x": 1200, "y": 225, "type": "pothole" },
        { "x": 1600, "y": 225, "type": "hole" }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let course = match std::env::args().nth(1) {
        Some(path) => CourseConfig::from_path(path)?,
        None => CourseConfig::from_json_str(DEFAULT_COURSE)?,
    };
    let mut window = ObstacleWindow::from_course(&course)?;
    let mut rng = StdRng::seed_from_u64(2025);

    let mut cursor = 0.0;
    for tick in 0..40 {
        if tick % 5 == 0 {
            window.spawn_random(cursor, &mut rng)?;
        }
        let visible: Vec<_> = window
            .visible(cursor)?
            .iter()
            .map(|o| (o.key(), o.kind.name()))
            .collect();
        let evicted = window.evict_passed(cursor)?;
        info!(
            cursor,
            visible = visible.len(),
            evicted = evicted.len(),
            held = window.len(),
            "tick"
        );
        println!("cursor={cursor:>6.0} visible={visible:?}");
        cursor += 100.0;
    }

    println!("index height={} size={}", window.index().height(), window.len());
    print!("{}", window.index().dump());
    Ok(())
}
