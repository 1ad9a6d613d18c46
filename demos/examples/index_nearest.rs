// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Thicket Index: insert points, query nearest, and see an out-of-extent rejection.
//!
//! Run:
//! - `cargo run -p thicket_demos --example index_nearest`

use thicket_index::{Extent, PointIndex};

fn main() {
    let mut idx: PointIndex<&str> = PointIndex::new(Extent::from_size(800.0, 600.0)).unwrap();
    idx.insert(50.0, 500.0, "start").unwrap();
    idx.insert(150.0, 450.0, "a").unwrap();
    idx.insert(400.0, 300.0, "b").unwrap();

    for (x, y) in [(60.0, 480.0), (300.0, 320.0), (790.0, 10.0)] {
        let (key, name, d2) = idx.nearest_with_distance_squared(x, y).unwrap();
        println!("nearest to ({x}, {y}): {name} {key:?} at distance {:.2}", d2.sqrt());
    }

    match idx.insert(900.0, 10.0, "outside") {
        Ok(key) => println!("unexpectedly accepted {key:?}"),
        Err(e) => println!("rejected: {e}"),
    }
    println!("{:?}", idx.backend());
}
