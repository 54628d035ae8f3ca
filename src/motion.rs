//! Per-frame point motion with reflective boundary bouncing.

use glam::Vec2;
use rand::Rng;

use crate::point::PointStore;
use crate::viewport::Viewport;

/// Drives one point by a constant per-axis speed, bouncing off the viewport
/// edges.
///
/// The point itself lives in the [`PointStore`]; a `MovingPoint` holds its
/// index plus the immutable speed and the two mutable direction flags.
///
/// Reflection flips a direction flag only after the move that crossed the
/// bound, so a point may sit up to one step's speed outside the viewport for
/// a single frame before the flipped flag walks it back. That overshoot is
/// intended behavior; clamping would visibly change how dots graze the
/// edges.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingPoint {
    index: usize,
    speed: Vec2,
    move_right: bool,
    move_down: bool,
}

impl MovingPoint {
    pub fn new(index: usize, speed: Vec2, move_right: bool, move_down: bool) -> Self {
        Self {
            index,
            speed,
            move_right,
            move_down,
        }
    }

    /// Index of the driven point in the store.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Per-axis speed, fixed at construction. Zero freezes that axis.
    pub fn speed(&self) -> Vec2 {
        self.speed
    }

    /// Advance the driven point one step against the current viewport.
    pub fn update(&mut self, store: &mut PointStore, viewport: Viewport) {
        let mut p = store.get(self.index);

        if self.move_right {
            p.x += self.speed.x;
        } else {
            p.x -= self.speed.x;
        }

        if self.move_down {
            p.y += self.speed.y;
        } else {
            p.y -= self.speed.y;
        }

        if self.move_right && p.x >= viewport.width {
            self.move_right = false;
        }
        if !self.move_right && p.x <= 0.0 {
            self.move_right = true;
        }

        if self.move_down && p.y >= viewport.height {
            self.move_down = false;
        }
        if !self.move_down && p.y <= 0.0 {
            self.move_down = true;
        }

        store.set(self.index, p);
    }
}

/// Scatter `count` points uniformly over the viewport with random speeds and
/// directions.
///
/// Speeds are drawn per axis from `[min_speed, max_speed]`; positions from
/// the full viewport extent. Randomness lives only here; everything after
/// startup is deterministic.
pub fn scatter<R: Rng>(
    rng: &mut R,
    count: usize,
    viewport: Viewport,
    min_speed: f32,
    max_speed: f32,
) -> (PointStore, Vec<MovingPoint>) {
    let mut store = PointStore::new(count);
    let mut movers = Vec::with_capacity(count);

    for i in 0..count {
        let position = Vec2::new(
            rng.gen_range(0.0..=viewport.width),
            rng.gen_range(0.0..=viewport.height),
        );
        let speed = Vec2::new(
            rng.gen_range(min_speed..=max_speed),
            rng.gen_range(min_speed..=max_speed),
        );
        store.set(i, position);
        movers.push(MovingPoint::new(
            i,
            speed,
            rng.gen_bool(0.5),
            rng.gen_bool(0.5),
        ));
    }

    (store, movers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const VIEW: Viewport = Viewport::new(640.0, 480.0);

    fn single(position: Vec2, speed: Vec2, right: bool, down: bool) -> (PointStore, MovingPoint) {
        let mut store = PointStore::new(1);
        store.set(0, position);
        (store, MovingPoint::new(0, speed, right, down))
    }

    #[test]
    fn test_moves_by_speed() {
        let (mut store, mut mover) = single(Vec2::new(100.0, 100.0), Vec2::new(2.0, 3.0), true, true);
        mover.update(&mut store, VIEW);
        assert_eq!(store.get(0), Vec2::new(102.0, 103.0));

        let (mut store, mut mover) =
            single(Vec2::new(100.0, 100.0), Vec2::new(2.0, 3.0), false, false);
        mover.update(&mut store, VIEW);
        assert_eq!(store.get(0), Vec2::new(98.0, 97.0));
    }

    #[test]
    fn test_reflects_at_right_bound_without_clamping() {
        let (mut store, mut mover) = single(Vec2::new(639.5, 100.0), Vec2::new(2.0, 0.0), true, true);

        // First step overshoots past the bound and flips the flag.
        mover.update(&mut store, VIEW);
        assert_eq!(store.get(0).x, 641.5);

        // Next step walks back inside.
        mover.update(&mut store, VIEW);
        assert_eq!(store.get(0).x, 639.5);
    }

    #[test]
    fn test_reflects_at_left_and_bottom() {
        let (mut store, mut mover) = single(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), false, false);
        mover.update(&mut store, VIEW);
        assert_eq!(store.get(0), Vec2::new(-1.0, -1.0));
        mover.update(&mut store, VIEW);
        assert_eq!(store.get(0), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_overshoot_stays_bounded_over_many_steps() {
        let mut rng = StdRng::seed_from_u64(7);
        let (mut store, mut movers) = scatter(&mut rng, 50, VIEW, 0.0, 2.0);

        for _ in 0..10_000 {
            for mover in &mut movers {
                mover.update(&mut store, VIEW);
            }
        }

        for mover in &movers {
            let p = store.get(mover.index());
            let s = mover.speed();
            assert!(p.x >= -s.x && p.x <= VIEW.width + s.x, "x escaped: {}", p.x);
            assert!(p.y >= -s.y && p.y <= VIEW.height + s.y, "y escaped: {}", p.y);
        }
    }

    #[test]
    fn test_zero_speed_freezes_axis() {
        let (mut store, mut mover) = single(Vec2::new(50.0, 60.0), Vec2::ZERO, true, true);
        for _ in 0..100 {
            mover.update(&mut store, VIEW);
        }
        assert_eq!(store.get(0), Vec2::new(50.0, 60.0));
    }

    #[test]
    fn test_resize_moves_reflection_bound() {
        let (mut store, mut mover) = single(Vec2::new(639.0, 100.0), Vec2::new(2.0, 0.0), true, true);

        // Under the grown viewport the point sails straight past x = 640.
        let grown = Viewport::new(800.0, 600.0);
        mover.update(&mut store, grown);
        mover.update(&mut store, grown);
        assert_eq!(store.get(0).x, 643.0);

        // It keeps going right until the new bound.
        for _ in 0..200 {
            mover.update(&mut store, grown);
        }
        assert!(store.get(0).x <= grown.width + 2.0);
    }

    #[test]
    fn test_scatter_within_viewport_and_speed_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let (store, movers) = scatter(&mut rng, 200, VIEW, 0.5, 2.0);

        assert_eq!(store.len(), 200);
        assert_eq!(movers.len(), 200);
        for p in store.iter() {
            assert!(p.x >= 0.0 && p.x <= VIEW.width);
            assert!(p.y >= 0.0 && p.y <= VIEW.height);
        }
        for mover in &movers {
            let s = mover.speed();
            assert!(s.x >= 0.5 && s.x <= 2.0);
            assert!(s.y >= 0.5 && s.y <= 2.0);
        }
    }

    #[test]
    fn test_scatter_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let (store, movers) = scatter(&mut rng, 0, VIEW, 0.0, 2.0);
        assert!(store.is_empty());
        assert!(movers.is_empty());
    }
}
