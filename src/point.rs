//! Storage for point positions.

use glam::Vec2;

/// Owns the positions of all points, fixed at N for the run's duration.
///
/// Indices are stable: index `i` refers to the same point for the whole run,
/// which is what lets [`crate::motion::MovingPoint`] hold an index instead of
/// a reference. Positions are mutated in place every frame.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    positions: Vec<Vec2>,
}

impl PointStore {
    /// Create a store of `count` points, all at the origin.
    pub fn new(count: usize) -> Self {
        Self {
            positions: vec![Vec2::ZERO; count],
        }
    }

    /// Create a store from explicit positions.
    pub fn from_positions(positions: Vec<Vec2>) -> Self {
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, index: usize) -> Vec2 {
        self.positions[index]
    }

    pub fn set(&mut self, index: usize, position: Vec2) {
        self.positions[index] = position;
    }

    /// All positions, in index order. This is the slice handed to the render
    /// sink as the dot list.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.positions.iter().copied()
    }
}
