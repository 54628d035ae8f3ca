//! Per-frame proximity graph construction.
//!
//! Every frame, all point pairs closer than the link radius become edges,
//! each carrying a render weight in `[0, 1]` that the render sink uses as
//! line alpha. Distances are compared squared: the threshold test and the
//! fade falloff both work in squared-distance space, so no square root is
//! ever taken.

use glam::Vec2;

use crate::point::PointStore;
use crate::viewport::Viewport;

/// Default link radius in pixels.
pub const DEFAULT_LINK_RADIUS: f32 = 200.0;

/// Weight of a point-to-cursor edge. Cursor edges never fade with distance.
const CURSOR_WEIGHT: f32 = 0.2;

/// Weight of a point-to-point edge when fade mode is off.
const FLAT_WEIGHT: f32 = 0.2;

/// The far end of an edge: another point, or the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeTarget {
    Point(usize),
    Cursor,
}

/// A transient proximity link, rebuilt from scratch every frame.
///
/// `a` and `b` are indices into the point store (or the cursor); positions
/// are resolved at draw time so an edge never outlives the frame that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: EdgeTarget,
    pub weight: f32,
}

/// Distance-proportional edge weight: `(r² − d²) / (2 r²)`.
///
/// 0.5 at zero distance, falling linearly in squared-distance space to 0 at
/// the radius. Callers only evaluate this for `dist_sq < radius_sq`, so the
/// result is always in `(0, 0.5]`.
pub fn fade_weight(dist_sq: f32, radius_sq: f32) -> f32 {
    (radius_sq - dist_sq) / (2.0 * radius_sq)
}

/// Builds the edge set for the current frame.
///
/// Owns a scratch buffer that is cleared and refilled by every
/// [`rebuild`](ProximityGraph::rebuild), so steady-state frames allocate
/// nothing.
#[derive(Debug, Clone)]
pub struct ProximityGraph {
    radius_sq: f32,
    fade: bool,
    cursor_link: bool,
    edges: Vec<Edge>,
}

impl ProximityGraph {
    pub fn new(radius: f32, fade: bool, cursor_link: bool) -> Self {
        Self {
            radius_sq: radius * radius,
            fade,
            cursor_link,
            edges: Vec::new(),
        }
    }

    /// The squared link radius the builder compares against.
    pub fn radius_sq(&self) -> f32 {
        self.radius_sq
    }

    /// Recompute the edge set from the current positions.
    ///
    /// `cursor` is the pointer position in window coordinates (top-left
    /// origin); the y-flip into the point frame happens here. `modulation`
    /// scales every edge weight uniformly; pass `1.0` when no signal source
    /// is active.
    ///
    /// Each unordered pair is visited exactly once; pairs at exactly zero
    /// distance (coincident points, including a point against itself) emit
    /// nothing. The comparison is strict, so a pair sitting exactly on the
    /// radius emits nothing either.
    pub fn rebuild(
        &mut self,
        store: &PointStore,
        viewport: Viewport,
        cursor: Option<Vec2>,
        modulation: f32,
    ) -> &[Edge] {
        self.edges.clear();

        let cursor_scene = if self.cursor_link {
            cursor.map(|c| viewport.cursor_to_scene(c))
        } else {
            None
        };

        for i in 0..store.len() {
            let a = store.get(i);

            if let Some(cursor) = cursor_scene {
                if a.distance_squared(cursor) < self.radius_sq {
                    self.edges.push(Edge {
                        a: i,
                        b: EdgeTarget::Cursor,
                        weight: CURSOR_WEIGHT * modulation,
                    });
                }
            }

            for j in (i + 1)..store.len() {
                let dist_sq = a.distance_squared(store.get(j));
                if dist_sq == 0.0 || dist_sq >= self.radius_sq {
                    continue;
                }

                let weight = if self.fade {
                    fade_weight(dist_sq, self.radius_sq)
                } else {
                    FLAT_WEIGHT
                };

                self.edges.push(Edge {
                    a: i,
                    b: EdgeTarget::Point(j),
                    weight: weight * modulation,
                });
            }
        }

        &self.edges
    }

    /// The edge set from the most recent rebuild.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport::new(640.0, 480.0);

    fn store_of(points: &[(f32, f32)]) -> PointStore {
        PointStore::from_positions(points.iter().map(|&(x, y)| Vec2::new(x, y)).collect())
    }

    #[test]
    fn test_close_pair_links() {
        let store = store_of(&[(0.0, 0.0), (50.0, 50.0)]);
        let mut graph = ProximityGraph::new(200.0, false, false);
        let edges = graph.rebuild(&store, VIEW, None, 1.0);

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].a, 0);
        assert_eq!(edges[0].b, EdgeTarget::Point(1));
        assert!((edges[0].weight - FLAT_WEIGHT).abs() < 1e-6);
    }

    #[test]
    fn test_far_pair_does_not_link() {
        let store = store_of(&[(0.0, 0.0), (500.0, 500.0)]);
        let mut graph = ProximityGraph::new(200.0, true, false);
        assert!(graph.rebuild(&store, VIEW, None, 1.0).is_empty());
    }

    #[test]
    fn test_pair_exactly_on_radius_does_not_link() {
        // Squared distance exactly 200² = 40000.
        let store = store_of(&[(0.0, 0.0), (200.0, 0.0)]);
        let mut graph = ProximityGraph::new(200.0, true, false);
        assert!(graph.rebuild(&store, VIEW, None, 1.0).is_empty());
    }

    #[test]
    fn test_coincident_points_do_not_link() {
        let store = store_of(&[(10.0, 10.0), (10.0, 10.0)]);
        let mut graph = ProximityGraph::new(200.0, true, false);
        assert!(graph.rebuild(&store, VIEW, None, 1.0).is_empty());
    }

    #[test]
    fn test_metric_is_symmetric() {
        let a = Vec2::new(3.0, -7.0);
        let b = Vec2::new(-120.0, 55.5);
        assert_eq!(a.distance_squared(b), b.distance_squared(a));
    }

    #[test]
    fn test_fade_weight_boundaries() {
        let r_sq = 40_000.0;
        assert_eq!(fade_weight(0.0, r_sq), 0.5);
        assert_eq!(fade_weight(r_sq, r_sq), 0.0);
        // Halfway in squared space is halfway in weight.
        assert!((fade_weight(r_sq / 2.0, r_sq) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_fade_weight_applied_to_edges() {
        let store = store_of(&[(0.0, 0.0), (100.0, 0.0)]);
        let mut graph = ProximityGraph::new(200.0, true, false);
        let edges = graph.rebuild(&store, VIEW, None, 1.0);

        let expected = fade_weight(10_000.0, 40_000.0);
        assert_eq!(edges.len(), 1);
        assert!((edges[0].weight - expected).abs() < 1e-6);
    }

    #[test]
    fn test_each_pair_emitted_once() {
        let store = store_of(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        let mut graph = ProximityGraph::new(200.0, false, false);
        let edges = graph.rebuild(&store, VIEW, None, 1.0);

        assert_eq!(edges.len(), 3);
        let pairs: Vec<_> = edges.iter().map(|e| (e.a, e.b)).collect();
        assert!(pairs.contains(&(0, EdgeTarget::Point(1))));
        assert!(pairs.contains(&(0, EdgeTarget::Point(2))));
        assert!(pairs.contains(&(1, EdgeTarget::Point(2))));
    }

    #[test]
    fn test_cursor_link_uses_flipped_coordinates() {
        let store = store_of(&[(100.0, 400.0)]);
        let mut graph = ProximityGraph::new(200.0, true, true);

        // Window cursor (100, 80) is scene (100, 400): zero distance.
        let edges = graph.rebuild(&store, VIEW, Some(Vec2::new(100.0, 80.0)), 1.0);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].b, EdgeTarget::Cursor);
        assert!((edges[0].weight - CURSOR_WEIGHT).abs() < 1e-6);

        // The same cursor read without the flip would also be in range here,
        // so check a position where only the flipped frame is out of range.
        let edges = graph.rebuild(&store, VIEW, Some(Vec2::new(100.0, 390.0)), 1.0);
        assert!(edges.is_empty(), "scene-frame distance should exceed radius");
    }

    #[test]
    fn test_cursor_weight_ignores_fade() {
        let store = store_of(&[(0.0, 330.0)]);
        let mut graph = ProximityGraph::new(200.0, true, true);
        // Scene cursor lands at (0, 480 - 300) = (0, 180): 150 px away.
        let edges = graph.rebuild(&store, VIEW, Some(Vec2::new(0.0, 300.0)), 1.0);

        assert_eq!(edges.len(), 1);
        assert!((edges[0].weight - CURSOR_WEIGHT).abs() < 1e-6);
    }

    #[test]
    fn test_cursor_link_disabled() {
        let store = store_of(&[(100.0, 100.0)]);
        let mut graph = ProximityGraph::new(200.0, true, false);
        let edges = graph.rebuild(&store, VIEW, Some(Vec2::new(100.0, 380.0)), 1.0);
        assert!(edges.is_empty());
    }

    #[test]
    fn test_modulation_scales_every_edge() {
        let store = store_of(&[(0.0, 400.0), (50.0, 400.0)]);
        let mut graph = ProximityGraph::new(200.0, true, true);
        let cursor = Some(Vec2::new(0.0, 80.0));

        let baseline: Vec<f32> = graph
            .rebuild(&store, VIEW, cursor, 1.0)
            .iter()
            .map(|e| e.weight)
            .collect();
        let modulated: Vec<f32> = graph
            .rebuild(&store, VIEW, cursor, 0.5)
            .iter()
            .map(|e| e.weight)
            .collect();

        // Two cursor edges (one per point) plus the pair edge.
        assert_eq!(baseline.len(), 3);
        assert_eq!(baseline.len(), modulated.len());
        for (b, m) in baseline.iter().zip(&modulated) {
            assert!((m - b * 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let store = store_of(&[(0.0, 0.0), (30.0, 40.0), (300.0, 0.0), (310.0, 10.0)]);
        let mut graph = ProximityGraph::new(200.0, true, false);

        let first: Vec<Edge> = graph.rebuild(&store, VIEW, None, 1.0).to_vec();
        let second: Vec<Edge> = graph.rebuild(&store, VIEW, None, 1.0).to_vec();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_empty_store_yields_empty_frame() {
        let store = PointStore::new(0);
        let mut graph = ProximityGraph::new(200.0, true, true);
        assert!(graph
            .rebuild(&store, VIEW, Some(Vec2::new(10.0, 10.0)), 1.0)
            .is_empty());
    }
}
