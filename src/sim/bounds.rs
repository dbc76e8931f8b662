//! Axis-aligned rectangle geometry for lanes and falling objects
//!
//! Play-area coordinates: origin at the top-left corner, +y pointing down
//! toward the bottom edge where objects escape.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Size of the play area in play-area pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
        }
    }
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width of a single lane
    #[inline]
    pub fn lane_width(&self, lane_count: u32) -> f32 {
        self.width / lane_count.max(1) as f32
    }

    /// Full-height column for a lane
    pub fn lane_bounds(&self, lane: u32, lane_count: u32) -> Bounds {
        let w = self.lane_width(lane_count);
        Bounds::from_origin_size(Vec2::new(lane as f32 * w, 0.0), Vec2::new(w, self.height))
    }
}

/// An axis-aligned rectangle (edges inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Check if a point lies inside or on the edge
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Bounding box of an object whose top edge is at `y` in `lane`
pub fn object_bounds(
    area: &PlayArea,
    lane: u32,
    y: f32,
    lane_count: u32,
    width_ratio: f32,
    height: f32,
) -> Bounds {
    let lane_w = area.lane_width(lane_count);
    let w = lane_w * width_ratio;
    let x = lane as f32 * lane_w + (lane_w - w) / 2.0;
    Bounds::from_origin_size(Vec2::new(x, y), Vec2::new(w, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_edges_inclusive() {
        let b = Bounds::from_origin_size(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert!(b.contains_point(Vec2::new(10.0, 20.0)));
        assert!(b.contains_point(Vec2::new(40.0, 60.0)));
        assert!(b.contains_point(b.center()));
        assert!(!b.contains_point(Vec2::new(9.9, 30.0)));
        assert!(!b.contains_point(Vec2::new(20.0, 60.1)));
    }

    #[test]
    fn test_lane_bounds_tile_the_area() {
        let area = PlayArea::new(400.0, 600.0);
        let first = area.lane_bounds(0, 4);
        let last = area.lane_bounds(3, 4);
        assert_eq!(first.min, Vec2::ZERO);
        assert_eq!(first.width(), 100.0);
        assert_eq!(last.max, Vec2::new(400.0, 600.0));
    }

    #[test]
    fn test_object_bounds_centered_in_lane() {
        let area = PlayArea::new(400.0, 600.0);
        let b = object_bounds(&area, 1, -60.0, 4, 0.8, 60.0);
        assert!((b.min.x - 110.0).abs() < 1e-4);
        assert!((b.width() - 80.0).abs() < 1e-4);
        assert_eq!(b.min.y, -60.0);
        assert_eq!(b.max.y, 0.0);
        assert!((b.center().x - area.lane_bounds(1, 4).center().x).abs() < 1e-4);
    }
}
