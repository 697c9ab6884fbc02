// src/draw/three_lines.rs
//
// The three-line circle shape.
// Each half of the surface carries `parts` horizontal lines that grow from the
// outer edge toward a central disk; the disk is clipped to a vertical band that
// widens and narrows again while the node moves.

use nannou::prelude::*;
use std::f32::consts::TAU;

use crate::config::ShapeConfig;
use crate::utilities::{ease, subdivide};

/// Surface-derived sizes for one frame.
#[derive(Debug, Clone)]
pub struct Geometry {
    rect: Rect,
    radius: f32,
    stroke_weight: f32,
    parts: usize,
    disk_resolution: usize,
}

impl Geometry {
    pub fn new(rect: Rect, shape: &ShapeConfig) -> Self {
        let min_side = rect.w().min(rect.h());
        Self {
            rect,
            radius: min_side / shape.radius_factor,
            stroke_weight: min_side / shape.stroke_factor,
            parts: shape.parts.max(1),
            disk_resolution: shape.disk_resolution.max(3),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn stroke_weight(&self) -> f32 {
        self.stroke_weight
    }

    /// Vertical offset of line `k`, spaced one radius apart around the center.
    fn line_offset(&self, k: usize) -> f32 {
        (k as f32 - (self.parts - 1) as f32 / 2.0) * self.radius
    }

    /// Visible line segments at `scale`, left half first.
    ///
    /// Line `k` fills during the k-th of `parts` phases of the progress.
    pub fn lines(&self, scale: f32) -> Vec<(Point2, Point2)> {
        let half_width = self.rect.w() / 2.0;
        let reach = (half_width - self.radius).max(0.0);
        let center = self.rect.xy();

        let mut segments = Vec::with_capacity(self.parts * 2);
        for j in 0..2 {
            // translated by j * width / 2 from the left edge
            let half_left = self.rect.left() + j as f32 * half_width;
            let (outer, inward) = if j == 0 {
                (half_left, 1.0)
            } else {
                (half_left + half_width, -1.0)
            };

            for k in 0..self.parts {
                let fill = subdivide(scale, k, self.parts);
                if fill <= 0.0 {
                    continue;
                }
                let y = center.y + self.line_offset(k);
                let start = pt2(outer, y);
                let end = pt2(outer + inward * reach * fill, y);
                segments.push((start, end));
            }
        }
        segments
    }

    /// Outline of the central disk clipped to |x - cx| <= radius * ease(scale).
    /// Empty when the band has no width.
    pub fn disk(&self, scale: f32) -> Vec<Point2> {
        let clip = self.radius * ease(scale).max(0.0);
        if clip <= 0.0 {
            return Vec::new();
        }

        let center = self.rect.xy();
        (0..self.disk_resolution)
            .map(|i| {
                let angle = i as f32 / self.disk_resolution as f32 * TAU;
                let x = (self.radius * angle.cos()).clamp(-clip, clip);
                let y = self.radius * angle.sin();
                pt2(center.x + x, center.y + y)
            })
            .collect()
    }
}

/// Draws one node's shape at the given progress.
pub fn draw_node(draw: &Draw, geometry: &Geometry, color: Rgb, scale: f32) {
    for (start, end) in geometry.lines(scale) {
        draw.line()
            .start(start)
            .end(end)
            .weight(geometry.stroke_weight())
            .caps_round()
            .color(color);
    }

    let outline = geometry.disk(scale);
    if !outline.is_empty() {
        draw.polygon().color(color).points(outline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn geometry() -> Geometry {
        Geometry::new(Rect::from_w_h(640.0, 480.0), &ShapeConfig::default())
    }

    #[test]
    fn test_sizes_follow_min_dimension() {
        let geometry = geometry();
        assert!((geometry.radius() - 480.0 / 6.4).abs() < EPSILON);
        assert!((geometry.stroke_weight() - 480.0 / 90.0).abs() < EPSILON);

        let tall = Geometry::new(Rect::from_w_h(300.0, 900.0), &ShapeConfig::default());
        assert!((tall.radius() - 300.0 / 6.4).abs() < EPSILON);
    }

    #[test]
    fn test_nothing_drawn_at_rest_zero() {
        let geometry = geometry();
        assert!(geometry.lines(0.0).is_empty());
        assert!(geometry.disk(0.0).is_empty());
    }

    #[test]
    fn test_lines_full_at_one() {
        let geometry = geometry();
        let lines = geometry.lines(1.0);
        assert_eq!(lines.len(), 6);

        let r = geometry.radius();
        let offsets: Vec<f32> = lines[..3].iter().map(|(start, _)| start.y).collect();
        for (offset, expected) in offsets.iter().zip([-r, 0.0, r]) {
            assert!((offset - expected).abs() < EPSILON, "offset {}", offset);
        }

        // Left lines run from the left edge to the disk, right lines mirror them
        for (start, end) in &lines[..3] {
            assert!((start.x + 320.0).abs() < EPSILON);
            assert!((end.x + r).abs() < EPSILON);
        }
        for (start, end) in &lines[3..] {
            assert!((start.x - 320.0).abs() < EPSILON);
            assert!((end.x - r).abs() < EPSILON);
        }
    }

    #[test]
    fn test_lines_fill_one_phase_at_a_time() {
        let geometry = geometry();
        // Halfway through the first of three phases
        let lines = geometry.lines(1.0 / 6.0);
        assert_eq!(lines.len(), 2);
        let reach = 320.0 - geometry.radius();
        let (start, end) = lines[0];
        assert!(((end.x - start.x) - reach / 2.0).abs() < EPSILON);

        // First line complete, second halfway
        let lines = geometry.lines(0.5);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_disk_clipped_to_band() {
        let geometry = geometry();
        let r = geometry.radius();

        let full = geometry.disk(0.5);
        assert_eq!(full.len(), ShapeConfig::default().disk_resolution);
        let widest = full.iter().map(|p| p.x.abs()).fold(0.0, f32::max);
        assert!((widest - r).abs() < EPSILON);

        let clip = r * ease(0.1);
        let narrow = geometry.disk(0.1);
        for point in &narrow {
            assert!(point.x.abs() <= clip + EPSILON);
            assert!(point.y.abs() <= r + EPSILON);
        }
    }
}
