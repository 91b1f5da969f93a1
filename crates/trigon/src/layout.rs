//! Display coordinates for a triangle.
//!
//! Purpose
//! - Place a valid triangle in the plane for drawing: first vertex at the
//!   origin, side1 along the +x axis, the third vertex above it.
//! - Scale so the longest side equals a fixed extent. The scale is for display
//!   only; reported measures always come from `tri`.
//!
//! The angle at the origin is the angle opposite side3 as reported by
//! `tri::compute_angles`.
//!
//! Code cross-refs: `tri::analyze`, `tri::compute_area`

use nalgebra::Vector2;

use crate::tri::{compute_angles, validate, Sides, TriangleError};

/// Longest side length after scaling.
pub const DEFAULT_EXTENT: f64 = 5.0;

/// Placement outcome: the invalid marker or a scaled triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Figure {
    Invalid,
    Triangle(Placement),
}

/// Scaled vertices. Edge `vertices[0]→vertices[1]` carries side1,
/// `vertices[0]→vertices[2]` side2, `vertices[1]→vertices[2]` side3.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub vertices: [Vector2<f64>; 3],
    pub scale: f64,
    pub sides: Sides,
}

impl Placement {
    /// Label anchors in side order (side1, side2, side3).
    pub fn edge_midpoints(&self) -> [Vector2<f64>; 3] {
        let [a, b, c] = self.vertices;
        [(a + b) * 0.5, (a + c) * 0.5, (b + c) * 0.5]
    }

    /// Edge lengths in side order, in display units.
    pub fn edge_lengths(&self) -> [f64; 3] {
        let [a, b, c] = self.vertices;
        [(b - a).norm(), (c - a).norm(), (c - b).norm()]
    }

    /// Shoelace area mapped back to input units.
    pub fn area_unscaled(&self) -> f64 {
        let [a, b, c] = self.vertices;
        let ab = b - a;
        let ac = c - a;
        0.5 * (ab.x * ac.y - ab.y * ac.x).abs() / self.scale / self.scale
    }
}

/// Place `sides` so the longest edge measures `extent`.
///
/// Errors with `InvalidInput` for non-positive or non-finite sides, and for a
/// non-positive or non-finite `extent` (reported as side 0).
pub fn place(sides: Sides, extent: f64) -> Result<Figure, TriangleError> {
    sides.check()?;
    if !extent.is_finite() || extent <= 0.0 {
        return Err(TriangleError::InvalidInput {
            side: 0,
            value: extent,
        });
    }
    let Sides {
        side1,
        side2,
        side3,
    } = sides;
    if !validate(side1, side2, side3) {
        return Ok(Figure::Invalid);
    }
    let theta = compute_angles(side1, side2, side3)[2].to_radians();
    let scale = extent / sides.longest();
    let (s1, s2) = (side1 * scale, side2 * scale);
    Ok(Figure::Triangle(Placement {
        vertices: [
            Vector2::zeros(),
            Vector2::new(s1, 0.0),
            Vector2::new(s2 * theta.cos(), s2 * theta.sin()),
        ],
        scale,
        sides,
    }))
}
