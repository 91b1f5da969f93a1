//! Value types shared by the evaluator and its callers.
//!
//! - `Sides`: the three input lengths, unordered.
//! - `TriangleResult`: immutable outcome of `analyze`.
//! - `SideClass`, `AngleClass`: the two halves of `triangle_type`.
//! - `ClassifyCfg`: tolerances for classification.
//! - `TriangleError`: malformed input or configuration.

use std::fmt;

use super::cfg::{RIGHT_ANGLE_TOL_DEG, SIDE_EQ_EPS};

/// `triangle_type` of every rejected side triple.
pub const NOT_A_TRIANGLE: &str = "Not a triangle";

/// Three side lengths; no ordering is assumed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sides {
    pub side1: f64,
    pub side2: f64,
    pub side3: f64,
}

impl Sides {
    #[inline]
    pub fn new(side1: f64, side2: f64, side3: f64) -> Self {
        Self {
            side1,
            side2,
            side3,
        }
    }

    #[inline]
    pub fn as_array(&self) -> [f64; 3] {
        [self.side1, self.side2, self.side3]
    }

    #[inline]
    pub fn longest(&self) -> f64 {
        self.side1.max(self.side2).max(self.side3)
    }

    /// Reject non-finite or non-positive lengths (first offender wins).
    pub fn check(&self) -> Result<(), TriangleError> {
        for (i, value) in self.as_array().into_iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(TriangleError::InvalidInput { side: i + 1, value });
            }
        }
        Ok(())
    }
}

impl From<[f64; 3]> for Sides {
    fn from(s: [f64; 3]) -> Self {
        Self::new(s[0], s[1], s[2])
    }
}

/// Outcome of `analyze`.
///
/// `angles[i]` is the angle (degrees) opposite the i-th side. When
/// `is_triangle` is false every numeric field is zero and `triangle_type`
/// is `NOT_A_TRIANGLE`.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleResult {
    pub is_triangle: bool,
    pub triangle_type: String,
    pub angles: [f64; 3],
    pub area: f64,
    pub perimeter: f64,
}

impl TriangleResult {
    /// The fixed result for side triples failing the triangle inequality.
    pub fn not_a_triangle() -> Self {
        Self {
            is_triangle: false,
            triangle_type: NOT_A_TRIANGLE.to_string(),
            angles: [0.0; 3],
            area: 0.0,
            perimeter: 0.0,
        }
    }
}

/// Classification by side equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideClass {
    Equilateral,
    Isosceles,
    Scalene,
}

impl fmt::Display for SideClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SideClass::Equilateral => "Equilateral",
            SideClass::Isosceles => "Isosceles",
            SideClass::Scalene => "Scalene",
        })
    }
}

/// Classification by largest angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleClass {
    Right,
    Acute,
    Obtuse,
}

impl fmt::Display for AngleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AngleClass::Right => "Right",
            AngleClass::Acute => "Acute",
            AngleClass::Obtuse => "Obtuse",
        })
    }
}

/// Classification tolerances.
///
/// The default compares sides with exact float equality, so `3.0` and
/// `3.0000000001` count as different. Set `side_eq_eps` to widen that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifyCfg {
    /// Two sides are equal when `|a - b| <= side_eq_eps`.
    pub side_eq_eps: f64,
    /// An angle is right when `|angle - 90| < right_angle_tol_deg`.
    pub right_angle_tol_deg: f64,
}

impl Default for ClassifyCfg {
    fn default() -> Self {
        Self {
            side_eq_eps: SIDE_EQ_EPS,
            right_angle_tol_deg: RIGHT_ANGLE_TOL_DEG,
        }
    }
}

impl ClassifyCfg {
    pub fn validate(&self) -> Result<(), TriangleError> {
        if !self.side_eq_eps.is_finite() || self.side_eq_eps < 0.0 {
            return Err(TriangleError::invalid_cfg(format!(
                "side_eq_eps must be finite and >= 0, got {}",
                self.side_eq_eps
            )));
        }
        if !self.right_angle_tol_deg.is_finite() || self.right_angle_tol_deg < 0.0 {
            return Err(TriangleError::invalid_cfg(format!(
                "right_angle_tol_deg must be finite and >= 0, got {}",
                self.right_angle_tol_deg
            )));
        }
        Ok(())
    }
}

/// Errors surfaced by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum TriangleError {
    /// A side length is zero, negative, NaN or infinite. `side` is 1-based.
    InvalidInput { side: usize, value: f64 },
    /// A tolerance in `ClassifyCfg` is unusable.
    InvalidCfg { reason: String },
}

impl TriangleError {
    fn invalid_cfg(reason: impl Into<String>) -> Self {
        Self::InvalidCfg {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for TriangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { side, value } => write!(
                f,
                "invalid input: side{side} = {value} (lengths must be finite and > 0)"
            ),
            Self::InvalidCfg { reason } => write!(f, "invalid classify config: {reason}"),
        }
    }
}

impl std::error::Error for TriangleError {}
