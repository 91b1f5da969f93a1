//! Triangle evaluator.
//!
//! Purpose
//! - Map three side lengths to a `TriangleResult`: validity, side/angle
//!   classification, interior angles, area and perimeter.
//! - Keep the numerics explicit: angles and area come from Kahan-ordered Heron
//!   factors, so neither extreme scales nor near-flat triangles produce NaN.
//!
//! Outcomes
//! - Malformed input (non-positive or non-finite side) is an error
//!   (`TriangleError::InvalidInput`).
//! - Failing the strict triangle inequality is a normal result with
//!   `is_triangle == false`.
//!
//! Code cross-refs: `analyze`, `ClassifyCfg`, `crate::layout::place`

mod cfg;
mod eval;
mod types;

pub use eval::{
    analyze, analyze_with, angle_class, classify, classify_with, compute_angles, compute_area,
    side_class, validate,
};
pub use types::{
    AngleClass, ClassifyCfg, SideClass, Sides, TriangleError, TriangleResult, NOT_A_TRIANGLE,
};
