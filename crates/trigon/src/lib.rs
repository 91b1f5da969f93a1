//! Triangle evaluation from three side lengths.
//!
//! Layout
//! - `tri`: validation, angles (law of cosines), area (Heron), classification.
//! - `layout`: display coordinates of a valid triangle, sharing the angle helper
//!   with `tri` so drawn and reported angles never disagree.
//!
//! Every function here is pure; callers own all inputs and results.

pub mod layout;
pub mod tri;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use layout::{place, Figure, Placement, DEFAULT_EXTENT};
pub use tri::{
    analyze, analyze_with, classify, classify_with, compute_angles, compute_area, validate,
    AngleClass, ClassifyCfg, SideClass, Sides, TriangleError, TriangleResult, NOT_A_TRIANGLE,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::layout::{place, Figure, Placement};
    pub use crate::tri::{analyze, analyze_with, ClassifyCfg, Sides, TriangleError, TriangleResult};
}
