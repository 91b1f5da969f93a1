//! Tolerance defaults for the evaluator (internal).
//!
//! Policy
//! - Defaults reproduce the reference classification exactly. Callers who want
//!   looser side matching opt in through `ClassifyCfg`, never by changing these.

/// Right-angle window in degrees: `|angle - 90| < RIGHT_ANGLE_TOL_DEG`.
pub(crate) const RIGHT_ANGLE_TOL_DEG: f64 = 1e-3;
/// Side-equality epsilon; zero means exact float equality.
pub(crate) const SIDE_EQ_EPS: f64 = 0.0;
