use super::types::{AngleClass, ClassifyCfg, SideClass, Sides, TriangleError, TriangleResult};

/// Strict triangle inequality on all three pairs.
#[inline]
pub fn validate(side1: f64, side2: f64, side3: f64) -> bool {
    side1 + side2 > side3 && side2 + side3 > side1 && side1 + side3 > side2
}

/// Power-of-two prescale keeping `a + (b + c)` finite for sides near `f64::MAX`.
const HUGE_SIDE: f64 = f64::MAX / 4.0;

/// Kahan's Heron factors for the sorted sides `a >= b >= c`.
///
/// Returns `2s` and, per input position, `2(s - side)`; plus the exact scale
/// applied to the sides. Ties produce bit-equal factors, so the result is
/// independent of input order. Negative factors (sides failing `validate`)
/// are clamped to 0.
fn heron_factors(sides: [f64; 3]) -> (f64, [f64; 3], f64) {
    let mut order = [0usize, 1, 2];
    order.sort_by(|&i, &j| sides[j].total_cmp(&sides[i]));
    let k = if sides[order[0]] > HUGE_SIDE { 0.25 } else { 1.0 };
    let [a, b, c] = order.map(|i| sides[i] * k);
    // a - b is exact (Sterbenz) whenever b + c > a
    let mut t = [0.0; 3];
    t[order[0]] = (c - (a - b)).max(0.0);
    t[order[1]] = (c + (a - b)).max(0.0);
    t[order[2]] = (a + (b - c)).max(0.0);
    (a + (b + c), t, k)
}

/// Interior angles; `angles[i]` (degrees) is opposite side i+1.
///
/// Law of cosines in half-angle form, `tan(A/2) = sqrt((s-b)(s-c) / (s(s-a)))`,
/// evaluated with `atan2` on square roots of the Heron factors. No squares of
/// the sides appear, so any finite positive scale works, and thin triangles
/// keep strictly positive small angles.
///
/// Pre: the sides passed `validate`.
pub fn compute_angles(side1: f64, side2: f64, side3: f64) -> [f64; 3] {
    let (two_s, t, _) = heron_factors([side1, side2, side3]);
    let rs = two_s.sqrt();
    let rt = t.map(f64::sqrt);
    let angle_at = |i: usize| {
        let (j, l) = ((i + 1) % 3, (i + 2) % 3);
        (2.0 * (rt[j] * rt[l]).atan2(rs * rt[i])).to_degrees()
    };
    [angle_at(0), angle_at(1), angle_at(2)]
}

/// Heron's formula on Kahan's factors: `area = sqrt(2s·2(s-a)·2(s-b)·2(s-c)) / 4`.
///
/// Square roots are multiplied pairwise so intermediates stay in range; the
/// result only saturates (to 0 or inf) when the area itself is outside f64.
///
/// Pre: the sides passed `validate`.
pub fn compute_area(side1: f64, side2: f64, side3: f64) -> f64 {
    let (two_s, t, k) = heron_factors([side1, side2, side3]);
    let area = 0.25 * (two_s.sqrt() * t[0].sqrt()) * (t[1].sqrt() * t[2].sqrt());
    area / k / k
}

#[inline]
fn sides_equal(a: f64, b: f64, eps: f64) -> bool {
    // eps == 0 degenerates to exact equality
    (a - b).abs() <= eps
}

pub fn side_class(side1: f64, side2: f64, side3: f64, cfg: &ClassifyCfg) -> SideClass {
    let eps = cfg.side_eq_eps;
    let e12 = sides_equal(side1, side2, eps);
    let e23 = sides_equal(side2, side3, eps);
    let e13 = sides_equal(side1, side3, eps);
    if e12 && e23 {
        SideClass::Equilateral
    } else if e12 || e23 || e13 {
        SideClass::Isosceles
    } else {
        SideClass::Scalene
    }
}

/// Right wins over acute/obtuse whenever an angle sits inside the window.
pub fn angle_class(angles: &[f64; 3], cfg: &ClassifyCfg) -> AngleClass {
    if angles
        .iter()
        .any(|a| (a - 90.0).abs() < cfg.right_angle_tol_deg)
    {
        AngleClass::Right
    } else if angles.iter().all(|&a| a < 90.0) {
        AngleClass::Acute
    } else {
        AngleClass::Obtuse
    }
}

/// `"<side class> <angle class>"` with default tolerances.
pub fn classify(side1: f64, side2: f64, side3: f64, angles: &[f64; 3]) -> String {
    classify_with(side1, side2, side3, angles, &ClassifyCfg::default())
}

pub fn classify_with(
    side1: f64,
    side2: f64,
    side3: f64,
    angles: &[f64; 3],
    cfg: &ClassifyCfg,
) -> String {
    format!(
        "{} {}",
        side_class(side1, side2, side3, cfg),
        angle_class(angles, cfg)
    )
}

/// Evaluate three side lengths with default tolerances.
///
/// Errors with `InvalidInput` for non-positive or non-finite sides. Side
/// triples failing the triangle inequality are a normal `Ok` outcome with
/// `is_triangle == false`.
pub fn analyze(side1: f64, side2: f64, side3: f64) -> Result<TriangleResult, TriangleError> {
    analyze_with(side1, side2, side3, &ClassifyCfg::default())
}

pub fn analyze_with(
    side1: f64,
    side2: f64,
    side3: f64,
    cfg: &ClassifyCfg,
) -> Result<TriangleResult, TriangleError> {
    cfg.validate()?;
    Sides::new(side1, side2, side3).check()?;
    if !validate(side1, side2, side3) {
        return Ok(TriangleResult::not_a_triangle());
    }
    let angles = compute_angles(side1, side2, side3);
    let triangle_type = classify_with(side1, side2, side3, &angles, cfg);
    let area = compute_area(side1, side2, side3);
    Ok(TriangleResult {
        is_triangle: true,
        triangle_type,
        angles,
        area,
        perimeter: side1 + side2 + side3,
    })
}
