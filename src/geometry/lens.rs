use std::f64::consts::PI;

/// Area of the lens shared by circles of radius `r1` and `r2` whose centers
/// are `distance` apart.
///
/// Separated or touching circles share nothing; a circle fully inside the
/// other contributes its whole area. In between, the lens is the sum of two
/// circular segments.
///
/// # Examples
///
/// ```
/// use junction_recon::geometry::lens::lens_area;
///
/// assert_eq!(lens_area(1.0, 1.0, 2.0), 0.0);
/// assert!((lens_area(1.0, 3.0, 0.5) - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[must_use]
pub fn lens_area(r1: f64, r2: f64, distance: f64) -> f64 {
    if distance >= r1 + r2 {
        return 0.0;
    }
    if distance <= (r1 - r2).abs() {
        let r = r1.min(r2);
        return PI * r * r;
    }

    let r1_sq = r1 * r1;
    let r2_sq = r2 * r2;
    let d_sq = distance * distance;

    // Half-angles subtended by the chord, from the law of cosines. Clamp the
    // cosines since rounding can push them a hair outside [-1, 1].
    let angle1 = ((d_sq + r1_sq - r2_sq) / (2.0 * distance * r1))
        .clamp(-1.0, 1.0)
        .acos();
    let angle2 = ((d_sq + r2_sq - r1_sq) / (2.0 * distance * r2))
        .clamp(-1.0, 1.0)
        .acos();

    let radicand = (-distance + r1 + r2)
        * (distance + r1 - r2)
        * (distance - r1 + r2)
        * (distance + r1 + r2);

    r1_sq * angle1 + r2_sq * angle2 - 0.5 * radicand.max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_separated_and_touching() {
        assert_eq!(lens_area(1.0, 2.0, 3.0), 0.0);
        assert_eq!(lens_area(1.0, 2.0, 10.0), 0.0);
    }

    #[test]
    fn test_contained() {
        assert!((lens_area(2.0, 1.0, 0.0) - PI).abs() < EPS);
        assert!((lens_area(2.0, 1.0, 1.0) - PI).abs() < EPS);
        assert!((lens_area(1.5, 1.5, 0.0) - PI * 2.25).abs() < EPS);
    }

    #[test]
    fn test_equal_circles_half_radius_apart() {
        // Two unit circles one radius apart: 2π/3 − √3/2
        let expected = 2.0 * PI / 3.0 - 3f64.sqrt() / 2.0;
        assert!((lens_area(1.0, 1.0, 1.0) - expected).abs() < EPS);
    }

    #[test]
    fn test_symmetric_in_radii() {
        let a = lens_area(1.3, 2.1, 2.5);
        let b = lens_area(2.1, 1.3, 2.5);
        assert!((a - b).abs() < EPS);
    }

    #[test]
    fn test_continuous_at_interval_ends() {
        let (r1, r2) = (2.0, 1.0);
        let inner = lens_area(r1, r2, (r1 - r2) + 1e-9);
        let outer = lens_area(r1, r2, (r1 + r2) - 1e-9);
        assert!((inner - PI).abs() < 1e-3);
        assert!(outer.abs() < 1e-3);
    }

    #[test]
    fn test_monotone_in_distance() {
        let (r1, r2) = (1.7, 0.9);
        let lo = r1 - r2;
        let hi = r1 + r2;
        let mut prev = f64::INFINITY;
        for i in 0..=200 {
            let d = lo + (hi - lo) * f64::from(i) / 200.0;
            let area = lens_area(r1, r2, d);
            assert!(area <= prev + 1e-12, "area increased at d={d}");
            prev = area;
        }
    }

    #[test]
    fn test_zero_radius() {
        assert_eq!(lens_area(0.0, 0.0, 0.0), 0.0);
        assert_eq!(lens_area(0.0, 1.0, 1.0), 0.0);
        assert_eq!(lens_area(0.0, 1.0, 0.5), 0.0);
    }
}
