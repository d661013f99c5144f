use std::f64::consts::PI;

use serde::Serialize;

use crate::core::types::OverlapCounts;
use crate::geometry::lens::lens_area;

/// Bisection steps when solving for the center distance. Each step halves
/// the bracket, so 60 steps reach double-precision resolution.
pub const BISECTION_ITERATIONS: usize = 60;

/// Extra center separation, in drawing units, when either circle has zero
/// radius. Keeps the point-sized set visibly apart from the other circle.
pub const DEGENERATE_GAP: f64 = 0.5;

/// Convert a set size to f64 with explicit precision loss allowance
#[inline]
fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Radius of a circle whose area is `count` drawing units (zero for an empty set)
#[must_use]
pub fn radius_for_count(count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        (count_to_f64(count) / PI).sqrt()
    }
}

/// Center distance at which circles of radius `r1` and `r2` overlap by
/// `target_area`.
///
/// The target is first clamped to `[0, π·min(r1, r2)²]`; an unreachable
/// target yields the nearest reachable layout instead of an error. After
/// clamping, the two extremes are exact: zero overlap gives touching circles,
/// full overlap gives the smaller circle nested inside the larger.
#[must_use]
pub fn solve_distance(r1: f64, r2: f64, target_area: f64) -> f64 {
    let r_min = r1.min(r2);
    let max_area = PI * r_min * r_min;
    let target = target_area.max(0.0).min(max_area);

    if target == 0.0 {
        return r1 + r2;
    }
    if target == max_area {
        return (r1 - r2).abs();
    }

    // Lens area is non-increasing in distance on this bracket
    let mut low = (r1 - r2).abs();
    let mut high = r1 + r2;
    for _ in 0..BISECTION_ITERATIONS {
        let mid = (low + high) / 2.0;
        if lens_area(r1, r2, mid) > target {
            low = mid;
        } else {
            high = mid;
        }
    }
    (low + high) / 2.0
}

/// Placement of the two circles of an area-proportional overlap diagram
///
/// One drawing unit squared stands for one set element: circle A has area
/// `only_a + both`, circle B has area `only_b + both`, and their lens has
/// area `both`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleLayout {
    pub radius_a: f64,
    pub radius_b: f64,
    pub center_a: (f64, f64),
    pub center_b: (f64, f64),

    /// Solved center distance. Equals the center separation unless a radius
    /// is zero, in which case the centers sit a further `DEGENERATE_GAP` apart.
    pub distance: f64,

    pub counts: OverlapCounts,
}

impl CircleLayout {
    /// Compute the layout for the given region sizes
    #[must_use]
    pub fn solve(counts: OverlapCounts) -> Self {
        let total_a = counts.total_a();
        let total_b = counts.total_b();
        let radius_a = radius_for_count(total_a);
        let radius_b = radius_for_count(total_b);

        // One set inside the other is known exactly from the counts, without
        // relying on π·r² reproducing the count bit-for-bit.
        let nested = counts.both > 0 && counts.both == total_a.min(total_b);
        let distance = if nested {
            (radius_a - radius_b).abs()
        } else {
            solve_distance(radius_a, radius_b, count_to_f64(counts.both))
        };

        let separation = if radius_a == 0.0 || radius_b == 0.0 {
            distance + DEGENERATE_GAP
        } else {
            distance
        };

        Self {
            radius_a,
            radius_b,
            center_a: (0.0, 0.0),
            center_b: (separation, 0.0),
            distance,
            counts,
        }
    }

    /// Overlap area actually achieved by this layout
    #[must_use]
    pub fn overlap_area(&self) -> f64 {
        lens_area(self.radius_a, self.radius_b, self.distance)
    }

    #[must_use]
    pub fn max_radius(&self) -> f64 {
        self.radius_a.max(self.radius_b)
    }
}
