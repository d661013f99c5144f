//! Label anchors and viewport for drawing a [`CircleLayout`].
//!
//! Everything here is in drawing units (the solver's coordinate system, y up).
//! Renderers map these onto pixels.

use serde::Serialize;

use crate::geometry::solver::CircleLayout;

/// Label offset used in place of half a radius when a circle has zero radius
const POINT_LABEL_OFFSET: f64 = 0.2;

/// Fallback caption depth and padding when both circles have zero radius
const EMPTY_EXTENT: f64 = 0.5;

/// Axis-aligned rectangle in drawing units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Where each text element of the diagram goes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramPlacement {
    /// Anchor for the `only_a` count (left lobe)
    pub only_a_label: (f64, f64),

    /// Anchor for the `both` count (overlap)
    pub both_label: (f64, f64),

    /// Anchor for the `only_b` count (right lobe)
    pub only_b_label: (f64, f64),

    /// Anchor for set A's caption, below circle A
    pub caption_a: (f64, f64),

    /// Anchor for set B's caption, below circle B
    pub caption_b: (f64, f64),

    /// Region to show: both circles plus padding
    pub viewport: Bounds,
}

impl DiagramPlacement {
    #[must_use]
    pub fn for_layout(layout: &CircleLayout) -> Self {
        let (ca, cb) = (layout.center_a, layout.center_b);
        let (ra, rb) = (layout.radius_a, layout.radius_b);
        let max_r = layout.max_radius();

        let lobe_offset = |r: f64| if r > 0.0 { r * 0.5 } else { POINT_LABEL_OFFSET };

        let caption_y = if max_r > 0.0 {
            -max_r * 1.15
        } else {
            -EMPTY_EXTENT
        };
        let padding = if max_r > 0.0 {
            max_r * 0.25
        } else {
            EMPTY_EXTENT
        };

        let viewport = Bounds {
            x_min: (ca.0 - ra).min(cb.0 - rb) - padding,
            x_max: (ca.0 + ra).max(cb.0 + rb) + padding,
            // Captions sit below the circles, so the lower edge must reach them
            y_min: (-max_r - padding).min(caption_y - padding),
            y_max: max_r + padding,
        };

        Self {
            only_a_label: (ca.0 - lobe_offset(ra), 0.0),
            both_label: ((ca.0 + cb.0) / 2.0, 0.0),
            only_b_label: (cb.0 + lobe_offset(rb), 0.0),
            caption_a: (ca.0, caption_y),
            caption_b: (cb.0, caption_y),
            viewport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::OverlapCounts;

    #[test]
    fn test_labels_ordered_left_to_right() {
        let layout = CircleLayout::solve(OverlapCounts::new(10, 6, 4));
        let p = DiagramPlacement::for_layout(&layout);

        assert!(p.only_a_label.0 < p.both_label.0);
        assert!(p.both_label.0 < p.only_b_label.0);
        assert_eq!(p.only_a_label.1, 0.0);
        assert_eq!(p.only_a_label.0, -layout.radius_a * 0.5);
        assert_eq!(p.both_label.0, layout.distance / 2.0);
    }

    #[test]
    fn test_viewport_contains_circles_and_captions() {
        let layout = CircleLayout::solve(OverlapCounts::new(3, 30, 2));
        let p = DiagramPlacement::for_layout(&layout);
        let v = p.viewport;

        assert!(v.x_min < layout.center_a.0 - layout.radius_a);
        assert!(v.x_max > layout.center_b.0 + layout.radius_b);
        assert!(v.y_max > layout.max_radius());
        assert!(v.y_min < p.caption_a.1);
        assert!(v.width() > 0.0 && v.height() > 0.0);
    }

    #[test]
    fn test_empty_layout_still_has_area() {
        let layout = CircleLayout::solve(OverlapCounts::default());
        let p = DiagramPlacement::for_layout(&layout);

        assert_eq!(p.only_a_label, (-POINT_LABEL_OFFSET, 0.0));
        assert_eq!(p.caption_a.1, -EMPTY_EXTENT);
        assert!(p.viewport.width() > 0.0);
        assert!(p.viewport.height() > 0.0);
    }
}
