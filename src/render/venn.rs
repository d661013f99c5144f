use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::geometry::placement::{Bounds, DiagramPlacement};
use crate::geometry::solver::CircleLayout;
use crate::render::{DiagramStyle, RenderError};

/// Maps drawing units onto pixels with a single scale on both axes
struct PixelMap {
    viewport: Bounds,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl PixelMap {
    fn new(viewport: Bounds, width: u32, height: u32) -> Self {
        let (w, h) = (f64::from(width), f64::from(height));
        let scale = (w / viewport.width()).min(h / viewport.height());
        Self {
            viewport,
            scale,
            offset_x: (w - viewport.width() * scale) / 2.0,
            offset_y: (h - viewport.height() * scale) / 2.0,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn point(&self, (x, y): (f64, f64)) -> (i32, i32) {
        let px = self.offset_x + (x - self.viewport.x_min) * self.scale;
        // pixel rows grow downward
        let py = self.offset_y + (self.viewport.y_max - y) * self.scale;
        (px.round() as i32, py.round() as i32)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn length(&self, d: f64) -> i32 {
        (d * self.scale).round() as i32
    }
}

/// Render the diagram to `path`.
///
/// The image goes to a temporary file next to `path` and is moved into place
/// only after drawing succeeds. A `.svg` path gets vector output; any other
/// extension is handed to the raster encoder (PNG when there is none).
///
/// # Errors
///
/// Returns `RenderError::InvalidSize` for a zero-sized canvas,
/// `RenderError::Io` if the temporary file cannot be created or moved, and
/// `RenderError::Draw` if the backend fails.
pub fn render_diagram(
    layout: &CircleLayout,
    style: &DiagramStyle,
    path: &Path,
) -> Result<(), RenderError> {
    let path_str = path.display().to_string();
    if style.width == 0 || style.height == 0 {
        return Err(RenderError::InvalidSize {
            path: path_str,
            width: style.width,
            height: style.height,
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or_else(|| "png".to_string(), str::to_lowercase);

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let io_error = |source: std::io::Error| RenderError::Io {
        path: path_str.clone(),
        source,
    };
    let draw_error = |message: String| RenderError::Draw {
        path: path_str.clone(),
        message,
    };

    let tmp = tempfile::Builder::new()
        .prefix(".junction-recon-")
        .suffix(&format!(".{ext}"))
        .tempfile_in(dir)
        .map_err(io_error)?
        .into_temp_path();

    let placement = DiagramPlacement::for_layout(layout);
    let size = (style.width, style.height);

    // Backends flush on present(); they must be dropped before the rename
    if ext == "svg" {
        let root = SVGBackend::new(&tmp, size).into_drawing_area();
        draw(&root, layout, &placement, style).map_err(|e| draw_error(e.to_string()))?;
        root.present().map_err(|e| draw_error(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(&tmp, size).into_drawing_area();
        draw(&root, layout, &placement, style).map_err(|e| draw_error(e.to_string()))?;
        root.present().map_err(|e| draw_error(e.to_string()))?;
    }

    tmp.persist(path).map_err(|e| io_error(e.error))?;

    debug!(path = %path.display(), "Wrote overlap diagram");
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &CircleLayout,
    placement: &DiagramPlacement,
    style: &DiagramStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let map = PixelMap::new(placement.viewport, style.width, style.height);
    let centered = Pos::new(HPos::Center, VPos::Center);

    let circles = [
        (layout.center_a, layout.radius_a, style.color_a),
        (layout.center_b, layout.radius_b, style.color_b),
    ];
    for (center, radius, (r, g, b)) in circles {
        // A zero-sized set has no disc, only its labels
        if radius > 0.0 {
            root.draw(&Circle::new(
                map.point(center),
                map.length(radius).max(1),
                RGBColor(r, g, b).mix(style.opacity).filled(),
            ))?;
        }
    }

    let count_font = ("sans-serif", style.count_font_size)
        .into_font()
        .color(&BLACK)
        .pos(centered);
    let counts = [
        (placement.only_a_label, layout.counts.only_a),
        (placement.both_label, layout.counts.both),
        (placement.only_b_label, layout.counts.only_b),
    ];
    for (anchor, count) in counts {
        root.draw(&Text::new(
            count.to_string(),
            map.point(anchor),
            count_font.clone(),
        ))?;
    }

    let caption_font = ("sans-serif", style.caption_font_size)
        .into_font()
        .color(&BLACK)
        .pos(centered);
    for (anchor, caption) in [
        (placement.caption_a, &style.label_a),
        (placement.caption_b, &style.label_b),
    ] {
        root.draw(&Text::new(
            caption.as_str(),
            map.point(anchor),
            caption_font.clone(),
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::OverlapCounts;

    fn layout() -> CircleLayout {
        CircleLayout::solve(OverlapCounts::new(12, 5, 30))
    }

    #[test]
    fn test_pixel_map_keeps_aspect_and_flips_y() {
        let viewport = Bounds {
            x_min: -2.0,
            x_max: 2.0,
            y_min: -1.0,
            y_max: 1.0,
        };
        let map = PixelMap::new(viewport, 400, 400);

        // 4 units wide fits 400 px, so 1 unit = 100 px, centered vertically
        assert_eq!(map.length(1.0), 100);
        assert_eq!(map.point((-2.0, 1.0)), (0, 100));
        assert_eq!(map.point((0.0, 0.0)), (200, 200));
        assert_eq!(map.point((2.0, -1.0)), (400, 300));
    }

    #[test]
    fn test_render_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlap.svg");
        let style = DiagramStyle {
            label_a: "Alnaji2021".to_string(),
            ..DiagramStyle::default()
        };

        render_diagram(&layout(), &style, &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<circle"));
        // text bodies sit on their own line between the tags
        assert!(svg.contains("\n30\n</text>"));
        assert!(svg.contains("\n12\n</text>"));
        assert!(svg.contains("\n5\n</text>"));
        assert!(svg.contains("\nAlnaji2021\n</text>"));

        // only the final file remains; no temporary leftovers
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_render_empty_layout_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        let empty = CircleLayout::solve(OverlapCounts::default());

        render_diagram(&empty, &DiagramStyle::default(), &path).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_zero_size_canvas_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.svg");
        let style = DiagramStyle {
            width: 0,
            ..DiagramStyle::default()
        };

        let err = render_diagram(&layout(), &style, &path).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSize { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let path = Path::new("/nonexistent-dir-for-junction-recon/out.svg");
        let err = render_diagram(&layout(), &DiagramStyle::default(), path).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }
}
