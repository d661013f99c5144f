//! Area-proportional two-circle layout.
//!
//! Given the region sizes of a two-set overlap, [`CircleLayout::solve`] picks
//! radii so each circle's area equals its set size, then finds the center
//! distance at which the shared lens has area equal to the intersection size.
//!
//! ## Solving
//!
//! 1. Radii follow directly: `r = sqrt(n / π)`
//! 2. Zero overlap places the circles touching; full overlap nests the smaller
//!    circle inside the larger
//! 3. Otherwise the distance is found by bisection, since lens area shrinks
//!    monotonically as the circles move apart
//!
//! ## Example
//!
//! ```rust
//! use junction_recon::core::types::OverlapCounts;
//! use junction_recon::geometry::CircleLayout;
//!
//! let layout = CircleLayout::solve(OverlapCounts::new(12, 5, 30));
//! assert!((layout.overlap_area() - 30.0).abs() < 1e-6);
//! ```

pub mod lens;
pub mod placement;
pub mod solver;

pub use placement::{Bounds, DiagramPlacement};
pub use solver::CircleLayout;
