//! Generator that expands [`FractalParameters`] into a [`FractalElementList`].
//!
//! The entry point is [`FractalGenerator`]. Configure it with a [`GeneratorConfig`], then
//! call [`FractalGenerator::generate`]. The free function [`generate`] does the same with
//! the default configuration.

use crate::color::Color;
use crate::error::Result;
use crate::params::FractalParameters;
use crate::primitive::{FractalElementList, Primitive};
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};
use tracing::{debug, trace, warn};

/// Radius of the root circle in plane units.
pub const CENTER_RADIUS: f64 = 100.0;

/// Circles smaller than this are dropped along with their subtree.
pub const MINIMUM_DRAW_RADIUS: f64 = 3.0;

/// Tunable constants of the generator.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Radius of the root circle. Default: [`CENTER_RADIUS`].
    pub center_radius: f64,
    /// Stopping threshold for circle radii. Default: [`MINIMUM_DRAW_RADIUS`].
    pub minimum_draw_radius: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            center_radius: CENTER_RADIUS,
            minimum_draw_radius: MINIMUM_DRAW_RADIUS,
        }
    }
}

/// Expands parameter snapshots into primitive lists.
#[derive(Clone, Debug, Default)]
pub struct FractalGenerator {
    config: GeneratorConfig,
}

impl FractalGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the full primitive list for `params`.
    ///
    /// Parameters are validated with [`FractalParameters::validate`] before anything is
    /// emitted, so a failed call never yields a partial list.
    ///
    /// # Layout
    ///
    /// The root circle sits at the origin with radius `center_radius`. Each drawn circle
    /// spawns `child_count` children whose radius is `parent_radius * ratio / 100`. Children
    /// are spread evenly around the parent, the first straight up (angle π/2), each
    /// centered one parent diameter away from the parent center.
    ///
    /// A tether runs from the parent rim toward the child to the child rim facing back.
    ///
    /// # Order
    ///
    /// Depth-first, pre-order: a circle is emitted before its children. For each child, in
    /// angular order, the child's whole subtree is emitted first and then that child's
    /// tether. A circle is dropped, together with its subtree and tether, when its radius
    /// is below `minimum_draw_radius` or no depth remains.
    pub fn generate(&self, params: &FractalParameters) -> Result<FractalElementList> {
        if let Err(err) = params.validate() {
            warn!(%err, "rejecting fractal parameters");
            return Err(err);
        }

        debug!(
            child_count = params.child_count,
            ratio = params.child_parent_ratio,
            depth = params.recursion_depth,
            "generating tethered radial fractal"
        );

        let expansion = Expansion {
            color: params.color,
            child_count: params.child_count,
            scale: f64::from(params.child_parent_ratio) * 0.01,
            angle_step: TAU / f64::from(params.child_count),
            minimum_draw_radius: self.config.minimum_draw_radius,
        };

        let mut elements = FractalElementList::new();
        expansion.expand(
            &mut elements,
            DVec2::ZERO,
            self.config.center_radius,
            params.recursion_depth,
        );

        debug!(
            circles = elements.circle_count(),
            tethers = elements.tether_count(),
            "fractal generated"
        );
        Ok(elements)
    }
}

/// Generates the fractal for `params` with the default [`GeneratorConfig`].
pub fn generate(params: &FractalParameters) -> Result<FractalElementList> {
    FractalGenerator::default().generate(params)
}

/// Fixed per-request values shared by every level of the recursion.
struct Expansion {
    color: Color,
    child_count: u32,
    scale: f64,
    angle_step: f64,
    minimum_draw_radius: f64,
}

impl Expansion {
    fn is_drawable(&self, radius: f64, depth_remaining: u32) -> bool {
        radius >= self.minimum_draw_radius && depth_remaining >= 1
    }

    fn expand(
        &self,
        elements: &mut FractalElementList,
        center: DVec2,
        radius: f64,
        depth_remaining: u32,
    ) {
        if !self.is_drawable(radius, depth_remaining) {
            return;
        }

        elements.push(Primitive::circle(self.color, center, radius));

        let child_depth = depth_remaining - 1;
        let child_radius = radius * self.scale;
        let child_drawn = self.is_drawable(child_radius, child_depth);
        if !child_drawn {
            trace!(radius, child_radius, child_depth, "subtree pruned");
        }

        let mut angle = FRAC_PI_2;
        for _ in 0..self.child_count {
            let direction = DVec2::new(angle.cos(), angle.sin());
            let child_center = center + direction * (radius * 2.0);

            self.expand(elements, child_center, child_radius, child_depth);

            // Same predicate the child used: a tether exists iff its child circle does.
            if child_drawn {
                let start = center + direction * radius;
                let end = child_center - direction * child_radius;
                elements.push(Primitive::line(self.color, start, end));
            }

            angle += self.angle_step;
        }
    }
}

/// Circle and tether counts of an unpruned tree, as returned by [`expected_counts`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpectedCounts {
    pub circles: u64,
    pub tethers: u64,
}

/// Closed-form upper bound on the output size of [`FractalGenerator::generate`].
///
/// Renderers can use it to size buffers or to warn before drawing a very dense fractal.
///
/// # Geometry
///
/// Generation `k` holds `C^k` circles, so a tree of depth `D` that is never cut by the
/// radius floor has `1 + C + C² + … + C^(D−1)` circles. Every non-root circle owns exactly
/// one tether back to its parent. When the floor prunes a level, the real counts are
/// those of the depth at which [`radius_at_level`] first drops below it.
///
/// Returns `None` when the count overflows `u64`.
///
/// ```
/// use radial_tether::{FractalParameters, expected_counts};
///
/// let params = FractalParameters::builder().child_count(3).recursion_depth(3).build();
/// let counts = expected_counts(&params).unwrap();
/// assert_eq!((counts.circles, counts.tethers), (1 + 3 + 9, 12));
/// ```
pub fn expected_counts(params: &FractalParameters) -> Option<ExpectedCounts> {
    let c = u64::from(params.child_count);
    let mut circles: u64 = 0;
    let mut level: u64 = 1;
    for generation in 0..params.recursion_depth {
        if generation > 0 {
            level = level.checked_mul(c)?;
        }
        circles = circles.checked_add(level)?;
    }
    Some(ExpectedCounts {
        circles,
        tethers: circles.saturating_sub(1),
    })
}

/// Radius of every circle at generation `level` (root is level 0), before any pruning.
///
/// Uses the same multiply-per-level sequence as the generator, so the result compares
/// exactly against emitted radii. A level is drawn only while this stays at or above
/// `config.minimum_draw_radius`.
pub fn radius_at_level(config: &GeneratorConfig, params: &FractalParameters, level: u32) -> f64 {
    let scale = f64::from(params.child_parent_ratio) * 0.01;
    (0..level).fold(config.center_radius, |r, _| r * scale)
}
