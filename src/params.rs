//! Parameter snapshot for one generation request.

use crate::color::{Background, Color};
use crate::error::{FractalError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Child counts offered by bounded input controls.
pub const CHILD_COUNT_RANGE: RangeInclusive<u32> = 1..=13;
/// Child-parent ratios (percent) offered by bounded input controls.
pub const CHILD_PARENT_RATIO_RANGE: RangeInclusive<u32> = 20..=70;
/// Recursion depths offered by bounded input controls.
pub const RECURSION_DEPTH_RANGE: RangeInclusive<u32> = 2..=10;

pub const DEFAULT_CHILD_COUNT: u32 = 8;
pub const DEFAULT_CHILD_PARENT_RATIO: u32 = 42;
pub const DEFAULT_RECURSION_DEPTH: u32 = 5;

/// The five scalar inputs of the fractal.
///
/// A snapshot is immutable once built. The UI collaborator produces a fresh one for every
/// parameter change and passes it to [`generate`](crate::generate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParameters {
    /// Stroke color of every circle and tether.
    pub color: Color,

    /// Number of children spawned around each drawn circle.
    pub child_count: u32,

    /// Background selection for the rendering collaborator. Not read by the generator.
    pub dark_mode: bool,

    /// Child radius as a percentage of the parent radius.
    pub child_parent_ratio: u32,

    /// Number of circle generations from root to leaf, root included.
    pub recursion_depth: u32,
}

impl Default for FractalParameters {
    fn default() -> Self {
        Self {
            color: Color::CYAN,
            child_count: DEFAULT_CHILD_COUNT,
            dark_mode: false,
            child_parent_ratio: DEFAULT_CHILD_PARENT_RATIO,
            recursion_depth: DEFAULT_RECURSION_DEPTH,
        }
    }
}

impl FractalParameters {
    pub fn builder() -> FractalParametersBuilder {
        FractalParametersBuilder::default()
    }

    pub fn background(&self) -> Background {
        Background::from_dark_mode(self.dark_mode)
    }

    /// Rejects values that would make the recursion ill-defined.
    ///
    /// `child_count == 0` (zero angular step), `child_parent_ratio == 0` (zero-radius
    /// children) and depths beyond the top of [`RECURSION_DEPTH_RANGE`] fail. Ratios of
    /// 100 or more never shrink below the radius floor, so depth is the only bound on the
    /// recursion. Shallow depths (0 and 1) and other out-of-range values are accepted.
    pub fn validate(&self) -> Result<()> {
        if self.child_count < 1 {
            return Err(FractalError::InvalidParameter {
                name: "child_count",
                value: i64::from(self.child_count),
                reason: "must be at least 1",
            });
        }
        if self.child_parent_ratio == 0 {
            return Err(FractalError::InvalidParameter {
                name: "child_parent_ratio",
                value: 0,
                reason: "must be a positive percentage",
            });
        }
        if self.recursion_depth > *RECURSION_DEPTH_RANGE.end() {
            return Err(FractalError::InvalidParameter {
                name: "recursion_depth",
                value: i64::from(self.recursion_depth),
                reason: "exceeds the maximum recursion depth",
            });
        }
        Ok(())
    }

    /// Stricter check against the ranges bounded input controls offer.
    pub fn validate_ui_bounds(&self) -> Result<()> {
        check_range("child_count", self.child_count, &CHILD_COUNT_RANGE)?;
        check_range(
            "child_parent_ratio",
            self.child_parent_ratio,
            &CHILD_PARENT_RATIO_RANGE,
        )?;
        check_range(
            "recursion_depth",
            self.recursion_depth,
            &RECURSION_DEPTH_RANGE,
        )
    }

    /// Returns a copy with every bounded field clamped into its control range.
    pub fn clamped_to_ui_bounds(&self) -> Self {
        Self {
            child_count: clamp(self.child_count, &CHILD_COUNT_RANGE),
            child_parent_ratio: clamp(self.child_parent_ratio, &CHILD_PARENT_RATIO_RANGE),
            recursion_depth: clamp(self.recursion_depth, &RECURSION_DEPTH_RANGE),
            ..*self
        }
    }
}

fn check_range(name: &'static str, value: u32, range: &RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(FractalError::InvalidParameter {
            name,
            value: i64::from(value),
            reason: "outside the supported control range",
        })
    }
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// Builder for [`FractalParameters`], starting from the defaults.
#[derive(Clone, Debug, Default)]
pub struct FractalParametersBuilder {
    params: FractalParameters,
}

impl FractalParametersBuilder {
    pub fn color(mut self, color: Color) -> Self {
        self.params.color = color;
        self
    }

    pub fn child_count(mut self, child_count: u32) -> Self {
        self.params.child_count = child_count;
        self
    }

    pub fn dark_mode(mut self, dark_mode: bool) -> Self {
        self.params.dark_mode = dark_mode;
        self
    }

    pub fn child_parent_ratio(mut self, percent: u32) -> Self {
        self.params.child_parent_ratio = percent;
        self
    }

    pub fn recursion_depth(mut self, depth: u32) -> Self {
        self.params.recursion_depth = depth;
        self
    }

    pub fn build(self) -> FractalParameters {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_within_ui_bounds() {
        assert!(FractalParameters::default().validate_ui_bounds().is_ok());
    }

    #[test]
    fn default_color_is_cyan() {
        assert_eq!(FractalParameters::default().color, Color::rgb(0, 255, 255));
        assert_eq!(FractalParameters::builder().build().color, Color::CYAN);
    }

    #[test]
    fn depth_beyond_maximum_is_rejected() {
        let params = FractalParameters::builder().recursion_depth(11).build();
        assert!(matches!(
            params.validate(),
            Err(FractalError::InvalidParameter {
                name: "recursion_depth",
                value: 11,
                ..
            })
        ));
        let params = FractalParameters::builder().recursion_depth(10).build();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_children_is_rejected() {
        let params = FractalParameters::builder().child_count(0).build();
        assert!(matches!(
            params.validate(),
            Err(FractalError::InvalidParameter {
                name: "child_count",
                ..
            })
        ));
    }

    #[test]
    fn zero_ratio_is_rejected() {
        let params = FractalParameters::builder().child_parent_ratio(0).build();
        assert!(params.validate().is_err());
    }

    #[test]
    fn out_of_range_depth_is_still_well_defined() {
        let params = FractalParameters::builder().recursion_depth(1).build();
        assert!(params.validate().is_ok());
        assert!(params.validate_ui_bounds().is_err());
    }

    #[test]
    fn clamping_pulls_values_into_range() {
        let params = FractalParameters::builder()
            .child_count(40)
            .child_parent_ratio(5)
            .recursion_depth(0)
            .dark_mode(true)
            .build()
            .clamped_to_ui_bounds();
        assert_eq!(params.child_count, 13);
        assert_eq!(params.child_parent_ratio, 20);
        assert_eq!(params.recursion_depth, 2);
        assert!(params.dark_mode);
        assert_eq!(params.background(), Background::Dark);
    }
}
