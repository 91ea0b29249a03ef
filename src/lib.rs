//! # radial-tether
//!
//! A geometry crate that expands five scalar parameters into a *tethered radial fractal*:
//! a recursive arrangement of circles connected to their parents by radial tether lines.
//!
//! The generator is pure. It produces a flat, ordered [`FractalElementList`] in an abstract
//! origin-centered plane, which can be handed to any rendering backend through the
//! [`Surface`] trait. Pixel projection happens only at draw time, so the same list can be
//! drawn onto surfaces of any size.
//!
//! ```
//! use radial_tether::{FractalParameters, RecordingSurface, Viewport, generate};
//!
//! let params = FractalParameters::builder()
//!     .child_count(4)
//!     .child_parent_ratio(40)
//!     .recursion_depth(3)
//!     .build();
//!
//! let elements = generate(&params).unwrap();
//! assert_eq!(elements.circle_count(), 1 + 4 + 16);
//!
//! let mut surface = RecordingSurface::default();
//! elements.project_and_draw(Viewport::new(800, 800), &mut surface);
//! assert_eq!(surface.calls.len(), elements.len());
//! ```

pub mod color;
pub mod error;
pub mod generator;
pub mod params;
pub mod primitive;
pub mod projection;

pub use color::*;
pub use error::*;
pub use generator::*;
pub use params::*;
pub use primitive::*;
pub use projection::*;
