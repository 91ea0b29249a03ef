//! Plane-to-pixel projection and the draw contract for rendering backends.
//!
//! All geometry lives in an origin-centered, y-up plane. A [`Viewport`] maps it onto a
//! pixel surface with the origin at the surface center and y pointing down:
//!
//! ```text
//! pixel_x = plane_x + width / 2
//! pixel_y = height / 2 - plane_y
//! ```
//!
//! The half-surface offsets use integer division and the final coordinates truncate
//! toward zero. No rounding happens anywhere before this step.

use crate::color::Color;
use crate::primitive::{CirclePrimitive, FractalElementList, LinePrimitive, Primitive};
use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

/// Size of the output surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Projects a plane point into pixel space, truncating toward zero.
    pub fn project_point(&self, point: DVec2) -> IVec2 {
        IVec2::new(
            (point.x + f64::from(self.width / 2)) as i32,
            (f64::from(self.height / 2) - point.y) as i32,
        )
    }
}

/// A circle after projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedCircle {
    pub color: Color,
    pub center: IVec2,
    /// Plane radius truncated toward zero.
    pub radius: i32,
    /// Top-left corner of the circle's bounding square, projected from the plane corner
    /// `(x - r, y + r)`.
    pub top_left: IVec2,
}

impl ProjectedCircle {
    /// Side length of the bounding square, for backends that draw ovals from a box.
    pub fn diameter(&self) -> i32 {
        self.radius * 2
    }

    /// Returns `(top_left, diameter)`.
    pub fn bounding_box(&self) -> (IVec2, i32) {
        (self.top_left, self.diameter())
    }
}

/// A line after projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedLine {
    pub color: Color,
    pub start: IVec2,
    pub end: IVec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectedPrimitive {
    Circle(ProjectedCircle),
    Line(ProjectedLine),
}

/// A rendering backend able to draw projected primitives.
///
/// Implementors own rasterization, stroke style and background handling.
pub trait Surface {
    fn draw_circle(&mut self, circle: &ProjectedCircle);
    fn draw_line(&mut self, line: &ProjectedLine);
}

/// Adapts a pair of closures into a [`Surface`].
pub struct FnSurface<C, L>
where
    C: FnMut(&ProjectedCircle),
    L: FnMut(&ProjectedLine),
{
    pub draw_circle: C,
    pub draw_line: L,
}

impl<C, L> FnSurface<C, L>
where
    C: FnMut(&ProjectedCircle),
    L: FnMut(&ProjectedLine),
{
    pub fn new(draw_circle: C, draw_line: L) -> Self {
        Self {
            draw_circle,
            draw_line,
        }
    }
}

impl<C, L> Surface for FnSurface<C, L>
where
    C: FnMut(&ProjectedCircle),
    L: FnMut(&ProjectedLine),
{
    fn draw_circle(&mut self, circle: &ProjectedCircle) {
        (self.draw_circle)(circle)
    }

    fn draw_line(&mut self, line: &ProjectedLine) {
        (self.draw_line)(line)
    }
}

/// A surface that records every draw call in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    pub calls: Vec<ProjectedPrimitive>,
}

impl Surface for RecordingSurface {
    fn draw_circle(&mut self, circle: &ProjectedCircle) {
        self.calls.push(ProjectedPrimitive::Circle(*circle));
    }

    fn draw_line(&mut self, line: &ProjectedLine) {
        self.calls.push(ProjectedPrimitive::Line(*line));
    }
}

impl CirclePrimitive {
    pub fn project(&self, viewport: Viewport) -> ProjectedCircle {
        let corner = DVec2::new(self.center.x - self.radius, self.center.y + self.radius);
        ProjectedCircle {
            color: self.color,
            center: viewport.project_point(self.center),
            radius: self.radius as i32,
            top_left: viewport.project_point(corner),
        }
    }
}

impl LinePrimitive {
    pub fn project(&self, viewport: Viewport) -> ProjectedLine {
        ProjectedLine {
            color: self.color,
            start: viewport.project_point(self.start),
            end: viewport.project_point(self.end),
        }
    }
}

impl Primitive {
    pub fn project(&self, viewport: Viewport) -> ProjectedPrimitive {
        match self {
            Self::Circle(c) => ProjectedPrimitive::Circle(c.project(viewport)),
            Self::Line(l) => ProjectedPrimitive::Line(l.project(viewport)),
        }
    }

    /// Projects this primitive onto `viewport` and hands it to `surface`.
    pub fn project_and_draw<S: Surface + ?Sized>(&self, viewport: Viewport, surface: &mut S) {
        match self.project(viewport) {
            ProjectedPrimitive::Circle(c) => surface.draw_circle(&c),
            ProjectedPrimitive::Line(l) => surface.draw_line(&l),
        }
    }
}

impl FractalElementList {
    /// Draws every element in generation order.
    pub fn project_and_draw<S: Surface + ?Sized>(&self, viewport: Viewport, surface: &mut S) {
        for element in &self.elements {
            element.project_and_draw(viewport, surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_surface_center() {
        let vp = Viewport::new(800, 600);
        assert_eq!(vp.project_point(DVec2::ZERO), IVec2::new(400, 300));
    }

    #[test]
    fn y_axis_is_flipped() {
        let vp = Viewport::new(800, 800);
        assert_eq!(vp.project_point(DVec2::new(10.0, 200.0)), IVec2::new(410, 200));
        assert_eq!(vp.project_point(DVec2::new(-10.0, -200.0)), IVec2::new(390, 600));
    }

    #[test]
    fn odd_surface_uses_integer_half_offset() {
        // 801 / 2 == 400, not 400.5
        let vp = Viewport::new(801, 801);
        assert_eq!(vp.project_point(DVec2::new(0.75, 0.25)), IVec2::new(400, 399));
    }

    #[test]
    fn coordinates_truncate_toward_zero() {
        let vp = Viewport::new(0, 0);
        assert_eq!(vp.project_point(DVec2::new(2.9, -2.9)), IVec2::new(2, 2));
        assert_eq!(vp.project_point(DVec2::new(-2.9, 2.9)), IVec2::new(-2, -2));
    }

    #[test]
    fn circle_bounding_box() {
        let circle = CirclePrimitive {
            color: Color::BLACK,
            center: DVec2::new(0.0, 200.0),
            radius: 50.5,
        };
        let projected = circle.project(Viewport::new(800, 800));
        assert_eq!(projected.center, IVec2::new(400, 200));
        assert_eq!(projected.radius, 50);
        // Corner (-50.5, 250.5) -> (349.5, 149.5) -> truncated
        assert_eq!(projected.bounding_box(), (IVec2::new(349, 149), 100));
    }

    #[test]
    fn closure_surface_dispatches_by_variant() {
        let mut circles = 0;
        let mut lines = Vec::new();
        {
            let mut surface = FnSurface::new(
                |_: &ProjectedCircle| circles += 1,
                |l: &ProjectedLine| lines.push((l.start, l.end)),
            );
            let vp = Viewport::new(100, 100);
            Primitive::circle(Color::WHITE, DVec2::ZERO, 10.0).project_and_draw(vp, &mut surface);
            Primitive::line(Color::WHITE, DVec2::new(0.0, 10.0), DVec2::new(0.0, 15.0))
                .project_and_draw(vp, &mut surface);
        }
        assert_eq!(circles, 1);
        assert_eq!(lines, vec![(IVec2::new(50, 40), IVec2::new(50, 35))]);
    }
}
