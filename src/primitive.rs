use crate::color::Color;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A circle in plane coordinates (origin-centered, y-up).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub color: Color,
    pub center: DVec2,
    /// Always positive; the generator never emits degenerate circles.
    pub radius: f64,
}

/// A straight segment in plane coordinates. The generator only emits these as tethers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub color: Color,
    pub start: DVec2,
    pub end: DVec2,
}

impl LinePrimitive {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A single drawable shape of the fractal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Circle(CirclePrimitive),
    Line(LinePrimitive),
}

impl Primitive {
    pub fn circle(color: Color, center: DVec2, radius: f64) -> Self {
        Self::Circle(CirclePrimitive {
            color,
            center,
            radius,
        })
    }

    pub fn line(color: Color, start: DVec2, end: DVec2) -> Self {
        Self::Line(LinePrimitive { color, start, end })
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Circle(c) => c.color,
            Self::Line(l) => l.color,
        }
    }

    pub fn as_circle(&self) -> Option<&CirclePrimitive> {
        match self {
            Self::Circle(c) => Some(c),
            Self::Line(_) => None,
        }
    }

    pub fn as_line(&self) -> Option<&LinePrimitive> {
        match self {
            Self::Line(l) => Some(l),
            Self::Circle(_) => None,
        }
    }
}

/// The complete output of one generation request.
///
/// Insertion order is generation order: each circle precedes its subtree, and each tether
/// directly follows the subtree of the child it connects to. The list is never mutated
/// after generation; a new request produces a new list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FractalElementList {
    pub elements: Vec<Primitive>,
}

impl FractalElementList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, primitive: Primitive) {
        self.elements.push(primitive);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.elements.iter()
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.elements.iter().filter_map(Primitive::as_circle)
    }

    pub fn tethers(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.elements.iter().filter_map(Primitive::as_line)
    }

    pub fn circle_count(&self) -> usize {
        self.circles().count()
    }

    pub fn tether_count(&self) -> usize {
        self.tethers().count()
    }
}

impl<'a> IntoIterator for &'a FractalElementList {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for FractalElementList {
    type Item = Primitive;
    type IntoIter = std::vec::IntoIter<Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
