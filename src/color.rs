//! Opaque RGB color values and background selection.

use serde::{Deserialize, Serialize};

/// An RGB triple. The generator threads it through to every primitive unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Background the rendering collaborator should clear its surface to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Background {
    /// Black-on-white.
    #[default]
    Light,
    /// White-on-black.
    Dark,
}

impl Background {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }

    pub fn fill_color(self) -> Color {
        match self {
            Self::Light => Color::WHITE,
            Self::Dark => Color::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_mode_selects_black_background() {
        assert_eq!(Background::from_dark_mode(true).fill_color(), Color::BLACK);
        assert_eq!(Background::from_dark_mode(false).fill_color(), Color::WHITE);
    }
}
