use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgTheme,
    ///Write the part id and dimensions on every placement
    #[serde(default = "enabled")]
    pub labels: bool,
    ///Shade the saw kerf reserved to the right of and above every placement
    #[serde(default)]
    pub kerf_margin: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            labels: true,
            kerf_margin: false,
        }
    }
}

fn enabled() -> bool {
    true
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SvgTheme {
    #[default]
    EarthTones,
    Gray,
}

impl SvgTheme {
    pub fn layout_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgTheme::EarthTones => SvgLayoutTheme::EARTH_TONES,
            SvgTheme::Gray => SvgLayoutTheme::GRAY,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub bin_fill: Color,
    pub part_fill: Color,
    pub label_fill: Color,
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        bin_fill: Color(0xCC, 0x82, 0x4A),
        part_fill: Color(0xFF, 0xC8, 0x79),
        label_fill: Color(0x2D, 0x2D, 0x2D),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        bin_fill: Color(0xD3, 0xD3, 0xD3),
        part_fill: Color(0x7A, 0x7A, 0x7A),
        label_fill: Color(0xFF, 0xFF, 0xFF),
    };

    /// Rotated parts are drawn slightly darker
    pub fn rotated_part_fill(&self) -> Color {
        change_brightness(self.part_fill, 0.85)
    }

    pub fn kerf_fill(&self) -> Color {
        blend_colors(self.bin_fill, self.label_fill)
    }
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

pub fn blend_colors(color_1: Color, color_2: Color) -> Color {
    let Color(r_1, g_1, b_1) = color_1;
    let Color(r_2, g_2, b_2) = color_2;

    let r = ((r_1 as f32 * 0.5) + (r_2 as f32 * 0.5)) as u8;
    let g = ((g_1 as f32 * 0.5) + (g_2 as f32 * 0.5)) as u8;
    let b = ((b_1 as f32 * 0.5) + (b_2 as f32 * 0.5)) as u8;

    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors() {
        assert_eq!(Color(0xCC, 0x82, 0x4A).to_string(), "#CC824A");
        assert_eq!(change_brightness(Color(200, 100, 10), 0.5), Color(100, 50, 5));
        assert_eq!(blend_colors(Color(0, 0, 0), Color(200, 100, 50)), Color(100, 50, 25));
    }
}
