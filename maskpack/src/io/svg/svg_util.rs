use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Path;
use svg::node::element::path::Data;

use crate::geometry::BinaryMask;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutThemes,
    ///Give every placed item its own colour instead of the theme's item fill
    #[serde(default)]
    pub color_items: bool,
    ///Draw the pixels outside the container
    #[serde(default)]
    pub draw_exterior: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutThemes::default(),
            color_items: true,
            draw_exterior: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy, Default)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => SvgLayoutTheme::EARTH_TONES,
            SvgLayoutThemes::Gray => SvgLayoutTheme::GRAY,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub container_fill: Color,
    pub exterior_fill: Color,
    pub item_fill: Color,
    pub item_stroke: Color,
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        container_fill: Color(0xCC, 0x82, 0x4A),
        exterior_fill: Color(0x2D, 0x2D, 0x2D),
        item_fill: Color(0xFF, 0xC8, 0x79),
        item_stroke: Color(0x00, 0x00, 0x00),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        container_fill: Color(0xD3, 0xD3, 0xD3),
        exterior_fill: Color(0xFF, 0xFF, 0xFF),
        item_fill: Color(0x7A, 0x7A, 0x7A),
        item_stroke: Color(0x00, 0x00, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction).min(255.0) as u8;
    let g = (g as f32 * fraction).min(255.0) as u8;
    let b = (b as f32 * fraction).min(255.0) as u8;
    Color(r, g, b)
}

/// Deterministic, well spread colour for the `i`-th item
pub fn item_color(base: Color, i: usize) -> Color {
    //golden ratio stepping through brightness levels
    let fraction = 0.55 + ((i as f32 * 0.618_034) % 1.0) * 0.6;
    change_brightness(base, fraction)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = std::num::ParseIntError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.strip_prefix('#').unwrap_or(s);
        let channel = |i: usize| u8::from_str_radix(s.get(i..i + 2).unwrap_or(""), 16);
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

/// Path data covering every foreground pixel of `mask`, shifted by `(row_offset, col_offset)`.
/// Each horizontal run of foreground pixels becomes a single rectangle.
pub fn mask_data(mask: &BinaryMask, (row_offset, col_offset): (usize, usize)) -> Data {
    let mut data = Data::new();
    for (r, row) in mask.pixels().rows().into_iter().enumerate() {
        let y = (r + row_offset) as f32;
        let mut run_start = None;
        for c in 0..=row.len() {
            let on = c < row.len() && row[c];
            match (on, run_start) {
                (true, None) => run_start = Some(c),
                (false, Some(start)) => {
                    let (x0, x1) = ((start + col_offset) as f32, (c + col_offset) as f32);
                    data = data
                        .move_to((x0, y))
                        .line_to((x1, y))
                        .line_to((x1, y + 1.0))
                        .line_to((x0, y + 1.0))
                        .close();
                    run_start = None;
                }
                _ => {}
            }
        }
    }
    data
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_round_trip() {
        let color = Color(0xCC, 0x82, 0x4A);
        assert_eq!(color.to_string(), "#CC824A");
        assert_eq!(Color::try_from("#CC824A").unwrap(), color);
        assert!(Color::try_from("#CC82").is_err());
    }

    #[test]
    fn theme_is_selected_by_name() {
        let options: SvgDrawOptions = serde_json::from_str(r#"{"theme": "Gray"}"#).unwrap();
        assert_eq!(options.theme.get_theme(), SvgLayoutTheme::GRAY);
        assert!(!options.color_items && !options.draw_exterior);
        assert_eq!(
            SvgDrawOptions::default().theme.get_theme(),
            SvgLayoutTheme::EARTH_TONES
        );
    }
}
