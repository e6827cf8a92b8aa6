use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Rectangle as SvgRect;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw a dashed line between the centers of every pair, annotated with its relation
    #[serde(default)]
    pub relations: bool,
    ///Write the id of each rectangle in its center
    #[serde(default = "default_ids")]
    pub ids: bool,
}

fn default_ids() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            relations: false,
            ids: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub strip_fill: Color,
    pub rect_fill: Color,
    pub relation_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        strip_fill: Color(0xCC, 0x82, 0x4A),
        rect_fill: Color(0xFF, 0xC8, 0x79),
        relation_color: Color(0x2D, 0x2D, 0x2D),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            bail!("expected a color of the form #RRGGBB, got {s:?}");
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An axis-aligned rectangle in svg coordinates (y pointing down), styled with `params`.
pub fn rect(x: f64, y: f64, width: f64, height: f64, params: &[(&str, &str)]) -> SvgRect {
    params.iter().fold(
        SvgRect::new()
            .set("x", x)
            .set("y", y)
            .set("width", width)
            .set("height", height),
        |r, (k, v)| r.set(*k, *v),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_roundtrip_through_hex() {
        let color: Color = "#ffc879".parse().unwrap();
        assert_eq!(color, Color(0xFF, 0xC8, 0x79));
        assert_eq!(color.to_string(), "#FFC879");
        assert_eq!("2D2D2D".parse::<Color>().unwrap(), Color(0x2D, 0x2D, 0x2D));
    }

    #[test]
    fn malformed_colors_are_rejected() {
        assert!("#FFF".parse::<Color>().is_err());
        assert!("#GG0000".parse::<Color>().is_err());
        assert!(serde_json::from_str::<Color>("\"orange\"").is_err());
    }
}
