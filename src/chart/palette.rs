//! Place to color assignment shared by all sub-charts

use crate::stats::{PlaceCount, SliceLabel};
use plotters::style::RGBColor;

/// Categorical palette: the ten "tab10" colors followed by the light
/// half of "tab20"
pub const PALETTE: [RGBColor; 20] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
    RGBColor(0xae, 0xc7, 0xe8),
    RGBColor(0xff, 0xbb, 0x78),
    RGBColor(0x98, 0xdf, 0x8a),
    RGBColor(0xff, 0x98, 0x96),
    RGBColor(0xc5, 0xb0, 0xd5),
    RGBColor(0xc4, 0x9c, 0x94),
    RGBColor(0xf7, 0xb6, 0xd2),
    RGBColor(0xc7, 0xc7, 0xc7),
    RGBColor(0xdb, 0xdb, 0x8d),
    RGBColor(0x9e, 0xda, 0xe5),
];

/// Colors of the top places, plus the color of the "Other" bucket
#[derive(Debug, Clone)]
pub struct ColorMap {
    places: Vec<(String, RGBColor)>,
    other: RGBColor,
}

impl ColorMap {
    /// Assign palette entries to the first `top_n` ranked places; "Other"
    /// takes the next unused entry
    pub fn from_ranking(ranking: &[PlaceCount], top_n: usize) -> Self {
        let top_n = top_n.min(PALETTE.len() - 1);
        let places: Vec<(String, RGBColor)> = ranking
            .iter()
            .take(top_n)
            .zip(PALETTE.iter())
            .map(|(p, color)| (p.place.clone(), *color))
            .collect();
        let other = PALETTE[places.len()];

        ColorMap { places, other }
    }

    /// Color of a top place, if it is one
    pub fn place_color(&self, place: &str) -> Option<RGBColor> {
        self.places
            .iter()
            .find(|(name, _)| name == place)
            .map(|(_, color)| *color)
    }

    /// Color of any place, falling back to the "Other" color
    pub fn color_of(&self, place: &str) -> RGBColor {
        self.place_color(place).unwrap_or(self.other)
    }

    pub fn label_color(&self, label: &SliceLabel) -> RGBColor {
        match label {
            SliceLabel::Place(place) => self.color_of(place),
            SliceLabel::Other => self.other,
        }
    }

    pub fn other(&self) -> RGBColor {
        self.other
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
