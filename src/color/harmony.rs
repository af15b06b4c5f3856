//! Harmony palettes derived by hue rotation in HSL space, and the reverse:
//! judging how an existing set of colors relates by hue.

use crate::color::attributes::wire_enum;
use crate::color::convert::{Color, Hsl};
use crate::color::error::ColorError;
use indexmap::IndexSet;
use serde::Serialize;
use std::str::FromStr;

const LIGHTNESS_STEP: f64 = 0.2;

const THIRTY_DEGREES: f64 = 1.0 / 12.0;
const ONE_THIRD_TURN: f64 = 1.0 / 3.0;
const HALF_TURN: f64 = 0.5;

const COMPLEMENTARY: &[f64] = &[HALF_TURN];
const ANALOGOUS: &[f64] = &[THIRTY_DEGREES, -THIRTY_DEGREES];
const TRIADIC: &[f64] = &[ONE_THIRD_TURN, 2.0 * ONE_THIRD_TURN];
const SPLIT_COMPLEMENTARY: &[f64] = &[HALF_TURN + THIRTY_DEGREES, HALF_TURN - THIRTY_DEGREES];

wire_enum! {
    pub enum HarmonyScheme {
        Complementary => "complementary",
        Analogous => "analogous",
        Triadic => "triadic",
        SplitComplementary => "split_complementary",
    }
}

impl HarmonyScheme {
    /// Hue offsets, in turns, of the non-seed colors.
    fn offsets(self) -> &'static [f64] {
        match self {
            HarmonyScheme::Complementary => COMPLEMENTARY,
            HarmonyScheme::Analogous => ANALOGOUS,
            HarmonyScheme::Triadic => TRIADIC,
            HarmonyScheme::SplitComplementary => SPLIT_COMPLEMENTARY,
        }
    }
}

impl FromStr for HarmonyScheme {
    type Err = ColorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        HarmonyScheme::parse(value).ok_or_else(|| ColorError::UnknownScheme(value.to_string()))
    }
}

/// Builds a harmony palette from the first base color.
///
/// Each scheme color is emitted with a lighter and a darker variant
/// (lightness +/- 0.2, clamped). Duplicates are dropped; the first
/// occurrence keeps its position, so the output order is stable: seed,
/// seed lighter, seed darker, then each rotated color and its variants.
pub fn generate_harmony(
    base_colors: &[Color],
    scheme: HarmonyScheme,
) -> Result<Vec<Color>, ColorError> {
    let seed = *base_colors.first().ok_or(ColorError::EmptyInput)?;
    let hsl = seed.to_hsl();

    let mut palette = IndexSet::new();
    expand_lightness(&mut palette, seed, hsl);
    for &offset in scheme.offsets() {
        let rotated = hsl.rotate(offset);
        expand_lightness(&mut palette, rotated.to_color(), rotated);
    }

    tracing::debug!(%seed, %scheme, colors = palette.len(), "generated harmony");
    Ok(palette.into_iter().collect())
}

fn expand_lightness(palette: &mut IndexSet<Color>, color: Color, hsl: Hsl) {
    let lighter = hsl.with_lightness((hsl.l + LIGHTNESS_STEP).min(1.0));
    let darker = hsl.with_lightness((hsl.l - LIGHTNESS_STEP).max(0.0));
    palette.insert(color);
    palette.insert(lighter.to_color());
    palette.insert(darker.to_color());
}

wire_enum! {
    pub enum HarmonyType {
        Analogous => "analogous",
        Complementary => "complementary",
        Triadic => "triadic",
        Complex => "complex",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarmonyAnalysis {
    pub harmony_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmony_type: Option<HarmonyType>,
    pub analysis: String,
    /// Degrees, rounded to two decimals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_hue_difference: Option<f64>,
}

/// Classifies a color set by the mean hue distance between neighbors in
/// the given order.
///
/// Distances are plain `|h1 - h2|` in degrees without wrapping, so red next
/// to blue counts as 240 and lands in `Complex`. Fewer than two colors
/// scores 0 with no type.
pub fn analyze_harmony(colors: &[Hsl]) -> HarmonyAnalysis {
    if colors.len() < 2 {
        return HarmonyAnalysis {
            harmony_score: 0,
            harmony_type: None,
            analysis: "at least two colors are needed".to_string(),
            average_hue_difference: None,
        };
    }

    let total: f64 = colors
        .windows(2)
        .map(|pair| (pair[0].h - pair[1].h).abs() * 360.0)
        .sum();
    let average = total / (colors.len() - 1) as f64;
    let (harmony_type, harmony_score, analysis) = classify_hue_spread(average);

    HarmonyAnalysis {
        harmony_score,
        harmony_type: Some(harmony_type),
        analysis: analysis.to_string(),
        average_hue_difference: Some((average * 100.0).round() / 100.0),
    }
}

fn classify_hue_spread(degrees: f64) -> (HarmonyType, u8, &'static str) {
    if degrees < 60.0 {
        (
            HarmonyType::Analogous,
            85,
            "Neighboring hues that read as calm and cohesive",
        )
    } else if degrees > 150.0 && degrees < 210.0 {
        (
            HarmonyType::Complementary,
            90,
            "Opposing hues that create dynamic contrast",
        )
    } else if degrees > 90.0 && degrees < 150.0 {
        (
            HarmonyType::Triadic,
            80,
            "Evenly spaced hues that add energy while staying balanced",
        )
    } else {
        (
            HarmonyType::Complex,
            70,
            "A diverse palette that takes skill to balance",
        )
    }
}
