//! Slots a season's colors into makeup, clothing or accessory palettes.
//!
//! Slot assignment is positional over the season's best colors, with fixed
//! fallbacks when the list is too short.

use crate::color::attributes::{Level, Temperature, wire_enum};
use crate::color::convert::Color;
use crate::color::error::ColorError;
use crate::color::harmony::{HarmonyScheme, generate_harmony};
use crate::color::season::{Season, SeasonFamily};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const MAX_HARMONY_COLORS: usize = 8;
const HIGHLIGHTER_TINT: f64 = 0.3;
const LIGHT_PINK: Color = Color::hex(0xFFB6C1);

wire_enum! {
    pub enum PaletteType {
        Clothing => "clothing",
        Makeup => "makeup",
        Accessories => "accessories",
    }
}

impl FromStr for PaletteType {
    type Err = ColorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PaletteType::parse(value).ok_or_else(|| ColorError::UnknownPaletteType(value.to_string()))
    }
}

pub const EVENT_TYPES: &[&str] = &["casual", "work", "formal", "party", "night", "beach"];
pub const DEFAULT_EVENT_TYPE: &str = "casual";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventStyle {
    pub intensity: &'static str,
    pub color_count: u8,
}

pub fn event_style(event_type: &str) -> EventStyle {
    let (intensity, color_count) = match event_type {
        "work" => ("professional", 3),
        "formal" => ("elegant", 5),
        "party" => ("vibrant", 6),
        "night" => ("dramatic", 6),
        "beach" => ("natural", 3),
        // casual, and any event type not listed above
        _ => ("soft", 4),
    };
    EventStyle {
        intensity,
        color_count,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub palette_type: PaletteType,
    pub event_type: String,
    pub base_season: String,
    pub main_palette: PaletteSlots,
    pub harmony_colors: Vec<Color>,
    pub color_theory: ColorTheory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTheory {
    pub temperature: Temperature,
    pub saturation: Level,
    pub contrast: Level,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteSlots {
    Makeup(MakeupSlots),
    Clothing(ClothingSlots),
    Accessories(AccessorySlots),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakeupSlots {
    pub eyes: EyeSlots,
    pub face: FaceSlots,
    pub lips: LipSlots,
    pub recommendations: MakeupAdvice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EyeSlots {
    pub main_shadows: Vec<Color>,
    pub highlight_shadow: Color,
    pub eyeliner: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceSlots {
    pub foundation: Color,
    pub blush: Color,
    pub highlighter: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LipSlots {
    pub main: Color,
    pub alternative: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakeupAdvice {
    pub intensity: String,
    pub color_count: u8,
    pub occasion: String,
    pub technique: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingSlots {
    pub main_colors: Vec<Color>,
    pub neutral_colors: Vec<Color>,
    pub accent_colors: Vec<Color>,
    pub combinations: Vec<Combination>,
    pub textures: Vec<String>,
    pub style: ClothingStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    pub top: Color,
    pub bottom: Color,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingStyle {
    pub occasion: String,
    pub color_temperature: Temperature,
    pub saturation: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessorySlots {
    pub jewelry: JewelrySlots,
    pub bags_shoes: BagShoeSlots,
    pub scarves: Vec<Color>,
    pub recommendations: AccessoryAdvice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JewelrySlots {
    pub main_metal: String,
    pub stones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BagShoeSlots {
    pub versatile_colors: Vec<Color>,
    pub statement_colors: Vec<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryAdvice {
    pub contrast: Level,
    pub occasion: String,
}

pub fn assemble_palette(
    base_colors: &[Color],
    season: &Season,
    palette_type: PaletteType,
    event_type: &str,
) -> Palette {
    let main_palette = match palette_type {
        PaletteType::Makeup => PaletteSlots::Makeup(makeup_slots(base_colors, season, event_type)),
        PaletteType::Clothing => {
            PaletteSlots::Clothing(clothing_slots(base_colors, season, event_type))
        }
        PaletteType::Accessories => {
            PaletteSlots::Accessories(accessory_slots(base_colors, season, event_type))
        }
    };

    let mut harmony_colors = match generate_harmony(base_colors, HarmonyScheme::Complementary) {
        Ok(colors) => colors,
        Err(ColorError::EmptyInput) => Vec::new(),
        Err(err) => {
            tracing::warn!(%err, "harmony generation failed");
            Vec::new()
        }
    };
    harmony_colors.truncate(MAX_HARMONY_COLORS);

    Palette {
        palette_type,
        event_type: event_type.to_string(),
        base_season: season.name.to_string(),
        main_palette,
        harmony_colors,
        color_theory: ColorTheory {
            temperature: season.temperature,
            saturation: season.saturation,
            contrast: season.contrast,
            explanation: season.characteristics.to_string(),
        },
    }
}

fn makeup_slots(base_colors: &[Color], season: &Season, event_type: &str) -> MakeupSlots {
    let style = event_style(event_type);
    let at = |index: usize, fallback: Color| {
        base_colors.get(index).copied().unwrap_or(fallback)
    };
    let from_end = |offset: usize, fallback: Color| {
        base_colors
            .len()
            .checked_sub(offset)
            .and_then(|index| base_colors.get(index))
            .copied()
            .unwrap_or(fallback)
    };

    MakeupSlots {
        eyes: EyeSlots {
            main_shadows: base_colors.iter().take(2).copied().collect(),
            highlight_shadow: at(2, Color::WHITE),
            // Only an exact `high` rating earns black liner.
            eyeliner: if season.contrast == Level::High {
                Color::BLACK
            } else {
                Color::hex(0x8B4513)
            },
        },
        face: FaceSlots {
            foundation: foundation_shade(season.id.family()),
            blush: at(1, LIGHT_PINK),
            highlighter: base_colors
                .first()
                .map_or(Color::hex(0xF0F8FF), |color| color.tint(HIGHLIGHTER_TINT)),
        },
        lips: LipSlots {
            main: from_end(1, Color::hex(0xFF69B4)),
            alternative: from_end(2, LIGHT_PINK),
        },
        recommendations: MakeupAdvice {
            intensity: style.intensity.to_string(),
            color_count: style.color_count,
            occasion: event_type.to_string(),
            technique: makeup_technique(season).to_string(),
        },
    }
}

fn clothing_slots(base_colors: &[Color], season: &Season, event_type: &str) -> ClothingSlots {
    ClothingSlots {
        main_colors: base_colors.iter().take(3).copied().collect(),
        neutral_colors: neutral_colors(season.id.family()),
        accent_colors: base_colors.iter().skip(3).copied().collect(),
        combinations: clothing_combinations(base_colors),
        textures: family_strings(textures(season.id.family())),
        style: ClothingStyle {
            occasion: event_type.to_string(),
            color_temperature: season.temperature,
            saturation: season.saturation,
        },
    }
}

fn accessory_slots(base_colors: &[Color], season: &Season, event_type: &str) -> AccessorySlots {
    let main_metal = match season.temperature {
        Temperature::Warm => "gold",
        Temperature::Cold => "silver",
    };

    AccessorySlots {
        jewelry: JewelrySlots {
            main_metal: main_metal.to_string(),
            stones: family_strings(stones(season.id.family())),
        },
        bags_shoes: BagShoeSlots {
            versatile_colors: neutral_colors(season.id.family()),
            statement_colors: base_colors.iter().take(2).copied().collect(),
        },
        scarves: base_colors.to_vec(),
        recommendations: AccessoryAdvice {
            contrast: season.contrast,
            occasion: event_type.to_string(),
        },
    }
}

fn clothing_combinations(colors: &[Color]) -> Vec<Combination> {
    let combination = |top: Color, bottom: Color, description: &str| Combination {
        top,
        bottom,
        description: description.to_string(),
    };

    match colors {
        [first, second, rest @ ..] => {
            let mut combinations = vec![
                combination(*first, *second, "Main harmonious combination"),
                combination(*second, *first, "Inverted harmonious combination"),
            ];
            if let Some(third) = rest.first() {
                combinations.push(combination(*first, *third, "Contrast combination"));
            }
            combinations
        }
        _ => Vec::new(),
    }
}

fn makeup_technique(season: &Season) -> &'static str {
    if season.contrast == Level::High {
        "Defined contrasts with intense colors"
    } else if season.saturation == Level::High {
        "Vibrant colors with soft blending"
    } else {
        "Soft makeup with natural blending"
    }
}

fn foundation_shade(family: SeasonFamily) -> Color {
    match family {
        SeasonFamily::Spring => Color::hex(0xF5DEB3),
        SeasonFamily::Summer => Color::hex(0xF0F0F0),
        SeasonFamily::Autumn => Color::hex(0xDEB887),
        SeasonFamily::Winter => Color::hex(0xFFE4E1),
    }
}

fn neutral_colors(family: SeasonFamily) -> Vec<Color> {
    let hex: [u32; 3] = match family {
        SeasonFamily::Spring => [0xF5F5DC, 0xDEB887, 0xD2B48C],
        SeasonFamily::Summer => [0xF8F8FF, 0xE6E6FA, 0xD3D3D3],
        SeasonFamily::Autumn => [0xF4A460, 0xD2B48C, 0xA0522D],
        SeasonFamily::Winter => [0xFFFFFF, 0x000000, 0x808080],
    };
    hex.into_iter().map(Color::hex).collect()
}

fn stones(family: SeasonFamily) -> &'static [&'static str] {
    match family {
        SeasonFamily::Spring => &["Topaz", "Peridot", "Aquamarine"],
        SeasonFamily::Summer => &["Pearl", "Amethyst", "Aquamarine"],
        SeasonFamily::Autumn => &["Amber", "Garnet", "Golden topaz"],
        SeasonFamily::Winter => &["Diamond", "Ruby", "Sapphire"],
    }
}

fn textures(family: SeasonFamily) -> &'static [&'static str] {
    match family {
        SeasonFamily::Spring => &["Light cotton", "Linen", "Silk"],
        SeasonFamily::Summer => &["Chiffon", "Organza", "Soft cotton"],
        SeasonFamily::Autumn => &["Tweed", "Velvet", "Wool"],
        SeasonFamily::Winter => &["Satin", "Leather", "Cashmere"],
    }
}

fn family_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
