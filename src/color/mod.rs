//! Colorimetric analysis: undertone scoring, season classification, harmony
//! generation and palette assembly.
//!
//! Everything here is pure and synchronous. The season records and decision
//! tables are read-only statics.

pub mod attributes;
pub mod convert;
pub mod error;
pub mod harmony;
pub mod palette;
pub mod season;
pub mod undertone;

pub use attributes::{
    ContrastLevel, EyeColor, HairColor, JewelryPreference, LipColor, SkinTone, SunReaction,
    Undertone, VeinColor,
};
pub use convert::{Color, hex_to_hsl};
pub use error::ColorError;
pub use harmony::{HarmonyScheme, analyze_harmony, generate_harmony};
pub use palette::{Palette, PaletteType, assemble_palette};
pub use season::{SeasonId, classify_season, quick_season};
pub use undertone::{UndertoneResult, classify_undertone};
