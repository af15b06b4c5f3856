use crate::color::palette::{EVENT_TYPES, PaletteType};
use crate::color::{
    ContrastLevel, EyeColor, HairColor, HarmonyScheme, JewelryPreference, LipColor, SkinTone,
    SunReaction, Undertone, VeinColor,
};
use serde_json::json;

pub const TOOL_ANALYZE_UNDERTONE: &str = "beauty.analyze_undertone";
pub const TOOL_DETERMINE_SEASON: &str = "beauty.determine_season";
pub const TOOL_HARMONY: &str = "beauty.harmony";
pub const TOOL_ANALYZE_HARMONY: &str = "beauty.analyze_harmony";
pub const TOOL_CREATE_PROFILE: &str = "beauty.create_profile";
pub const TOOL_SHOW_PROFILE: &str = "beauty.show_profile";
pub const TOOL_LIST_PROFILES: &str = "beauty.list_profiles";
pub const TOOL_DELETE_PROFILE: &str = "beauty.delete_profile";
pub const TOOL_GENERATE_PALETTE: &str = "beauty.generate_palette";
pub const TOOL_QUICK_PALETTE: &str = "beauty.quick_palette";
pub const TOOL_PALETTE_HISTORY: &str = "beauty.palette_history";
pub const TOOL_EXPORT_DATA: &str = "beauty.export_data";

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const MAX_BASE_COLORS: usize = 32;
pub const EXPORT_VERSION: &str = "2.0";
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

fn choice(names: &[&str]) -> serde_json::Value {
    json!({ "type": "string", "enum": names })
}

fn user_id_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "user_id": { "type": "string", "minLength": 1 }
        },
        "required": ["user_id"],
        "additionalProperties": false
    })
}

pub fn analyze_undertone_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "vein_color": choice(VeinColor::NAMES),
            "jewelry_preference": choice(JewelryPreference::NAMES),
            "sun_reaction": choice(SunReaction::NAMES),
            "natural_lip_color": choice(LipColor::NAMES)
        },
        "required": ["vein_color", "jewelry_preference", "sun_reaction", "natural_lip_color"],
        "additionalProperties": false
    })
}

pub fn determine_season_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "skin_tone": choice(SkinTone::NAMES),
            "undertone": choice(Undertone::NAMES),
            "eye_color": choice(EyeColor::NAMES),
            "hair_color": choice(HairColor::NAMES),
            "contrast_level": choice(ContrastLevel::NAMES)
        },
        "required": ["skin_tone", "undertone", "eye_color", "hair_color", "contrast_level"],
        "additionalProperties": false
    })
}

pub fn harmony_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "base_colors": {
                "type": "array",
                "items": { "type": "string", "pattern": "^#?[0-9A-Fa-f]{6}$" },
                "minItems": 1,
                "maxItems": MAX_BASE_COLORS
            },
            "scheme": choice(HarmonyScheme::NAMES)
        },
        "required": ["base_colors"],
        "additionalProperties": false
    })
}

pub fn analyze_harmony_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "colors": {
                "type": "array",
                "items": { "type": "string", "pattern": "^#?[0-9A-Fa-f]{6}$" },
                "maxItems": MAX_BASE_COLORS
            }
        },
        "required": ["colors"],
        "additionalProperties": false
    })
}

pub fn create_profile_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "user_id": { "type": "string", "minLength": 1 },
            "name": { "type": "string", "minLength": 1 },
            "skin_tone": choice(SkinTone::NAMES),
            "vein_color": choice(VeinColor::NAMES),
            "jewelry_preference": choice(JewelryPreference::NAMES),
            "sun_reaction": choice(SunReaction::NAMES),
            "eye_color": choice(EyeColor::NAMES),
            "hair_color": choice(HairColor::NAMES),
            "natural_lip_color": choice(LipColor::NAMES),
            "contrast_level": choice(ContrastLevel::NAMES),
            "hair_type": { "type": "string" },
            "style_preference": { "type": "string" }
        },
        "required": [
            "user_id", "name", "skin_tone", "vein_color", "jewelry_preference",
            "sun_reaction", "eye_color", "hair_color", "natural_lip_color", "contrast_level"
        ],
        "additionalProperties": false
    })
}

pub fn show_profile_schema() -> serde_json::Value {
    user_id_schema()
}

pub fn list_profiles_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {},
        "additionalProperties": false
    })
}

pub fn delete_profile_schema() -> serde_json::Value {
    user_id_schema()
}

pub fn generate_palette_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "user_id": { "type": "string", "minLength": 1 },
            "palette_type": choice(PaletteType::NAMES),
            "event_type": choice(EVENT_TYPES)
        },
        "required": ["user_id", "palette_type"],
        "additionalProperties": false
    })
}

pub fn quick_palette_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "palette_type": choice(PaletteType::NAMES),
            "event_type": choice(EVENT_TYPES),
            "skin_tone": choice(SkinTone::NAMES),
            "undertone": choice(Undertone::NAMES)
        },
        "required": ["palette_type"],
        "additionalProperties": false
    })
}

pub fn palette_history_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "user_id": { "type": "string", "minLength": 1 },
            "limit": { "type": "integer", "minimum": 0, "default": DEFAULT_HISTORY_LIMIT }
        },
        "required": ["user_id"],
        "additionalProperties": false
    })
}

pub fn export_data_schema() -> serde_json::Value {
    user_id_schema()
}
