use crate::color::{
    Color, ContrastLevel, EyeColor, HairColor, JewelryPreference, LipColor, Palette, SeasonId,
    SkinTone, SunReaction, UndertoneResult, VeinColor, classify_season, classify_undertone,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_STYLE_PREFERENCE: &str = "modern";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub basic_info: BasicInfo,
    pub physical_characteristics: PhysicalCharacteristics,
    pub preferences: Preferences,
    pub color_analysis: ColorAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub user_id: String,
    pub name: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalCharacteristics {
    pub skin_tone: SkinTone,
    pub vein_color: VeinColor,
    pub eye_color: EyeColor,
    pub hair_color: HairColor,
    pub natural_lip_color: LipColor,
    pub contrast_level: ContrastLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub jewelry_preference: JewelryPreference,
    pub sun_reaction: SunReaction,
    pub style_preference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorAnalysis {
    pub undertone_analysis: UndertoneResult,
    pub season_analysis: SeasonAnalysis,
    pub recommended_colors: Vec<Color>,
    pub colors_to_avoid: Vec<Color>,
}

/// Stored form of a season classification; the season record itself is
/// resolved from the id on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonAnalysis {
    pub season: SeasonId,
    pub confidence: u8,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteRecord {
    pub user_id: String,
    pub generated_at: String,
    #[serde(flatten)]
    pub palette: Palette,
}

/// Validated attributes for a new profile.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub user_id: String,
    pub name: String,
    pub skin_tone: SkinTone,
    pub vein_color: VeinColor,
    pub jewelry_preference: JewelryPreference,
    pub sun_reaction: SunReaction,
    pub eye_color: EyeColor,
    pub hair_color: HairColor,
    pub natural_lip_color: LipColor,
    pub contrast_level: ContrastLevel,
    pub hair_type: Option<String>,
    pub style_preference: Option<String>,
}

impl ProfileRecord {
    pub fn analyze(input: NewProfile, created_at: String) -> Self {
        let undertone = classify_undertone(
            input.vein_color,
            input.jewelry_preference,
            input.sun_reaction,
            input.natural_lip_color,
        );
        let season = classify_season(
            input.skin_tone,
            undertone.undertone,
            input.eye_color,
            input.hair_color,
            input.contrast_level,
        );

        Self {
            basic_info: BasicInfo {
                user_id: input.user_id,
                name: input.name,
                created_at,
            },
            physical_characteristics: PhysicalCharacteristics {
                skin_tone: input.skin_tone,
                vein_color: input.vein_color,
                eye_color: input.eye_color,
                hair_color: input.hair_color,
                natural_lip_color: input.natural_lip_color,
                contrast_level: input.contrast_level,
                hair_type: input.hair_type,
            },
            preferences: Preferences {
                jewelry_preference: input.jewelry_preference,
                sun_reaction: input.sun_reaction,
                style_preference: input
                    .style_preference
                    .unwrap_or_else(|| DEFAULT_STYLE_PREFERENCE.to_string()),
            },
            color_analysis: ColorAnalysis {
                undertone_analysis: undertone,
                recommended_colors: season.season_info.best_colors.to_vec(),
                colors_to_avoid: season.season_info.avoid_colors.to_vec(),
                season_analysis: SeasonAnalysis {
                    season: season.season,
                    confidence: season.confidence,
                    reasoning: season.reasoning,
                },
            },
        }
    }

    pub fn season(&self) -> SeasonId {
        self.color_analysis.season_analysis.season
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Undertone;

    fn sample() -> NewProfile {
        NewProfile {
            user_id: "ana".to_string(),
            name: "Ana".to_string(),
            skin_tone: SkinTone::Light,
            vein_color: VeinColor::Green,
            jewelry_preference: JewelryPreference::Gold,
            sun_reaction: SunReaction::TansEasily,
            eye_color: EyeColor::Blue,
            hair_color: HairColor::Blonde,
            natural_lip_color: LipColor::Peach,
            contrast_level: ContrastLevel::Low,
            hair_type: None,
            style_preference: None,
        }
    }

    #[test]
    fn analyze_runs_both_classifiers() {
        let record = ProfileRecord::analyze(sample(), "2026-01-01T00:00:00+00:00".to_string());
        assert_eq!(
            record.color_analysis.undertone_analysis.undertone,
            Undertone::Warm
        );
        assert_eq!(record.season(), SeasonId::PrimaveraClara);
        assert_eq!(
            record.color_analysis.recommended_colors,
            SeasonId::PrimaveraClara.season().best_colors
        );
        assert_eq!(
            record.preferences.style_preference,
            DEFAULT_STYLE_PREFERENCE
        );
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = ProfileRecord::analyze(sample(), "2026-01-01T00:00:00+00:00".to_string());
        let value = serde_json::to_value(&record).expect("json");
        assert_eq!(
            value["color_analysis"]["season_analysis"]["season"],
            "primavera_clara"
        );
        assert!(value["physical_characteristics"].get("hair_type").is_none());
        let restored: ProfileRecord = serde_json::from_value(value).expect("record");
        assert_eq!(restored, record);
    }
}
