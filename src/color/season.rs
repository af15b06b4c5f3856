//! Seasonal color classification.
//!
//! Classification is two table lookups: an optional (hair, eye) contrast
//! override, then the (skin tone, undertone, contrast) matrix.

use crate::color::attributes::{
    ContrastLevel, EyeColor, HairColor, Level, SkinTone, Temperature, Undertone, wire_enum,
};
use crate::color::convert::Color;
use serde::Serialize;

const CLASSIFICATION_CONFIDENCE: u8 = 85;

wire_enum! {
    pub enum SeasonId {
        PrimaveraCalida => "primavera_calida",
        PrimaveraClara => "primavera_clara",
        VeranoSuave => "verano_suave",
        VeranoFrio => "verano_frio",
        OtonoSuave => "otono_suave",
        OtonoProfundo => "otono_profundo",
        InviernoProfundo => "invierno_profundo",
        InviernoBrillante => "invierno_brillante",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonFamily {
    Spring,
    Summer,
    Autumn,
    Winter,
}

#[derive(Debug, Serialize)]
pub struct Season {
    pub id: SeasonId,
    pub name: &'static str,
    pub characteristics: &'static str,
    pub temperature: Temperature,
    pub saturation: Level,
    pub contrast: Level,
    pub best_colors: &'static [Color],
    pub avoid_colors: &'static [Color],
}

static SEASONS: [Season; 8] = [
    Season {
        id: SeasonId::PrimaveraCalida,
        name: "Primavera Cálida",
        characteristics: "Vibrant, warm and clear colors",
        temperature: Temperature::Warm,
        saturation: Level::High,
        contrast: Level::Medium,
        best_colors: &[
            Color::hex(0xFF6B35),
            Color::hex(0xF7931E),
            Color::hex(0xFFD700),
            Color::hex(0x32CD32),
            Color::hex(0xFF69B4),
            Color::hex(0x87CEEB),
        ],
        avoid_colors: &[
            Color::hex(0x000000),
            Color::hex(0xFFFFFF),
            Color::hex(0x4169E1),
            Color::hex(0x8B008B),
        ],
    },
    Season {
        id: SeasonId::PrimaveraClara,
        name: "Primavera Clara",
        characteristics: "Soft, warm and luminous colors",
        temperature: Temperature::Warm,
        saturation: Level::Medium,
        contrast: Level::Low,
        best_colors: &[
            Color::hex(0xFFB6C1),
            Color::hex(0xFFDAB9),
            Color::hex(0xF0E68C),
            Color::hex(0x98FB98),
            Color::hex(0x87CEFA),
            Color::hex(0xDDA0DD),
        ],
        avoid_colors: &[
            Color::hex(0x000000),
            Color::hex(0x8B0000),
            Color::hex(0x000080),
            Color::hex(0x4B0082),
        ],
    },
    Season {
        id: SeasonId::VeranoSuave,
        name: "Verano Suave",
        characteristics: "Muted, fresh and soft colors",
        temperature: Temperature::Cold,
        saturation: Level::Low,
        contrast: Level::Low,
        best_colors: &[
            Color::hex(0xB0C4DE),
            Color::hex(0xD8BFD8),
            Color::hex(0xF0F8FF),
            Color::hex(0xE6E6FA),
            Color::hex(0xFAFAFA),
            Color::hex(0xF5F5DC),
        ],
        avoid_colors: &[
            Color::hex(0xFF4500),
            Color::hex(0xFFD700),
            Color::hex(0x32CD32),
            Color::hex(0xFF1493),
        ],
    },
    Season {
        id: SeasonId::VeranoFrio,
        name: "Verano Frío",
        characteristics: "Fresh, soft colors with a blue base",
        temperature: Temperature::Cold,
        saturation: Level::Medium,
        contrast: Level::Medium,
        best_colors: &[
            Color::hex(0x4169E1),
            Color::hex(0x9370DB),
            Color::hex(0xFF69B4),
            Color::hex(0x20B2AA),
            Color::hex(0xBA55D3),
            Color::hex(0x7B68EE),
        ],
        avoid_colors: &[
            Color::hex(0xFF8C00),
            Color::hex(0xFF6347),
            Color::hex(0xDAA520),
            Color::hex(0xCD853F),
        ],
    },
    Season {
        id: SeasonId::OtonoSuave,
        name: "Otoño Suave",
        characteristics: "Earthy, warm and muted colors",
        temperature: Temperature::Warm,
        saturation: Level::Low,
        contrast: Level::Low,
        best_colors: &[
            Color::hex(0xD2B48C),
            Color::hex(0xDEB887),
            Color::hex(0xF4A460),
            Color::hex(0xCD853F),
            Color::hex(0xBC8F8F),
            Color::hex(0xA0522D),
        ],
        avoid_colors: &[
            Color::hex(0xFF1493),
            Color::hex(0x00BFFF),
            Color::hex(0x7FFF00),
            Color::hex(0xFF00FF),
        ],
    },
    Season {
        id: SeasonId::OtonoProfundo,
        name: "Otoño Profundo",
        characteristics: "Rich, warm and saturated colors",
        temperature: Temperature::Warm,
        saturation: Level::High,
        contrast: Level::High,
        best_colors: &[
            Color::hex(0x8B4513),
            Color::hex(0xA0522D),
            Color::hex(0xCD853F),
            Color::hex(0xDAA520),
            Color::hex(0xB22222),
            Color::hex(0x800080),
        ],
        avoid_colors: &[
            Color::hex(0xE0E0E0),
            Color::hex(0xF0F8FF),
            Color::hex(0x87CEEB),
            Color::hex(0xFFB6C1),
        ],
    },
    Season {
        id: SeasonId::InviernoProfundo,
        name: "Invierno Profundo",
        characteristics: "Intense, cold and dramatic colors",
        temperature: Temperature::Cold,
        saturation: Level::High,
        contrast: Level::VeryHigh,
        best_colors: &[
            Color::hex(0x000000),
            Color::hex(0xFFFFFF),
            Color::hex(0xFF0000),
            Color::hex(0x0000FF),
            Color::hex(0xFF1493),
            Color::hex(0x8A2BE2),
        ],
        avoid_colors: &[
            Color::hex(0xF5DEB3),
            Color::hex(0xFFDAB9),
            Color::hex(0xFFE4B5),
            Color::hex(0xF0E68C),
        ],
    },
    Season {
        id: SeasonId::InviernoBrillante,
        name: "Invierno Brillante",
        characteristics: "Vibrant, cold and clear colors",
        temperature: Temperature::Cold,
        saturation: Level::VeryHigh,
        contrast: Level::High,
        best_colors: &[
            Color::hex(0xFF1493),
            Color::hex(0x00BFFF),
            Color::hex(0x7FFF00),
            Color::hex(0xFF00FF),
            Color::hex(0x00FF00),
            Color::hex(0xFFFF00),
        ],
        avoid_colors: &[
            Color::hex(0x696969),
            Color::hex(0xA9A9A9),
            Color::hex(0xD2B48C),
            Color::hex(0xDEB887),
        ],
    },
];

type SeasonKey = (SkinTone, Undertone, ContrastLevel);

pub(crate) const SEASON_MATRIX: [(SeasonKey, SeasonId); 27] = {
    use ContrastLevel as C;
    use SeasonId as S;
    use SkinTone::{Dark, Light, Medium};
    use Undertone::{Cold, Neutral, Warm};
    [
        ((Light, Warm, C::Low), S::PrimaveraClara),
        ((Light, Warm, C::Medium), S::PrimaveraCalida),
        ((Light, Warm, C::High), S::PrimaveraCalida),
        ((Light, Cold, C::Low), S::VeranoSuave),
        ((Light, Cold, C::Medium), S::VeranoFrio),
        ((Light, Cold, C::High), S::InviernoBrillante),
        ((Light, Neutral, C::Low), S::VeranoSuave),
        ((Light, Neutral, C::Medium), S::VeranoFrio),
        ((Light, Neutral, C::High), S::InviernoBrillante),
        ((Medium, Warm, C::Low), S::OtonoSuave),
        ((Medium, Warm, C::Medium), S::PrimaveraCalida),
        ((Medium, Warm, C::High), S::OtonoProfundo),
        ((Medium, Cold, C::Low), S::VeranoSuave),
        ((Medium, Cold, C::Medium), S::VeranoFrio),
        ((Medium, Cold, C::High), S::InviernoProfundo),
        ((Medium, Neutral, C::Low), S::OtonoSuave),
        ((Medium, Neutral, C::Medium), S::VeranoFrio),
        ((Medium, Neutral, C::High), S::InviernoProfundo),
        ((Dark, Warm, C::Low), S::OtonoSuave),
        ((Dark, Warm, C::Medium), S::OtonoProfundo),
        ((Dark, Warm, C::High), S::OtonoProfundo),
        ((Dark, Cold, C::Low), S::InviernoProfundo),
        ((Dark, Cold, C::Medium), S::InviernoProfundo),
        ((Dark, Cold, C::High), S::InviernoProfundo),
        ((Dark, Neutral, C::Low), S::InviernoProfundo),
        ((Dark, Neutral, C::Medium), S::InviernoProfundo),
        ((Dark, Neutral, C::High), S::InviernoProfundo),
    ]
};

const CONTRAST_OVERRIDES: [((HairColor, EyeColor), ContrastLevel); 6] = {
    use ContrastLevel::{High, Low, Medium};
    [
        ((HairColor::Black, EyeColor::Blue), High),
        ((HairColor::Black, EyeColor::Green), High),
        ((HairColor::Blonde, EyeColor::Brown), Medium),
        ((HairColor::Blonde, EyeColor::Blue), Low),
        ((HairColor::Chestnut, EyeColor::Green), Medium),
        ((HairColor::Red, EyeColor::Green), High),
    ]
};

/// Season estimate from skin tone and undertone alone, assuming medium
/// contrast. Deliberately not derived from `SEASON_MATRIX`.
const QUICK_SEASONS: [((SkinTone, Undertone), SeasonId); 9] = {
    use SeasonId as S;
    use SkinTone::{Dark, Light, Medium};
    use Undertone::{Cold, Neutral, Warm};
    [
        ((Light, Cold), S::VeranoFrio),
        ((Light, Warm), S::PrimaveraCalida),
        ((Light, Neutral), S::VeranoSuave),
        ((Medium, Cold), S::VeranoFrio),
        ((Medium, Warm), S::OtonoSuave),
        ((Medium, Neutral), S::VeranoSuave),
        ((Dark, Cold), S::InviernoProfundo),
        ((Dark, Warm), S::OtonoProfundo),
        ((Dark, Neutral), S::InviernoProfundo),
    ]
};

pub const FALLBACK_SEASON: SeasonId = SeasonId::VeranoSuave;

impl SeasonId {
    pub fn season(self) -> &'static Season {
        let index = match self {
            SeasonId::PrimaveraCalida => 0,
            SeasonId::PrimaveraClara => 1,
            SeasonId::VeranoSuave => 2,
            SeasonId::VeranoFrio => 3,
            SeasonId::OtonoSuave => 4,
            SeasonId::OtonoProfundo => 5,
            SeasonId::InviernoProfundo => 6,
            SeasonId::InviernoBrillante => 7,
        };
        &SEASONS[index]
    }

    pub fn family(self) -> SeasonFamily {
        match self {
            SeasonId::PrimaveraCalida | SeasonId::PrimaveraClara => SeasonFamily::Spring,
            SeasonId::VeranoSuave | SeasonId::VeranoFrio => SeasonFamily::Summer,
            SeasonId::OtonoSuave | SeasonId::OtonoProfundo => SeasonFamily::Autumn,
            SeasonId::InviernoProfundo | SeasonId::InviernoBrillante => SeasonFamily::Winter,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeasonClassification {
    pub season: SeasonId,
    pub season_info: &'static Season,
    pub confidence: u8,
    pub reasoning: String,
}

pub fn classify_season(
    skin_tone: SkinTone,
    undertone: Undertone,
    eye_color: EyeColor,
    hair_color: HairColor,
    contrast_level: ContrastLevel,
) -> SeasonClassification {
    let contrast = adjusted_contrast(hair_color, eye_color, contrast_level);
    let season = lookup_season(&SEASON_MATRIX, (skin_tone, undertone, contrast));
    let info = season.season();

    tracing::debug!(%skin_tone, %undertone, %contrast, %season, "classified season");

    SeasonClassification {
        season,
        season_info: info,
        confidence: CLASSIFICATION_CONFIDENCE,
        reasoning: format!(
            "{skin_tone} skin + {undertone} undertone + {contrast} contrast = {}",
            info.name
        ),
    }
}

pub fn adjusted_contrast(
    hair_color: HairColor,
    eye_color: EyeColor,
    contrast_level: ContrastLevel,
) -> ContrastLevel {
    CONTRAST_OVERRIDES
        .iter()
        .find(|(pair, _)| *pair == (hair_color, eye_color))
        .map_or(contrast_level, |(_, contrast)| *contrast)
}

pub(crate) fn lookup_season(table: &[(SeasonKey, SeasonId)], key: SeasonKey) -> SeasonId {
    match table.iter().find(|(entry, _)| *entry == key) {
        Some((_, season)) => *season,
        None => {
            tracing::warn!(?key, fallback = %FALLBACK_SEASON, "no season rule matched");
            FALLBACK_SEASON
        }
    }
}

pub fn quick_season(skin_tone: SkinTone, undertone: Undertone) -> SeasonId {
    match QUICK_SEASONS
        .iter()
        .find(|(entry, _)| *entry == (skin_tone, undertone))
    {
        Some((_, season)) => *season,
        None => FALLBACK_SEASON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn classify(skin: SkinTone, undertone: Undertone, contrast: ContrastLevel) -> SeasonId {
        // Gray eyes have no override entry, so the contrast passes through.
        classify_season(
            skin,
            undertone,
            EyeColor::Gray,
            HairColor::DarkBrown,
            contrast,
        )
        .season
    }

    #[test]
    fn every_matrix_entry() {
        use ContrastLevel::{High, Low, Medium as Mid};
        use SeasonId::*;
        use SkinTone::{Dark, Light, Medium};
        use Undertone::{Cold, Neutral, Warm};

        let expected = [
            ((Light, Warm, Low), PrimaveraClara),
            ((Light, Warm, Mid), PrimaveraCalida),
            ((Light, Warm, High), PrimaveraCalida),
            ((Light, Cold, Low), VeranoSuave),
            ((Light, Cold, Mid), VeranoFrio),
            ((Light, Cold, High), InviernoBrillante),
            ((Light, Neutral, Low), VeranoSuave),
            ((Light, Neutral, Mid), VeranoFrio),
            ((Light, Neutral, High), InviernoBrillante),
            ((Medium, Warm, Low), OtonoSuave),
            ((Medium, Warm, Mid), PrimaveraCalida),
            ((Medium, Warm, High), OtonoProfundo),
            ((Medium, Cold, Low), VeranoSuave),
            ((Medium, Cold, Mid), VeranoFrio),
            ((Medium, Cold, High), InviernoProfundo),
            ((Medium, Neutral, Low), OtonoSuave),
            ((Medium, Neutral, Mid), VeranoFrio),
            ((Medium, Neutral, High), InviernoProfundo),
            ((Dark, Warm, Low), OtonoSuave),
            ((Dark, Warm, Mid), OtonoProfundo),
            ((Dark, Warm, High), OtonoProfundo),
            ((Dark, Cold, Low), InviernoProfundo),
            ((Dark, Cold, Mid), InviernoProfundo),
            ((Dark, Cold, High), InviernoProfundo),
            ((Dark, Neutral, Low), InviernoProfundo),
            ((Dark, Neutral, Mid), InviernoProfundo),
            ((Dark, Neutral, High), InviernoProfundo),
        ];

        for ((skin, undertone, contrast), season) in expected {
            assert_eq!(
                classify(skin, undertone, contrast),
                season,
                "{skin}/{undertone}/{contrast}"
            );
        }
    }

    #[test]
    fn matrix_covers_every_key_once() {
        let keys: HashSet<SeasonKey> = SEASON_MATRIX.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys.len(), 27);
        for &skin in SkinTone::ALL {
            for &undertone in Undertone::ALL {
                for &contrast in ContrastLevel::ALL {
                    assert!(keys.contains(&(skin, undertone, contrast)));
                }
            }
        }
    }

    #[test]
    fn contrast_override_replaces_supplied_level() {
        assert_eq!(
            adjusted_contrast(HairColor::Black, EyeColor::Blue, ContrastLevel::Low),
            ContrastLevel::High
        );
        assert_eq!(
            adjusted_contrast(HairColor::Blonde, EyeColor::Blue, ContrastLevel::High),
            ContrastLevel::Low
        );
        assert_eq!(
            adjusted_contrast(HairColor::Blonde, EyeColor::Green, ContrastLevel::High),
            ContrastLevel::High
        );

        let result = classify_season(
            SkinTone::Light,
            Undertone::Cold,
            EyeColor::Green,
            HairColor::Red,
            ContrastLevel::Low,
        );
        assert_eq!(result.season, SeasonId::InviernoBrillante);
    }

    #[test]
    fn light_warm_blonde_blue_is_primavera_clara() {
        let result = classify_season(
            SkinTone::Light,
            Undertone::Warm,
            EyeColor::Blue,
            HairColor::Blonde,
            ContrastLevel::High,
        );
        assert_eq!(result.season, SeasonId::PrimaveraClara);
        assert_eq!(result.confidence, 85);
        assert_eq!(
            result.reasoning,
            "light skin + warm undertone + low contrast = Primavera Clara"
        );
        assert_eq!(result.season_info.id, SeasonId::PrimaveraClara);
    }

    #[test]
    fn unmatched_key_falls_back() {
        let key = (SkinTone::Dark, Undertone::Warm, ContrastLevel::High);
        assert_eq!(lookup_season(&[], key), SeasonId::VeranoSuave);
        assert_eq!(lookup_season(&SEASON_MATRIX[..3], key), FALLBACK_SEASON);
    }

    #[test]
    fn season_records_are_consistent() {
        for &id in SeasonId::ALL {
            let season = id.season();
            assert_eq!(season.id, id);
            assert!(season.best_colors.len() >= 4);
            assert!(!season.avoid_colors.is_empty());
        }
    }

    #[test]
    fn quick_table_differs_from_matrix_where_documented() {
        assert_eq!(
            quick_season(SkinTone::Light, Undertone::Neutral),
            SeasonId::VeranoSuave
        );
        assert_eq!(
            quick_season(SkinTone::Medium, Undertone::Warm),
            SeasonId::OtonoSuave
        );
        assert_eq!(
            quick_season(SkinTone::Dark, Undertone::Warm),
            SeasonId::OtonoProfundo
        );
    }

    #[test]
    fn season_serializes_with_hex_colors() {
        let value = serde_json::to_value(SeasonId::InviernoProfundo.season()).expect("json");
        assert_eq!(value["id"], "invierno_profundo");
        assert_eq!(value["contrast"], "very_high");
        assert_eq!(value["best_colors"][2], "#ff0000");
    }
}
