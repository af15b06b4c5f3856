//! Undertone scoring from four physical indicators.
//!
//! Negative totals lean cold, positive totals lean warm. Vein color counts
//! double.

use crate::color::attributes::{JewelryPreference, LipColor, SunReaction, Undertone, VeinColor};
use serde::{Deserialize, Serialize};

const VEIN_WEIGHT: f64 = 2.0;
const COLD_THRESHOLD: f64 = -1.0;
const WARM_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndertoneResult {
    pub undertone: Undertone,
    pub score: f64,
    pub confidence: f64,
    pub analysis: String,
}

pub fn classify_undertone(
    vein_color: VeinColor,
    jewelry_preference: JewelryPreference,
    sun_reaction: SunReaction,
    natural_lip_color: LipColor,
) -> UndertoneResult {
    let score = vein_score(vein_color) * VEIN_WEIGHT
        + jewelry_score(jewelry_preference)
        + sun_score(sun_reaction)
        + lip_score(natural_lip_color);
    let undertone = undertone_for_score(score);

    tracing::debug!(%vein_color, %jewelry_preference, %sun_reaction, %natural_lip_color, score, %undertone, "classified undertone");

    UndertoneResult {
        undertone,
        score,
        confidence: (score.abs() * 20.0).min(100.0),
        analysis: format!("score: {score:.1} - {}", undertone.as_str().to_uppercase()),
    }
}

pub fn undertone_for_score(score: f64) -> Undertone {
    if score <= COLD_THRESHOLD {
        Undertone::Cold
    } else if score >= WARM_THRESHOLD {
        Undertone::Warm
    } else {
        Undertone::Neutral
    }
}

fn vein_score(vein_color: VeinColor) -> f64 {
    match vein_color {
        VeinColor::Blue => -2.0,
        VeinColor::BlueGreen | VeinColor::Purple => -1.0,
        VeinColor::Green | VeinColor::OliveGreen => 2.0,
        VeinColor::Indeterminate => 0.0,
    }
}

fn jewelry_score(jewelry_preference: JewelryPreference) -> f64 {
    match jewelry_preference {
        JewelryPreference::Silver => -1.5,
        JewelryPreference::Gold => 1.5,
        JewelryPreference::Both => 0.0,
    }
}

fn sun_score(sun_reaction: SunReaction) -> f64 {
    match sun_reaction {
        SunReaction::Burns => -1.0,
        SunReaction::TansSlowly => -0.5,
        SunReaction::TansEasily => 1.0,
    }
}

fn lip_score(natural_lip_color: LipColor) -> f64 {
    match natural_lip_color {
        LipColor::Pink => -0.5,
        LipColor::Coral => 0.0,
        LipColor::Peach => 0.5,
        // Never weighted; these lips carry no undertone signal.
        LipColor::RosyBrown | LipColor::NaturalRed => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warm_profile_scores_seven() {
        let result = classify_undertone(
            VeinColor::Green,
            JewelryPreference::Gold,
            SunReaction::TansEasily,
            LipColor::Peach,
        );
        assert_eq!(result.score, 7.0);
        assert_eq!(result.undertone, Undertone::Warm);
        assert_eq!(result.confidence, 100.0);
        assert_eq!(result.analysis, "score: 7.0 - WARM");
    }

    #[test]
    fn cold_profile() {
        let result = classify_undertone(
            VeinColor::Blue,
            JewelryPreference::Silver,
            SunReaction::Burns,
            LipColor::Pink,
        );
        assert_eq!(result.score, -7.0);
        assert_eq!(result.undertone, Undertone::Cold);
    }

    #[test]
    fn minus_one_is_cold() {
        let result = classify_undertone(
            VeinColor::Indeterminate,
            JewelryPreference::Both,
            SunReaction::Burns,
            LipColor::Coral,
        );
        assert_eq!(result.score, -1.0);
        assert_eq!(result.undertone, Undertone::Cold);
        assert_eq!(result.confidence, 20.0);

        let result = classify_undertone(
            VeinColor::Purple,
            JewelryPreference::Gold,
            SunReaction::TansSlowly,
            LipColor::Coral,
        );
        assert_eq!(result.score, -1.0);
        assert_eq!(result.undertone, Undertone::Cold);
    }

    #[test]
    fn plus_one_is_warm() {
        let result = classify_undertone(
            VeinColor::Indeterminate,
            JewelryPreference::Both,
            SunReaction::TansEasily,
            LipColor::Coral,
        );
        assert_eq!(result.score, 1.0);
        assert_eq!(result.undertone, Undertone::Warm);
    }

    #[test]
    fn zero_is_neutral() {
        let result = classify_undertone(
            VeinColor::Indeterminate,
            JewelryPreference::Silver,
            SunReaction::TansEasily,
            LipColor::Peach,
        );
        assert_eq!(result.score, 0.0);
        assert_eq!(result.undertone, Undertone::Neutral);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn thresholds() {
        assert_eq!(undertone_for_score(-0.5), Undertone::Neutral);
        assert_eq!(undertone_for_score(0.5), Undertone::Neutral);
        assert_eq!(undertone_for_score(-1.5), Undertone::Cold);
        assert_eq!(undertone_for_score(1.5), Undertone::Warm);
    }

    #[test]
    fn unweighted_lip_colors_contribute_nothing() {
        for lip in [LipColor::RosyBrown, LipColor::NaturalRed] {
            let with_lip = classify_undertone(
                VeinColor::BlueGreen,
                JewelryPreference::Both,
                SunReaction::TansSlowly,
                lip,
            );
            let with_coral = classify_undertone(
                VeinColor::BlueGreen,
                JewelryPreference::Both,
                SunReaction::TansSlowly,
                LipColor::Coral,
            );
            assert_eq!(with_lip.score, with_coral.score);
        }
    }

    #[test]
    fn every_combination_is_deterministic() {
        for &vein in VeinColor::ALL {
            for &jewelry in JewelryPreference::ALL {
                for &sun in SunReaction::ALL {
                    for &lip in [LipColor::Pink, LipColor::Coral, LipColor::Peach].iter() {
                        let first = classify_undertone(vein, jewelry, sun, lip);
                        let second = classify_undertone(vein, jewelry, sun, lip);
                        assert_eq!(first, second);
                        assert_eq!(first.undertone, undertone_for_score(first.score));
                        assert!((0.0..=100.0).contains(&first.confidence));
                    }
                }
            }
        }
    }
}
