use crate::color::palette::DEFAULT_EVENT_TYPE;
use crate::color::{PaletteType, SkinTone, Undertone, assemble_palette, quick_season};
use crate::input::{arguments, optional_choice, optional_str, required_str};
use crate::tools::{ToolError, now, success_result, to_structured};
use serde_json::{Value, json};

pub fn call(args: &Value) -> Value {
    match run(args) {
        Ok(result) => result,
        Err(err) => err.into_result(),
    }
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let obj = arguments(args)?;
    let palette_type = required_str(obj, "palette_type")?.parse::<PaletteType>()?;
    let event_type = optional_str(obj, "event_type")?.unwrap_or(DEFAULT_EVENT_TYPE);
    let skin_tone = optional_choice(obj, "skin_tone", SkinTone::Medium)?;
    let undertone = optional_choice(obj, "undertone", Undertone::Neutral)?;

    let season_id = quick_season(skin_tone, undertone);
    let season = season_id.season();
    let palette = assemble_palette(season.best_colors, season, palette_type, event_type);

    let text = format!(
        "{palette_type} palette based on {}: {}",
        season.name, season.characteristics
    );
    Ok(success_result(
        text,
        json!({
            "estimated_season": season_id,
            "generated_at": now(),
            "palette": to_structured(&palette)?
        }),
    ))
}
