use crate::input::{arguments, optional_str, required_choice, required_str};
use crate::mcp::errors;
use crate::profile::{NewProfile, ProfileRecord};
use crate::store::JsonStore;
use crate::tools::{ToolError, now, success_result, to_structured};
use serde_json::{Value, json};

pub fn call(store: &JsonStore, args: &Value) -> Value {
    match run(store, args) {
        Ok(result) => result,
        Err(err) => err.into_result(),
    }
}

fn run(store: &JsonStore, args: &Value) -> Result<Value, ToolError> {
    let obj = arguments(args)?;
    let input = NewProfile {
        user_id: required_str(obj, "user_id")?.to_string(),
        name: required_str(obj, "name")?.to_string(),
        skin_tone: required_choice(obj, "skin_tone")?,
        vein_color: required_choice(obj, "vein_color")?,
        jewelry_preference: required_choice(obj, "jewelry_preference")?,
        sun_reaction: required_choice(obj, "sun_reaction")?,
        eye_color: required_choice(obj, "eye_color")?,
        hair_color: required_choice(obj, "hair_color")?,
        natural_lip_color: required_choice(obj, "natural_lip_color")?,
        contrast_level: required_choice(obj, "contrast_level")?,
        hair_type: optional_str(obj, "hair_type")?.map(str::to_string),
        style_preference: optional_str(obj, "style_preference")?.map(str::to_string),
    };

    let mut data = store.load()?;
    if data.profiles.contains_key(&input.user_id) {
        return Err(ToolError::new(
            errors::ALREADY_EXISTS,
            format!("profile {} already exists", input.user_id),
        ));
    }

    let user_id = input.user_id.clone();
    let record = ProfileRecord::analyze(input, now());
    let undertone = &record.color_analysis.undertone_analysis;
    let season = record.season().season();
    let summary = json!({
        "undertone": undertone.undertone,
        "undertone_confidence": undertone.confidence,
        "season": record.season(),
        "season_name": season.name,
        "season_characteristics": season.characteristics,
        "reasoning": record.color_analysis.season_analysis.reasoning
    });
    let text = format!(
        "profile created for {}: {} undertone, {}",
        record.basic_info.name, undertone.undertone, season.name
    );
    let structured = json!({
        "profile": to_structured(&record)?,
        "summary": summary
    });

    data.profiles.insert(user_id.clone(), record);
    store.save(&data)?;
    tracing::info!(%user_id, "profile created");

    Ok(success_result(text, structured))
}
