use crate::color::classify_season;
use crate::input::{arguments, required_choice};
use crate::tools::{ToolError, success_result, to_structured};
use serde_json::Value;

pub fn call(args: &Value) -> Value {
    match run(args) {
        Ok(result) => result,
        Err(err) => err.into_result(),
    }
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let obj = arguments(args)?;
    let classification = classify_season(
        required_choice(obj, "skin_tone")?,
        required_choice(obj, "undertone")?,
        required_choice(obj, "eye_color")?,
        required_choice(obj, "hair_color")?,
        required_choice(obj, "contrast_level")?,
    );

    let text = format!(
        "season: {} (confidence {}%)\n{}",
        classification.season_info.name, classification.confidence, classification.reasoning
    );
    Ok(success_result(text, to_structured(&classification)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dark_cold_high_is_invierno_profundo() {
        let result = call(&json!({
            "skin_tone": "dark",
            "undertone": "cold",
            "eye_color": "brown",
            "hair_color": "dark_brown",
            "contrast_level": "high"
        }));
        assert_eq!(result["isError"], false);
        let structured = &result["structuredContent"];
        assert_eq!(structured["season"], "invierno_profundo");
        assert_eq!(structured["season_info"]["name"], "Invierno Profundo");
        assert_eq!(structured["confidence"], 85);
    }

    #[test]
    fn rejects_unknown_undertone() {
        let result = call(&json!({
            "skin_tone": "dark",
            "undertone": "lukewarm",
            "eye_color": "brown",
            "hair_color": "dark_brown",
            "contrast_level": "high"
        }));
        assert_eq!(result["isError"], true);
    }
}
