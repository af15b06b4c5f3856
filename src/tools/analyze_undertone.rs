use crate::color::classify_undertone;
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
    let result = classify_undertone(
        required_choice(obj, "vein_color")?,
        required_choice(obj, "jewelry_preference")?,
        required_choice(obj, "sun_reaction")?,
        required_choice(obj, "natural_lip_color")?,
    );

    let text = format!(
        "undertone: {} (score {:.1}, confidence {:.0}%)",
        result.undertone, result.score, result.confidence
    );
    Ok(success_result(text, to_structured(&result)?))
}
