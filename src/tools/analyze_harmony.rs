use crate::color::{analyze_harmony, hex_to_hsl};
use crate::input::{arguments, hex_list};
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
    let colors = hex_list(obj, "colors")?
        .into_iter()
        .map(hex_to_hsl)
        .collect::<Result<Vec<_>, _>>()?;
    let analysis = analyze_harmony(&colors);

    let text = match (analysis.harmony_type, analysis.average_hue_difference) {
        (Some(harmony_type), Some(average)) => format!(
            "{harmony_type} harmony, score {} (average hue difference {average} degrees)",
            analysis.harmony_score
        ),
        _ => format!("score {}: {}", analysis.harmony_score, analysis.analysis),
    };
    Ok(success_result(text, to_structured(&analysis)?))
}
