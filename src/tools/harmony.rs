use crate::color::{HarmonyScheme, generate_harmony};
use crate::input::{arguments, base_colors, optional_str};
use crate::tools::{ToolError, join_colors, success_result};
use serde_json::{Value, json};

pub fn call(args: &Value) -> Value {
    match run(args) {
        Ok(result) => result,
        Err(err) => err.into_result(),
    }
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let obj = arguments(args)?;
    let colors = base_colors(obj)?;
    let scheme = match optional_str(obj, "scheme")? {
        Some(value) => value.parse::<HarmonyScheme>()?,
        None => HarmonyScheme::Complementary,
    };
    let palette = generate_harmony(&colors, scheme)?;

    let text = format!("{scheme}: {}", join_colors(&palette));
    Ok(success_result(
        text,
        json!({
            "scheme": scheme,
            "seed": colors.first(),
            "colors": palette
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::errors;

    #[test]
    fn complementary_by_default() {
        let result = call(&json!({"base_colors": ["#FF0000"]}));
        assert_eq!(result["isError"], false);
        let structured = &result["structuredContent"];
        assert_eq!(structured["scheme"], "complementary");
        assert_eq!(structured["seed"], "#ff0000");
        let expected = [
            "#ff0000", "#ff6666", "#990000", "#00ffff", "#66ffff", "#009999",
        ];
        assert_eq!(structured["colors"], json!(expected));
    }

    #[test]
    fn empty_base_colors() {
        let result = call(&json!({"base_colors": [], "scheme": "triadic"}));
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["structuredContent"]["error"]["kind"],
            errors::EMPTY_INPUT
        );
    }

    #[test]
    fn malformed_color() {
        let result = call(&json!({"base_colors": ["red"]}));
        assert_eq!(
            result["structuredContent"]["error"]["kind"],
            errors::INVALID_COLOR_FORMAT
        );
    }

    #[test]
    fn unknown_scheme() {
        let result = call(&json!({"base_colors": ["#ff0000"], "scheme": "tetradic"}));
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["structuredContent"]["error"]["kind"],
            errors::UNKNOWN_SCHEME
        );
    }
}
