use crate::input::{arguments, required_str};
use crate::mcp::contracts::EXPORT_VERSION;
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
    let user_id = required_str(obj, "user_id")?;
    let data = store.load()?;
    let record = data
        .profiles
        .get(user_id)
        .ok_or_else(|| ToolError::not_found(user_id))?;
    let palettes = data
        .palettes
        .get(user_id)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let season = record.season().season();
    let text = format!(
        "exported {user_id}: {} palette(s), season {}",
        palettes.len(),
        season.name
    );
    Ok(success_result(
        text,
        json!({
            "exported_data": {
                "export_info": {
                    "user_id": user_id,
                    "exported_at": now(),
                    "version": EXPORT_VERSION
                },
                "profile": to_structured(record)?,
                "palettes": to_structured(&palettes)?
            },
            "summary": {
                "profile_created": record.basic_info.created_at,
                "total_palettes": palettes.len(),
                "color_season": season.name
            }
        }),
    ))
}
