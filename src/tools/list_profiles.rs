use crate::input::arguments;
use crate::store::JsonStore;
use crate::tools::{ToolError, success_result};
use serde_json::{Value, json};

pub fn call(store: &JsonStore, args: &Value) -> Value {
    match run(store, args) {
        Ok(result) => result,
        Err(err) => err.into_result(),
    }
}

fn run(store: &JsonStore, args: &Value) -> Result<Value, ToolError> {
    arguments(args)?;
    let data = store.load()?;

    let profiles: Vec<Value> = data
        .profiles
        .iter()
        .map(|(user_id, record)| {
            json!({
                "user_id": user_id,
                "name": record.basic_info.name,
                "created_at": record.basic_info.created_at,
                "skin_tone": record.physical_characteristics.skin_tone,
                "undertone": record.color_analysis.undertone_analysis.undertone,
                "season": record.season().season().name
            })
        })
        .collect();

    let text = if profiles.is_empty() {
        "no profiles stored".to_string()
    } else {
        format!("profiles: {}", profiles.len())
    };
    Ok(success_result(
        text,
        json!({
            "total_profiles": profiles.len(),
            "profiles": profiles
        }),
    ))
}
