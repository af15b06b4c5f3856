use crate::input::{arguments, required_str};
use crate::store::JsonStore;
use crate::tools::{ToolError, success_result, to_structured};
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

    let season = record.season().season();
    let text = format!(
        "{} ({user_id}): {} undertone, {}",
        record.basic_info.name, record.color_analysis.undertone_analysis.undertone, season.name
    );
    Ok(success_result(
        text,
        json!({
            "profile": to_structured(record)?,
            "season_info": to_structured(season)?
        }),
    ))
}
