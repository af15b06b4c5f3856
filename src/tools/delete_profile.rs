use crate::input::{arguments, required_str};
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
    let obj = arguments(args)?;
    let user_id = required_str(obj, "user_id")?;
    let mut data = store.load()?;

    if data.profiles.shift_remove(user_id).is_none() {
        return Err(ToolError::not_found(user_id));
    }
    let palettes_removed = data
        .palettes
        .shift_remove(user_id)
        .map_or(0, |history| history.len());
    store.save(&data)?;
    tracing::info!(%user_id, palettes_removed, "profile deleted");

    Ok(success_result(
        format!("profile {user_id} deleted"),
        json!({
            "user_id": user_id,
            "deleted": true,
            "palettes_removed": palettes_removed
        }),
    ))
}
