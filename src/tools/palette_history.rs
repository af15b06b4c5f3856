use crate::input::{arguments, optional_count, required_str};
use crate::mcp::contracts::DEFAULT_HISTORY_LIMIT;
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
    let limit = optional_count(obj, "limit", DEFAULT_HISTORY_LIMIT)?;

    let data = store.load()?;
    if !data.profiles.contains_key(user_id) {
        return Err(ToolError::not_found(user_id));
    }
    let history = data
        .palettes
        .get(user_id)
        .map(Vec::as_slice)
        .unwrap_or_default();
    // most recent last, as stored
    let recent = &history[history.len().saturating_sub(limit)..];

    let text = format!(
        "{user_id}: showing {} of {} palettes",
        recent.len(),
        history.len()
    );
    Ok(success_result(
        text,
        json!({
            "user_id": user_id,
            "total_palettes": history.len(),
            "palettes": to_structured(&recent)?
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::errors;
    use crate::tools::{create_profile, generate_palette};
    use tempfile::tempdir;

    fn store_with_palettes(dir: &tempfile::TempDir, count: usize) -> JsonStore {
        let store = JsonStore::new(dir.path().join("profiles.json"));
        let created = create_profile::call(
            &store,
            &json!({
                "user_id": "mia",
                "name": "Mia",
                "skin_tone": "dark",
                "vein_color": "blue",
                "jewelry_preference": "silver",
                "sun_reaction": "burns",
                "eye_color": "brown",
                "hair_color": "black",
                "natural_lip_color": "pink",
                "contrast_level": "high"
            }),
        );
        assert_eq!(created["isError"], false);
        let types = ["makeup", "clothing", "accessories"];
        for palette_type in types.iter().cycle().take(count) {
            let args = json!({"user_id": "mia", "palette_type": palette_type});
            assert_eq!(generate_palette::call(&store, &args)["isError"], false);
        }
        store
    }

    #[test]
    fn returns_most_recent_within_limit() {
        let dir = tempdir().expect("tempdir");
        let store = store_with_palettes(&dir, 3);
        let result = call(&store, &json!({"user_id": "mia", "limit": 2}));
        assert_eq!(result["isError"], false);
        let structured = &result["structuredContent"];
        assert_eq!(structured["total_palettes"], 3);
        let palettes = structured["palettes"].as_array().expect("palettes");
        assert_eq!(palettes.len(), 2);
        assert_eq!(palettes[0]["palette_type"], "clothing");
        assert_eq!(palettes[1]["palette_type"], "accessories");
        assert_eq!(result["content"][0]["text"], "mia: showing 2 of 3 palettes");
    }

    #[test]
    fn default_limit_and_zero_limit() {
        let dir = tempdir().expect("tempdir");
        let store = store_with_palettes(&dir, 1);
        let all = call(&store, &json!({"user_id": "mia"}));
        let palettes = all["structuredContent"]["palettes"].as_array();
        assert_eq!(palettes.map(Vec::len), Some(1));
        let none = call(&store, &json!({"user_id": "mia", "limit": 0}));
        assert_eq!(none["structuredContent"]["palettes"], json!([]));
        assert_eq!(none["structuredContent"]["total_palettes"], 1);
    }

    #[test]
    fn profile_without_palettes_has_empty_history() {
        let dir = tempdir().expect("tempdir");
        let store = store_with_palettes(&dir, 0);
        let result = call(&store, &json!({"user_id": "mia"}));
        assert_eq!(result["structuredContent"]["total_palettes"], 0);
    }

    #[test]
    fn unknown_user_is_not_found() {
        let dir = tempdir().expect("tempdir");
        let store = JsonStore::new(dir.path().join("profiles.json"));
        let result = call(&store, &json!({"user_id": "nobody"}));
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["structuredContent"]["error"]["kind"],
            errors::NOT_FOUND
        );
    }
}
