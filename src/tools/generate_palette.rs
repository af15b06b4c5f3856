use crate::color::PaletteType;
use crate::color::assemble_palette;
use crate::color::palette::DEFAULT_EVENT_TYPE;
use crate::input::{arguments, optional_str, required_str};
use crate::profile::PaletteRecord;
use crate::store::JsonStore;
use crate::tools::{ToolError, join_colors, now, success_result, to_structured};
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
    let palette_type = required_str(obj, "palette_type")?.parse::<PaletteType>()?;
    let event_type = optional_str(obj, "event_type")?.unwrap_or(DEFAULT_EVENT_TYPE);

    let mut data = store.load()?;
    let record = data
        .profiles
        .get(user_id)
        .ok_or_else(|| ToolError::not_found(user_id))?;

    let season = record.season().season();
    let palette = assemble_palette(season.best_colors, season, palette_type, event_type);
    let entry = PaletteRecord {
        user_id: user_id.to_string(),
        generated_at: now(),
        palette,
    };

    let text = format!(
        "{palette_type} palette for {} ({event_type}), harmony: {}",
        season.name,
        join_colors(&entry.palette.harmony_colors)
    );
    let structured = json!({ "palette": to_structured(&entry)? });

    data.palettes
        .entry(user_id.to_string())
        .or_default()
        .push(entry);
    store.save(&data)?;
    tracing::info!(%user_id, %palette_type, event_type, "palette generated");

    Ok(success_result(text, structured))
}
