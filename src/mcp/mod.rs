use serde_json::json;

pub mod contracts;
pub mod errors;

pub fn tool_definitions() -> Vec<serde_json::Value> {
    vec![
        json!({
            "name": contracts::TOOL_ANALYZE_UNDERTONE,
            "description": "Score skin undertone (cold, warm or neutral) from vein color, jewelry preference, sun reaction and natural lip color.",
            "inputSchema": contracts::analyze_undertone_schema()
        }),
        json!({
            "name": contracts::TOOL_DETERMINE_SEASON,
            "description": "Determine the seasonal color type from skin tone, undertone, eye and hair color and contrast level.",
            "inputSchema": contracts::determine_season_schema()
        }),
        json!({
            "name": contracts::TOOL_HARMONY,
            "description": "Derive a harmony palette from a base color with lighter and darker variants.",
            "inputSchema": contracts::harmony_schema()
        }),
        json!({
            "name": contracts::TOOL_ANALYZE_HARMONY,
            "description": "Classify how a list of colors relates by hue (analogous, complementary, triadic or complex) with a harmony score.",
            "inputSchema": contracts::analyze_harmony_schema()
        }),
        json!({
            "name": contracts::TOOL_CREATE_PROFILE,
            "description": "Create a beauty profile with a full undertone and season analysis.",
            "inputSchema": contracts::create_profile_schema()
        }),
        json!({
            "name": contracts::TOOL_SHOW_PROFILE,
            "description": "Show a stored profile and its color analysis.",
            "inputSchema": contracts::show_profile_schema()
        }),
        json!({
            "name": contracts::TOOL_LIST_PROFILES,
            "description": "List stored profiles with their undertone and season.",
            "inputSchema": contracts::list_profiles_schema()
        }),
        json!({
            "name": contracts::TOOL_DELETE_PROFILE,
            "description": "Delete a profile and its palette history.",
            "inputSchema": contracts::delete_profile_schema()
        }),
        json!({
            "name": contracts::TOOL_GENERATE_PALETTE,
            "description": "Generate a makeup, clothing or accessory palette from a profile's season and record it in the palette history.",
            "inputSchema": contracts::generate_palette_schema()
        }),
        json!({
            "name": contracts::TOOL_QUICK_PALETTE,
            "description": "Generate a palette from skin tone and undertone alone, without a stored profile.",
            "inputSchema": contracts::quick_palette_schema()
        }),
        json!({
            "name": contracts::TOOL_PALETTE_HISTORY,
            "description": "Show the most recent palettes generated for a profile.",
            "inputSchema": contracts::palette_history_schema()
        }),
        json!({
            "name": contracts::TOOL_EXPORT_DATA,
            "description": "Export a profile together with its palette history.",
            "inputSchema": contracts::export_data_schema()
        }),
    ]
}
