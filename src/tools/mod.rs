use crate::color::ColorError;
use crate::input::ArgError;
use crate::mcp::errors;
use crate::store::StoreError;
use serde_json::json;

pub mod analyze_harmony;
pub mod analyze_undertone;
pub mod create_profile;
pub mod delete_profile;
pub mod determine_season;
pub mod export_data;
pub mod generate_palette;
pub mod harmony;
pub mod list_profiles;
pub mod palette_history;
pub mod quick_palette;
pub mod show_profile;

pub fn error_result(
    kind: &'static str,
    message: impl Into<String>,
    source: Option<&str>,
) -> serde_json::Value {
    let message = message.into();
    let mut error = json!({
        "kind": kind,
        "message": message,
    });

    if let Some(source) = source
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("source".to_string(), json!(source));
    }

    json!({
        "content": [{"type": "text", "text": format!("Error: {message}")}],
        "structuredContent": {"error": error},
        "isError": true
    })
}

pub fn success_result(text: impl Into<String>, structured: serde_json::Value) -> serde_json::Value {
    json!({
        "content": [{"type": "text", "text": text.into()}],
        "structuredContent": structured,
        "isError": false
    })
}

pub struct ToolError {
    pub kind: &'static str,
    pub message: String,
    pub source: Option<String>,
}

impl ToolError {
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn not_found(user_id: &str) -> Self {
        Self::new(errors::NOT_FOUND, format!("profile {user_id} not found")).with_source(user_id)
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn into_result(self) -> serde_json::Value {
        error_result(self.kind, self.message, self.source.as_deref())
    }
}

impl From<ArgError> for ToolError {
    fn from(err: ArgError) -> Self {
        Self::new(err.kind, err.message)
    }
}

impl From<ColorError> for ToolError {
    fn from(err: ColorError) -> Self {
        ArgError::from(err).into()
    }
}

impl From<StoreError> for ToolError {
    fn from(err: StoreError) -> Self {
        tracing::error!(%err, "data store failure");
        Self::new(errors::STORAGE_ERROR, err.to_string())
    }
}

pub fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub fn to_structured<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ToolError> {
    serde_json::to_value(value)
        .map_err(|err| ToolError::new(errors::INTERNAL_ERROR, format!("serialize failed: {err}")))
}

fn join_colors(colors: &[crate::color::Color]) -> String {
    colors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
