use crate::color::attributes::WireEnum;
use crate::color::{Color, ColorError};
use crate::mcp::contracts::MAX_BASE_COLORS;
use crate::mcp::errors;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone)]
pub struct ArgError {
    pub kind: &'static str,
    pub message: String,
}

impl ArgError {
    fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(errors::INVALID_INPUT, message)
    }
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ArgError {}

pub fn arguments(args: &Value) -> Result<&Map<String, Value>, ArgError> {
    args.as_object()
        .ok_or_else(|| ArgError::invalid_input("arguments must be an object"))
}

pub fn required_str<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a str, ArgError> {
    optional_str(obj, field)?.ok_or_else(|| ArgError::invalid_input(format!("{field} is required")))
}

pub fn optional_str<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
) -> Result<Option<&'a str>, ArgError> {
    let Some(value) = obj.get(field) else {
        return Ok(None);
    };
    let Some(value) = value.as_str() else {
        return Err(ArgError::invalid_input(format!("{field} must be a string")));
    };
    if value.trim().is_empty() {
        return Err(ArgError::invalid_input(format!(
            "{field} must not be empty"
        )));
    }
    Ok(Some(value))
}

pub fn required_choice<T: WireEnum>(obj: &Map<String, Value>, field: &str) -> Result<T, ArgError> {
    let value = required_str(obj, field)?;
    parse_choice(field, value)
}

pub fn optional_choice<T: WireEnum>(
    obj: &Map<String, Value>,
    field: &str,
    default: T,
) -> Result<T, ArgError> {
    match optional_str(obj, field)? {
        Some(value) => parse_choice(field, value),
        None => Ok(default),
    }
}

fn parse_choice<T: WireEnum>(field: &str, value: &str) -> Result<T, ArgError> {
    T::from_wire(value).ok_or_else(|| {
        ArgError::invalid_input(format!(
            "{field} must be one of {}, got {value}",
            T::NAMES.join(", ")
        ))
    })
}

/// Reads an optional non-negative integer, falling back to `default`.
pub fn optional_count(
    obj: &Map<String, Value>,
    field: &str,
    default: usize,
) -> Result<usize, ArgError> {
    let Some(value) = obj.get(field) else {
        return Ok(default);
    };
    value
        .as_u64()
        .and_then(|count| usize::try_from(count).ok())
        .ok_or_else(|| {
            ArgError::invalid_input(format!("{field} must be a non-negative integer"))
        })
}

/// Reads an array of hex strings, enforcing the length limit. Parsing is
/// left to the caller.
pub fn hex_list<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<Vec<&'a str>, ArgError> {
    let Some(value) = obj.get(field) else {
        return Err(ArgError::invalid_input(format!("{field} is required")));
    };
    let not_strings = || ArgError::invalid_input(format!("{field} must be an array of strings"));
    let items = value.as_array().ok_or_else(not_strings)?;
    if items.len() > MAX_BASE_COLORS {
        return Err(ArgError::invalid_input(format!(
            "{field} exceeds limit: {} colors (max {MAX_BASE_COLORS})",
            items.len()
        )));
    }

    items
        .iter()
        .map(|item| item.as_str().ok_or_else(not_strings))
        .collect()
}

/// Parses `base_colors`. An empty array is accepted here; callers decide
/// whether empty input is an error.
pub fn base_colors(obj: &Map<String, Value>) -> Result<Vec<Color>, ArgError> {
    hex_list(obj, "base_colors")?
        .into_iter()
        .map(|hex| Color::parse(hex).map_err(ArgError::from))
        .collect()
}

impl From<ColorError> for ArgError {
    fn from(err: ColorError) -> Self {
        let kind = match err {
            ColorError::InvalidColorFormat(_) => errors::INVALID_COLOR_FORMAT,
            ColorError::EmptyInput => errors::EMPTY_INPUT,
            ColorError::UnknownScheme(_) => errors::UNKNOWN_SCHEME,
            ColorError::UnknownPaletteType(_) => errors::UNKNOWN_PALETTE_TYPE,
        };
        Self::new(kind, err.to_string())
    }
}
