use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color format: {0:?} (expected 6 hex digits, optional leading #)")]
    InvalidColorFormat(String),
    #[error("at least one base color is required")]
    EmptyInput,
    #[error("unknown harmony scheme: {0}")]
    UnknownScheme(String),
    #[error("unknown palette type: {0}")]
    UnknownPaletteType(String),
}
