pub const INVALID_INPUT: &str = "invalid_input";
pub const INVALID_COLOR_FORMAT: &str = "invalid_color_format";
pub const EMPTY_INPUT: &str = "empty_input";
pub const UNKNOWN_SCHEME: &str = "unknown_scheme";
pub const UNKNOWN_PALETTE_TYPE: &str = "unknown_palette_type";
pub const NOT_FOUND: &str = "not_found";
pub const ALREADY_EXISTS: &str = "already_exists";
pub const STORAGE_ERROR: &str = "storage_error";
pub const INTERNAL_ERROR: &str = "internal_error";
