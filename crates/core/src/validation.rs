//! Text field validation shared by every entity DTO.
//!
//! All user-facing text columns (`name`, `company_name`, `place`, `status`)
//! follow the same rules: surrounding whitespace is trimmed, the result must
//! not be empty, and it must fit the `VARCHAR(255)` column.

/// Maximum length (in characters) of any text column.
pub const MAX_TEXT_LENGTH: usize = 255;

/// Trim and validate a text value, returning the cleaned string.
pub fn clean_text(field: &str, value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} must not be blank"));
    }
    let length = trimmed.chars().count();
    if length > MAX_TEXT_LENGTH {
        return Err(format!(
            "{field} must be at most {MAX_TEXT_LENGTH} characters (got {length})"
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate a field that must be present.
pub fn clean_required(field: &str, value: Option<&str>) -> Result<String, String> {
    match value {
        Some(value) => clean_text(field, value),
        None => Err(format!("{field} is required")),
    }
}

/// Validate a field of a partial update. Absent fields stay absent.
pub fn clean_optional(field: &str, value: Option<&str>) -> Result<Option<String>, String> {
    value.map(|v| clean_text(field, v)).transpose()
}
