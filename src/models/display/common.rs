//! Common display utilities and helpers

/// Placeholder for missing values
pub const NOT_AVAILABLE: &str = "N/A";

/// Value or `N/A` when missing or blank
pub fn or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
