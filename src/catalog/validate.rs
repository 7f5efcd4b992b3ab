//! Input validation helpers

/// True if `s` contains at least one Unicode control character
/// (general category Cc). The empty string contains none.
pub fn has_control_char(s: &str) -> bool {
    s.chars().any(char::is_control)
}
