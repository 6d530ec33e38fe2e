// crates/geodata-core/src/phone.rs
use std::fmt::Display;

/// Normalizes a dialing code query to the stored digit-only form.
///
/// Accepts anything displayable so that `"+1"`, `"1"` and `1` are the same
/// query. A single leading `+` is removed; the rest is kept verbatim.
///
/// ```
/// use geodata_core::phone::normalize_phone_code;
///
/// assert_eq!(normalize_phone_code("+49"), "49");
/// assert_eq!(normalize_phone_code(1), "1");
/// assert_eq!(normalize_phone_code("1-684"), "1-684");
/// ```
pub fn normalize_phone_code(code: impl Display) -> String {
    let code = code.to_string();
    match code.strip_prefix('+') {
        Some(rest) => rest.to_string(),
        None => code,
    }
}

/// Renders a stored dialing code for display, e.g. `"49"` -> `"+49"`.
#[inline]
pub fn format_phone_code(stored: &str) -> String {
    format!("+{stored}")
}
