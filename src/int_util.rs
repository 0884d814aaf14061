//! Integer-literal parsing shared by the parser, encoder and executor.
//!
//! Accepts decimal, negative decimal, and `0x…` / `-0x…` hexadecimal forms, matching the
//! literal syntax spec.md allows in both the `.data` section and instruction operands.

/// Parses a single integer literal. Returns `None` if `text` is not a recognized form.
pub fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();

    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return i64::from_str_radix(hex, 16).ok();
    }

    if let Some(hex) = text
        .strip_prefix("-0x")
        .or_else(|| text.strip_prefix("-0X"))
    {
        return i64::from_str_radix(hex, 16).ok().map(|v| -v);
    }

    text.parse::<i64>().ok()
}
