use std::sync::LazyLock;

use regex::Regex;

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("static pattern"));

/// Parses a quantity typed by the shopper.
///
/// Leading whitespace is skipped and parsing stops at the first non-digit,
/// so `"3 pcs"` reads as 3. Text without a leading integer yields `None`;
/// callers leave the cart untouched in that case.
pub fn parse_quantity_input(raw: &str) -> Option<i64> {
    let captures = LEADING_INTEGER.captures(raw)?;
    captures.get(1)?.as_str().parse::<i64>().ok()
}
