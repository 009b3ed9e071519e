use std::sync::LazyLock;

use regex::Regex;

use crate::models::IngredientLine;

/// Leading `N.` marker of an enumerated line
static ENUMERATED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.").expect("enumerated marker pattern is valid"));

/// `N. name (quantity)` with the quantity closing the line.
/// Neither part may contain parentheses, so nested or unbalanced shapes fall through.
static STRUCTURED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+\.\s*([^()\s][^()]*?)\s*\(([^()]+)\)\s*$")
        .expect("structured line pattern is valid")
});

/// Parse a generated reply into ingredient lines, in source order.
///
/// Only enumerated lines (`1.`, `2.`, ...) are considered; headers, commentary
/// and blank lines are dropped. Each kept line goes through
/// [`try_structured_match`] and, if that fails, [`fallback_split`]. Never fails:
/// a malformed line comes back with an empty name or the "not specified"
/// quantity and is left for the caller to judge.
pub fn produce(text: &str) -> Vec<IngredientLine> {
    let lines: Vec<IngredientLine> = text
        .lines()
        .map(str::trim)
        .filter(|line| is_enumerated(line))
        .map(|line| try_structured_match(line).unwrap_or_else(|| fallback_split(line)))
        .collect();

    tracing::debug!(count = lines.len(), "parsed ingredient lines");
    lines
}

pub fn is_enumerated(line: &str) -> bool {
    ENUMERATED_MARKER.is_match(line)
}

/// Primary extraction: `N. name (quantity)` with the quantity at the end of the line
pub fn try_structured_match(line: &str) -> Option<IngredientLine> {
    let caps = STRUCTURED_LINE.captures(line)?;
    let name = caps.get(1).map_or("", |m| m.as_str().trim());
    let quantity = caps.get(2).map_or("", |m| m.as_str().trim());

    Some(IngredientLine::new(name, quantity))
}

/// Fallback extraction: split on the first `(`
pub fn fallback_split(line: &str) -> IngredientLine {
    match line.trim().split_once('(') {
        Some((before, after)) => {
            let after = after.trim();
            let quantity = after.strip_suffix(')').unwrap_or(after).trim();
            IngredientLine::new(strip_marker(before), quantity)
        }
        None => IngredientLine::unquantified(strip_marker(line)),
    }
}

fn strip_marker(text: &str) -> String {
    ENUMERATED_MARKER.replace(text, "").trim().to_string()
}
