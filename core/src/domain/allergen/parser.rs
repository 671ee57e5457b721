use std::sync::LazyLock;

use regex::Regex;

static INGREDIENT_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;\n]+").expect("delimiter pattern is valid"));

/// Split free-form ingredient text into trimmed, non-empty ingredients.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    INGREDIENT_DELIMITERS
        .split(text)
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .map(str::to_string)
        .collect()
}
