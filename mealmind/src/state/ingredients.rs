/// Split a free-text ingredient query into normalized pantry entries.
///
/// Tokens are comma separated, trimmed, and lower-cased. Blank tokens are
/// dropped since the backend ignores them anyway.
pub fn pantry_tokens(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}
