/// Canonical form used to compare ingredient and inventory names.
///
/// Trims, lowercases and collapses every whitespace run into a single space.
/// Idempotent: `normalize_name(&normalize_name(s)) == normalize_name(s)`.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
