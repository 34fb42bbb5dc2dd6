/// Builds the key used for case-insensitive duplicate detection.
///
/// Surrounding whitespace is trimmed and the result upper-cased, so `" pikachu "` and
/// `"Pikachu"` produce the same key.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Builds the duplicate-detection key for a person's full name.
pub fn normalize_full_name(first_name: &str, last_name: &str) -> String {
    normalize_name(&format!("{} {}", first_name.trim(), last_name.trim()))
}
