/// Lowercases and trims a phrase. Internal whitespace is preserved verbatim.
pub fn normalize_phrase(phrase: &str) -> String {
    phrase.trim().to_lowercase()
}
