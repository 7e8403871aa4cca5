/// Builds a regex pattern matching `phrase` literally, anchored by a word
/// boundary on each side whose edge character is a word character.
///
/// Edges ending in punctuation (e.g. "inc.", "nasdaq:") cannot carry `\b`
/// without requiring a word character to follow, so those edges are left open.
pub fn word_boundary_pattern(phrase: &str) -> String {
    let is_word_char = |c: char| c.is_alphanumeric() || c == '_';

    let leading = if phrase.chars().next().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };

    let trailing = if phrase.chars().last().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };

    format!("{}{}{}", leading, regex::escape(phrase), trailing)
}
