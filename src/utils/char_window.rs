/// Returns the byte range spanning `radius` characters before `start` and
/// `radius` characters after `end`, clamped to the bounds of `text`.
///
/// `start` and `end` must lie on character boundaries (as regex match offsets do).
/// Counting is done in characters rather than bytes so that the window never
/// splits a multi-byte character.
pub fn char_window(text: &str, start: usize, end: usize, radius: usize) -> (usize, usize) {
    let window_start = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(idx, _)| idx);

    let window_end = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(idx, _)| end + idx);

    (window_start, window_end)
}
