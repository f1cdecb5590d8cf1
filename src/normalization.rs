/// Punctuation used by the `XX.XXX.XXX/XXXX-XX` mask. Removed wherever it appears.
pub const FORMATTING_CHARACTERS: &[char] = &['.', '/', '-'];

/// Strips the mask punctuation and the surrounding whitespace from a raw identifier.
///
/// Punctuation is removed anywhere in the string, not only at the mask positions, so
/// `"1.2/3-4"` becomes `"1234"`. Whitespace is trimmed after the punctuation is gone,
/// which keeps the function idempotent even when a separator hides leading or trailing
/// whitespace (`"- 1"` becomes `"1"`).
///
/// The result is only a candidate: it can have any length or content.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !FORMATTING_CHARACTERS.contains(c))
        .collect();
    stripped.trim().to_string()
}
