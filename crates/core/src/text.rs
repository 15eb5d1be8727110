//! Input size limits shared by the AI and speech adapters.

/// Article text sent to the generative model is cut to this many characters.
pub const MAX_AI_INPUT_CHARS: usize = 8_000;

/// The free speech-synthesis tier rejects long inputs; cut to this many characters.
pub const MAX_SPEECH_CHARS: usize = 300;

/// Return the first `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, so the cut never lands inside a multi-byte
/// character (Vietnamese diacritics are common input here).
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// True when the string is empty or contains only whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
