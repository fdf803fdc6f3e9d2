//! Fixed-size character chunking.

/// Split `text` into contiguous, non-overlapping windows of at most
/// `max_chars` characters; the final window may be shorter.
///
/// Boundaries are character counts, not token or sentence boundaries, so a
/// cut may fall mid-word. Cuts always land on UTF-8 character boundaries.
/// Concatenating the returned chunks in order reconstructs `text` exactly;
/// empty input produces no chunks.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    debug_assert!(max_chars > 0, "chunk size must be at least one character");

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_a_single_chunk() {
        let chunks = split_chunks("hello world", 1024);
        assert_eq!(chunks, vec!["hello world"]);
    }

    #[test]
    fn empty_input_has_no_chunks() {
        assert!(split_chunks("", 1024).is_empty());
    }

    #[test]
    fn chunk_count_is_ceil_of_length_over_limit() {
        for (len, limit, expected) in [
            (10usize, 4usize, 3usize),
            (12, 4, 3),
            (13, 4, 4),
            (1, 1, 1),
            (1024, 1024, 1),
            (1025, 1024, 2),
        ] {
            let text = "x".repeat(len);
            let chunks = split_chunks(&text, limit);
            assert_eq!(chunks.len(), expected, "len={len} limit={limit}");
        }
    }

    #[test]
    fn concatenation_reconstructs_input() {
        let text = "The quick brown fox jumps over the lazy dog";
        let chunks = split_chunks(text, 7);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn all_chunks_but_last_are_full() {
        let text = "abcdefghij";
        let chunks = split_chunks(text, 3);
        assert_eq!(chunks, vec!["abc", "def", "ghi", "j"]);
    }

    #[test]
    fn exact_multiple_has_no_short_tail() {
        let chunks = split_chunks("abcdef", 3);
        assert_eq!(chunks, vec!["abc", "def"]);
    }

    #[test]
    fn boundaries_respect_multibyte_characters() {
        // Five two-byte characters with a limit of two.
        let text = "ééééé";
        let chunks = split_chunks(text, 2);
        assert_eq!(chunks, vec!["éé", "éé", "é"]);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn cut_may_fall_mid_word() {
        let chunks = split_chunks("hello world", 8);
        assert_eq!(chunks, vec!["hello wo", "rld"]);
    }
}
