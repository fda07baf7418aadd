//! Word and sentence counting heuristics.
//!
//! These counters deliberately stay simple: words are whitespace-separated
//! fragments, sentences are fragments between terminator runs. There is no
//! handling of abbreviations, decimal numbers, or quotations. The bounded
//! reader and the file statistics report both depend on these exact rules.

/// Characters that end a sentence for counting purposes.
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', '…'];

/// Counts whitespace-separated words.
///
/// Leading and trailing whitespace never affect the count; runs of
/// whitespace count as a single separator. Empty or all-whitespace input
/// yields 0.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Counts sentences by splitting on runs of `.`, `!`, `?` and `…`.
///
/// Fragments that are empty or whitespace-only after splitting are not
/// counted, so punctuation-only input yields 0.
pub fn count_sentences(text: &str) -> usize {
    text.trim()
        .split(SENTENCE_TERMINATORS)
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}

/// Character, word, and sentence counts for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    /// Unicode scalar values, not bytes.
    pub chars: usize,
    pub words: usize,
    pub sentences: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            words: count_words(text),
            sentences: count_sentences(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_empty() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("\t\n"), 0);
    }

    #[test]
    fn test_count_words_basic() {
        assert_eq!(count_words("a b  c"), 3);
        assert_eq!(count_words("hello"), 1);
    }

    #[test]
    fn test_count_words_surrounding_whitespace_ignored() {
        for text in ["one two three", "  one two three", "one two three \n", "\t one two three \t"] {
            assert_eq!(count_words(text), count_words(text.trim()));
            assert_eq!(count_words(text), 3);
        }
    }

    #[test]
    fn test_count_words_unicode_whitespace() {
        // U+00A0 no-break space separates words under Unicode rules
        assert_eq!(count_words("a\u{a0}b"), 2);
    }

    #[test]
    fn test_count_sentences_basic() {
        assert_eq!(count_sentences("Hello. How are you?"), 2);
        assert_eq!(count_sentences("One! Two? Three."), 3);
    }

    #[test]
    fn test_count_sentences_empty() {
        assert_eq!(count_sentences(""), 0);
        assert_eq!(count_sentences("   "), 0);
    }

    #[test]
    fn test_count_sentences_punctuation_only() {
        assert_eq!(count_sentences("..."), 0);
        assert_eq!(count_sentences("?! ?!"), 0);
    }

    #[test]
    fn test_count_sentences_terminator_runs_collapse() {
        // A run of terminators ends one sentence, not several
        assert_eq!(count_sentences("Wait... what?!"), 2);
    }

    #[test]
    fn test_count_sentences_ellipsis_character() {
        assert_eq!(count_sentences("Wait… what"), 2);
    }

    #[test]
    fn test_count_sentences_no_terminator() {
        // A trailing fragment without a terminator still counts
        assert_eq!(count_sentences("no punctuation here"), 1);
    }

    #[test]
    fn test_text_stats() {
        let stats = TextStats::of("Hello. How are you?");
        assert_eq!(stats.chars, 19);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.sentences, 2);
    }

    #[test]
    fn test_text_stats_chars_count_scalars() {
        let stats = TextStats::of("héllo…");
        assert_eq!(stats.chars, 6);
    }
}
