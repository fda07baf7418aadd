use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::text::{count_sentences, count_words};

/// The limit triple that bounds one `read_limited` call.
///
/// Each limit is an inclusive "at least" threshold: reading stops once the
/// corresponding count reaches or exceeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum characters (Unicode scalar values). Hard: the result is
    /// truncated to this length.
    pub max_chars: usize,
    /// Maximum words. Soft: can be overshot by up to one line.
    pub max_words: usize,
    /// Maximum sentences. Soft: can be overshot by up to one line.
    pub max_sentences: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_chars: 1000,
            max_words: 200,
            max_sentences: 10,
        }
    }
}

/// Reads a UTF-8 text file from the start, stopping at the first limit hit.
///
/// Lines are appended whole (terminators included) and the character, word,
/// and sentence counts are recomputed over the full buffer after each
/// append, so a check never fires mid-line. Word and sentence limits stop
/// the loop but leave the last line intact; only `max_chars` truncates the
/// result, which can cut into the middle of the last-read line. The
/// truncation runs unconditionally and is a no-op when the buffer is
/// already short enough (including the end-of-file case).
///
/// An empty file yields the empty string. A missing file or invalid UTF-8
/// content is a fatal error with no partial result.
pub fn read_limited(path: &Path, limits: Limits) -> Result<String> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut buffer = String::new();

    loop {
        let bytes_read = reader.read_line(&mut buffer).map_err(|e| {
            // read_line reports decoding failure as InvalidData; everything
            // else is an ordinary read error.
            if e.kind() == std::io::ErrorKind::InvalidData {
                anyhow::anyhow!("File is not valid UTF-8: {}", path.display())
            } else {
                anyhow::Error::new(e).context(format!("Failed to read file: {}", path.display()))
            }
        })?;
        if bytes_read == 0 {
            break;
        }

        // Recomputing over the whole buffer keeps the counts consistent
        // with its content; inputs are small bounded excerpts.
        if buffer.chars().count() >= limits.max_chars
            || count_words(&buffer) >= limits.max_words
            || count_sentences(&buffer) >= limits.max_sentences
        {
            break;
        }
    }

    Ok(truncate_chars(buffer, limits.max_chars))
}

/// Reads a whole UTF-8 text file, for statistics and detection.
pub fn read_full(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Truncates to at most `max_chars` Unicode scalar values.
fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some((byte_index, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_index);
    }
    text
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn generous() -> Limits {
        Limits {
            max_chars: 1000,
            max_words: 1000,
            max_sentences: 1000,
        }
    }

    #[test]
    fn test_stops_at_sentence_limit() {
        let file = temp_file_with("Line one.\nLine two.\nLine three.\n");
        let limits = Limits {
            max_chars: 1000,
            max_words: 1000,
            max_sentences: 2,
        };

        let result = read_limited(file.path(), limits).unwrap();
        assert_eq!(result, "Line one.\nLine two.\n");
    }

    #[test]
    fn test_char_limit_truncates_mid_line() {
        let file = temp_file_with("Hello world");
        let limits = Limits {
            max_chars: 5,
            ..generous()
        };

        let result = read_limited(file.path(), limits).unwrap();
        assert_eq!(result, "Hello");
    }

    #[test]
    fn test_char_limit_counts_scalars_not_bytes() {
        let file = temp_file_with("ééééé tail");
        let limits = Limits {
            max_chars: 5,
            ..generous()
        };

        let result = read_limited(file.path(), limits).unwrap();
        assert_eq!(result, "ééééé");
    }

    #[test]
    fn test_word_limit_is_soft() {
        // The word limit stops reading but never trims the last line
        let file = temp_file_with("one two three four five\nsix seven\n");
        let limits = Limits {
            max_words: 3,
            ..generous()
        };

        let result = read_limited(file.path(), limits).unwrap();
        assert_eq!(result, "one two three four five\n");
    }

    #[test]
    fn test_eof_returns_whole_file() {
        let content = "short file\nwith two lines\n";
        let file = temp_file_with(content);

        let result = read_limited(file.path(), generous()).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_empty_file() {
        let file = temp_file_with("");

        let result = read_limited(file.path(), generous()).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_blank_lines_count_toward_chars() {
        let file = temp_file_with("\n\n\n\n\n");
        let limits = Limits {
            max_chars: 3,
            ..generous()
        };

        let result = read_limited(file.path(), limits).unwrap();
        assert_eq!(result, "\n\n\n");
    }

    #[test]
    fn test_first_line_exceeding_all_limits_still_read_whole() {
        let file = temp_file_with("One. Two. Three. Four.\nnever read\n");
        let limits = Limits {
            max_chars: 10,
            max_words: 2,
            max_sentences: 1,
        };

        // The whole first line is appended before any check, then only
        // the char limit trims it.
        let result = read_limited(file.path(), limits).unwrap();
        assert_eq!(result, "One. Two. ");
    }

    #[test]
    fn test_zero_limits_truncate_to_empty() {
        let file = temp_file_with("hello\nworld\n");
        let limits = Limits {
            max_chars: 0,
            max_words: 0,
            max_sentences: 0,
        };

        let result = read_limited(file.path(), limits).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = read_limited(Path::new("/nonexistent/path/to/file.txt"), generous());
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to open file")
        );
    }

    #[test]
    fn test_plain_read_error_is_not_labeled_as_decode_error() {
        // Opening a directory succeeds on Linux; the first read fails with
        // an ordinary I/O error, which must not be reported as bad UTF-8.
        let dir = tempfile::TempDir::new().unwrap();

        let result = read_limited(dir.path(), generous());
        assert!(result.is_err());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to read file"));
        assert!(!message.contains("UTF-8"));
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x66, 0x6f, 0xff, 0xfe, 0x6f]).unwrap();

        let result = read_limited(file.path(), generous());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_idempotent_across_calls() {
        let file = temp_file_with("First. Second. Third.\nFourth.\n");
        let limits = Limits {
            max_chars: 50,
            max_words: 4,
            max_sentences: 2,
        };

        let first = read_limited(file.path(), limits).unwrap();
        let second = read_limited(file.path(), limits).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_final_newline() {
        let file = temp_file_with("Line one.\nLine two.");
        let limits = Limits {
            max_sentences: 2,
            ..generous()
        };

        let result = read_limited(file.path(), limits).unwrap();
        assert_eq!(result, "Line one.\nLine two.");
    }

    #[test]
    fn test_read_full() {
        let file = temp_file_with("whole content\n");
        assert_eq!(read_full(file.path()).unwrap(), "whole content\n");
    }

    #[test]
    fn test_read_full_missing_file() {
        assert!(read_full(Path::new("/nonexistent/file.txt")).is_err());
    }

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_chars, 1000);
        assert_eq!(limits.max_words, 200);
        assert_eq!(limits.max_sentences, 10);
    }
}
