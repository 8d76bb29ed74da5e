//! Extractive summaries via leading-sentence selection.

use regex::Regex;

/// Number of leading sentences a summary keeps by default.
pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Select the first `max_sentences` sentences of `text` as an extractive
/// summary.
///
/// A sentence is a maximal run of non-terminal characters followed by one
/// or more terminal marks (`.`, `!`, `?`), scanned greedily left to right
/// without overlap. Spans are trimmed and joined with single spaces.
///
/// Text with no terminal punctuation yields an empty summary; that is a
/// valid result, not an error, and callers decide whether to accept it.
///
/// Segmentation is purely syntactic. Abbreviations, decimal numbers, and
/// quoted punctuation are not special-cased; this is a documented
/// limitation, not a defect.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let sentence = Regex::new(r"[^.!?]+[.!?]+").unwrap();

    sentence
        .find_iter(text)
        .take(max_sentences)
        .map(|span| span.as_str().trim())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_three_of_many() {
        let text = "One is here. Two follows! Three asks? Four trails. Five ends.";

        assert_eq!(
            summarize(text, 3),
            "One is here. Two follows! Three asks?"
        );
    }

    #[test]
    fn test_no_terminal_marks_yields_empty() {
        assert_eq!(summarize("no sentence boundaries anywhere in this text", 3), "");
    }

    #[test]
    fn test_fewer_sentences_than_limit() {
        assert_eq!(summarize("Only one sentence.", 3), "Only one sentence.");
    }

    #[test]
    fn test_max_sentences_respected() {
        let text = "First. Second. Third.";

        assert_eq!(summarize(text, 1), "First.");
        assert_eq!(summarize(text, 2), "First. Second.");
    }

    #[test]
    fn test_trailing_fragment_dropped() {
        // Text after the last terminal mark has no boundary and never forms
        // a span.
        assert_eq!(summarize("Complete sentence. dangling tail", 3), "Complete sentence.");
    }

    #[test]
    fn test_repeated_terminal_marks_stay_with_span() {
        assert_eq!(summarize("Wait... Really?! Yes.", 2), "Wait... Really?!");
    }

    #[test]
    fn test_zero_limit() {
        assert_eq!(summarize("Anything. At all.", 0), "");
    }
}
