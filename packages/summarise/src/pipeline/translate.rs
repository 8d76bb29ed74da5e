//! Word-by-word dictionary translation.

use std::collections::HashMap;

/// The English→Urdu lookup table shipped with the service. Keys are
/// lowercase alphabetic-only tokens.
const URDU_TABLE: &[(&str, &str)] = &[
    ("blog", "بلاگ"),
    ("post", "پوسٹ"),
    ("summary", "خلاصہ"),
    ("this", "یہ"),
    ("is", "ہے"),
    ("a", "ایک"),
    ("of", "کا"),
    ("the", "دی"),
    ("and", "اور"),
    ("article", "مضمون"),
    ("content", "مواد"),
    ("main", "مرکزی"),
    ("text", "متن"),
    ("about", "کے بارے میں"),
    ("for", "کے لئے"),
    ("in", "میں"),
    ("to", "کو"),
    ("with", "کے ساتھ"),
    ("on", "پر"),
    ("by", "کی طرف سے"),
    ("you", "آپ"),
    ("it", "یہ"),
    ("are", "ہیں"),
    ("we", "ہم"),
];

/// Token-wise translator over an immutable lookup table.
///
/// Built once at startup and injected into the pipeline; safe to share
/// across concurrent requests because the table is never mutated after
/// construction.
pub struct Translator {
    table: HashMap<String, String>,
}

impl Translator {
    /// Build a translator from arbitrary entries.
    ///
    /// Keys are lowercased. Entries whose key is empty are dropped, so an
    /// empty lookup key can never match.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = entries
            .into_iter()
            .map(|(key, value)| (key.into().to_lowercase(), value.into()))
            .filter(|(key, _)| !key.is_empty())
            .collect();
        Self { table }
    }

    /// The built-in English→Urdu table.
    pub fn builtin() -> Self {
        Self::new(URDU_TABLE.iter().copied())
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Translate `text` word by word.
    ///
    /// The text splits into alternating word/whitespace segments and
    /// whitespace runs pass through verbatim, so reconstruction is exact
    /// outside of substituted words. A word segment whose lookup key (the
    /// segment lowercased, stripped to ASCII letters) is in the table is
    /// replaced wholesale by the table value, punctuation included; any
    /// other segment passes through untouched.
    ///
    /// Matching a token like `"Blog,"` therefore drops its trailing comma.
    /// That is the historical observable behavior of this service and is
    /// kept intact rather than corrected.
    pub fn translate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());

        for segment in segments(text) {
            if segment.starts_with(char::is_whitespace) {
                out.push_str(segment);
                continue;
            }

            let key: String = segment
                .to_lowercase()
                .chars()
                .filter(char::is_ascii_alphabetic)
                .collect();

            if !key.is_empty() {
                if let Some(replacement) = self.table.get(&key) {
                    out.push_str(replacement);
                    continue;
                }
            }
            out.push_str(segment);
        }

        out
    }
}

/// Split into maximal runs of whitespace / non-whitespace, preserving every
/// character of the input.
fn segments(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let first_is_ws = rest.starts_with(char::is_whitespace);
        let end = rest
            .find(|c: char| c.is_whitespace() != first_is_ws)
            .unwrap_or(rest.len());
        let (segment, tail) = rest.split_at(end);
        rest = tail;
        Some(segment)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution_preserves_word_order() {
        let translator = Translator::builtin();

        assert_eq!(
            translator.translate("This is a blog post"),
            "یہ ہے ایک بلاگ پوسٹ"
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let translator = Translator::builtin();

        assert_eq!(translator.translate("BLOG"), "بلاگ");
        assert_eq!(translator.translate("Blog"), "بلاگ");
    }

    #[test]
    fn test_matched_token_loses_punctuation() {
        // The whole segment is replaced, so a matched word's trailing
        // punctuation vanishes with it.
        let translator = Translator::builtin();

        assert_eq!(translator.translate("blog,"), "بلاگ");
    }

    #[test]
    fn test_unmatched_text_round_trips_exactly() {
        let translator = Translator::builtin();
        let text = "Rust   compilers\t\tnever   blink!\n";

        assert_eq!(translator.translate(text), text);
    }

    #[test]
    fn test_unmatched_tokens_keep_punctuation_and_case() {
        let translator = Translator::builtin();

        assert_eq!(
            translator.translate("Hello, World!"),
            "Hello, World!"
        );
    }

    #[test]
    fn test_whitespace_runs_survive_around_matches() {
        let translator = Translator::builtin();

        assert_eq!(translator.translate("this   is"), "یہ   ہے");
    }

    #[test]
    fn test_numeric_and_punctuation_tokens_never_match() {
        // Purely numeric or punctuation tokens clean to an empty key, which
        // must never hit the table.
        let translator = Translator::new([("", "SHOULD-NEVER-APPEAR"), ("is", "ہے")]);

        assert_eq!(translator.translate("123 ... 456"), "123 ... 456");
        assert_eq!(translator.translate("is"), "ہے");
        assert_eq!(translator.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let translator = Translator::builtin();

        assert_eq!(translator.translate(""), "");
    }

    #[test]
    fn test_builtin_table_size() {
        assert_eq!(Translator::builtin().len(), 24);
    }

    #[test]
    fn test_segments_cover_input() {
        let text = " leading and trailing  ";
        let rebuilt: String = segments(text).collect();

        assert_eq!(rebuilt, text);
    }
}
