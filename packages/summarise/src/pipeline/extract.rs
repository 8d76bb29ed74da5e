//! Main-content extraction from raw markup.

use scraper::{Html, Selector};

use crate::error::ExtractError;

/// Selector strategies tried in priority order; the first whose matched
/// elements carry any text wins. Later entries are never consulted once a
/// candidate is chosen, even if its normalized text turns out too short.
const CONTENT_SELECTORS: &[&str] = &["main", "article", "body"];

/// Minimum normalized length (in characters) for text to count as genuine
/// content rather than boilerplate or an empty page.
pub const MIN_CONTENT_CHARS: usize = 50;

/// Extract and normalize the main textual content of an HTML document.
///
/// Tries a `main` landmark, then `article`, then the document body. The
/// chosen candidate's text is the concatenation across all elements the
/// selector matches. Whitespace runs (newlines and tabs included) collapse
/// to single spaces and the result is trimmed.
///
/// Fails when no candidate has text, or when the normalized text is shorter
/// than [`MIN_CONTENT_CHARS`]. Failure is terminal for the request; no
/// partial content is returned.
pub fn extract(html: &str) -> Result<String, ExtractError> {
    let document = Html::parse_document(html);

    let mut raw = None;
    for selector_str in CONTENT_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            let text: String = document
                .select(&selector)
                .flat_map(|element| element.text())
                .collect();
            if !text.is_empty() {
                raw = Some(text);
                break;
            }
        }
    }
    let raw = raw.ok_or(ExtractError::NoContent)?;

    let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let length = text.chars().count();
    if length == 0 {
        return Err(ExtractError::NoContent);
    }
    if length < MIN_CONTENT_CHARS {
        return Err(ExtractError::TooShort { length });
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILLER: &str = "Filler sentence so the body clears the minimum content length.";

    #[test]
    fn test_main_preferred_over_article_and_body() {
        let html = format!(
            "<html><body>\
             <article>Article text. {FILLER}</article>\
             <main>Main landmark text. {FILLER}</main>\
             <p>Stray body text.</p>\
             </body></html>"
        );

        let text = extract(&html).unwrap();
        assert_eq!(text, format!("Main landmark text. {FILLER}"));
    }

    #[test]
    fn test_article_fallback_when_no_main() {
        let html = format!("<html><body><article>From the article. {FILLER}</article><p>Other.</p></body></html>");

        let text = extract(&html).unwrap();
        assert_eq!(text, format!("From the article. {FILLER}"));
    }

    #[test]
    fn test_body_fallback_when_no_landmarks() {
        let html = format!("<html><body><p>Body only. {FILLER}</p></body></html>");

        let text = extract(&html).unwrap();
        assert_eq!(text, format!("Body only. {FILLER}"));
    }

    #[test]
    fn test_whitespace_normalization() {
        let html = format!("<main>Line one.\n\n\tLine   two. {FILLER}</main>");

        let text = extract(&html).unwrap();
        assert_eq!(text, format!("Line one. Line two. {FILLER}"));
    }

    #[test]
    fn test_short_content_fails() {
        let html = "<html><body><main>Too short.</main></body></html>";

        match extract(html) {
            Err(ExtractError::TooShort { length }) => assert_eq!(length, 10),
            other => panic!("expected TooShort, got {:?}", other),
        }
    }

    #[test]
    fn test_short_main_fails_even_with_long_article() {
        // Candidate selection is by emptiness only; a chosen-but-short
        // candidate is a terminal failure, never a fallback to the next
        // selector.
        let html = format!(
            "<html><body><main>Tiny.</main><article>Long enough article. {FILLER}</article></body></html>"
        );

        assert!(matches!(
            extract(&html),
            Err(ExtractError::TooShort { .. })
        ));
    }

    #[test]
    fn test_empty_document_fails() {
        assert!(matches!(extract(""), Err(ExtractError::NoContent)));
        assert!(matches!(
            extract("<html><body></body></html>"),
            Err(ExtractError::NoContent)
        ));
    }

    #[test]
    fn test_whitespace_only_main_fails() {
        // A whitespace-only main still wins candidate selection, then
        // normalizes to nothing.
        let html = format!("<html><body><main>   </main><article>Real text. {FILLER}</article></body></html>");

        assert!(matches!(extract(&html), Err(ExtractError::NoContent)));
    }

    #[test]
    fn test_minimum_length_boundary() {
        let html_49 = format!("<main>{}</main>", "x".repeat(49));
        assert!(matches!(
            extract(&html_49),
            Err(ExtractError::TooShort { length: 49 })
        ));

        let html_50 = format!("<main>{}</main>", "x".repeat(50));
        assert_eq!(extract(&html_50).unwrap(), "x".repeat(50));
    }

    #[test]
    fn test_multiple_mains_concatenate() {
        let html = format!("<body><main>First part.</main><main>Second part. {FILLER}</main></body>");

        let text = extract(&html).unwrap();
        assert_eq!(text, format!("First part.Second part. {FILLER}"));
    }
}
