// src/extract/normalize.rs
// =============================================================================
// Canonical form for every URL we find on a page.
//
// Two rules, applied in order:
// 1. Drop the query string (everything from the first '?')
// 2. Trim '/' from both ends
//
// Example: "/about/?ref=nav" -> "about"
// =============================================================================

// Normalizes a raw href/src value
//
// Never fails: garbage in gives trimmed garbage out.
// Running it twice gives the same result as running it once.
pub fn normalize(raw: &str) -> String {
    let without_query = match raw.split_once('?') {
        Some((before, _)) => before,
        None => raw,
    };

    without_query.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_query_string() {
        assert_eq!(normalize("/search?q=rust&page=2"), "search");
        assert_eq!(normalize("https://example.com/a?b"), "https://example.com/a");
    }

    #[test]
    fn test_trims_slashes() {
        assert_eq!(normalize("/about/"), "about");
        assert_eq!(normalize("//cdn/x//"), "cdn/x");
        assert_eq!(normalize("https://example.com/"), "https://example.com");
    }

    #[test]
    fn test_only_first_question_mark_matters() {
        assert_eq!(normalize("/a?b?c"), "a");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("/"), "");
        assert_eq!(normalize("?"), "");
        assert_eq!(normalize("?/x/"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "/",
            "///",
            "/about/",
            "/a/?b=/c/",
            "https://example.com/",
            "https://example.com/path/?x=1",
            "img.png?v=3",
            "#top",
            "?only-query",
            "/?/",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
