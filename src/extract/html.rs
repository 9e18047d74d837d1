// src/extract/html.rs
// =============================================================================
// This module turns an HTML page into a flat stream of attributes.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Is built on html5ever (Mozilla's HTML parser)
// - Decodes entities like &amp; inside attribute values for us
//
// We don't care which tag an attribute came from. <a href>, <link href>,
// <img src> and <script src> all end up in the same list, in document order.
// The classifier decides what each one means.
// =============================================================================

use scraper::Html;

// A single key="value" pair found on some element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

// Extracts every attribute from every element of a page
//
// Parameters:
//   body: raw response bytes (invalid UTF-8 is replaced, not rejected)
//
// Returns: Vec<Attribute> in document order
//
// Example:
//   body = "<a href='/docs'>Docs</a><img src='/logo.png'>"
//   result = [href=/docs, src=/logo.png]
pub fn tokenize_attributes(body: &[u8]) -> Vec<Attribute> {
    let html = String::from_utf8_lossy(body);
    let document = Html::parse_document(&html);

    // descendants() walks the tree depth-first, which is document order
    document
        .root_element()
        .descendants()
        .filter_map(|node| node.value().as_element())
        .flat_map(|element| {
            element
                .attrs()
                .map(|(key, value)| Attribute::new(key, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_fake_page() {
        let page = r#"
            <html>
            <a href="http://someurl.com">link</a>
            <a href="http://someurl.com/about">link</a>
            <a href="http://anotherurl.com">link</a>
            <img src="http://someurl.com/someimg.jpg">
            </html>
        "#;

        let expected = vec![
            Attribute::new("href", "http://someurl.com"),
            Attribute::new("href", "http://someurl.com/about"),
            Attribute::new("href", "http://anotherurl.com"),
            Attribute::new("src", "http://someurl.com/someimg.jpg"),
        ];

        assert_eq!(tokenize_attributes(page.as_bytes()), expected);
    }

    #[test]
    fn test_attributes_from_every_tag() {
        let page = r#"
            <head><link rel="stylesheet" href="/style.css"></head>
            <body><script src="/app.js"></script><p class="intro">hi</p></body>
        "#;

        let attributes = tokenize_attributes(page.as_bytes());
        assert!(attributes.contains(&Attribute::new("rel", "stylesheet")));
        assert!(attributes.contains(&Attribute::new("href", "/style.css")));
        assert!(attributes.contains(&Attribute::new("src", "/app.js")));
        assert!(attributes.contains(&Attribute::new("class", "intro")));
    }

    #[test]
    fn test_entities_are_decoded() {
        let page = r#"<a href="/search?a=1&amp;b=2">s</a>"#;
        assert_eq!(
            tokenize_attributes(page.as_bytes()),
            vec![Attribute::new("href", "/search?a=1&b=2")]
        );
    }

    #[test]
    fn test_not_html() {
        assert!(tokenize_attributes(b"plain text, no tags").is_empty());
        assert!(tokenize_attributes(&[0xff, 0xfe, 0x00]).is_empty());
    }
}
