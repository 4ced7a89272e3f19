//! Hyperlink roles from `<a>` markup embedded in a token.

use serde::{Deserialize, Serialize};

use super::policy::WEB_LINK_PREFIX;

/// Role of the first anchor found in a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HyperlinkType {
    /// External link whose text is visible in the token
    #[serde(rename = "Web url")]
    WebUrl,
    /// Internal reference to another place in the document
    #[serde(rename = "Document reference")]
    DocumentReference,
    /// No usable link
    #[default]
    #[serde(rename = "No link")]
    NoLink,
}

/// Link text, target and role of a token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HyperlinkStyle {
    /// Visible text of the anchor
    pub link_text: String,
    /// Anchor target
    pub link: String,
    /// Link role
    #[serde(rename = "type")]
    pub link_type: HyperlinkType,
}

impl HyperlinkStyle {
    /// A style with no link.
    pub fn no_link() -> Self {
        Self::default()
    }

    /// Classify the first `<a>` element below `node`.
    pub fn from_node(node: roxmltree::Node<'_, '_>, content: &str) -> Self {
        let Some(anchor) = node
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == "a")
        else {
            return Self::no_link();
        };

        let href = anchor.attribute("href").unwrap_or_default();
        let anchor_text: String = anchor
            .descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect();

        Self::from_anchor(href, &anchor_text, content)
    }

    /// Classify an anchor given its target, inner text and the token content.
    ///
    /// A web anchor whose text cannot be found in the content is discarded.
    pub fn from_anchor(href: &str, anchor_text: &str, content: &str) -> Self {
        if href.is_empty() {
            return Self::no_link();
        }

        let link_text = anchor_text.trim();

        if href.starts_with(WEB_LINK_PREFIX) {
            if !link_text.is_empty() && content.contains(link_text) {
                return Self {
                    link_text: link_text.to_string(),
                    link: href.to_string(),
                    link_type: HyperlinkType::WebUrl,
                };
            }
            return Self::no_link();
        }

        Self {
            link_text: link_text.to_string(),
            link: href.to_string(),
            link_type: HyperlinkType::DocumentReference,
        }
    }

    /// Bracket every occurrence of the link text and append the target.
    pub fn get_styled_content_markdown(&self, content: &str) -> String {
        if self.link_type != HyperlinkType::WebUrl {
            return content.to_string();
        }
        let bracketed = format!("[{}]", self.link_text);
        format!("{}({})", content.replace(&self.link_text, &bracketed), self.link)
    }

    /// Wrap every occurrence of the link text in an anchor tag.
    pub fn get_styled_content_html(&self, content: &str) -> String {
        if self.link_type != HyperlinkType::WebUrl {
            return content.to_string();
        }
        let anchor = format!("<a href=\"{}\">{}</a>", self.link, self.link_text);
        content.replace(&self.link_text, &anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(xml: &str, content: &str) -> HyperlinkStyle {
        let doc = roxmltree::Document::parse(xml).unwrap();
        HyperlinkStyle::from_node(doc.root_element(), content)
    }

    #[test]
    fn test_web_url_in_content() {
        let style = classify(
            r#"<text>please <a href="https://example.org/x">see</a> here</text>"#,
            "please see here",
        );
        assert_eq!(style.link_type, HyperlinkType::WebUrl);
        assert_eq!(style.link_text, "see");
        assert_eq!(style.link, "https://example.org/x");
        assert_eq!(
            style.get_styled_content_markdown("please see here"),
            "please [see] here(https://example.org/x)"
        );
        assert_eq!(
            style.get_styled_content_html("please see here"),
            "please <a href=\"https://example.org/x\">see</a> here"
        );
    }

    #[test]
    fn test_no_anchor() {
        let style = classify("<text><b>bold</b></text>", "bold");
        assert_eq!(style, HyperlinkStyle::no_link());
    }

    #[test]
    fn test_anchor_without_target() {
        let style = classify("<text><a>text</a></text>", "text");
        assert_eq!(style.link_type, HyperlinkType::NoLink);
        assert!(style.link_text.is_empty());
    }

    #[test]
    fn test_web_anchor_text_missing_from_content() {
        let style = classify(
            r#"<text><a href="http://example.org">elsewhere</a></text>"#,
            "different content",
        );
        assert_eq!(style, HyperlinkStyle::no_link());

        let style = classify(r#"<text><a href="http://example.org">  </a></text>"#, "x");
        assert_eq!(style, HyperlinkStyle::no_link());
    }

    #[test]
    fn test_document_reference_keeps_text() {
        let style = classify(r#"<text><a href="doc.html#12">  </a>Note</text>"#, "Note");
        assert_eq!(style.link_type, HyperlinkType::DocumentReference);
        assert_eq!(style.link, "doc.html#12");
        assert_eq!(style.link_text, "");
        assert_eq!(style.get_styled_content_markdown("Note"), "Note");
    }

    #[test]
    fn test_only_first_anchor_is_used() {
        let style = classify(
            r##"<text><a href="#p2">2</a> and <a href="https://a.b">site</a></text>"##,
            "2 and site",
        );
        assert_eq!(style.link_type, HyperlinkType::DocumentReference);
        assert_eq!(style.link_text, "2");
    }

    #[test]
    fn test_repeated_text_is_decorated_everywhere() {
        let style = HyperlinkStyle::from_anchor("https://a.b", "ab", "ab cd ab");
        assert_eq!(style.get_styled_content_markdown("ab cd ab"), "[ab] cd [ab](https://a.b)");
    }

    #[test]
    fn test_reclassification_is_stable() {
        let first = HyperlinkStyle::from_anchor("http://x.y", "gone", "content");
        let second = HyperlinkStyle::from_anchor("http://x.y", "gone", "content");
        assert_eq!(first, second);
        assert_eq!(second.link_type, HyperlinkType::NoLink);
    }
}
