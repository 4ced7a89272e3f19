//! Reader for the XML written by `pdftohtml -xml`.
//!
//! The expected shape is:
//!
//! ```xml
//! <pdf2xml>
//!   <page number="1" width="892" height="1262">
//!     <fontspec id="0" size="16" family="Times" color="#000000"/>
//!     <text top="101" left="128" width="285" height="17" font="0"><b>Title</b></text>
//!   </page>
//! </pdf2xml>
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use roxmltree::{Document as XmlDocument, Node, ParsingOptions};

use crate::error::Result;
use crate::model::{Font, PdfFeatures, PdfPage, PdfToken, Rectangle};
use crate::style::TokenStyle;

use super::options::ParseOptions;

/// Parser for pdftohtml XML output.
pub struct PopplerParser {
    xml: String,
    source: Option<PathBuf>,
    options: ParseOptions,
}

impl PopplerParser {
    /// Open an XML file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open an XML file with custom options.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;

        Ok(Self {
            xml: String::from_utf8_lossy(&bytes).into_owned(),
            source: Some(path.to_path_buf()),
            options,
        })
    }

    /// Parse XML held in memory.
    pub fn from_xml(xml: impl Into<String>) -> Self {
        Self::from_xml_with_options(xml, ParseOptions::default())
    }

    /// Parse XML held in memory with custom options.
    pub fn from_xml_with_options(xml: impl Into<String>, options: ParseOptions) -> Self {
        Self {
            xml: xml.into(),
            source: None,
            options,
        }
    }

    /// Build the document.
    ///
    /// Empty or malformed XML yields the empty document.
    pub fn parse(&self) -> PdfFeatures {
        match self.try_parse() {
            Ok(features) => features,
            Err(e) => {
                log::warn!("Malformed pdftohtml output for {}: {}", self.describe(), e);
                PdfFeatures::empty()
            }
        }
    }

    /// Build the document, failing on malformed XML.
    ///
    /// Characters XML 1.0 forbids are dropped and bare `&` is escaped before
    /// parsing. Empty input or a root without children still yields the
    /// empty document.
    pub fn try_parse(&self) -> Result<PdfFeatures> {
        if self.xml.trim().is_empty() {
            log::warn!("Empty pdftohtml output for {}", self.describe());
            return Ok(PdfFeatures::empty());
        }

        let parsing = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let xml = sanitize_xml(&self.xml);
        let doc = XmlDocument::parse_with_options(&xml, parsing)?;

        let root = doc.root_element();
        if !root.children().any(|n| n.is_element()) {
            return Ok(PdfFeatures::empty());
        }

        let (fonts, pages) = read_tree(root);
        let mut features = PdfFeatures {
            pages,
            fonts,
            file_name: self.file_name(),
            file_type: self.file_type(),
            parallel: self.options.parallel,
            ..PdfFeatures::empty()
        };
        features.get_modes();
        features.get_mode_font();
        features.get_tokens_context();

        log::debug!(
            "Read {} pages, {} fonts and {} tokens from {}",
            features.pages.len(),
            features.fonts.len(),
            features.token_count(),
            self.describe()
        );
        Ok(features)
    }

    fn file_name(&self) -> String {
        if let Some(name) = &self.options.file_name {
            return name.clone();
        }
        self.source
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn file_type(&self) -> String {
        if let Some(dataset) = &self.options.dataset {
            return dataset.clone();
        }
        self.source
            .as_deref()
            .and_then(Path::parent)
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn describe(&self) -> String {
        match &self.source {
            Some(path) => path.display().to_string(),
            None => "in-memory XML".to_string(),
        }
    }
}

/// Repair the byte-level defects pdftohtml leaves in its output: control
/// characters copied from the PDF text layer and unescaped ampersands.
pub(crate) fn sanitize_xml(xml: &str) -> Cow<'_, str> {
    let is_defect = |i: usize, c: char| {
        !is_xml_char(c) || (c == '&' && !starts_with_reference(&xml[i + c.len_utf8()..]))
    };
    if !xml.char_indices().any(|(i, c)| is_defect(i, c)) {
        return Cow::Borrowed(xml);
    }

    let mut repaired = String::with_capacity(xml.len() + 16);
    for (i, c) in xml.char_indices() {
        if !is_xml_char(c) {
            continue;
        }
        if is_defect(i, c) {
            repaired.push_str("&amp;");
        } else {
            repaired.push(c);
        }
    }
    Cow::Owned(repaired)
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Whether the text after an `&` is a character or predefined entity reference.
fn starts_with_reference(rest: &str) -> bool {
    let Some(end) = rest.char_indices().take(12).find(|&(_, c)| c == ';').map(|(i, _)| i) else {
        return false;
    };
    let name = &rest[..end];
    if let Some(hex) = name.strip_prefix("#x") {
        return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if let Some(decimal) = name.strip_prefix('#') {
        return !decimal.is_empty() && decimal.chars().all(|c| c.is_ascii_digit());
    }
    matches!(name, "amp" | "lt" | "gt" | "quot" | "apos")
}

fn read_tree(root: Node<'_, '_>) -> (Vec<Arc<Font>>, Vec<PdfPage>) {
    let mut fonts = Vec::new();
    let mut fonts_by_id: HashMap<String, Arc<Font>> = HashMap::new();
    for node in root.descendants().filter(|n| has_tag(n, "fontspec")) {
        let font = Arc::new(read_font(node));
        fonts_by_id.insert(font.font_id.clone(), font.clone());
        fonts.push(font);
    }

    let pages = root
        .descendants()
        .filter(|n| has_tag(n, "page"))
        .enumerate()
        .map(|(index, node)| read_page(node, index, &fonts_by_id))
        .collect();

    (fonts, pages)
}

fn has_tag(node: &Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && node.tag_name().name() == tag
}

/// Integer attribute, truncating fractional values.
fn int_attribute(node: Node<'_, '_>, name: &str) -> Option<i32> {
    node.attribute(name)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .map(|v| v as i32)
}

fn read_font(node: Node<'_, '_>) -> Font {
    Font::new(
        node.attribute("id").unwrap_or_default(),
        node.attribute("size")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0.0),
        node.attribute("family").unwrap_or_default(),
        node.attribute("color").unwrap_or("#000000"),
    )
}

fn read_page(node: Node<'_, '_>, index: usize, fonts: &HashMap<String, Arc<Font>>) -> PdfPage {
    let page_number = node
        .attribute("number")
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(index as u32 + 1);

    let mut page = PdfPage::new(
        page_number,
        int_attribute(node, "width").unwrap_or_default(),
        int_attribute(node, "height").unwrap_or_default(),
    );

    for (token_index, text) in node.descendants().filter(|n| has_tag(n, "text")).enumerate() {
        let font_id = text.attribute("font").unwrap_or_default();
        let Some(font) = fonts.get(font_id) else {
            log::warn!(
                "Skipping text on page {} with unknown font {:?}",
                page_number,
                font_id
            );
            continue;
        };
        page.tokens
            .push(read_token(text, page_number, token_index, font.clone()));
    }

    page
}

fn read_token(node: Node<'_, '_>, page_number: u32, index: usize, font: Arc<Font>) -> PdfToken {
    let id = node
        .attribute("id")
        .map(str::to_string)
        .unwrap_or_else(|| format!("p{}_t{}", page_number, index));

    let content: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    let content = content.trim().to_string();

    let bounding_box = Rectangle::from_poppler_tag(node);

    let token_style = TokenStyle::from_node(node, &content, &font);

    let mut token = PdfToken::new(page_number, id, content, font, bounding_box);
    token.reading_order_no = int_attribute(node, "reading_order_no").unwrap_or(-1);
    token.token_style = token_style;
    token
}
