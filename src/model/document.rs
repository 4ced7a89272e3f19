//! Document-level types.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{Font, PdfPage, PdfToken};
use crate::labels::LabelSource;
use crate::layout::PdfModes;
use crate::style::{HeightRatioTitlePolicy, TitlePolicy};

/// Processing phase of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DocumentState {
    /// Built from markup; baselines and contexts are computed
    #[default]
    Constructed,
    /// Token types were assigned from labels
    Typed,
    /// The style pass has run
    Styled,
}

/// A document read from pdftohtml output, with its baselines and styles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfFeatures {
    /// Pages in document order
    pub pages: Vec<PdfPage>,

    /// Fonts declared by the document, shared with its tokens
    pub fonts: Vec<Arc<Font>>,

    /// Name of the source file
    pub file_name: String,

    /// Dataset or directory the file belongs to
    pub file_type: String,

    /// Document-wide baselines
    pub pdf_modes: PdfModes,

    /// Processing phase
    pub state: DocumentState,

    /// Process pages in parallel during the style pass
    #[serde(skip, default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

impl PdfFeatures {
    /// Assemble a document and compute its baselines and token contexts.
    pub fn new(
        pages: Vec<PdfPage>,
        fonts: Vec<Arc<Font>>,
        file_name: impl Into<String>,
        file_type: impl Into<String>,
    ) -> Self {
        let mut features = Self {
            pages,
            fonts,
            file_name: file_name.into(),
            file_type: file_type.into(),
            pdf_modes: PdfModes::default(),
            state: DocumentState::Constructed,
            parallel: true,
        };
        features.get_modes();
        features.get_mode_font();
        features.get_tokens_context();
        features
    }

    /// A document without pages or fonts.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), "", "")
    }

    /// Check if the document has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of tokens across all pages.
    pub fn token_count(&self) -> usize {
        self.pages.iter().map(|p| p.tokens.len()).sum()
    }

    /// Iterate over every token together with its page.
    pub fn loop_tokens(&self) -> impl Iterator<Item = (&PdfPage, &PdfToken)> {
        self.pages
            .iter()
            .flat_map(|page| page.tokens.iter().map(move |token| (page, token)))
    }

    /// Iterate mutably over every token.
    pub fn loop_tokens_mut(&mut self) -> impl Iterator<Item = &mut PdfToken> {
        self.pages.iter_mut().flat_map(|page| page.tokens.iter_mut())
    }

    /// Overwrite every token type with its best-matching label.
    ///
    /// A label source without pages leaves the types untouched.
    pub fn set_token_types<L: LabelSource + ?Sized>(&mut self, labels: &L) {
        if labels.is_empty() {
            log::debug!("No labels for {}, keeping token types", self.file_name);
            return;
        }

        for token in self.loop_tokens_mut() {
            token.token_type = labels.label_type(token.page_number, &token.bounding_box);
        }
        self.state = DocumentState::Typed;
    }

    /// Recompute the common text height from the current token types.
    pub fn set_common_text_height(&mut self) {
        self.pdf_modes.set_common_text_height(&self.pages);
    }

    /// Run the style pass with the default heading policy.
    pub fn set_token_styles(&mut self) {
        self.set_token_styles_with(&HeightRatioTitlePolicy);
    }

    /// Run the style pass: heading rank, script position and list level.
    ///
    /// Running it again with unchanged geometry and types gives the same
    /// styles.
    pub fn set_token_styles_with<P: TitlePolicy + Sync + ?Sized>(&mut self, policy: &P) {
        self.set_common_text_height();
        let common_text_height = self.pdf_modes.common_text_height;

        if self.parallel {
            self.pages
                .par_iter_mut()
                .for_each(|page| page.apply_styles(common_text_height, policy));
        } else {
            for page in &mut self.pages {
                page.apply_styles(common_text_height, policy);
            }
        }

        log::debug!(
            "Styled {} tokens on {} pages (common text height {})",
            self.token_count(),
            self.pages.len(),
            common_text_height
        );
        self.state = DocumentState::Styled;
    }

    /// Compute the line spacing and right margin baselines.
    pub fn get_modes(&mut self) {
        self.pdf_modes.set_spacing_modes(&self.pages);
    }

    /// Compute the dominant font size baseline.
    pub fn get_mode_font(&mut self) {
        self.pdf_modes.set_font_size_mode(&self.pages);
    }

    /// Resolve the same-line context of every token.
    pub fn get_tokens_context(&mut self) {
        if self.parallel {
            self.pages.par_iter_mut().for_each(PdfPage::resolve_contexts);
        } else {
            self.pages.iter_mut().for_each(PdfPage::resolve_contexts);
        }
    }
}

impl Default for PdfFeatures {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{Label, PageLabels, PdfLabels};
    use crate::model::{Rectangle, TokenType};

    fn sample() -> PdfFeatures {
        let font = Arc::new(Font::new("0", 10.0, "Times", "#000000"));
        let mut page = PdfPage::new(1, 600, 800);
        for (i, (content, left, top)) in [("Hello", 10, 10), ("world", 70, 10), ("Next", 10, 30)]
            .into_iter()
            .enumerate()
        {
            page.tokens.push(PdfToken::new(
                1,
                format!("p1_t{}", i),
                content,
                font.clone(),
                Rectangle::from_width_height(left, top, 50, 10),
            ));
        }
        PdfFeatures::new(vec![page], vec![font], "sample.pdf", "tests")
    }

    #[test]
    fn test_empty_document() {
        let doc = PdfFeatures::empty();
        assert!(doc.is_empty());
        assert_eq!(doc.pdf_modes.lines_space_mode, 0);
        assert_eq!(doc.pdf_modes.right_space_mode, 0);
        assert_eq!(doc.pdf_modes.font_size_mode, None);
        assert_eq!(doc.state, DocumentState::Constructed);
    }

    #[test]
    fn test_construction_computes_baselines_and_context() {
        let doc = sample();
        assert_eq!(doc.pdf_modes.lines_space_mode, 10);
        // Line ends 120 and 60 occur once each, so the 0 seed wins the tie.
        assert_eq!(doc.pdf_modes.right_space_mode, 600);
        assert_eq!(doc.pdf_modes.font_size_mode, Some(10.0));

        let hello = &doc.pages[0].tokens[0];
        assert_eq!(hello.token_context.left_of_token_on_the_right, Some(70));
        assert_eq!(hello.token_context.right_of_token_on_the_left, None);
    }

    #[test]
    fn test_empty_labels_keep_types() {
        let mut doc = sample();
        doc.set_token_types(&PdfLabels::default());
        assert!(doc.loop_tokens().all(|(_, t)| t.token_type == TokenType::Text));
        assert_eq!(doc.state, DocumentState::Constructed);
    }

    #[test]
    fn test_labels_assign_types() {
        let mut doc = sample();
        let labels = PdfLabels {
            pages: vec![PageLabels {
                number: 1,
                labels: vec![Label {
                    top: 0,
                    left: 0,
                    width: 200,
                    height: 25,
                    label_type: TokenType::SectionHeader.index(),
                    metadata: String::new(),
                }],
            }],
        };
        doc.set_token_types(&labels);
        let types: Vec<TokenType> = doc.loop_tokens().map(|(_, t)| t.token_type).collect();
        assert_eq!(
            types,
            vec![TokenType::SectionHeader, TokenType::SectionHeader, TokenType::Text]
        );
        assert_eq!(doc.state, DocumentState::Typed);
    }

    #[test]
    fn test_styles_are_idempotent() {
        let mut doc = sample();
        doc.parallel = false;
        doc.set_token_styles();
        let first: Vec<_> = doc.loop_tokens().map(|(_, t)| t.token_style.clone()).collect();
        doc.set_token_styles();
        let second: Vec<_> = doc.loop_tokens().map(|(_, t)| t.token_style.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(doc.state, DocumentState::Styled);
        assert_eq!(doc.pdf_modes.common_text_height, 10.0);
    }
}
