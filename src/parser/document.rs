//! Entry points that build a [`PdfFeatures`] from files on disk.

use std::path::Path;

use crate::error::Result;
use crate::labels::PdfLabels;
use crate::model::PdfFeatures;

use super::options::{ParseOptions, LABELS_FILE_NAME, TOKEN_TYPE_RELATIVE_PATH, XML_NAME};
use super::pdftohtml::{contains_text, run_pdftohtml};
use super::poppler::PopplerParser;

impl PdfFeatures {
    /// Build a document from pdftohtml XML held in memory.
    pub fn from_poppler_xml_str(xml: &str, options: ParseOptions) -> PdfFeatures {
        PopplerParser::from_xml_with_options(xml, options).parse()
    }

    /// Build a document from a pdftohtml XML file.
    pub fn from_poppler_xml_file<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<PdfFeatures> {
        Ok(PopplerParser::open_with_options(path, options)?.parse())
    }

    /// Run pdftohtml on a PDF and build the document from its output.
    ///
    /// The file name and dataset default to the PDF's name and directory. A
    /// PDF without a text layer yields the empty document.
    pub fn from_pdf_path<P: AsRef<Path>>(pdf: P, options: ParseOptions) -> Result<PdfFeatures> {
        let pdf = pdf.as_ref();
        let mut options = options;
        if options.file_name.is_none() {
            options.file_name = pdf.file_name().map(|n| n.to_string_lossy().into_owned());
        }
        if options.dataset.is_none() {
            options.dataset = pdf
                .parent()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned());
        }

        let output = run_pdftohtml(pdf, &options)?;
        if !contains_text(output.path()) {
            log::warn!("No text layer in {}", pdf.display());
            return Ok(PdfFeatures::empty());
        }

        Self::from_poppler_xml_file(output.path(), options)
    }

    /// Build a document from a labeled-data tree and apply its token labels.
    ///
    /// The XML is read from `root/pdfs/<pdf_name>/etree.xml` and the labels
    /// from `root/labeled_data/token_type/<dataset>/<pdf_name>/labels.json`.
    pub fn from_labeled_data<P: AsRef<Path>>(
        root: P,
        dataset: &str,
        pdf_name: &str,
        options: ParseOptions,
    ) -> Result<PdfFeatures> {
        let root = root.as_ref();
        let xml_path = root.join("pdfs").join(pdf_name).join(XML_NAME);
        let labels_path = root
            .join(TOKEN_TYPE_RELATIVE_PATH)
            .join(dataset)
            .join(pdf_name)
            .join(LABELS_FILE_NAME);

        let options = options.with_file_name(pdf_name).with_dataset(dataset);
        let mut features = Self::from_poppler_xml_file(&xml_path, options)?;

        let labels = PdfLabels::load(&labels_path)?;
        features.set_token_types(&labels);
        Ok(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentState, TokenType};

    const XML: &str = r##"<pdf2xml>
<page number="1" position="absolute" top="0" left="0" height="800" width="600">
<fontspec id="0" size="10" family="Times" color="#000000"/>
<text top="20" left="50" width="200" height="20" font="0">Heading</text>
<text top="60" left="50" width="300" height="10" font="0">Body</text>
</page>
</pdf2xml>"##;

    #[test]
    fn test_from_poppler_xml_str() {
        let doc = PdfFeatures::from_poppler_xml_str(XML, ParseOptions::new().sequential());
        assert_eq!(doc.token_count(), 2);
        assert!(!doc.parallel);
        assert!(PdfFeatures::from_poppler_xml_str("", ParseOptions::new()).is_empty());
    }

    #[test]
    fn test_from_labeled_data() {
        let root = tempfile::tempdir().unwrap();
        let pdf_dir = root.path().join("pdfs").join("report");
        std::fs::create_dir_all(&pdf_dir).unwrap();
        std::fs::write(pdf_dir.join(XML_NAME), XML).unwrap();

        let labels_dir = root
            .path()
            .join(TOKEN_TYPE_RELATIVE_PATH)
            .join("reports")
            .join("report");
        std::fs::create_dir_all(&labels_dir).unwrap();
        std::fs::write(
            labels_dir.join(LABELS_FILE_NAME),
            format!(
                r#"{{"pages": [{{"number": 1, "labels": [
                    {{"top": 15, "left": 40, "width": 220, "height": 30, "label_type": {}, "metadata": ""}}
                ]}}]}}"#,
                TokenType::SectionHeader.index()
            ),
        )
        .unwrap();

        let doc =
            PdfFeatures::from_labeled_data(root.path(), "reports", "report", ParseOptions::new())
                .unwrap();
        assert_eq!(doc.file_name, "report");
        assert_eq!(doc.file_type, "reports");
        assert_eq!(doc.state, DocumentState::Typed);
        let types: Vec<TokenType> = doc.loop_tokens().map(|(_, t)| t.token_type).collect();
        assert_eq!(types, vec![TokenType::SectionHeader, TokenType::Text]);
    }

    #[test]
    fn test_from_labeled_data_without_labels() {
        let root = tempfile::tempdir().unwrap();
        let pdf_dir = root.path().join("pdfs").join("report");
        std::fs::create_dir_all(&pdf_dir).unwrap();
        std::fs::write(pdf_dir.join(XML_NAME), XML).unwrap();

        let doc =
            PdfFeatures::from_labeled_data(root.path(), "reports", "report", ParseOptions::new())
                .unwrap();
        assert_eq!(doc.state, DocumentState::Constructed);
        assert_eq!(doc.token_count(), 2);
    }

    #[test]
    fn test_from_labeled_data_without_xml() {
        let root = tempfile::tempdir().unwrap();
        let result =
            PdfFeatures::from_labeled_data(root.path(), "reports", "report", ParseOptions::new());
        assert!(result.is_err());
    }
}
