//! Parsing options and configuration.

use std::path::PathBuf;

/// File name of the pdftohtml output inside a labeled-data PDF directory.
pub const XML_NAME: &str = "etree.xml";

/// File name of a ground-truth label file.
pub const LABELS_FILE_NAME: &str = "labels.json";

/// Directory of token type labels, relative to a labeled-data root.
pub const TOKEN_TYPE_RELATIVE_PATH: &str = "labeled_data/token_type";

/// Options for reading documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// File name recorded on the document (defaults to the input's name)
    pub file_name: Option<String>,

    /// Dataset recorded as the document's file type (defaults to the input's
    /// parent directory name)
    pub dataset: Option<String>,

    /// Whether to use parallel processing across pages
    pub parallel: bool,

    /// pdftohtml executable
    pub pdftohtml: PathBuf,

    /// Where pdftohtml writes its XML; a temporary file when unset
    pub xml_path: Option<PathBuf>,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file name recorded on the document.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Set the dataset recorded on the document.
    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = Some(dataset.into());
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Use a specific pdftohtml executable.
    pub fn with_pdftohtml(mut self, executable: impl Into<PathBuf>) -> Self {
        self.pdftohtml = executable.into();
        self
    }

    /// Keep the pdftohtml XML at the given path.
    pub fn with_xml_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.xml_path = Some(path.into());
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            file_name: None,
            dataset: None,
            parallel: true,
            pdftohtml: PathBuf::from("pdftohtml"),
            xml_path: None,
        }
    }
}
