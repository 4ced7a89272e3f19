//! Reading pdftohtml output into documents.

mod document;
mod options;
mod pdftohtml;
mod poppler;

pub use options::{ParseOptions, LABELS_FILE_NAME, TOKEN_TYPE_RELATIVE_PATH, XML_NAME};
pub use pdftohtml::contains_text;
pub use poppler::PopplerParser;
