//! Document model for pdftohtml token streams.
//!
//! A [`PdfFeatures`] owns pages, pages own tokens, and tokens share
//! [`Font`]s by reference. Geometry is immutable after construction; token
//! types and styles are filled in by later passes.

mod document;
mod font;
mod page;
mod rectangle;
mod token;
mod token_type;

pub use document::{DocumentState, PdfFeatures};
pub use font::Font;
pub use page::PdfPage;
pub use rectangle::Rectangle;
pub use token::PdfToken;
pub use token_type::TokenType;
