//! Geometric analysis of a document's tokens.
//!
//! Baselines are computed once for the whole document, then each token's
//! same-line neighbourhood is resolved against its page.

mod context;
mod statistics;

pub use context::{is_same_line, TokenContext};
pub use statistics::{mode, PdfModes};
