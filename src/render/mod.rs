//! Rendering styled documents to Markdown, HTML and JSON.

mod html;
mod json;
mod markdown;

pub use html::to_html;
pub use json::{to_json, JsonFormat};
pub use markdown::to_markdown;
