//! Style classifiers: script position, list level, hyperlink role and
//! heading rank.
//!
//! Each classifier is a pure function of a token and page-scoped inputs,
//! except [`ScriptType::from_text_height`], which depletes a shared pool of
//! page boxes. Thresholds live in [`policy`].

mod hyperlink;
mod list_level;
pub mod policy;
mod script;
mod title;
mod token_style;

pub use hyperlink::{HyperlinkStyle, HyperlinkType};
pub use list_level::ListLevel;
pub use script::ScriptType;
pub use title::{HeightRatioTitlePolicy, TitlePolicy, TitleType};
pub use token_style::{FontStyle, TokenStyle};
