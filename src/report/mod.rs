pub mod markdown;
pub mod json;

pub use markdown::{confidence_bar, MarkdownFormatter};
pub use json::JsonFormatter;
