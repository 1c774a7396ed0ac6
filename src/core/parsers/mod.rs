//! Parsers turning raw locale source text into a flat key → value mapping.
//!
//! - `embedded`: object literal embedded in arbitrary text (e.g. `export default {...};`)

pub mod embedded;

use crate::core::{LocaleDict, SourceParseError};

pub use embedded::EmbeddedObjectParser;

/// Turns the raw content of one locale source file into a flat dictionary.
///
/// Format heuristics live behind this trait so the diff and render layers
/// never see them.
pub trait TranslationSourceParser {
    fn parse(&self, raw: &str) -> Result<LocaleDict, SourceParseError>;
}
