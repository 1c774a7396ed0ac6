//! Export engine: load, reconstruct, diff, render.
//!
//! ## Module Structure
//!
//! - `data`: TranslationMap, LocaleDict and the locale column registry
//! - `parsers`: raw locale source → flat dictionary
//! - `loader`: locale directory tree → current TranslationMap
//! - `snapshot`: previous export file → previous TranslationMap
//! - `diff`: inserted / updated / deleted classification
//! - `render`: export, journal and metadata artifacts
//! - `table`: delimited row reader and writer
//! - `context`: ExportContext tying the phases together

pub mod context;
pub mod data;
pub mod diff;
pub mod error;
pub mod loader;
pub mod parsers;
pub mod render;
pub mod snapshot;
pub mod table;

pub use context::ExportContext;
pub use data::{LocaleColumns, LocaleDict, OLD_VALUE_SUFFIX, TranslationMap};
pub use diff::{ChangeKind, TranslationDiff};
pub use error::{ExportError, SourceParseError};
