//! Snapshot data types shared by the loader, reconstructor, diff engine and renderers.
//!
//! ## Module Structure
//!
//! - `translations`: TranslationMap and LocaleDict
//! - `columns`: LocaleColumns, the locale ↔ display column registry

pub mod columns;
pub mod translations;

pub use columns::{LocaleColumns, OLD_VALUE_SUFFIX};
pub use translations::{LocaleDict, TranslationMap};
