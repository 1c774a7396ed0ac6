//! Trex - translation export and change journal
//!
//! Trex reads per-locale translation dictionaries, writes them to a single
//! delimited table (one column per locale), records which keys were added,
//! updated or deleted since the previous export, and summarizes each locale.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: Configuration file loading, defaults and validation
//! - `core`: Export engine (load, reconstruct, diff, render)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
