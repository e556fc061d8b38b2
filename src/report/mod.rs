//! Report renderers for analysis results.
//!
//! - [`terminal`]: colored product card, sentiment and theme tables, history list;
//!   respects `--quiet`.
//! - [`json`]: machine-readable session document.
//! - [`format`]: number, star and bar helpers shared by the renderers.

pub mod format;
pub mod json;
pub mod terminal;
