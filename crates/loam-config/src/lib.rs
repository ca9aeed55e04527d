//! Flat key/value configuration sheets for Loam.
//!
//! Both the generation configuration and the biome data file share one
//! declarative format: `key = value` lines with `#`/`;` comments. This crate
//! parses that format into an ordered [`ConfigSheet`] with typed access and
//! change detection for hot reload.

mod error;
mod sheet;
mod value;

pub use error::ConfigError;
pub use sheet::{ConfigSheet, ParseOptions};
pub use value::Value;
