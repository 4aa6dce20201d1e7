// src/error/mod.rs
mod types;

pub use types::{SourceError, SourceResult};
