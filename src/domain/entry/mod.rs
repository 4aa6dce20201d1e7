// src/domain/entry/mod.rs
mod entity;
mod metadata;

pub use entity::{Entry, EntryStatus};
pub use metadata::EntryMetadata;
