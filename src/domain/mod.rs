// src/domain/mod.rs
//
// Domain Root - entities and value objects shared by all sources

pub mod entry;
pub mod episode;
pub mod filter;
pub mod page;
pub mod video;

// Entry Domain
pub use entry::{Entry, EntryMetadata, EntryStatus};

// Episode Domain
pub use episode::Episode;

// Value objects
pub use filter::{Filter, FilterList, SortSelection};
pub use page::EntriesPage;
pub use video::Video;
