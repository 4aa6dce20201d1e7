// src/lib.rs
//
// anisource: pluggable catalogue sources for local-first anime libraries.
//
// The crate is split into:
// - domain:  the entities sources exchange (entries, episodes, videos, filters)
// - sources: the source contract plus the HTTP template and the local
//            filesystem implementation
// - util:    episode-number recognition, natural ordering, image sniffing
// - error:   the shared error type

pub mod domain;
pub mod error;
pub mod sources;
pub mod util;

pub use domain::{
    EntriesPage, Entry, EntryMetadata, EntryStatus, Episode, Filter, FilterList, SortSelection,
    Video,
};
pub use error::{SourceError, SourceResult};
pub use sources::{generate_id, CatalogueSource, HttpSource, LocalSource, Source, StubSource};
