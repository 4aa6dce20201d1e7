// src/domain/page.rs
use super::entry::Entry;

/// One page of catalogue results plus a continuation flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntriesPage {
    pub entries: Vec<Entry>,
    pub has_next_page: bool,
}

impl EntriesPage {
    pub fn new(entries: Vec<Entry>, has_next_page: bool) -> Self {
        Self {
            entries,
            has_next_page,
        }
    }
}
