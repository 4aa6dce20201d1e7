// src/domain/filter.rs

/// Toggle state of a sort filter: which option is active and in which
/// direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSelection {
    pub index: usize,
    pub ascending: bool,
}

impl SortSelection {
    pub fn new(index: usize, ascending: bool) -> Self {
        Self { index, ascending }
    }

    /// Flip the direction, keeping the active option.
    pub fn toggled(&self) -> Self {
        Self {
            index: self.index,
            ascending: !self.ascending,
        }
    }
}

/// A browse filter exposed by a catalogue source.
///
/// Only the sort filter is modeled; sources with richer filtering extend
/// this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Sort {
        /// Display name of the filter group
        name: String,
        /// Display labels for the sortable options
        options: Vec<String>,
        /// Active selection, if any
        state: Option<SortSelection>,
    },
}

/// Ordered filter collection, as handed to search operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterList(pub Vec<Filter>);

impl FilterList {
    pub fn new(filters: Vec<Filter>) -> Self {
        Self(filters)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.0.iter()
    }

    /// State of the first sort filter in the list, if one is active.
    pub fn sort_selection(&self) -> Option<&SortSelection> {
        self.0.iter().find_map(|filter| match filter {
            Filter::Sort { state, .. } => state.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_selection_from_list() {
        let filters = FilterList::new(vec![Filter::Sort {
            name: "Order by".to_string(),
            options: vec!["Title".to_string(), "Date".to_string()],
            state: Some(SortSelection::new(1, false)),
        }]);

        let selection = filters.sort_selection().unwrap();
        assert_eq!(selection.index, 1);
        assert!(!selection.ascending);
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        assert!(FilterList::default().sort_selection().is_none());
    }

    #[test]
    fn test_toggled_reverses_direction_only() {
        let selection = SortSelection::new(0, true);
        let toggled = selection.toggled();
        assert_eq!(toggled.index, 0);
        assert!(!toggled.ascending);
        assert_eq!(toggled.toggled(), selection);
    }
}
