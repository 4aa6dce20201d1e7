// src/sources/local/filters.rs
use crate::domain::{Filter, FilterList, SortSelection};

use super::{SORT_BY_DATE, SORT_BY_TITLE};

fn order_by(state: SortSelection) -> Filter {
    Filter::Sort {
        name: "Order by".to_string(),
        options: vec!["Title".to_string(), "Date".to_string()],
        state: Some(state),
    }
}

/// Default browse state: title, ascending.
pub(super) fn popular_filters() -> FilterList {
    FilterList::new(vec![order_by(SortSelection::new(SORT_BY_TITLE, true))])
}

/// Latest-updates state: date, descending.
pub(super) fn latest_filters() -> FilterList {
    FilterList::new(vec![order_by(SortSelection::new(SORT_BY_DATE, false))])
}
