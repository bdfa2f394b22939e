use super::request::RequestToken;
use std::collections::BTreeSet;

/// State of a "select all" checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    None,
    /// Indeterminate
    Some,
    All,
}

impl SelectAllState {
    pub fn of<'a>(visible: impl IntoIterator<Item = &'a str>, selected: &BTreeSet<String>) -> Self {
        let mut total = 0;
        let mut hits = 0;
        for id in visible {
            total += 1;
            if selected.contains(id) {
                hits += 1;
            }
        }
        match (hits, total) {
            (0, _) => SelectAllState::None,
            (h, t) if h == t => SelectAllState::All,
            _ => SelectAllState::Some,
        }
    }
}

/// First half of the dataset-wide "select everything" toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalSelect {
    /// The selection was non-empty and has been cleared
    Cleared,
    /// Nothing was selected: fetch every id and pass it with the token to
    /// `finish_select_all_global`
    NeedsIds(RequestToken),
}
