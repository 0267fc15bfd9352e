use std::borrow::Cow;

/// Entities that can be found through the dashboard search box.
pub trait Searchable {
    /// Text projection of every searchable field.
    fn searchable_fields(&self) -> Vec<Cow<'_, str>>;

    fn to_searchable_text(&self) -> String {
        self.searchable_fields().join(" ")
    }

    /// Case-insensitive substring match against any single field.
    /// A blank term matches everything.
    fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();

        if needle.is_empty() {
            return true;
        }

        self.searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
