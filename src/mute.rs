use crate::types::Category;

/// Scope offered when a category has no finer-grained option
pub const DEFAULT_MUTE_SCOPES: &[&str] = &["This category"];

/// Granularities at which notifications of `category` can be muted, most specific first
pub fn mute_scopes_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Legislation => &["This bill", "This issue"],
        Category::Compliance => &["This filing", "This client"],
        Category::Relationship => &["This person", "This client"],
        Category::Records => &["This record"],
        Category::Intel => &["This source", "This issue"],
        Category::Tasks => &["This task"],
        Category::Elections => &["This race"],
        Category::ClientWork => &["This client"],
        Category::WarRoom => &["This war room"],
        Category::Calendar => DEFAULT_MUTE_SCOPES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legislation_scopes() {
        assert_eq!(mute_scopes_for(Category::Legislation), ["This bill", "This issue"]);
    }

    #[test]
    fn test_calendar_falls_back_to_category() {
        assert_eq!(mute_scopes_for(Category::Calendar), ["This category"]);
    }

    #[test]
    fn test_every_category_has_one_or_two_scopes() {
        for category in Category::ALL {
            let scopes = mute_scopes_for(category);
            assert!(
                (1..=2).contains(&scopes.len()),
                "{} has {} scopes",
                category,
                scopes.len()
            );
        }
    }
}
