//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_classe--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity part searchable: the id copied from the
//! DOM inspector leads to the `domain/a001_classe/` directory.

/// Paginated list of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form of a single record.
pub const PAGE_CAT_FORM: &str = "form";

/// Read-only details of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Application settings.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Free-form page (home menu).
pub const PAGE_CAT_CUSTOM: &str = "custom";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_FORM,
    PAGE_CAT_DETAIL,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_CUSTOM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_classe--list"));
        assert!(!is_valid_page_id("a001_classe"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_FORM));
        assert!(!is_known_category("dashboard"));
    }
}
