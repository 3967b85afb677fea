//! PageFrame: root wrapper of every routed page.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"a001_classe--list"`
//!   - `data-page-category`: one of the PAGE_CAT_* constants
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a001_classe--list" category=PAGE_CAT_LIST>
//!         <Breadcrumb elements=crumbs />
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// BEM class of the root element for `category`.
pub fn frame_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_FORM => "page page--form",
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    }
}


#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(&page_id), "bad page id {page_id}");
    debug_assert!(is_known_category(category), "unknown page category {category}");

    view! {
        <main
            id=page_id
            class=frame_class(category)
            data-page-category=category
        >
            {children()}
        </main>
    }
}
