use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pages shown on each side of the current page.
const DELTA: usize = 2;

/// One entry of the paginator, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Previous(usize),
    Page { number: usize, active: bool },
    LeadingGap,
    TrailingGap,
    Next(usize),
}

impl PageLink {
    /// Page to load when the entry is clicked; `None` for gaps.
    pub fn target(&self) -> Option<usize> {
        match self {
            PageLink::Previous(p) | PageLink::Next(p) => Some(*p),
            PageLink::Page { number, .. } => Some(*number),
            PageLink::LeadingGap | PageLink::TrailingGap => None,
        }
    }
}

/// Sliding window of page links around `current` (1-based).
///
/// Page 1 always comes first and `pages_count` last; gaps stand for the pages
/// left out between them and the window.
pub fn page_links(current: usize, pages_count: usize) -> Vec<PageLink> {
    let page = |number: usize| PageLink::Page {
        number,
        active: number == current,
    };

    let mut links = Vec::new();
    if current > 1 {
        links.push(PageLink::Previous(current - 1));
    }

    links.push(page(1));
    if current.saturating_sub(DELTA) > 2 {
        links.push(PageLink::LeadingGap);
    }

    let low = current.saturating_sub(DELTA).max(2);
    let high = (current + DELTA).min(pages_count.saturating_sub(1));
    links.extend((low..=high).map(page));

    if current + DELTA < pages_count.saturating_sub(1) {
        links.push(PageLink::TrailingGap);
    }
    if pages_count > 1 {
        links.push(page(pages_count));
    }

    if current < pages_count {
        links.push(PageLink::Next(current + 1));
    }
    links
}

fn link_view(link: PageLink, on_select: Callback<usize>) -> AnyView {
    let (content, class, target) = match link {
        PageLink::Previous(page) => (icon("chevron-left"), "", page),
        PageLink::Next(page) => (icon("chevron-right"), "", page),
        PageLink::Page { number, active } => (
            number.to_string().into_any(),
            if active { "active" } else { "" },
            number,
        ),
        PageLink::LeadingGap | PageLink::TrailingGap => {
            return view! {
                <li class="forbidden">
                    <span class="pagination__gap">"…"</span>
                </li>
            }
            .into_any();
        }
    };

    view! {
        <li class=class>
            <span class="pagination__link" on:click=move |_| on_select.run(target)>
                {content}
            </span>
        </li>
    }
    .into_any()
}

/// Paginator of a list page. `on_select` receives the 1-based page number.
#[component]
pub fn Paginator(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] pages_count: Signal<usize>,
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <ul>
                {move || {
                    page_links(current_page.get(), pages_count.get())
                        .into_iter()
                        .map(|link| link_view(link, on_select))
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::*;

    fn p(number: usize) -> PageLink {
        Page {
            number,
            active: false,
        }
    }

    fn on(number: usize) -> PageLink {
        Page {
            number,
            active: true,
        }
    }

    #[test]
    fn test_first_of_two() {
        assert_eq!(page_links(1, 2), vec![on(1), p(2), Next(2)]);
    }

    #[test]
    fn test_last_of_two() {
        assert_eq!(page_links(2, 2), vec![Previous(1), p(1), on(2)]);
    }

    #[test]
    fn test_single_page() {
        assert_eq!(page_links(1, 1), vec![on(1)]);
    }

    #[test]
    fn test_no_pages_yet() {
        assert_eq!(page_links(1, 0), vec![on(1)]);
    }

    #[test]
    fn test_both_gaps() {
        assert_eq!(
            page_links(10, 20),
            vec![
                Previous(9),
                p(1),
                LeadingGap,
                p(8),
                p(9),
                on(10),
                p(11),
                p(12),
                TrailingGap,
                p(20),
                Next(11)
            ]
        );
    }

    #[test]
    fn test_only_gaps_have_no_target() {
        for link in page_links(6, 20) {
            let is_gap = matches!(link, LeadingGap | TrailingGap);
            assert_eq!(link.target().is_none(), is_gap, "{link:?}");
        }
    }

    #[test]
    fn test_window_invariants() {
        for pages_count in 1..=12 {
            for current in 1..=pages_count {
                let links = page_links(current, pages_count);
                let pages: Vec<usize> = links
                    .iter()
                    .filter_map(|l| match l {
                        Page { number, .. } => Some(*number),
                        _ => None,
                    })
                    .collect();
                assert_eq!(pages.first(), Some(&1));
                assert_eq!(pages.last(), Some(&pages_count));

                let active = links
                    .iter()
                    .filter(|l| matches!(l, Page { active: true, .. }))
                    .count();
                assert_eq!(active, 1, "({current}, {pages_count})");

                assert!(links
                    .iter()
                    .filter(|l| matches!(l, LeadingGap | TrailingGap))
                    .all(|l| l.target().is_none()));
            }
        }
    }
}
