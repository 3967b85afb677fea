use leptos::prelude::*;

use crate::shared::resource::Resource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub link: String,
}

impl Crumb {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }

    /// Last crumb, rendered as plain text.
    pub fn current(label: impl Into<String>) -> Self {
        Self::new(label, "")
    }
}

/// Crumbs of a page below a resource list: `Classes > {page}`.
pub fn resource_trail(resource: Resource, page: impl Into<String>) -> Vec<Crumb> {
    vec![
        Crumb::new(resource.title(), resource.route()),
        Crumb::current(page),
    ]
}

/// Home link followed by `elements`; the last element is not a link.
#[component]
pub fn Breadcrumb(elements: Vec<Crumb>) -> impl IntoView {
    let last = elements.len().saturating_sub(1);

    view! {
        <ul class="breadcrumb">
            <li>
                <a href="/" title="Accueil">"Accueil"</a>
            </li>
            {elements.into_iter().enumerate().map(|(idx, crumb)| {
                if idx == last {
                    view! { <li class="current">{crumb.label}</li> }.into_any()
                } else {
                    view! { <li><a href=crumb.link>{crumb.label}</a></li> }.into_any()
                }
            }).collect_view()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_trail() {
        let trail = resource_trail(Resource::Teachers, "Création d'un enseignant");
        assert_eq!(trail[0], Crumb::new("Enseignants", "/teachers"));
        assert_eq!(trail[1].link, "");
    }
}
