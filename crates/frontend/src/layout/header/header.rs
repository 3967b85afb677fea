use leptos::prelude::*;

use crate::shared::resource::Resource;

pub const APP_TITLE: &str = "Education Project";
pub const APP_VERSION: &str = "Version 0.1";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a class="header__title" href="/">{APP_TITLE}</a>
                <span class="header__version">{APP_VERSION}</span>
            </div>
            <nav class="header__nav">
                {Resource::ALL.iter().map(|r| view! {
                    <a class="header__link" href=r.route()>{r.title()}</a>
                }).collect_view()}
                <a class="header__link" href="/options">"Options"</a>
            </nav>
        </header>
    }
}
