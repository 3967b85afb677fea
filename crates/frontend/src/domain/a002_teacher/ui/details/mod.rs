use leptos::prelude::*;

use crate::shared::entity_details::EntityDetailsPage;
use crate::shared::resource::Resource;

#[component]
#[allow(non_snake_case)]
pub fn TeacherDetails() -> impl IntoView {
    view! { <EntityDetailsPage resource=Resource::Teachers /> }
}
