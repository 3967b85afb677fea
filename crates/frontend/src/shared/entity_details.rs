//! Read-only details page shared by every resource.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use serde_json::{Map, Value};
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;

use crate::shared::api_utils::{api_base, join_url, with_id};
use crate::shared::components::breadcrumb::{resource_trail, Breadcrumb};
use crate::shared::components::details_list::DetailsList;
use crate::shared::components::message_box::{clear_on_dismiss, MessageBox, MessageKind};
use crate::shared::config::use_config;
use crate::shared::http::{self, new_controller, RequestSlot};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::resource::Resource;

/// `:id` segment of the current route.
pub fn use_route_id() -> Signal<Option<String>> {
    let params = use_params_map();
    Signal::derive(move || params.with(|p| p.get("id")).filter(|id| !id.is_empty()))
}

pub fn details_title(resource: Resource, id: &str) -> String {
    format!("Détails de {} n°{}", resource.singular(), id)
}

/// Record of `resource` rendered as a key/value list. `children` render below
/// the list.
#[component]
pub fn EntityDetailsPage(
    resource: Resource,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let config = use_config();
    let get_url = join_url(&api_base(&config), &config.endpoints.resource(resource).get);
    let general_error = config.messages.general_error.clone();
    let route_id = use_route_id();

    let record = RwSignal::new(None::<Map<String, Value>>);
    let errors = RwSignal::new(Vec::<String>::new());
    let requests = StoredValue::new_local(RequestSlot::<AbortController>::default());

    Effect::new(move |_| {
        let Some(id) = route_id.get() else {
            return;
        };
        let Some(controller) = new_controller() else {
            return;
        };
        let signal = controller.signal();
        requests.update_value(|slot| slot.replace(controller));

        let url = with_id(&get_url, &id);
        let general_error = general_error.clone();
        spawn_local(async move {
            match http::fetch_value::<Map<String, Value>>(&url, Some(&signal), &general_error).await {
                Ok(map) => {
                    errors.set(Vec::new());
                    record.set(Some(map));
                }
                Err(e) if e.is_aborted() => {}
                Err(e) => errors.set(e.into_messages(&general_error)),
            }
        });
    });

    on_cleanup(move || requests.update_value(|slot| slot.cancel()));

    let title = details_title(resource, &route_id.get_untracked().unwrap_or_default());

    view! {
        <PageFrame page_id=resource.page_id(PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <Breadcrumb elements=resource_trail(resource, title) />
            <MessageBox kind=MessageKind::Errors messages=errors on_dismiss=clear_on_dismiss(errors) />
            <DetailsList data=record />
            {children.map(|c| c())}
        </PageFrame>
    }
}
