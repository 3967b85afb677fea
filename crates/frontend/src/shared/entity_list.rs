//! Paginated list page shared by every resource.
//!
//! Each fetch (page change, reload after delete) aborts the one before it and
//! unmounting aborts the one in flight, so only the latest reply reaches the
//! state.

use leptos::prelude::*;
use thaw::Spinner;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;

use crate::shared::api_utils::{api_base, join_url, with_id, with_query};
use crate::shared::components::breadcrumb::{Breadcrumb, Crumb};
use crate::shared::components::message_box::{MessageBox, MessageKind};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::Paginator;
use crate::shared::components::table::{DataTable, TableRow};
use crate::shared::config::use_config;
use crate::shared::http::{self, new_controller, RequestSlot};
use crate::shared::icons::icon;
use crate::shared::list_state::{ListQuery, ListState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::Resource;
use crate::shared::response_handler::handle_response;

/// A record type that can be listed in a [`DataTable`].
pub trait ListResource: DeserializeOwned + Clone + Send + Sync + 'static {
    const RESOURCE: Resource;

    /// Column titles, `Actions` included.
    fn header() -> Vec<String>;

    /// One actions row; the first cell is the identifier.
    fn to_row(&self) -> TableRow;
}

/// Absolute URLs of one resource.
#[derive(Debug, Clone)]
struct ListUrls {
    list: String,
    count: String,
    delete: String,
    general_error: String,
}

/// Fetch one page and the total count.
async fn fetch_page<T: ListResource>(
    urls: &ListUrls,
    query: ListQuery,
    signal: Option<&web_sys::AbortSignal>,
) -> Result<(Vec<T>, u64), http::RequestError> {
    let list_url = with_query(&urls.list, &query);
    let rows = http::fetch_value::<Vec<T>>(&list_url, signal, &urls.general_error).await?;
    let count = http::fetch_value::<u64>(&urls.count, signal, &urls.general_error).await?;
    Ok((rows, count))
}

pub fn entity_list_page<T: ListResource>() -> impl IntoView {
    let resource = T::RESOURCE;
    let config = use_config();
    let base = api_base(&config);
    let endpoints = config.endpoints.resource(resource);
    let urls = StoredValue::new(ListUrls {
        list: join_url(&base, &endpoints.list),
        count: join_url(&base, &endpoints.count),
        delete: join_url(&base, &endpoints.delete),
        general_error: config.messages.general_error.clone(),
    });

    let state = RwSignal::new(ListState::<T>::new(config.page_size()));
    let reload = RwSignal::new(0u32);
    let requests = StoredValue::new_local(RequestSlot::<AbortController>::default());

    let load = move || {
        let Some(controller) = new_controller() else {
            log::error!("AbortController unavailable");
            return;
        };
        let signal = controller.signal();
        requests.update_value(|slot| slot.replace(controller));

        let query = state.with_untracked(|s| s.query());
        state.update(|s| s.start_loading());
        let urls = urls.get_value();

        spawn_local(async move {
            match fetch_page::<T>(&urls, query, Some(&signal)).await {
                Err(e) if e.is_aborted() => {}
                Err(e) => {
                    let messages = e.into_messages(&urls.general_error);
                    state.update(|s| s.apply_errors(messages));
                }
                Ok((rows, count)) => {
                    let clamped = state
                        .try_update(|s| {
                            let requested = s.current_page;
                            s.apply_count(count);
                            s.apply_rows(rows);
                            requested != s.current_page
                        })
                        .unwrap_or(false);
                    // Requested page vanished (last row of the last page deleted)
                    if clamped {
                        reload.update(|n| *n += 1);
                    }
                }
            }
        });
    };

    Effect::new(move |_| {
        reload.track();
        load();
    });

    on_cleanup(move || requests.update_value(|slot| slot.cancel()));

    let on_select = Callback::new(move |page: usize| {
        if state.try_update(|s| s.go_to(page)).unwrap_or(false) {
            reload.update(|n| *n += 1);
        }
    });

    let on_delete = Callback::new(move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&resource.delete_confirmation(&id))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let urls = urls.get_value();
        spawn_local(async move {
            state.update(|s| s.clear_errors());
            match http::delete(&with_id(&urls.delete, &id)).await {
                Ok(reply) => {
                    handle_response(
                        reply,
                        &urls.general_error,
                        |messages| state.update(|s| s.apply_errors(messages)),
                        || {
                            log::info!("{} {} deleted", resource.key(), id);
                            reload.update(|n| *n += 1);
                        },
                    );
                }
                Err(e) => {
                    let messages = e.into_messages(&urls.general_error);
                    state.update(|s| s.apply_errors(messages));
                }
            }
        });
    });

    let rows = Signal::derive(move || {
        state.with(|s| s.rows.iter().map(T::to_row).collect::<Vec<TableRow>>())
    });
    let errors = Signal::derive(move || state.with(|s| s.errors.clone()));
    let current_page = Signal::derive(move || state.with(|s| s.current_page));
    let pages_count = Signal::derive(move || state.with(|s| s.pages_count));
    let is_loading = move || state.with(|s| s.is_loading);
    let table_id = format!("table-{}", resource.route().trim_start_matches('/'));

    view! {
        <PageFrame page_id=resource.page_id(PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <Breadcrumb elements=vec![Crumb::current(resource.title())] />
            <PageHeader title=resource.title()>
                <a
                    id=format!("create-{}", resource.key())
                    class="button button--primary"
                    href=resource.new_route()
                >
                    {icon("plus")}
                    {resource.create_label()}
                </a>
            </PageHeader>
            <MessageBox
                kind=MessageKind::Errors
                messages=errors
                on_dismiss=Callback::new(move |_| state.update(|s| s.clear_errors()))
            />
            <Show when=is_loading>
                <div class="page__loading">
                    <Spinner />
                </div>
            </Show>
            <DataTable
                id=table_id
                header=T::header()
                rows=rows
                edit=resource.edit_base()
                details=resource.details_base()
                on_delete=on_delete
            />
            <Paginator current_page=current_page pages_count=pages_count on_select=on_select />
        </PageFrame>
    }
}
