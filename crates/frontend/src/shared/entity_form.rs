//! Create / edit page shared by every resource.
//!
//! `/{resource}/new` posts a new record, `/{resource}/edit/:id` loads the
//! record first and puts it back with its id. A successful save goes back to
//! the list.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;

use contracts::domain::common::EntityId;

use crate::shared::api_utils::{api_base, join_url, with_id};
use crate::shared::components::breadcrumb::{resource_trail, Breadcrumb};
use crate::shared::components::form_builder::{
    FieldChange, FieldDescriptor, FieldKind, FieldValue, FormBuilder, SelectOption,
    SubmitDescriptor,
};
use crate::shared::components::message_box::{clear_on_dismiss, MessageBox, MessageKind};
use crate::shared::config::use_config;
use crate::shared::entity_details::use_route_id;
use crate::shared::http::{self, new_controller, Mutation, RequestSlot};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use crate::shared::resource::Resource;
use crate::shared::response_handler::handle_response;

/// Editable state of one form page.
pub trait EntityForm: Clone + Default + Send + Sync + 'static {
    /// Record returned by the `get` endpoint
    type Record: DeserializeOwned + 'static;
    /// Body of the create / update calls
    type Dto: Serialize + 'static;

    const RESOURCE: Resource;

    fn from_record(record: &Self::Record) -> Self;

    /// Apply one edit. Unknown names are ignored.
    fn apply(&mut self, change: FieldChange);

    /// Current value of the field `name`.
    fn value(&self, name: &str) -> FieldValue;

    /// Body to send; `id` is set when updating.
    fn to_dto(&self, id: Option<EntityId>) -> Self::Dto;
}

/// What a form page hands to its field builder.
pub struct FormBinding<S: EntityForm> {
    pub state: RwSignal<S>,
    pub on_change: Callback<FieldChange>,
    pub errors: RwSignal<Vec<String>>,
}

impl<S: EntityForm> Clone for FormBinding<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: EntityForm> Copy for FormBinding<S> {}

impl<S: EntityForm> FormBinding<S> {
    /// Binding whose change handler applies edits to `state`.
    pub fn new(state: RwSignal<S>, errors: RwSignal<Vec<String>>) -> Self {
        Self {
            state,
            on_change: Callback::new(move |change: FieldChange| state.update(|s| s.apply(change))),
            errors,
        }
    }

    /// Field `name` bound to the form state.
    pub fn field(&self, kind: FieldKind, name: &'static str) -> FieldDescriptor {
        let state = self.state;
        FieldDescriptor::new(
            kind,
            name,
            Signal::derive(move || state.with(|s| s.value(name))),
            self.on_change,
        )
    }

    /// Options loaded from the `list` endpoint of `resource`.
    pub fn resource_options<T>(
        &self,
        resource: Resource,
        to_option: fn(&T) -> SelectOption,
        preselect: Option<&'static str>,
    ) -> Signal<Vec<SelectOption>>
    where
        T: DeserializeOwned + 'static,
    {
        let config = use_config();
        let path = config.endpoints.resource(resource).list.clone();
        self.options_at(&path, to_option, preselect)
    }

    /// Options loaded from `path`. When `preselect` names a single-choice
    /// field that is still empty, the first option is chosen.
    pub fn options_at<T>(
        &self,
        path: &str,
        to_option: fn(&T) -> SelectOption,
        preselect: Option<&'static str>,
    ) -> Signal<Vec<SelectOption>>
    where
        T: DeserializeOwned + 'static,
    {
        let config = use_config();
        let url = join_url(&api_base(&config), path);
        let general_error = config.messages.general_error.clone();
        let options = RwSignal::new(Vec::<SelectOption>::new());
        let requests = StoredValue::new_local(RequestSlot::<AbortController>::default());
        let state = self.state;
        let errors = self.errors;

        if let Some(controller) = new_controller() {
            let signal = controller.signal();
            requests.update_value(|slot| slot.replace(controller));
            spawn_local(async move {
                match http::fetch_value::<Vec<T>>(&url, Some(&signal), &general_error).await {
                    Ok(items) => {
                        let loaded: Vec<SelectOption> = items.iter().map(to_option).collect();
                        if let (Some(name), Some(first)) = (preselect, loaded.first()) {
                            state.update(|s| {
                                if s.value(name).text().is_empty() {
                                    s.apply(FieldChange {
                                        name: name.to_string(),
                                        value: FieldValue::Text(first.value.clone()),
                                    });
                                }
                            });
                        }
                        options.set(loaded);
                    }
                    Err(e) if e.is_aborted() => {}
                    Err(e) => errors.set(e.into_messages(&general_error)),
                }
            });
        }
        on_cleanup(move || requests.update_value(|slot| slot.cancel()));

        options.into()
    }
}

/// Breadcrumb title of a form page.
pub fn form_title(resource: Resource, id: Option<&str>) -> String {
    match id {
        None => {
            let what = resource
                .create_label()
                .trim_start_matches("Créer ")
                .to_string();
            format!("Création d'{what}")
        }
        Some(id) => {
            let singular = resource.singular();
            let of = match singular.strip_prefix("le ") {
                Some(rest) => format!("du {rest}"),
                None => format!("de {singular}"),
            };
            format!("Mise à jour {of} n°{id}")
        }
    }
}

pub fn entity_form_page<S, F>(fields: F) -> impl IntoView
where
    S: EntityForm,
    F: FnOnce(FormBinding<S>) -> Vec<FieldDescriptor>,
{
    let resource = S::RESOURCE;
    let config = use_config();
    let base = api_base(&config);
    let endpoints = config.endpoints.resource(resource);
    let get_url = join_url(&base, &endpoints.get);
    let create_url = join_url(&base, &endpoints.create);
    let update_url = join_url(&base, &endpoints.update);
    let general_error = config.messages.general_error.clone();
    let urls = StoredValue::new((create_url, update_url, general_error.clone()));

    let route_id = use_route_id();
    let state = RwSignal::new(S::default());
    let errors = RwSignal::new(Vec::<String>::new());
    let binding = FormBinding::new(state, errors);

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
            match http::fetch_value::<S::Record>(&url, Some(&signal), &general_error).await {
                Ok(record) => state.set(S::from_record(&record)),
                Err(e) if e.is_aborted() => {}
                Err(e) => errors.set(e.into_messages(&general_error)),
            }
        });
    });
    on_cleanup(move || requests.update_value(|slot| slot.cancel()));

    let navigate = StoredValue::new_local(use_navigate());
    let submit = Callback::new(move |_: ()| {
        errors.set(Vec::new());
        let (create_url, update_url, general_error) = urls.get_value();

        let (mutation, url, id) = match route_id.get_untracked() {
            None => (Mutation::Create, create_url, None),
            Some(raw) => match raw.parse::<EntityId>() {
                Ok(id) => (Mutation::Update, update_url, Some(id)),
                Err(_) => {
                    log::warn!("invalid {} id in route: {raw}", resource.key());
                    errors.set(vec![general_error]);
                    return;
                }
            },
        };
        let dto = state.with_untracked(|s| s.to_dto(id));

        spawn_local(async move {
            match http::send_json::<_, serde_json::Value>(mutation, &url, &dto).await {
                Ok(reply) => {
                    handle_response(
                        reply,
                        &general_error,
                        |messages| errors.set(messages),
                        || navigate.with_value(|nav| nav(resource.route(), Default::default())),
                    );
                }
                Err(e) => errors.set(e.into_messages(&general_error)),
            }
        });
    });

    let title = form_title(resource, route_id.get_untracked().as_deref());
    let submit = SubmitDescriptor::save(resource.save_id(), submit);
    let fields = fields(binding);

    view! {
        <PageFrame page_id=resource.page_id(PAGE_CAT_FORM) category=PAGE_CAT_FORM>
            <Breadcrumb elements=resource_trail(resource, title) />
            <MessageBox kind=MessageKind::Errors messages=errors on_dismiss=clear_on_dismiss(errors) />
            <FormBuilder fields=fields submit=submit />
        </PageFrame>
    }
}
