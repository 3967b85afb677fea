use contracts::system::options::Options;
use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;

use super::state::{split_options, OptionsFormState};
use crate::shared::api_utils::{api_base, join_url};
use crate::shared::components::breadcrumb::{Breadcrumb, Crumb};
use crate::shared::components::form_builder::{
    FieldChange, FieldDescriptor, FieldKind, FormBuilder, SelectOption, SubmitDescriptor,
};
use crate::shared::components::message_box::{clear_on_dismiss, MessageBox, MessageKind};
use crate::shared::config::use_config;
use crate::shared::http::{self, new_controller, Mutation, RequestSlot};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::response_handler::handle_response;

#[component]
#[allow(non_snake_case)]
pub fn OptionsPage() -> impl IntoView {
    let config = use_config();
    let base = api_base(&config);
    let options_url = join_url(&base, &config.endpoints.options);
    let split_url = join_url(&base, &config.endpoints.options_split_values);
    let general_error = config.messages.general_error.clone();
    let saved_message = config.messages.options_saved.clone();

    let state = RwSignal::new(OptionsFormState::default());
    let split_values = RwSignal::new(vec![SelectOption::from("En cours de chargement...")]);
    let errors = RwSignal::new(Vec::<String>::new());
    let confirmation = RwSignal::new(Vec::<String>::new());
    let requests = StoredValue::new_local(RequestSlot::<AbortController>::default());

    if let Some(controller) = new_controller() {
        let signal = controller.signal();
        requests.update_value(|slot| slot.replace(controller));
        let options_url = options_url.clone();
        let general_error = general_error.clone();

        spawn_local(async move {
            match http::fetch_value::<Options>(&options_url, Some(&signal), &general_error).await {
                Ok(options) => state.set(OptionsFormState::from_options(&options)),
                Err(e) if e.is_aborted() => return,
                Err(e) => errors.set(e.into_messages(&general_error)),
            }
            match http::fetch_value::<Vec<Value>>(&split_url, Some(&signal), &general_error).await {
                Ok(values) => split_values.set(split_options(&values)),
                Err(e) if e.is_aborted() => {}
                Err(e) => errors.set(e.into_messages(&general_error)),
            }
        });
    }
    on_cleanup(move || requests.update_value(|slot| slot.cancel()));

    let target = StoredValue::new((options_url, general_error, saved_message));
    let save = Callback::new(move |_: ()| {
        errors.set(Vec::new());
        confirmation.set(Vec::new());
        let body = state.with_untracked(OptionsFormState::to_options);
        let (url, general_error, saved_message) = target.get_value();

        spawn_local(async move {
            match http::send_json::<_, Value>(Mutation::Update, &url, &body).await {
                Ok(reply) => {
                    handle_response(
                        reply,
                        &general_error,
                        |messages| errors.set(messages),
                        || {
                            log::info!("options saved");
                            confirmation.set(vec![saved_message]);
                        },
                    );
                }
                Err(e) => errors.set(e.into_messages(&general_error)),
            }
        });
    });

    let on_change = Callback::new(move |change: FieldChange| state.update(|s| s.apply(change)));
    let field = move |kind: FieldKind, name: &'static str| {
        FieldDescriptor::new(
            kind,
            name,
            Signal::derive(move || state.with(|s| s.value(name))),
            on_change,
        )
    };
    let fields = vec![
        field(FieldKind::Text, "startHourPlanning")
            .label("Heure de début d'un emploi du temps"),
        field(FieldKind::Text, "endHourPlanning")
            .label("Heure de fin d'un emploi du temps"),
        field(FieldKind::Select, "splitPlanning")
            .label("Découpage en minutes d'un emploi du temps")
            .options(split_values.into()),
    ];

    view! {
        <PageFrame page_id="sys_options--system" category=PAGE_CAT_SYSTEM>
            <Breadcrumb elements=vec![Crumb::current("Options")] />
            <MessageBox kind=MessageKind::Errors messages=errors on_dismiss=clear_on_dismiss(errors) />
            <MessageBox
                kind=MessageKind::Confirmation
                messages=confirmation
                on_dismiss=clear_on_dismiss(confirmation)
            />
            <FormBuilder fields=fields submit=SubmitDescriptor::save("save-options", save) />
        </PageFrame>
    }
}
