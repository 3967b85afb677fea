use contracts::domain::a008_planning::aggregate::GeneratedPlanning;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;

use crate::shared::api_utils::{api_base, join_url, with_id};
use crate::shared::components::message_box::{clear_on_dismiss, MessageBox, MessageKind};
use crate::shared::config::use_config;
use crate::shared::http::{self, new_controller, RequestSlot};

/// "Générer" button. Shows the generation warnings and the timetable HTML
/// returned by the backend.
#[component]
pub fn PlanningGenerator(#[prop(into)] planning_id: Signal<Option<String>>) -> impl IntoView {
    let config = use_config();
    let target = StoredValue::new((
        join_url(&api_base(&config), &config.endpoints.planning_generate),
        config.messages.general_error.clone(),
    ));

    let generated = RwSignal::new(None::<GeneratedPlanning>);
    let warnings = RwSignal::new(Vec::<String>::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let generating = RwSignal::new(false);
    let requests = StoredValue::new_local(RequestSlot::<AbortController>::default());

    let generate = move |_| {
        let Some(id) = planning_id.get_untracked() else {
            return;
        };
        let Some(controller) = new_controller() else {
            return;
        };
        let signal = controller.signal();
        requests.update_value(|slot| slot.replace(controller));

        let (url, general_error) = target.get_value();
        errors.set(Vec::new());
        warnings.set(Vec::new());
        generating.set(true);

        spawn_local(async move {
            let url = with_id(&url, &id);
            match http::fetch_value::<GeneratedPlanning>(&url, Some(&signal), &general_error).await {
                Ok(planning) => {
                    log::info!(
                        "planning {} generated, {} warning(s)",
                        id,
                        planning.warnings.len()
                    );
                    warnings.set(planning.warnings.clone());
                    generated.set(Some(planning));
                }
                Err(e) if e.is_aborted() => return,
                Err(e) => errors.set(e.into_messages(&general_error)),
            }
            generating.set(false);
        });
    };

    on_cleanup(move || requests.update_value(|slot| slot.cancel()));

    view! {
        <div class="planning-generator">
            <div class="page-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    attr:id="generate-planning"
                    on_click=generate
                    disabled=generating
                >
                    "Générer"
                </Button>
                <Show when=move || generating.get()>
                    <Spinner />
                </Show>
            </div>
            <MessageBox kind=MessageKind::Errors messages=errors on_dismiss=clear_on_dismiss(errors) />
            <MessageBox
                kind=MessageKind::Warnings
                messages=warnings
                on_dismiss=clear_on_dismiss(warnings)
            />
            {move || generated.with(|g| g.as_ref().map(|planning| {
                view! { <div class="planning__content" inner_html=planning.content_html.clone()></div> }
            }))}
        </div>
    }
}
