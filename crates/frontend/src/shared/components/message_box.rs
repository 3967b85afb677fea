use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Errors,
    Warnings,
    Confirmation,
}

impl MessageKind {
    fn intent(&self) -> MessageBarIntent {
        match self {
            MessageKind::Errors => MessageBarIntent::Error,
            MessageKind::Warnings => MessageBarIntent::Warning,
            MessageKind::Confirmation => MessageBarIntent::Success,
        }
    }

    /// CSS modifier, e.g. `message message--errors`
    pub fn class(&self) -> &'static str {
        match self {
            MessageKind::Errors => "message message--errors",
            MessageKind::Warnings => "message message--warnings",
            MessageKind::Confirmation => "message message--confirmation",
        }
    }
}

/// Banner listing `messages`. Renders nothing while the list is empty.
/// The close button shows when `on_dismiss` is given.
#[component]
pub fn MessageBox(
    kind: MessageKind,
    #[prop(into)] messages: Signal<Vec<String>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || !messages.with(Vec::is_empty)>
            <div class=kind.class()>
                <MessageBar intent=kind.intent()>
                    <MessageBarBody>
                        <ul>
                            {move || messages.get().into_iter()
                                .map(|m| view! { <li>{m}</li> })
                                .collect_view()}
                        </ul>
                        {on_dismiss.map(|cb| view! {
                            <Button
                                appearance=ButtonAppearance::Transparent
                                size=ButtonSize::Small
                                class="message__close"
                                on_click=move |_| cb.run(())
                            >
                                "×"
                            </Button>
                        })}
                    </MessageBarBody>
                </MessageBar>
            </div>
        </Show>
    }
}

/// Dismiss handler that empties `messages`.
pub fn clear_on_dismiss(messages: RwSignal<Vec<String>>) -> Callback<()> {
    Callback::new(move |_| messages.set(Vec::new()))
}
