use dioxus::prelude::*;

use crate::{
    backend::BackendClient,
    config::Config,
    form::{Action, FormState},
    messages::Text,
};

/// Start `action` if the form allows it and settle it once the backend answers.
///
/// The signal is only written before and after the request, never across it.
fn submit(mut form: Signal<FormState>, client: BackendClient, action: Action) {
    let Some(request) = form.write().begin(action) else {
        return;
    };

    spawn(async move {
        let reply = request.send(&client).await;
        form.write().settle(request.action(), reply);
    });
}

#[component]
pub fn Subscribe() -> Element {
    let config = use_context::<Config>();
    let client = use_hook(|| BackendClient::new(config.backend_base.clone()));
    let mut form = use_signal(|| FormState::new(config.locale));

    let state = form.read().clone();
    let busy = state.busy;
    let label = |text: Text| {
        if busy {
            state.text(Text::Processing)
        } else {
            state.text(text)
        }
    };

    let subscribe_client = client.clone();
    let resolve_client = client;

    rsx! {
        div { class: "subscribe-container",
            h1 { {state.text(Text::Title)} }

            div { class: "subscribe-card",
                label { {state.text(Text::UrlLabel)} }

                input {
                    r#type: "text",
                    value: "{state.url}",
                    placeholder: state.text(Text::UrlPlaceholder),
                    oninput: move |event| form.write().url = event.value(),
                }

                div { style: "display: flex; gap: 1rem;",
                    button {
                        class: "subscribe-btn",
                        disabled: busy,
                        onclick: move |_| submit(form, subscribe_client.clone(), Action::Subscribe),
                        {label(Text::SubscribeButton)}
                    }
                    button {
                        class: "get-channel-btn",
                        disabled: busy,
                        onclick: move |_| submit(form, resolve_client.clone(), Action::ResolveChannelId),
                        {label(Text::ResolveButton)}
                    }
                }

                if let Some(message) = state.message.as_deref() {
                    div { class: "message", "{message}" }
                }

                if let Some(channel_id) = state.channel_id.as_deref() {
                    div { class: "channel-id",
                        p { {state.text(Text::ChannelIdLabel)} }
                        p { "{channel_id}" }
                    }
                }
            }
        }
    }
}
