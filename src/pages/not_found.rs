use dioxus::prelude::*;

use crate::{config::Config, messages::Text, routes::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let locale = use_context::<Config>().locale;
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h1 { {Text::PageNotFound.localize(locale)} }
            code { "/{path}" }
            p {
                Link { to: Route::Home {}, {Text::BackHome.localize(locale)} }
            }
        }
    }
}
