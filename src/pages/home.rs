use dioxus::prelude::*;

use crate::{config::Config, messages::Text, routes::Route};

#[component]
pub fn Home() -> Element {
    let locale = use_context::<Config>().locale;

    rsx! {
        div { class: "home",
            h1 { {Text::Title.localize(locale)} }
            p { {Text::HomeIntro.localize(locale)} }
            Link { to: Route::Subscribe {}, {Text::OpenForm.localize(locale)} }
        }
    }
}
