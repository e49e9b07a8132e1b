use dioxus::prelude::*;

use crate::{
    config::Config,
    pages::{Home, NotFound, Subscribe},
};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/subscribe")]
    Subscribe {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root component: shares the [`Config`] and mounts the router.
#[component]
pub fn App() -> Element {
    use_context_provider(Config::default);

    rsx! {
        Router::<Route> {}
    }
}
