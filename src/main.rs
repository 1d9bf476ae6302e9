mod card;
mod pages;
mod primitives;
mod profile;
mod transform;

use dioxus::prelude::*;
use log::Level;
use pages::{Dashboard, Landing, Preview};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/preview")]
    Preview {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    log::info!("starting tapcard");
    dioxus::launch(App);
}
