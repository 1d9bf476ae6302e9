//! Preview - read-only view of the saved card

use dioxus::prelude::*;

use crate::card::{CardPreview, InteractiveCard};
use crate::profile::{BrowserStore, CardProfile};

#[component]
pub fn Preview() -> Element {
    use_hook(|| log::info!("rendering preview page"));
    let mut profile = use_signal(CardProfile::default);

    // Storage is read once after mount; failures leave the placeholders
    use_effect(move || {
        match BrowserStore::open().and_then(|store| CardProfile::load(&store)) {
            Ok(loaded) => profile.set(loaded),
            Err(e) => log::error!("could not read saved card: {e}"),
        }
    });

    let current = profile();

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 32px; font-family: system-ui, -apple-system, sans-serif;",
            h1 {
                style: "font-size: 30px; font-weight: 700; margin: 0 0 24px 0;",
                "Your Card Preview"
            }
            InteractiveCard {
                CardPreview { profile: current }
            }
            p {
                style: "margin-top: 24px; color: #6b7280; font-size: 14px; max-width: 448px; text-align: center;",
                "This is how others will see your card. Share this page\u{2019}s URL to let people connect with you instantly."
            }
        }
    }
}
