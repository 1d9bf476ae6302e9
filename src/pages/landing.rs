use dioxus::prelude::*;
use crate::Route;
use crate::card::{CardPreview, InteractiveCard};
use crate::profile::CardProfile;

#[component]
pub fn Landing() -> Element {
    use_hook(|| log::info!("rendering landing page"));
    let sample = CardProfile {
        bio: "Your bio".to_string(),
        ..CardProfile::default()
    };

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 32px; padding: 32px; text-align: center; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "font-size: 36px; font-weight: 700; margin: 0;",
                "TapCard"
            }
            p {
                style: "max-width: 576px; color: #4b5563; margin: 0; line-height: 1.6;",
                "Build and share your modern digital business card. Customise your profile, choose a colour palette and link all of your contact options in one place."
            }

            InteractiveCard {
                CardPreview { profile: sample }
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; margin-top: 16px;",
                Link {
                    to: Route::Dashboard {},
                    style: "display: inline-block; padding: 12px 24px; border-radius: 9999px; color: white; text-decoration: none; font-weight: 500; background-color: #6E35E9;",
                    "Create your card"
                }
                Link {
                    to: Route::Preview {},
                    style: "display: inline-block; padding: 12px 24px; border-radius: 9999px; border: 1px solid #6E35E9; color: #6E35E9; text-decoration: none; font-weight: 500;",
                    "Live preview"
                }
            }
        }
    }
}
