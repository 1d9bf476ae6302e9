//! Dashboard - card editor with a live preview
//!
//! Edits stay in component state until Save writes them to local storage,
//! where the preview page picks them up.

use dioxus::prelude::*;

use crate::Route;
use crate::card::{CardPreview, InteractiveCard};
use crate::profile::{BrowserStore, CardProfile, StoreError};

const INPUT_STYLE: &str = "border: 1px solid #d1d5db; border-radius: 4px; padding: 8px 12px; font-size: 14px;";
const LABEL_STYLE: &str = "font-weight: 500;";
const NOTE_MS: u32 = 1500;

/// Feedback shown after Save. Each message gets a new generation so a
/// timer from an earlier save cannot clear a later one.
#[derive(Debug, Clone, Default, PartialEq)]
struct SaveNote {
    text: Option<String>,
    generation: u64,
}

impl SaveNote {
    fn show(&mut self, text: String) -> u64 {
        self.generation += 1;
        self.text = Some(text);
        self.generation
    }

    /// Clear the note, but only if it is still the one `generation` put up.
    fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.text = None;
        }
    }
}

fn save_profile(profile: &CardProfile) -> Result<(), StoreError> {
    let store = BrowserStore::open()?;
    profile.save(&store)
}

fn load_profile() -> CardProfile {
    match BrowserStore::open().and_then(|store| CardProfile::load(&store)) {
        Ok(profile) => profile,
        Err(e) => {
            log::warn!("starting from an empty card: {e}");
            CardProfile::default()
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    use_hook(|| log::info!("rendering dashboard page"));
    let mut profile = use_signal(load_profile);
    let mut note = use_signal(SaveNote::default);

    let current = profile();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; min-height: 100vh; padding: 32px; gap: 40px; box-sizing: border-box; font-family: system-ui, -apple-system, sans-serif;",

            // Editor column
            div {
                style: "flex: 1; min-width: 280px; display: flex; flex-direction: column; gap: 16px;",
                h1 {
                    style: "font-size: 30px; font-weight: 700; margin: 0;",
                    "Edit your card"
                }

                div {
                    style: "display: flex; flex-direction: column; gap: 8px;",
                    label { style: LABEL_STYLE, r#for: "name", "Name" }
                    input {
                        id: "name",
                        style: INPUT_STYLE,
                        placeholder: "John Doe",
                        value: "{current.name}",
                        oninput: move |e: Event<FormData>| profile.write().name = e.value(),
                    }
                }

                div {
                    style: "display: flex; flex-direction: column; gap: 8px;",
                    label { style: LABEL_STYLE, r#for: "bio", "Bio" }
                    input {
                        id: "bio",
                        style: INPUT_STYLE,
                        placeholder: "What do you do?",
                        value: "{current.bio}",
                        oninput: move |e: Event<FormData>| profile.write().bio = e.value(),
                    }
                }

                div {
                    style: "display: flex; flex-direction: column; gap: 8px;",
                    label { style: LABEL_STYLE, r#for: "color", "Accent Colour" }
                    input {
                        id: "color",
                        r#type: "color",
                        style: "border: 1px solid #d1d5db; border-radius: 4px; width: 48px; height: 48px; padding: 0;",
                        value: "{current.color}",
                        oninput: move |e: Event<FormData>| profile.write().color = e.value(),
                    }
                }

                div {
                    style: "display: flex; gap: 12px; align-items: center;",
                    button {
                        style: "padding: 10px 24px; border: none; border-radius: 9999px; color: white; font-weight: 500; cursor: pointer; background-color: #6E35E9;",
                        onclick: move |_| {
                            let msg = match save_profile(&profile.read()) {
                                Ok(()) => "Saved".to_string(),
                                Err(e) => {
                                    log::warn!("saving card failed: {e}");
                                    format!("Could not save: {e}")
                                }
                            };
                            let generation = note.write().show(msg);
                            spawn(async move {
                                gloo_timers::future::TimeoutFuture::new(NOTE_MS).await;
                                note.write().expire(generation);
                            });
                        },
                        "Save"
                    }
                    Link {
                        to: Route::Preview {},
                        style: "color: #6E35E9; font-size: 14px;",
                        "Open preview \u{2192}"
                    }
                    if let Some(text) = note().text {
                        span {
                            id: "save-note",
                            style: "color: #6b7280; font-size: 14px;",
                            "{text}"
                        }
                    }
                }
            }

            // Preview column
            div {
                style: "flex: 1; min-width: 280px; display: flex; align-items: center; justify-content: center;",
                InteractiveCard {
                    CardPreview { profile: current.clone() }
                }
            }
        }
    }
}
