//! CardPreview - the business card face
//!
//! Cover block, avatar disc in the accent colour, name and bio, then any
//! contact details the profile carries.

use dioxus::prelude::*;

use crate::profile::CardProfile;

const PERSON_ICON_PATH: &str = "M15.75 9A3.75 3.75 0 0112 12.75 3.75 3.75 0 018.25 9 3.75 3.75 0 0112 5.25 3.75 3.75 0 0115.75 9zM4.5 18a7.5 7.5 0 0115 0v.75A2.25 2.25 0 0117.25 21H6.75A2.25 2.25 0 014.5 18.75V18z";

#[component]
pub fn CardPreview(profile: CardProfile) -> Element {
    let name = profile.display_name().to_string();
    let bio = profile.display_bio().to_string();
    let color = profile.display_color().to_string();
    let has_contacts = profile.phone.is_some() || profile.email.is_some() || !profile.links.is_empty();

    rsx! {
        div {
            style: "background: white; color: #111827; border-radius: 24px; padding: 24px; box-shadow: 0 10px 30px rgba(0,0,0,0.15); width: 320px; box-sizing: border-box; font-family: system-ui, -apple-system, sans-serif;",

            // Cover
            div {
                style: "background: #e5e7eb; border-radius: 16px; width: 100%; height: 128px;",
            }

            // Avatar
            div {
                style: "display: flex; justify-content: center; margin-top: -48px; margin-bottom: 16px;",
                div {
                    style: "width: 96px; height: 96px; border-radius: 50%; border: 4px solid white; display: flex; align-items: center; justify-content: center; color: white; background-color: {color};",
                    svg {
                        fill: "none",
                        view_box: "0 0 24 24",
                        stroke_width: "1.5",
                        stroke: "currentColor",
                        width: "48",
                        height: "48",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            d: PERSON_ICON_PATH,
                        }
                    }
                }
            }

            // Name and bio
            div {
                style: "text-align: center;",
                h2 {
                    style: "font-weight: 600; font-size: 18px; margin: 0 0 4px 0;",
                    "{name}"
                }
                p {
                    style: "font-size: 14px; color: #6b7280; margin: 0;",
                    "{bio}"
                }
            }

            if has_contacts {
                div {
                    style: "display: flex; flex-direction: column; gap: 8px; margin-top: 20px;",
                    if let Some(phone) = profile.phone.clone() {
                        a {
                            href: "tel:{phone}",
                            style: "display: block; text-align: center; padding: 8px; border-radius: 9999px; color: white; text-decoration: none; font-size: 14px; background-color: {color};",
                            "{phone}"
                        }
                    }
                    if let Some(email) = profile.email.clone() {
                        a {
                            href: "mailto:{email}",
                            style: "display: block; text-align: center; padding: 8px; border-radius: 9999px; border: 1px solid {color}; color: {color}; text-decoration: none; font-size: 14px;",
                            "{email}"
                        }
                    }
                    for link in profile.links.clone() {
                        a {
                            key: "{link.url}",
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            style: "display: block; text-align: center; padding: 8px; border-radius: 9999px; border: 1px solid #d1d5db; color: #374151; text-decoration: none; font-size: 14px;",
                            "{link.title}"
                        }
                    }
                }
            }
        }
    }
}
