//! Card profile - what the editor produces and the preview shows
//!
//! Persisted as one key per field so older entries missing newer fields
//! still load.

pub mod store;

use serde::{Deserialize, Serialize};

pub use store::{BrowserStore, ProfileStore, StoreError};

/// Accent used when none has been picked
pub const DEFAULT_COLOR: &str = "#6E35E9";

const NAME_PLACEHOLDER: &str = "Name Last name";
const BIO_PLACEHOLDER: &str = "Bio";

pub const KEY_NAME: &str = "tapcard_name";
pub const KEY_BIO: &str = "tapcard_bio";
pub const KEY_COLOR: &str = "tapcard_color";
pub const KEY_PHONE: &str = "tapcard_phone";
pub const KEY_EMAIL: &str = "tapcard_email";
pub const KEY_LINKS: &str = "tapcard_links";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLink {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardProfile {
    pub name: String,
    pub bio: String,
    pub color: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub links: Vec<CardLink>,
}

impl Default for CardProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            bio: String::new(),
            color: DEFAULT_COLOR.to_string(),
            phone: None,
            email: None,
            links: Vec::new(),
        }
    }
}

impl CardProfile {
    /// Name as shown on the card
    pub fn display_name(&self) -> &str {
        non_blank(&self.name).unwrap_or(NAME_PLACEHOLDER)
    }

    pub fn display_bio(&self) -> &str {
        non_blank(&self.bio).unwrap_or(BIO_PLACEHOLDER)
    }

    pub fn display_color(&self) -> &str {
        non_blank(&self.color).unwrap_or(DEFAULT_COLOR)
    }

    /// Read every field from `store`. Missing or empty keys keep their
    /// default; a links value that is not a JSON list is ignored.
    pub fn load<S: ProfileStore>(store: &S) -> Result<Self, StoreError> {
        let mut profile = Self::default();
        let get = |key: &str| -> Result<Option<String>, StoreError> {
            Ok(store.get(key)?.filter(|v| !v.is_empty()))
        };
        if let Some(name) = get(KEY_NAME)? {
            profile.name = name;
        }
        if let Some(bio) = get(KEY_BIO)? {
            profile.bio = bio;
        }
        if let Some(color) = get(KEY_COLOR)? {
            profile.color = color;
        }
        profile.phone = get(KEY_PHONE)?;
        profile.email = get(KEY_EMAIL)?;
        if let Some(raw) = get(KEY_LINKS)? {
            match serde_json::from_str::<Vec<CardLink>>(&raw) {
                Ok(links) => profile.links = links,
                Err(e) => log::warn!("ignoring malformed {KEY_LINKS}: {e}"),
            }
        }
        Ok(profile)
    }

    /// Write every field to `store`. Unset optional fields are removed.
    pub fn save<S: ProfileStore>(&self, store: &S) -> Result<(), StoreError> {
        store.set(KEY_NAME, &self.name)?;
        store.set(KEY_BIO, &self.bio)?;
        store.set(KEY_COLOR, &self.color)?;
        match &self.phone {
            Some(phone) => store.set(KEY_PHONE, phone)?,
            None => store.remove(KEY_PHONE)?,
        }
        match &self.email {
            Some(email) => store.set(KEY_EMAIL, email)?,
            None => store.remove(KEY_EMAIL)?,
        }
        store.set(KEY_LINKS, &serde_json::to_string(&self.links)?)?;
        Ok(())
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
