//! Translated UI strings with plural support.
//!
//! Catalogs are optional TOML files keyed by message id, looked up per
//! locale under the XDG data directory. Any failure while locating or
//! reading a catalog falls back to the untranslated source strings; the
//! integration keeps working without translations.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use tracing::debug;

/// Singular/plural translations for one message id.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PluralForms {
    /// Form used when the count is exactly one
    pub one: String,

    /// Form used for every other count
    pub other: String,
}

/// Message catalog for the current locale.
///
/// `gettext` and `ngettext` return the source string whenever no
/// translation is present, so an empty catalog is the identity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    messages: HashMap<String, String>,

    #[serde(default)]
    plurals: HashMap<String, PluralForms>,
}

impl Catalog {
    /// Identity catalog: every lookup returns the source string
    pub fn source() -> Self {
        Self::default()
    }

    /// Catalog for the locale in the environment, or the identity catalog
    /// when none can be loaded.
    pub fn from_env() -> Self {
        match locale_tag() {
            Some(tag) => Self::load(&tag).unwrap_or_else(Self::source),
            None => Self::source(),
        }
    }

    fn load(tag: &str) -> Option<Self> {
        let path = dirs::data_dir()?
            .join("mconnect-send/locale")
            .join(format!("{tag}.toml"));

        let contents = fs::read_to_string(&path).ok()?;
        match toml::from_str(&contents) {
            Ok(catalog) => {
                debug!(path = %path.display(), "loaded translation catalog");
                Some(catalog)
            }
            Err(e) => {
                debug!(path = %path.display(), "ignoring unreadable catalog: {e}");
                None
            }
        }
    }

    /// Translation for `msgid`, or `msgid` itself
    pub fn gettext(&self, msgid: &str) -> String {
        self.messages
            .get(msgid)
            .cloned()
            .unwrap_or_else(|| msgid.to_string())
    }

    /// Translation for a counted message, keyed by the singular form.
    ///
    /// The singular is used for exactly one item and the plural otherwise;
    /// no further numeric agreement rules apply.
    pub fn ngettext(&self, singular: &str, plural: &str, n: u64) -> String {
        if let Some(forms) = self.plurals.get(singular) {
            return if n == 1 {
                forms.one.clone()
            } else {
                forms.other.clone()
            };
        }

        if n == 1 {
            singular.to_string()
        } else {
            plural.to_string()
        }
    }
}

fn locale_tag() -> Option<String> {
    let raw = std::env::var("LC_MESSAGES")
        .or_else(|_| std::env::var("LANG"))
        .ok()?;

    normalize_locale(&raw).map(str::to_string)
}

// "de_DE.UTF-8" and "de_DE@euro" carry encoding/modifier suffixes the
// catalog files are not named with.
fn normalize_locale(raw: &str) -> Option<&str> {
    let tag = raw.split(|c| c == '.' || c == '@').next()?;
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        None
    } else {
        Some(tag)
    }
}
