//! Alert Copy
//!
//! Keyed translations for the alerts shown after a dispatch. Spanish and
//! English ship built in; JSON files in a locale directory override them.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Language used when none is configured
pub const DEFAULT_LANGUAGE: &str = "es";

const ES: &[(&str, &str)] = &[
    ("alert.number_required.title", "Número requerido"),
    ("alert.number_required.body", "Ingresa un número telefónico válido."),
    ("alert.unsupported.title", "Acción no soportada"),
    ("alert.unsupported.call", "No es posible realizar llamadas desde este dispositivo."),
    ("alert.unsupported.sms", "No es posible enviar SMS desde este dispositivo."),
    ("alert.error.title", "Error"),
    ("alert.error.call", "Ocurrió un error al intentar iniciar la llamada."),
    ("alert.error.sms", "Ocurrió un error al intentar preparar el mensaje."),
];

const EN: &[(&str, &str)] = &[
    ("alert.number_required.title", "Number required"),
    ("alert.number_required.body", "Enter a valid phone number."),
    ("alert.unsupported.title", "Action not supported"),
    ("alert.unsupported.call", "This device cannot place calls."),
    ("alert.unsupported.sms", "This device cannot send SMS."),
    ("alert.error.title", "Error"),
    ("alert.error.call", "Something went wrong while starting the call."),
    ("alert.error.sms", "Something went wrong while preparing the message."),
];

/// Translations for one language
#[derive(Debug, Clone)]
pub struct Catalog {
    lang: String,
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Built-in copy for `lang`, falling back to Spanish
    pub fn builtin(lang: &str) -> Self {
        let table = match lang {
            "en" => EN,
            "es" => ES,
            other => {
                warn!("No built-in copy for '{}', using '{}'", other, DEFAULT_LANGUAGE);
                ES
            }
        };
        Self {
            lang: lang.to_string(),
            entries: table
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Built-in copy plus overrides from the standard locale directories
    pub fn load(lang: &str) -> Self {
        let locale_dirs = [
            dirs::data_local_dir().map(|p| p.join("dialkit/locale")),
            Some(PathBuf::from("locale")),
        ];
        Self::load_from(lang, locale_dirs.iter().flatten())
    }

    /// Built-in copy plus overrides from the first `<dir>/<lang>.json` found
    pub fn load_from<'a, I>(lang: &str, locale_dirs: I) -> Self
    where
        I: IntoIterator<Item = &'a PathBuf>,
    {
        let mut catalog = Self::builtin(lang);
        for dir in locale_dirs {
            if catalog.merge_file(&dir.join(format!("{}.json", lang))) {
                break;
            }
        }
        info!("🌐 Alert language: {}", catalog.lang);
        catalog
    }

    fn merge_file(&mut self, path: &Path) -> bool {
        let Ok(content) = std::fs::read_to_string(path) else {
            return false;
        };
        match serde_json::from_str::<HashMap<String, String>>(&content) {
            Ok(overrides) => {
                debug!("Loaded {} translations from {:?}", overrides.len(), path);
                self.entries.extend(overrides);
                true
            }
            Err(e) => {
                warn!("⚠️ Ignoring invalid locale file {:?}: {}", path, e);
                false
            }
        }
    }

    pub fn language(&self) -> &str {
        &self.lang
    }

    /// Translate a key; unknown keys come back unchanged
    pub fn tr(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin(DEFAULT_LANGUAGE)
    }
}
