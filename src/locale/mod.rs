//! Localization for all user-facing shell messages.
//!
//! Translations live in one flat JSON bundle per supported language, embedded
//! into the binary. Lookup falls back from the active language to English and
//! finally to the key itself, so a missing translation is visible but never a
//! failure. Message templates interpolate `{name}` placeholders.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::ShellError;

/// All languages the game itself can be set to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
    Fr,
    Pl,
    Ru,
}

/// Every [`Language`] variant, for exhaustive iteration.
pub const ALL_LANGUAGES: [Language; 5] = [
    Language::En,
    Language::De,
    Language::Fr,
    Language::Pl,
    Language::Ru,
];

/// Languages that ship with a UI translation bundle.
pub const SUPPORTED_LANGUAGES: [Language; 2] = [Language::En, Language::De];

/// The fallback language every lookup ultimately resolves against.
pub const FALLBACK_LANGUAGE: Language = Language::En;

impl Language {
    /// Lowercase locale identifier, stable for config files and bundle lookup.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Pl => "pl",
            Self::Ru => "ru",
        }
    }

    /// Country code used to render the language flag in the UI.
    pub const fn as_country_code(self) -> &'static str {
        match self {
            Self::En => "gb",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Pl => "pl",
            Self::Ru => "ru",
        }
    }

    /// Map the language name reported by the game installation to a UI
    /// language. Unrecognized names fall back to English.
    pub fn from_game_language(name: &str) -> Self {
        match name {
            "English" => Self::En,
            "German" => Self::De,
            "French" => Self::Fr,
            "Polish" => Self::Pl,
            "Russian" => Self::Ru,
            _ => FALLBACK_LANGUAGE,
        }
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "en" => Ok(Self::En),
            "de" => Ok(Self::De),
            "fr" => Ok(Self::Fr),
            "pl" => Ok(Self::Pl),
            "ru" => Ok(Self::Ru),
            _ => Err(()),
        }
    }
}

fn embedded_bundle(language: Language) -> Option<&'static str> {
    match language {
        Language::En => Some(include_str!("en.json")),
        Language::De => Some(include_str!("de.json")),
        Language::Fr | Language::Pl | Language::Ru => None,
    }
}

/// Parsed translation bundles plus the active language.
pub struct Localizer {
    bundles: HashMap<Language, HashMap<String, String>>,
    active: Language,
}

impl Localizer {
    /// Parse the embedded bundles of all [`SUPPORTED_LANGUAGES`] and select
    /// `initial` as the active language.
    ///
    /// An `initial` without a bundle of its own is allowed; every lookup then
    /// resolves through the [`FALLBACK_LANGUAGE`] bundle.
    pub fn new(initial: Language) -> Result<Self, ShellError> {
        let mut bundles = HashMap::new();

        for language in SUPPORTED_LANGUAGES {
            // Supported languages always carry an embedded bundle.
            let raw = embedded_bundle(language).unwrap_or("{}");
            let bundle: HashMap<String, String> =
                serde_json::from_str(raw).map_err(|source| ShellError::LocaleBundle {
                    lang: language.as_str(),
                    source,
                })?;
            bundles.insert(language, bundle);
        }

        Ok(Self {
            bundles,
            active: initial,
        })
    }

    pub fn active_language(&self) -> Language {
        self.active
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.bundles
            .get(&self.active)
            .and_then(|bundle| bundle.get(key))
            .or_else(|| {
                self.bundles
                    .get(&FALLBACK_LANGUAGE)
                    .and_then(|bundle| bundle.get(key))
            })
            .map(String::as_str)
    }

    /// Translate `key` and substitute `{name}` placeholders from `args`.
    ///
    /// Unknown keys come back verbatim so a missing translation shows up in
    /// the UI instead of a blank string.
    pub fn translate(&self, key: &str, args: &[(&str, &str)]) -> String {
        let template = self.lookup(key).unwrap_or(key);
        interpolate(template, args)
    }
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut message = template.to_string();
    for (name, value) in args {
        message = message.replace(&format!("{{{name}}}"), value);
    }
    message
}

static LOCALIZER: OnceLock<Localizer> = OnceLock::new();

/// One-time process-wide localization setup.
///
/// Registers the bundles of all supported languages and activates `initial`.
/// Calling this more than once keeps the first registration and logs a
/// warning.
pub fn load_i18n(initial: Language) -> Result<(), ShellError> {
    let localizer = Localizer::new(initial)?;

    if LOCALIZER.set(localizer).is_err() {
        tracing::warn!("load_i18n called more than once, keeping the first registration");
        return Ok(());
    }

    tracing::info!(language = initial.as_str(), "localization initialized");
    Ok(())
}

/// Translate against the process-wide [`Localizer`].
///
/// Before [`load_i18n`] has run this falls back to returning the key, which
/// keeps early log/error paths total.
pub fn translate(key: &str, args: &[(&str, &str)]) -> String {
    match LOCALIZER.get() {
        Some(localizer) => localizer.translate(key, args),
        None => interpolate(key, args),
    }
}
