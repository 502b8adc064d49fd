//! Integration tests for the locale loader and translation bundles.

use modloader_shell::locale::{
    ALL_LANGUAGES, FALLBACK_LANGUAGE, Language, Localizer, SUPPORTED_LANGUAGES,
};

/// Every key the error translation dispatch can produce.
const MESSAGE_KEYS: &[&str] = &[
    "error.fatal.dialogMessage",
    "error.GameLanguageNotSupported",
    "error.invalidGamePath.NotExisting",
    "error.invalidGamePath.NotADirectory",
    "error.invalidGamePath.InvalidPath",
    "error.invalidGamePath.InvalidFolderName",
    "error.invalidGamePath.LocalizationNotFound",
    "error.ArchiveHandling",
    "error.invalidArchive.PathNotExisting",
    "error.invalidArchive.PathNotFile",
    "error.invalidArchive.NoExtension",
    "error.invalidArchive.InvalidExtension",
    "error.InvalidModInfo",
    "error.ModConflict",
    "error.ModVersionMismatch",
];

#[test]
fn every_supported_bundle_translates_every_message_key() {
    for language in SUPPORTED_LANGUAGES {
        let localizer = Localizer::new(language).unwrap();

        for key in MESSAGE_KEYS {
            let message = localizer.translate(key, &[]);
            assert_ne!(
                message, *key,
                "missing '{key}' in bundle '{}'",
                language.as_str()
            );
        }
    }
}

#[test]
fn unsupported_languages_resolve_through_the_fallback_bundle() {
    let english = Localizer::new(FALLBACK_LANGUAGE).unwrap();

    for language in [Language::Fr, Language::Pl, Language::Ru] {
        let localizer = Localizer::new(language).unwrap();

        for key in MESSAGE_KEYS {
            assert_eq!(localizer.translate(key, &[]), english.translate(key, &[]));
        }
    }
}

#[test]
fn fatal_dialog_message_interpolates_both_placeholders() {
    for language in SUPPORTED_LANGUAGES {
        let localizer = Localizer::new(language).unwrap();

        let message = localizer.translate(
            "error.fatal.dialogMessage",
            &[
                ("error", "registry unavailable"),
                ("githubIssueUrl", "https://example.com/issues"),
            ],
        );

        assert!(message.contains("registry unavailable"));
        assert!(message.contains("https://example.com/issues"));
        assert!(!message.contains('{'), "placeholder left in: {message}");
    }
}

#[test]
fn game_language_names_map_to_ui_languages() {
    assert_eq!(Language::from_game_language("English"), Language::En);
    assert_eq!(Language::from_game_language("German"), Language::De);
    assert_eq!(Language::from_game_language("French"), Language::Fr);
    assert_eq!(Language::from_game_language("Polish"), Language::Pl);
    assert_eq!(Language::from_game_language("Russian"), Language::Ru);

    // Unrecognized names never fail, they default to English.
    assert_eq!(Language::from_game_language("Klingon"), Language::En);
    assert_eq!(Language::from_game_language("english"), Language::En);
}

#[test]
fn every_language_has_a_country_code_and_identifier() {
    for language in ALL_LANGUAGES {
        assert_eq!(language.as_country_code().len(), 2);
        assert_eq!(language.as_str().len(), 2);
    }
}
