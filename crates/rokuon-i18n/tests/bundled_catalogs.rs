//! Behavior of the Japanese and English catalogs shipped with the recorder.

use rokuon_i18n::{Args, Language, ResolveError, Resource, bundled};

/// Keys the recorder UI looks up.
const UI_KEYS: &[&str] = &[
    "app_title",
    "recording_time",
    "recording",
    "add_microphone",
    "start_recording",
    "stop_recording",
    "delete",
    "device",
    "input_device",
    "settings_title",
    "audio_format_section",
    "save_format",
    "sample_rate",
    "bit_depth",
    "language",
    "processing_section",
    "compressor",
    "threshold",
    "ratio",
    "save_settings",
    "to_recording",
    "settings_saved",
    "settings_save_failed",
    "enabled",
    "disabled",
    "japanese",
    "english",
    "flac_unavailable",
    "hz_unit",
    "bit_unit",
    "db_unit",
    "ratio_2_1",
    "ratio_4_1",
    "ratio_8_1",
    "ratio_16_1",
    "recording_page",
    "settings_page",
];

fn args_for(key: &str) -> Args {
    match key {
        "recording_time" => Args::new().with("time", "00:00"),
        "input_device" => Args::new().with("index", 1),
        _ => Args::new(),
    }
}

#[test]
fn every_ui_key_resolves_in_every_locale() {
    let catalog = bundled::catalog();
    for language in Language::ALL {
        for key in UI_KEYS {
            let result = catalog.resolve(language.code(), key, &args_for(key));
            assert!(result.is_ok(), "{language}/{key}: {result:?}");
        }
    }
}

#[test]
fn reference_keys_resolve_in_all_locales() {
    let catalog = bundled::catalog();
    let reference = catalog.locale("ja").expect("ja is bundled");
    for locale in catalog.locales() {
        for key in reference.keys() {
            let result = catalog.resolve(locale.as_str(), key, &args_for(key));
            assert!(
                !matches!(result, Err(ResolveError::UnknownKey { .. })),
                "{locale} lacks {key}"
            );
        }
    }
}

#[test]
fn bundled_locales_are_complete_and_consistent() {
    let report = bundled::catalog().check_completeness("ja").unwrap();
    assert_eq!(report.locales.len(), 1);
    assert!(report.is_complete(), "{report:#?}");
}

#[test]
fn hz_unit_is_plain() {
    assert_eq!(bundled::catalog().get("ja", "hz_unit").unwrap(), "Hz");
}

#[test]
fn recording_time_substitutes_time() {
    let catalog = bundled::catalog();
    let args = Args::new().with("time", "00:12");
    assert_eq!(
        catalog.resolve("ja", "recording_time", &args).unwrap(),
        "録音時間: 00:12"
    );
    assert_eq!(
        catalog.resolve("en", "recording_time", &args).unwrap(),
        "Recording time: 00:12"
    );
}

#[test]
fn recording_time_without_argument_fails() {
    assert_eq!(
        bundled::catalog().get("ja", "recording_time"),
        Err(ResolveError::MissingArgument {
            key: "recording_time".into(),
            name: "time".into(),
        })
    );
}

#[test]
fn unsupported_locale_fails() {
    assert_eq!(
        bundled::catalog().get("fr", "app_title"),
        Err(ResolveError::UnknownLocale {
            locale: "fr".into()
        })
    );
}

#[test]
fn numbered_device_label() {
    let args = Args::new().with("index", 2);
    assert_eq!(
        bundled::catalog().resolve("ja", "input_device", &args).unwrap(),
        "入力デバイス 2"
    );
}

#[test]
fn language_names_resolve_through_name_keys() {
    let catalog = bundled::catalog();
    assert_eq!(catalog.get("en", Language::Japanese.name_key()).unwrap(), "日本語");
    assert_eq!(catalog.get("ja", Language::English.name_key()).unwrap(), "English");
}

#[test]
fn lenient_lookup_falls_back_to_japanese() {
    let catalog = bundled::catalog();
    assert_eq!(catalog.text("fr", "app_title", &Args::new()), "録音くん");
    assert_eq!(catalog.text("en", "no_such_key", &Args::new()), "no_such_key");
}

#[test]
fn bundled_files_round_trip_exactly() {
    for (language, text) in bundled::RESOURCES {
        let resource = Resource::parse(text).unwrap();
        assert_eq!(resource.serialize(), text, "{language}.ftl is not canonical");
        assert_eq!(Resource::parse(&resource.serialize()).unwrap(), resource);
    }
}
