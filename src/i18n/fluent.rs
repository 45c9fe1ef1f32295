// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(file = filename, "ignoring translation with invalid locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
                tracing::warn!(file = filename, errors = errors.len(), "translation has syntax errors");
                partial
            });
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(file = filename, errors = errors.len(), "duplicate translation keys");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(DEFAULT_LOCALE);
        tracing::debug!(locale = %current_locale, "localization ready");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches to `locale` if a translation for it is bundled.
    ///
    /// Returns `false` and keeps the current locale otherwise.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
            true
        } else {
            false
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    /// Translates `key`, returning `None` when the current locale lacks it.
    pub fn try_tr(&self, key: &str) -> Option<String> {
        self.format(key, None)
    }

    /// Translates `key`, substituting `{ $name }` placeables from `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return Some(value.to_string());
                    }
                }
            }
        }
        None
    }
}

/// Finds `requested` among `available`, falling back to a locale with the
/// same language subtag (`ru-RU` matches `ru`).
fn match_available(
    requested: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if available.contains(requested) {
        return Some(requested.clone());
    }
    available
        .iter()
        .find(|candidate| candidate.language == requested.language)
        .cloned()
}

fn match_str(raw: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    raw.parse::<LanguageIdentifier>()
        .ok()
        .and_then(|lang| match_available(&lang, available))
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(|raw| match_str(raw, available)) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config
        .general
        .language
        .as_deref()
        .and_then(|raw| match_str(raw, available))
    {
        return Some(lang);
    }

    // 3. Check OS locale
    sys_locale::get_locale().and_then(|raw| match_str(&raw, available))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use unic_langid::LanguageIdentifier;

    fn available() -> Vec<LanguageIdentifier> {
        vec![langid!("en-US"), langid!("ru")]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("ru".to_string()), &config, &available());
        assert_eq!(lang, Some(langid!("ru")));
    }

    #[test]
    fn test_resolve_locale_cli_wins_over_config() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("ru".to_string()), &config, &available());
        assert_eq!(lang, Some(langid!("ru")));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("ru".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some(langid!("ru")));
    }

    #[test]
    fn test_resolve_locale_region_falls_back_to_language() {
        let config = Config::default();
        let lang = resolve_locale(Some("ru-RU".to_string()), &config, &available());
        assert_eq!(lang, Some(langid!("ru")));
    }

    #[test]
    fn test_resolve_locale_default() {
        let config = Config::default();
        let lang = resolve_locale(None, &config, &available());
        // OS dependent: only check that whatever was picked is bundled
        if let Some(l) = lang {
            assert!(available().contains(&l));
        }
    }

    #[test]
    fn bundled_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.available_locales().contains(&langid!("en-US")));
        assert!(i18n.available_locales().contains(&langid!("ru")));
        assert_eq!(i18n.current_locale(), &langid!("en-US"));
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn translation_switches_with_locale() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let english = i18n.tr("window-title");
        assert!(i18n.set_locale(langid!("ru")));
        let russian = i18n.tr("window-title");
        assert_ne!(english, russian);
        assert!(!russian.starts_with("MISSING"));
    }

    #[test]
    fn try_tr_distinguishes_missing_keys() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.try_tr("window-title").is_some());
        assert!(i18n.try_tr("dish-unknown-stew").is_none());
    }

    #[test]
    fn set_unknown_locale_is_rejected() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(!i18n.set_locale(langid!("fr")));
        assert_eq!(i18n.current_locale(), &langid!("en-US"));
    }

    #[test]
    fn args_are_substituted() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let text = i18n.tr_with_args("upload-selected-file", &[("name", "dinner.jpg")]);
        assert!(text.contains("dinner.jpg"));
    }

    #[test]
    fn every_english_key_exists_in_russian() {
        let english = Asset::get("en-US.ftl").expect("english translation bundled");
        let i18n = I18n::default();
        let russian = i18n.bundles.get(&langid!("ru")).expect("russian bundle loaded");
        let mut checked = 0;
        for line in String::from_utf8_lossy(english.data.as_ref()).lines() {
            let Some((key, _)) = line.split_once(" =") else {
                continue;
            };
            if key.starts_with('#') || key.starts_with(' ') || key.is_empty() {
                continue;
            }
            checked += 1;
            assert!(russian.has_message(key), "ru.ftl is missing {key}");
        }
        assert!(checked > 0);
    }

    #[test]
    fn placeholder_messages_need_their_arguments() {
        let i18n = I18n::new(Some("ru".to_string()), &Config::default());
        assert!(i18n.try_tr("upload-formats").is_none());
        let text = i18n.tr_with_args("upload-formats", &[("formats", "JPG")]);
        assert!(text.contains("JPG"));
    }
}
