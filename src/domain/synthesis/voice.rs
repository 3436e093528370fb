/// Resolve the TTS locale for a two-letter language code.
/// Unknown codes fall back to a synthesized "{lang}-{LANG}" locale.
pub fn locale_for_language(language: &str) -> String {
    match language {
        "en" => "en-US",
        "es" => "es-ES",
        "fr" => "fr-FR",
        "de" => "de-DE",
        "it" => "it-IT",
        "pt" => "pt-BR",
        _ => return format!("{}-{}", language, language.to_uppercase()),
    }
    .to_string()
}

/// Select the standard voice for a TTS locale.
/// Locales outside the table get the "{locale}-Standard-A" pattern.
pub fn voice_for_locale(locale: &str) -> String {
    match locale {
        "pt-BR" => "pt-BR-Standard-A",
        "en-US" => "en-US-Standard-C",
        "es-ES" => "es-ES-Standard-A",
        "fr-FR" => "fr-FR-Standard-A",
        "de-DE" => "de-DE-Standard-A",
        "it-IT" => "it-IT-Standard-A",
        _ => return format!("{}-Standard-A", locale),
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_locale_for_known_languages() {
        assert_eq!(locale_for_language("en"), "en-US");
        assert_eq!(locale_for_language("es"), "es-ES");
        assert_eq!(locale_for_language("pt"), "pt-BR");
    }

    #[test]
    fn test_locale_falls_back_to_synthesized_pattern() {
        assert_eq!(locale_for_language("ja"), "ja-JA");
        assert_eq!(locale_for_language("nl"), "nl-NL");
    }

    #[test]
    fn test_voice_for_known_locales() {
        assert_eq!(voice_for_locale("en-US"), "en-US-Standard-C");
        assert_eq!(voice_for_locale("pt-BR"), "pt-BR-Standard-A");
    }

    #[test]
    fn test_voice_falls_back_to_standard_a_pattern() {
        assert_eq!(voice_for_locale("ja-JA"), "ja-JA-Standard-A");
    }
}
