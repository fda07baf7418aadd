//! Supported languages and code/name resolution.

use anyhow::Result;

/// Supported language codes (ISO 639-1) and their English names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// Normalizes a language given as a code or an English name to its code.
///
/// `"auto"` passes through unchanged; matching is case-insensitive and
/// ignores surrounding whitespace. Returns `None` for unknown languages.
pub fn to_code(lang: &str) -> Option<&'static str> {
    let trimmed = lang.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.eq_ignore_ascii_case("auto") {
        return Some("auto");
    }

    SUPPORTED_LANGUAGES
        .iter()
        .find(|(code, name)| {
            code.eq_ignore_ascii_case(trimmed) || name.eq_ignore_ascii_case(trimmed)
        })
        .map(|(code, _)| *code)
}

/// Flips between a language code and its English name.
///
/// A known code yields the name; a known name yields the code. Unknown
/// input yields `None`.
pub fn describe(lang: &str) -> Option<String> {
    let trimmed = lang.trim();
    SUPPORTED_LANGUAGES.iter().find_map(|(code, name)| {
        if code.eq_ignore_ascii_case(trimmed) {
            Some((*name).to_string())
        } else if name.eq_ignore_ascii_case(trimmed) {
            Some((*code).to_string())
        } else {
            None
        }
    })
}

/// The code used in derived output file names.
///
/// Falls back to the lowercased input when the language is not in the
/// supported table.
pub fn output_code(lang: &str) -> String {
    match to_code(lang) {
        Some(code) if code != "auto" => code.to_string(),
        _ => lang.trim().to_lowercase(),
    }
}

/// Validates a destination language (code or English name).
///
/// # Errors
///
/// Returns an error for unknown languages and for `"auto"`, which is only
/// valid as a source.
pub fn validate_language(lang: &str) -> Result<()> {
    match to_code(lang) {
        Some(code) if code != "auto" => Ok(()),
        _ => anyhow::bail!(
            "Invalid destination language: '{lang}'\n\n\
             Use an ISO 639-1 code (ja, en, uk, ...) or an English language name.\n\
             Run 'filetr languages' to see all supported languages."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_code_from_code() {
        assert_eq!(to_code("uk"), Some("uk"));
        assert_eq!(to_code("EN"), Some("en"));
        assert_eq!(to_code("zh-tw"), Some("zh-TW"));
    }

    #[test]
    fn test_to_code_from_name() {
        assert_eq!(to_code("Ukrainian"), Some("uk"));
        assert_eq!(to_code("english"), Some("en"));
        assert_eq!(to_code(" German "), Some("de"));
    }

    #[test]
    fn test_to_code_auto_passes_through() {
        assert_eq!(to_code("auto"), Some("auto"));
        assert_eq!(to_code("AUTO"), Some("auto"));
    }

    #[test]
    fn test_to_code_unknown() {
        assert_eq!(to_code("klingon"), None);
        assert_eq!(to_code(""), None);
        assert_eq!(to_code("   "), None);
    }

    #[test]
    fn test_describe_flips_code_and_name() {
        assert_eq!(describe("en").as_deref(), Some("English"));
        assert_eq!(describe("English").as_deref(), Some("en"));
        assert_eq!(describe("klingon"), None);
    }

    #[test]
    fn test_output_code_fallback() {
        assert_eq!(output_code("Ukrainian"), "uk");
        assert_eq!(output_code("en"), "en");
        assert_eq!(output_code("Klingon"), "klingon");
    }

    #[test]
    fn test_validate_language() {
        assert!(validate_language("ja").is_ok());
        assert!(validate_language("Japanese").is_ok());
        assert!(validate_language("auto").is_err());
        assert!(validate_language("invalid").is_err());
        assert!(validate_language("").is_err());
    }
}
