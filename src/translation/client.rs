use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use super::language;

/// A detected source language with the service's confidence, when reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// ISO 639-1 code as reported by the backend.
    pub lang: String,
    pub confidence: Option<f64>,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.confidence {
            Some(confidence) => {
                write!(f, "Detected(lang={}, confidence={confidence})", self.lang)
            }
            None => write!(f, "Detected(lang={})", self.lang),
        }
    }
}

const GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Client for the public Google Translate web endpoint.
///
/// The endpoint answers a nested-array JSON body: index 0 holds the
/// translated segments, index 2 the detected source language, index 6 the
/// detection confidence.
#[derive(Debug)]
pub struct GoogleWebClient {
    client: Client,
}

impl GoogleWebClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn request(&self, text: &str, source: &str, dest: &str) -> Result<Value> {
        let response = self
            .client
            .get(GOOGLE_ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", dest),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .context("Translation service unavailable: translate.googleapis.com")?;

        if !response.status().is_success() {
            bail!(
                "Translation request failed with status {}",
                response.status()
            );
        }

        response
            .json::<Value>()
            .await
            .context("Translation service returned malformed JSON")
    }

    pub async fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String> {
        let body = self.request(text, source, dest).await?;
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .context("Translation service returned an unexpected response shape")?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(Value::as_str) {
                translated.push_str(part);
            }
        }
        Ok(translated)
    }

    pub async fn detect(&self, text: &str) -> Result<Detection> {
        let body = self.request(text, "auto", "en").await?;
        let lang = body
            .get(2)
            .and_then(Value::as_str)
            .context("Translation service did not report a source language")?
            .to_string();
        let confidence = body.get(6).and_then(Value::as_f64);

        Ok(Detection { lang, confidence })
    }
}

impl Default for GoogleWebClient {
    fn default() -> Self {
        Self::new()
    }
}

const MYMEMORY_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: MyMemoryData,
    // The API reports this field as a number on success and a string on
    // some error paths.
    #[serde(rename = "responseStatus", default)]
    response_status: Value,
}

#[derive(Debug, Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl MyMemoryResponse {
    fn status_ok(&self) -> bool {
        match &self.response_status {
            Value::Number(n) => n.as_i64() == Some(200),
            Value::String(s) => s == "200",
            Value::Null => true,
            _ => false,
        }
    }
}

/// Client for the MyMemory translation API.
///
/// MyMemory requires an explicit language pair, so `auto` sources are
/// resolved locally with whatlang before the request goes out.
#[derive(Debug)]
pub struct MyMemoryClient {
    client: Client,
}

impl MyMemoryClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String> {
        let source = if source == "auto" {
            self.detect(text)?.lang
        } else {
            source.to_string()
        };
        let langpair = format!("{source}|{dest}");

        let response = self
            .client
            .get(MYMEMORY_ENDPOINT)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await
            .context("Translation service unavailable: api.mymemory.translated.net")?;

        if !response.status().is_success() {
            bail!(
                "Translation request failed with status {}",
                response.status()
            );
        }

        let body: MyMemoryResponse = response
            .json()
            .await
            .context("Translation service returned malformed JSON")?;

        if !body.status_ok() {
            bail!(
                "Translation service rejected the request: {}",
                body.response_data.translated_text
            );
        }

        Ok(body.response_data.translated_text)
    }

    /// Offline trigram-based detection; no network involved.
    pub fn detect(&self, text: &str) -> Result<Detection> {
        let info =
            whatlang::detect(text).context("Could not determine the language of the text")?;

        Ok(Detection {
            lang: iso_code(info.lang()).to_string(),
            confidence: Some(info.confidence()),
        })
    }
}

impl Default for MyMemoryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps whatlang's ISO 639-3 languages onto the 639-1 codes the rest of
/// the tool speaks, falling back to the 639-3 code for unmapped languages.
fn iso_code(lang: whatlang::Lang) -> &'static str {
    use whatlang::Lang;

    match lang {
        Lang::Eng => "en",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Bel => "be",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Tur => "tr",
        Lang::Pol => "pl",
        Lang::Swe => "sv",
        Lang::Vie => "vi",
        other => other.code(),
    }
}

/// Names accepted for the `module` setting.
pub const MODULE_NAMES: &[&str] = &["google", "mymemory"];

/// A selectable translation backend, named by the `module` setting.
#[derive(Debug)]
pub enum Module {
    Google(GoogleWebClient),
    MyMemory(MyMemoryClient),
}

impl Module {
    pub fn by_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "google" => Ok(Self::Google(GoogleWebClient::new())),
            "mymemory" => Ok(Self::MyMemory(MyMemoryClient::new())),
            other => bail!(
                "Unknown translation module: '{other}'\n\n\
                 Available modules:\n  \
                 - google\n  \
                 - mymemory"
            ),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Google(_) => "google",
            Self::MyMemory(_) => "mymemory",
        }
    }

    /// Translates `text` from `source` (code, name, or `auto`) into `dest`.
    pub async fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String> {
        let source_code = language::to_code(source)
            .ok_or_else(|| anyhow::anyhow!("Unknown source language: '{source}'"))?;
        let dest_code = match language::to_code(dest) {
            Some(code) if code != "auto" => code,
            _ => bail!("Unknown destination language: '{dest}'"),
        };

        match self {
            Self::Google(client) => client.translate(text, source_code, dest_code).await,
            Self::MyMemory(client) => client.translate(text, source_code, dest_code).await,
        }
    }

    pub async fn detect(&self, text: &str) -> Result<Detection> {
        match self {
            Self::Google(client) => client.detect(text).await,
            Self::MyMemory(client) => client.detect(text),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_module_by_name() {
        assert_eq!(Module::by_name("google").unwrap().name(), "google");
        assert_eq!(Module::by_name("MyMemory").unwrap().name(), "mymemory");
        assert_eq!(Module::by_name(" google ").unwrap().name(), "google");
    }

    #[test]
    fn test_module_by_name_unknown() {
        let result = Module::by_name("babelfish");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Unknown translation module")
        );
    }

    #[tokio::test]
    async fn test_translate_rejects_unknown_languages() {
        let module = Module::by_name("google").unwrap();

        let result = module.translate("hello", "klingon", "en").await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Unknown source language")
        );

        let result = module.translate("hello", "auto", "klingon").await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Unknown destination language")
        );
    }

    #[tokio::test]
    async fn test_translate_rejects_auto_destination() {
        let module = Module::by_name("google").unwrap();
        let result = module.translate("hello", "auto", "auto").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_offline_detection() {
        let client = MyMemoryClient::new();
        let detection = client
            .detect("This is a longer English sentence to make detection reliable.")
            .unwrap();
        assert_eq!(detection.lang, "en");
        assert!(detection.confidence.is_some());
    }

    #[test]
    fn test_offline_detection_ukrainian() {
        let client = MyMemoryClient::new();
        let detection = client
            .detect("Доброго дня! Сподіваюся, що в Києві сьогодні гарна погода і ви маєте чудовий настрій.")
            .unwrap();
        assert_eq!(detection.lang, "uk");
    }

    #[test]
    fn test_detection_display() {
        let with_confidence = Detection {
            lang: "en".to_string(),
            confidence: Some(0.5),
        };
        assert_eq!(
            with_confidence.to_string(),
            "Detected(lang=en, confidence=0.5)"
        );

        let without = Detection {
            lang: "en".to_string(),
            confidence: None,
        };
        assert_eq!(without.to_string(), "Detected(lang=en)");
    }

    #[test]
    fn test_mymemory_status_ok() {
        let ok: MyMemoryResponse = serde_json::from_str(
            r#"{"responseData": {"translatedText": "hi"}, "responseStatus": 200}"#,
        )
        .unwrap();
        assert!(ok.status_ok());

        let err: MyMemoryResponse = serde_json::from_str(
            r#"{"responseData": {"translatedText": "INVALID PAIR"}, "responseStatus": "403"}"#,
        )
        .unwrap();
        assert!(!err.status_ok());
    }
}
