//! Corpus vocabulary: option types accepted by the tools and the remote
//! query service contract.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::core::error::QuranError;

macro_rules! languages {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        /// Response language, as an ISO-639 code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
        pub enum Language {
            $(#[serde(rename = $code)] $variant,)+
        }

        impl Language {
            pub fn code(self) -> &'static str {
                match self {
                    $(Language::$variant => $code,)+
                }
            }
        }
    };
}

languages! {
    Albanian => "sq",
    Amharic => "am",
    Arabic => "ar",
    Assamese => "as",
    Azeri => "az",
    Bengali => "bn",
    Bosnian => "bs",
    Bulgarian => "bg",
    Chechen => "ce",
    Chinese => "zh",
    Czech => "cs",
    Divehi => "dv",
    Dutch => "nl",
    English => "en",
    French => "fr",
    German => "de",
    Gujarati => "gu",
    Hausa => "ha",
    Hebrew => "he",
    Hindi => "hi",
    Indonesian => "id",
    Italian => "it",
    Japanese => "ja",
    Kannada => "kn",
    Kazakh => "kk",
    Khmer => "km",
    Korean => "ko",
    Kurdish => "ku",
    Malay => "ms",
    Malayalam => "ml",
    Nepali => "ne",
    Norwegian => "no",
    Oromo => "om",
    Pashto => "ps",
    Persian => "fa",
    Polish => "pl",
    Portuguese => "pt",
    Romanian => "ro",
    Russian => "ru",
    Sindhi => "sd",
    Sinhalese => "si",
    Somali => "so",
    Spanish => "es",
    Swahili => "sw",
    Swedish => "sv",
    Tagalog => "tl",
    Tajik => "tg",
    Tamil => "ta",
    Tatar => "tt",
    Telugu => "te",
    Thai => "th",
    Turkish => "tr",
    Uighur => "ug",
    Ukrainian => "uk",
    Urdu => "ur",
    Uzbek => "uz",
    Vietnamese => "vi",
    Yoruba => "yo",
}

/// A numeric resource id or a string slug/name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ResourceId {
    Id(u64),
    Name(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Id(id) => write!(f, "{id}"),
            ResourceId::Name(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChapterOptions {
    /// Language for the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VerseOptions {
    /// Language for the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Reciter ID or name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reciter: Option<ResourceId>,
    /// Include word-by-word breakdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<bool>,
    /// Translation IDs to include
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<ResourceId>>,
    /// Tafsir IDs to include
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tafsirs: Option<Vec<ResourceId>>,
    /// Page number for pagination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Number of results per page
    #[serde(default, rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Verse options without pagination, for single random verses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RandomVerseOptions {
    /// Language for the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Reciter ID or name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reciter: Option<ResourceId>,
    /// Include word-by-word breakdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<bool>,
    /// Translation IDs to include
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<ResourceId>>,
    /// Tafsir IDs to include
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tafsirs: Option<Vec<ResourceId>>,
}

impl From<RandomVerseOptions> for VerseOptions {
    fn from(o: RandomVerseOptions) -> Self {
        Self {
            language: o.language,
            reciter: o.reciter,
            words: o.words,
            translations: o.translations,
            tafsirs: o.tafsirs,
            page: None,
            per_page: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchOptions {
    /// Language for the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Number of results per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Page number for pagination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Structural division a verse listing is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseScope {
    Chapter(u32),
    Page(u32),
    Juz(u32),
    Hizb(u32),
    Rub(u32),
}

impl VerseScope {
    /// Path segment below `/verses`.
    pub fn segment(&self) -> &'static str {
        match self {
            VerseScope::Chapter(_) => "by_chapter",
            VerseScope::Page(_) => "by_page",
            VerseScope::Juz(_) => "by_juz",
            VerseScope::Hizb(_) => "by_hizb",
            VerseScope::Rub(_) => "by_rub",
        }
    }

    pub fn number(&self) -> u32 {
        match *self {
            VerseScope::Chapter(n)
            | VerseScope::Page(n)
            | VerseScope::Juz(n)
            | VerseScope::Hizb(n)
            | VerseScope::Rub(n) => n,
        }
    }
}

/// Remote corpus query service. Results are returned as raw JSON records.
#[async_trait::async_trait]
pub trait QuranService: Send + Sync {
    async fn chapters(&self, options: &ChapterOptions) -> Result<JsonValue, QuranError>;
    async fn chapter(&self, id: u32, options: &ChapterOptions) -> Result<JsonValue, QuranError>;
    async fn verse_by_key(&self, key: &str, options: &VerseOptions) -> Result<JsonValue, QuranError>;
    async fn verses(&self, scope: VerseScope, options: &VerseOptions) -> Result<JsonValue, QuranError>;
    async fn random_verse(&self, options: &RandomVerseOptions) -> Result<JsonValue, QuranError>;
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<JsonValue, QuranError>;
    async fn juzs(&self) -> Result<JsonValue, QuranError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn language_uses_iso_codes() {
        let lang: Language = serde_json::from_value(json!("ur")).unwrap();
        assert_eq!(lang, Language::Urdu);
        assert_eq!(Language::English.code(), "en");
        assert!(serde_json::from_value::<Language>(json!("klingon")).is_err());
    }

    #[test]
    fn resource_ids_accept_numbers_and_strings() {
        let ids: Vec<ResourceId> = serde_json::from_value(json!([131, "en-sahih"])).unwrap();
        assert_eq!(ids, vec![ResourceId::Id(131), ResourceId::Name("en-sahih".into())]);
        assert_eq!(ids[0].to_string(), "131");
    }

    #[test]
    fn verse_options_use_camel_case_per_page() {
        let opts: VerseOptions = serde_json::from_value(json!({"perPage": 5, "words": true})).unwrap();
        assert_eq!(opts.per_page, Some(5));
        assert_eq!(opts.words, Some(true));
    }

    #[test]
    fn scopes_map_to_paths() {
        assert_eq!(VerseScope::Chapter(2).segment(), "by_chapter");
        assert_eq!(VerseScope::Rub(240).segment(), "by_rub");
        assert_eq!(VerseScope::Rub(240).number(), 240);
    }
}
