//! Recording fake of the remote query service for handler tests.

use std::sync::Mutex;

use serde_json::{json, Value as JsonValue};

use crate::core::error::QuranError;
use crate::core::tool::JsonObject;
use crate::domain::{
    ChapterOptions, QuranService, RandomVerseOptions, SearchOptions, VerseOptions, VerseScope,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Chapters(ChapterOptions),
    Chapter(u32, ChapterOptions),
    VerseByKey(String, VerseOptions),
    Verses(VerseScope, VerseOptions),
    RandomVerse(RandomVerseOptions),
    Search(String, SearchOptions),
    Juzs,
}

/// Records every call and answers `{"op": <name>}`, or fails when
/// `fail_with` is set.
#[derive(Default)]
pub struct RecordingQuran {
    calls: Mutex<Vec<Call>>,
    pub fail_with: Option<(u16, String)>,
}

impl RecordingQuran {
    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            fail_with: Some((status, message.to_owned())),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: Call, op: &str) -> Result<JsonValue, QuranError> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some((status, message)) => Err(QuranError::Upstream {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(json!({ "op": op })),
        }
    }
}

#[async_trait::async_trait]
impl QuranService for RecordingQuran {
    async fn chapters(&self, o: &ChapterOptions) -> Result<JsonValue, QuranError> {
        self.answer(Call::Chapters(o.clone()), "chapters")
    }
    async fn chapter(&self, id: u32, o: &ChapterOptions) -> Result<JsonValue, QuranError> {
        self.answer(Call::Chapter(id, o.clone()), "chapter")
    }
    async fn verse_by_key(&self, key: &str, o: &VerseOptions) -> Result<JsonValue, QuranError> {
        self.answer(Call::VerseByKey(key.to_owned(), o.clone()), "verse_by_key")
    }
    async fn verses(&self, scope: VerseScope, o: &VerseOptions) -> Result<JsonValue, QuranError> {
        self.answer(Call::Verses(scope, o.clone()), "verses")
    }
    async fn random_verse(&self, o: &RandomVerseOptions) -> Result<JsonValue, QuranError> {
        self.answer(Call::RandomVerse(o.clone()), "random_verse")
    }
    async fn search(&self, query: &str, o: &SearchOptions) -> Result<JsonValue, QuranError> {
        self.answer(Call::Search(query.to_owned(), o.clone()), "search")
    }
    async fn juzs(&self) -> Result<JsonValue, QuranError> {
        self.answer(Call::Juzs, "juzs")
    }
}

pub fn args(v: JsonValue) -> JsonObject {
    match v {
        JsonValue::Object(map) => map,
        other => panic!("arguments must be an object, got {other}"),
    }
}
