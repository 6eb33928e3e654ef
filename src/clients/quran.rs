use std::time::Instant;

use reqwest::{Client, Url};
use serde_json::Value as JsonValue;

use crate::core::content::error_message;
use crate::core::error::QuranError;
use crate::domain::{
    ChapterOptions, QuranService, RandomVerseOptions, ResourceId, SearchOptions, VerseOptions,
    VerseScope,
};
use crate::infra::config::ApiConfig;
use crate::infra::http::headers::add_standard_headers;
use crate::infra::runtime::limits::make_http_client;

pub const DEFAULT_BASE_URL: &str = "https://api.quran.com/api/v4";

type Query = Vec<(&'static str, String)>;

/// Quran.com v4 REST client.
#[derive(Clone)]
pub struct QuranRemote {
    base: String,
    http: Client,
}

impl QuranRemote {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(cfg: &ApiConfig) -> Result<Self, QuranError> {
        Url::parse(&cfg.base_url)
            .map_err(|e| QuranError::Request(format!("invalid base url {:?}: {e}", cfg.base_url)))?;
        let http = make_http_client(cfg)?;
        Ok(Self {
            base: cfg.base_url.clone(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// `{base}/{segments..}`, each segment escaped so caller input cannot
    /// change the path or query.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, QuranError> {
        let mut url = Url::parse(&self.base)
            .map_err(|e| QuranError::Request(format!("invalid base url {:?}: {e}", self.base)))?;
        url.path_segments_mut()
            .map_err(|_| QuranError::Request(format!("base url {:?} cannot carry a path", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET the endpoint, returning the payload under `key` (or the whole body
    /// when the key is absent).
    async fn fetch(&self, op: &'static str, segments: &[&str], query: Query, key: &str) -> Result<JsonValue, QuranError> {
        let url = self.endpoint(segments)?;
        let (builder, rid) = add_standard_headers(self.http.get(url.clone()), None);
        tracing::debug!(endpoint = %url, request_id = %rid, ?query, "quran api request");

        let start = Instant::now();
        let res = self.send(builder.query(&query)).await;
        let elapsed_ms = start.elapsed().as_millis() as f64;
        match &res {
            Ok(_) => crate::infra::logging::log_metric(op, "remote_latency_ms", elapsed_ms),
            Err(e) => {
                let status = match e {
                    QuranError::Upstream { status, .. } => Some(*status),
                    _ => None,
                };
                tracing::warn!(endpoint = %url, request_id = %rid, ?status, error = %e, "quran api request failed");
                crate::infra::logging::log_metric(op, "remote_error_total", 1.0);
            }
        }

        Ok(match res? {
            JsonValue::Object(mut map) => match map.remove(key) {
                Some(payload) => payload,
                None => JsonValue::Object(map),
            },
            other => other,
        })
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<JsonValue, QuranError> {
        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<JsonValue>(&text) {
                Ok(v) => error_message(&v),
                Err(_) if !text.trim().is_empty() => text.trim().to_owned(),
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("upstream error")
                    .to_owned(),
            };
            return Err(QuranError::Upstream {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp.json::<JsonValue>().await?)
    }
}

fn join_ids(ids: &[ResourceId]) -> String {
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

fn chapter_query(o: &ChapterOptions) -> Query {
    let mut q = Query::new();
    if let Some(lang) = o.language {
        q.push(("language", lang.code().to_owned()));
    }
    q
}

fn verse_query(o: &VerseOptions) -> Query {
    let mut q = Query::new();
    if let Some(lang) = o.language {
        q.push(("language", lang.code().to_owned()));
    }
    if let Some(words) = o.words {
        q.push(("words", words.to_string()));
    }
    if let Some(ids) = o.translations.as_deref() {
        q.push(("translations", join_ids(ids)));
    }
    if let Some(ids) = o.tafsirs.as_deref() {
        q.push(("tafsirs", join_ids(ids)));
    }
    if let Some(reciter) = &o.reciter {
        q.push(("audio", reciter.to_string()));
    }
    if let Some(page) = o.page {
        q.push(("page", page.to_string()));
    }
    if let Some(per_page) = o.per_page {
        q.push(("per_page", per_page.to_string()));
    }
    q
}

fn search_query(query: &str, o: &SearchOptions) -> Query {
    let mut q: Query = vec![("q", query.to_owned())];
    if let Some(size) = o.size {
        q.push(("size", size.to_string()));
    }
    if let Some(page) = o.page {
        q.push(("page", page.to_string()));
    }
    if let Some(lang) = o.language {
        q.push(("language", lang.code().to_owned()));
    }
    q
}

#[async_trait::async_trait]
impl QuranService for QuranRemote {
    async fn chapters(&self, options: &ChapterOptions) -> Result<JsonValue, QuranError> {
        self.fetch("chapters.all", &["chapters"], chapter_query(options), "chapters")
            .await
    }

    async fn chapter(&self, id: u32, options: &ChapterOptions) -> Result<JsonValue, QuranError> {
        let id = id.to_string();
        self.fetch("chapters.by_id", &["chapters", &id], chapter_query(options), "chapter")
            .await
    }

    async fn verse_by_key(&self, key: &str, options: &VerseOptions) -> Result<JsonValue, QuranError> {
        self.fetch("verses.by_key", &["verses", "by_key", key], verse_query(options), "verse")
            .await
    }

    async fn verses(&self, scope: VerseScope, options: &VerseOptions) -> Result<JsonValue, QuranError> {
        let n = scope.number().to_string();
        self.fetch("verses.list", &["verses", scope.segment(), &n], verse_query(options), "verses")
            .await
    }

    async fn random_verse(&self, options: &RandomVerseOptions) -> Result<JsonValue, QuranError> {
        let options = VerseOptions::from(options.clone());
        self.fetch("verses.random", &["verses", "random"], verse_query(&options), "verse")
            .await
    }

    async fn search(&self, query: &str, options: &SearchOptions) -> Result<JsonValue, QuranError> {
        self.fetch("search", &["search"], search_query(query, options), "search")
            .await
    }

    async fn juzs(&self) -> Result<JsonValue, QuranError> {
        self.fetch("juzs.all", &["juzs"], Query::new(), "juzs").await
    }
}
