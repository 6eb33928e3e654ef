use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::tool::{parse_args, schema_for, JsonObject, ToolDescriptor, ToolFuture};
use crate::domain::{ChapterOptions, QuranService};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AllChaptersArgs {
    /// Additional options for chapters
    #[serde(default)]
    pub options: Option<ChapterOptions>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ChapterByIdArgs {
    /// The ID of the chapter to get information about
    pub id: u32,
    /// Additional options for the chapter
    #[serde(default)]
    pub options: Option<ChapterOptions>,
}

pub const ALL_CHAPTERS: ToolDescriptor = ToolDescriptor {
    name: "all_chapters",
    description: "Get all information about Quran chapters",
    input_schema: schema_for::<AllChaptersArgs>,
    handler: all_chapters,
};

pub const CHAPTER_BY_ID: ToolDescriptor = ToolDescriptor {
    name: "chapter_by_id",
    description: "Get information about a Quran chapter by id",
    input_schema: schema_for::<ChapterByIdArgs>,
    handler: chapter_by_id,
};

fn all_chapters(quran: &dyn QuranService, args: JsonObject) -> ToolFuture<'_> {
    Box::pin(async move {
        let args: AllChaptersArgs = parse_args(args)?;
        Ok(quran.chapters(&args.options.unwrap_or_default()).await?)
    })
}

fn chapter_by_id(quran: &dyn QuranService, args: JsonObject) -> ToolFuture<'_> {
    Box::pin(async move {
        let args: ChapterByIdArgs = parse_args(args)?;
        Ok(quran
            .chapter(args.id, &args.options.unwrap_or_default())
            .await?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;
    use crate::tools::testing::{args, Call, RecordingQuran};

    #[tokio::test]
    async fn chapter_by_id_calls_lookup_with_numeric_id() {
        let quran = RecordingQuran::default();
        let out = (CHAPTER_BY_ID.handler)(&quran, args(serde_json::json!({"id": 1})))
            .await
            .unwrap();
        assert_eq!(quran.calls(), vec![Call::Chapter(1, ChapterOptions::default())]);
        assert_eq!(out["op"], "chapter");
    }

    #[tokio::test]
    async fn all_chapters_forwards_language() {
        let quran = RecordingQuran::default();
        (ALL_CHAPTERS.handler)(&quran, args(serde_json::json!({"options": {"language": "fr"}})))
            .await
            .unwrap();
        assert_eq!(
            quran.calls(),
            vec![Call::Chapters(ChapterOptions {
                language: Some(Language::French)
            })]
        );
    }

    #[tokio::test]
    async fn chapter_by_id_requires_id() {
        let quran = RecordingQuran::default();
        let err = (CHAPTER_BY_ID.handler)(&quran, JsonObject::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("`id`"));
        assert!(quran.calls().is_empty());
    }
}
