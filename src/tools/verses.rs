use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::tool::{parse_args, schema_for, JsonObject, ToolDescriptor, ToolFuture};
use crate::domain::{QuranService, RandomVerseOptions, VerseOptions, VerseScope};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct VerseByKeyArgs {
    /// The verse key in format 'chapter:verse' (e.g., '1:1')
    pub key: String,
    /// Additional options for the verse
    #[serde(default)]
    pub options: Option<VerseOptions>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct VersesByChapterArgs {
    /// The chapter ID (1-114)
    #[serde(rename = "chapterId")]
    pub chapter_id: u32,
    /// Additional options for the verses
    #[serde(default)]
    pub options: Option<VerseOptions>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct VersesByPageArgs {
    /// The page number
    pub page: u32,
    /// Additional options for the verses
    #[serde(default)]
    pub options: Option<VerseOptions>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct VersesByJuzArgs {
    /// The juz number (1-30)
    pub juz: u32,
    /// Additional options for the verses
    #[serde(default)]
    pub options: Option<VerseOptions>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct VersesByHizbArgs {
    /// The hizb number
    pub hizb: u32,
    /// Additional options for the verses
    #[serde(default)]
    pub options: Option<VerseOptions>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct VersesByRubArgs {
    /// The rub number
    pub rub: u32,
    /// Additional options for the verses
    #[serde(default)]
    pub options: Option<VerseOptions>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RandomVerseArgs {
    /// Additional options for the verse
    #[serde(default)]
    pub options: Option<RandomVerseOptions>,
}

pub const VERSE_BY_KEY: ToolDescriptor = ToolDescriptor {
    name: "verse_by_key",
    description: "Get a verse by chapter:verse key (e.g., 1:1)",
    input_schema: schema_for::<VerseByKeyArgs>,
    handler: verse_by_key,
};

pub const VERSES_BY_CHAPTER: ToolDescriptor = ToolDescriptor {
    name: "verses_by_chapter",
    description: "Get verses by chapter ID",
    input_schema: schema_for::<VersesByChapterArgs>,
    handler: verses_by_chapter,
};

pub const VERSES_BY_PAGE: ToolDescriptor = ToolDescriptor {
    name: "verses_by_page",
    description: "Get verses by page number",
    input_schema: schema_for::<VersesByPageArgs>,
    handler: verses_by_page,
};

pub const VERSES_BY_JUZ: ToolDescriptor = ToolDescriptor {
    name: "verses_by_juz",
    description: "Get verses by juz number",
    input_schema: schema_for::<VersesByJuzArgs>,
    handler: verses_by_juz,
};

pub const VERSES_BY_HIZB: ToolDescriptor = ToolDescriptor {
    name: "verses_by_hizb",
    description: "Get verses by hizb number",
    input_schema: schema_for::<VersesByHizbArgs>,
    handler: verses_by_hizb,
};

pub const VERSES_BY_RUB: ToolDescriptor = ToolDescriptor {
    name: "verses_by_rub",
    description: "Get verses by rub number",
    input_schema: schema_for::<VersesByRubArgs>,
    handler: verses_by_rub,
};

pub const RANDOM_VERSE: ToolDescriptor = ToolDescriptor {
    name: "random_verse",
    description: "Get a random verse from the Quran",
    input_schema: schema_for::<RandomVerseArgs>,
    handler: random_verse,
};

fn verse_by_key(quran: &dyn QuranService, args: JsonObject) -> ToolFuture<'_> {
    Box::pin(async move {
        let args: VerseByKeyArgs = parse_args(args)?;
        Ok(quran
            .verse_by_key(&args.key, &args.options.unwrap_or_default())
            .await?)
    })
}

async fn scoped(
    quran: &dyn QuranService,
    scope: VerseScope,
    options: Option<VerseOptions>,
) -> Result<serde_json::Value, crate::core::error::ToolError> {
    Ok(quran.verses(scope, &options.unwrap_or_default()).await?)
}

fn verses_by_chapter(quran: &dyn QuranService, args: JsonObject) -> ToolFuture<'_> {
    Box::pin(async move {
        let args: VersesByChapterArgs = parse_args(args)?;
        scoped(quran, VerseScope::Chapter(args.chapter_id), args.options).await
    })
}

fn verses_by_page(quran: &dyn QuranService, args: JsonObject) -> ToolFuture<'_> {
    Box::pin(async move {
        let args: VersesByPageArgs = parse_args(args)?;
        scoped(quran, VerseScope::Page(args.page), args.options).await
    })
}

fn verses_by_juz(quran: &dyn QuranService, args: JsonObject) -> ToolFuture<'_> {
    Box::pin(async move {
        let args: VersesByJuzArgs = parse_args(args)?;
        scoped(quran, VerseScope::Juz(args.juz), args.options).await
    })
}

fn verses_by_hizb(quran: &dyn QuranService, args: JsonObject) -> ToolFuture<'_> {
    Box::pin(async move {
        let args: VersesByHizbArgs = parse_args(args)?;
        scoped(quran, VerseScope::Hizb(args.hizb), args.options).await
    })
}

fn verses_by_rub(quran: &dyn QuranService, args: JsonObject) -> ToolFuture<'_> {
    Box::pin(async move {
        let args: VersesByRubArgs = parse_args(args)?;
        scoped(quran, VerseScope::Rub(args.rub), args.options).await
    })
}

fn random_verse(quran: &dyn QuranService, args: JsonObject) -> ToolFuture<'_> {
    Box::pin(async move {
        let args: RandomVerseArgs = parse_args(args)?;
        Ok(quran.random_verse(&args.options.unwrap_or_default()).await?)
    })
}
