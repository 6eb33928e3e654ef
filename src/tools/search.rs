use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::tool::{parse_args, schema_for, JsonObject, ToolDescriptor, ToolFuture};
use crate::domain::{QuranService, SearchOptions};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchArgs {
    /// The search query
    pub query: String,
    /// Additional options for the search
    #[serde(default)]
    pub options: Option<SearchOptions>,
}

pub const SEARCH_QURAN: ToolDescriptor = ToolDescriptor {
    name: "search_quran",
    description: "Search the Quran for specific text",
    input_schema: schema_for::<SearchArgs>,
    handler: search_quran,
};

fn search_quran(quran: &dyn QuranService, args: JsonObject) -> ToolFuture<'_> {
    Box::pin(async move {
        let args: SearchArgs = parse_args(args)?;
        Ok(quran
            .search(&args.query, &args.options.unwrap_or_default())
            .await?)
    })
}
