use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::tool::{parse_args, schema_for, JsonObject, ToolDescriptor, ToolFuture};
use crate::domain::QuranService;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct NoArgs {}

pub const ALL_JUZS: ToolDescriptor = ToolDescriptor {
    name: "all_juzs",
    description: "Get all juzs (parts) of the Quran",
    input_schema: schema_for::<NoArgs>,
    handler: all_juzs,
};

fn all_juzs(quran: &dyn QuranService, args: JsonObject) -> ToolFuture<'_> {
    Box::pin(async move {
        let NoArgs {} = parse_args(args)?;
        Ok(quran.juzs().await?)
    })
}
