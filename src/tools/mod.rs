//! The fixed tool catalog.

pub mod chapters;
pub mod juzs;
pub mod registry;
pub mod search;
pub mod verses;

#[cfg(test)]
pub(crate) mod testing;

use crate::core::tool::ToolDescriptor;

/// Every tool this server exposes.
pub fn catalog() -> Vec<ToolDescriptor> {
    vec![
        chapters::ALL_CHAPTERS,
        chapters::CHAPTER_BY_ID,
        verses::VERSE_BY_KEY,
        verses::VERSES_BY_CHAPTER,
        verses::VERSES_BY_PAGE,
        verses::VERSES_BY_JUZ,
        verses::VERSES_BY_HIZB,
        verses::VERSES_BY_RUB,
        verses::RANDOM_VERSE,
        search::SEARCH_QURAN,
        juzs::ALL_JUZS,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_names_are_unique() {
        let tools = catalog();
        let names: HashSet<&str> = tools.iter().map(|t| t.name).collect();
        assert_eq!(tools.len(), 11);
        assert_eq!(names.len(), tools.len());
    }

    #[test]
    fn every_schema_is_an_object() {
        for tool in catalog() {
            let schema = (tool.input_schema)();
            assert_eq!(schema["type"], "object", "{} schema", tool.name);
            assert!(!tool.description.is_empty());
        }
    }
}
