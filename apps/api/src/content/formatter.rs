use serde::{Deserialize, Serialize};

use crate::content::sections::{ParsedSections, Section};

pub const NO_TITLE_PLACEHOLDER: &str = "No title generated";
pub const NO_TAGS_PLACEHOLDER: &str = "No tags generated";

/// Sections joined, in this order, into the description blob.
const DESCRIPTION_PARTS: [Section; 5] = [
    Section::Description,
    Section::Timestamps,
    Section::SearchTerms,
    Section::Hashtags,
    Section::Cta,
];

/// The three user-facing fields. Every field is always a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentResult {
    pub title: String,
    pub description: String,
    pub tags: String,
}

/// Assembles parsed sections into a `ContentResult`.
///
/// Absent description parts become empty segments; the blank-line separators
/// are always emitted, so the blob has a fixed shape.
pub fn format_result(sections: &ParsedSections) -> ContentResult {
    let description = DESCRIPTION_PARTS
        .iter()
        .map(|s| sections.get(*s).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n\n");

    ContentResult {
        title: non_empty_or(sections.get(Section::Title), NO_TITLE_PLACEHOLDER),
        description,
        tags: non_empty_or(sections.get(Section::Tags), NO_TAGS_PLACEHOLDER),
    }
}

fn non_empty_or(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}
