//! Section extraction — splits generated text into the seven labeled sections.
//!
//! 1. each label is located at its first occurrence anywhere in the text
//!    (exact, case-sensitive, and not glued to a preceding alphanumeric, so
//!    `TAGS:` never matches `HASHTAGS:`)
//! 2. the found labels are ordered by position
//! 3. each section runs from the end of its label to the start of the next
//!    found label, or end of text
//!
//! Missing labels are not errors. Their keys are simply absent.

use std::collections::BTreeMap;

use tracing::{debug, warn};

/// One labeled section of the generated text, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Title,
    Description,
    Timestamps,
    SearchTerms,
    Hashtags,
    Cta,
    Tags,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Title,
        Section::Description,
        Section::Timestamps,
        Section::SearchTerms,
        Section::Hashtags,
        Section::Cta,
        Section::Tags,
    ];

    /// The literal marker the model is told to emit.
    pub fn label(self) -> &'static str {
        match self {
            Section::Title => "VIDEO TITLE:",
            Section::Description => "DESCRIPTION:",
            Section::Timestamps => "TIMESTAMPS:",
            Section::SearchTerms => "SEARCH TERMS:",
            Section::Hashtags => "HASHTAGS:",
            Section::Cta => "CALL TO ACTION:",
            Section::Tags => "TAGS:",
        }
    }
}

/// Trimmed section text keyed by section. Absent key = label not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSections {
    values: BTreeMap<Section, String>,
}

impl ParsedSections {
    pub fn get(&self, section: Section) -> Option<&str> {
        self.values.get(&section).map(String::as_str)
    }

    pub fn insert(&mut self, section: Section, value: impl Into<String>) {
        self.values.insert(section, value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sections whose label was not found, in template order.
    pub fn missing(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| !self.values.contains_key(s))
            .collect()
    }
}

/// Where a label was found: `start` is the label's first byte, `body` the
/// first byte after it.
struct LabelHit {
    section: Section,
    start: usize,
    body: usize,
}

/// First occurrence of `label`, skipping occurrences that are the tail of a
/// longer word.
fn find_label(text: &str, label: &str) -> Option<usize> {
    let mut offset = 0;
    while let Some(i) = text[offset..].find(label) {
        let at = offset + i;
        let glued = text[..at]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric);
        if !glued {
            return Some(at);
        }
        offset = at + label.len();
    }
    None
}

/// Extracts every section it can find. Never fails.
pub fn parse_sections(text: &str) -> ParsedSections {
    let mut hits: Vec<LabelHit> = Vec::with_capacity(Section::ALL.len());

    for section in Section::ALL {
        let label = section.label();
        match find_label(text, label) {
            Some(start) => hits.push(LabelHit {
                section,
                start,
                body: start + label.len(),
            }),
            None => debug!("Section label {label:?} not found"),
        }
    }

    // Hits are in template order here; any descent means the model reordered.
    if hits.windows(2).any(|pair| pair[1].start < pair[0].start) {
        warn!("Section labels appear out of template order");
    }
    hits.sort_by_key(|hit| hit.start);

    let mut parsed = ParsedSections::default();
    for (i, hit) in hits.iter().enumerate() {
        let end = hits.get(i + 1).map_or(text.len(), |next| next.start);
        parsed.insert(hit.section, text[hit.body..end].trim());
    }
    parsed
}
