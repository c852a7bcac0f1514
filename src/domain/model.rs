use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A parsed statute citation. Both parts are lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub chapter: String,
    pub section: Option<String>,
}

/// Ordering key for a chapter identifier: numeric base, then the letter
/// suffix read as a bijective base-26 numeral (no suffix = 0, `A` = 1,
/// `Z` = 26, `AA` = 27).
///
/// Field order matters: the derived `Ord` compares `base` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChapterToken {
    pub base: u64,
    pub suffix_ordinal: u64,
}

/// An inclusive span of chapters sharing one archive folder.
///
/// Fields are declared alphabetically so serialized payloads keep sorted keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRange {
    pub end: String,
    pub folder: String,
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_key: Option<String>,
}

/// The chapter-to-folder mapping document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingPayload {
    #[serde(default)]
    pub chapter_to_title: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_from: Option<String>,
    #[serde(default)]
    pub title_ranges: Vec<TitleRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub citation: Citation,
    pub folder: String,
    pub url: String,
}
