use crate::core::citation::parse_citation;
use crate::core::normalize::normalize;
use crate::core::resolver::{build_url, resolve_folder};
use crate::domain::model::Resolution;
use crate::domain::ports::MappingSource;
use crate::utils::error::{Result, RsaError};

/// Turns raw citation text into an archive URL.
///
/// Holds no state between calls; the mapping is loaded again for every
/// resolution.
pub struct CitationResolver<S: MappingSource> {
    source: S,
    base_url: String,
}

impl<S: MappingSource> CitationResolver<S> {
    pub fn new(source: S, base_url: impl Into<String>) -> Self {
        Self {
            source,
            base_url: base_url.into(),
        }
    }

    pub async fn resolve(&self, raw: &str) -> Result<Resolution> {
        let normalized = normalize(raw);
        tracing::debug!("Normalized input: {:?}", normalized);

        // Parse first so bad input never touches the mapping source
        let citation = parse_citation(&normalized)?;
        tracing::debug!("Parsed citation: {:?}", citation);

        tracing::debug!("Loading mapping from {}", self.source.describe());
        let mapping = self.source.load().await.inspect_err(|e| {
            if let RsaError::MappingLoadError { reason } = e {
                tracing::debug!("Mapping load failed: {}", reason);
            }
        })?;
        tracing::debug!(
            "Mapping loaded: {} direct entries, {} title ranges",
            mapping.chapter_to_title.len(),
            mapping.title_ranges.len()
        );

        let folder = resolve_folder(&citation.chapter, &mapping)?.map(str::to_string);
        let url = build_url(
            &self.base_url,
            &citation.chapter,
            citation.section.as_deref(),
            folder.as_deref(),
        )?;

        Ok(Resolution {
            citation,
            folder: folder.unwrap_or_default(),
            url,
        })
    }
}
