use crate::core::chapter::in_range;
use crate::domain::model::MappingPayload;
use crate::utils::error::{Result, RsaError};

pub const DEFAULT_ARCHIVE_BASE: &str = "https://gc.nh.gov/rsa/html";

/// Document name used when no section is cited.
const MERGED_DOCUMENT: &str = "mrg";

/// Finds the archive folder for `chapter`.
///
/// An exact `chapter_to_title` key wins outright. Otherwise ranges are tried
/// in payload order and the first match wins; overlapping ranges are not
/// reconciled. `Ok(None)` means nothing matched.
pub fn resolve_folder<'a>(chapter: &str, mapping: &'a MappingPayload) -> Result<Option<&'a str>> {
    if let Some(folder) = mapping.chapter_to_title.get(chapter) {
        tracing::debug!("Direct mapping hit: {} -> {}", chapter, folder);
        return Ok(Some(folder.as_str()));
    }

    for range in &mapping.title_ranges {
        let start = range.start.to_lowercase();
        let end = range.end.to_lowercase();
        if in_range(chapter, &start, &end)? {
            tracing::debug!(
                "Range hit: {} in {}..={} -> {}",
                chapter,
                start,
                end,
                range.folder
            );
            return Ok(Some(range.folder.as_str()));
        }
    }

    tracing::debug!("No folder found for chapter {}", chapter);
    Ok(None)
}

/// Formats the document URL. Chapter and section are inserted verbatim.
pub fn build_url(
    base: &str,
    chapter: &str,
    section: Option<&str>,
    folder: Option<&str>,
) -> Result<String> {
    let folder = folder
        .filter(|f| !f.is_empty())
        .ok_or_else(|| RsaError::MissingFolder {
            chapter: chapter.to_string(),
        })?;

    let document = section.unwrap_or(MERGED_DOCUMENT);
    Ok(format!(
        "{}/{}/{}/{}-{}.htm",
        base.trim_end_matches('/'),
        folder,
        chapter,
        chapter,
        document
    ))
}
