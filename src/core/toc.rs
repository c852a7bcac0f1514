//! Builds a [`MappingPayload`] from the archive's table-of-contents page.
//!
//! The page lists every title as `TITLE XIX` followed somewhere by
//! `(Includes Chapters 216 - 227-F)` or `(Includes Chapter 288)`. When the
//! page also links to chapter folders (`/rsa/html/xix/225-a/...`) those links
//! become direct entries.

use crate::core::resolver::resolve_folder;
use crate::domain::model::{MappingPayload, TitleRange};
use crate::utils::error::{Result, RsaError};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const TOC_URL: &str = "https://gc.nh.gov/rsa/html/nhtoc.htm";
pub const DEFAULT_FIXTURE: &str = "fixtures/nhtoc.html";
pub const DEFAULT_OUTPUT: &str = "data/chapter_to_title.json";

/// Bytes searched after the last title on the page.
const LAST_TITLE_WINDOW: usize = 2500;
const LIVE_TIMEOUT: Duration = Duration::from_secs(30);

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("valid regex"));
static LINE_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").expect("valid regex"));
static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bTITLE\s+([IVXLCDM]+(?:-A)?)\b").expect("valid title regex")
});
static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Includes\s+Chapters?\s+([0-9]+(?:-[A-Z]+)?)\s*-\s*([0-9]+(?:-[A-Z]+)?)")
        .expect("valid range regex")
});
static SINGLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Includes\s+Chapter\s+([0-9]+(?:-[A-Z]+)?)").expect("valid chapter regex")
});
static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)/rsa/html/([a-z0-9-]+)/([0-9]+(?:-[a-z]+)?)/").expect("valid link regex")
});

/// Where the table of contents comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocSource {
    Live { url: String },
    Fixture { path: PathBuf },
}

impl TocSource {
    pub fn label(&self) -> &'static str {
        match self {
            TocSource::Live { .. } => "live",
            TocSource::Fixture { .. } => "fixture",
        }
    }

    pub async fn read(&self) -> Result<String> {
        match self {
            TocSource::Fixture { path } => read_fixture(path).await,
            TocSource::Live { url } => fetch_live(url).await,
        }
    }
}

async fn read_fixture(path: &Path) -> Result<String> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Err(RsaError::TocError {
            message: format!(
                "Fixture not found at {}. Save the table of contents page there first",
                path.display()
            ),
        });
    }
    let bytes = tokio::fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

async fn fetch_live(url: &str) -> Result<String> {
    let client = Client::builder().timeout(LIVE_TIMEOUT).build()?;

    tracing::debug!("Fetching table of contents from {}", url);
    let response = client
        .get(url)
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .header(ACCEPT, BROWSER_ACCEPT)
        .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .send()
        .await?
        .error_for_status()?;

    let bytes = response.bytes().await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Extracts one range per title that states which chapters it includes.
/// Titles without an "Includes Chapter(s)" note (repealed titles) are skipped.
pub fn extract_title_ranges(toc_html: &str) -> Vec<TitleRange> {
    let text = SPACES_RE.replace_all(toc_html, " ");
    let text = LINE_END_RE.replace_all(&text, "\n");

    let titles: Vec<_> = TITLE_RE.captures_iter(&text).collect();
    let mut ranges = Vec::new();

    for (i, caps) in titles.iter().enumerate() {
        let title_key = caps[1].to_uppercase();
        let folder = title_key.to_lowercase();

        let window_start = caps.get(0).map_or(0, |m| m.end());
        let window_end = match titles.get(i + 1).and_then(|next| next.get(0)) {
            Some(next) => next.start(),
            None => floor_char_boundary(&text, text.len().min(window_start + LAST_TITLE_WINDOW)),
        };
        let window = &text[window_start..window_end];

        let (start, end) = if let Some(range) = RANGE_RE.captures(window) {
            (range[1].to_uppercase(), range[2].to_uppercase())
        } else if let Some(single) = SINGLE_RE.captures(window) {
            let chapter = single[1].to_uppercase();
            (chapter.clone(), chapter)
        } else {
            tracing::debug!("Title {} lists no chapters, skipping", title_key);
            continue;
        };

        ranges.push(TitleRange {
            end,
            folder,
            start,
            title_key: Some(title_key),
        });
    }

    ranges
}

/// Collects `chapter -> folder` from links into chapter folders.
pub fn extract_chapter_links(toc_html: &str) -> BTreeMap<String, String> {
    LINK_RE
        .captures_iter(toc_html)
        .map(|caps| (caps[2].to_lowercase(), caps[1].to_lowercase()))
        .collect()
}

pub fn build_payload(toc_html: &str, source: &TocSource) -> MappingPayload {
    MappingPayload {
        chapter_to_title: extract_chapter_links(toc_html),
        generated_from: Some(source.label().to_string()),
        title_ranges: extract_title_ranges(toc_html),
        toc_url: Some(TOC_URL.to_string()),
    }
}

/// Reads the table of contents, writes the payload as pretty JSON to `out`.
pub async fn rebuild_mapping(source: &TocSource, out: &Path) -> Result<MappingPayload> {
    let toc_html = source.read().await?;
    let payload = build_payload(&toc_html, source);

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_string_pretty(&payload)?;
    tokio::fs::write(out, json).await?;

    tracing::info!(
        "Wrote {} ({} direct entries, {} title ranges)",
        out.display(),
        payload.chapter_to_title.len(),
        payload.title_ranges.len()
    );

    match resolve_folder("225-a", &payload) {
        Ok(folder) => tracing::info!("Sanity check: 225-A -> folder {:?}", folder),
        Err(e) => tracing::warn!("Sanity check for 225-A failed: {}", e),
    }
    if payload.title_ranges.is_empty() {
        tracing::warn!("No title ranges found. The table of contents format may have changed.");
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOC: &str = "<html><body>\r\n\
        <h2>TITLE XIX</h2>\t<p>PUBLIC RECREATION\t(Includes Chapters 216 - 227-F)</p>\r\n\
        <a href=\"/rsa/html/XIX/225-A/225-A-mrg.htm\">225-A</a>\r\n\
        <h2>TITLE XIX-A</h2><p>(Includes Chapters 227-G - 227-M)</p>\r\n\
        <h2>TITLE XXII</h2><p>REPEALED</p>\n\
        <h2>Title XXIII</h2><p>(Includes Chapter 288)</p>\n\
        </body></html>";

    #[test]
    fn test_extract_title_ranges() {
        let ranges = extract_title_ranges(TOC);

        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0].title_key.as_deref(), Some("XIX"));
        assert_eq!(ranges[0].folder, "xix");
        assert_eq!((ranges[0].start.as_str(), ranges[0].end.as_str()), ("216", "227-F"));
        assert_eq!(ranges[1].folder, "xix-a");
        assert_eq!((ranges[1].start.as_str(), ranges[1].end.as_str()), ("227-G", "227-M"));
        assert_eq!(ranges[2].folder, "xxiii");
        assert_eq!((ranges[2].start.as_str(), ranges[2].end.as_str()), ("288", "288"));
    }

    #[test]
    fn test_extract_chapter_links() {
        let links = extract_chapter_links(TOC);
        assert_eq!(links.len(), 1);
        assert_eq!(links.get("225-a").map(String::as_str), Some("xix"));
    }

    #[test]
    fn test_last_title_window_respects_char_boundaries() {
        let html = format!("TITLE IV {}", "é".repeat(LAST_TITLE_WINDOW));
        assert!(extract_title_ranges(&html).is_empty());
    }

    #[test]
    fn test_build_payload_metadata() {
        let source = TocSource::Fixture {
            path: PathBuf::from(DEFAULT_FIXTURE),
        };
        let payload = build_payload(TOC, &source);

        assert_eq!(payload.generated_from.as_deref(), Some("fixture"));
        assert_eq!(payload.toc_url.as_deref(), Some(TOC_URL));
        assert_eq!(resolve_folder("227-h", &payload).unwrap(), Some("xix-a"));
    }
}
