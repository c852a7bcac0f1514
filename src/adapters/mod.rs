// Adapters layer: concrete mapping sources.

pub mod file;
pub mod http;

use crate::domain::ports::MappingSource;
use crate::utils::validation::is_http_location;
use file::FileMappingSource;
use http::HttpMappingSource;

/// Picks a source by location: http(s) URLs are fetched, anything else is a path.
pub fn source_for_location(location: &str) -> Box<dyn MappingSource> {
    if is_http_location(location) {
        Box::new(HttpMappingSource::new(location.trim()))
    } else {
        Box::new(FileMappingSource::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_location() {
        assert_eq!(
            source_for_location("https://example.com/map.json").describe(),
            "https://example.com/map.json"
        );
        assert_eq!(
            source_for_location("data/chapter_to_title.json").describe(),
            "data/chapter_to_title.json"
        );
    }
}
