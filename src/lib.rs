pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{file::FileMappingSource, http::HttpMappingSource, source_for_location};
pub use config::Settings;
pub use core::{
    chapter::in_range, citation::parse_citation, engine::CitationResolver, normalize::normalize,
    resolver::{build_url, resolve_folder},
};
pub use domain::model::{ChapterToken, Citation, MappingPayload, Resolution, TitleRange};
pub use utils::error::{Result, RsaError};
