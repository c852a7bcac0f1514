pub mod chapter;
pub mod citation;
pub mod engine;
pub mod normalize;
pub mod resolver;
pub mod toc;

pub use crate::domain::model::{ChapterToken, Citation, MappingPayload, Resolution, TitleRange};
pub use crate::domain::ports::{ConfigProvider, MappingSource};
pub use crate::utils::error::Result;
