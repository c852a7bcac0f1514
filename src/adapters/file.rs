use crate::domain::model::MappingPayload;
use crate::domain::ports::MappingSource;
use crate::utils::error::{Result, RsaError};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the mapping from disk on every load.
#[derive(Debug, Clone)]
pub struct FileMappingSource {
    path: PathBuf,
}

impl FileMappingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MappingSource for FileMappingSource {
    async fn load(&self) -> Result<MappingPayload> {
        let data = tokio::fs::read(&self.path).await.map_err(|e| {
            RsaError::mapping_load(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_slice(&data)
            .map_err(|e| RsaError::mapping_load(format!("invalid mapping JSON: {}", e)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
