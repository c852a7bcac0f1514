use crate::domain::model::MappingPayload;
use crate::domain::ports::MappingSource;
use crate::utils::error::{Result, RsaError};
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;

/// Fetches the mapping over HTTP, bypassing caches. No timeout is set.
#[derive(Debug, Clone)]
pub struct HttpMappingSource {
    client: Client,
    url: String,
}

impl HttpMappingSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl MappingSource for HttpMappingSource {
    async fn load(&self) -> Result<MappingPayload> {
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| RsaError::mapping_load(format!("request failed: {}", e)))?;

        tracing::debug!("Mapping response status: {}", response.status());

        if !response.status().is_success() {
            return Err(RsaError::mapping_load(format!("HTTP {}", response.status())));
        }

        response
            .json::<MappingPayload>()
            .await
            .map_err(|e| RsaError::mapping_load(format!("invalid mapping JSON: {}", e)))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
