use crate::domain::model::MappingPayload;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies a freshly loaded mapping on every call.
///
/// Implementations report every failure as `RsaError::MappingLoadError`.
#[async_trait]
pub trait MappingSource: Send + Sync {
    async fn load(&self) -> Result<MappingPayload>;

    fn describe(&self) -> String;
}

#[async_trait]
impl<T: MappingSource + ?Sized> MappingSource for Box<T> {
    async fn load(&self) -> Result<MappingPayload> {
        (**self).load().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn archive_base_url(&self) -> &str;
    fn mapping_location(&self) -> &str;
}
