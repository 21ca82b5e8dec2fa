pub mod service;

use async_trait::async_trait;
use crate::core::errors::ServiceResult;

// StringService provides operations on strings.
#[async_trait]
pub trait StringService: Sync + Send {
    async fn uppercase(&self, s: &str) -> ServiceResult<String>;
    async fn count(&self, s: &str) -> usize;
}
