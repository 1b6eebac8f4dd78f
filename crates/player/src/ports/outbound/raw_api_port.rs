//! Raw API Port - Object-safe HTTP boundary
//!
//! Works in `serde_json::Value` so it can live behind `Arc<dyn RawApiPort>`.
//! `crate::infrastructure::rest_api::SheetApi` layers the typed sheet ports
//! on top of it.

use async_trait::async_trait;
use serde_json::Value;

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn patch_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
