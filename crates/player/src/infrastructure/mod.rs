//! Adapters for the sheet backend.

pub mod http_client;
pub mod rest_api;

pub use http_client::HttpClient;
pub use rest_api::SheetApi;
