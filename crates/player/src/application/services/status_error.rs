//! Status aggregation errors.

use ficha_domain::StatusField;

use crate::ports::outbound::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("Failed to read status: {0}")]
    Read(#[source] ApiError),
    #[error("Failed to write {field}: {source}")]
    Write {
        field: StatusField,
        #[source]
        source: ApiError,
    },
    #[error("Failed to save attributes: {0}")]
    Attributes(#[source] ApiError),
}
