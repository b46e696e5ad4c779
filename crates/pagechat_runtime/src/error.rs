//! Engine error types

use thiserror::Error;

use crate::credentials::StoreError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("credential storage failed: {0}")]
    Storage(#[from] StoreError),
}
