use thiserror::Error;

use crate::models::deployment::DeploymentState;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Storage error: {0}")]
    StorageError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Deployment failed: {0}")]
    DeploymentFailure(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition {
        from: DeploymentState,
        to: DeploymentState,
    },

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
