use anyhow::Result;
use async_trait::async_trait;

use crate::models::deployment::DeploymentRecord;

#[async_trait]
pub trait DeploymentRepository: Send + Sync {
    async fn store_deployment(&self, record: DeploymentRecord) -> Result<()>;
    async fn get_deployment(&self, id: &str) -> Result<Option<DeploymentRecord>>;
    async fn update_deployment(&self, record: DeploymentRecord) -> Result<()>;
    async fn list_by_wallet(&self, wallet_address: &str) -> Result<Vec<DeploymentRecord>>;
}
