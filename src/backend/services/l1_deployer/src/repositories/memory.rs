use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::deployment::DeploymentRecord;
use crate::repositories::traits::DeploymentRepository;

/// Process-lifetime deployment store. The write lock serializes inserts
/// and updates; restart survival is out of scope.
pub struct InMemoryDeploymentRepository {
    records: RwLock<HashMap<String, DeploymentRecord>>,
}

impl InMemoryDeploymentRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryDeploymentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeploymentRepository for InMemoryDeploymentRepository {
    async fn store_deployment(&self, record: DeploymentRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn get_deployment(&self, id: &str) -> Result<Option<DeploymentRecord>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn update_deployment(&self, record: DeploymentRecord) -> Result<()> {
        let mut records = self.records.write().await;
        if !records.contains_key(&record.id) {
            bail!("Unknown deployment id: {}", record.id);
        }
        records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn list_by_wallet(&self, wallet_address: &str) -> Result<Vec<DeploymentRecord>> {
        let records = self.records.read().await;
        let mut owned: Vec<DeploymentRecord> = records
            .values()
            .filter(|record| record.wallet_address == wallet_address)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(owned)
    }
}
