use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_models::{Identifiable, Timestamped};

use crate::models::config::SubnetConfiguration;
use crate::utils::errors::{Result, ServiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentState {
    Configured,
    Deploying,
    Completed,
    Failed,
}

impl DeploymentState {
    pub fn is_terminal(self) -> bool {
        matches!(self, DeploymentState::Completed | DeploymentState::Failed)
    }
}

impl fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeploymentState::Configured => "configured",
            DeploymentState::Deploying => "deploying",
            DeploymentState::Completed => "completed",
            DeploymentState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Lifecycle record of one subnet deployment.
///
/// The record owns its configuration snapshot; once `begin_deploy` succeeds
/// the snapshot is never modified. Terminal states are immutable: a failed
/// or completed deployment can only be superseded by a new record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub id: String,
    pub wallet_address: String,
    pub status: DeploymentState,
    pub config: SubnetConfiguration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl DeploymentRecord {
    pub fn new(id: String, wallet_address: String, config: SubnetConfiguration) -> Self {
        Self {
            id,
            wallet_address,
            status: DeploymentState::Configured,
            config,
            subnet_id: None,
            rpc_url: None,
            explorer_url: None,
            created_at: Utc::now(),
            deployed_at: None,
            failure_reason: None,
        }
    }

    pub fn begin_deploy(&mut self) -> Result<()> {
        self.transition(DeploymentState::Configured, DeploymentState::Deploying)
    }

    pub fn complete(
        &mut self,
        subnet_id: String,
        rpc_url: String,
        explorer_url: String,
    ) -> Result<()> {
        self.transition(DeploymentState::Deploying, DeploymentState::Completed)?;
        self.subnet_id = Some(subnet_id);
        self.rpc_url = Some(rpc_url);
        self.explorer_url = Some(explorer_url);
        self.deployed_at = Some(Utc::now());
        Ok(())
    }

    pub fn fail(&mut self, reason: String) -> Result<()> {
        self.transition(DeploymentState::Deploying, DeploymentState::Failed)?;
        self.failure_reason = Some(reason);
        Ok(())
    }

    // All state changes funnel through here; the check happens before any
    // field is touched, so a rejected transition leaves the record intact.
    fn transition(&mut self, expected: DeploymentState, next: DeploymentState) -> Result<()> {
        if self.status != expected {
            return Err(ServiceError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}

impl Identifiable for DeploymentRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Timestamped for DeploymentRecord {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Status payload returned by the deployment-status endpoint: the record
/// plus mocked liveness data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentStatus {
    #[serde(flatten)]
    pub record: DeploymentRecord,
    pub validators: Vec<ValidatorStatus>,
    pub block_height: u64,
    pub is_healthy: bool,
    pub last_block_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorStatus {
    pub node_id: String,
    pub weight: i64,
    pub status: String,
    pub uptime: f64,
    pub stake_amount: i64,
}
