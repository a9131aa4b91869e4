use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use shared_utils::RandomSource;
use tracing::{error, info};

use crate::models::catalog::{self, CatalogInfo};
use crate::models::config::SubnetConfiguration;
use crate::models::deployment::{DeploymentRecord, DeploymentStatus, ValidatorStatus};
use crate::repositories::traits::DeploymentRepository;
use crate::services::validation::{ConfigValidator, ValidationReport};
use crate::utils::errors::{Result, ServiceError};
use crate::utils::ids;

// Simulated deployment phases, run strictly in order.
const DEPLOYMENT_PHASES: [&str; 6] = [
    "Validating configuration",
    "Creating subnet",
    "Generating VM genesis",
    "Configuring validators",
    "Starting blockchain",
    "Enabling ICM",
];

const DEFAULT_PHASE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub enum DeployOutcome {
    Deployed(DeploymentRecord),
    Rejected(ValidationReport),
}

pub struct DeployerService {
    store: Arc<dyn DeploymentRepository>,
    random: Arc<dyn RandomSource>,
    phase_delay: Duration,
}

impl DeployerService {
    pub fn new(store: Arc<dyn DeploymentRepository>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            store,
            random,
            phase_delay: DEFAULT_PHASE_DELAY,
        }
    }

    pub fn with_phase_delay(mut self, phase_delay: Duration) -> Self {
        self.phase_delay = phase_delay;
        self
    }

    /// Runs the full deploy lifecycle for one configuration.
    ///
    /// Invalid configurations are rejected without creating a record. A
    /// phase failure leaves the record stored in the failed state; the
    /// record is never removed.
    pub async fn deploy_subnet(
        &self,
        config: SubnetConfiguration,
        wallet_address: String,
    ) -> Result<DeployOutcome> {
        let report = ConfigValidator::validate(&config);
        if !report.valid {
            info!(
                subnet = %config.subnet_name,
                errors = report.errors.len(),
                "Deployment rejected by validation"
            );
            return Ok(DeployOutcome::Rejected(report));
        }

        let mut record =
            DeploymentRecord::new(ids::deployment_id(), wallet_address, config);
        self.store.store_deployment(record.clone()).await?;

        record.begin_deploy()?;
        self.store.update_deployment(record.clone()).await?;

        match self.run_phases(&record).await {
            Ok(()) => {
                let slug = ids::subnet_slug(&record.config.subnet_name);
                record.complete(
                    format!("0x{}", self.random.hex_string(64)),
                    format!("https://subnets.avax.network/{slug}/rpc"),
                    format!("https://subnets.avax.network/{slug}/explorer"),
                )?;
                self.store.update_deployment(record.clone()).await?;
                info!(deployment = %record.id, subnet = %record.config.subnet_name, "Subnet deployed");
                Ok(DeployOutcome::Deployed(record))
            }
            Err(err) => {
                error!(deployment = %record.id, %err, "Deployment failed");
                record.fail(err.to_string())?;
                self.store.update_deployment(record.clone()).await?;
                Err(err)
            }
        }
    }

    pub async fn deployment_status(&self, id: &str) -> Result<Option<DeploymentStatus>> {
        let Some(record) = self.store.get_deployment(id).await? else {
            return Ok(None);
        };

        let validators = record
            .config
            .validators
            .iter()
            .map(|validator| ValidatorStatus {
                node_id: validator.node_id.clone(),
                weight: validator.weight,
                status: "active".to_string(),
                uptime: self.random.range_f64(0.95, 1.0),
                stake_amount: validator.weight,
            })
            .collect();

        Ok(Some(DeploymentStatus {
            record,
            validators,
            block_height: self.random.range_u64(10_000, 110_000),
            is_healthy: true,
            last_block_time: Utc::now(),
        }))
    }

    pub async fn list_deployments(&self, wallet_address: &str) -> Result<Vec<DeploymentRecord>> {
        Ok(self.store.list_by_wallet(wallet_address).await?)
    }

    /// Catalog lookup with mocked chain liveness for the info endpoint.
    pub fn catalog_info(&self, chain_id: &str) -> Option<CatalogInfo> {
        catalog::find_by_chain_id(chain_id).map(|subnet| CatalogInfo {
            subnet: subnet.clone(),
            last_block_height: self.random.range_u64(1_000_000, 2_000_000),
        })
    }

    async fn run_phases(&self, record: &DeploymentRecord) -> Result<()> {
        for phase in DEPLOYMENT_PHASES {
            info!(deployment = %record.id, phase, "Running deployment phase");
            self.run_phase(record, phase)
                .await
                .map_err(|err| ServiceError::DeploymentFailure(format!("{phase}: {err}")))?;
        }
        Ok(())
    }

    // Each phase is simulated; real subnet plumbing would sit behind this
    // seam, which is why failures are caught per phase.
    async fn run_phase(&self, _record: &DeploymentRecord, _phase: &str) -> anyhow::Result<()> {
        tokio::time::sleep(self.phase_delay).await;
        Ok(())
    }
}
