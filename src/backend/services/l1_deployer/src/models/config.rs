use serde::{Deserialize, Serialize};

// Gas limits below this are accepted but flagged as advisory
pub const MIN_RECOMMENDED_GAS_LIMIT: u64 = 1_000_000;

/// Virtual machine flavor a subnet runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VmType {
    #[serde(rename = "SubnetEVM")]
    SubnetEvm,
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetConfiguration {
    pub subnet_name: String,
    pub vm_type: VmType,
    pub chain_id: i64,
    pub gas_limit: u64,
    pub target_block_rate: u64,
    pub min_base_fee: u64,
    #[serde(default)]
    pub fee_parameters: FeeParameters,
    #[serde(default)]
    pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validator {
    #[serde(default)]
    pub node_id: String,
    pub weight: i64,
}

/// Derived fee-config fields. Defaults match the Subnet-EVM reference
/// values; callers may override them per field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeParameters {
    pub target_gas: String,
    pub base_fee_change_denominator: String,
    pub min_block_gas_cost: String,
    pub max_block_gas_cost: String,
    pub block_gas_cost_step: String,
}

impl Default for FeeParameters {
    fn default() -> Self {
        Self {
            target_gas: "100000000".to_string(),
            base_fee_change_denominator: "12".to_string(),
            min_block_gas_cost: "0".to_string(),
            max_block_gas_cost: "10000000".to_string(),
            block_gas_cost_step: "200000".to_string(),
        }
    }
}

/// Initial token allocation for the genesis document. Balances stay
/// decimal strings end to end; they are never parsed into floats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenAllocation {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub balance: String,
}
