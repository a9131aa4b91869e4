use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const ZERO_HASH: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000000";
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Fee configuration block inside the genesis chain config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeConfig {
    pub gas_limit: u64,
    pub target_block_rate: u64,
    pub min_base_fee: String,
    pub target_gas: String,
    pub base_fee_change_denominator: String,
    pub min_block_gas_cost: String,
    pub max_block_gas_cost: String,
    pub block_gas_cost_step: String,
}

/// Chain parameters of the genesis document. Fork-activation markers are
/// carried as literal zeros; no activation logic exists behind them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    pub chain_id: i64,
    pub homestead_block: u64,
    pub eip150_block: u64,
    pub eip150_hash: String,
    pub eip155_block: u64,
    pub eip158_block: u64,
    pub byzantium_block: u64,
    pub constantinople_block: u64,
    pub petersburg_block: u64,
    pub istanbul_block: u64,
    pub muir_glacier_block: u64,
    #[serde(rename = "subnetEVMTimestamp")]
    pub subnet_evm_timestamp: u64,
    pub fee_config: FeeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocEntry {
    pub balance: String,
}

/// Canonical genesis document a subnet is bootstrapped from.
///
/// The alloc map is a BTreeMap so serialization order is independent of
/// insertion history and identical inputs render byte-identical JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisDocument {
    pub config: ChainConfig,
    pub alloc: BTreeMap<String, AllocEntry>,
    pub nonce: String,
    pub timestamp: String,
    pub extra_data: String,
    pub gas_limit: String,
    pub difficulty: String,
    pub mix_hash: String,
    pub coinbase: String,
    pub number: String,
    pub gas_used: String,
    pub parent_hash: String,
}
