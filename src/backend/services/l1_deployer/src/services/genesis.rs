use std::collections::BTreeMap;

use crate::models::config::{SubnetConfiguration, TokenAllocation};
use crate::models::genesis::{
    AllocEntry, ChainConfig, FeeConfig, GenesisDocument, ZERO_ADDRESS, ZERO_HASH,
};

pub struct GenesisBuilder;

impl GenesisBuilder {
    /// Renders the genesis document for a configuration.
    ///
    /// Pure function of its inputs. Allocations are folded in input order:
    /// entries missing an address or balance are skipped without error
    /// (lenient-merge policy), addresses are lowercased, and a duplicate
    /// address keeps its last occurrence.
    pub fn generate_genesis(
        config: &SubnetConfiguration,
        allocations: &[TokenAllocation],
    ) -> GenesisDocument {
        let fee = &config.fee_parameters;
        let fee_config = FeeConfig {
            gas_limit: config.gas_limit,
            target_block_rate: config.target_block_rate,
            min_base_fee: config.min_base_fee.to_string(),
            target_gas: fee.target_gas.clone(),
            base_fee_change_denominator: fee.base_fee_change_denominator.clone(),
            min_block_gas_cost: fee.min_block_gas_cost.clone(),
            max_block_gas_cost: fee.max_block_gas_cost.clone(),
            block_gas_cost_step: fee.block_gas_cost_step.clone(),
        };

        let mut alloc = BTreeMap::new();
        for allocation in allocations {
            if allocation.address.is_empty() || allocation.balance.is_empty() {
                continue;
            }
            alloc.insert(
                allocation.address.to_lowercase(),
                AllocEntry {
                    balance: allocation.balance.clone(),
                },
            );
        }

        GenesisDocument {
            config: ChainConfig {
                chain_id: config.chain_id,
                homestead_block: 0,
                eip150_block: 0,
                eip150_hash: ZERO_HASH.to_string(),
                eip155_block: 0,
                eip158_block: 0,
                byzantium_block: 0,
                constantinople_block: 0,
                petersburg_block: 0,
                istanbul_block: 0,
                muir_glacier_block: 0,
                subnet_evm_timestamp: 0,
                fee_config,
            },
            alloc,
            nonce: "0x0".to_string(),
            timestamp: "0x0".to_string(),
            extra_data: "0x00".to_string(),
            gas_limit: format!("0x{:x}", config.gas_limit),
            difficulty: "0x0".to_string(),
            mix_hash: ZERO_HASH.to_string(),
            coinbase: ZERO_ADDRESS.to_string(),
            number: "0x0".to_string(),
            gas_used: "0x0".to_string(),
            parent_hash: ZERO_HASH.to_string(),
        }
    }
}
