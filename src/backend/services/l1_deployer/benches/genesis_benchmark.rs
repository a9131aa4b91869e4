use criterion::{criterion_group, criterion_main, Criterion};
use l1_deployer::models::config::{
    FeeParameters, SubnetConfiguration, TokenAllocation, Validator, VmType,
};
use l1_deployer::services::genesis::GenesisBuilder;

fn bench_config() -> SubnetConfiguration {
    SubnetConfiguration {
        subnet_name: "bench".to_string(),
        vm_type: VmType::SubnetEvm,
        chain_id: 99999,
        gas_limit: 8_000_000,
        target_block_rate: 2,
        min_base_fee: 1_000_000_000,
        fee_parameters: FeeParameters::default(),
        validators: vec![Validator {
            node_id: "NodeID-1".to_string(),
            weight: 1000,
        }],
    }
}

fn generate_test_allocations(count: usize) -> Vec<TokenAllocation> {
    (0..count)
        .map(|i| TokenAllocation {
            address: format!("0x{:040x}", i),
            balance: "1000000000000000000".to_string(),
        })
        .collect()
}

fn benchmark_generate_genesis(c: &mut Criterion) {
    let config = bench_config();
    let mut group = c.benchmark_group("generate_genesis");

    for count in [10, 100, 1000].iter() {
        let allocations = generate_test_allocations(*count);

        group.bench_with_input(
            format!("alloc_{}_entries", count),
            count,
            |b, _| b.iter(|| GenesisBuilder::generate_genesis(&config, &allocations)),
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_generate_genesis);
criterion_main!(benches);
