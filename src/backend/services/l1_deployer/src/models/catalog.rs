use serde::Serialize;

/// Entry in the static catalog of known public subnets.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub chain_id: &'static str,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
    pub description: &'static str,
    pub is_active: bool,
    pub logo_url: &'static str,
}

pub const AVAILABLE_SUBNETS: [CatalogEntry; 3] = [
    CatalogEntry {
        id: "dexalot",
        name: "Dexalot",
        chain_id: "0x2VCAhX6vE3UnXC6s1CBPE6jJ4c4cHWMfPgCptuWS59pQ8WYxXw",
        rpc_url: "https://subnets.avax.network/dexalot/testnet/rpc",
        explorer_url: "https://subnets-test.avax.network/dexalot",
        description: "Decentralized exchange on Avalanche",
        is_active: true,
        logo_url: "/images/dexalot-logo.png",
    },
    CatalogEntry {
        id: "dfk",
        name: "DeFi Kingdoms",
        chain_id: "0x2rwhRKN8qfxK9AEJunfUjn5WH7PQzUPPQKCb59ak6fwsrwF2R",
        rpc_url: "https://subnets.avax.network/defikingdoms/dfk-chain/rpc",
        explorer_url: "https://subnets.avax.network/defikingdoms",
        description: "GameFi platform with DeFi elements",
        is_active: true,
        logo_url: "/images/dfk-logo.png",
    },
    CatalogEntry {
        id: "amplify",
        name: "Amplify",
        chain_id: "0xzJytnh96Pc8rM337bBrtMvJDbEdDNjcXiG3WkTNCiLp8krJUk",
        rpc_url: "https://subnets.avax.network/amplify/testnet/rpc",
        explorer_url: "https://subnets-test.avax.network/amplify",
        description: "DeFi protocol for yield amplification",
        is_active: true,
        logo_url: "/images/amplify-logo.png",
    },
];

pub fn find_by_chain_id(chain_id: &str) -> Option<&'static CatalogEntry> {
    AVAILABLE_SUBNETS.iter().find(|entry| entry.chain_id == chain_id)
}

/// Catalog entry enriched with mocked chain liveness.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    #[serde(flatten)]
    pub subnet: CatalogEntry,
    pub last_block_height: u64,
}
