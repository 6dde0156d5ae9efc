use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Initialized,
    Config,
    Order(Address, u128),
    OrderCounter,
}

/// A live sale offer for one asset. At most one order exists per
/// (registry, token) pair; re-listing the same asset overwrites the
/// previous record under a fresh id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Order {
    pub id: u64,
    pub seller: Address,
    pub nft_contract: Address,
    pub asset_id: u128,
    pub price: i128,
    pub expires_at: u64,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketplaceConfig {
    pub admin: Address,
    pub payment_token: Address,
    pub publication_fee: i128,
    pub owner_cut_percent: u32,
    pub is_paused: bool,
    pub updated_at: u64,
}

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
