use soroban_sdk::{Address, Env};

use crate::types::{
    MarketplaceConfig, Order, StorageKey, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(e: &Env) {
    e.storage()
        .instance()
        .set(&StorageKey::Initialized, &true);
}

pub fn get_config(e: &Env) -> Option<MarketplaceConfig> {
    let key = StorageKey::Config;
    let config = e.storage().persistent().get::<_, MarketplaceConfig>(&key);
    if config.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    config
}

pub fn set_config(e: &Env, config: &MarketplaceConfig) {
    let key = StorageKey::Config;
    e.storage().persistent().set(&key, config);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn get_order(e: &Env, nft_contract: &Address, asset_id: u128) -> Option<Order> {
    let key = StorageKey::Order(nft_contract.clone(), asset_id);
    let order = e.storage().persistent().get::<_, Order>(&key);
    if order.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    order
}

/// Overwrites any order already stored for the same (registry, token) pair.
pub fn set_order(e: &Env, order: &Order) {
    let key = StorageKey::Order(order.nft_contract.clone(), order.asset_id);
    e.storage().persistent().set(&key, order);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Idempotent: removing a pair with no stored order is a no-op.
pub fn remove_order(e: &Env, nft_contract: &Address, asset_id: u128) {
    let key = StorageKey::Order(nft_contract.clone(), asset_id);
    e.storage().persistent().remove(&key);
}

/// Ids are never reused; replacing an order for the same asset still
/// advances the counter.
pub fn next_order_id(e: &Env) -> u64 {
    let key = StorageKey::OrderCounter;
    let id = e.storage().persistent().get::<_, u64>(&key).unwrap_or(0) + 1;
    e.storage().persistent().set(&key, &id);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    id
}
