#![no_std]

mod errors;
mod events;
mod registry;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env};

use crate::errors::Error;
use crate::events::*;
use crate::registry::{AssetRegistryClient, VerifiableAssetClient};
use crate::storage::*;
use crate::types::*;

// ============================================================================
// Constants
// ============================================================================

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Owner cut is an integer percentage of the sale price
const MAX_OWNER_CUT: u32 = 100;

// ============================================================================
// Contract
// ============================================================================

/// LandMarket Marketplace Smart Contract
///
/// A decentralized marketplace on Stellar/Soroban for non-fungible land
/// assets: individual parcels and composite estates. It handles:
/// - Sale order creation, replacement and cancellation
/// - Atomic order execution against a fungible payment token
/// - Fingerprint-verified execution for composite assets
/// - Publication fee and owner cut collection
/// - Admin marketplace management
///
/// Asset registries and the payment token are external contracts; the
/// engine reaches them through narrow client interfaces and re-reads
/// ownership, balances and fingerprints fresh on every call.
#[contract]
pub struct LandMarket;

#[contractimpl]
impl LandMarket {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the marketplace contract.
    ///
    /// # Arguments
    /// * `admin` - Address that will have admin privileges and receive fees
    /// * `payment_token` - Fungible token accepted for all payments
    /// * `publication_fee` - Flat amount charged to sellers at listing time
    /// * `owner_cut_percent` - Percentage of each sale diverted to the admin
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    /// * `Error::InvalidInput` - If the fee is negative or the cut exceeds 100
    pub fn initialize(
        e: &Env,
        admin: Address,
        payment_token: Address,
        publication_fee: i128,
        owner_cut_percent: u32,
    ) -> Result<(), Error> {
        admin.require_auth();

        if is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }

        if publication_fee < 0 || owner_cut_percent > MAX_OWNER_CUT {
            return Err(Error::InvalidInput);
        }

        let config = MarketplaceConfig {
            admin: admin.clone(),
            payment_token: payment_token.clone(),
            publication_fee,
            owner_cut_percent,
            is_paused: false,
            updated_at: e.ledger().timestamp(),
        };

        set_config(e, &config);
        set_initialized(e);
        Self::extend_instance_ttl(e);

        InitializedEventData {
            admin,
            payment_token,
            publication_fee,
            owner_cut_percent,
        }
        .publish(e);

        Ok(())
    }

    // ========================================================================
    // MARKETPLACE CONFIGURATION
    // ========================================================================

    /// Get marketplace configuration
    pub fn get_config(e: &Env) -> Result<MarketplaceConfig, Error> {
        get_config(e).ok_or(Error::NotInitialized)
    }

    /// Update the flat listing fee (admin only)
    pub fn set_publication_fee(e: &Env, admin: Address, fee: i128) -> Result<(), Error> {
        admin.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::Unauthorized);
        }

        if fee < 0 {
            return Err(Error::InvalidInput);
        }

        config.publication_fee = fee;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        PublicationFeeUpdatedEventData {
            admin: admin.clone(),
            publication_fee: fee,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Update the sale cut diverted to the admin (admin only)
    pub fn set_owner_cut(e: &Env, admin: Address, percent: u32) -> Result<(), Error> {
        admin.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::Unauthorized);
        }

        if percent > MAX_OWNER_CUT {
            return Err(Error::InvalidInput);
        }

        config.owner_cut_percent = percent;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        OwnerCutUpdatedEventData {
            admin: admin.clone(),
            owner_cut_percent: percent,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Pause or unpause the marketplace (admin only)
    pub fn set_paused(e: &Env, admin: Address, paused: bool) -> Result<(), Error> {
        admin.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::Unauthorized);
        }

        config.is_paused = paused;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        MarketplacePausedEventData {
            admin: admin.clone(),
            is_paused: paused,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Check if marketplace is paused
    pub fn is_paused(e: &Env) -> Result<bool, Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        Ok(config.is_paused)
    }

    /// Hand admin privileges (and fee collection) to a new address (admin only)
    pub fn transfer_admin(e: &Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        admin.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::Unauthorized);
        }

        config.admin = new_admin.clone();
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        AdminTransferredEventData {
            admin: admin.clone(),
            new_admin,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // ORDER LIFECYCLE
    // ========================================================================

    /// List an asset for sale.
    ///
    /// The seller must be the current owner in the asset registry and must
    /// have authorized this contract to move the token (per-token approval
    /// or approval-for-all). An owner who holds a parcel only through an
    /// estate cannot list it: the registry reports the estate as owner.
    ///
    /// Creating an order for an asset that already has one replaces it
    /// under a fresh order id.
    ///
    /// # Arguments
    /// * `seller` - Address listing the asset
    /// * `nft_contract` - Asset registry the token lives in
    /// * `asset_id` - Token to list
    /// * `price` - Exact amount of payment token required to buy
    /// * `expires_at` - Ledger timestamp after which the order is dead
    ///
    /// # Errors
    /// * `Error::MarketplacePaused` - If the marketplace is paused
    /// * `Error::InvalidInput` - If `price` is negative
    /// * `Error::InvalidExpiration` - If `expires_at` is not in the future
    /// * `Error::Unauthorized` - If the seller doesn't own the token or the
    ///   marketplace is not approved to move it
    /// * `Error::InsufficientFunds` - If a publication fee is configured and
    ///   the seller's balance or allowance can't cover it
    pub fn create_order(
        e: &Env,
        seller: Address,
        nft_contract: Address,
        asset_id: u128,
        price: i128,
        expires_at: u64,
    ) -> Result<Order, Error> {
        seller.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if config.is_paused {
            return Err(Error::MarketplacePaused);
        }

        if price < 0 {
            return Err(Error::InvalidInput);
        }

        let now = e.ledger().timestamp();
        if expires_at <= now {
            return Err(Error::InvalidExpiration);
        }

        let assets = AssetRegistryClient::new(e, &nft_contract);
        if assets.owner_of(&asset_id) != seller {
            return Err(Error::Unauthorized);
        }

        let contract = e.current_contract_address();
        if !assets.is_approved_or_owner(&contract, &asset_id) {
            return Err(Error::Unauthorized);
        }

        let order = Order {
            id: next_order_id(e),
            seller: seller.clone(),
            nft_contract: nft_contract.clone(),
            asset_id,
            price,
            expires_at,
            created_at: now,
        };
        set_order(e, &order);

        // The fee goes straight to the admin; it is not escrowed and not
        // refunded on cancellation.
        if config.publication_fee > 0 {
            let payment = token::Client::new(e, &config.payment_token);
            if payment.balance(&seller) < config.publication_fee
                || payment.allowance(&seller, &contract) < config.publication_fee
            {
                return Err(Error::InsufficientFunds);
            }
            payment.transfer_from(&contract, &seller, &config.admin, &config.publication_fee);
        }

        OrderCreatedEventData {
            nft_contract,
            order_id: order.id,
            asset_id,
            seller,
            price,
            expires_at,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(order)
    }

    /// Cancel a live order. No funds move.
    ///
    /// # Errors
    /// * `Error::OrderNotFound` - If no order exists for the pair
    /// * `Error::Unauthorized` - If the caller is neither the order's seller
    ///   nor the marketplace admin
    pub fn cancel_order(
        e: &Env,
        caller: Address,
        nft_contract: Address,
        asset_id: u128,
    ) -> Result<Order, Error> {
        caller.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if config.is_paused {
            return Err(Error::MarketplacePaused);
        }

        let order = get_order(e, &nft_contract, asset_id).ok_or(Error::OrderNotFound)?;

        if caller != order.seller && caller != config.admin {
            return Err(Error::Unauthorized);
        }

        remove_order(e, &nft_contract, asset_id);

        OrderCancelledEventData {
            nft_contract,
            order_id: order.id,
            asset_id,
            seller: order.seller.clone(),
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(order)
    }

    /// Buy a listed asset.
    ///
    /// `price` must equal the stored order price exactly; a listing changed
    /// between quote and execution fails rather than filling at the new
    /// price. Payment is pulled from the buyer and split between seller and
    /// admin, the asset moves seller -> buyer, and the order is consumed,
    /// all within this one invocation.
    ///
    /// # Errors
    /// * `Error::OrderNotFound` - If no order exists (or it was already consumed)
    /// * `Error::OrderExpired` - If the order's expiry has passed
    /// * `Error::PriceMismatch` - If `price` differs from the stored price
    /// * `Error::Unauthorized` - If the buyer is the order's seller
    /// * `Error::InsufficientFunds` - If the buyer's balance or allowance
    ///   can't cover the price
    /// * `Error::OwnershipChanged` - If the seller no longer owns the asset
    pub fn execute_order(
        e: &Env,
        buyer: Address,
        nft_contract: Address,
        asset_id: u128,
        price: i128,
    ) -> Result<Order, Error> {
        buyer.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if config.is_paused {
            return Err(Error::MarketplacePaused);
        }

        let order = Self::settle(e, &config, &buyer, &nft_contract, asset_id, price)?;

        Self::extend_instance_ttl(e);
        Ok(order)
    }

    /// Buy a listed composite asset, proving its membership is unchanged.
    ///
    /// The registry must export the fingerprint capability for this to
    /// succeed at all; `fingerprint` must equal the freshly recomputed
    /// digest of the asset's current member set. Either failure blocks
    /// settlement before anything moves.
    ///
    /// # Errors
    /// * `Error::FingerprintUnsupported` - If the registry has no fingerprint capability
    /// * `Error::FingerprintMismatch` - If the supplied fingerprint is stale or wrong
    /// * Everything `execute_order` can return
    pub fn safe_execute_order(
        e: &Env,
        buyer: Address,
        nft_contract: Address,
        asset_id: u128,
        price: i128,
        fingerprint: BytesN<32>,
    ) -> Result<Order, Error> {
        buyer.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if config.is_paused {
            return Err(Error::MarketplacePaused);
        }

        let verifiable = VerifiableAssetClient::new(e, &nft_contract);
        let current = match verifiable.try_fingerprint_of(&asset_id) {
            Ok(Ok(fp)) => fp,
            _ => return Err(Error::FingerprintUnsupported),
        };
        if current != fingerprint {
            return Err(Error::FingerprintMismatch);
        }

        let order = Self::settle(e, &config, &buyer, &nft_contract, asset_id, price)?;

        Self::extend_instance_ttl(e);
        Ok(order)
    }

    /// Get the live order for an asset
    pub fn get_order(e: &Env, nft_contract: Address, asset_id: u128) -> Result<Order, Error> {
        get_order(e, &nft_contract, asset_id).ok_or(Error::OrderNotFound)
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Validate an execution attempt and settle it: payment legs, asset
    /// transfer, order removal. The order is removed from storage before
    /// any external transfer runs; a failing leg aborts the whole
    /// invocation, so no partial settlement is ever observable.
    fn settle(
        e: &Env,
        config: &MarketplaceConfig,
        buyer: &Address,
        nft_contract: &Address,
        asset_id: u128,
        price: i128,
    ) -> Result<Order, Error> {
        let order = get_order(e, nft_contract, asset_id).ok_or(Error::OrderNotFound)?;

        if e.ledger().timestamp() > order.expires_at {
            return Err(Error::OrderExpired);
        }

        if price != order.price {
            return Err(Error::PriceMismatch);
        }

        if *buyer == order.seller {
            return Err(Error::Unauthorized);
        }

        let contract = e.current_contract_address();
        let payment = token::Client::new(e, &config.payment_token);
        if payment.balance(buyer) < price || payment.allowance(buyer, &contract) < price {
            return Err(Error::InsufficientFunds);
        }

        // The order record is stale by design; the registry is the truth.
        let assets = AssetRegistryClient::new(e, nft_contract);
        if assets.owner_of(&asset_id) != order.seller {
            return Err(Error::OwnershipChanged);
        }

        let cut = order
            .price
            .checked_mul(config.owner_cut_percent as i128)
            .ok_or(Error::FeeOverflow)?
            .checked_div(100)
            .ok_or(Error::FeeOverflow)?;
        let seller_amount = order.price - cut;

        remove_order(e, nft_contract, asset_id);

        if cut > 0 {
            payment.transfer_from(&contract, buyer, &config.admin, &cut);
        }
        if seller_amount > 0 {
            payment.transfer_from(&contract, buyer, &order.seller, &seller_amount);
        }
        assets.transfer_from(&contract, &order.seller, buyer, &asset_id);

        OrderSuccessfulEventData {
            nft_contract: nft_contract.clone(),
            order_id: order.id,
            asset_id,
            seller: order.seller.clone(),
            buyer: buyer.clone(),
            price: order.price,
        }
        .publish(e);

        Ok(order)
    }

    /// Extend the TTL of instance storage.
    /// Called internally during state-changing operations.
    fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}
