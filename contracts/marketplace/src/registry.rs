use soroban_sdk::{contractclient, Address, BytesN, Env};

/// Non-fungible registry interface the marketplace trades against.
/// Both the parcel registry and the estate registry expose this surface.
#[allow(dead_code)]
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    /// Current owner of the token
    fn owner_of(e: Env, token_id: u128) -> Address;

    /// Whether `operator` may move the token: the owner itself, a
    /// per-token approval, or a blanket approval-for-all from the owner
    fn is_approved_or_owner(e: Env, operator: Address, token_id: u128) -> bool;

    /// Moves the token. The registry rejects the call when `from` is not
    /// the current owner or `operator` is not authorized.
    fn transfer_from(e: Env, operator: Address, from: Address, to: Address, token_id: u128);
}

/// Optional capability of composite-asset registries (estates): a digest
/// of the token's current member set, recomputed whenever membership
/// changes. Probed at call time via the client's `try_` variant; simple
/// registries simply don't export it.
#[allow(dead_code)]
#[contractclient(name = "VerifiableAssetClient")]
pub trait VerifiableAsset {
    fn fingerprint_of(e: Env, token_id: u128) -> BytesN<32>;
}
