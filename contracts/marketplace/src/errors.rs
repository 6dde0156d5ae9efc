use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    MarketplacePaused = 4,
    InvalidInput = 5,
    InvalidExpiration = 6,
    OrderNotFound = 7,
    OrderExpired = 8,
    PriceMismatch = 9,
    InsufficientFunds = 10,
    OwnershipChanged = 11,
    FingerprintUnsupported = 12,
    FingerprintMismatch = 13,
    FeeOverflow = 14,
}
