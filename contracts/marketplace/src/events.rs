use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub payment_token: Address,
    pub publication_fee: i128,
    pub owner_cut_percent: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderCreatedEventData {
    #[topic]
    pub nft_contract: Address,
    pub order_id: u64,
    pub asset_id: u128,
    pub seller: Address,
    pub price: i128,
    pub expires_at: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderCancelledEventData {
    #[topic]
    pub nft_contract: Address,
    pub order_id: u64,
    pub asset_id: u128,
    pub seller: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderSuccessfulEventData {
    #[topic]
    pub nft_contract: Address,
    pub order_id: u64,
    pub asset_id: u128,
    pub seller: Address,
    pub buyer: Address,
    pub price: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketplacePausedEventData {
    #[topic]
    pub admin: Address,
    pub is_paused: bool,
}

#[contractevent(topics = ["publication_fee_updated"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicationFeeUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub publication_fee: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerCutUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub owner_cut_percent: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferredEventData {
    #[topic]
    pub admin: Address,
    pub new_admin: Address,
}
