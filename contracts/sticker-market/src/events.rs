use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

use crate::types::StickerId;

#[near(event_json(standard = "nep297"))]
pub enum MarketEvent {
    #[event_version("1.0.0")]
    StickerListed {
        sticker_id: StickerId,
        uri: String,
        amount: u32,
        token: AccountId,
        price: U128,
        /// Hex root; `None` for ungated listings.
        whitelist_top_hash: Option<String>,
        /// True when this listing overwrote a prior one for the same id.
        relist: bool,
    },
    #[event_version("1.0.0")]
    StickerEnabled { sticker_id: StickerId },
    #[event_version("1.0.0")]
    StickerDisabled { sticker_id: StickerId },
    #[event_version("1.0.0")]
    StickerPurchased {
        sticker_id: StickerId,
        buyer_id: AccountId,
        token: AccountId,
        price: U128,
        amount_left: u32,
    },
    #[event_version("1.0.0")]
    PurchaseFailed {
        sticker_id: StickerId,
        buyer_id: AccountId,
        reason: String,
    },
    #[event_version("1.0.0")]
    OwnershipTransferred {
        old_owner: AccountId,
        new_owner: AccountId,
    },
    #[event_version("1.0.0")]
    TreasuryUpdated { treasury_id: AccountId },
    #[event_version("1.0.0")]
    StickerContractUpdated { sticker_contract: AccountId },
}
