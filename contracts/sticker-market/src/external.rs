// External contract interfaces for cross-contract calls
//
// `#[ext_contract]` generates helper structs that the compiler flags as dead_code
// even though they are used at runtime for cross-contract calls.
#![allow(dead_code)]

use near_sdk::json_types::U128;
use near_sdk::{ext_contract, AccountId};

use crate::types::StickerId;

/// Item ledger collaborator. The market calls `mint_one` on a successful
/// purchase; `sticker_balance_of` exists for boundary observers and is never
/// called by the market itself.
#[ext_contract(ext_sticker)]
pub trait StickerLedger {
    fn mint_one(&mut self, sticker_id: StickerId, receiver_id: AccountId);
    fn sticker_balance_of(&self, owner_id: AccountId, sticker_id: StickerId) -> U128;
}

/// NEP-141 payment collaborator; one instance per accepted token.
#[ext_contract(ext_ft)]
pub trait FungibleToken {
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>);
}
