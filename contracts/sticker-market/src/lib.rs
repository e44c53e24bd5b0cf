//! Sticker Market — allowlist-gated, fixed-price sales of limited-edition
//! collectible stickers, paid in NEP-141 tokens, minted on an external sticker
//! ledger. NEP-297 JSON events.
//!
//! Payment arrives through `ft_transfer_call` on the payment token: the token
//! contract invokes [`Contract::ft_on_transfer`] with the purchase request
//! (sticker id + Merkle proof) in `msg`. Any rejected purchase panics, so the
//! token contract refunds the buyer and no listing state changes.

use near_sdk::store::IterableMap;
use near_sdk::{near, AccountId, BorshStorageKey, PanicOnDefault};

// --- Modules ---

mod admin;
pub mod constants;
mod errors;
mod events;
mod external;
mod internal;
mod listing;
mod purchase;
pub mod types;
mod views;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::MarketError;
pub use types::*;

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Listings,
}

// --- Contract State ---

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    /// Administrator: lists stickers, toggles them, rotates privilege.
    pub owner_id: AccountId,
    /// Payment recipient; independent of the administrator by design.
    pub treasury_id: AccountId,
    /// Item ledger collaborator; purchases fail until it is bound.
    pub sticker_contract: Option<AccountId>,
    pub listings: IterableMap<StickerId, Listing>,
}
