//! Listing state and JSON boundary types.

use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};
use sticker_allowlist::{Hash32, EMPTY_ROOT};

/// Stickers are identified by an integer id, unique per listing.
pub type StickerId = u64;

/// Only `Fixed` listings are purchasable. `Unset` is the state a storage miss
/// would decode to; it never reaches storage through `list_sticker`.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceType {
    Unset,
    Fixed,
}

/// Sale configuration and remaining inventory for one sticker id.
#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    /// Opaque metadata pointer, immutable once set.
    pub uri: String,
    pub price_type: PriceType,
    /// NEP-141 contract accepted as payment for this listing.
    pub token: AccountId,
    /// Amount of `token` charged per unit, fixed at listing time.
    pub price: u128,
    /// Total units made available at listing time.
    pub amount: u32,
    /// Invariant: `0 <= amount_left <= amount`.
    pub amount_left: u32,
    /// Merkle root of the allowlist; all-zero means anyone may buy.
    /// Immutable after listing; changing the allowlist requires relisting.
    pub whitelist_top_hash: Hash32,
    pub enabled: bool,
}

impl Listing {
    pub fn purchasable(&self) -> bool {
        self.price_type == PriceType::Fixed && self.enabled && self.amount_left > 0
    }

    pub fn gated(&self) -> bool {
        self.whitelist_top_hash != EMPTY_ROOT
    }

    /// Read-only projection for views.
    pub fn data(&self) -> StickerData {
        StickerData {
            uri: self.uri.clone(),
            price_type: self.price_type,
            token: self.token.clone(),
            price: U128(self.price),
            amount: self.amount,
            amount_left: self.amount_left,
            whitelist_top_hash: hex::encode(self.whitelist_top_hash),
            enabled: self.enabled,
        }
    }
}

/// JSON projection of a [`Listing`]; `whitelist_top_hash` is hex-encoded.
#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct StickerData {
    pub uri: String,
    pub price_type: PriceType,
    pub token: AccountId,
    pub price: U128,
    pub amount: u32,
    pub amount_left: u32,
    pub whitelist_top_hash: String,
    pub enabled: bool,
}

/// Purchase request carried in the `msg` of `ft_transfer_call`.
#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct BuyMessage {
    pub sticker_id: StickerId,
    /// Sibling hashes, hex-encoded; empty for ungated listings.
    #[serde(default)]
    pub proof: Vec<String>,
}
