//! Purchase engine: NEP-141 receiver plus the mint-resolution callback.
//!
//! The buyer calls `ft_transfer_call(market, amount, msg)` on the payment
//! token; the token contract then invokes `ft_on_transfer` here. A rejected
//! purchase panics, which makes the token contract return the full amount to
//! the buyer — no market state has changed at that point.
//!
//! On acceptance the inventory decrement is committed *before* the
//! cross-contract mint, and `resolve_purchase` compensates (re-credit plus
//! full refund) if the mint fails. Either every effect of a purchase lands or
//! none does.

use near_sdk::json_types::U128;
use near_sdk::{env, near, AccountId, Promise, PromiseOrValue, PromiseResult};
use sticker_allowlist::{leaf_hash, verify, Hash32};

use crate::constants::{GAS_FT_TRANSFER, GAS_RESOLVE_PURCHASE, GAS_STICKER_MINT, MAX_PROOF_LEN, ONE_YOCTO};
use crate::errors::MarketError;
use crate::events::MarketEvent;
use crate::external::{ext_ft, ext_sticker};
use crate::internal::parse_hash32;
use crate::types::{BuyMessage, StickerId};
use crate::{Contract, ContractExt};

#[near]
impl Contract {
    /// NEP-141 receiver; `msg` is JSON `{"sticker_id": <id>, "proof": [..]}`.
    /// The predecessor is the payment token contract, `sender_id` the buyer.
    pub fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> PromiseOrValue<U128> {
        match self.internal_buy(&sender_id, amount, &msg) {
            Ok(promise) => PromiseOrValue::Promise(promise),
            Err(e) => env::panic_str(&e.to_string()),
        }
    }

    /// Only callable by this contract. Must not panic: the mint outcome is
    /// already fixed, and the return value decides the buyer's refund.
    #[private]
    pub fn resolve_purchase(
        &mut self,
        sticker_id: StickerId,
        buyer_id: AccountId,
        token: AccountId,
        price: U128,
        attached: U128,
    ) -> U128 {
        self.finalize_purchase(mint_succeeded(), sticker_id, buyer_id, token, price, attached)
    }
}

impl Contract {
    pub(crate) fn finalize_purchase(
        &mut self,
        mint_ok: bool,
        sticker_id: StickerId,
        buyer_id: AccountId,
        token: AccountId,
        price: U128,
        attached: U128,
    ) -> U128 {
        if mint_ok {
            ext_ft::ext(token.clone())
                .with_attached_deposit(ONE_YOCTO)
                .with_static_gas(GAS_FT_TRANSFER)
                .ft_transfer(
                    self.treasury_id.clone(),
                    price,
                    Some(format!("Sticker {} sale", sticker_id)),
                );

            let amount_left = self
                .listings
                .get(&sticker_id)
                .map(|l| l.amount_left)
                .unwrap_or(0);
            MarketEvent::StickerPurchased {
                sticker_id,
                buyer_id,
                token,
                price,
                amount_left,
            }
            .emit();
            // Anything beyond the price was never consumed.
            return U128(attached.0.saturating_sub(price.0));
        }

        // Mint failed: re-credit the unit. Capped at `amount` in case a
        // relist landed between the commit and this callback.
        if let Some(listing) = self.listings.get_mut(&sticker_id) {
            if listing.amount_left < listing.amount {
                listing.amount_left += 1;
            }
        }
        MarketEvent::PurchaseFailed {
            sticker_id,
            buyer_id,
            reason: "sticker_mint_failed".into(),
        }
        .emit();
        U128(attached.0)
    }

    fn internal_buy(
        &mut self,
        buyer_id: &AccountId,
        attached: U128,
        msg: &str,
    ) -> Result<Promise, MarketError> {
        let request: BuyMessage = near_sdk::serde_json::from_str(msg)
            .map_err(|_| MarketError::InvalidInput("Malformed purchase message".into()))?;

        let listing = self
            .listings
            .get(&request.sticker_id)
            .ok_or(MarketError::NotForSale)?;
        if !listing.purchasable() {
            return Err(MarketError::NotForSale);
        }

        let token = env::predecessor_account_id();
        if token != listing.token {
            return Err(MarketError::wrong_token(&listing.token));
        }
        if attached.0 < listing.price {
            return Err(MarketError::underpaid(attached.0, listing.price));
        }

        // Zero root means no allowlist: unconditionally authorized. This is
        // engine policy; the verifier itself knows nothing about sentinels.
        if listing.gated() {
            let proof = decode_proof(&request.proof)?;
            if !verify(&listing.whitelist_top_hash, leaf_hash(buyer_id.as_str()), &proof) {
                return Err(MarketError::InvalidProof);
            }
        }

        let sticker_contract = self
            .sticker_contract
            .clone()
            .ok_or_else(MarketError::ledger_unset)?;
        let price = listing.price;

        // Commit before the cross-contract call; resolve_purchase re-credits
        // if the mint fails.
        if let Some(listing) = self.listings.get_mut(&request.sticker_id) {
            listing.amount_left -= 1;
        }

        Ok(ext_sticker::ext(sticker_contract)
            .with_static_gas(GAS_STICKER_MINT)
            .mint_one(request.sticker_id, buyer_id.clone())
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(GAS_RESOLVE_PURCHASE)
                    .resolve_purchase(
                        request.sticker_id,
                        buyer_id.clone(),
                        token,
                        U128(price),
                        attached,
                    ),
            ))
    }
}

fn decode_proof(proof: &[String]) -> Result<Vec<Hash32>, MarketError> {
    if proof.len() > MAX_PROOF_LEN {
        return Err(MarketError::InvalidProof);
    }
    proof
        .iter()
        .map(|s| parse_hash32(s).ok_or(MarketError::InvalidProof))
        .collect()
}

fn mint_succeeded() -> bool {
    env::promise_results_count() == 1
        && matches!(env::promise_result(0), PromiseResult::Successful(_))
}
