//! Listing registry: creation and enable/disable administration.

use near_sdk::json_types::U128;
use near_sdk::{env, near, AccountId};
use sticker_allowlist::EMPTY_ROOT;

use crate::constants::MAX_URI_LEN;
use crate::errors::MarketError;
use crate::events::MarketEvent;
use crate::internal::parse_hash32;
use crate::types::{Listing, PriceType, StickerId};
use crate::{Contract, ContractExt};

#[near]
impl Contract {
    /// Create a listing, or overwrite an existing one for the same id.
    /// Overwriting resets `amount_left` even mid-sale; the emitted event
    /// carries `relist: true` so the history stays visible. Owner only.
    ///
    /// `whitelist_top_hash` is a 32-byte hex root; omit it to let anyone buy.
    /// Token liveness is not checked here — a dead token simply makes every
    /// purchase fail at payment time.
    #[handle_result]
    pub fn list_sticker(
        &mut self,
        sticker_id: StickerId,
        uri: String,
        amount: u32,
        token: AccountId,
        price: U128,
        whitelist_top_hash: Option<String>,
    ) -> Result<(), MarketError> {
        self.check_owner(&env::predecessor_account_id())?;
        if amount == 0 {
            return Err(MarketError::InvalidInput(
                "Amount must be greater than 0".into(),
            ));
        }
        if uri.len() > MAX_URI_LEN {
            return Err(MarketError::InvalidInput(format!(
                "URI too long (max {} bytes)",
                MAX_URI_LEN
            )));
        }

        let root = match &whitelist_top_hash {
            Some(s) => parse_hash32(s).ok_or_else(|| {
                MarketError::InvalidInput("whitelist_top_hash must be 32 bytes of hex".into())
            })?,
            None => EMPTY_ROOT,
        };

        let relist = self.listings.contains_key(&sticker_id);
        self.listings.insert(
            sticker_id,
            Listing {
                uri: uri.clone(),
                price_type: PriceType::Fixed,
                token: token.clone(),
                price: price.0,
                amount,
                amount_left: amount,
                whitelist_top_hash: root,
                enabled: true,
            },
        );

        MarketEvent::StickerListed {
            sticker_id,
            uri,
            amount,
            token,
            price,
            whitelist_top_hash: (root != EMPTY_ROOT).then(|| hex::encode(root)),
            relist,
        }
        .emit();
        Ok(())
    }

    /// Idempotent; `amount_left` is untouched. Owner only.
    #[handle_result]
    pub fn enable_listed_sticker(&mut self, sticker_id: StickerId) -> Result<(), MarketError> {
        self.set_enabled(sticker_id, true)
    }

    /// Idempotent; sale progress is preserved across disable/enable cycles.
    /// Owner only.
    #[handle_result]
    pub fn disable_listed_sticker(&mut self, sticker_id: StickerId) -> Result<(), MarketError> {
        self.set_enabled(sticker_id, false)
    }
}

impl Contract {
    fn set_enabled(&mut self, sticker_id: StickerId, enabled: bool) -> Result<(), MarketError> {
        self.check_owner(&env::predecessor_account_id())?;
        let listing = self
            .listings
            .get_mut(&sticker_id)
            .ok_or(MarketError::NotForSale)?;
        if listing.enabled == enabled {
            return Ok(());
        }
        listing.enabled = enabled;
        if enabled {
            MarketEvent::StickerEnabled { sticker_id }.emit();
        } else {
            MarketEvent::StickerDisabled { sticker_id }.emit();
        }
        Ok(())
    }
}
