// Internal helper functions for the sticker market

use near_sdk::{env, AccountId, NearToken};
use sticker_allowlist::Hash32;

use crate::errors::MarketError;
use crate::Contract;

impl Contract {
    pub(crate) fn check_owner(&self, caller: &AccountId) -> Result<(), MarketError> {
        if caller != &self.owner_id {
            return Err(MarketError::only_owner());
        }
        Ok(())
    }
}

/// Full-access-key guard for privilege-moving operations.
pub(crate) fn check_one_yocto() -> Result<(), MarketError> {
    if env::attached_deposit() != NearToken::from_yoctonear(1) {
        return Err(MarketError::Unauthorized(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

/// Decode a 32-byte hex string, with or without a `0x` prefix.
pub(crate) fn parse_hash32(s: &str) -> Option<Hash32> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s).ok()?;
    bytes.try_into().ok()
}
