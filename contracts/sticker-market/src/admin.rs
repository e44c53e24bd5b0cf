use near_sdk::store::IterableMap;
use near_sdk::{env, near, AccountId};

use crate::errors::MarketError;
use crate::events::MarketEvent;
use crate::internal::check_one_yocto;
use crate::{Contract, ContractExt, StorageKey};

#[near]
impl Contract {
    // --- Init ---

    /// `owner_id` is the administrator; `treasury_id` receives payments.
    /// They may be the same account — deployment wiring decides.
    #[init]
    pub fn new(
        owner_id: AccountId,
        treasury_id: AccountId,
        sticker_contract: Option<AccountId>,
    ) -> Self {
        Self {
            owner_id,
            treasury_id,
            sticker_contract,
            listings: IterableMap::new(StorageKey::Listings),
        }
    }

    // --- Admin ---

    /// One-shot privilege reassignment; the old owner permanently loses
    /// rights. Requires 1 yoctoNEAR. Owner only.
    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MarketError> {
        check_one_yocto()?;
        self.check_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(MarketError::InvalidInput(
                "New owner must differ from current owner".into(),
            ));
        }
        let old_owner = std::mem::replace(&mut self.owner_id, new_owner);
        MarketEvent::OwnershipTransferred {
            old_owner,
            new_owner: self.owner_id.clone(),
        }
        .emit();
        Ok(())
    }

    /// Bind or rotate the item ledger. Owner only.
    #[handle_result]
    pub fn set_sticker_contract(&mut self, sticker_contract: AccountId) -> Result<(), MarketError> {
        self.check_owner(&env::predecessor_account_id())?;
        self.sticker_contract = Some(sticker_contract.clone());
        MarketEvent::StickerContractUpdated { sticker_contract }.emit();
        Ok(())
    }

    /// Rotate the payment recipient. Owner only.
    #[handle_result]
    pub fn set_treasury(&mut self, treasury_id: AccountId) -> Result<(), MarketError> {
        self.check_owner(&env::predecessor_account_id())?;
        self.treasury_id = treasury_id.clone();
        MarketEvent::TreasuryUpdated { treasury_id }.emit();
        Ok(())
    }
}
