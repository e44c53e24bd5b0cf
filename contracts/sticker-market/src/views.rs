// View methods for querying listing state

use near_sdk::{near, AccountId};

use crate::types::{StickerData, StickerId};
use crate::{Contract, ContractExt};

#[near]
impl Contract {
    /// Read-only projection of one listing; `None` if the id was never listed.
    pub fn sticker_data(&self, sticker_id: StickerId) -> Option<StickerData> {
        self.listings.get(&sticker_id).map(|l| l.data())
    }

    /// Paginated projection of all listings, ordered by insertion.
    pub fn listed_stickers(
        &self,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<(StickerId, StickerData)> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;
        self.listings
            .iter()
            .skip(start)
            .take(limit)
            .map(|(id, l)| (*id, l.data()))
            .collect()
    }

    pub fn get_owner(&self) -> AccountId {
        self.owner_id.clone()
    }

    pub fn get_treasury(&self) -> AccountId {
        self.treasury_id.clone()
    }

    pub fn get_sticker_contract(&self) -> Option<AccountId> {
        self.sticker_contract.clone()
    }
}
