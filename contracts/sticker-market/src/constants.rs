//! Gas budgets and fixed limits.

use near_sdk::{Gas, NearToken};

/// Gas for the item-ledger `mint_one` call.
pub const GAS_STICKER_MINT: Gas = Gas::from_tgas(30);

/// Gas for the `resolve_purchase` callback.
pub const GAS_RESOLVE_PURCHASE: Gas = Gas::from_tgas(20);

/// Gas for forwarding payment to the treasury.
pub const GAS_FT_TRANSFER: Gas = Gas::from_tgas(10);

/// NEP-141 `ft_transfer` security deposit.
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

/// Listing metadata pointers longer than this are rejected.
pub const MAX_URI_LEN: usize = 256;

/// Proofs longer than this cannot correspond to any realistic allowlist.
pub const MAX_PROOF_LEN: usize = 64;
