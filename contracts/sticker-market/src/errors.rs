//! Typed error handling for the sticker market.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(MarketError::Xxx)`, the SDK calls `env::panic_str()` with the Display
//! message — same on-wire behaviour as raw panics, but with structured,
//! testable codes.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum MarketError {
    /// Listing missing, disabled, or exhausted.
    NotForSale,
    /// Allowlist membership check failed.
    InvalidProof,
    /// Payment collaborator mismatch or amount below price.
    PaymentFailed(String),
    /// Caller lacks the administrator capability.
    Unauthorized(String),
    /// Invalid parameters or data from the caller.
    InvalidInput(String),
    /// Operation not allowed given current contract state.
    InvalidState(String),
}

impl std::fmt::Display for MarketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotForSale => write!(f, "Sticker not for sale"),
            Self::InvalidProof => write!(f, "Invalid Merkle proof"),
            Self::PaymentFailed(msg) => write!(f, "Payment failed: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl MarketError {
    pub fn only_owner() -> Self {
        Self::Unauthorized("Only the contract owner can perform this action".into())
    }
    pub fn wrong_token(expected: &near_sdk::AccountId) -> Self {
        Self::PaymentFailed(format!("Listing is priced in {}", expected))
    }
    pub fn underpaid(attached: u128, price: u128) -> Self {
        Self::PaymentFailed(format!(
            "Attached amount {} is below price {}",
            attached, price
        ))
    }
    pub fn ledger_unset() -> Self {
        Self::InvalidState("Sticker contract not configured".into())
    }
}
