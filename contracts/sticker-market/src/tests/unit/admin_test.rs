use near_sdk::json_types::U128;
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

use crate::tests::test_utils::*;
use crate::*;

#[test]
fn new_wires_identities() {
    let contract = new_contract();
    assert_eq!(contract.get_owner(), owner());
    assert_eq!(contract.get_treasury(), treasury());
    assert_eq!(contract.get_sticker_contract(), Some(ledger()));
}

#[test]
fn new_without_ledger_leaves_it_unbound() {
    testing_env!(context(owner()).build());
    let contract = Contract::new(owner(), treasury(), None);
    assert_eq!(contract.get_sticker_contract(), None);
}

#[test]
fn transfer_ownership_is_terminal() {
    let mut contract = new_contract();

    testing_env!(context_with_deposit(owner(), 1).build());
    contract.transfer_ownership(buyer()).unwrap();
    assert_eq!(contract.get_owner(), buyer());

    let logs = get_logs();
    assert!(
        logs.iter().any(|l| l.contains("ownership_transferred")),
        "Expected ownership_transferred event, got: {:?}",
        logs
    );

    // The old owner permanently loses rights.
    testing_env!(context(owner()).build());
    let err = contract
        .list_sticker(1, "ipfs://Q".into(), 10, token_a(), U128(1), None)
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));

    // The new owner holds them.
    testing_env!(context(buyer()).build());
    contract
        .list_sticker(1, "ipfs://Q".into(), 10, token_a(), U128(1), None)
        .unwrap();
}

#[test]
fn transfer_ownership_requires_one_yocto() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let err = contract.transfer_ownership(buyer()).unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
    assert_eq!(contract.get_owner(), owner());
}

#[test]
fn transfer_ownership_rejects_non_owner() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(buyer(), 1).build());
    let err = contract.transfer_ownership(buyer()).unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}

#[test]
fn transfer_ownership_rejects_self_transfer() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.transfer_ownership(owner()).unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn set_sticker_contract_rebinds_ledger() {
    let mut contract = new_contract();
    let other: near_sdk::AccountId = "stickers-v2.near".parse().unwrap();

    testing_env!(context(owner()).build());
    contract.set_sticker_contract(other.clone()).unwrap();
    assert_eq!(contract.get_sticker_contract(), Some(other));
}

#[test]
fn set_sticker_contract_rejects_non_owner() {
    let mut contract = new_contract();
    testing_env!(context(buyer()).build());
    let err = contract.set_sticker_contract(ledger()).unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}

#[test]
fn set_treasury_rotates_recipient() {
    let mut contract = new_contract();

    testing_env!(context(owner()).build());
    contract.set_treasury(buyer()).unwrap();
    assert_eq!(contract.get_treasury(), buyer());

    let logs = get_logs();
    assert!(
        logs.iter().any(|l| l.contains("treasury_updated")),
        "Expected treasury_updated event, got: {:?}",
        logs
    );
}

#[test]
fn set_treasury_rejects_non_owner() {
    let mut contract = new_contract();
    testing_env!(context(buyer()).build());
    let err = contract.set_treasury(buyer()).unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}
