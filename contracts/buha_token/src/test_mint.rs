//! Term minting: start_mint, claim, claim_early.

#![cfg(test)]

use crate::test_helpers::*;
use crate::{default_config, reward, ContractError};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

// ═══════════════════════════════════════════════════════════════════
// 1. start_mint
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_start_mint_success() {
    let e = Env::default();
    set_time(&e, 1_000);
    let (client, _admin, user, _cid) = setup(&e);

    let position = client.start_mint(&user, &100_u32);

    assert_eq!(position.term_days, 100);
    assert_eq!(position.started_at, 1_000);
    assert_eq!(position.maturity_at, 1_000 + 100 * ONE_DAY);
    assert_eq!(client.user_mints(&user), Some(position));
    assert_eq!(client.active_minters(), 1);
}

#[test]
fn test_start_mint_min_and_max_term() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);
    let other = Address::generate(&e);
    let max = default_config().max_mint_term_days;

    client.start_mint(&user, &1_u32);
    client.start_mint(&other, &max);

    assert_eq!(client.active_minters(), 2);
}

#[test]
fn test_start_mint_zero_term_fails() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);

    let err = contract_err(client.try_start_mint(&user, &0_u32));

    assert_eq!(err, ContractError::InvalidTerm);
    assert_eq!(client.user_mints(&user), None);
}

#[test]
fn test_start_mint_above_max_term_leaves_counters_unchanged() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);
    let too_long = default_config().max_mint_term_days + 1;

    let err = contract_err(client.try_start_mint(&user, &too_long));

    assert_eq!(err, ContractError::InvalidTerm);
    assert_eq!(client.active_minters(), 0);
    assert_eq!(client.user_mints(&user), None);
}

#[test]
fn test_start_mint_twice_fails() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);
    client.start_mint(&user, &10_u32);

    let err = contract_err(client.try_start_mint(&user, &20_u32));

    assert_eq!(err, ContractError::PositionExists);
    assert_eq!(client.user_mints(&user).unwrap().term_days, 10);
    assert_eq!(client.active_minters(), 1);
}

#[test]
fn test_start_mint_before_initialize_fails() {
    let e = Env::default();
    e.mock_all_auths();
    let contract_id = e.register(crate::BuhaToken, ());
    let client = crate::BuhaTokenClient::new(&e, &contract_id);
    let user = Address::generate(&e);

    let err = contract_err(client.try_start_mint(&user, &10_u32));

    assert_eq!(err, ContractError::NotInitialized);
}

// ═══════════════════════════════════════════════════════════════════
// 2. claim
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_claim_before_maturity_fails() {
    let e = Env::default();
    set_time(&e, 1_000);
    let (client, _admin, user, _cid) = setup(&e);
    client.start_mint(&user, &10_u32);
    set_time(&e, 1_000 + 10 * ONE_DAY - 1);

    let err = contract_err(client.try_claim(&user));

    assert_eq!(err, ContractError::NotMature);
    assert!(client.user_mints(&user).is_some());
    assert_eq!(client.active_minters(), 1);
}

#[test]
fn test_claim_at_exact_maturity_pays_full_reward() {
    let e = Env::default();
    set_time(&e, 1_000);
    let (client, _admin, user, _cid) = setup(&e);
    client.start_mint(&user, &100_u32);
    set_time(&e, 1_000 + 100 * ONE_DAY);

    let reward = client.claim(&user);

    let full = reward::full_mint_reward(&default_config(), 100).unwrap();
    assert_eq!(reward, full);
    assert_eq!(client.balance(&user), full);
    assert_eq!(client.user_mints(&user), None);
    assert_eq!(client.active_minters(), 0);
}

#[test]
fn test_claim_long_after_maturity_pays_same_full_reward() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);
    client.start_mint(&user, &30_u32);
    advance(&e, 400 * ONE_DAY);

    let reward = client.claim(&user);

    assert_eq!(
        reward,
        reward::full_mint_reward(&default_config(), 30).unwrap()
    );
}

#[test]
fn test_claim_without_position_fails() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);

    assert_eq!(
        contract_err(client.try_claim(&user)),
        ContractError::NoPosition
    );
}

#[test]
fn test_claim_twice_fails() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);
    client.start_mint(&user, &1_u32);
    advance(&e, ONE_DAY);
    client.claim(&user);

    assert_eq!(
        contract_err(client.try_claim(&user)),
        ContractError::NoPosition
    );
}

#[test]
fn test_scenario_fresh_account_mint_and_claim() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);
    assert_eq!(client.total_supply(), 0);

    let position = client.start_mint(&user, &100_u32);
    assert_eq!(client.active_minters(), 1);

    set_time(&e, position.maturity_at);
    let r = client.claim(&user);

    assert!(r >= 0);
    assert_eq!(client.active_minters(), 0);
    assert_eq!(client.total_supply(), r);
}

#[test]
fn test_remint_after_claim() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);
    client.start_mint(&user, &5_u32);
    advance(&e, 5 * ONE_DAY);
    client.claim(&user);

    let second = client.start_mint(&user, &7_u32);

    assert_eq!(second.term_days, 7);
    assert_eq!(client.active_minters(), 1);
}

// ═══════════════════════════════════════════════════════════════════
// 3. claim_early
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_claim_early_at_start_pays_zero() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);
    client.start_mint(&user, &100_u32);

    let reward = client.claim_early(&user);

    assert_eq!(reward, 0);
    assert_eq!(client.user_mints(&user), None);
    assert_eq!(client.active_minters(), 0);
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_claim_early_halfway_is_below_full_reward() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);
    client.start_mint(&user, &100_u32);
    advance(&e, 50 * ONE_DAY);

    let reward = client.claim_early(&user);

    let full = reward::full_mint_reward(&default_config(), 100).unwrap();
    assert!(reward > 0);
    assert!(reward < full);
    assert_eq!(client.balance(&user), reward);
}

#[test]
fn test_claim_early_one_second_before_maturity_is_below_full_reward() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);
    let position = client.start_mint(&user, &10_u32);
    set_time(&e, position.maturity_at - 1);

    let reward = client.claim_early(&user);

    assert!(reward < reward::full_mint_reward(&default_config(), 10).unwrap());
}

#[test]
fn test_claim_early_grows_with_elapsed_time() {
    let e = Env::default();
    let (client, _admin, _user, _cid) = setup(&e);
    let early = Address::generate(&e);
    let late = Address::generate(&e);

    client.start_mint(&early, &100_u32);
    client.start_mint(&late, &100_u32);

    advance(&e, 10 * ONE_DAY);
    let first = client.claim_early(&early);
    advance(&e, 30 * ONE_DAY);
    let second = client.claim_early(&late);

    assert!(first <= second);
}

#[test]
fn test_claim_early_at_maturity_fails() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);
    let position = client.start_mint(&user, &10_u32);
    set_time(&e, position.maturity_at);

    let err = contract_err(client.try_claim_early(&user));

    assert_eq!(err, ContractError::AlreadyMature);
    assert!(client.user_mints(&user).is_some());
    assert_eq!(client.active_minters(), 1);
}

#[test]
fn test_claim_early_without_position_fails() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);

    assert_eq!(
        contract_err(client.try_claim_early(&user)),
        ContractError::NoPosition
    );
}

// ═══════════════════════════════════════════════════════════════════
// 4. Preview
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_mint_reward_preview_tracks_claim_paths() {
    let e = Env::default();
    let (client, _admin, user, _cid) = setup(&e);
    assert_eq!(client.mint_reward_preview(&user), None);

    let position = client.start_mint(&user, &20_u32);
    advance(&e, 5 * ONE_DAY);
    let early_preview = client.mint_reward_preview(&user).unwrap();

    set_time(&e, position.maturity_at);
    let full_preview = client.mint_reward_preview(&user).unwrap();
    let reward = client.claim(&user);

    assert!(early_preview < full_preview);
    assert_eq!(full_preview, reward);
    assert_eq!(client.mint_reward_preview(&user), None);
}
