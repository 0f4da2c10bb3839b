//! Address-derivation properties: determinism, collision-freedom, and
//! reproducibility of the canonical bump.

use anchor_lang::prelude::Pubkey;
use custodial_vault::constants::{
    AUTHORITY_SEED, TOKEN_ACCOUNT_SEED, USER_TRANSFERS_SEED, VAULT_SEED,
};
use custodial_vault::pda;

#[test]
fn same_seeds_derive_same_addresses() {
    let owner = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let depositor = Pubkey::new_unique();

    let (vault_a, vault_bump_a) = pda::vault_address(&owner, &mint, &custodial_vault::ID);
    let (vault_b, vault_bump_b) = pda::vault_address(&owner, &mint, &custodial_vault::ID);
    assert_eq!(vault_a, vault_b);
    assert_eq!(vault_bump_a, vault_bump_b);

    assert_eq!(
        pda::authority_address(&vault_a, &custodial_vault::ID),
        pda::authority_address(&vault_b, &custodial_vault::ID),
    );
    assert_eq!(
        pda::token_account_address(&vault_a, &custodial_vault::ID),
        pda::token_account_address(&vault_b, &custodial_vault::ID),
    );
    assert_eq!(
        pda::user_transfers_address(&vault_a, &depositor, &custodial_vault::ID),
        pda::user_transfers_address(&vault_b, &depositor, &custodial_vault::ID),
    );
}

#[test]
fn distinct_seed_tuples_do_not_collide() {
    let owner = Pubkey::new_unique();
    let mint_a = Pubkey::new_unique();
    let mint_b = Pubkey::new_unique();

    let (vault_a, _) = pda::vault_address(&owner, &mint_a, &custodial_vault::ID);
    let (vault_b, _) = pda::vault_address(&owner, &mint_b, &custodial_vault::ID);
    assert_ne!(vault_a, vault_b, "one vault per (owner, mint) pair");

    let (ledger_a, _) =
        pda::user_transfers_address(&vault_a, &Pubkey::new_unique(), &custodial_vault::ID);
    let (ledger_b, _) =
        pda::user_transfers_address(&vault_a, &Pubkey::new_unique(), &custodial_vault::ID);
    assert_ne!(ledger_a, ledger_b, "one ledger per depositor");

    // the four roles of one vault never alias each other
    let (authority, _) = pda::authority_address(&vault_a, &custodial_vault::ID);
    let (tokens, _) = pda::token_account_address(&vault_a, &custodial_vault::ID);
    assert_ne!(authority, tokens);
    assert_ne!(vault_a, authority);
    assert_ne!(vault_a, tokens);
}

#[test]
fn stored_bump_reproduces_the_canonical_address() {
    let owner = Pubkey::new_unique();
    let mint = Pubkey::new_unique();

    let (vault, vault_bump) = pda::vault_address(&owner, &mint, &custodial_vault::ID);
    let rebuilt = Pubkey::create_program_address(
        &[VAULT_SEED, owner.as_ref(), mint.as_ref(), &[vault_bump]],
        &custodial_vault::ID,
    )
    .unwrap();
    assert_eq!(rebuilt, vault);

    let (authority, authority_bump) = pda::authority_address(&vault, &custodial_vault::ID);
    let rebuilt = Pubkey::create_program_address(
        &[AUTHORITY_SEED, vault.as_ref(), &[authority_bump]],
        &custodial_vault::ID,
    )
    .unwrap();
    assert_eq!(rebuilt, authority);

    let (tokens, tokens_bump) = pda::token_account_address(&vault, &custodial_vault::ID);
    let rebuilt = Pubkey::create_program_address(
        &[TOKEN_ACCOUNT_SEED, vault.as_ref(), &[tokens_bump]],
        &custodial_vault::ID,
    )
    .unwrap();
    assert_eq!(rebuilt, tokens);

    let depositor = Pubkey::new_unique();
    let (ledger, ledger_bump) =
        pda::user_transfers_address(&vault, &depositor, &custodial_vault::ID);
    let rebuilt = Pubkey::create_program_address(
        &[
            USER_TRANSFERS_SEED,
            vault.as_ref(),
            depositor.as_ref(),
            &[ledger_bump],
        ],
        &custodial_vault::ID,
    )
    .unwrap();
    assert_eq!(rebuilt, ledger);
}

#[test]
fn derived_addresses_have_no_private_key() {
    let owner = Pubkey::new_unique();
    let mint = Pubkey::new_unique();

    let (vault, _) = pda::vault_address(&owner, &mint, &custodial_vault::ID);
    let (authority, _) = pda::authority_address(&vault, &custodial_vault::ID);

    assert!(!vault.is_on_curve());
    assert!(!authority.is_on_curve());
}
