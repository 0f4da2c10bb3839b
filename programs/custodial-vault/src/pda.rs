//! Deterministic address derivation for the vault's sub-accounts.
//!
//! Each helper returns the canonical `(address, bump)` pair for its seed
//! tuple. The same tuple always derives the same address, and the derived
//! address has no corresponding private key, so only this program can sign
//! for it. The account constraints in `instructions/` enforce exactly these
//! derivations against the bumps stored at initialization.

use anchor_lang::prelude::*;

use crate::constants::{AUTHORITY_SEED, TOKEN_ACCOUNT_SEED, USER_TRANSFERS_SEED, VAULT_SEED};

/// vault ← (owner, mint)
pub fn vault_address(owner: &Pubkey, mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, owner.as_ref(), mint.as_ref()], program_id)
}

/// transfer authority ← vault
pub fn authority_address(vault: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AUTHORITY_SEED, vault.as_ref()], program_id)
}

/// escrow token account ← vault
pub fn token_account_address(vault: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_ACCOUNT_SEED, vault.as_ref()], program_id)
}

/// depositor ledger ← (vault, depositor)
pub fn user_transfers_address(
    vault: &Pubkey,
    depositor: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[USER_TRANSFERS_SEED, vault.as_ref(), depositor.as_ref()],
        program_id,
    )
}
