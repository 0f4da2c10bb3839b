#![allow(unexpected_cfgs)]

//! # Custodial Vault — Solana Anchor Program
//!
//! Custodial SPL-token vault holding balances on behalf of a designated owner:
//!  - one vault per (owner, mint) pair, escrow held on a program-derived account
//!  - per-depositor deposit/withdraw ledgers, created lazily on first deposit
//!  - canonical PDAs revalidated on every instruction, checked arithmetic
//!  - outgoing transfers signed by a derived authority, never by a keypair

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::*;

declare_id!("BdGhs2wp32XED7oFfj217UeCHoPDWcNJw6WYu82NTpLy");

#[program]
pub mod custodial_vault {
    use super::*;

    /// Create the vault record and its escrow token account for an
    /// (owner, mint) pair.
    pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
        initialize::handler(ctx)
    }

    /// Move `amount` tokens from the depositor into escrow.
    pub fn deposit(ctx: Context<TransferAccounts>, amount: u64) -> Result<()> {
        deposit::handler(ctx, amount)
    }

    /// Release `amount` tokens from escrow back to the depositor.
    pub fn withdraw(ctx: Context<TransferAccounts>, amount: u64) -> Result<()> {
        withdraw::handler(ctx, amount)
    }
}
